use crate::graph::{GraphData, Node, NodeKind, Relation, RelationKind};

fn civ(id: &str, kind: NodeKind, label: &str, start: f64, end: f64, longitude: f64) -> Node {
	Node::new(id, kind, label)
		.starting(start)
		.ending(end)
		.at_longitude(longitude)
}

/// Civilizations from the first cities to the early modern period.
pub fn civilizations() -> GraphData {
	use NodeKind::*;
	use RelationKind::*;

	let nodes = vec![
		civ("sumer", Trunk, "Sumer", -3400.0, -2000.0, 45.9)
			.with_description("City-states of southern Mesopotamia; cuneiform writing."),
		civ("egypt", Trunk, "Ancient Egypt", -3100.0, -30.0, 31.2)
			.with_description("Nile valley kingdoms from unification to Roman annexation."),
		civ("indus", Trunk, "Indus Valley", -3300.0, -1300.0, 68.1)
			.with_description("Planned cities of Harappa and Mohenjo-daro."),
		civ("shang", Trunk, "Shang China", -1600.0, -1046.0, 114.3)
			.with_description("Bronze-age dynasty of the Yellow River; oracle bones."),
		civ("olmec", Trunk, "Olmec", -1600.0, -400.0, -94.5)
			.with_description("Earliest major civilization of Mesoamerica."),
		civ("minoan", Trunk, "Minoan Crete", -3000.0, -1100.0, 25.1),
		civ("akkad", Vine, "Akkadian Empire", -2334.0, -2154.0, 44.4),
		civ("babylon", Vine, "Babylonia", -1894.0, -539.0, 44.4)
			.with_description("Code of Hammurabi; astronomy and mathematics."),
		civ("assyria", Vine, "Assyria", -2025.0, -609.0, 43.1),
		civ("mycenae", Vine, "Mycenaean Greece", -1600.0, -1100.0, 22.8),
		civ("phoenicia", Vine, "Phoenicia", -1500.0, -300.0, 35.5)
			.with_description("Maritime traders; the first alphabet."),
		civ("zhou", Vine, "Zhou China", -1046.0, -256.0, 108.9),
		civ("vedic", Vine, "Vedic India", -1500.0, -500.0, 77.2),
		civ("persia", CrossVine, "Achaemenid Persia", -550.0, -330.0, 52.9),
		civ("greece", Vine, "Classical Greece", -800.0, -146.0, 23.7)
			.with_description("Athens, Sparta and the polis."),
		civ("maya", Vine, "Maya", -2000.0, 1697.0, -89.6),
		civ("carthage", Vine, "Carthage", -814.0, -146.0, 10.3),
		civ("rome", CrossVine, "Rome", -753.0, 476.0, 12.5)
			.with_description("Republic and empire around the Mediterranean."),
		civ("maurya", Vine, "Maurya Empire", -322.0, -185.0, 85.1),
		civ("han", Vine, "Han China", -206.0, 220.0, 108.9),
		civ("byzantium", Vine, "Byzantine Empire", 330.0, 1453.0, 28.9),
		civ("islamic", CrossVine, "Islamic Caliphates", 632.0, 1258.0, 44.4)
			.with_description("Umayyad and Abbasid caliphates; House of Wisdom."),
		civ("tang", Vine, "Tang China", 618.0, 907.0, 108.9),
		civ("aztec", Vine, "Aztec Empire", 1428.0, 1521.0, -99.1),
		civ("inca", Trunk, "Inca Empire", 1438.0, 1533.0, -72.0),
		civ("ottoman", CrossVine, "Ottoman Empire", 1299.0, 1922.0, 32.9),
		civ("mughal", CrossVine, "Mughal Empire", 1526.0, 1857.0, 77.2),
	];

	let relations = vec![
		Relation::new("sumer", "akkad", Conquest),
		Relation::new("akkad", "babylon", Descent),
		Relation::new("sumer", "babylon", Influence)
			.with_description("Cuneiform and the Sumerian pantheon carried over."),
		Relation::new("akkad", "assyria", Descent),
		Relation::new("babylon", "persia", Conquest),
		Relation::new("assyria", "persia", Influence),
		Relation::new("egypt", "phoenicia", Trade),
		Relation::new("minoan", "mycenae", Influence),
		Relation::new("mycenae", "greece", Descent),
		Relation::new("phoenicia", "greece", Influence)
			.with_description("The Greek alphabet derives from the Phoenician."),
		Relation::new("phoenicia", "carthage", Descent),
		Relation::new("greece", "rome", Influence),
		Relation::new("carthage", "rome", Conquest),
		Relation::new("persia", "greece", Conquest),
		Relation::new("indus", "vedic", Influence),
		Relation::new("vedic", "maurya", Descent),
		Relation::new("persia", "maurya", Influence),
		Relation::new("shang", "zhou", Conquest),
		Relation::new("zhou", "han", Descent),
		Relation::new("han", "tang", Descent),
		Relation::new("olmec", "maya", Influence),
		Relation::new("maya", "aztec", Influence),
		Relation::new("rome", "byzantium", Descent),
		Relation::new("byzantium", "islamic", Trade),
		Relation::new("persia", "islamic", Influence),
		Relation::new("islamic", "tang", Trade)
			.with_description("Silk Road exchange; Battle of Talas."),
		Relation::new("byzantium", "ottoman", Conquest),
		Relation::new("islamic", "ottoman", Descent),
		Relation::new("islamic", "mughal", Influence),
	];

	GraphData { nodes, relations }
}
