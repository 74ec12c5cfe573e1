//! Node and relation records fed into the layout step.

use std::fmt;

/// Node type tag. The first three belong to the civilization tree, the rest
/// to the curriculum tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NodeKind {
	/// A root civilization.
	Trunk,
	/// A civilization descending from a single trunk.
	Vine,
	/// A civilization formed from several lineages.
	CrossVine,
	/// A school grade.
	Grade,
	/// A subject taught within a grade.
	Subject,
	/// A domain of a subject.
	Domain,
	/// A cluster of standards.
	Cluster,
	/// A single standard.
	Standard,
}

impl NodeKind {
	/// Box size `(width, height)` used when placing a node of this kind.
	pub fn size(self) -> (f64, f64) {
		match self {
			NodeKind::Trunk => (140.0, 48.0),
			NodeKind::Vine | NodeKind::CrossVine => (120.0, 40.0),
			NodeKind::Grade => (130.0, 44.0),
			NodeKind::Subject => (120.0, 40.0),
			NodeKind::Domain | NodeKind::Cluster => (110.0, 36.0),
			NodeKind::Standard => (90.0, 30.0),
		}
	}

	/// Fill colour for nodes that carry none of their own.
	pub fn default_color(self) -> &'static str {
		match self {
			NodeKind::Trunk => "#8c564b",
			NodeKind::Vine => "#2ca02c",
			NodeKind::CrossVine => "#17becf",
			NodeKind::Grade => "#1f77b4",
			NodeKind::Subject => "#ff7f0e",
			NodeKind::Domain => "#9467bd",
			NodeKind::Cluster => "#e377c2",
			NodeKind::Standard => "#7f7f7f",
		}
	}
}

impl fmt::Display for NodeKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			NodeKind::Trunk => "trunk",
			NodeKind::Vine => "vine",
			NodeKind::CrossVine => "cross-vine",
			NodeKind::Grade => "grade",
			NodeKind::Subject => "subject",
			NodeKind::Domain => "domain",
			NodeKind::Cluster => "cluster",
			NodeKind::Standard => "standard",
		})
	}
}

/// Relation type tag; decides how a connector is stroked.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RelationKind {
	/// Direct lineage between civilizations.
	Descent,
	/// Cultural or technological influence.
	Influence,
	/// Trade contact.
	Trade,
	/// Conquest of one civilization by another.
	Conquest,
	/// Hierarchical containment in the curriculum.
	Contains,
	/// One standard must be met before another.
	Prerequisite,
	/// Loosely related standards.
	Related,
}

impl RelationKind {
	/// SVG `stroke-dasharray` for this kind, `None` for a solid line.
	pub fn dash_array(self) -> Option<&'static str> {
		match self {
			RelationKind::Descent | RelationKind::Contains => None,
			RelationKind::Influence | RelationKind::Related => Some("6 4"),
			RelationKind::Trade => Some("2 4"),
			RelationKind::Conquest | RelationKind::Prerequisite => Some("10 3 2 3"),
		}
	}
}

impl fmt::Display for RelationKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			RelationKind::Descent => "descent",
			RelationKind::Influence => "influence",
			RelationKind::Trade => "trade",
			RelationKind::Conquest => "conquest",
			RelationKind::Contains => "contains",
			RelationKind::Prerequisite => "prerequisite",
			RelationKind::Related => "related",
		})
	}
}

/// An input node. Only `id` and `kind` are required.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
	/// Unique id.
	pub id: String,
	/// Type tag.
	pub kind: NodeKind,
	/// Display label.
	pub label: String,
	/// Start year (negative for BCE).
	pub start: Option<f64>,
	/// End year.
	pub end: Option<f64>,
	/// Grade number, kindergarten being 0.
	pub grade: Option<i32>,
	/// Longitude, used to order nodes within a layer.
	pub longitude: Option<f64>,
	/// Subject name.
	pub subject: Option<String>,
	/// Explicit fill colour.
	pub color: Option<String>,
	/// Free text shown in the detail panel.
	pub description: Option<String>,
}

impl Node {
	/// A node with only the required fields set.
	pub fn new(id: impl Into<String>, kind: NodeKind, label: impl Into<String>) -> Self {
		Self {
			id: id.into(),
			kind,
			label: label.into(),
			start: None,
			end: None,
			grade: None,
			longitude: None,
			subject: None,
			color: None,
			description: None,
		}
	}

	/// Sets the start year.
	pub fn starting(mut self, year: f64) -> Self {
		self.start = Some(year);
		self
	}

	/// Sets the end year.
	pub fn ending(mut self, year: f64) -> Self {
		self.end = Some(year);
		self
	}

	/// Sets the grade.
	pub fn in_grade(mut self, grade: i32) -> Self {
		self.grade = Some(grade);
		self
	}

	/// Sets the longitude.
	pub fn at_longitude(mut self, longitude: f64) -> Self {
		self.longitude = Some(longitude);
		self
	}

	/// Sets the subject.
	pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
		self.subject = Some(subject.into());
		self
	}

	/// Sets the fill colour.
	pub fn with_color(mut self, color: impl Into<String>) -> Self {
		self.color = Some(color.into());
		self
	}

	/// Sets the description.
	pub fn with_description(mut self, description: impl Into<String>) -> Self {
		self.description = Some(description.into());
		self
	}

	/// Temporal attribute: the start year, else the grade.
	pub fn time_key(&self) -> Option<f64> {
		self.start.or(self.grade.map(f64::from))
	}

	/// Fill colour, falling back to the kind's default.
	pub fn fill(&self) -> &str {
		self.color.as_deref().unwrap_or(self.kind.default_color())
	}
}

/// A directed relation between two nodes.
#[derive(Clone, Debug, PartialEq)]
pub struct Relation {
	/// Unique id.
	pub id: String,
	/// Source node id.
	pub from: String,
	/// Target node id.
	pub to: String,
	/// Type tag.
	pub kind: RelationKind,
	/// Optional explanation.
	pub description: Option<String>,
}

impl Relation {
	/// A relation without description. The id is derived from the endpoints.
	pub fn new(from: impl Into<String>, to: impl Into<String>, kind: RelationKind) -> Self {
		let (from, to) = (from.into(), to.into());
		Self {
			id: format!("{from}->{to}"),
			from,
			to,
			kind,
			description: None,
		}
	}

	/// Sets the description.
	pub fn with_description(mut self, description: impl Into<String>) -> Self {
		self.description = Some(description.into());
		self
	}
}

/// The full input to a layout pass.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GraphData {
	/// Nodes, in source order.
	pub nodes: Vec<Node>,
	/// Relations, in source order.
	pub relations: Vec<Relation>,
}

impl GraphData {
	/// Looks a node up by id (first occurrence).
	pub fn node(&self, id: &str) -> Option<&Node> {
		self.nodes.iter().find(|n| n.id == id)
	}
}
