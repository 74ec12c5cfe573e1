use crate::graph::{GraphData, Node, NodeKind, Relation, RelationKind};

const MATH: &str = "Mathematics";
const ELA: &str = "English Language Arts";

fn grade(n: i32) -> Node {
	let label = if n == 0 {
		"Kindergarten".to_string()
	} else {
		format!("Grade {n}")
	};
	Node::new(format!("g{n}"), NodeKind::Grade, label).in_grade(n)
}

fn standard(id: &str, grade: i32, subject: &str, label: &str, description: &str) -> Node {
	Node::new(id, NodeKind::Standard, label)
		.in_grade(grade)
		.with_subject(subject)
		.with_description(description)
}

/// A slice of the Common Core standards, kindergarten to grade 5.
pub fn common_core() -> GraphData {
	use RelationKind::*;

	let mut nodes: Vec<Node> = (0..=5).map(grade).collect();
	nodes.extend([
		Node::new("math", NodeKind::Subject, MATH).in_grade(0).with_subject(MATH),
		Node::new("ela", NodeKind::Subject, ELA).in_grade(0).with_subject(ELA),
		Node::new("cc", NodeKind::Domain, "Counting & Cardinality")
			.in_grade(0)
			.with_subject(MATH),
		Node::new("oa", NodeKind::Domain, "Operations & Algebraic Thinking")
			.in_grade(1)
			.with_subject(MATH),
		Node::new("nbt", NodeKind::Domain, "Number & Operations in Base Ten")
			.in_grade(1)
			.with_subject(MATH),
		Node::new("nf", NodeKind::Domain, "Number & Operations: Fractions")
			.in_grade(3)
			.with_subject(MATH),
		Node::new("rf", NodeKind::Domain, "Reading: Foundational Skills")
			.in_grade(0)
			.with_subject(ELA),
		Node::new("ri", NodeKind::Domain, "Reading: Informational Text")
			.in_grade(2)
			.with_subject(ELA),
		Node::new("oa-add", NodeKind::Cluster, "Add and subtract within 20")
			.in_grade(1)
			.with_subject(MATH),
		Node::new("nbt-place", NodeKind::Cluster, "Understand place value")
			.in_grade(2)
			.with_subject(MATH),
		Node::new("nf-equiv", NodeKind::Cluster, "Equivalence and ordering of fractions")
			.in_grade(4)
			.with_subject(MATH),
		standard("K.CC.A.1", 0, MATH, "K.CC.A.1", "Count to 100 by ones and by tens."),
		standard("K.RF.2", 0, ELA, "RF.K.2", "Demonstrate understanding of spoken words, syllables, and sounds."),
		standard("1.OA.C.6", 1, MATH, "1.OA.C.6", "Add and subtract within 20, demonstrating fluency within 10."),
		standard("1.NBT.B.2", 1, MATH, "1.NBT.B.2", "Understand that the two digits of a two-digit number represent tens and ones."),
		standard("2.NBT.A.1", 2, MATH, "2.NBT.A.1", "Understand that the three digits of a three-digit number represent hundreds, tens, and ones."),
		standard("2.RI.1", 2, ELA, "RI.2.1", "Ask and answer who, what, where, when, why, and how questions about key details in a text."),
		standard("3.NF.A.1", 3, MATH, "3.NF.A.1", "Understand a fraction 1/b as the quantity formed by 1 part when a whole is partitioned into b equal parts."),
		standard("3.OA.C.7", 3, MATH, "3.OA.C.7", "Fluently multiply and divide within 100."),
		standard("4.NF.A.1", 4, MATH, "4.NF.A.1", "Explain why a fraction a/b is equivalent to a fraction (n x a)/(n x b)."),
		standard("4.RI.3", 4, ELA, "RI.4.3", "Explain events, procedures, ideas, or concepts in a historical, scientific, or technical text."),
		standard("5.NF.A.1", 5, MATH, "5.NF.A.1", "Add and subtract fractions with unlike denominators."),
		standard("5.NBT.B.5", 5, MATH, "5.NBT.B.5", "Fluently multiply multi-digit whole numbers using the standard algorithm."),
	]);

	let relations = vec![
		Relation::new("g0", "g1", Prerequisite),
		Relation::new("g1", "g2", Prerequisite),
		Relation::new("g2", "g3", Prerequisite),
		Relation::new("g3", "g4", Prerequisite),
		Relation::new("g4", "g5", Prerequisite),
		Relation::new("g0", "math", Contains),
		Relation::new("g0", "ela", Contains),
		Relation::new("math", "cc", Contains),
		Relation::new("math", "oa", Contains),
		Relation::new("math", "nbt", Contains),
		Relation::new("math", "nf", Contains),
		Relation::new("ela", "rf", Contains),
		Relation::new("ela", "ri", Contains),
		Relation::new("cc", "K.CC.A.1", Contains),
		Relation::new("rf", "K.RF.2", Contains),
		Relation::new("oa", "oa-add", Contains),
		Relation::new("oa-add", "1.OA.C.6", Contains),
		Relation::new("nbt", "nbt-place", Contains),
		Relation::new("nbt", "1.NBT.B.2", Contains),
		Relation::new("nbt-place", "2.NBT.A.1", Contains),
		Relation::new("ri", "2.RI.1", Contains),
		Relation::new("nf", "3.NF.A.1", Contains),
		Relation::new("nf-equiv", "4.NF.A.1", Contains),
		Relation::new("nf", "nf-equiv", Contains),
		Relation::new("K.CC.A.1", "1.NBT.B.2", Prerequisite),
		Relation::new("1.OA.C.6", "3.OA.C.7", Prerequisite),
		Relation::new("1.NBT.B.2", "2.NBT.A.1", Prerequisite),
		Relation::new("2.NBT.A.1", "5.NBT.B.5", Prerequisite),
		Relation::new("3.NF.A.1", "4.NF.A.1", Prerequisite),
		Relation::new("4.NF.A.1", "5.NF.A.1", Prerequisite),
		Relation::new("3.OA.C.7", "5.NBT.B.5", Related),
		Relation::new("2.RI.1", "4.RI.3", Prerequisite),
		Relation::new("K.RF.2", "2.RI.1", Related)
			.with_description("Decoding skills underpin reading informational text."),
	];

	GraphData { nodes, relations }
}
