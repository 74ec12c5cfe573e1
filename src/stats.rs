//! Summary figures about a graph, shown next to the tree.

use std::collections::{BTreeMap, HashMap, HashSet};

use crate::graph::{GraphData, NodeKind, RelationKind};

/// How many nodes [`GraphStats::most_incoming`] keeps.
pub const TOP_INCOMING: usize = 5;

/// Counts collected from one [`GraphData`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GraphStats {
	/// Distinct node ids.
	pub node_count: usize,
	/// Relations, dangling ones included.
	pub relation_count: usize,
	/// Nodes per kind.
	pub by_kind: BTreeMap<NodeKind, usize>,
	/// Relations per kind.
	pub by_relation: BTreeMap<RelationKind, usize>,
	/// Nodes no relation points to, in source order.
	pub entry_points: Vec<String>,
	/// Nodes no relation starts from, in source order.
	pub end_points: Vec<String>,
	/// Nodes with the most incoming relations, most first, ties by id.
	pub most_incoming: Vec<(String, usize)>,
	/// Relations with at least one endpoint missing from the nodes.
	pub dangling_relations: usize,
	/// Nodes without a temporal attribute.
	pub unplaced_nodes: usize,
}

impl GraphStats {
	/// Walks the graph once per figure.
	pub fn collect(data: &GraphData) -> Self {
		let mut seen = HashSet::new();
		let nodes: Vec<_> = data.nodes.iter().filter(|n| seen.insert(n.id.as_str())).collect();

		let mut by_kind = BTreeMap::new();
		for node in &nodes {
			*by_kind.entry(node.kind).or_insert(0) += 1;
		}
		let mut by_relation = BTreeMap::new();
		let mut incoming: HashMap<&str, usize> = HashMap::new();
		let mut sources = HashSet::new();
		let mut dangling_relations = 0;
		for rel in &data.relations {
			*by_relation.entry(rel.kind).or_insert(0) += 1;
			if !seen.contains(rel.from.as_str()) || !seen.contains(rel.to.as_str()) {
				dangling_relations += 1;
			}
			*incoming.entry(rel.to.as_str()).or_insert(0) += 1;
			sources.insert(rel.from.as_str());
		}

		let entry_points = nodes
			.iter()
			.filter(|n| !incoming.contains_key(n.id.as_str()))
			.map(|n| n.id.clone())
			.collect();
		let end_points = nodes
			.iter()
			.filter(|n| !sources.contains(n.id.as_str()))
			.map(|n| n.id.clone())
			.collect();

		let mut most_incoming: Vec<_> = incoming
			.into_iter()
			.filter(|(id, _)| seen.contains(id))
			.map(|(id, count)| (id.to_string(), count))
			.collect();
		most_incoming.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
		most_incoming.truncate(TOP_INCOMING);

		Self {
			node_count: nodes.len(),
			relation_count: data.relations.len(),
			by_kind,
			by_relation,
			entry_points,
			end_points,
			most_incoming,
			dangling_relations,
			unplaced_nodes: nodes.iter().filter(|n| n.time_key().is_none()).count(),
		}
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;
	use crate::graph::{Node, Relation};

	#[test]
	fn counts_entry_and_end_points() {
		let data = GraphData {
			nodes: vec![
				Node::new("k", NodeKind::Grade, "K").in_grade(0),
				Node::new("g1", NodeKind::Grade, "1").in_grade(1),
				Node::new("g2", NodeKind::Grade, "2").in_grade(2),
				Node::new("loose", NodeKind::Standard, "Loose"),
			],
			relations: vec![
				Relation::new("k", "g1", RelationKind::Prerequisite),
				Relation::new("g1", "g2", RelationKind::Prerequisite),
				Relation::new("k", "g2", RelationKind::Related),
				Relation::new("g2", "missing", RelationKind::Contains),
			],
		};
		let stats = GraphStats::collect(&data);
		assert_eq!(stats.node_count, 4);
		assert_eq!(stats.relation_count, 4);
		assert_eq!(stats.entry_points, vec!["k".to_string(), "loose".to_string()]);
		assert_eq!(stats.end_points, vec!["loose".to_string()]);
		assert_eq!(
			stats.most_incoming,
			vec![("g2".to_string(), 2), ("g1".to_string(), 1)]
		);
		assert_eq!(stats.dangling_relations, 1);
		assert_eq!(stats.unplaced_nodes, 1);
		assert_eq!(stats.by_relation.get(&RelationKind::Prerequisite), Some(&2));
		assert_eq!(stats.by_kind.get(&NodeKind::Grade), Some(&3));
	}

	#[test]
	fn empty_graph() {
		assert_eq!(GraphStats::collect(&GraphData::default()), GraphStats::default());
	}
}
