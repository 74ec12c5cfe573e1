//! Compiled-in graphs.

mod civilizations;
mod common_core;

pub use civilizations::civilizations;
pub use common_core::common_core;

#[cfg(test)]
mod tests {
	use super::*;
	use crate::stats::GraphStats;

	#[test]
	fn bundled_graphs_have_no_dangling_relations() {
		for data in [civilizations(), common_core()] {
			let stats = GraphStats::collect(&data);
			assert_eq!(stats.dangling_relations, 0);
			assert_eq!(stats.node_count, data.nodes.len(), "duplicate ids");
			assert_eq!(stats.unplaced_nodes, 0);
		}
	}
}
