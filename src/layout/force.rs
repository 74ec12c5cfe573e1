use std::collections::{HashMap, HashSet};
use std::f64::consts::PI;

use force_graph::{EdgeData, ForceGraph, NodeData, SimulationParameters};
use log::debug;

use super::{Layout, LayoutConfig, Point, PositionedNode};
use crate::graph::{GraphData, NodeKind};

/// Simulation steps run before positions are read back.
pub const FORCE_TICKS: usize = 300;
const TICK: f32 = 0.016;

#[derive(Clone, Debug, Default)]
struct NodeInfo {
	id: String,
	size: (f64, f64),
}

/// Lays the graph out with a force simulation.
///
/// Every node is placed, temporal attribute or not. Nodes start on a circle
/// around the layout centre so the result is the same on every run.
pub fn force_layout(data: &GraphData, config: &LayoutConfig) -> Layout {
	let mut graph: ForceGraph<NodeInfo, ()> = ForceGraph::new(SimulationParameters {
		force_charge: 12000.0,
		force_spring: 0.05,
		force_max: 280.0,
		node_speed: 7000.0,
		damping_factor: 0.95,
	});

	let mut seen = HashSet::new();
	let unique: Vec<_> = data.nodes.iter().filter(|n| seen.insert(n.id.as_str())).collect();
	let center = Point::new(config.center_x, (config.top + config.bottom) / 2.0);
	let radius = config.min_width / 2.0;

	let mut idx = HashMap::new();
	for (i, node) in unique.iter().enumerate() {
		let angle = (i as f64) * 2.0 * PI / unique.len() as f64;
		let handle = graph.add_node(NodeData {
			x: (center.x + radius * angle.cos()) as f32,
			y: (center.y + radius * angle.sin()) as f32,
			mass: if node.kind == NodeKind::Trunk { 20.0 } else { 10.0 },
			is_anchor: false,
			user_data: NodeInfo {
				id: node.id.clone(),
				size: node.kind.size(),
			},
		});
		idx.insert(node.id.as_str(), handle);
	}

	for rel in &data.relations {
		if let (Some(&src), Some(&tgt)) = (idx.get(rel.from.as_str()), idx.get(rel.to.as_str())) {
			graph.add_edge(src, tgt, EdgeData::default());
		}
	}

	for _ in 0..FORCE_TICKS {
		graph.update(TICK);
	}

	let mut nodes = Vec::with_capacity(unique.len());
	graph.visit_nodes(|node| {
		let (x, y) = (node.x() as f64, node.y() as f64);
		// A diverged simulation falls back to the centre.
		let at = if x.is_finite() && y.is_finite() {
			Point::new(x, y)
		} else {
			center
		};
		nodes.push(PositionedNode::centered(
			&node.data.user_data.id,
			at,
			node.data.user_data.size,
		));
	});

	debug!("force layout settled {} nodes after {FORCE_TICKS} ticks", nodes.len());
	Layout::from_nodes(nodes, data)
}
