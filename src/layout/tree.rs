use std::cmp::Ordering;
use std::collections::{BTreeMap, HashSet};

use log::debug;

use super::{Layout, LayoutConfig, Point, PositionedNode};
use crate::error::LayoutError;
use crate::graph::{GraphData, Node};

/// Minimum horizontal space between neighbouring boxes in a layer.
pub const NODE_GAP: f64 = 16.0;

/// Layer of a node whose temporal attribute is `time`.
///
/// Times before `global_min` land in layer 0. A non-positive bucket width is
/// treated as 1.
pub fn layer_index(time: f64, config: &LayoutConfig) -> usize {
	let width = if config.bucket_width > 0.0 {
		config.bucket_width
	} else {
		1.0
	};
	((time - config.global_min) / width).floor().max(0.0) as usize
}

/// Places every node with a temporal attribute on its layer.
///
/// Nodes without one are skipped, as are repeated ids after the first.
pub fn tree_layout(data: &GraphData, config: &LayoutConfig) -> Result<Layout, LayoutError> {
	let mut seen = HashSet::new();
	let placeable: Vec<(usize, &Node)> = data
		.nodes
		.iter()
		.filter(|n| seen.insert(n.id.as_str()))
		.filter_map(|n| Some((layer_index(n.time_key()?, config), n)))
		.collect();

	if config.require_ordering_key
		&& !placeable.is_empty()
		&& placeable.iter().all(|(_, n)| n.longitude.is_none())
	{
		return Err(LayoutError::MissingOrderingKey {
			placeable: placeable.len(),
		});
	}

	let mut layers: BTreeMap<usize, Vec<&Node>> = BTreeMap::new();
	for (idx, node) in placeable {
		layers.entry(idx).or_default().push(node);
	}
	let (Some(&first), Some(&last)) = (layers.keys().next(), layers.keys().next_back()) else {
		return Ok(Layout::default());
	};
	let span = (last - first) as f64;

	let mut nodes = Vec::new();
	for (idx, mut members) in layers {
		let t = if span > 0.0 {
			(idx - first) as f64 / span
		} else {
			0.0
		};
		let y = config.bottom + (config.top - config.bottom) * t;
		let n = members.len();
		let widest = members.iter().map(|m| m.kind.size().0).fold(0.0, f64::max);
		// Never narrower than the boxes it holds.
		let width = (config.min_width
			+ (config.max_width - config.min_width) * t.powf(config.spread_exponent))
		.max(n as f64 * (widest + NODE_GAP));

		members.sort_by(|a, b| in_layer_order(a, b));
		let spacing = width / n as f64;
		let left = config.center_x - width / 2.0;
		// Neighbours keep their order and at least `widest` between centres.
		let amplitude = config
			.jitter
			.min(spacing * 0.4)
			.min((spacing - widest) / 2.0)
			.max(0.0);
		for (i, node) in members.into_iter().enumerate() {
			let mut x = left + spacing * (i as f64 + 0.5);
			if n > 1 {
				x += perturbation(node.longitude.unwrap_or(0.0)) * amplitude;
			}
			nodes.push(PositionedNode::centered(&node.id, Point::new(x, y), node.kind.size()));
		}
	}

	debug!(
		"tree layout placed {} of {} nodes across layers {first}..={last}",
		nodes.len(),
		data.nodes.len()
	);
	Ok(Layout::from_nodes(nodes, data))
}

fn in_layer_order(a: &Node, b: &Node) -> Ordering {
	a.longitude
		.unwrap_or(0.0)
		.total_cmp(&b.longitude.unwrap_or(0.0))
		.then_with(|| a.subject.cmp(&b.subject))
		.then_with(|| a.id.cmp(&b.id))
}

/// Offset in `[-1, 1]` derived from the ordering key.
fn perturbation(key: f64) -> f64 {
	(key * 12.9898).sin()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::graph::NodeKind;

	fn civ(id: &str, start: f64, lon: f64) -> Node {
		Node::new(id, NodeKind::Vine, id).starting(start).at_longitude(lon)
	}

	#[test]
	fn layer_index_buckets_relative_to_global_min() {
		let config = LayoutConfig::civilization();
		assert_eq!(layer_index(-3500.0, &config), 0);
		assert_eq!(layer_index(-3001.0, &config), 0);
		assert_eq!(layer_index(-3000.0, &config), 1);
		assert_eq!(layer_index(-1000.0, &config), 5);
		assert_eq!(layer_index(-9000.0, &config), 0);
	}

	#[test]
	fn zero_bucket_width_falls_back_to_unit() {
		let config = LayoutConfig {
			bucket_width: 0.0,
			global_min: 0.0,
			..LayoutConfig::curriculum()
		};
		assert_eq!(layer_index(3.5, &config), 3);
	}

	#[test]
	fn lone_node_is_centred() {
		let config = LayoutConfig::civilization();
		let data = GraphData {
			nodes: vec![civ("egypt", -3100.0, 31.0)],
			relations: vec![],
		};
		let layout = tree_layout(&data, &config).unwrap();
		let center = layout.nodes[0].center();
		assert!((center.x - config.center_x).abs() < 1e-9);
		assert!((center.y - config.bottom).abs() < 1e-9);
	}

	#[test]
	fn layer_order_follows_longitude() {
		let data = GraphData {
			nodes: vec![
				civ("c", -500.0, 120.0),
				civ("a", -400.0, -10.0),
				civ("b", -300.0, 40.0),
			],
			relations: vec![],
		};
		let layout = tree_layout(&data, &LayoutConfig::civilization()).unwrap();
		let x = |id: &str| layout.node(id).unwrap().center().x;
		assert!(x("a") < x("b"));
		assert!(x("b") < x("c"));
	}

	#[test]
	fn large_jitter_keeps_layer_order() {
		let config = LayoutConfig {
			jitter: 10_000.0,
			..LayoutConfig::civilization()
		};
		let mut nodes: Vec<Node> = (0..12)
			.map(|i| civ(&format!("n{i:02}"), -2000.0, 30.0 + i as f64 * 0.05))
			.collect();
		nodes.push(civ("tie-a", -2000.0, 30.3).with_subject("a"));
		nodes.push(civ("tie-b", -2000.0, 30.3).with_subject("b"));
		let data = GraphData {
			nodes: nodes.clone(),
			relations: vec![],
		};
		let layout = tree_layout(&data, &config).unwrap();

		nodes.sort_by(in_layer_order);
		let xs: Vec<f64> = nodes
			.iter()
			.map(|n| layout.node(&n.id).unwrap().center().x)
			.collect();
		for (pair, ids) in xs.windows(2).zip(nodes.windows(2)) {
			assert!(pair[0] < pair[1], "{} not left of {}", ids[0].id, ids[1].id);
		}
	}

	#[test]
	fn crowded_layer_widens_to_fit_boxes() {
		let data = GraphData {
			nodes: (0..6)
				.map(|i| Node::new(format!("t{i}"), NodeKind::Trunk, "T").starting(-3400.0).at_longitude(i as f64))
				.collect(),
			relations: vec![],
		};
		let layout = tree_layout(&data, &LayoutConfig::civilization()).unwrap();
		let mut boxes = layout.nodes.clone();
		boxes.sort_by(|a, b| a.x.total_cmp(&b.x));
		for pair in boxes.windows(2) {
			assert!(pair[0].x + pair[0].width <= pair[1].x + 1e-9);
		}
	}

	#[test]
	fn missing_longitudes_abort_when_required() {
		let data = GraphData {
			nodes: vec![Node::new("x", NodeKind::Trunk, "X").starting(-2000.0)],
			relations: vec![],
		};
		assert_eq!(
			tree_layout(&data, &LayoutConfig::civilization()),
			Err(LayoutError::MissingOrderingKey { placeable: 1 })
		);
		assert!(tree_layout(&data, &LayoutConfig::curriculum()).is_ok());
	}

	#[test]
	fn duplicate_ids_keep_first() {
		let data = GraphData {
			nodes: vec![civ("a", -3000.0, 0.0), civ("a", 500.0, 0.0)],
			relations: vec![],
		};
		let layout = tree_layout(&data, &LayoutConfig::civilization()).unwrap();
		assert_eq!(layout.nodes.len(), 1);
	}
}
