//! Turns [`GraphData`] into boxes and connectors in world space.
//!
//! Two strategies exist. [`LayoutStrategy::Tree`] buckets nodes by their
//! temporal attribute into horizontal layers, earliest at the bottom, and
//! widens the layers towards the top so the result reads as a tree.
//! [`LayoutStrategy::Force`] hands the graph to a force simulation and takes
//! whatever positions it settles on.
//!
//! Both share the same output: one [`PositionedNode`] per emitted node and one
//! [`PositionedEdge`] per relation whose endpoints were both emitted.

mod force;
mod request;
mod tree;

use std::collections::{HashMap, HashSet};

pub use force::{FORCE_TICKS, force_layout};
pub use request::{LayoutRequests, LayoutTicket};
pub use tree::{layer_index, tree_layout};

use crate::error::LayoutError;
use crate::graph::{GraphData, RelationKind};

/// A point in world space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
	/// Horizontal coordinate.
	pub x: f64,
	/// Vertical coordinate, growing downwards.
	pub y: f64,
}

impl Point {
	/// Shorthand constructor.
	pub const fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}
}

/// A node box. `x`/`y` is the top-left corner.
#[derive(Clone, Debug, PartialEq)]
pub struct PositionedNode {
	/// Id of the input node.
	pub id: String,
	/// Left edge.
	pub x: f64,
	/// Top edge.
	pub y: f64,
	/// Box width.
	pub width: f64,
	/// Box height.
	pub height: f64,
}

impl PositionedNode {
	/// Box of the given size centred on `center`.
	pub fn centered(id: impl Into<String>, center: Point, (width, height): (f64, f64)) -> Self {
		Self {
			id: id.into(),
			x: center.x - width / 2.0,
			y: center.y - height / 2.0,
			width,
			height,
		}
	}

	/// Centre of the box.
	pub fn center(&self) -> Point {
		Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
	}
}

/// A cubic curve between two box centres, bending at their vertical midpoint.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Connector {
	/// Start point.
	pub from: Point,
	/// First control point.
	pub c1: Point,
	/// Second control point.
	pub c2: Point,
	/// End point.
	pub to: Point,
}

impl Connector {
	/// Connector from `from` to `to`.
	pub fn between(from: Point, to: Point) -> Self {
		let mid_y = (from.y + to.y) / 2.0;
		Self {
			from,
			c1: Point::new(from.x, mid_y),
			c2: Point::new(to.x, mid_y),
			to,
		}
	}

	/// The `d` attribute of an SVG `<path>`.
	pub fn svg_path(&self) -> String {
		format!(
			"M{:.1},{:.1} C{:.1},{:.1} {:.1},{:.1} {:.1},{:.1}",
			self.from.x,
			self.from.y,
			self.c1.x,
			self.c1.y,
			self.c2.x,
			self.c2.y,
			self.to.x,
			self.to.y
		)
	}
}

/// A relation whose endpoints were both placed.
#[derive(Clone, Debug, PartialEq)]
pub struct PositionedEdge {
	/// Id of the input relation.
	pub id: String,
	/// Source node id.
	pub from: String,
	/// Target node id.
	pub to: String,
	/// Relation type.
	pub kind: RelationKind,
	/// Curve in world space.
	pub connector: Connector,
}

/// Output of a layout pass.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Layout {
	/// Placed nodes.
	pub nodes: Vec<PositionedNode>,
	/// Resolved edges.
	pub edges: Vec<PositionedEdge>,
}

impl Layout {
	/// Builds a layout from placed nodes, resolving every relation of `data`
	/// whose endpoints were both placed. The rest are dropped.
	pub fn from_nodes(nodes: Vec<PositionedNode>, data: &GraphData) -> Self {
		let centers: HashMap<&str, Point> =
			nodes.iter().map(|n| (n.id.as_str(), n.center())).collect();
		let edges = data
			.relations
			.iter()
			.filter_map(|rel| {
				let (&from, &to) = (centers.get(rel.from.as_str())?, centers.get(rel.to.as_str())?);
				Some(PositionedEdge {
					id: rel.id.clone(),
					from: rel.from.clone(),
					to: rel.to.clone(),
					kind: rel.kind,
					connector: Connector::between(from, to),
				})
			})
			.collect();
		Self { nodes, edges }
	}

	/// True when nothing was placed.
	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}

	/// Box for `id`, if it was placed.
	pub fn node(&self, id: &str) -> Option<&PositionedNode> {
		self.nodes.iter().find(|n| n.id == id)
	}

	/// Ids connected to `id` by an emitted edge, in either direction.
	pub fn neighbors(&self, id: &str) -> HashSet<String> {
		let mut out = HashSet::new();
		for edge in &self.edges {
			if edge.from == id {
				out.insert(edge.to.clone());
			} else if edge.to == id {
				out.insert(edge.from.clone());
			}
		}
		out
	}
}

/// Tuning for both layout strategies.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutConfig {
	/// Width of a time bucket.
	pub bucket_width: f64,
	/// Time that maps to layer 0.
	pub global_min: f64,
	/// `y` of the latest layer.
	pub top: f64,
	/// `y` of the earliest layer.
	pub bottom: f64,
	/// Horizontal centre of every layer.
	pub center_x: f64,
	/// Span of the earliest layer.
	pub min_width: f64,
	/// Span of the latest layer.
	pub max_width: f64,
	/// Exponent of the span interpolation; above 1 keeps lower layers narrow.
	pub spread_exponent: f64,
	/// Upper bound of the horizontal perturbation.
	pub jitter: f64,
	/// Abort when no node has a longitude.
	pub require_ordering_key: bool,
}

impl Default for LayoutConfig {
	fn default() -> Self {
		Self::civilization()
	}
}

impl LayoutConfig {
	/// 500-year buckets from 3500 BCE, ordered by longitude.
	pub fn civilization() -> Self {
		Self {
			bucket_width: 500.0,
			global_min: -3500.0,
			top: 0.0,
			bottom: 1200.0,
			center_x: 0.0,
			min_width: 300.0,
			max_width: 1800.0,
			spread_exponent: 1.6,
			jitter: 24.0,
			require_ordering_key: true,
		}
	}

	/// One layer per grade, kindergarten first.
	pub fn curriculum() -> Self {
		Self {
			bucket_width: 1.0,
			global_min: -1.0,
			top: 0.0,
			bottom: 1400.0,
			center_x: 0.0,
			min_width: 400.0,
			max_width: 1600.0,
			spread_exponent: 1.2,
			jitter: 0.0,
			require_ordering_key: false,
		}
	}
}

/// Which layout strategy to run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LayoutStrategy {
	/// Deterministic time-bucket tree.
	#[default]
	Tree,
	/// Force simulation.
	Force,
}

/// Runs the chosen strategy.
pub fn compute(
	data: &GraphData,
	strategy: LayoutStrategy,
	config: &LayoutConfig,
) -> Result<Layout, LayoutError> {
	match strategy {
		LayoutStrategy::Tree => tree_layout(data, config),
		LayoutStrategy::Force => Ok(force_layout(data, config)),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::graph::{Node, NodeKind, Relation};

	#[test]
	fn connector_bends_at_vertical_midpoint() {
		let c = Connector::between(Point::new(0.0, 100.0), Point::new(50.0, 0.0));
		assert_eq!(c.c1, Point::new(0.0, 50.0));
		assert_eq!(c.c2, Point::new(50.0, 50.0));
		assert_eq!(c.svg_path(), "M0.0,100.0 C0.0,50.0 50.0,50.0 50.0,0.0");
	}

	#[test]
	fn neighbors_follow_both_directions() {
		let data = GraphData {
			nodes: vec![],
			relations: vec![
				Relation::new("a", "b", RelationKind::Descent),
				Relation::new("c", "a", RelationKind::Trade),
				Relation::new("b", "c", RelationKind::Trade),
			],
		};
		let nodes = ["a", "b", "c"]
			.iter()
			.map(|id| PositionedNode::centered(*id, Point::default(), (10.0, 10.0)))
			.collect();
		let layout = Layout::from_nodes(nodes, &data);
		let mut n: Vec<_> = layout.neighbors("a").into_iter().collect();
		n.sort();
		assert_eq!(n, vec!["b".to_string(), "c".to_string()]);
	}

	#[test]
	fn compute_dispatches_on_strategy() {
		let data = GraphData {
			nodes: vec![Node::new("a", NodeKind::Grade, "A")],
			relations: vec![],
		};
		let config = LayoutConfig::curriculum();
		assert!(compute(&data, LayoutStrategy::Tree, &config).unwrap().is_empty());
		assert_eq!(compute(&data, LayoutStrategy::Force, &config).unwrap().nodes.len(), 1);
	}
}
