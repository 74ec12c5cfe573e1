use std::collections::{HashMap, HashSet};

use leptos::prelude::*;

use crate::graph::{GraphData, Node};
use crate::layout::Layout;
use crate::store::Action;

const EDGE_COLOR: &str = "rgb(100, 180, 255)";
const LABEL_SIZE: f64 = 12.0;

/// How strongly an element is drawn given the current hover.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Emphasis {
	Normal,
	Highlighted,
	Dimmed,
}

impl Emphasis {
	/// Edge `(opacity, stroke width)`.
	fn edge_style(self) -> (f64, f64) {
		// Highlighted edges brighten and thicken, the rest fade.
		match self {
			Emphasis::Normal => (0.6, 1.5),
			Emphasis::Highlighted => (0.9, 2.0),
			Emphasis::Dimmed => (0.15, 1.0),
		}
	}

	fn node_opacity(self) -> f64 {
		match self {
			Emphasis::Normal | Emphasis::Highlighted => 1.0,
			Emphasis::Dimmed => 0.3,
		}
	}
}

/// Hovered node and its neighbours.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Highlight {
	hovered: Option<String>,
	neighbors: HashSet<String>,
}

impl Highlight {
	pub fn new(layout: Option<&Layout>, hovered: Option<String>) -> Self {
		let neighbors = match (layout, hovered.as_deref()) {
			(Some(layout), Some(id)) => layout.neighbors(id),
			_ => HashSet::new(),
		};
		Self { hovered, neighbors }
	}

	fn is_highlighted(&self, id: &str) -> bool {
		self.hovered.as_deref() == Some(id) || self.neighbors.contains(id)
	}

	pub fn node(&self, id: &str) -> Emphasis {
		match self.hovered {
			None => Emphasis::Normal,
			Some(_) if self.is_highlighted(id) => Emphasis::Highlighted,
			Some(_) => Emphasis::Dimmed,
		}
	}

	pub fn edge(&self, from: &str, to: &str) -> Emphasis {
		match self.hovered {
			None => Emphasis::Normal,
			Some(_) if self.is_highlighted(from) && self.is_highlighted(to) => Emphasis::Highlighted,
			Some(_) => Emphasis::Dimmed,
		}
	}
}

pub fn edges(layout: &Layout, highlight: &Highlight) -> impl IntoView + use<> {
	layout
		.edges
		.iter()
		.map(|edge| {
			let (opacity, width) = highlight.edge(&edge.from, &edge.to).edge_style();
			view! {
				<path
					d=edge.connector.svg_path()
					fill="none"
					stroke=EDGE_COLOR
					stroke-width=width.to_string()
					stroke-dasharray=edge.kind.dash_array().unwrap_or("none")
					opacity=opacity.to_string()
				/>
			}
		})
		.collect_view()
}

pub fn nodes<F>(
	layout: &Layout,
	data: &GraphData,
	highlight: &Highlight,
	selected: Option<&str>,
	on_action: F,
) -> impl IntoView + use<F>
where
	F: Fn(Action) + Copy + Send + Sync + 'static,
{
	let mut info: HashMap<&str, &Node> = HashMap::new();
	for node in &data.nodes {
		info.entry(node.id.as_str()).or_insert(node);
	}

	layout
		.nodes
		.iter()
		.filter_map(|pn| {
			let node = info.get(pn.id.as_str())?;
			let opacity = highlight.node(&pn.id).node_opacity();
			let is_selected = selected == Some(pn.id.as_str());
			let center = pn.center();
			let hover_id = pn.id.clone();

			Some(view! {
				<g
					class="tree-node"
					data-node-id=pn.id.clone()
					opacity=opacity.to_string()
					on:mouseenter=move |_| on_action(Action::Hover(Some(hover_id.clone())))
					on:mouseleave=move |_| on_action(Action::Hover(None))
				>
					<rect
						x=pn.x.to_string()
						y=pn.y.to_string()
						width=pn.width.to_string()
						height=pn.height.to_string()
						rx="6"
						fill=node.fill().to_string()
						stroke=if is_selected { "white" } else { "rgba(0, 0, 0, 0.4)" }
						stroke-width=if is_selected { "3" } else { "1" }
					/>
					<text
						x=center.x.to_string()
						y=(center.y + LABEL_SIZE / 3.0).to_string()
						text-anchor="middle"
						font-size=LABEL_SIZE.to_string()
						fill="white"
						pointer-events="none"
					>
						{node.label.clone()}
					</text>
				</g>
			})
		})
		.collect_view()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::graph::{Relation, RelationKind};
	use crate::layout::{Point, PositionedNode};

	fn chain() -> Layout {
		let data = GraphData {
			nodes: vec![],
			relations: vec![
				Relation::new("a", "b", RelationKind::Descent),
				Relation::new("b", "c", RelationKind::Descent),
			],
		};
		let nodes = ["a", "b", "c"]
			.iter()
			.map(|id| PositionedNode::centered(*id, Point::default(), (10.0, 10.0)))
			.collect();
		Layout::from_nodes(nodes, &data)
	}

	#[test]
	fn no_hover_draws_everything_normally() {
		let h = Highlight::new(Some(&chain()), None);
		assert_eq!(h.node("a"), Emphasis::Normal);
		assert_eq!(h.edge("a", "b"), Emphasis::Normal);
	}

	#[test]
	fn hover_highlights_neighbourhood() {
		let h = Highlight::new(Some(&chain()), Some("a".into()));
		assert_eq!(h.node("a"), Emphasis::Highlighted);
		assert_eq!(h.node("b"), Emphasis::Highlighted);
		assert_eq!(h.node("c"), Emphasis::Dimmed);
		assert_eq!(h.edge("a", "b"), Emphasis::Highlighted);
		assert_eq!(h.edge("b", "c"), Emphasis::Dimmed);
	}
}
