use leptos::prelude::*;

use super::TreeNav;
use crate::components::knowledge_tree::KnowledgeTree;
use crate::data::common_core;
use crate::layout::{LayoutConfig, LayoutStrategy};
use crate::viewport::{PanPolicy, ViewportConfig};

/// Common Core tree, one layer per grade.
#[component]
pub fn CommonCore() -> impl IntoView {
	let graph_data = Signal::derive(common_core);

	view! {
		<div class="fullscreen-graph">
			<KnowledgeTree data=graph_data layout_config=LayoutConfig::curriculum() fullscreen=true />
			<div class="graph-overlay">
				<h1>"Common Core Tree"</h1>
				<p class="subtitle">"Kindergarten at the bottom, grade 5 at the top."</p>
				<TreeNav />
			</div>
		</div>
	}
}

/// The same standards laid out by the force simulation, with a fixed view.
#[component]
pub fn CommonCoreForce() -> impl IntoView {
	let graph_data = Signal::derive(common_core);
	let viewport_config = ViewportConfig {
		pan: PanPolicy::Fixed,
		..ViewportConfig::default()
	};

	view! {
		<div class="fullscreen-graph">
			<KnowledgeTree
				data=graph_data
				strategy=LayoutStrategy::Force
				layout_config=LayoutConfig::curriculum()
				viewport_config=viewport_config
				fullscreen=true
			/>
			<div class="graph-overlay">
				<h1>"Common Core Graph"</h1>
				<p class="subtitle">"Force layout. Scroll to zoom."</p>
				<TreeNav />
			</div>
		</div>
	}
}
