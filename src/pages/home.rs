use leptos::prelude::*;

use super::TreeNav;
use crate::components::knowledge_tree::KnowledgeTree;
use crate::data::civilizations;
use crate::layout::LayoutConfig;

/// Civilization tree, earliest cities at the bottom.
#[component]
pub fn Home() -> impl IntoView {
	let graph_data = Signal::derive(civilizations);

	view! {
		<div class="fullscreen-graph">
			<KnowledgeTree data=graph_data layout_config=LayoutConfig::civilization() fullscreen=true />
			<div class="graph-overlay">
				<h1>"Civilization Tree"</h1>
				<p class="subtitle">"Click a civilization for details. Scroll to zoom. Drag background to pan."</p>
				<TreeNav />
			</div>
		</div>
	}
}
