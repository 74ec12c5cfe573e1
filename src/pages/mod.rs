use leptos::prelude::*;
use leptos_router::components::A;

pub mod common_core;
pub mod home;
pub mod not_found;

/// Links between the trees.
#[component]
fn TreeNav() -> impl IntoView {
	view! {
		<nav class="tree-nav">
			<A href="/">"Civilizations"</A>
			<A href="/common-core">"Common Core"</A>
			<A href="/common-core/force">"Common Core (force)"</A>
		</nav>
	}
}
