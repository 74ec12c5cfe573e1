//! Interactive civilization and Common Core trees for the browser.
//!
//! The pure parts (graph records, layout, viewport math, view-state reducer,
//! statistics) are public and free of DOM access; the Leptos components that
//! draw them stay private to the app.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;
use log::{Level, info};

// Modules
mod components;
pub mod data;
pub mod error;
pub mod graph;
pub mod layout;
mod pages;
pub mod stats;
pub mod store;
pub mod viewport;

// Top-Level pages
use crate::pages::common_core::{CommonCore, CommonCoreForce};
use crate::pages::home::Home;
use crate::pages::not_found::NotFound;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("Logging initialized");
}

/// An app router which renders the trees and handles 404's
#[component]
pub fn App() -> impl IntoView {
	// Provides context that manages stylesheets, titles, meta tags, etc.
	provide_meta_context();

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />

		// sets the document title
		<Title text="Knowledge Trees" />

		// injects metadata in the <head> of the page
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<Router>
			<Routes fallback=|| view! { <NotFound /> }>
				<Route path=path!("/") view=Home />
				<Route path=path!("/common-core") view=CommonCore />
				<Route path=path!("/common-core/force") view=CommonCoreForce />
			</Routes>
		</Router>
	}
}
