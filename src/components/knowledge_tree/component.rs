use std::cell::RefCell;
use std::rc::Rc;

use leptos::html::Div;
use leptos::prelude::*;
use leptos::task::spawn_local;
use log::{debug, warn};
use wasm_bindgen::prelude::*;
use web_sys::{Element, HtmlDivElement, MouseEvent, WheelEvent, Window};

use super::panels::{DetailPanel, GraphToolbar, StatsPanel};
use super::render::{self, Highlight};
use crate::error::DomError;
use crate::graph::GraphData;
use crate::layout::{self, Layout, LayoutConfig, LayoutRequests, LayoutStrategy, Point};
use crate::stats::GraphStats;
use crate::store::{Action, ViewState};
use crate::viewport::{Bounds, Size, ViewportConfig};

const ZOOM_STEP: f64 = 1.2;

fn window_size(window: &Window) -> Result<Size, DomError> {
	let dim = |value: Result<JsValue, JsValue>, name: &'static str| {
		value
			.ok()
			.and_then(|v| v.as_f64())
			.ok_or(DomError::Dimension(name))
	};
	Ok(Size::new(
		dim(window.inner_width(), "width")?,
		dim(window.inner_height(), "height")?,
	))
}

fn measure(
	container: &HtmlDivElement,
	fullscreen: bool,
	width: Option<f64>,
	height: Option<f64>,
) -> Result<Size, DomError> {
	if fullscreen {
		return window_size(&web_sys::window().ok_or(DomError::NoWindow)?);
	}
	let parent = container.parent_element();
	Ok(Size::new(
		width.unwrap_or_else(|| {
			parent
				.as_ref()
				.map(|p| p.client_width() as f64)
				.unwrap_or(800.0)
		}),
		height.unwrap_or_else(|| {
			parent
				.as_ref()
				.map(|p| p.client_height() as f64)
				.unwrap_or(600.0)
		}),
	))
}

fn local_point(container: NodeRef<Div>, ev: &MouseEvent) -> Result<Point, DomError> {
	let el = container.get_untracked().ok_or(DomError::Unmounted)?;
	let rect = el.get_bounding_client_rect();
	Ok(Point::new(
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	))
}

/// Id of the node the event landed on, if any.
fn node_under(ev: &MouseEvent) -> Option<String> {
	ev.target()?
		.dyn_into::<Element>()
		.ok()?
		.closest("[data-node-id]")
		.ok()??
		.get_attribute("data-node-id")
}

#[component]
pub fn KnowledgeTree(
	#[prop(into)] data: Signal<GraphData>,
	#[prop(default = LayoutStrategy::Tree)] strategy: LayoutStrategy,
	#[prop(optional)] layout_config: LayoutConfig,
	#[prop(optional)] viewport_config: ViewportConfig,
	#[prop(default = false)] fullscreen: bool,
	#[prop(default = None)] width: Option<f64>,
	#[prop(default = None)] height: Option<f64>,
) -> impl IntoView {
	let container_ref = NodeRef::<Div>::new();
	let layout: RwSignal<Option<Layout>> = RwSignal::new(None);
	let view_state = RwSignal::new(ViewState::default());
	let requests = Rc::new(RefCell::new(LayoutRequests::default()));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));

	let dispatch = move |action: Action| {
		view_state.update(|s| *s = std::mem::take(s).reduce(action, &viewport_config));
	};

	Effect::new(move |_| {
		let Some(container) = container_ref.get() else {
			return;
		};
		match measure(&container, fullscreen, width, height) {
			Ok(size) => dispatch(Action::Resize(size)),
			Err(e) => warn!("could not measure tree viewport: {e}"),
		}

		if fullscreen && resize_cb.borrow().is_none() {
			*resize_cb.borrow_mut() = Some(Closure::new(move || {
				match web_sys::window()
					.ok_or(DomError::NoWindow)
					.and_then(|w| window_size(&w))
				{
					Ok(size) => dispatch(Action::Resize(size)),
					Err(e) => warn!("resize ignored: {e}"),
				}
			}));
			if let (Some(window), Some(cb)) = (web_sys::window(), resize_cb.borrow().as_ref()) {
				let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
			}
		}
	});

	Effect::new(move |_| {
		let graph = data.get();
		let ticket = requests.borrow_mut().issue();
		let (requests, config) = (requests.clone(), layout_config.clone());
		spawn_local(async move {
			let started = js_sys::Date::now();
			let result = layout::compute(&graph, strategy, &config);
			if !requests.borrow().accept(ticket) {
				debug!("dropping superseded layout");
				return;
			}
			match result {
				Ok(computed) => {
					debug!(
						"{strategy:?} layout of {} nodes, {} edges in {:.1}ms",
						computed.nodes.len(),
						computed.edges.len(),
						js_sys::Date::now() - started
					);
					dispatch(Action::Fit(Bounds::of(&computed.nodes)));
					layout.set(Some(computed));
				}
				Err(e) => warn!("layout aborted, tree stays loading: {e}"),
			}
		});
	});

	let stats = Memo::new(move |_| data.with(GraphStats::collect));
	let transform = Memo::new(move |_| view_state.with(|s| s.transform));
	let selected = Memo::new(move |_| view_state.with(|s| s.selected.clone()));
	let highlight = Memo::new(move |_| {
		let hovered = view_state.with(|s| s.hovered.clone());
		layout.with(|l| Highlight::new(l.as_ref(), hovered))
	});

	let on_mousedown = move |ev: MouseEvent| match local_point(container_ref, &ev) {
		Ok(at) => dispatch(Action::PointerDown {
			at,
			on_node: node_under(&ev).is_some(),
		}),
		Err(e) => warn!("pointer down ignored: {e}"),
	};
	let on_mousemove = move |ev: MouseEvent| {
		if view_state.with_untracked(|s| s.pan.active) {
			if let Ok(at) = local_point(container_ref, &ev) {
				dispatch(Action::PointerMove(at));
			}
		}
	};
	let on_mouseup = move |_: MouseEvent| dispatch(Action::PointerUp);
	let on_mouseleave = move |_: MouseEvent| dispatch(Action::PointerLeave);
	let on_click = move |ev: MouseEvent| dispatch(Action::Click(node_under(&ev)));
	let on_wheel = move |ev: WheelEvent| {
		ev.prevent_default();
		match local_point(container_ref, &ev) {
			Ok(pivot) => dispatch(Action::Wheel {
				pivot,
				delta_y: ev.delta_y(),
			}),
			Err(e) => warn!("wheel ignored: {e}"),
		}
	};

	let on_close = Callback::new(move |_: ()| dispatch(Action::Deselect));
	let on_zoom_in = Callback::new(move |_: ()| dispatch(Action::ZoomBy(ZOOM_STEP)));
	let on_zoom_out = Callback::new(move |_: ()| dispatch(Action::ZoomBy(1.0 / ZOOM_STEP)));
	let on_fit = Callback::new(move |_: ()| dispatch(Action::Refit));

	view! {
		<div
			node_ref=container_ref
			class="knowledge-tree"
			style="position: relative; width: 100%; height: 100%; overflow: hidden;"
		>
			<div
				class="tree-surface"
				on:mousedown=on_mousedown
				on:mousemove=on_mousemove
				on:mouseup=on_mouseup
				on:mouseleave=on_mouseleave
				on:click=on_click
				on:wheel=on_wheel
				style="width: 100%; height: 100%; cursor: grab;"
			>
				<svg width="100%" height="100%" style="display: block;">
					<g transform=move || transform.get().svg_transform()>
						<g class="edges">
							{move || {
								layout.with(|l| l.as_ref().map(|l| render::edges(l, &highlight.read())))
							}}
						</g>
						<g class="nodes">
							{move || {
								layout
									.with(|l| {
										l.as_ref()
											.map(|l| {
												data.with(|d| {
													render::nodes(
														l,
														d,
														&highlight.read(),
														selected.read().as_deref(),
														dispatch,
													)
												})
											})
									})
							}}
						</g>
					</g>
				</svg>
			</div>

			<Show when=move || layout.with(Option::is_none)>
				<div class="loading-overlay">"Loading…"</div>
			</Show>
			<Show when=move || layout.with(|l| l.as_ref().is_some_and(Layout::is_empty))>
				<div class="empty-overlay">"Nothing to show"</div>
			</Show>

			<GraphToolbar on_zoom_in=on_zoom_in on_zoom_out=on_zoom_out on_fit=on_fit />
			{move || view! { <StatsPanel stats=stats.get() /> }}
			{move || {
				let id = selected.get()?;
				data.with(|d| {
					let node = d.node(&id)?.clone();
					let relations = d
						.relations
						.iter()
						.filter(|r| r.from == id || r.to == id)
						.cloned()
						.collect::<Vec<_>>();
					Some(view! { <DetailPanel node=node relations=relations on_close=on_close /> })
				})
			}}
		</div>
	}
}
