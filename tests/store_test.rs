use knowledge_tree_canvas::layout::{Point, PositionedNode};
use knowledge_tree_canvas::store::{Action, ViewState};
use knowledge_tree_canvas::viewport::{Bounds, PanPolicy, Size, Transform, ViewportConfig};
use pretty_assertions::assert_eq;

fn run(state: ViewState, actions: Vec<Action>, config: &ViewportConfig) -> ViewState {
	actions.into_iter().fold(state, |s, a| s.reduce(a, config))
}

#[test]
fn click_selects_and_reclick_deselects() {
	let config = ViewportConfig::default();
	let s = run(ViewState::default(), vec![Action::Click(Some("rome".into()))], &config);
	assert_eq!(s.selected.as_deref(), Some("rome"));

	let s = s.reduce(Action::Click(Some("greece".into())), &config);
	assert_eq!(s.selected.as_deref(), Some("greece"));

	let s = s.reduce(Action::Click(Some("greece".into())), &config);
	assert_eq!(s.selected, None);
}

#[test]
fn background_click_and_close_deselect() {
	let config = ViewportConfig::default();
	let s = ViewState::default().reduce(Action::Click(Some("han".into())), &config);
	assert_eq!(s.clone().reduce(Action::Click(None), &config).selected, None);
	assert_eq!(s.reduce(Action::Deselect, &config).selected, None);
}

#[test]
fn background_drag_pans_and_swallows_click() {
	let config = ViewportConfig::default();
	let s = run(
		ViewState::default().reduce(Action::Click(Some("maya".into())), &config),
		vec![
			Action::PointerDown { at: Point::new(100.0, 100.0), on_node: false },
			Action::PointerMove(Point::new(130.0, 90.0)),
			Action::PointerUp,
			Action::Click(None),
		],
		&config,
	);
	assert_eq!(s.transform, Transform { x: 30.0, y: -10.0, k: 1.0 });
	assert_eq!(s.selected.as_deref(), Some("maya"), "drag must not deselect");
	assert!(!s.pan.active);
}

#[test]
fn wheel_during_drag_keeps_its_pivot() {
	let config = ViewportConfig::default();
	let pivot = Point::new(400.0, 300.0);
	let s = run(
		ViewState::new(Size::new(800.0, 600.0)),
		vec![
			Action::PointerDown { at: Point::new(100.0, 100.0), on_node: false },
			Action::Wheel { pivot, delta_y: -100.0 },
		],
		&config,
	);
	let zoomed = s.transform;
	let under_pivot = zoomed.screen_to_world(pivot);

	let s = s.reduce(Action::PointerMove(Point::new(100.0, 100.0)), &config);
	assert_eq!(s.transform, zoomed);
	assert_eq!(s.transform.screen_to_world(pivot), under_pivot);

	let s = s.reduce(Action::PointerMove(Point::new(120.0, 95.0)), &config);
	assert_eq!(s.transform.k, zoomed.k);
	assert!((s.transform.x - (zoomed.x + 20.0)).abs() < 1e-9);
	assert!((s.transform.y - (zoomed.y - 5.0)).abs() < 1e-9);
}

#[test]
fn small_jitter_still_counts_as_click() {
	let config = ViewportConfig::default();
	let s = run(
		ViewState::default().reduce(Action::Click(Some("maya".into())), &config),
		vec![
			Action::PointerDown { at: Point::new(100.0, 100.0), on_node: false },
			Action::PointerMove(Point::new(101.0, 99.0)),
			Action::PointerUp,
			Action::Click(None),
		],
		&config,
	);
	assert_eq!(s.selected, None);
}

#[test]
fn fixed_policy_ignores_drags() {
	let config = ViewportConfig {
		pan: PanPolicy::Fixed,
		..ViewportConfig::default()
	};
	let s = run(
		ViewState::default(),
		vec![
			Action::PointerDown { at: Point::new(0.0, 0.0), on_node: false },
			Action::PointerMove(Point::new(200.0, 200.0)),
			Action::PointerUp,
		],
		&config,
	);
	assert_eq!(s.transform, Transform::IDENTITY);
}

#[test]
fn pressing_a_node_does_not_pan() {
	let config = ViewportConfig::default();
	let s = run(
		ViewState::default(),
		vec![
			Action::PointerDown { at: Point::new(0.0, 0.0), on_node: true },
			Action::PointerMove(Point::new(50.0, 50.0)),
		],
		&config,
	);
	assert_eq!(s.transform, Transform::IDENTITY);
}

#[test]
fn resize_refits_stored_content() {
	let config = ViewportConfig::default();
	let node = PositionedNode { id: "x".into(), x: 0.0, y: 0.0, width: 100.0, height: 40.0 };
	let s = run(
		ViewState::new(Size::new(800.0, 600.0)),
		vec![
			Action::Fit(Bounds::of(std::slice::from_ref(&node))),
			Action::Resize(Size::new(400.0, 300.0)),
		],
		&config,
	);
	assert_eq!(s.transform.world_to_screen(node.center()), Point::new(200.0, 150.0));
}

#[test]
fn fit_without_content_resets_to_identity() {
	let config = ViewportConfig::default();
	let s = run(
		ViewState::new(Size::new(800.0, 600.0)),
		vec![Action::ZoomBy(3.0), Action::Fit(None)],
		&config,
	);
	assert_eq!(s.transform, Transform::IDENTITY);
}

#[test]
fn wheel_zooms_out_on_scroll_down() {
	let config = ViewportConfig::default();
	let s = ViewState::default().reduce(
		Action::Wheel { pivot: Point::new(0.0, 0.0), delta_y: 100.0 },
		&config,
	);
	assert_eq!(s.transform.k, 0.9);
}
