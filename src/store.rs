//! View state of a tree and the single function that updates it.
//!
//! The component never mutates [`ViewState`] directly; it turns DOM events
//! into [`Action`]s and feeds them through [`ViewState::reduce`].

use crate::layout::Point;
use crate::viewport::{self, Bounds, Size, Transform, ViewportConfig};

/// Pointer travel, in pixels, after which a drag no longer counts as a click.
pub const CLICK_SLOP: f64 = 3.0;

/// Background drag in progress.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PanDrag {
	/// A drag is under way.
	pub active: bool,
	/// Travelled further than [`CLICK_SLOP`] since the pointer went down.
	pub moved: bool,
	/// Pointer position at drag start.
	pub start: Point,
	/// Pointer position the transform was last panned to.
	pub last: Point,
}

/// Everything the renderer needs besides the layout itself.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ViewState {
	/// Current pan and zoom.
	pub transform: Transform,
	/// Viewport size in pixels.
	pub viewport: Size,
	/// Bounds of the displayed layout, kept for refitting.
	pub content: Option<Bounds>,
	/// Node under the pointer.
	pub hovered: Option<String>,
	/// Node shown in the detail panel.
	pub selected: Option<String>,
	/// Background drag.
	pub pan: PanDrag,
}

/// Input to [`ViewState::reduce`].
#[derive(Clone, Debug, PartialEq)]
pub enum Action {
	/// A new layout was accepted; fit the view to its bounds.
	Fit(Option<Bounds>),
	/// Fit the view to the current content again.
	Refit,
	/// The viewport changed size. The view is refitted.
	Resize(Size),
	/// Wheel notch at a screen position.
	Wheel {
		/// Pointer position.
		pivot: Point,
		/// Wheel delta; positive scrolls down and zooms out.
		delta_y: f64,
	},
	/// Zoom around the viewport centre.
	ZoomBy(f64),
	/// Pointer pressed.
	PointerDown {
		/// Screen position.
		at: Point,
		/// Pressed on a node rather than the background.
		on_node: bool,
	},
	/// Pointer moved.
	PointerMove(Point),
	/// Pointer released.
	PointerUp,
	/// Pointer left the drawing surface.
	PointerLeave,
	/// Pointer entered a node, or left one for `None`.
	Hover(Option<String>),
	/// Click on a node, or on the background for `None`.
	Click(Option<String>),
	/// Close the detail panel.
	Deselect,
}

impl ViewState {
	/// Initial state for a viewport of the given size.
	pub fn new(viewport: Size) -> Self {
		Self {
			viewport,
			..Self::default()
		}
	}

	/// Applies one action.
	pub fn reduce(mut self, action: Action, config: &ViewportConfig) -> Self {
		match action {
			Action::Fit(content) => {
				self.content = content;
				self.refit(config);
			}
			Action::Refit => self.refit(config),
			Action::Resize(size) => {
				self.viewport = size;
				self.refit(config);
			}
			Action::Wheel { pivot, delta_y } => {
				self.transform = viewport::zoom(self.transform, pivot, viewport::wheel_factor(delta_y), config);
			}
			Action::ZoomBy(factor) => {
				self.transform = viewport::zoom(self.transform, self.viewport.center(), factor, config);
			}
			Action::PointerDown { at, on_node } => {
				self.pan = PanDrag {
					active: !on_node && config.pan == viewport::PanPolicy::Free,
					moved: false,
					start: at,
					last: at,
				};
			}
			Action::PointerMove(at) => {
				if self.pan.active {
					let travel = Point::new(at.x - self.pan.start.x, at.y - self.pan.start.y);
					if travel.x.abs() > CLICK_SLOP || travel.y.abs() > CLICK_SLOP {
						self.pan.moved = true;
					}
					// Incremental, so zooming mid-drag keeps its pivot.
					let delta = Point::new(at.x - self.pan.last.x, at.y - self.pan.last.y);
					self.transform = viewport::pan(self.transform, delta, config.pan);
					self.pan.last = at;
				}
			}
			Action::PointerUp => self.pan.active = false,
			Action::PointerLeave => {
				self.pan.active = false;
				self.hovered = None;
			}
			Action::Hover(id) => self.hovered = id,
			Action::Click(target) => {
				if self.pan.moved {
					self.pan.moved = false;
					return self;
				}
				self.selected = match target {
					Some(id) if self.selected.as_deref() == Some(id.as_str()) => None,
					other => other,
				};
			}
			Action::Deselect => self.selected = None,
		}
		self
	}

	fn refit(&mut self, config: &ViewportConfig) {
		self.transform = viewport::fit_bounds(self.content, self.viewport, config);
	}
}
