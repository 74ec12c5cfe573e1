//! Pan and zoom transform math.
//!
//! A [`Transform`] maps world coordinates (what the layout produces) to screen
//! coordinates: `screen = world * k + (x, y)`.

use crate::layout::{Point, PositionedNode};

/// Pan offset and scale applied to the whole drawing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
	/// Horizontal pan in screen pixels.
	pub x: f64,
	/// Vertical pan in screen pixels.
	pub y: f64,
	/// Scale factor.
	pub k: f64,
}

impl Default for Transform {
	fn default() -> Self {
		Self::IDENTITY
	}
}

impl Transform {
	/// No pan, unit scale.
	pub const IDENTITY: Transform = Transform {
		x: 0.0,
		y: 0.0,
		k: 1.0,
	};

	/// World coordinates of a screen point.
	pub fn screen_to_world(&self, p: Point) -> Point {
		Point::new((p.x - self.x) / self.k, (p.y - self.y) / self.k)
	}

	/// Screen coordinates of a world point.
	pub fn world_to_screen(&self, p: Point) -> Point {
		Point::new(p.x * self.k + self.x, p.y * self.k + self.y)
	}

	/// Value of an SVG `transform` attribute.
	pub fn svg_transform(&self) -> String {
		format!("translate({} {}) scale({})", self.x, self.y, self.k)
	}
}

/// Viewport dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Size {
	/// Width.
	pub width: f64,
	/// Height.
	pub height: f64,
}

impl Size {
	/// Shorthand constructor.
	pub const fn new(width: f64, height: f64) -> Self {
		Self { width, height }
	}

	/// Middle of the viewport.
	pub fn center(&self) -> Point {
		Point::new(self.width / 2.0, self.height / 2.0)
	}
}

impl Default for Size {
	fn default() -> Self {
		Self::new(800.0, 600.0)
	}
}

/// Axis-aligned bounding box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
	/// Left edge.
	pub min_x: f64,
	/// Top edge.
	pub min_y: f64,
	/// Right edge.
	pub max_x: f64,
	/// Bottom edge.
	pub max_y: f64,
}

impl Bounds {
	/// Box enclosing every node, `None` when there are none.
	pub fn of(nodes: &[PositionedNode]) -> Option<Self> {
		nodes.iter().fold(None, |acc, n| {
			let b = Bounds {
				min_x: n.x,
				min_y: n.y,
				max_x: n.x + n.width,
				max_y: n.y + n.height,
			};
			Some(match acc {
				None => b,
				Some(a) => Bounds {
					min_x: a.min_x.min(b.min_x),
					min_y: a.min_y.min(b.min_y),
					max_x: a.max_x.max(b.max_x),
					max_y: a.max_y.max(b.max_y),
				},
			})
		})
	}

	/// Grows the box by `padding` on every side.
	pub fn padded(self, padding: f64) -> Self {
		Bounds {
			min_x: self.min_x - padding,
			min_y: self.min_y - padding,
			max_x: self.max_x + padding,
			max_y: self.max_y + padding,
		}
	}

	/// Width.
	pub fn width(&self) -> f64 {
		self.max_x - self.min_x
	}

	/// Height.
	pub fn height(&self) -> f64 {
		self.max_y - self.min_y
	}

	/// Centre point.
	pub fn center(&self) -> Point {
		Point::new((self.min_x + self.max_x) / 2.0, (self.min_y + self.max_y) / 2.0)
	}
}

/// Whether dragging the background moves the view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PanPolicy {
	/// Dragging pans.
	#[default]
	Free,
	/// The view only moves through zoom and fit.
	Fixed,
}

/// Viewport limits.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportConfig {
	/// Space kept around the content when fitting.
	pub padding: f64,
	/// Smallest allowed scale.
	pub min_scale: f64,
	/// Largest allowed scale.
	pub max_scale: f64,
	/// Largest scale fitting may pick, so small graphs are not blown up.
	pub max_fit_scale: f64,
	/// Pan behaviour.
	pub pan: PanPolicy,
}

impl Default for ViewportConfig {
	fn default() -> Self {
		Self {
			padding: 40.0,
			min_scale: 0.1,
			max_scale: 10.0,
			max_fit_scale: 1.0,
			pan: PanPolicy::Free,
		}
	}
}

impl ViewportConfig {
	/// Limits `k` to the scale range. Swapped bounds are put back in order
	/// and a NaN bound is ignored.
	pub fn clamp_scale(&self, k: f64) -> f64 {
		let (lo, hi) = if self.min_scale > self.max_scale {
			(self.max_scale, self.min_scale)
		} else {
			(self.min_scale, self.max_scale)
		};
		k.max(lo).min(hi)
	}
}

/// Transform that shows every node, padded, centred in `viewport`.
pub fn fit_to_content(nodes: &[PositionedNode], viewport: Size, config: &ViewportConfig) -> Transform {
	fit_bounds(Bounds::of(nodes), viewport, config)
}

/// [`fit_to_content`] for precomputed bounds; `None` gives the identity.
pub fn fit_bounds(bounds: Option<Bounds>, viewport: Size, config: &ViewportConfig) -> Transform {
	let Some(bounds) = bounds else {
		return Transform::IDENTITY;
	};
	let padded = bounds.padded(config.padding);
	let (bw, bh) = (padded.width().max(1.0), padded.height().max(1.0));
	let k = (viewport.width / bw)
		.min(viewport.height / bh)
		.min(config.max_fit_scale);
	let k = config.clamp_scale(k);
	let c = bounds.center();
	Transform {
		x: viewport.width / 2.0 - c.x * k,
		y: viewport.height / 2.0 - c.y * k,
		k,
	}
}

/// Scales by `factor` around `pivot` (screen space), keeping the world point
/// under the pivot in place. The scale is clamped to the configured range.
pub fn zoom(t: Transform, pivot: Point, factor: f64, config: &ViewportConfig) -> Transform {
	if !factor.is_finite() || factor <= 0.0 {
		return t;
	}
	let k = config.clamp_scale(t.k * factor);
	let ratio = k / t.k;
	Transform {
		x: pivot.x - (pivot.x - t.x) * ratio,
		y: pivot.y - (pivot.y - t.y) * ratio,
		k,
	}
}

/// Translates by a screen-space delta, unless panning is fixed.
pub fn pan(t: Transform, delta: Point, policy: PanPolicy) -> Transform {
	match policy {
		PanPolicy::Free => Transform {
			x: t.x + delta.x,
			y: t.y + delta.y,
			k: t.k,
		},
		PanPolicy::Fixed => t,
	}
}

/// Zoom factor for one wheel notch.
pub fn wheel_factor(delta_y: f64) -> f64 {
	if delta_y > 0.0 { 0.9 } else { 1.1 }
}

#[cfg(test)]
mod tests {
	use super::*;

	fn close(a: Transform, b: Transform) -> bool {
		(a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9 && (a.k - b.k).abs() < 1e-12
	}

	#[test]
	fn zoom_keeps_pivot_fixed() {
		let config = ViewportConfig::default();
		let t = Transform { x: 30.0, y: -12.0, k: 0.8 };
		let pivot = Point::new(200.0, 150.0);
		let before = t.screen_to_world(pivot);
		let after = zoom(t, pivot, 1.1, &config).screen_to_world(pivot);
		assert!((before.x - after.x).abs() < 1e-9);
		assert!((before.y - after.y).abs() < 1e-9);
	}

	#[test]
	fn zoom_clamps_scale() {
		let config = ViewportConfig::default();
		let t = zoom(Transform::IDENTITY, Point::default(), 1000.0, &config);
		assert_eq!(t.k, 10.0);
		let t = zoom(Transform::IDENTITY, Point::default(), 0.0001, &config);
		assert_eq!(t.k, 0.1);
	}

	#[test]
	fn swapped_or_nan_scale_bounds_do_not_panic() {
		let swapped = ViewportConfig {
			min_scale: 10.0,
			max_scale: 0.1,
			..ViewportConfig::default()
		};
		assert_eq!(zoom(Transform::IDENTITY, Point::default(), 100.0, &swapped).k, 10.0);
		assert_eq!(zoom(Transform::IDENTITY, Point::default(), 0.001, &swapped).k, 0.1);

		let nan = ViewportConfig {
			min_scale: f64::NAN,
			..ViewportConfig::default()
		};
		assert_eq!(zoom(Transform::IDENTITY, Point::default(), 2.0, &nan).k, 2.0);
		let node = PositionedNode { id: "a".into(), x: 0.0, y: 0.0, width: 10.0, height: 10.0 };
		assert_eq!(fit_to_content(&[node], Size::new(800.0, 600.0), &swapped).k, 1.0);
	}

	#[test]
	fn zoom_ignores_bad_factor() {
		let config = ViewportConfig::default();
		let t = Transform { x: 1.0, y: 2.0, k: 3.0 };
		assert_eq!(zoom(t, Point::default(), f64::NAN, &config), t);
		assert_eq!(zoom(t, Point::default(), -2.0, &config), t);
	}

	#[test]
	fn fixed_pan_is_noop() {
		let t = Transform { x: 5.0, y: 5.0, k: 2.0 };
		assert_eq!(pan(t, Point::new(10.0, -3.0), PanPolicy::Fixed), t);
		assert!(close(
			pan(t, Point::new(10.0, -3.0), PanPolicy::Free),
			Transform { x: 15.0, y: 2.0, k: 2.0 }
		));
	}

	#[test]
	fn fit_shrinks_large_content() {
		let nodes = vec![
			PositionedNode { id: "a".into(), x: 0.0, y: 0.0, width: 100.0, height: 50.0 },
			PositionedNode { id: "b".into(), x: 1900.0, y: 1000.0, width: 100.0, height: 50.0 },
		];
		let t = fit_to_content(&nodes, Size::new(800.0, 600.0), &ViewportConfig::default());
		// padded box is 2080 x 1130, width limits
		assert!((t.k - 800.0 / 2080.0).abs() < 1e-12);
		let c = t.world_to_screen(Point::new(1000.0, 525.0));
		assert!((c.x - 400.0).abs() < 1e-9);
		assert!((c.y - 300.0).abs() < 1e-9);
	}

	#[test]
	fn wheel_direction() {
		assert_eq!(wheel_factor(120.0), 0.9);
		assert_eq!(wheel_factor(-120.0), 1.1);
	}
}
