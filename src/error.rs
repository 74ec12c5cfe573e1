//! Error types for layout and DOM access.

use thiserror::Error;

/// Reasons a layout pass produces nothing.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum LayoutError {
	/// No node carries the longitude the tree orders its layers by.
	#[error("no node among {placeable} placeable nodes carries a longitude")]
	MissingOrderingKey {
		/// Number of nodes that had a temporal attribute.
		placeable: usize,
	},
}

/// DOM lookups the tree component depends on.
#[derive(Debug, Error)]
pub enum DomError {
	/// `window` is not available.
	#[error("no global window")]
	NoWindow,
	/// A window dimension could not be read as a number.
	#[error("window {0} is not a number")]
	Dimension(&'static str),
	/// The SVG element has not been mounted yet.
	#[error("svg element not mounted")]
	Unmounted,
}
