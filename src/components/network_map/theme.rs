//! Canvas colors for the map. Marker and edge colors come from the region
//! palettes; this only covers the chrome around them.

use crate::data::Color;

/// Canvas fill behind the map.
#[derive(Clone, Debug)]
pub struct BackgroundStyle {
	pub color: Color,
	/// Center stop of the radial gradient.
	pub color_secondary: Color,
	pub use_gradient: bool,
	/// 0.0 = none, 1.0 = strong.
	pub vignette: f64,
}

/// Colors of the hover ring and label.
#[derive(Clone, Debug)]
pub struct HighlightStyle {
	pub ring_color: Color,
	pub label_color: Color,
	/// Opacity multiplier for everything outside the hovered neighbourhood.
	pub dim_alpha: f64,
	/// Marker radius multiplier at full highlight.
	pub grow: f64,
}

#[derive(Clone, Debug)]
pub struct MapTheme {
	pub background: BackgroundStyle,
	pub highlight: HighlightStyle,
	/// Graticule lines every `graticule_step` degrees; `None` hides them.
	pub graticule_step: Option<f64>,
	pub graticule_color: Color,
}

impl Default for MapTheme {
	fn default() -> Self {
		Self {
			background: BackgroundStyle {
				color: Color::hex(0x0b1120),
				color_secondary: Color::hex(0x111a2e),
				use_gradient: true,
				vignette: 0.18,
			},
			highlight: HighlightStyle {
				ring_color: Color::rgb(255, 255, 255),
				label_color: Color::hex(0xe2e8f0),
				dim_alpha: 0.25,
				grow: 0.35,
			},
			graticule_step: Some(10.0),
			graticule_color: Color::rgba(148, 163, 184, 0.08),
		}
	}
}
