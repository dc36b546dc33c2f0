//! Zoom-dependent sizing for map visuals.
//!
//! World space is the fitted projection in canvas pixels at zoom `k = 1`.
//! Anything specified in screen pixels is divided by `k` before drawing, since
//! drawing happens after the canvas transform.

/// How a size reacts to the zoom level `k`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScaleBehavior {
	/// Fixed pixel size on screen.
	Screen,
	/// Grows with the map but stays within `min_screen..=max_screen` pixels.
	Clamped { min_screen: f64, max_screen: f64 },
}

impl ScaleBehavior {
	/// World-space size for `base` at zoom `k`.
	pub fn apply(self, base: f64, k: f64) -> f64 {
		match self {
			ScaleBehavior::Screen => base / k,
			ScaleBehavior::Clamped {
				min_screen,
				max_screen,
			} => base.clamp(min_screen / k, max_screen / k),
		}
	}
}

/// How an opacity multiplier reacts to the zoom level.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AlphaBehavior {
	Constant,
	/// Invisible at or below `zero_alpha_k`, opaque at or above `full_alpha_k`.
	Fade { zero_alpha_k: f64, full_alpha_k: f64 },
}

impl AlphaBehavior {
	/// Opacity multiplier at zoom `k`.
	pub fn apply(self, k: f64) -> f64 {
		match self {
			AlphaBehavior::Constant => 1.0,
			AlphaBehavior::Fade {
				zero_alpha_k,
				full_alpha_k,
			} => {
				if zero_alpha_k == full_alpha_k {
					return 1.0;
				}
				((k - zero_alpha_k) / (full_alpha_k - zero_alpha_k)).clamp(0.0, 1.0)
			}
		}
	}
}

/// Zoom behaviour of city markers.
#[derive(Clone, Debug)]
pub struct MarkerScaleConfig {
	/// Applied to each marker's own radius.
	pub radius_behavior: ScaleBehavior,
	/// Extra pick distance around a marker, in screen pixels.
	pub hit_padding: f64,
	/// Marker stroke widths are in screen pixels.
	pub stroke_behavior: ScaleBehavior,
}

/// Zoom behaviour of edge strokes.
#[derive(Clone, Debug)]
pub struct EdgeScaleConfig {
	/// Applied to each edge's own width.
	pub width_behavior: ScaleBehavior,
	/// Edge opacity when nothing is hovered.
	pub base_alpha: f64,
}

/// Zoom behaviour of city labels.
#[derive(Clone, Debug)]
pub struct LabelScaleConfig {
	/// Font size in screen pixels.
	pub size: f64,
	/// Labels of ordinary cities fade in as the user zooms.
	pub alpha_behavior: AlphaBehavior,
	/// Below this alpha a label is skipped.
	pub cull_alpha: f64,
}

/// Size of the hover ring.
#[derive(Clone, Debug)]
pub struct RingScaleConfig {
	/// Hover ring stroke, screen pixels.
	pub width: f64,
	/// Gap between marker and ring, screen pixels.
	pub offset: f64,
}

/// Zoom behaviour of every map element, plus zoom limits.
#[derive(Clone, Debug)]
pub struct MapScaleConfig {
	pub marker: MarkerScaleConfig,
	pub edge: EdgeScaleConfig,
	pub label: LabelScaleConfig,
	pub ring: RingScaleConfig,
	pub min_zoom: f64,
	pub max_zoom: f64,
	/// Zoom change per wheel notch.
	pub wheel_factor: f64,
}

impl Default for MapScaleConfig {
	fn default() -> Self {
		Self {
			marker: MarkerScaleConfig {
				radius_behavior: ScaleBehavior::Clamped {
					min_screen: 2.0,
					max_screen: 16.0,
				},
				hit_padding: 4.0,
				stroke_behavior: ScaleBehavior::Screen,
			},
			edge: EdgeScaleConfig {
				width_behavior: ScaleBehavior::Screen,
				base_alpha: 0.55,
			},
			label: LabelScaleConfig {
				size: 11.0,
				alpha_behavior: AlphaBehavior::Fade {
					zero_alpha_k: 1.4,
					full_alpha_k: 2.2,
				},
				cull_alpha: 0.05,
			},
			ring: RingScaleConfig {
				width: 1.5,
				offset: 3.0,
			},
			min_zoom: 0.5,
			max_zoom: 12.0,
			wheel_factor: 1.1,
		}
	}
}

/// Scale values for one frame at zoom `k`.
#[derive(Clone, Debug)]
pub struct ScaledValues {
	pub k: f64,
	marker_radius: ScaleBehavior,
	marker_stroke: ScaleBehavior,
	edge_width: ScaleBehavior,
	pub hit_padding: f64,
	pub label_font: String,
	pub label_offset: f64,
	pub label_alpha: f64,
	pub cull_labels: bool,
	pub ring_width: f64,
	pub ring_offset: f64,
	pub edge_alpha: f64,
}

impl ScaledValues {
	/// Resolves `config` at zoom `k`.
	pub fn new(config: &MapScaleConfig, k: f64) -> Self {
		let label_alpha = config.label.alpha_behavior.apply(k);
		Self {
			k,
			marker_radius: config.marker.radius_behavior,
			marker_stroke: config.marker.stroke_behavior,
			edge_width: config.edge.width_behavior,
			hit_padding: config.marker.hit_padding / k,
			label_font: format!("{}px sans-serif", config.label.size / k),
			label_offset: 4.0 / k,
			label_alpha,
			cull_labels: label_alpha < config.label.cull_alpha,
			ring_width: config.ring.width / k,
			ring_offset: config.ring.offset / k,
			edge_alpha: config.edge.base_alpha,
		}
	}

	/// World-space radius of a marker with base radius `base`.
	pub fn marker_radius(&self, base: f64) -> f64 {
		self.marker_radius.apply(base, self.k)
	}

	/// World-space marker stroke width.
	pub fn marker_stroke(&self, base: f64) -> f64 {
		self.marker_stroke.apply(base, self.k)
	}

	/// World-space width of an edge with base width `base`.
	pub fn edge_width(&self, base: f64) -> f64 {
		self.edge_width.apply(base, self.k)
	}

	/// World-space distance within which a marker of radius `base` is picked.
	pub fn hit_radius(&self, base: f64) -> f64 {
		self.marker_radius(base) + self.hit_padding
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn screen_sizes_shrink_in_world_space_when_zoomed_in() {
		assert_eq!(ScaleBehavior::Screen.apply(4.0, 2.0), 2.0);
	}

	#[test]
	fn clamped_size_respects_screen_bounds() {
		let b = ScaleBehavior::Clamped {
			min_screen: 2.0,
			max_screen: 16.0,
		};
		// 7 world units at k = 4 would be 28px; capped to 16px.
		assert_eq!(b.apply(7.0, 4.0), 4.0);
		// 3 world units at k = 0.5 would be 1.5px; raised to 2px.
		assert_eq!(b.apply(3.0, 0.5), 4.0);
		assert_eq!(b.apply(5.0, 1.0), 5.0);
	}

	#[test]
	fn fade_ramps_between_thresholds() {
		let f = AlphaBehavior::Fade {
			zero_alpha_k: 1.0,
			full_alpha_k: 3.0,
		};
		assert_eq!(f.apply(0.5), 0.0);
		assert_eq!(f.apply(2.0), 0.5);
		assert_eq!(f.apply(5.0), 1.0);
		assert_eq!(AlphaBehavior::Constant.apply(0.1), 1.0);
	}

	#[test]
	fn labels_are_culled_at_default_zoom() {
		let scale = ScaledValues::new(&MapScaleConfig::default(), 1.0);
		assert!(scale.cull_labels);
		let zoomed = ScaledValues::new(&MapScaleConfig::default(), 3.0);
		assert!(!zoomed.cull_labels);
	}

	#[test]
	fn hit_radius_adds_padding() {
		let scale = ScaledValues::new(&MapScaleConfig::default(), 1.0);
		assert_eq!(scale.hit_radius(5.0), 9.0);
	}
}
