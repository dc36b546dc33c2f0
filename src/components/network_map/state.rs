//! Map view state: projection, pan and zoom, and hover highlighting.
//!
//! Cities are placed with an equirectangular projection fitted to the canvas,
//! so world space equals screen space at the identity transform. Pan and zoom
//! are applied on top as a [`ViewTransform`].

use super::scale::{MapScaleConfig, ScaledValues};
use super::types::{MapData, MapNode};

/// Canvas margin kept free around the fitted cities, in pixels.
const FIT_PADDING: f64 = 40.0;

/// Pointer travel (pixels) after which a press counts as a drag, not a click.
const CLICK_TOLERANCE: f64 = 4.0;

/// Longitude/latitude extent of a set of cities.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeoBounds {
	pub min_lng: f64,
	pub max_lng: f64,
	pub min_lat: f64,
	pub max_lat: f64,
}

impl GeoBounds {
	/// Extent of the nodes with finite coordinates, if any.
	pub fn of(nodes: &[MapNode]) -> Option<Self> {
		nodes
			.iter()
			.filter(|n| n.lat.is_finite() && n.lng.is_finite())
			.fold(None, |acc: Option<Self>, n| {
				Some(match acc {
					None => Self {
						min_lng: n.lng,
						max_lng: n.lng,
						min_lat: n.lat,
						max_lat: n.lat,
					},
					Some(b) => Self {
						min_lng: b.min_lng.min(n.lng),
						max_lng: b.max_lng.max(n.lng),
						min_lat: b.min_lat.min(n.lat),
						max_lat: b.max_lat.max(n.lat),
					},
				})
			})
	}
}

/// Equirectangular projection scaled and centered to fit a canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projection {
	pub bounds: GeoBounds,
	/// Pixels per degree, equal on both axes.
	pub scale: f64,
	offset_x: f64,
	offset_y: f64,
}

impl Projection {
	/// Projection fitting every node into a `width` x `height` canvas.
	pub fn fit(nodes: &[MapNode], width: f64, height: f64) -> Self {
		let bounds = GeoBounds::of(nodes).unwrap_or(GeoBounds {
			min_lng: -180.0,
			max_lng: 180.0,
			min_lat: -90.0,
			max_lat: 90.0,
		});
		// A lone city (or a line of them) still needs a non-zero span.
		let span_lng = (bounds.max_lng - bounds.min_lng).max(1.0);
		let span_lat = (bounds.max_lat - bounds.min_lat).max(1.0);

		let avail_w = (width - 2.0 * FIT_PADDING).max(1.0);
		let avail_h = (height - 2.0 * FIT_PADDING).max(1.0);
		let scale = (avail_w / span_lng).min(avail_h / span_lat);

		let center_lng = (bounds.min_lng + bounds.max_lng) / 2.0;
		let center_lat = (bounds.min_lat + bounds.max_lat) / 2.0;

		Self {
			bounds,
			scale,
			offset_x: width / 2.0 - center_lng * scale,
			offset_y: height / 2.0 + center_lat * scale,
		}
	}

	/// Canvas position of a coordinate. North is up.
	pub fn project(&self, lng: f64, lat: f64) -> (f64, f64) {
		(self.offset_x + lng * self.scale, self.offset_y - lat * self.scale)
	}
}

/// Pan and zoom applied on top of the projection.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewTransform {
	pub x: f64,
	pub y: f64,
	/// Zoom factor, clamped to the config's limits.
	pub k: f64,
}

impl Default for ViewTransform {
	fn default() -> Self {
		Self { x: 0.0, y: 0.0, k: 1.0 }
	}
}

/// Drag state between mousedown and mouseup.
#[derive(Clone, Debug, Default)]
pub struct PanState {
	pub active: bool,
	/// Set once the pointer has moved past the click tolerance.
	pub moved: bool,
	pub start_x: f64,
	pub start_y: f64,
	pub transform_start_x: f64,
	pub transform_start_y: f64,
}

/// Hover highlight with smoothed per-node intensities.
///
/// The hovered city and its neighbours fade towards 1.0, everything else
/// decays towards 0.0, so moving between cities cross-fades instead of
/// flashing.
#[derive(Clone, Debug, Default)]
pub struct HighlightState {
	pub hovered: Option<usize>,
	/// Last hovered city; its ring keeps fading after the pointer leaves.
	ring_node: Option<usize>,
	ring: f64,
	in_target: Vec<bool>,
	intensity: Vec<f64>,
	max: f64,
}

impl HighlightState {
	const FADE_IN_SPEED: f64 = 6.0;
	const FADE_OUT_SPEED: f64 = 4.0;
	const VISIBLE: f64 = 0.005;

	fn with_len(len: usize) -> Self {
		Self {
			in_target: vec![false; len],
			intensity: vec![0.0; len],
			..Self::default()
		}
	}

	/// Starts fading towards `node` and its neighbours.
	pub fn set_hover(&mut self, node: Option<usize>, data: &MapData) {
		if self.hovered == node {
			return;
		}
		self.hovered = node;
		self.in_target.iter_mut().for_each(|t| *t = false);

		if let Some(idx) = node {
			self.ring_node = Some(idx);
			for n in std::iter::once(idx).chain(data.neighbors(idx)) {
				if let Some(t) = self.in_target.get_mut(n) {
					*t = true;
				}
			}
		}
	}

	pub fn tick(&mut self, dt: f64) {
		let rise = 1.0 - (-Self::FADE_IN_SPEED * dt).exp();
		let decay = (-Self::FADE_OUT_SPEED * dt).exp();

		let mut max: f64 = 0.0;
		for (value, &target) in self.intensity.iter_mut().zip(&self.in_target) {
			if target {
				*value += (1.0 - *value) * rise;
			} else {
				*value *= decay;
				if *value < Self::VISIBLE {
					*value = 0.0;
				}
			}
			max = max.max(*value);
		}
		self.max = max;

		if self.hovered.is_some() {
			self.ring += (1.0 - self.ring) * rise;
		} else {
			self.ring *= decay;
			if self.ring < Self::VISIBLE {
				self.ring = 0.0;
				self.ring_node = None;
			}
		}
	}

	/// Highlight of node `idx` in `0.0..=1.0`.
	pub fn node_intensity(&self, idx: usize) -> f64 {
		self.intensity.get(idx).copied().unwrap_or(0.0)
	}

	/// Ring strength around `idx`; only the hovered city has one.
	pub fn ring_intensity(&self, idx: usize) -> f64 {
		if self.ring_node == Some(idx) { self.ring } else { 0.0 }
	}

	/// Links touching the ringed city light up with their far end.
	pub fn link_intensity(&self, source: usize, target: usize) -> f64 {
		match self.ring_node {
			Some(r) if r == source || r == target => {
				self.node_intensity(source).min(self.node_intensity(target))
			}
			_ => 0.0,
		}
	}

	/// Strongest highlight currently shown; dims the rest of the map.
	pub fn max_intensity(&self) -> f64 {
		self.max
	}
}

/// Everything the renderer reads each frame.
pub struct MapState {
	pub data: MapData,
	pub projection: Projection,
	/// Projected position per node, same order as `data.nodes`.
	pub positions: Vec<(f64, f64)>,
	pub transform: ViewTransform,
	pub pan: PanState,
	pub highlight: HighlightState,
	pub width: f64,
	pub height: f64,
}

impl MapState {
	/// State for `data` fitted to a `width` x `height` canvas.
	pub fn new(data: MapData, width: f64, height: f64) -> Self {
		let projection = Projection::fit(&data.nodes, width, height);
		let mut state = Self {
			highlight: HighlightState::with_len(data.nodes.len()),
			positions: Vec::new(),
			data,
			projection,
			transform: ViewTransform::default(),
			pan: PanState::default(),
			width,
			height,
		};
		state.reproject();
		state
	}

	/// Replaces the drawn cities and edges, refitting when the cities change.
	pub fn set_data(&mut self, data: MapData) {
		let same_cities = self.data.nodes.len() == data.nodes.len()
			&& self.data.nodes.iter().zip(&data.nodes).all(|(a, b)| a.id == b.id);
		self.data = data;
		self.highlight = HighlightState::with_len(self.data.nodes.len());
		if !same_cities {
			self.transform = ViewTransform::default();
			self.projection = Projection::fit(&self.data.nodes, self.width, self.height);
		}
		self.reproject();
	}

	/// Refits the projection to a new canvas size.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
		self.projection = Projection::fit(&self.data.nodes, width, height);
		self.reproject();
	}

	fn reproject(&mut self) {
		let projection = self.projection;
		self.positions = self
			.data
			.nodes
			.iter()
			.map(|n| projection.project(n.lng, n.lat))
			.collect();
	}

	/// Inverse of the view transform.
	pub fn screen_to_world(&self, sx: f64, sy: f64) -> (f64, f64) {
		(
			(sx - self.transform.x) / self.transform.k,
			(sy - self.transform.y) / self.transform.k,
		)
	}

	/// Closest city within its hit radius of the screen point.
	pub fn node_at_position(&self, sx: f64, sy: f64, config: &MapScaleConfig) -> Option<usize> {
		let (wx, wy) = self.screen_to_world(sx, sy);
		let scale = ScaledValues::new(config, self.transform.k);
		self.positions
			.iter()
			.zip(&self.data.nodes)
			.enumerate()
			.filter_map(|(i, (&(x, y), node))| {
				let dist = ((x - wx).powi(2) + (y - wy).powi(2)).sqrt();
				(dist <= scale.hit_radius(node.style.radius)).then_some((i, dist))
			})
			.min_by(|a, b| a.1.total_cmp(&b.1))
			.map(|(i, _)| i)
	}

	/// Zooms by `factor` keeping the screen point `(sx, sy)` fixed.
	pub fn zoom_at(&mut self, sx: f64, sy: f64, factor: f64, config: &MapScaleConfig) {
		let t = &mut self.transform;
		let new_k = (t.k * factor).clamp(config.min_zoom, config.max_zoom);
		let ratio = new_k / t.k;
		t.x = sx - (sx - t.x) * ratio;
		t.y = sy - (sy - t.y) * ratio;
		t.k = new_k;
	}

	/// Starts a drag at screen point `(sx, sy)`.
	pub fn begin_pan(&mut self, sx: f64, sy: f64) {
		self.pan = PanState {
			active: true,
			moved: false,
			start_x: sx,
			start_y: sy,
			transform_start_x: self.transform.x,
			transform_start_y: self.transform.y,
		};
	}

	/// Moves the view with the pointer.
	pub fn pan_to(&mut self, sx: f64, sy: f64) {
		if !self.pan.active {
			return;
		}
		let (dx, dy) = (sx - self.pan.start_x, sy - self.pan.start_y);
		if dx.hypot(dy) > CLICK_TOLERANCE {
			self.pan.moved = true;
		}
		if self.pan.moved {
			self.transform.x = self.pan.transform_start_x + dx;
			self.transform.y = self.pan.transform_start_y + dy;
		}
	}

	/// Ends a press. Returns true when it was a click rather than a drag.
	pub fn end_pan(&mut self) -> bool {
		let was_click = self.pan.active && !self.pan.moved;
		self.pan.active = false;
		self.pan.moved = false;
		was_click
	}

	/// Hovers `node`, or nothing.
	pub fn set_hover(&mut self, node: Option<usize>) {
		self.highlight.set_hover(node, &self.data);
	}

	pub fn tick(&mut self, dt: f64) {
		self.highlight.tick(dt);
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::data::NEUTRAL;
	use crate::views::network::MarkerStyle;

	use super::super::types::MapLink;

	fn node(id: &str, lng: f64, lat: f64) -> MapNode {
		MapNode {
			id: id.into(),
			label: id.into(),
			lat,
			lng,
			style: MarkerStyle {
				radius: 5.0,
				fill: NEUTRAL,
				fill_opacity: 0.7,
				stroke: NEUTRAL,
				stroke_width: 1.0,
			},
			always_labeled: false,
		}
	}

	fn link(source: usize, target: usize) -> MapLink {
		MapLink {
			source,
			target,
			color: NEUTRAL,
			width: 1.0,
		}
	}

	fn triangle() -> MapData {
		MapData {
			nodes: vec![node("a", -10.0, 0.0), node("b", 10.0, 0.0), node("c", 0.0, 10.0)],
			links: vec![link(0, 1), link(1, 2)],
		}
	}

	#[test]
	fn fit_keeps_cities_inside_padding() {
		let state = MapState::new(triangle(), 800.0, 600.0);
		for &(x, y) in &state.positions {
			assert!((FIT_PADDING - 1e-9..=800.0 - FIT_PADDING + 1e-9).contains(&x));
			assert!((FIT_PADDING - 1e-9..=600.0 - FIT_PADDING + 1e-9).contains(&y));
		}
	}

	#[test]
	fn projection_puts_north_up_and_east_right() {
		let state = MapState::new(triangle(), 800.0, 600.0);
		let (a, b, c) = (state.positions[0], state.positions[1], state.positions[2]);
		assert!(b.0 > a.0);
		assert!(c.1 < a.1);
		assert!((a.1 - b.1).abs() < 1e-9);
	}

	#[test]
	fn single_city_is_centered() {
		let data = MapData {
			nodes: vec![node("only", 3.4, 6.5)],
			links: vec![],
		};
		let state = MapState::new(data, 400.0, 300.0);
		let (x, y) = state.positions[0];
		assert!((x - 200.0).abs() < 1e-9);
		assert!((y - 150.0).abs() < 1e-9);
	}

	#[test]
	fn empty_map_does_not_panic() {
		let state = MapState::new(MapData::default(), 400.0, 300.0);
		assert!(state.positions.is_empty());
		assert_eq!(state.node_at_position(200.0, 150.0, &MapScaleConfig::default()), None);
	}

	#[test]
	fn picks_nearest_city_under_pointer() {
		let state = MapState::new(triangle(), 800.0, 600.0);
		let config = MapScaleConfig::default();
		let (bx, by) = state.positions[1];
		assert_eq!(state.node_at_position(bx + 2.0, by, &config), Some(1));
		assert_eq!(state.node_at_position(bx + 50.0, by + 50.0, &config), None);
	}

	#[test]
	fn zoom_keeps_anchor_point_fixed() {
		let mut state = MapState::new(triangle(), 800.0, 600.0);
		let config = MapScaleConfig::default();
		let before = state.screen_to_world(300.0, 200.0);
		state.zoom_at(300.0, 200.0, 2.0, &config);
		let after = state.screen_to_world(300.0, 200.0);
		assert!((before.0 - after.0).abs() < 1e-9);
		assert!((before.1 - after.1).abs() < 1e-9);
		assert_eq!(state.transform.k, 2.0);

		state.zoom_at(0.0, 0.0, 1000.0, &config);
		assert_eq!(state.transform.k, config.max_zoom);
	}

	#[test]
	fn short_press_is_a_click_long_drag_pans() {
		let mut state = MapState::new(triangle(), 800.0, 600.0);
		state.begin_pan(100.0, 100.0);
		state.pan_to(101.0, 101.0);
		assert_eq!(state.transform.x, 0.0);
		assert!(state.end_pan());

		state.begin_pan(100.0, 100.0);
		state.pan_to(130.0, 90.0);
		assert!(!state.end_pan());
		assert_eq!((state.transform.x, state.transform.y), (30.0, -10.0));
	}

	#[test]
	fn hover_lights_city_and_neighbors() {
		let mut state = MapState::new(triangle(), 800.0, 600.0);
		state.set_hover(Some(0));
		for _ in 0..60 {
			state.tick(0.016);
		}
		assert!(state.highlight.node_intensity(0) > 0.9);
		assert!(state.highlight.node_intensity(1) > 0.9);
		assert_eq!(state.highlight.node_intensity(2), 0.0);
		assert!(state.highlight.link_intensity(0, 1) > 0.9);
		assert_eq!(state.highlight.link_intensity(1, 2), 0.0);
		assert!(state.highlight.ring_intensity(0) > 0.9);

		state.set_hover(None);
		for _ in 0..200 {
			state.tick(0.016);
		}
		assert_eq!(state.highlight.max_intensity(), 0.0);
		assert_eq!(state.highlight.ring_intensity(0), 0.0);
	}

	#[test]
	fn new_links_keep_view_new_cities_reset_it() {
		let mut state = MapState::new(triangle(), 800.0, 600.0);
		state.transform.k = 3.0;
		let mut fewer_links = triangle();
		fewer_links.links.pop();
		state.set_data(fewer_links);
		assert_eq!(state.transform.k, 3.0);

		state.set_data(MapData {
			nodes: vec![node("x", 0.0, 0.0)],
			links: vec![],
		});
		assert_eq!(state.transform, ViewTransform::default());
		assert_eq!(state.positions.len(), 1);
	}
}
