//! Network map projections: edge-type filter, city markers and edge strokes.

use std::collections::BTreeSet;

use crate::data::palette::{FTZ_RING, edge_type_table};
use crate::data::{City, Color, DatasetBundle, Edge, Region, resolve_bloc_color, resolve_edge_type_color};

/// Edge types currently shown on the map.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EdgeTypeFilter {
	enabled: BTreeSet<String>,
}

impl EdgeTypeFilter {
	/// Filter with every edge type present in the bundle enabled.
	pub fn all_of(bundle: &DatasetBundle) -> Self {
		Self {
			enabled: edge_types(bundle).into_iter().collect(),
		}
	}

	/// Whether edges of `edge_type` are drawn.
	pub fn is_enabled(&self, edge_type: &str) -> bool {
		self.enabled.contains(edge_type)
	}

	/// Flips `edge_type` on or off.
	pub fn toggle(&mut self, edge_type: &str) {
		if !self.enabled.remove(edge_type) {
			self.enabled.insert(edge_type.to_string());
		}
	}
}

/// Edge types present in the bundle, with the region's palette order first.
pub fn edge_types(bundle: &DatasetBundle) -> Vec<String> {
	let present: BTreeSet<&str> = bundle.edges().iter().map(|e| e.edge_type.as_str()).collect();
	let region = bundle.region();

	let palette_order = edge_type_table(region)
		.iter()
		.chain(edge_type_table(Region::DEFAULT))
		.map(|&(k, _)| k)
		.filter(|k| present.contains(k));

	let mut ordered: Vec<String> = Vec::with_capacity(present.len());
	for kind in palette_order.chain(present.iter().copied()) {
		if !ordered.iter().any(|k| k == kind) {
			ordered.push(kind.to_string());
		}
	}
	ordered
}

/// An edge drawn on the map, endpoints resolved.
#[derive(Clone, Debug, PartialEq)]
pub struct MapEdge<'a> {
	pub edge: &'a Edge,
	pub source: &'a City,
	pub target: &'a City,
	pub color: Color,
	pub width: f64,
}

/// Stroke width for an edge weight.
pub fn edge_width(weight: f64) -> f64 {
	(weight * 2.5).max(1.0)
}

/// Active edges of enabled types whose endpoints both exist.
pub fn visible_edges<'a>(bundle: &'a DatasetBundle, filter: &EdgeTypeFilter) -> Vec<MapEdge<'a>> {
	let region = bundle.region();
	bundle
		.resolved_edges()
		.filter(|(e, _, _)| e.is_active && filter.is_enabled(&e.edge_type))
		.map(|(edge, source, target)| MapEdge {
			edge,
			source,
			target,
			color: resolve_edge_type_color(&edge.edge_type, region),
			width: edge_width(edge.weight),
		})
		.collect()
}

/// Circle marker appearance for a city.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarkerStyle {
	pub radius: f64,
	pub fill: Color,
	pub fill_opacity: f64,
	pub stroke: Color,
	pub stroke_width: f64,
}

impl MarkerStyle {
	/// Marker for `city`, colored by its bloc in `region`.
	pub fn for_city(city: &City, region: Region) -> Self {
		let fill = resolve_bloc_color(&city.bloc, region);
		let radius = if city.is_ftz_target {
			7.0
		} else if city.is_port {
			5.0
		} else if city.is_capital {
			4.0
		} else {
			3.0
		};
		if city.is_ftz_target {
			Self {
				radius,
				fill,
				fill_opacity: 0.9,
				stroke: FTZ_RING,
				stroke_width: 2.0,
			}
		} else {
			Self {
				radius,
				fill,
				fill_opacity: 0.7,
				stroke: fill,
				stroke_width: 1.0,
			}
		}
	}
}

/// Bloc legend entries for the cities present, in first-seen order.
pub fn bloc_legend(bundle: &DatasetBundle) -> Vec<(String, Color)> {
	let region = bundle.region();
	let mut seen = BTreeSet::new();
	bundle
		.cities()
		.iter()
		.filter(|c| seen.insert(c.bloc.as_str()))
		.map(|c| (c.bloc.clone(), resolve_bloc_color(&c.bloc, region)))
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::data::NEUTRAL;

	fn bundle() -> DatasetBundle {
		DatasetBundle::from_json(
			Region::Europe,
			r#"{
				"cities": [
					{ "id": "rtm", "name": "Rotterdam", "lat": 51.9, "lng": 4.5, "country": "NL", "bloc": "EU",
						"is_port": true, "is_ftz_target": true },
					{ "id": "oslo", "name": "Oslo", "lat": 59.9, "lng": 10.8, "country": "NO", "bloc": "EEA",
						"is_capital": true },
					{ "id": "zrh", "name": "Zurich", "lat": 47.4, "lng": 8.5, "country": "CH", "bloc": "EFTA" }
				],
				"edges": [
					{ "source": "rtm", "target": "oslo", "edge_type": "ENERGY", "weight": 0.8 },
					{ "source": "oslo", "target": "zrh", "edge_type": "TRADE", "weight": 0.2 },
					{ "source": "zrh", "target": "rtm", "edge_type": "TRADE", "is_active": false },
					{ "source": "zrh", "target": "gone", "edge_type": "TRADE" },
					{ "source": "rtm", "target": "zrh", "edge_type": "SMUGGLING" }
				]
			}"#,
		)
		.unwrap()
	}

	#[test]
	fn edge_types_follow_palette_order() {
		assert_eq!(edge_types(&bundle()), ["ENERGY", "TRADE", "SMUGGLING"]);
	}

	#[test]
	fn visible_edges_skip_inactive_dangling_and_disabled() {
		let b = bundle();
		let mut filter = EdgeTypeFilter::all_of(&b);
		let pairs = |f: &EdgeTypeFilter| -> Vec<(String, String)> {
			visible_edges(&b, f)
				.iter()
				.map(|e| (e.source.id.clone(), e.target.id.clone()))
				.collect()
		};
		assert_eq!(pairs(&filter).len(), 3);

		filter.toggle("TRADE");
		assert!(!filter.is_enabled("TRADE"));
		assert_eq!(
			pairs(&filter),
			[("rtm".to_string(), "oslo".to_string()), ("rtm".to_string(), "zrh".to_string())]
		);

		filter.toggle("TRADE");
		assert!(filter.is_enabled("TRADE"));
	}

	#[test]
	fn edges_carry_type_color_and_width() {
		let b = bundle();
		let edges = visible_edges(&b, &EdgeTypeFilter::all_of(&b));
		assert_eq!(edges[0].color, resolve_edge_type_color("ENERGY", Region::Europe));
		assert!((edges[0].width - 2.0).abs() < 1e-9);
		assert_eq!(edges[1].width, 1.0);
		assert_eq!(edges[2].color, NEUTRAL);
	}

	#[test]
	fn markers_scale_with_city_role() {
		let b = bundle();
		let style = |id: &str| MarkerStyle::for_city(b.city(id).unwrap(), Region::Europe);
		assert_eq!(style("rtm").radius, 7.0);
		assert_eq!(style("rtm").stroke, FTZ_RING);
		assert_eq!(style("oslo").radius, 4.0);
		assert_eq!(style("zrh").radius, 3.0);
		assert_eq!(style("zrh").stroke, style("zrh").fill);
	}

	#[test]
	fn legend_lists_each_bloc_once() {
		let legend = bloc_legend(&bundle());
		let blocs: Vec<_> = legend.iter().map(|(b, _)| b.as_str()).collect();
		assert_eq!(blocs, ["EU", "EEA", "EFTA"]);
	}
}
