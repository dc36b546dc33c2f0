//! Map input: the cities and edges of one region, already styled.

use std::collections::HashMap;

use crate::data::{Color, DatasetBundle};
use crate::views::network::{EdgeTypeFilter, MarkerStyle, visible_edges};

/// A city marker to draw.
#[derive(Clone, Debug, PartialEq)]
pub struct MapNode {
	pub id: String,
	pub label: String,
	pub lat: f64,
	pub lng: f64,
	pub style: MarkerStyle,
	/// Labels of FTZ targets stay visible at every zoom level.
	pub always_labeled: bool,
}

/// An edge between two entries of [`MapData::nodes`].
#[derive(Clone, Debug, PartialEq)]
pub struct MapLink {
	pub source: usize,
	pub target: usize,
	pub color: Color,
	/// Stroke width in screen pixels.
	pub width: f64,
}

/// Everything the canvas needs for one frame, independent of the store.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MapData {
	pub nodes: Vec<MapNode>,
	pub links: Vec<MapLink>,
}

impl MapData {
	/// Markers for every city and strokes for the edges `filter` lets through.
	pub fn from_bundle(bundle: &DatasetBundle, filter: &EdgeTypeFilter) -> Self {
		let region = bundle.region();
		let mut index: HashMap<&str, usize> = HashMap::with_capacity(bundle.cities().len());
		let mut nodes = Vec::with_capacity(bundle.cities().len());

		for city in bundle.cities() {
			if index.contains_key(city.id.as_str()) {
				continue;
			}
			index.insert(city.id.as_str(), nodes.len());
			nodes.push(MapNode {
				id: city.id.clone(),
				label: city.name.clone(),
				lat: city.lat,
				lng: city.lng,
				style: MarkerStyle::for_city(city, region),
				always_labeled: city.is_ftz_target,
			});
		}

		let links = visible_edges(bundle, filter)
			.into_iter()
			.filter_map(|e| {
				Some(MapLink {
					source: *index.get(e.source.id.as_str())?,
					target: *index.get(e.target.id.as_str())?,
					color: e.color,
					width: e.width,
				})
			})
			.collect();

		Self { nodes, links }
	}

	/// Neighbouring node indices of `idx`.
	pub fn neighbors(&self, idx: usize) -> impl Iterator<Item = usize> + '_ {
		self.links.iter().filter_map(move |l| {
			if l.source == idx {
				Some(l.target)
			} else if l.target == idx {
				Some(l.source)
			} else {
				None
			}
		})
	}

	/// True when there are no cities to draw.
	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}

	/// Node index of the city `id`.
	pub fn index_of(&self, id: &str) -> Option<usize> {
		self.nodes.iter().position(|n| n.id == id)
	}
}
