//! Immutable per-region dataset bundles.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use log::{debug, info, warn};
use thiserror::Error;

use super::region::Region;
use super::types::{AnalysisData, City, Edge};

/// Errors raised while loading analysis artifacts at startup.
#[derive(Debug, Error)]
pub enum DataError {
	/// The artifact is not valid JSON for the analysis schema.
	#[error("failed to parse {region} dataset: {source}")]
	Parse {
		region: Region,
		#[source]
		source: serde_json::Error,
	},
	/// No artifact was provided for the region.
	#[error("no dataset found for {region}")]
	Missing { region: Region },
}

/// One region's analysis data plus an id index over its cities.
#[derive(Clone, Debug, Default)]
pub struct DatasetBundle {
	region: Region,
	data: AnalysisData,
	city_index: HashMap<String, usize>,
}

impl DatasetBundle {
	/// Bundle with no entities.
	pub fn empty(region: Region) -> Self {
		Self::new(region, AnalysisData::default())
	}

	/// Indexes `data` by city id; the first of duplicate ids wins.
	pub fn new(region: Region, data: AnalysisData) -> Self {
		let mut city_index = HashMap::with_capacity(data.cities.len());
		for (i, city) in data.cities.iter().enumerate() {
			match city_index.entry(city.id.clone()) {
				Entry::Vacant(slot) => {
					slot.insert(i);
				}
				Entry::Occupied(_) => {
					warn!("trade-atlas: {region}: duplicate city id `{}`, keeping first", city.id);
				}
			}
		}

		let bundle = Self {
			region,
			data,
			city_index,
		};
		let dangling = bundle.dangling_edge_count();
		if dangling > 0 {
			debug!("trade-atlas: {region}: {dangling} edges reference unknown cities and will be skipped");
		}
		bundle
	}

	/// Parses one region's JSON artifact.
	pub fn from_json(region: Region, json: &str) -> Result<Self, DataError> {
		let data = serde_json::from_str::<AnalysisData>(json)
			.map_err(|source| DataError::Parse { region, source })?;
		Ok(Self::new(region, data))
	}

	/// Region this bundle was loaded for.
	pub fn region(&self) -> Region {
		self.region
	}

	/// The parsed artifact.
	pub fn data(&self) -> &AnalysisData {
		&self.data
	}

	/// Cities in artifact order.
	pub fn cities(&self) -> &[City] {
		&self.data.cities
	}

	/// Edges in artifact order, dangling ones included.
	pub fn edges(&self) -> &[Edge] {
		&self.data.edges
	}

	/// True when the region has no cities.
	pub fn is_empty(&self) -> bool {
		self.data.cities.is_empty() && self.data.edges.is_empty()
	}

	/// City with the given id, if this region has one.
	pub fn city(&self, id: &str) -> Option<&City> {
		self.city_index.get(id).map(|&i| &self.data.cities[i])
	}

	/// Edges whose endpoints both resolve, paired with those endpoints.
	pub fn resolved_edges(&self) -> impl Iterator<Item = (&Edge, &City, &City)> + '_ {
		self.data.edges.iter().filter_map(|edge| {
			let source = self.city(&edge.source)?;
			let target = self.city(&edge.target)?;
			Some((edge, source, target))
		})
	}

	/// Number of edges referencing a city this region does not have.
	pub fn dangling_edge_count(&self) -> usize {
		self.data.edges.len() - self.resolved_edges().count()
	}
}

/// Every region's bundle, built once at startup.
///
/// Lookups are total: a region without an artifact holds an empty bundle.
#[derive(Clone, Debug)]
pub struct DatasetStore {
	bundles: [DatasetBundle; Region::COUNT],
}

impl Default for DatasetStore {
	fn default() -> Self {
		Self::new()
	}
}

impl DatasetStore {
	/// Store with an empty bundle for every region.
	pub fn new() -> Self {
		Self {
			bundles: Region::ALL.map(DatasetBundle::empty),
		}
	}

	/// Builds a store from `(region, json)` artifacts. Stops at the first parse failure.
	pub fn from_sources<'a>(
		sources: impl IntoIterator<Item = (Region, &'a str)>,
	) -> Result<Self, DataError> {
		let mut store = Self::new();
		for (region, json) in sources {
			store.load(region, json)?;
		}
		Ok(store)
	}

	/// Parses an artifact and installs it as `region`'s bundle.
	pub fn load(&mut self, region: Region, json: &str) -> Result<(), DataError> {
		let bundle = DatasetBundle::from_json(region, json)?;
		info!(
			"trade-atlas: loaded {region}: {} cities, {} edges",
			bundle.cities().len(),
			bundle.edges().len()
		);
		self.insert(bundle);
		Ok(())
	}

	/// Stores `bundle`, replacing any earlier bundle for its region.
	pub fn insert(&mut self, bundle: DatasetBundle) {
		let i = bundle.region().index();
		self.bundles[i] = bundle;
	}

	/// The bundle for `region`.
	pub fn get(&self, region: Region) -> &DatasetBundle {
		&self.bundles[region.index()]
	}

	/// Regions that have at least one city or edge.
	pub fn loaded_regions(&self) -> impl Iterator<Item = Region> + '_ {
		Region::ALL
			.into_iter()
			.filter(|&r| !self.get(r).is_empty())
	}
}
