//! The closed set of regions a dataset can be selected for.

use std::fmt;
use std::str::FromStr;

/// Query parameter carrying the selected region in the page URL.
pub const REGION_QUERY_KEY: &str = "region";

/// A regional network with its own dataset, bloc vocabulary and color tables.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Region {
	#[default]
	WestAfrica,
	Europe,
	World,
	Regions,
}

impl Region {
	/// Number of regions.
	pub const COUNT: usize = 4;

	/// Every region, in navigation order.
	pub const ALL: [Region; Self::COUNT] = [
		Region::WestAfrica,
		Region::Europe,
		Region::World,
		Region::Regions,
	];

	/// Region whose color tables back every other region's lookups.
	pub const DEFAULT: Region = Region::WestAfrica;

	/// Stable position of this region in [`Region::ALL`].
	pub const fn index(self) -> usize {
		match self {
			Region::WestAfrica => 0,
			Region::Europe => 1,
			Region::World => 2,
			Region::Regions => 3,
		}
	}

	/// URL-safe key used in query strings and DOM element ids.
	pub const fn slug(self) -> &'static str {
		match self {
			Region::WestAfrica => "west-africa",
			Region::Europe => "europe",
			Region::World => "world",
			Region::Regions => "regions",
		}
	}

	/// Human-readable name.
	pub const fn label(self) -> &'static str {
		match self {
			Region::WestAfrica => "West Africa",
			Region::Europe => "Europe",
			Region::World => "World",
			Region::Regions => "Regional Blocs",
		}
	}

	/// Display labels for the four bloc counts in the network summary.
	///
	/// Every artifact reuses the same summary field names, so the meaning of
	/// each slot depends on the region that produced it.
	pub const fn summary_bloc_labels(self) -> [&'static str; 4] {
		match self {
			Region::WestAfrica => ["ECOWAS Active", "UEMOA / CFA", "Suspended", "External"],
			Region::Europe => ["EU Members", "EEA", "Candidates", "Partners"],
			Region::World => ["G7", "BRICS", "ASEAN", "African Union"],
			Region::Regions => ["NAFTA", "EU", "ASEAN", "African Union"],
		}
	}

	/// Reads the region from a URL query string such as `?region=europe&x=1`.
	///
	/// Returns `None` when the parameter is absent or names no known region.
	pub fn from_query(search: &str) -> Option<Self> {
		search
			.trim_start_matches('?')
			.split('&')
			.filter_map(|pair| pair.split_once('='))
			.find(|(key, _)| *key == REGION_QUERY_KEY)
			.and_then(|(_, value)| value.parse().ok())
	}

	/// Region named by a browser `location.search`, or the default when it
	/// names none. Used both at startup and after history navigation.
	pub fn from_location_search(search: Option<&str>) -> Self {
		search.and_then(Self::from_query).unwrap_or_default()
	}

	/// Query string selecting this region, the inverse of [`Region::from_query`].
	pub fn to_query(self) -> String {
		format!("?{}={}", REGION_QUERY_KEY, self.slug())
	}
}

impl fmt::Display for Region {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.slug())
	}
}

/// Error returned when a string names no known region.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown region `{0}`")]
pub struct UnknownRegion(pub String);

impl FromStr for Region {
	type Err = UnknownRegion;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Region::ALL
			.into_iter()
			.find(|r| r.slug() == s)
			.ok_or_else(|| UnknownRegion(s.to_string()))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn slugs_parse_back() {
		for region in Region::ALL {
			assert_eq!(region.slug().parse::<Region>(), Ok(region));
		}
		assert!("atlantis".parse::<Region>().is_err());
	}

	#[test]
	fn index_matches_position_in_all() {
		for (i, region) in Region::ALL.into_iter().enumerate() {
			assert_eq!(region.index(), i);
		}
	}

	#[test]
	fn query_round_trips() {
		for region in Region::ALL {
			assert_eq!(Region::from_query(&region.to_query()), Some(region));
		}
	}

	#[test]
	fn query_ignores_other_params() {
		assert_eq!(
			Region::from_query("?page=routes&region=world&sort=risk"),
			Some(Region::World)
		);
		assert_eq!(Region::from_query("region=europe"), Some(Region::Europe));
	}

	#[test]
	fn query_without_known_region_is_none() {
		assert_eq!(Region::from_query(""), None);
		assert_eq!(Region::from_query("?page=routes"), None);
		assert_eq!(Region::from_query("?region=mars"), None);
	}

	#[test]
	fn location_search_falls_back_to_default() {
		assert_eq!(Region::from_location_search(Some("?region=europe")), Region::Europe);
		assert_eq!(Region::from_location_search(Some("?region=mars")), Region::WestAfrica);
		assert_eq!(Region::from_location_search(Some("")), Region::WestAfrica);
		assert_eq!(Region::from_location_search(None), Region::WestAfrica);
	}

	#[test]
	fn default_is_west_africa() {
		assert_eq!(Region::default(), Region::DEFAULT);
		assert_eq!(Region::DEFAULT, Region::WestAfrica);
	}
}
