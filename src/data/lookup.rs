//! Region-scoped city lookups with raw-id fallback.

use super::region::Region;
use super::store::DatasetStore;
use super::types::City;

/// The city with `id` in `region`, or `None` when the region has no such city.
pub fn resolve_city_by_id<'a>(store: &'a DatasetStore, id: &str, region: Region) -> Option<&'a City> {
	store.get(region).city(id)
}

/// Display name for `id` in `region`, or the id itself when unresolved.
pub fn resolve_city_name<'a>(store: &'a DatasetStore, id: &'a str, region: Region) -> &'a str {
	resolve_city_by_id(store, id, region)
		.map(|c| c.name.as_str())
		.unwrap_or(id)
}
