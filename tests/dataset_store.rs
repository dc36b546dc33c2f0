//! Store-level behaviour over realistic multi-region artifacts.

#![allow(unused_crate_dependencies)]

use trade_atlas::data::palette::Color;
use trade_atlas::data::{
	DataError, DatasetStore, NEUTRAL, Region, resolve_bloc_color, resolve_city_by_id,
	resolve_city_name, resolve_edge_type_color,
};
use trade_atlas::dataset_element_id;
use trade_atlas::views::network::{EdgeTypeFilter, visible_edges};

const WEST_AFRICA: &str = include_str!("fixtures/west_africa.json");
const EUROPE: &str = include_str!("fixtures/europe.json");

fn store() -> DatasetStore {
	DatasetStore::from_sources([(Region::WestAfrica, WEST_AFRICA), (Region::Europe, EUROPE)])
		.expect("fixtures parse")
}

#[test]
fn names_round_trip_for_every_city() {
	let store = store();
	for region in Region::ALL {
		for city in store.get(region).cities() {
			let by_id = resolve_city_by_id(&store, &city.id, region).expect("indexed");
			assert_eq!(by_id.name, resolve_city_name(&store, &city.id, region));
		}
	}
}

#[test]
fn unknown_ids_come_back_unchanged() {
	let store = store();
	assert_eq!(resolve_city_name(&store, "dakar", Region::WestAfrica), "dakar");
	assert_eq!(resolve_city_name(&store, "", Region::Europe), "");
	assert!(resolve_city_by_id(&store, "dakar", Region::WestAfrica).is_none());
}

#[test]
fn regions_do_not_leak_into_each_other() {
	let store = store();
	assert_eq!(resolve_city_name(&store, "lagos", Region::WestAfrica), "Lagos");
	assert_eq!(resolve_city_name(&store, "lagos", Region::Europe), "lagos");
	assert_eq!(resolve_city_name(&store, "berlin", Region::WestAfrica), "berlin");

	let ids = |r: Region| -> Vec<String> { store.get(r).cities().iter().map(|c| c.id.clone()).collect() };
	assert_eq!(ids(Region::WestAfrica), ["lagos", "accra", "abidjan", "bamako"]);
	assert_eq!(ids(Region::Europe), ["rotterdam", "berlin", "tangier"]);
	assert!(store.get(Region::World).is_empty());
	assert!(store.get(Region::Regions).is_empty());
}

#[test]
fn loaded_regions_lists_only_populated_bundles() {
	let loaded: Vec<_> = store().loaded_regions().collect();
	assert_eq!(loaded, [Region::WestAfrica, Region::Europe]);
}

#[test]
fn map_edges_use_the_bundle_region_palette() {
	let store = store();

	let europe = store.get(Region::Europe);
	let edges = visible_edges(europe, &EdgeTypeFilter::all_of(europe));
	let colors: Vec<(&str, Color)> = edges.iter().map(|e| (e.edge.edge_type.as_str(), e.color)).collect();
	assert_eq!(
		colors,
		[
			("ENERGY", Color::hex(0xfacc15)),
			// Europe has no TRADE entry, so the default region's swatch is used.
			("TRADE", resolve_edge_type_color("TRADE", Region::WestAfrica)),
		]
	);

	let west = store.get(Region::WestAfrica);
	let edges = visible_edges(west, &EdgeTypeFilter::all_of(west));
	// One edge is inactive and one points at a city the artifact lacks.
	assert_eq!(edges.len(), 2);
	assert_eq!(west.dangling_edge_count(), 1);
}

#[test]
fn bloc_colors_fall_back_per_key_only() {
	assert_eq!(resolve_bloc_color("EU", Region::Europe), Color::hex(0x60a5fa));
	assert_eq!(resolve_bloc_color("EU", Region::World), Color::hex(0x818cf8));
	assert_eq!(
		resolve_bloc_color("EXTERNAL", Region::Europe),
		resolve_bloc_color("EXTERNAL", Region::WestAfrica)
	);
	assert_eq!(resolve_bloc_color("NOT_A_BLOC", Region::Europe), NEUTRAL);
}

#[test]
fn malformed_artifact_reports_its_region() {
	let err = DatasetStore::from_sources([(Region::WestAfrica, WEST_AFRICA), (Region::World, "{ nope")])
		.unwrap_err();
	match err {
		DataError::Parse { region, .. } => assert_eq!(region, Region::World),
		other => panic!("unexpected error: {other}"),
	}
	assert!(
		DataError::Missing {
			region: Region::Regions
		}
		.to_string()
		.contains("regions")
	);
}

#[test]
fn element_ids_follow_region_slugs() {
	assert_eq!(dataset_element_id(Region::WestAfrica), "analysis-west-africa");
	assert_eq!(dataset_element_id(Region::Regions), "analysis-regions");
}
