//! Headline figures and structural highlights for a region.

use std::collections::BTreeMap;

use crate::data::DatasetBundle;

use super::routes::city_names;

/// A labelled headline number.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatTile {
	pub label: &'static str,
	pub value: String,
	pub accent: &'static str,
}

/// Summary counts for the bundle's region, bloc slots labelled per region.
pub fn stat_tiles(bundle: &DatasetBundle) -> Vec<StatTile> {
	let data = bundle.data();
	let summary = &data.summary;
	let bloc_labels = bundle.region().summary_bloc_labels();
	let bloc_accents = [
		"var(--accent-green)",
		"var(--accent-purple)",
		"var(--accent-red)",
		"var(--text-secondary)",
	];

	let mut tiles = vec![
		StatTile {
			label: "Cities",
			value: summary.nodes.to_string(),
			accent: "var(--text-primary)",
		},
		StatTile {
			label: "Connections",
			value: summary.edges.to_string(),
			accent: "var(--text-primary)",
		},
	];
	tiles.extend(
		bloc_labels
			.into_iter()
			.zip(summary.bloc_counts())
			.zip(bloc_accents)
			.map(|((label, count), accent)| StatTile {
				label,
				value: count.to_string(),
				accent,
			}),
	);
	tiles.extend([
		StatTile {
			label: "Port Cities",
			value: summary.port_cities.to_string(),
			accent: "var(--accent-blue)",
		},
		StatTile {
			label: "FTZ Targets",
			value: summary.ftz_targets.to_string(),
			accent: "var(--accent-amber)",
		},
		StatTile {
			label: "Components",
			value: data.metrics.component_count.to_string(),
			accent: "var(--text-secondary)",
		},
	]);
	tiles
}

/// Which centrality map to rank by.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Centrality {
	Betweenness,
	Degree,
	Closeness,
}

impl Centrality {
	/// Measures in toggle order.
	pub const ALL: [Centrality; 3] = [Centrality::Betweenness, Centrality::Degree, Centrality::Closeness];

	/// Toggle label.
	pub const fn label(self) -> &'static str {
		match self {
			Centrality::Betweenness => "Betweenness",
			Centrality::Degree => "Degree",
			Centrality::Closeness => "Closeness",
		}
	}

	fn scores(self, bundle: &DatasetBundle) -> &BTreeMap<String, f64> {
		let metrics = &bundle.data().metrics;
		match self {
			Centrality::Betweenness => &metrics.betweenness,
			Centrality::Degree => &metrics.degree,
			Centrality::Closeness => &metrics.closeness,
		}
	}
}

/// A city's rank in a centrality listing.
#[derive(Clone, Debug, PartialEq)]
pub struct RankedCity {
	pub city_id: String,
	pub name: String,
	pub score: f64,
}

/// The `limit` highest-scoring cities for a centrality measure.
///
/// Scores for ids missing from the city list are skipped.
pub fn top_cities(bundle: &DatasetBundle, measure: Centrality, limit: usize) -> Vec<RankedCity> {
	let mut ranked: Vec<RankedCity> = measure
		.scores(bundle)
		.iter()
		.filter_map(|(id, &score)| {
			bundle.city(id).map(|c| RankedCity {
				city_id: id.clone(),
				name: c.name.clone(),
				score,
			})
		})
		.collect();
	ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
	ranked.truncate(limit);
	ranked
}

/// Articulation points and bridges with names resolved.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StructuralWeaknesses {
	pub articulation_points: Vec<String>,
	pub bridges: Vec<(String, String)>,
	pub bloc_cut_vertices: Vec<String>,
}

/// Articulation points, bridges and bloc cut vertices with names resolved.
pub fn structural_weaknesses(bundle: &DatasetBundle) -> StructuralWeaknesses {
	let metrics = &bundle.data().metrics;
	let owned = |ids: &[String]| -> Vec<String> {
		city_names(bundle, ids).into_iter().map(str::to_owned).collect()
	};
	let name = |id: &str| bundle.city(id).map_or_else(|| id.to_string(), |c| c.name.clone());

	StructuralWeaknesses {
		articulation_points: owned(metrics.articulation_points.as_slice()),
		bridges: metrics
			.bridges
			.iter()
			.map(|(a, b)| (name(a.as_str()), name(b.as_str())))
			.collect(),
		bloc_cut_vertices: owned(metrics.ecowas_cut_vertices.as_slice()),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::data::Region;

	fn bundle(region: Region) -> DatasetBundle {
		DatasetBundle::from_json(
			region,
			r#"{
				"summary": { "nodes": 3, "edges": 2, "ecowas_active": 2, "uemoa_cfa": 1,
					"suspended": 0, "external": 0, "port_cities": 1, "ftz_targets": 1 },
				"cities": [
					{ "id": "a", "name": "Alpha", "lat": 0, "lng": 0, "country": "X", "bloc": "EU" },
					{ "id": "b", "name": "Beta", "lat": 0, "lng": 0, "country": "X", "bloc": "EU" },
					{ "id": "c", "name": "Gamma", "lat": 0, "lng": 0, "country": "X", "bloc": "EEA" }
				],
				"metrics": {
					"betweenness": { "a": 0.1, "b": 0.5, "c": 0.3, "ghost": 0.9 },
					"articulation_points": ["b"],
					"bridges": [["a", "b"], ["b", "zz"]],
					"component_count": 1
				}
			}"#,
		)
		.unwrap()
	}

	#[test]
	fn tiles_use_region_bloc_labels() {
		let tiles = stat_tiles(&bundle(Region::Europe));
		assert_eq!(tiles.len(), 9);
		assert_eq!(tiles[2].label, "EU Members");
		assert_eq!(tiles[2].value, "2");
		let wa = stat_tiles(&bundle(Region::WestAfrica));
		assert_eq!(wa[2].label, "ECOWAS Active");
	}

	#[test]
	fn top_cities_rank_descending_and_skip_unknown_ids() {
		let top = top_cities(&bundle(Region::Europe), Centrality::Betweenness, 2);
		let names: Vec<_> = top.iter().map(|r| r.name.as_str()).collect();
		assert_eq!(names, ["Beta", "Gamma"]);
		assert!(top_cities(&bundle(Region::Europe), Centrality::Closeness, 5).is_empty());
	}

	#[test]
	fn weaknesses_resolve_names_with_id_fallback() {
		let w = structural_weaknesses(&bundle(Region::Europe));
		assert_eq!(w.articulation_points, ["Beta"]);
		assert_eq!(
			w.bridges,
			[
				("Alpha".to_string(), "Beta".to_string()),
				("Beta".to_string(), "zz".to_string())
			]
		);
		assert!(w.bloc_cut_vertices.is_empty());
	}
}
