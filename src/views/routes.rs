//! Trade route cards and the detailed route table.

use crate::data::format::format_score;
use crate::data::{DatasetBundle, TradeRouteData};

use super::sort::{SortKey, SortState, SortValue, sort_rows};

/// One table row.
#[derive(Clone, Debug, PartialEq)]
pub struct RouteRow {
	pub city_id: String,
	pub route: TradeRouteData,
}

/// Sortable columns of the routes table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteSortKey {
	Risk,
	Redundancy,
	MinCut,
	ShortestCost,
}

impl RouteSortKey {
	/// Columns in display order.
	pub const ALL: [RouteSortKey; 4] = [
		RouteSortKey::Risk,
		RouteSortKey::Redundancy,
		RouteSortKey::MinCut,
		RouteSortKey::ShortestCost,
	];
}

impl SortKey for RouteSortKey {
	type Row = RouteRow;

	fn value(self, row: &RouteRow) -> SortValue<'_> {
		match self {
			RouteSortKey::Risk => SortValue::Number(row.route.risk),
			RouteSortKey::Redundancy => SortValue::Number(row.route.redundancy),
			RouteSortKey::MinCut => SortValue::Number(row.route.min_cut as f64),
			RouteSortKey::ShortestCost => row
				.route
				.shortest_cost
				.map_or(SortValue::Missing, SortValue::Number),
		}
	}

	fn label(self) -> &'static str {
		match self {
			RouteSortKey::Risk => "Risk",
			RouteSortKey::Redundancy => "Redundancy",
			RouteSortKey::MinCut => "Min Cut",
			RouteSortKey::ShortestCost => "Path Cost",
		}
	}
}

/// Three-step rating used to tint risk and redundancy figures.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tier {
	Good,
	Fair,
	Poor,
}

impl Tier {
	/// CSS color variable for this tier.
	pub const fn css_var(self) -> &'static str {
		match self {
			Tier::Good => "var(--accent-green)",
			Tier::Fair => "var(--accent-amber)",
			Tier::Poor => "var(--accent-red)",
		}
	}

	/// Lower risk is better.
	pub fn of_risk(risk: f64) -> Self {
		if risk < 0.3 {
			Tier::Good
		} else if risk < 0.6 {
			Tier::Fair
		} else {
			Tier::Poor
		}
	}

	/// More redundant capacity is better.
	pub fn of_redundancy(redundancy: f64) -> Self {
		if redundancy > 50_000.0 {
			Tier::Good
		} else if redundancy > 30_000.0 {
			Tier::Fair
		} else {
			Tier::Poor
		}
	}
}

/// Route rows, sorted.
pub fn route_rows(bundle: &DatasetBundle, sort: &SortState<RouteSortKey>) -> Vec<RouteRow> {
	let mut rows: Vec<_> = bundle
		.data()
		.trade_routes
		.iter()
		.map(|(id, route)| RouteRow {
			city_id: id.clone(),
			route: route.clone(),
		})
		.collect();
	sort_rows(&mut rows, sort);
	rows
}

/// Display names for a list of city ids, falling back to the raw id.
pub fn city_names<'a>(bundle: &'a DatasetBundle, ids: &'a [String]) -> Vec<&'a str> {
	ids.iter()
		.map(|id| bundle.city(id).map_or(id.as_str(), |c| c.name.as_str()))
		.collect()
}

/// Cost suffix shown after a path, present only for a positive cost.
pub fn path_cost_label(cost: Option<f64>) -> Option<String> {
	cost.filter(|c| *c > 0.0).map(|c| format!("({})", format_score(c)))
}

/// Shortest path as `A → B → C (12.50)`.
pub fn describe_path(bundle: &DatasetBundle, route: &TradeRouteData) -> String {
	let mut out = city_names(bundle, &route.shortest_path).join(" → ");
	if let Some(cost) = path_cost_label(route.shortest_cost) {
		out.push(' ');
		out.push_str(&cost);
	}
	out
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::data::Region;

	fn bundle() -> DatasetBundle {
		DatasetBundle::from_json(
			Region::WestAfrica,
			r#"{
				"cities": [
					{ "id": "abj", "name": "Abidjan", "lat": 0, "lng": 0, "country": "CI", "bloc": "UEMOA" },
					{ "id": "acc", "name": "Accra", "lat": 0, "lng": 0, "country": "GH", "bloc": "ECOWAS" }
				],
				"trade_routes": {
					"abj": { "risk": 0.2, "redundancy": 60000, "min_cut": 2,
						"shortest_path": ["abj", "acc"], "shortest_cost": 12.5, "min_cut_nodes": ["acc"] },
					"acc": { "risk": 0.7, "redundancy": 20000, "min_cut": 1,
						"shortest_path": [], "shortest_cost": null, "min_cut_nodes": [] },
					"tma": { "risk": 0.4, "redundancy": 35000, "min_cut": 3,
						"shortest_path": ["tma", "acc"], "shortest_cost": 0, "min_cut_nodes": [] }
				}
			}"#,
		)
		.unwrap()
	}

	fn ids(rows: &[RouteRow]) -> Vec<&str> {
		rows.iter().map(|r| r.city_id.as_str()).collect()
	}

	#[test]
	fn default_sort_puts_riskiest_first() {
		let rows = route_rows(&bundle(), &SortState::new(RouteSortKey::Risk));
		assert_eq!(ids(&rows), ["acc", "tma", "abj"]);
	}

	#[test]
	fn null_costs_sort_to_the_direction_dependent_end() {
		let mut sort = SortState::new(RouteSortKey::ShortestCost);
		assert_eq!(ids(&route_rows(&bundle(), &sort)), ["abj", "tma", "acc"]);
		sort.select(RouteSortKey::ShortestCost);
		assert_eq!(ids(&route_rows(&bundle(), &sort)), ["acc", "tma", "abj"]);
	}

	#[test]
	fn tiers_follow_thresholds() {
		assert_eq!(Tier::of_risk(0.29), Tier::Good);
		assert_eq!(Tier::of_risk(0.3), Tier::Fair);
		assert_eq!(Tier::of_risk(0.6), Tier::Poor);
		assert_eq!(Tier::of_redundancy(50_000.0), Tier::Fair);
		assert_eq!(Tier::of_redundancy(50_001.0), Tier::Good);
		assert_eq!(Tier::of_redundancy(30_000.0), Tier::Poor);
	}

	#[test]
	fn path_description_resolves_names_and_hides_zero_cost() {
		let b = bundle();
		let rows = route_rows(&b, &SortState::new(RouteSortKey::Risk));
		let by_id = |id: &str| rows.iter().find(|r| r.city_id == id).unwrap();
		assert_eq!(describe_path(&b, &by_id("abj").route), "Abidjan → Accra (12.50)");
		assert_eq!(describe_path(&b, &by_id("tma").route), "tma → Accra");
		assert_eq!(describe_path(&b, &by_id("acc").route), "");
	}
}
