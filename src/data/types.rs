//! Analysis artifact structures, deserialized from the per-region JSON.
//!
//! Field names follow the artifact contract. Secondary fields default when
//! absent so that a partial artifact still renders.

use std::collections::BTreeMap;

use serde::Deserialize;

/// A city node in a regional network.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct City {
	/// Unique identifier within the region. Edges and score maps reference it.
	pub id: String,
	pub name: String,
	pub lat: f64,
	pub lng: f64,
	pub country: String,
	#[serde(default)]
	pub country_iso3: String,
	/// Bloc tag from the region's vocabulary (e.g. "ECOWAS", "EU", "G7").
	pub bloc: String,
	#[serde(default)]
	pub population: u64,
	#[serde(default)]
	pub gdp_per_capita: f64,
	#[serde(default)]
	pub trade_openness: f64,
	#[serde(default)]
	pub ease_of_business: f64,
	#[serde(default)]
	pub is_port: bool,
	#[serde(default)]
	pub is_capital: bool,
	#[serde(default)]
	pub is_ftz_target: bool,
	#[serde(default)]
	pub cfa_zone: bool,
	#[serde(default)]
	pub tags: Vec<String>,
}

/// A typed connection between two cities.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Edge {
	pub source: String,
	pub target: String,
	pub edge_type: String,
	#[serde(default)]
	pub weight: f64,
	#[serde(default)]
	pub volume: f64,
	#[serde(default)]
	pub distance_km: f64,
	#[serde(default = "default_true")]
	pub is_active: bool,
	#[serde(default)]
	pub tariff_rate: f64,
	#[serde(default)]
	pub description: String,
}

fn default_true() -> bool {
	true
}

/// Whole-network counts.
///
/// The four bloc slots keep the artifact's field names; see
/// [`Region::summary_bloc_labels`](super::Region::summary_bloc_labels) for
/// what they count in each region.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct NetworkSummary {
	pub nodes: u32,
	pub edges: u32,
	pub ecowas_active: u32,
	pub uemoa_cfa: u32,
	pub suspended: u32,
	pub external: u32,
	pub port_cities: u32,
	pub ftz_targets: u32,
}

impl NetworkSummary {
	/// The four bloc counts in summary order.
	pub fn bloc_counts(&self) -> [u32; 4] {
		[self.ecowas_active, self.uemoa_cfa, self.suspended, self.external]
	}
}

/// Externally computed centrality and structural results.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct NetworkMetrics {
	pub betweenness: BTreeMap<String, f64>,
	pub degree: BTreeMap<String, f64>,
	pub closeness: BTreeMap<String, f64>,
	pub articulation_points: Vec<String>,
	pub bridges: Vec<(String, String)>,
	/// Cut vertices of the region's primary bloc subgraph.
	pub ecowas_cut_vertices: Vec<String>,
	pub component_count: u32,
}

/// Composite and sub-scores for a free trade zone candidate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct FtzImpactScore {
	pub composite: f64,
	pub connectivity: f64,
	pub port_access: f64,
	pub tariff_exposure: f64,
	pub trade_volume: f64,
	pub diversification: f64,
	pub border_proximity: f64,
	pub stability: f64,
}

/// Route robustness figures for a city.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct TradeRouteData {
	pub risk: f64,
	pub redundancy: f64,
	pub min_cut: u32,
	/// Ordered city ids from origin to destination.
	pub shortest_path: Vec<String>,
	/// `None` when no path exists.
	pub shortest_cost: Option<f64>,
	pub min_cut_nodes: Vec<String>,
}

/// A simulated disruption and its downstream effects.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct CascadeScenario {
	pub name: String,
	/// City id where the disruption starts.
	pub trigger: String,
	#[serde(rename = "type")]
	pub kind: String,
	/// 0.0 to 1.0.
	pub severity: f64,
	#[serde(default)]
	pub affected_cities: Vec<String>,
	#[serde(default)]
	pub isolated_cities: Vec<String>,
	#[serde(default)]
	pub trade_disrupted_cities: Vec<String>,
	#[serde(default)]
	pub new_components: u32,
	#[serde(default)]
	pub trade_volume_affected: f64,
}

/// Classification of an opportunity signal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SignalType {
	Opportunity,
	Risk,
	Neutral,
}

impl SignalType {
	/// Every signal type, in filter order.
	pub const ALL: [SignalType; 3] = [SignalType::Opportunity, SignalType::Risk, SignalType::Neutral];

	/// Tag as it appears in the artifact.
	pub const fn as_str(self) -> &'static str {
		match self {
			SignalType::Opportunity => "OPPORTUNITY",
			SignalType::Risk => "RISK",
			SignalType::Neutral => "NEUTRAL",
		}
	}
}

/// Model-versus-observed comparison for a city.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct OpportunitySignal {
	pub city_id: String,
	pub city_name: String,
	#[serde(default)]
	pub country: String,
	pub signal_type: SignalType,
	/// `actual_score - model_score`. Positive means the city outperforms the model.
	pub gap: f64,
	pub model_score: f64,
	pub actual_score: f64,
	/// 0.0 to 1.0.
	pub confidence: f64,
}

/// Direction of an opportunity gap.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GapTone {
	Positive,
	Negative,
	Flat,
}

impl OpportunitySignal {
	/// Gap recomputed from the two scores, using the stored gap's sign convention.
	pub fn implied_gap(&self) -> f64 {
		self.actual_score - self.model_score
	}

	/// Sign of the gap, for coloring.
	pub fn gap_tone(&self) -> GapTone {
		if self.gap > 0.0 {
			GapTone::Positive
		} else if self.gap < 0.0 {
			GapTone::Negative
		} else {
			GapTone::Flat
		}
	}
}

/// One region's complete analysis artifact.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AnalysisData {
	pub generated_at: String,
	pub summary: NetworkSummary,
	pub cities: Vec<City>,
	pub edges: Vec<Edge>,
	pub metrics: NetworkMetrics,
	pub ftz_impact: BTreeMap<String, FtzImpactScore>,
	pub trade_routes: BTreeMap<String, TradeRouteData>,
	pub cascades: Vec<CascadeScenario>,
	pub opportunities: Vec<OpportunitySignal>,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn partial_artifact_fills_defaults() {
		let data: AnalysisData = serde_json::from_str(
			r#"{ "cities": [{ "id": "acc", "name": "Accra", "lat": 5.6, "lng": -0.2,
				"country": "Ghana", "bloc": "ECOWAS" }] }"#,
		)
		.unwrap();
		assert_eq!(data.cities.len(), 1);
		assert!(data.cities[0].tags.is_empty());
		assert!(data.edges.is_empty());
		assert_eq!(data.summary, NetworkSummary::default());
	}

	#[test]
	fn edge_is_active_by_default() {
		let edge: Edge =
			serde_json::from_str(r#"{ "source": "a", "target": "b", "edge_type": "TRADE" }"#).unwrap();
		assert!(edge.is_active);
	}

	#[test]
	fn null_shortest_cost_is_none() {
		let route: TradeRouteData = serde_json::from_str(
			r#"{ "risk": 0.4, "redundancy": 1200, "min_cut": 1,
				"shortest_path": [], "shortest_cost": null, "min_cut_nodes": [] }"#,
		)
		.unwrap();
		assert_eq!(route.shortest_cost, None);
	}

	#[test]
	fn cascade_type_field_maps_to_kind() {
		let scenario: CascadeScenario = serde_json::from_str(
			r#"{ "name": "Port strike", "trigger": "lag", "type": "TRADE_DISRUPTION", "severity": 0.7 }"#,
		)
		.unwrap();
		assert_eq!(scenario.kind, "TRADE_DISRUPTION");
	}

	#[test]
	fn signal_type_uses_upper_case_tags() {
		let signal: OpportunitySignal = serde_json::from_str(
			r#"{ "city_id": "dkr", "city_name": "Dakar", "signal_type": "RISK",
				"gap": -0.12, "model_score": 0.62, "actual_score": 0.5, "confidence": 0.8 }"#,
		)
		.unwrap();
		assert_eq!(signal.signal_type, SignalType::Risk);
		assert_eq!(signal.gap_tone(), GapTone::Negative);
		assert!((signal.implied_gap() - signal.gap).abs() < 1e-9);
		assert!(serde_json::from_str::<SignalType>(r#""MAYBE""#).is_err());
	}
}
