//! Cascade scenario cards.

use crate::data::format::{format_count, format_percent};
use crate::data::{CascadeScenario, DatasetBundle};

use super::routes::city_names;

/// Severity band of a scenario.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeverityLevel {
	Moderate,
	Elevated,
	High,
}

impl SeverityLevel {
	/// Level for a severity fraction.
	pub fn of(severity: f64) -> Self {
		if severity >= 0.7 {
			SeverityLevel::High
		} else if severity >= 0.5 {
			SeverityLevel::Elevated
		} else {
			SeverityLevel::Moderate
		}
	}

	/// CSS color variable for this level.
	pub const fn css_var(self) -> &'static str {
		match self {
			SeverityLevel::High => "var(--accent-red)",
			SeverityLevel::Elevated => "var(--accent-amber)",
			SeverityLevel::Moderate => "var(--accent-green)",
		}
	}
}

/// A scenario with names resolved and figures formatted.
#[derive(Clone, Debug, PartialEq)]
pub struct CascadeCard {
	pub name: String,
	pub kind: String,
	pub trigger_name: String,
	pub severity: f64,
	pub severity_label: String,
	pub level: SeverityLevel,
	pub affected: Vec<String>,
	pub isolated: Vec<String>,
	pub trade_disrupted: Vec<String>,
	pub new_components: u32,
	pub trade_volume_label: String,
}

impl CascadeCard {
	/// Card for `scenario` with city ids resolved to names.
	pub fn new(bundle: &DatasetBundle, scenario: &CascadeScenario) -> Self {
		let names = |ids: &[String]| -> Vec<String> {
			city_names(bundle, ids).into_iter().map(str::to_owned).collect()
		};
		Self {
			name: scenario.name.clone(),
			kind: scenario.kind.clone(),
			trigger_name: bundle
				.city(&scenario.trigger)
				.map_or_else(|| scenario.trigger.clone(), |c| c.name.clone()),
			severity: scenario.severity,
			severity_label: format_percent(scenario.severity),
			level: SeverityLevel::of(scenario.severity),
			affected: names(scenario.affected_cities.as_slice()),
			isolated: names(scenario.isolated_cities.as_slice()),
			trade_disrupted: names(scenario.trade_disrupted_cities.as_slice()),
			new_components: scenario.new_components,
			trade_volume_label: format_count(scenario.trade_volume_affected),
		}
	}
}

/// Cards for every scenario in storage order.
pub fn cascade_cards(bundle: &DatasetBundle) -> Vec<CascadeCard> {
	bundle
		.data()
		.cascades
		.iter()
		.map(|s| CascadeCard::new(bundle, s))
		.collect()
}
