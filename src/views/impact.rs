//! FTZ impact ranking rows.

use crate::data::{DatasetBundle, FtzImpactScore};

use super::sort::{SortKey, SortState, SortValue, sort_rows};

/// Full width of the breakdown bar, in score units.
const BREAKDOWN_SCALE: f64 = 6.0;

/// One table row.
#[derive(Clone, Debug, PartialEq)]
pub struct ImpactRow {
	pub city_id: String,
	pub score: FtzImpactScore,
}

/// Sortable score columns, in table order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImpactSortKey {
	Composite,
	Connectivity,
	PortAccess,
	TariffExposure,
	TradeVolume,
	Diversification,
	BorderProximity,
	Stability,
}

/// Accent used for a score column.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Accent {
	Purple,
	Green,
	Amber,
}

impl Accent {
	/// CSS color variable for this accent.
	pub const fn css_var(self) -> &'static str {
		match self {
			Accent::Purple => "var(--accent-purple)",
			Accent::Green => "var(--accent-green)",
			Accent::Amber => "var(--accent-amber)",
		}
	}
}

impl ImpactSortKey {
	/// Columns in display order.
	pub const ALL: [ImpactSortKey; 8] = [
		ImpactSortKey::Composite,
		ImpactSortKey::Connectivity,
		ImpactSortKey::PortAccess,
		ImpactSortKey::TariffExposure,
		ImpactSortKey::TradeVolume,
		ImpactSortKey::Diversification,
		ImpactSortKey::BorderProximity,
		ImpactSortKey::Stability,
	];

	/// The column value in `s`.
	pub fn score_of(self, s: &FtzImpactScore) -> f64 {
		match self {
			ImpactSortKey::Composite => s.composite,
			ImpactSortKey::Connectivity => s.connectivity,
			ImpactSortKey::PortAccess => s.port_access,
			ImpactSortKey::TariffExposure => s.tariff_exposure,
			ImpactSortKey::TradeVolume => s.trade_volume,
			ImpactSortKey::Diversification => s.diversification,
			ImpactSortKey::BorderProximity => s.border_proximity,
			ImpactSortKey::Stability => s.stability,
		}
	}

	pub const fn accent(self) -> Accent {
		match self {
			ImpactSortKey::Composite | ImpactSortKey::Diversification => Accent::Purple,
			ImpactSortKey::TariffExposure | ImpactSortKey::BorderProximity => Accent::Amber,
			_ => Accent::Green,
		}
	}

	/// Whether the column appears as a segment of the stacked breakdown bar.
	pub const fn in_breakdown(self) -> bool {
		!matches!(self, ImpactSortKey::Composite | ImpactSortKey::Stability)
	}
}

impl SortKey for ImpactSortKey {
	type Row = ImpactRow;

	fn value(self, row: &ImpactRow) -> SortValue<'_> {
		SortValue::Number(self.score_of(&row.score))
	}

	fn label(self) -> &'static str {
		match self {
			ImpactSortKey::Composite => "Composite",
			ImpactSortKey::Connectivity => "Connectivity",
			ImpactSortKey::PortAccess => "Port Access",
			ImpactSortKey::TariffExposure => "Tariff Exp.",
			ImpactSortKey::TradeVolume => "Trade Vol",
			ImpactSortKey::Diversification => "Diversif.",
			ImpactSortKey::BorderProximity => "Border Prox.",
			ImpactSortKey::Stability => "Stability",
		}
	}
}

/// One segment of a city's stacked breakdown bar.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BreakdownSegment {
	pub key: ImpactSortKey,
	pub value: f64,
	/// Share of the bar width, 0..100.
	pub width_percent: f64,
}

/// Scored cities, sorted.
pub fn impact_rows(bundle: &DatasetBundle, sort: &SortState<ImpactSortKey>) -> Vec<ImpactRow> {
	let mut rows: Vec<_> = bundle
		.data()
		.ftz_impact
		.iter()
		.map(|(id, score)| ImpactRow {
			city_id: id.clone(),
			score: *score,
		})
		.collect();
	sort_rows(&mut rows, sort);
	rows
}

/// Component scores as segments of the breakdown bar.
pub fn breakdown(score: &FtzImpactScore) -> Vec<BreakdownSegment> {
	ImpactSortKey::ALL
		.into_iter()
		.filter(|k| k.in_breakdown())
		.map(|key| {
			let value = key.score_of(score);
			BreakdownSegment {
				key,
				value,
				width_percent: value / BREAKDOWN_SCALE * 100.0,
			}
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::data::Region;

	fn bundle() -> DatasetBundle {
		DatasetBundle::from_json(
			Region::WestAfrica,
			r#"{ "ftz_impact": {
				"abj": { "composite": 0.81, "connectivity": 0.9, "port_access": 0.9, "stability": 0.4 },
				"lag": { "composite": 0.77, "connectivity": 0.95, "port_access": 0.6, "stability": 0.9 },
				"dkr": { "composite": 0.85, "connectivity": 0.7, "port_access": 0.9, "stability": 0.7 }
			} }"#,
		)
		.unwrap()
	}

	fn ids(rows: &[ImpactRow]) -> Vec<&str> {
		rows.iter().map(|r| r.city_id.as_str()).collect()
	}

	#[test]
	fn default_sort_is_composite_descending() {
		let rows = impact_rows(&bundle(), &SortState::new(ImpactSortKey::Composite));
		assert_eq!(ids(&rows), ["dkr", "abj", "lag"]);
	}

	#[test]
	fn any_sub_score_can_drive_the_sort() {
		let mut sort = SortState::new(ImpactSortKey::Composite);
		sort.select(ImpactSortKey::Stability);
		assert_eq!(ids(&impact_rows(&bundle(), &sort)), ["lag", "dkr", "abj"]);
		sort.select(ImpactSortKey::Stability);
		assert_eq!(ids(&impact_rows(&bundle(), &sort)), ["abj", "dkr", "lag"]);
	}

	#[test]
	fn breakdown_skips_composite_and_stability() {
		let segments = breakdown(&FtzImpactScore {
			connectivity: 0.6,
			..FtzImpactScore::default()
		});
		assert_eq!(segments.len(), 6);
		assert!(segments.iter().all(|s| s.key.in_breakdown()));
		assert!((segments[0].width_percent - 10.0).abs() < 1e-9);
	}
}
