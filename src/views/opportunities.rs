//! Opportunity signal filtering, counting and sorting.

use crate::data::{DatasetBundle, GapTone, OpportunitySignal, SignalType};

use super::sort::{SortKey, SortState, SortValue, sort_rows};

/// Sortable columns of the signals table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OpportunitySortKey {
	SignalType,
	ModelScore,
	ActualScore,
	Gap,
	Confidence,
}

impl OpportunitySortKey {
	/// Columns in display order.
	pub const ALL: [OpportunitySortKey; 5] = [
		OpportunitySortKey::SignalType,
		OpportunitySortKey::ModelScore,
		OpportunitySortKey::ActualScore,
		OpportunitySortKey::Gap,
		OpportunitySortKey::Confidence,
	];
}

impl SortKey for OpportunitySortKey {
	type Row = OpportunitySignal;

	fn value(self, row: &OpportunitySignal) -> SortValue<'_> {
		match self {
			OpportunitySortKey::SignalType => SortValue::Text(row.signal_type.as_str()),
			OpportunitySortKey::ModelScore => SortValue::Number(row.model_score),
			OpportunitySortKey::ActualScore => SortValue::Number(row.actual_score),
			OpportunitySortKey::Gap => SortValue::Number(row.gap),
			OpportunitySortKey::Confidence => SortValue::Number(row.confidence),
		}
	}

	fn label(self) -> &'static str {
		match self {
			OpportunitySortKey::SignalType => "Type",
			OpportunitySortKey::ModelScore => "Model Score",
			OpportunitySortKey::ActualScore => "Actual Score",
			OpportunitySortKey::Gap => "Gap",
			OpportunitySortKey::Confidence => "Confidence",
		}
	}
}

/// Which signal types the table shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SignalFilter {
	#[default]
	All,
	Only(SignalType),
}

impl SignalFilter {
	/// Filter buttons in display order.
	pub const ALL: [SignalFilter; 4] = [
		SignalFilter::All,
		SignalFilter::Only(SignalType::Opportunity),
		SignalFilter::Only(SignalType::Risk),
		SignalFilter::Only(SignalType::Neutral),
	];

	/// Whether `signal` passes this filter.
	pub fn accepts(self, signal: &OpportunitySignal) -> bool {
		match self {
			SignalFilter::All => true,
			SignalFilter::Only(kind) => signal.signal_type == kind,
		}
	}

	/// Button caption, e.g. `All (12)` or `RISK (3)`.
	pub fn caption(self, counts: &SignalCounts) -> String {
		match self {
			SignalFilter::All => format!("All ({})", counts.total()),
			SignalFilter::Only(kind) => format!("{} ({})", kind.as_str(), counts.get(kind)),
		}
	}
}

/// Number of signals per type.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SignalCounts {
	pub opportunity: usize,
	pub risk: usize,
	pub neutral: usize,
}

impl SignalCounts {
	/// Counts per signal type.
	pub fn of(signals: &[OpportunitySignal]) -> Self {
		signals.iter().fold(Self::default(), |mut c, s| {
			match s.signal_type {
				SignalType::Opportunity => c.opportunity += 1,
				SignalType::Risk => c.risk += 1,
				SignalType::Neutral => c.neutral += 1,
			}
			c
		})
	}

	/// Count for `kind`.
	pub fn get(&self, kind: SignalType) -> usize {
		match kind {
			SignalType::Opportunity => self.opportunity,
			SignalType::Risk => self.risk,
			SignalType::Neutral => self.neutral,
		}
	}

	/// Count over all types.
	pub fn total(&self) -> usize {
		self.opportunity + self.risk + self.neutral
	}
}

/// Text color for a gap: opportunity green above zero, risk red below.
pub const fn gap_color(tone: GapTone) -> &'static str {
	match tone {
		GapTone::Positive => "var(--accent-green)",
		GapTone::Negative => "var(--accent-red)",
		GapTone::Flat => "var(--text-secondary)",
	}
}

/// Badge color for a signal type.
pub const fn signal_color(kind: SignalType) -> &'static str {
	match kind {
		SignalType::Opportunity => "var(--accent-green)",
		SignalType::Risk => "var(--accent-red)",
		SignalType::Neutral => "var(--text-secondary)",
	}
}

/// Signals passing `filter`, sorted.
pub fn opportunity_rows(
	bundle: &DatasetBundle,
	filter: SignalFilter,
	sort: &SortState<OpportunitySortKey>,
) -> Vec<OpportunitySignal> {
	let mut rows: Vec<_> = bundle
		.data()
		.opportunities
		.iter()
		.filter(|s| filter.accepts(s))
		.cloned()
		.collect();
	sort_rows(&mut rows, sort);
	rows
}
