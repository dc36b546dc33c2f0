use std::sync::Arc;

use leptos::prelude::*;

use super::{EmptyState, PageHeader};
use crate::components::{SortHeader, use_region};
use crate::data::DatasetStore;
use crate::data::format::{format_score, format_signed_score, format_whole_percent};
use crate::views::SortState;
use crate::views::opportunities::{
	OpportunitySortKey, SignalCounts, SignalFilter, gap_color, opportunity_rows, signal_color,
};

/// Opportunity and risk signals, filterable by type.
#[component]
pub fn OpportunitiesPage() -> impl IntoView {
	let store = expect_context::<Arc<DatasetStore>>();
	let region = use_region();
	let filter = RwSignal::new(SignalFilter::All);
	let sort = RwSignal::new(SortState::new(OpportunitySortKey::Gap));

	let body = move || {
		let current = region.current();
		let bundle = store.get(current);
		let signals = &bundle.data().opportunities;
		if signals.is_empty() {
			return view! { <EmptyState region=current what="opportunity signals" /> }.into_any();
		}
		let counts = SignalCounts::of(signals);

		let buttons = SignalFilter::ALL
			.into_iter()
			.map(|f| {
				view! {
					<button
						class="toggle"
						class:active=move || filter.get() == f
						on:click=move |_| filter.set(f)
					>
						{f.caption(&counts)}
					</button>
				}
			})
			.collect_view();

		let rows = opportunity_rows(bundle, filter.get(), &sort.get())
			.into_iter()
			.map(|s| {
				let kind_color = signal_color(s.signal_type);
				let tone_color = gap_color(s.gap_tone());
				view! {
					<tr>
						<td class="city-cell">{s.city_name.clone()}</td>
						<td>{s.country.clone()}</td>
						<td>
							<span class="badge" style=format!("color: {kind_color}; border-color: {kind_color}")>
								{s.signal_type.as_str()}
							</span>
						</td>
						<td class="mono">{format_score(s.model_score)}</td>
						<td class="mono">{format_score(s.actual_score)}</td>
						<td class="mono" style=format!("color: {tone_color}")>
							{format_signed_score(s.gap)}
						</td>
						<td class="mono">{format_whole_percent(s.confidence)}</td>
					</tr>
				}
			})
			.collect_view();

		view! {
			<div class="toggle-group">{buttons}</div>
			<div class="card table-card">
				<table class="data-table">
					<thead>
						<tr>
							<th>"City"</th>
							<th>"Country"</th>
							{OpportunitySortKey::ALL
								.into_iter()
								.map(|key| view! { <SortHeader key=key state=sort /> })
								.collect_view()}
						</tr>
					</thead>
					<tbody>{rows}</tbody>
				</table>
			</div>
		}
			.into_any()
	};

	view! {
		<PageHeader
			title="Opportunity Signals"
			subtitle="Where observed performance departs from what the model expects."
		/>
		{body}
	}
}
