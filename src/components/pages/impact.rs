use std::sync::Arc;

use leptos::prelude::*;

use super::{EmptyState, PageHeader};
use crate::components::{SortHeader, use_region};
use crate::data::format::format_score;
use crate::data::{DatasetStore, resolve_city_name};
use crate::views::{SortKey, SortState};
use crate::views::impact::{ImpactSortKey, breakdown, impact_rows};

/// Sortable FTZ impact table with per-city breakdown.
#[component]
pub fn ImpactPage() -> impl IntoView {
	let store = expect_context::<Arc<DatasetStore>>();
	let region = use_region();
	let sort = RwSignal::new(SortState::new(ImpactSortKey::Composite));

	let body = move || {
		let current = region.current();
		let bundle = store.get(current);
		if bundle.data().ftz_impact.is_empty() {
			return view! { <EmptyState region=current what="FTZ impact scores" /> }.into_any();
		}

		let rows = impact_rows(bundle, &sort.get())
			.into_iter()
			.map(|row| {
				let name = resolve_city_name(&store, &row.city_id, current).to_string();
				let cells = ImpactSortKey::ALL
					.into_iter()
					.map(|key| {
						let color = key.accent().css_var();
						view! {
							<td class="mono" style=format!("color: {color}")>
								{format_score(key.score_of(&row.score))}
							</td>
						}
					})
					.collect_view();
				let segments = breakdown(&row.score)
					.into_iter()
					.map(|seg| {
						let style = format!(
							"width: {:.1}%; background: {};",
							seg.width_percent.max(0.0),
							seg.key.accent().css_var()
						);
						view! { <div class="breakdown-segment" style=style title=seg.key.label() /> }
					})
					.collect_view();
				view! {
					<tr>
						<td class="city-cell">{name}</td>
						{cells}
						<td>
							<div class="breakdown-bar">{segments}</div>
						</td>
					</tr>
				}
			})
			.collect_view();

		view! {
			<div class="card table-card">
				<table class="data-table">
					<thead>
						<tr>
							<th>"City"</th>
							{ImpactSortKey::ALL
								.into_iter()
								.map(|key| view! { <SortHeader key=key state=sort /> })
								.collect_view()}
							<th>"Breakdown"</th>
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
			title="FTZ Impact"
			subtitle="Composite free-trade-zone suitability and its component scores."
		/>
		{body}
	}
}
