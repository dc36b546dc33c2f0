use std::sync::Arc;

use leptos::prelude::*;

use super::{EmptyState, PageHeader};
use crate::components::{NameChips, SortHeader, use_region};
use crate::data::format::{format_grouped, format_optional_score, format_score};
use crate::data::{DatasetStore, resolve_city_name};
use crate::views::SortState;
use crate::views::routes::{RouteSortKey, Tier, city_names, describe_path, route_rows};

/// Route risk and redundancy per city.
#[component]
pub fn RoutesPage() -> impl IntoView {
	let store = expect_context::<Arc<DatasetStore>>();
	let region = use_region();
	let sort = RwSignal::new(SortState::new(RouteSortKey::Risk));

	let body = move || {
		let current = region.current();
		let bundle = store.get(current);
		if bundle.data().trade_routes.is_empty() {
			return view! { <EmptyState region=current what="trade routes" /> }.into_any();
		}

		let rows = route_rows(bundle, &sort.get())
			.into_iter()
			.map(|row| {
				let route = &row.route;
				let name = resolve_city_name(&store, &row.city_id, current).to_string();
				let risk_color = Tier::of_risk(route.risk).css_var();
				let redundancy_color = Tier::of_redundancy(route.redundancy).css_var();
				let cut_nodes: Vec<String> = city_names(bundle, &route.min_cut_nodes)
					.into_iter()
					.map(str::to_owned)
					.collect();
				view! {
					<tr>
						<td class="city-cell">{name}</td>
						<td class="mono" style=format!("color: {risk_color}")>
							{format_score(route.risk)}
						</td>
						<td class="mono" style=format!("color: {redundancy_color}")>
							{format_grouped(route.redundancy)}
						</td>
						<td class="mono">{route.min_cut}</td>
						<td class="mono">{format_optional_score(route.shortest_cost)}</td>
						<td class="path-cell">{describe_path(bundle, route)}</td>
						<td>
							<NameChips names=cut_nodes tone="chip-amber" />
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
							{RouteSortKey::ALL
								.into_iter()
								.map(|key| view! { <SortHeader key=key state=sort /> })
								.collect_view()}
							<th>"Shortest Path"</th>
							<th>"Min-Cut Cities"</th>
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
			title="Trade Routes"
			subtitle="Route risk, redundant capacity and the cities a route cannot lose."
		/>
		{body}
	}
}
