use std::sync::Arc;

use leptos::prelude::*;

use super::{EmptyState, PageHeader};
use crate::components::network_map::{MapData, NetworkMapCanvas};
use crate::components::use_region;
use crate::data::format::{format_count, format_grouped, format_optional_score, format_percent};
use crate::data::{DatasetStore, Region, resolve_city_by_id, resolve_edge_type_color};
use crate::views::network::{EdgeTypeFilter, bloc_legend, edge_types};

/// Geographic map with edge-type toggles and a city detail panel.
#[component]
pub fn NetworkMapPage() -> impl IntoView {
	let store = expect_context::<Arc<DatasetStore>>();
	let region = use_region();
	let filter = RwSignal::new(EdgeTypeFilter::all_of(store.get(region.current_untracked())));
	let selected = RwSignal::new(None::<String>);

	// A region switch starts over with every edge type shown and nothing selected.
	let store_reset = store.clone();
	Effect::new(move |prev: Option<Region>| {
		let current = region.current();
		if prev.is_some_and(|p| p != current) {
			filter.set(EdgeTypeFilter::all_of(store_reset.get(current)));
			selected.set(None);
		}
		current
	});

	let store_map = store.clone();
	let data = Signal::derive(move || MapData::from_bundle(store_map.get(region.current()), &filter.get()));

	let store_controls = store.clone();
	let edge_toggles = move || {
		let current = region.current();
		edge_types(store_controls.get(current))
			.into_iter()
			.map(|kind| {
				let color = resolve_edge_type_color(&kind, current).to_css();
				let (probe, target) = (kind.clone(), kind.clone());
				view! {
					<button
						class="toggle legend-toggle"
						class:active=move || filter.with(|f| f.is_enabled(&probe))
						on:click=move |_| filter.update(|f| f.toggle(&target))
					>
						<span class="swatch" style=format!("background: {color}") />
						{kind}
					</button>
				}
			})
			.collect_view()
	};

	let store_legend = store.clone();
	let legend = move || {
		bloc_legend(store_legend.get(region.current()))
			.into_iter()
			.map(|(bloc, color)| {
				view! {
					<span class="legend-item">
						<span class="swatch round" style=format!("background: {}", color.to_css()) />
						{bloc}
					</span>
				}
			})
			.collect_view()
	};

	let store_detail = store;
	let detail = move || {
		let current = region.current();
		let id = selected.get()?;
		let city = resolve_city_by_id(&store_detail, &id, current)?;
		let data = store_detail.get(current).data();
		let metric = |m: &std::collections::BTreeMap<String, f64>| format_optional_score(m.get(&id).copied());

		let flags = [
			(city.is_port, "Port"),
			(city.is_capital, "Capital"),
			(city.is_ftz_target, "FTZ target"),
			(city.cfa_zone, "CFA zone"),
		]
		.into_iter()
		.filter(|(on, _)| *on)
		.map(|(_, label)| view! { <span class="chip">{label}</span> })
		.collect_view();

		Some(view! {
			<aside class="card city-detail">
				<div class="card-title-row">
					<h2>{city.name.clone()}</h2>
					<button class="toggle" on:click=move |_| selected.set(None)>
						"Close"
					</button>
				</div>
				<div class="label-mono">{format!("{} · {}", city.country, city.bloc)}</div>
				<div class="chips">{flags}</div>
				<dl class="detail-grid">
					<dt>"Population"</dt>
					<dd class="mono">{format_count(city.population as f64)}</dd>
					<dt>"GDP per capita"</dt>
					<dd class="mono">{format_grouped(city.gdp_per_capita)}</dd>
					<dt>"Trade openness"</dt>
					<dd class="mono">{format_percent(city.trade_openness)}</dd>
					<dt>"Betweenness"</dt>
					<dd class="mono">{metric(&data.metrics.betweenness)}</dd>
					<dt>"Degree"</dt>
					<dd class="mono">{metric(&data.metrics.degree)}</dd>
					<dt>"Closeness"</dt>
					<dd class="mono">{metric(&data.metrics.closeness)}</dd>
					<dt>"FTZ composite"</dt>
					<dd class="mono">{format_optional_score(data.ftz_impact.get(&id).map(|s| s.composite))}</dd>
				</dl>
			</aside>
		})
	};

	view! {
		<PageHeader
			title="Network Map"
			subtitle="Cities by bloc and corridors by type. Drag to pan, scroll to zoom, click a city."
		/>
		<div class="toggle-group">{edge_toggles}</div>
		<Show
			when=move || data.with(|d| !d.is_empty())
			fallback=move || view! { <EmptyState region=region.current() what="map data" /> }
		>
			<div class="map-layout">
				<div class="card map-container">
					<NetworkMapCanvas data=data selected=selected height=Some(560.0) />
				</div>
				{detail.clone()}
			</div>
		</Show>
		<div class="legend">{legend}</div>
	}
}
