//! Small building blocks shared by the pages.

use leptos::prelude::*;

use crate::views::{SortKey, SortState};

/// Clickable column header driving a [`SortState`].
#[component]
pub fn SortHeader<K>(key: K, state: RwSignal<SortState<K>>) -> impl IntoView
where
	K: SortKey + Send + Sync + 'static,
{
	view! {
		<th
			class="sortable"
			class:sorted=move || state.get().key == key
			on:click=move |_| state.update(|s| s.select(key))
		>
			{key.label()}
			{move || state.get().indicator(key)}
		</th>
	}
}

/// Headline number with a label.
#[component]
pub fn StatCard(label: &'static str, #[prop(into)] value: String, accent: &'static str) -> impl IntoView {
	view! {
		<div class="card card-hover stat-card">
			<div class="label-mono">{label}</div>
			<div class="stat-value" style=format!("color: {accent}")>
				{value}
			</div>
		</div>
	}
}

/// Horizontal bar filled to `fraction` of its width.
#[component]
pub fn ScoreBar(fraction: f64, color: String) -> impl IntoView {
	let width = (fraction.clamp(0.0, 1.0) * 100.0).round();
	view! {
		<div class="score-bar">
			<div class="score-bar-fill" style=format!("width: {width}%; background: {color};") />
		</div>
	}
}

/// Pill list of names.
#[component]
pub fn NameChips(names: Vec<String>, tone: &'static str) -> impl IntoView {
	view! {
		<div class="chips">
			{names
				.into_iter()
				.map(|name| view! { <span class=format!("chip {tone}")>{name}</span> })
				.collect_view()}
		</div>
	}
}
