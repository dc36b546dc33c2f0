use std::sync::Arc;

use leptos::prelude::*;

use super::{EmptyState, PageHeader};
use crate::components::{NameChips, ScoreBar, use_region};
use crate::data::DatasetStore;
use crate::views::cascades::{CascadeCard, cascade_cards};

#[component]
fn ScenarioCard(card: CascadeCard) -> impl IntoView {
	let color = card.level.css_var();
	view! {
		<article class="card card-hover cascade-card">
			<div class="card-title-row">
				<h2>{card.name}</h2>
				<span class="badge" style=format!("color: {color}; border-color: {color}")>
					{card.severity_label}
				</span>
			</div>
			<div class="label-mono">{format!("{} · trigger: {}", card.kind, card.trigger_name)}</div>
			<ScoreBar fraction=card.severity color=color.to_string() />

			<dl class="cascade-stats">
				<dt>"New components"</dt>
				<dd class="mono">{card.new_components}</dd>
				<dt>"Trade volume affected"</dt>
				<dd class="mono">{card.trade_volume_label}</dd>
			</dl>

			<h3 class="label-mono">"Affected"</h3>
			<NameChips names=card.affected tone="chip-amber" />
			<h3 class="label-mono">"Isolated"</h3>
			<NameChips names=card.isolated tone="chip-red" />
			<h3 class="label-mono">"Trade Disrupted"</h3>
			<NameChips names=card.trade_disrupted tone="chip-blue" />
		</article>
	}
}

/// Cascade failure scenarios as cards.
#[component]
pub fn CascadesPage() -> impl IntoView {
	let store = expect_context::<Arc<DatasetStore>>();
	let region = use_region();

	let body = move || {
		let current = region.current();
		let cards = cascade_cards(store.get(current));
		if cards.is_empty() {
			return view! { <EmptyState region=current what="cascade scenarios" /> }.into_any();
		}
		view! {
			<section class="card-grid">
				{cards.into_iter().map(|card| view! { <ScenarioCard card=card /> }).collect_view()}
			</section>
		}
			.into_any()
	};

	view! {
		<PageHeader
			title="Cascade Scenarios"
			subtitle="What breaks when a city or corridor drops out of the network."
		/>
		{body}
	}
}
