use std::sync::Arc;

use leptos::prelude::*;

use super::{EmptyState, PageHeader};
use crate::components::{NameChips, ScoreBar, StatCard, use_region};
use crate::data::DatasetStore;
use crate::data::format::format_score;
use crate::views::overview::{Centrality, stat_tiles, structural_weaknesses, top_cities};

const TOP_CITIES: usize = 10;

/// Summary tiles, centrality rankings and structural weaknesses.
#[component]
pub fn OverviewPage() -> impl IntoView {
	let store = expect_context::<Arc<DatasetStore>>();
	let region = use_region();
	let measure = RwSignal::new(Centrality::Betweenness);

	let body = move || {
		let bundle = store.get(region.current());
		if bundle.is_empty() {
			return view! { <EmptyState region=bundle.region() /> }.into_any();
		}

		let tiles = stat_tiles(bundle)
			.into_iter()
			.map(|t| view! { <StatCard label=t.label value=t.value accent=t.accent /> })
			.collect_view();

		let ranked = top_cities(bundle, measure.get(), TOP_CITIES);
		let top = ranked.first().map_or(0.0, |r| r.score);
		let ranking = ranked
			.into_iter()
			.enumerate()
			.map(|(i, r)| {
				let fraction = if top > 0.0 { r.score / top } else { 0.0 };
				view! {
					<li class="rank-row">
						<span class="rank">{i + 1}</span>
						<span class="rank-name">{r.name}</span>
						<ScoreBar fraction=fraction color="var(--accent-blue)".to_string() />
						<span class="mono">{format_score(r.score)}</span>
					</li>
				}
			})
			.collect_view();

		let weak = structural_weaknesses(bundle);
		let bridges = weak
			.bridges
			.into_iter()
			.map(|(a, b)| view! { <li class="mono">{format!("{a} ↔ {b}")}</li> })
			.collect_view();
		let generated_at = bundle.data().generated_at.clone();

		view! {
			<section class="stat-grid">{tiles}</section>

			<section class="card">
				<div class="card-title-row">
					<h2>"Most Central Cities"</h2>
					<div class="toggle-group">
						{Centrality::ALL
							.into_iter()
							.map(|c| {
								view! {
									<button
										class="toggle"
										class:active=move || measure.get() == c
										on:click=move |_| measure.set(c)
									>
										{c.label()}
									</button>
								}
							})
							.collect_view()}
					</div>
				</div>
				<ol class="rank-list">{ranking}</ol>
			</section>

			<section class="card">
				<h2>"Structural Weaknesses"</h2>
				<h3 class="label-mono">"Articulation Points"</h3>
				<NameChips names=weak.articulation_points tone="chip-red" />
				<h3 class="label-mono">"Bloc Cut Vertices"</h3>
				<NameChips names=weak.bloc_cut_vertices tone="chip-amber" />
				<h3 class="label-mono">"Bridges"</h3>
				<ul class="bridge-list">{bridges}</ul>
			</section>

			<footer class="generated-at">
				{(!generated_at.is_empty()).then(|| format!("Generated {generated_at}"))}
			</footer>
		}
			.into_any()
	};

	view! {
		<PageHeader
			title="Network Overview"
			subtitle="Headline counts, centrality rankings and single points of failure."
		/>
		{body}
	}
}
