//! One component per dashboard page. Each reads the shared store and the
//! region context and renders the matching projection from `views`.

mod cascades;
mod impact;
mod map;
mod opportunities;
mod overview;
mod routes;

pub use cascades::CascadesPage;
pub use impact::ImpactPage;
pub use map::NetworkMapPage;
pub use opportunities::OpportunitiesPage;
pub use overview::OverviewPage;
pub use routes::RoutesPage;

use leptos::prelude::*;

use crate::data::Region;

#[component]
fn PageHeader(title: &'static str, subtitle: &'static str) -> impl IntoView {
	let region = super::use_region();
	view! {
		<header class="page-header">
			<div class="label-mono">{move || region.current().label()}</div>
			<h1>{title}</h1>
			<p class="subtitle">{subtitle}</p>
		</header>
	}
}

/// Shown in place of a page when the region has no artifact.
#[component]
fn EmptyState(region: Region, #[prop(default = "analysis data")] what: &'static str) -> impl IntoView {
	view! {
		<div class="card empty-state">
			{format!("No {what} loaded for {}.", region.label())}
		</div>
	}
}
