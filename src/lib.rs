//! trade-atlas: Interactive dashboard for precomputed regional trade networks.
//!
//! This crate renders analysis artifacts (centrality metrics, FTZ impact
//! scores, trade routes, cascade scenarios, opportunity signals) for a closed
//! set of regions. The artifacts are produced elsewhere and embedded in the
//! host page as JSON; the dashboard only selects, sorts, filters and colors
//! them.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlScriptElement, Window};

pub mod components;
pub mod data;
pub mod views;

use components::pages::{
	CascadesPage, ImpactPage, NetworkMapPage, OpportunitiesPage, OverviewPage, RoutesPage,
};
use components::{Page, RegionContext, RegionPicker, Sidebar};
pub use data::{DataError, DatasetBundle, DatasetStore, Region};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("trade-atlas: logging initialized");
}

/// DOM id of the script element holding a region's artifact.
pub fn dataset_element_id(region: Region) -> String {
	format!("analysis-{}", region.slug())
}

fn read_script_text(document: &Document, id: &str) -> Option<String> {
	let element = document.get_element_by_id(id)?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	script.text().ok()
}

/// Load every region's artifact from `<script id="analysis-<region>">` elements.
///
/// Regions that are missing or fail to parse stay empty; the failure is logged.
fn load_datasets() -> DatasetStore {
	let mut store = DatasetStore::new();
	let Some(document) = web_sys::window().and_then(|w: Window| w.document()) else {
		warn!("trade-atlas: no document, starting with empty datasets");
		return store;
	};

	for region in Region::ALL {
		let loaded = read_script_text(&document, &dataset_element_id(region))
			.ok_or(DataError::Missing { region })
			.and_then(|json| store.load(region, &json));
		if let Err(e) = loaded {
			warn!("trade-atlas: {e}");
		}
	}
	store
}

/// Main application component.
/// Loads datasets from the DOM and renders the selected page for the selected region.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let store = Arc::new(load_datasets());
	provide_context(store);
	provide_context(RegionContext::from_location());

	let page = RwSignal::new(Page::default());

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />
		<Title text="Trade Network Atlas" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<div class="app-shell">
			<Sidebar page=page />
			<main class="content">
				<RegionPicker />
				{move || match page.get() {
					Page::Overview => view! { <OverviewPage /> }.into_any(),
					Page::Map => view! { <NetworkMapPage /> }.into_any(),
					Page::Impact => view! { <ImpactPage /> }.into_any(),
					Page::Routes => view! { <RoutesPage /> }.into_any(),
					Page::Cascades => view! { <CascadesPage /> }.into_any(),
					Page::Opportunities => view! { <OpportunitiesPage /> }.into_any(),
				}}
			</main>
		</div>
	}
}
