//! Current-region state shared through Leptos context and mirrored in the URL.

use leptos::prelude::*;
use log::{debug, info, warn};
use wasm_bindgen::JsValue;
use web_sys::UrlSearchParams;

use crate::data::Region;
use crate::data::region::REGION_QUERY_KEY;

/// The selected region, provided once by the app root.
#[derive(Clone, Copy, Debug)]
pub struct RegionContext {
	region: RwSignal<Region>,
}

impl RegionContext {
	/// Context seeded from `?region=` in the current URL, or the default region.
	///
	/// Back and forward navigation re-read the URL, so the selection always
	/// matches the address bar.
	pub fn from_location() -> Self {
		let initial = Region::from_location_search(current_search().as_deref());
		info!("trade-atlas: starting in region {initial}");
		let ctx = Self::new(initial);

		let handle = window_event_listener(leptos::ev::popstate, move |_| {
			ctx.follow_location(current_search().as_deref());
		});
		on_cleanup(move || handle.remove());
		ctx
	}

	/// Context holding `region`, with no URL binding.
	pub fn new(region: Region) -> Self {
		Self {
			region: RwSignal::new(region),
		}
	}

	/// Reactive read of the selected region.
	pub fn current(&self) -> Region {
		self.region.get()
	}

	/// Non-reactive read of the selected region.
	pub fn current_untracked(&self) -> Region {
		self.region.get_untracked()
	}

	/// Selects `region` and records it in the browser history.
	pub fn set(&self, region: Region) {
		if self.region.get_untracked() == region {
			return;
		}
		self.region.set(region);
		push_region_to_url(region);
	}

	/// Adopts the region named by `search` without adding a history entry.
	pub fn follow_location(&self, search: Option<&str>) {
		let region = Region::from_location_search(search);
		if self.region.get_untracked() != region {
			debug!("trade-atlas: history navigation to region {region}");
			self.region.set(region);
		}
	}
}

/// The region context provided by the app root.
pub fn use_region() -> RegionContext {
	expect_context::<RegionContext>()
}

fn current_search() -> Option<String> {
	web_sys::window()?.location().search().ok()
}

/// Rewrites the `region` query parameter, keeping any other parameters.
fn push_region_to_url(region: Region) {
	let Some(window) = web_sys::window() else {
		return;
	};
	let location = window.location();
	let search = location.search().unwrap_or_default();
	let Ok(params) = UrlSearchParams::new_with_str(&search) else {
		return;
	};
	params.set(REGION_QUERY_KEY, region.slug());

	let query: js_sys::JsString = params.to_string();
	let path = location.pathname().unwrap_or_default();
	let url = format!("{path}?{}", String::from(query));

	match window.history() {
		Ok(history) => {
			if let Err(e) = history.push_state_with_url(&JsValue::NULL, "", Some(&url)) {
				warn!("trade-atlas: failed to update URL: {e:?}");
			}
		}
		Err(e) => warn!("trade-atlas: history unavailable: {e:?}"),
	}
}

/// Row of buttons switching the active region.
#[component]
pub fn RegionPicker() -> impl IntoView {
	let ctx = use_region();

	view! {
		<div class="region-picker">
			<span class="label-mono">"Region"</span>
			{Region::ALL
				.into_iter()
				.map(|region| {
					view! {
						<button
							class="region-button"
							class:active=move || ctx.current() == region
							on:click=move |_| ctx.set(region)
						>
							{region.label()}
						</button>
					}
				})
				.collect_view()}
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn history_navigation_follows_the_url() {
		let ctx = RegionContext::new(Region::Europe);
		ctx.follow_location(Some("?region=world"));
		assert_eq!(ctx.current_untracked(), Region::World);

		// Going back to a URL without the parameter lands on the default region.
		ctx.follow_location(Some(""));
		assert_eq!(ctx.current_untracked(), Region::WestAfrica);

		ctx.follow_location(Some("?page=map&region=europe"));
		assert_eq!(ctx.current_untracked(), Region::Europe);
	}
}
