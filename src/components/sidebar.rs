//! Page switcher.

use leptos::prelude::*;

/// Dashboard pages.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Page {
	#[default]
	Overview,
	Map,
	Impact,
	Routes,
	Cascades,
	Opportunities,
}

impl Page {
	/// Pages in navigation order.
	pub const ALL: [Page; 6] = [
		Page::Overview,
		Page::Map,
		Page::Impact,
		Page::Routes,
		Page::Cascades,
		Page::Opportunities,
	];

	/// Navigation label.
	pub const fn label(self) -> &'static str {
		match self {
			Page::Overview => "Overview",
			Page::Map => "Network Map",
			Page::Impact => "FTZ Impact",
			Page::Routes => "Trade Routes",
			Page::Cascades => "Cascades",
			Page::Opportunities => "Opportunities",
		}
	}
}

/// Page navigation writing to `page`.
#[component]
pub fn Sidebar(page: RwSignal<Page>) -> impl IntoView {
	view! {
		<nav class="sidebar">
			<div class="sidebar-title">
				<div class="label-mono">"Network Analysis"</div>
				<div class="brand">"Trade Atlas"</div>
			</div>
			{Page::ALL
				.into_iter()
				.map(|p| {
					view! {
						<button
							class="nav-item"
							class:active=move || page.get() == p
							on:click=move |_| page.set(p)
						>
							{p.label()}
						</button>
					}
				})
				.collect_view()}
		</nav>
	}
}
