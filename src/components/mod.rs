//! Leptos view layer.

pub mod network_map;
pub mod pages;
mod region_selector;
mod sidebar;
mod table;

pub use region_selector::{RegionContext, RegionPicker, use_region};
pub use sidebar::{Page, Sidebar};
pub use table::{NameChips, ScoreBar, SortHeader, StatCard};
