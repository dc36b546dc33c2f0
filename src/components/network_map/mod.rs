//! Canvas map of a region's trade network.
//!
//! Cities sit at their geographic coordinates (equirectangular projection
//! fitted to the canvas); edges are straight strokes in their edge type's
//! color. The map supports:
//! - Pan by dragging, zoom with the wheel around the pointer
//! - Smooth hover highlight of a city and its direct neighbours
//! - Click to select a city
//!
//! # Example
//!
//! ```ignore
//! let data = Signal::derive(move || MapData::from_bundle(bundle, &filter.get()));
//! let selected = RwSignal::new(None);
//!
//! view! { <NetworkMapCanvas data=data selected=selected /> }
//! ```

mod component;
mod render;
pub mod scale;
mod state;
pub mod theme;
mod types;

pub use component::NetworkMapCanvas;
pub use scale::MapScaleConfig;
pub use theme::MapTheme;
pub use types::{MapData, MapLink, MapNode};
