//! Dataset store, lookups and formatting over the analysis artifacts.
//!
//! Nothing in this module touches the browser; it is pure and side-effect
//! free once the store is built.

pub mod format;
pub mod lookup;
pub mod palette;
pub mod region;
pub mod store;
pub mod types;

pub use lookup::{resolve_city_by_id, resolve_city_name};
pub use palette::{Color, NEUTRAL, resolve_bloc_color, resolve_edge_type_color};
pub use region::Region;
pub use store::{DataError, DatasetBundle, DatasetStore};
pub use types::{
	AnalysisData, CascadeScenario, City, Edge, FtzImpactScore, GapTone, NetworkMetrics,
	NetworkSummary, OpportunitySignal, SignalType, TradeRouteData,
};
