//! Derived, recomputable projections of a dataset bundle for each page.
//!
//! Every function here takes the immutable bundle and returns fresh rows;
//! nothing is cached.

pub mod cascades;
pub mod impact;
pub mod network;
pub mod opportunities;
pub mod overview;
pub mod routes;
pub mod sort;

pub use sort::{SortKey, SortState, SortValue};
