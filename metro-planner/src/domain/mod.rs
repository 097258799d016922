//! Domain types for the metro planner.
//!
//! This module contains the validated building blocks of a network. All
//! types enforce their invariants at construction time, so the graph model
//! and the planner can trust names, positions and weights they receive.

mod error;
mod station;
mod weights;

pub use error::NetworkError;
pub use station::{Coordinates, Station, StationId, StationName};
pub use weights::Weights;
