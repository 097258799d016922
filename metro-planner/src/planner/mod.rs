//! Route planner.
//!
//! Two queries over a [`Network`](crate::network::Network):
//!
//! - fewest hops, by breadth-first search, ignoring weights;
//! - cheapest route, by A* over `travel_time + transfer_time` with a
//!   Manhattan-distance heuristic.
//!
//! Both are deterministic for a given network construction order.

mod astar;
mod bfs;
mod config;
mod error;
mod path;
mod search;

pub use config::{Heuristic, SearchConfig};
pub use error::SearchError;
pub use path::{Comparison, Path, Route};
pub use search::Planner;
