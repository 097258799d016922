//! Web layer for the metro planner.
//!
//! Serves route queries and the network listing as JSON, for a diagram or
//! any other client. Nothing here renders; clients draw from the data.

mod config;
mod dto;
mod routes;
mod state;

pub use config::{ADDR_VAR, ConfigError, ServerConfig};
pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
