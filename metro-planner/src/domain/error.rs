//! Network construction errors.
//!
//! These errors represent invalid input while building or editing a
//! network. Query failures live in the planner.

/// Errors raised by the graph model.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum NetworkError {
    /// Station names are graph keys and must not be empty
    #[error("station name must not be empty")]
    EmptyStationName,

    /// A weight was negative, NaN or infinite
    #[error("invalid {field}: {value} (must be finite and non-negative)")]
    InvalidWeight { field: &'static str, value: f64 },

    /// A coordinate was NaN or infinite
    #[error("invalid coordinates ({x}, {y}): must be finite")]
    InvalidCoordinates { x: f64, y: f64 },

    /// The named station is not registered
    #[error("unknown station: {0}")]
    UnknownStation(String),
}
