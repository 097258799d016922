//! Route search errors.

/// Error from a route query.
///
/// Unknown stations and unreachable goals are distinct variants. The
/// sentinel-style [`Planner::bfs`](super::Planner::bfs) and
/// [`Planner::a_star`](super::Planner::a_star) collapse both into "no path".
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// Start or goal is not a registered station
    #[error("unknown station: {0}")]
    UnknownStation(String),

    /// Both stations exist but no connections join them
    #[error("no route from {from} to {to}")]
    Unreachable { from: String, to: String },
}

impl SearchError {
    /// True for a valid query that simply has no answer.
    pub fn is_unreachable(&self) -> bool {
        matches!(self, SearchError::Unreachable { .. })
    }
}
