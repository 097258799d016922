//! Search configuration for the planner.

use crate::domain::Coordinates;

/// Lower-bound estimate used to order the A* frontier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Heuristic {
    /// `|dx| + |dy|` between a station and the goal.
    ///
    /// Only admissible when every connection costs at least the Manhattan
    /// distance between its endpoints. Stations left at the origin estimate
    /// zero between each other.
    #[default]
    Manhattan,

    /// Always zero. A* degrades to uniform-cost search.
    Zero,
}

impl Heuristic {
    /// Estimate the remaining cost from `from` to `goal`.
    pub fn estimate(&self, from: Coordinates, goal: Coordinates) -> f64 {
        match self {
            Heuristic::Manhattan => from.manhattan(&goal),
            Heuristic::Zero => 0.0,
        }
    }
}

/// Configuration parameters for route search.
#[derive(Debug, Clone, Default)]
pub struct SearchConfig {
    /// Heuristic used by the cheapest-route search.
    pub heuristic: Heuristic,
}

impl SearchConfig {
    /// Create a new configuration with the given heuristic.
    pub fn new(heuristic: Heuristic) -> Self {
        Self { heuristic }
    }
}
