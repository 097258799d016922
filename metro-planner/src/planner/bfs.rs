//! Fewest-hops search.
//!
//! Level-order expansion from the start station. Weights are ignored; the
//! answer minimises the number of connections ridden. Among several
//! minimum-hop paths, the first one discovered wins, and discovery follows
//! neighbor insertion order, so the result is fixed for a given network.

use std::collections::VecDeque;

use tracing::{debug, trace};

use crate::domain::StationId;
use crate::network::Network;

use super::path::reconstruct;

/// Find a minimum-hop path from `start` to `goal`.
///
/// Stations are marked visited when enqueued, so each one is expanded at
/// most once. Returns `None` if the goal cannot be reached.
pub(crate) fn find_fewest_hops(
    network: &Network,
    start: StationId,
    goal: StationId,
) -> Option<Vec<StationId>> {
    let mut visited = vec![false; network.len()];
    let mut parents: Vec<Option<StationId>> = vec![None; network.len()];
    let mut queue = VecDeque::from([start]);
    visited[start.0] = true;

    let mut expanded = 0usize;

    while let Some(current) = queue.pop_front() {
        if current == goal {
            debug!(expanded, "BFS reached goal");
            return Some(reconstruct(&parents, goal));
        }

        expanded += 1;
        trace!(station = network.at(current).name(), "BFS expanding station");

        for neighbor in network.adjacent(current) {
            let next = neighbor.station;
            if !visited[next.0] {
                visited[next.0] = true;
                parents[next.0] = Some(current);
                queue.push_back(next);
            }
        }
    }

    debug!(expanded, "BFS exhausted frontier");
    None
}
