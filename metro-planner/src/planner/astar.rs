//! Cheapest-route search.
//!
//! A* over the combined edge cost `travel_time + transfer_time`. The
//! frontier is a min-heap keyed by `(f_score, push sequence)`, so entries
//! with equal `f_score` leave in the order they were pushed.
//!
//! A station is closed when it is first popped and is never reopened. There
//! is no decrease-key: a station may sit in the heap several times with
//! different tentative costs, and entries popped after it closed are
//! skipped. This is only optimal for non-negative weights (enforced by
//! [`Weights`](crate::domain::Weights)) and an admissible heuristic.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use tracing::{debug, trace};

use crate::domain::StationId;
use crate::network::Network;

use super::config::Heuristic;
use super::path::reconstruct;

/// A pending frontier entry.
#[derive(Debug, Clone, Copy)]
struct FrontierEntry {
    f_score: f64,
    sequence: u64,
    g_score: f64,
    station: StationId,
    parent: Option<StationId>,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.f_score
            .total_cmp(&other.f_score)
            .then_with(|| self.sequence.cmp(&other.sequence))
    }
}

/// Find a minimum-cost path from `start` to `goal`.
///
/// Returns the path and its accumulated cost (heuristic excluded), or
/// `None` if the frontier empties first.
pub(crate) fn find_cheapest(
    network: &Network,
    start: StationId,
    goal: StationId,
    heuristic: Heuristic,
) -> Option<(Vec<StationId>, f64)> {
    let target = network.at(goal).coordinates();
    let estimate = |id: StationId| heuristic.estimate(network.at(id).coordinates(), target);

    let mut closed = vec![false; network.len()];
    let mut parents: Vec<Option<StationId>> = vec![None; network.len()];
    let mut heap = BinaryHeap::new();
    let mut sequence = 0u64;

    heap.push(Reverse(FrontierEntry {
        f_score: estimate(start),
        sequence,
        g_score: 0.0,
        station: start,
        parent: None,
    }));

    let mut expanded = 0usize;
    let mut stale = 0usize;

    while let Some(Reverse(entry)) = heap.pop() {
        let current = entry.station;
        if closed[current.0] {
            stale += 1;
            continue;
        }
        closed[current.0] = true;
        parents[current.0] = entry.parent;

        if current == goal {
            debug!(expanded, stale, cost = entry.g_score, "A* reached goal");
            return Some((reconstruct(&parents, goal), entry.g_score));
        }

        expanded += 1;
        trace!(
            station = network.at(current).name(),
            g = entry.g_score,
            f = entry.f_score,
            "A* expanding station"
        );

        for neighbor in network.adjacent(current) {
            let next = neighbor.station;
            if closed[next.0] {
                continue;
            }
            let g_score = entry.g_score + neighbor.weights.cost();
            sequence += 1;
            heap.push(Reverse(FrontierEntry {
                f_score: g_score + estimate(next),
                sequence,
                g_score,
                station: next,
                parent: Some(current),
            }));
        }
    }

    debug!(expanded, stale, "A* exhausted frontier");
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::{NetworkBuilder, sample_network};

    fn run(
        network: &Network,
        start: &str,
        goal: &str,
        heuristic: Heuristic,
    ) -> Option<(Vec<String>, f64)> {
        let start = network.id_of(start).unwrap();
        let goal = network.id_of(goal).unwrap();
        find_cheapest(network, start, goal, heuristic).map(|(ids, cost)| {
            let names = ids
                .iter()
                .map(|id| network.at(*id).name().to_string())
                .collect();
            (names, cost)
        })
    }

    #[test]
    fn sample_routes() {
        let network = sample_network().unwrap();

        let (path, cost) = run(&network, "A", "F", Heuristic::Manhattan).unwrap();
        assert_eq!(path, vec!["A", "D", "E", "F"]);
        assert_eq!(cost, 13.0);

        let (path, cost) = run(&network, "A", "C", Heuristic::Manhattan).unwrap();
        assert_eq!(path, vec!["A", "B", "C"]);
        assert_eq!(cost, 6.0);

        let (path, cost) = run(&network, "B", "E", Heuristic::Manhattan).unwrap();
        assert_eq!(path, vec!["B", "A", "D", "E"]);
        assert_eq!(cost, 9.0);
    }

    #[test]
    fn start_is_goal_costs_nothing() {
        let network = sample_network().unwrap();
        let (path, cost) = run(&network, "D", "D", Heuristic::Manhattan).unwrap();
        assert_eq!(path, vec!["D"]);
        assert_eq!(cost, 0.0);
    }

    #[test]
    fn transfer_time_counts() {
        // Direct hop is shorter to ride but has a heavy transfer penalty
        let network = NetworkBuilder::new()
            .connect("A", "B", 10.0, 1.0)
            .connect("A", "C", 0.0, 2.0)
            .connect("C", "B", 0.0, 2.0)
            .build()
            .unwrap();

        let (path, cost) = run(&network, "A", "B", Heuristic::Zero).unwrap();
        assert_eq!(path, vec!["A", "C", "B"]);
        assert_eq!(cost, 4.0);
    }

    #[test]
    fn cheaper_parallel_connection_wins() {
        let network = NetworkBuilder::new()
            .connect("A", "B", 0.0, 5.0)
            .connect("A", "B", 0.5, 0.5)
            .build()
            .unwrap();

        let (path, cost) = run(&network, "A", "B", Heuristic::Manhattan).unwrap();
        assert_eq!(path, vec!["A", "B"]);
        assert_eq!(cost, 1.0);
    }

    #[test]
    fn later_cheaper_push_beats_earlier_one() {
        let network = NetworkBuilder::new()
            .connect("S", "A", 0.0, 10.0)
            .connect("S", "B", 0.0, 1.0)
            .connect("B", "A", 0.0, 1.0)
            .connect("A", "G", 0.0, 1.0)
            .build()
            .unwrap();

        let (path, cost) = run(&network, "S", "G", Heuristic::Manhattan).unwrap();
        assert_eq!(path, vec!["S", "B", "A", "G"]);
        assert_eq!(cost, 3.0);
    }

    #[test]
    fn stale_entries_are_skipped_until_exhausted() {
        // A is pushed twice (cost 10 and 2); the stale push pops after A
        // closed and must be skipped rather than re-expanded
        let network = NetworkBuilder::new()
            .connect("S", "A", 0.0, 10.0)
            .connect("S", "B", 0.0, 1.0)
            .connect("B", "A", 0.0, 1.0)
            .station("G", 0.0, 0.0)
            .build()
            .unwrap();

        assert!(run(&network, "S", "G", Heuristic::Manhattan).is_none());
    }

    #[test]
    fn equal_f_scores_leave_in_push_order() {
        let network = NetworkBuilder::new()
            .connect("S", "X", 0.0, 1.0)
            .connect("S", "Y", 0.0, 1.0)
            .connect("X", "G", 0.0, 1.0)
            .connect("Y", "G", 0.0, 1.0)
            .build()
            .unwrap();
        let (path, _) = run(&network, "S", "G", Heuristic::Zero).unwrap();
        assert_eq!(path, vec!["S", "X", "G"]);

        let network = NetworkBuilder::new()
            .connect("S", "Y", 0.0, 1.0)
            .connect("S", "X", 0.0, 1.0)
            .connect("X", "G", 0.0, 1.0)
            .connect("Y", "G", 0.0, 1.0)
            .build()
            .unwrap();
        let (path, _) = run(&network, "S", "G", Heuristic::Zero).unwrap();
        assert_eq!(path, vec!["S", "Y", "G"]);
    }

    #[test]
    fn heuristic_steers_towards_goal() {
        // Both branches cost the same; the geometric estimate picks the one
        // whose first station lies closer to the goal
        let network = NetworkBuilder::new()
            .station("S", 0.0, 0.0)
            .station("FAR", -2.0, 0.0)
            .station("NEAR", 2.0, 0.0)
            .station("G", 4.0, 0.0)
            .connect("S", "FAR", 0.0, 2.0)
            .connect("S", "NEAR", 0.0, 2.0)
            .connect("FAR", "G", 0.0, 2.0)
            .connect("NEAR", "G", 0.0, 2.0)
            .build()
            .unwrap();

        let (path, cost) = run(&network, "S", "G", Heuristic::Manhattan).unwrap();
        assert_eq!(path, vec!["S", "NEAR", "G"]);
        assert_eq!(cost, 4.0);

        let (path, _) = run(&network, "S", "G", Heuristic::Zero).unwrap();
        assert_eq!(path, vec!["S", "FAR", "G"]);
    }

    #[test]
    fn frontier_orders_by_f_then_sequence() {
        let entry = |f_score: f64, sequence: u64| FrontierEntry {
            f_score,
            sequence,
            g_score: 0.0,
            station: StationId(0),
            parent: None,
        };

        assert!(entry(1.0, 5) < entry(2.0, 0));
        assert!(entry(1.0, 0) < entry(1.0, 1));

        let mut heap = BinaryHeap::new();
        heap.push(Reverse(entry(3.0, 0)));
        heap.push(Reverse(entry(1.0, 2)));
        heap.push(Reverse(entry(1.0, 1)));
        let order: Vec<_> = std::iter::from_fn(|| heap.pop())
            .map(|Reverse(e)| (e.f_score, e.sequence))
            .collect();
        assert_eq!(order, vec![(1.0, 1), (1.0, 2), (3.0, 0)]);
    }
}
