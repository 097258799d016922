//! Search results.

use crate::domain::StationId;
use crate::network::Network;

/// A sequence of station names from origin to destination, inclusive.
///
/// Always holds at least one station.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    stations: Vec<String>,
}

impl Path {
    pub(crate) fn from_ids(network: &Network, ids: &[StationId]) -> Self {
        Self {
            stations: ids
                .iter()
                .map(|id| network.at(*id).name().to_string())
                .collect(),
        }
    }

    /// Station names in travel order.
    pub fn stations(&self) -> &[String] {
        &self.stations
    }

    /// Consume the path, returning the station names.
    pub fn into_stations(self) -> Vec<String> {
        self.stations
    }

    /// Number of connections ridden.
    pub fn hops(&self) -> usize {
        self.stations.len().saturating_sub(1)
    }

    /// Consecutive station pairs, for highlighting the path on a diagram.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str)> {
        self.stations
            .windows(2)
            .map(|pair| (pair[0].as_str(), pair[1].as_str()))
    }

    pub fn origin(&self) -> &str {
        &self.stations[0]
    }

    pub fn destination(&self) -> &str {
        &self.stations[self.stations.len() - 1]
    }

    /// Total `travel_time + transfer_time` of riding this path in `network`.
    ///
    /// Where parallel connections exist the cheapest one is counted. Returns
    /// `None` if some consecutive pair is not directly connected.
    pub fn cost_in(&self, network: &Network) -> Option<f64> {
        let mut total = 0.0;
        for (from, to) in self.edges() {
            let cheapest = network
                .neighbors(from)?
                .filter(|(name, _)| *name == to)
                .map(|(_, w)| w.cost())
                .min_by(f64::total_cmp)?;
            total += cheapest;
        }
        Some(total)
    }
}

/// A path together with its accumulated cost.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    pub path: Path,
    pub cost: f64,
}

/// Side-by-side answers for the same query.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Comparison {
    /// Minimum-hop path, if the goal is reachable.
    pub fewest_hops: Option<Path>,

    /// Minimum-cost route, if the goal is reachable.
    pub cheapest: Option<Route>,
}

/// Walk a parent chain back from `goal` and return it in travel order.
pub(crate) fn reconstruct(parents: &[Option<StationId>], goal: StationId) -> Vec<StationId> {
    let mut ids = vec![goal];
    let mut current = goal;
    while let Some(parent) = parents[current.0] {
        ids.push(parent);
        current = parent;
    }
    ids.reverse();
    ids
}
