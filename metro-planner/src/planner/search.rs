//! Route queries over a network.
//!
//! [`Planner`] resolves station names, runs one of the two searches and
//! turns station ids back into names.

use tracing::debug;

use crate::domain::StationId;
use crate::network::Network;

use super::astar::find_cheapest;
use super::bfs::find_fewest_hops;
use super::config::SearchConfig;
use super::error::SearchError;
use super::path::{Comparison, Path, Route};

/// Route planner over a borrowed network.
///
/// The planner only reads the network. Mutating the network while a query
/// is running is not supported.
pub struct Planner<'a> {
    network: &'a Network,
    config: &'a SearchConfig,
}

impl<'a> Planner<'a> {
    /// Create a new planner.
    pub fn new(network: &'a Network, config: &'a SearchConfig) -> Self {
        Self { network, config }
    }

    /// Find the path with the fewest connections.
    pub fn fewest_hops(&self, start: &str, goal: &str) -> Result<Path, SearchError> {
        let (start_id, goal_id) = self.resolve(start, goal)?;
        let ids = find_fewest_hops(self.network, start_id, goal_id)
            .ok_or_else(|| unreachable(start, goal))?;
        let path = Path::from_ids(self.network, &ids);
        debug!(start, goal, hops = path.hops(), "Found fewest-hops path");
        Ok(path)
    }

    /// Find the route with the lowest total `travel_time + transfer_time`.
    pub fn cheapest(&self, start: &str, goal: &str) -> Result<Route, SearchError> {
        let (start_id, goal_id) = self.resolve(start, goal)?;
        let (ids, cost) = find_cheapest(self.network, start_id, goal_id, self.config.heuristic)
            .ok_or_else(|| unreachable(start, goal))?;
        debug!(start, goal, cost, "Found cheapest route");
        Ok(Route {
            path: Path::from_ids(self.network, &ids),
            cost,
        })
    }

    /// Run both searches for the same pair.
    ///
    /// Unknown stations are an error. An unreachable goal is not: both sides
    /// of the comparison are simply `None`.
    pub fn compare(&self, start: &str, goal: &str) -> Result<Comparison, SearchError> {
        Ok(Comparison {
            fewest_hops: found(self.fewest_hops(start, goal))?,
            cheapest: found(self.cheapest(start, goal))?,
        })
    }

    /// Fewest-hops path as station names, or `None` when there is no path
    /// or either station is unknown.
    pub fn bfs(&self, start: &str, goal: &str) -> Option<Vec<String>> {
        self.fewest_hops(start, goal).ok().map(Path::into_stations)
    }

    /// Cheapest route as `(station names, cost)`, or `(None, +inf)` when
    /// there is no path or either station is unknown.
    pub fn a_star(&self, start: &str, goal: &str) -> (Option<Vec<String>>, f64) {
        match self.cheapest(start, goal) {
            Ok(route) => (Some(route.path.into_stations()), route.cost),
            Err(_) => (None, f64::INFINITY),
        }
    }

    fn resolve(&self, start: &str, goal: &str) -> Result<(StationId, StationId), SearchError> {
        let lookup = |name: &str| {
            self.network
                .id_of(name)
                .ok_or_else(|| SearchError::UnknownStation(name.to_string()))
        };
        Ok((lookup(start)?, lookup(goal)?))
    }
}

fn unreachable(start: &str, goal: &str) -> SearchError {
    SearchError::Unreachable {
        from: start.to_string(),
        to: goal.to_string(),
    }
}

/// Turn `Unreachable` into `Ok(None)`, keeping other errors.
fn found<T>(result: Result<T, SearchError>) -> Result<Option<T>, SearchError> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e) if e.is_unreachable() => Ok(None),
        Err(e) => Err(e),
    }
}
