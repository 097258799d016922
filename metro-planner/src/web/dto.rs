//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{Station, Weights};
use crate::network::Network;
use crate::planner::{Comparison, Path, Route};

/// Query parameters for every route endpoint.
#[derive(Debug, Deserialize)]
pub struct RouteRequest {
    /// Start station name
    pub from: String,

    /// Goal station name
    pub to: String,
}

/// A station in the network listing.
#[derive(Debug, Serialize)]
pub struct StationResult {
    pub name: String,
    pub x: f64,
    pub y: f64,
}

impl StationResult {
    pub fn from_station(station: &Station) -> Self {
        let coordinates = station.coordinates();
        Self {
            name: station.name().to_string(),
            x: coordinates.x(),
            y: coordinates.y(),
        }
    }
}

/// A connection in the network listing.
#[derive(Debug, Serialize)]
pub struct ConnectionResult {
    pub from: String,
    pub to: String,
    pub transfer_time: f64,
    pub travel_time: f64,
}

impl ConnectionResult {
    pub fn from_connection(from: &Station, to: &Station, weights: Weights) -> Self {
        Self {
            from: from.name().to_string(),
            to: to.name().to_string(),
            transfer_time: weights.transfer_time(),
            travel_time: weights.travel_time(),
        }
    }
}

/// Everything a diagram needs to draw the network.
#[derive(Debug, Serialize)]
pub struct NetworkResponse {
    pub stations: Vec<StationResult>,
    pub connections: Vec<ConnectionResult>,
}

impl NetworkResponse {
    pub fn from_network(network: &Network) -> Self {
        Self {
            stations: network.stations().map(StationResult::from_station).collect(),
            connections: network
                .connections()
                .map(|(from, to, weights)| ConnectionResult::from_connection(from, to, weights))
                .collect(),
        }
    }
}

/// Fewest-hops answer. `path` is null when the goal is unreachable.
#[derive(Debug, Serialize)]
pub struct HopsResponse {
    pub from: String,
    pub to: String,
    pub path: Option<Vec<String>>,
    pub hops: Option<usize>,
}

impl HopsResponse {
    pub fn new(from: &str, to: &str, path: Option<&Path>) -> Self {
        Self {
            from: from.to_string(),
            to: to.to_string(),
            path: path.map(|p| p.stations().to_vec()),
            hops: path.map(Path::hops),
        }
    }
}

/// Cheapest-route answer. `path` and `cost` are null when the goal is
/// unreachable.
#[derive(Debug, Serialize)]
pub struct CostResponse {
    pub from: String,
    pub to: String,
    pub path: Option<Vec<String>>,
    pub cost: Option<f64>,
}

impl CostResponse {
    pub fn new(from: &str, to: &str, route: Option<&Route>) -> Self {
        Self {
            from: from.to_string(),
            to: to.to_string(),
            path: route.map(|r| r.path.stations().to_vec()),
            cost: route.map(|r| r.cost),
        }
    }
}

/// Both answers side by side.
#[derive(Debug, Serialize)]
pub struct CompareResponse {
    pub fewest_hops: HopsResponse,
    pub cheapest: CostResponse,
}

impl CompareResponse {
    pub fn new(from: &str, to: &str, comparison: &Comparison) -> Self {
        Self {
            fewest_hops: HopsResponse::new(from, to, comparison.fewest_hops.as_ref()),
            cheapest: CostResponse::new(from, to, comparison.cheapest.as_ref()),
        }
    }
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
