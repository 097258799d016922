//! The station registry and its adjacency lists.
//!
//! Stations live in an arena indexed by [`StationId`]; adjacency is stored
//! per station as a list of `(neighbor, weights)` entries. Connections are
//! undirected: adding one appends an entry on both sides with identical
//! weights, and records the connection once for enumeration.
//!
//! Neighbor lists keep insertion order. Both searches scan them in that
//! order, so the results for a given construction sequence are
//! deterministic.

mod builder;

use std::collections::HashMap;

use tracing::trace;

use crate::domain::{Coordinates, NetworkError, Station, StationId, StationName, Weights};

pub use builder::{NetworkBuilder, sample_network};

/// One directed adjacency entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor {
    pub station: StationId,
    pub weights: Weights,
}

/// An undirected connection, as it was added.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Connection {
    pub from: StationId,
    pub to: StationId,
    pub weights: Weights,
}

/// A transit network: stations plus weighted undirected connections.
///
/// The network never removes stations or connections. Coordinates may be
/// changed between queries; nothing else about a station changes once it
/// exists.
///
/// The network does no locking. Callers sharing it across threads must not
/// mutate it while a search is running; the web layer freezes it behind an
/// `Arc` before serving.
#[derive(Debug, Clone, Default)]
pub struct Network {
    stations: Vec<Station>,
    index: HashMap<StationName, StationId>,
    adjacency: Vec<Vec<Neighbor>>,
    connections: Vec<Connection>,
}

impl Network {
    /// Create an empty network.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a station, or return the existing one with this name.
    ///
    /// Re-adding a known name is a no-op: the stored coordinates are kept
    /// and `coordinates` is ignored.
    pub fn add_station(
        &mut self,
        name: &str,
        coordinates: Coordinates,
    ) -> Result<StationId, NetworkError> {
        if let Some(&id) = self.index.get(name) {
            trace!(station = name, "Station already registered, keeping it");
            return Ok(id);
        }

        let name = StationName::parse(name)?;
        let id = StationId(self.stations.len());
        self.index.insert(name.clone(), id);
        self.stations.push(Station::new(id, name, coordinates));
        self.adjacency.push(Vec::new());
        Ok(id)
    }

    /// Connect two stations in both directions.
    ///
    /// Missing endpoints are created at the origin. Parallel connections are
    /// kept as separate entries.
    pub fn add_connection(
        &mut self,
        from: &str,
        to: &str,
        weights: Weights,
    ) -> Result<(), NetworkError> {
        if from.is_empty() || to.is_empty() {
            return Err(NetworkError::EmptyStationName);
        }
        let from = self.add_station(from, Coordinates::ORIGIN)?;
        let to = self.add_station(to, Coordinates::ORIGIN)?;

        self.adjacency[from.0].push(Neighbor {
            station: to,
            weights,
        });
        self.adjacency[to.0].push(Neighbor {
            station: from,
            weights,
        });
        self.connections.push(Connection { from, to, weights });
        Ok(())
    }

    /// Move a station.
    pub fn set_coordinates(
        &mut self,
        name: &str,
        coordinates: Coordinates,
    ) -> Result<(), NetworkError> {
        let id = self
            .id_of(name)
            .ok_or_else(|| NetworkError::UnknownStation(name.to_string()))?;
        self.stations[id.0].set_coordinates(coordinates);
        Ok(())
    }

    /// Position every station still at the origin using `layout`.
    ///
    /// Stations that were never given coordinates make the A* heuristic
    /// uninformative. Calling this before querying gives them a position.
    /// Returns the number of stations moved.
    pub fn assign_missing_coordinates<F>(&mut self, mut layout: F) -> usize
    where
        F: FnMut(&Station) -> Coordinates,
    {
        let mut assigned = 0;
        for station in &mut self.stations {
            if station.coordinates().is_origin() {
                let coordinates = layout(&*station);
                station.set_coordinates(coordinates);
                assigned += 1;
            }
        }
        assigned
    }

    /// Look up a station id by name.
    pub fn id_of(&self, name: &str) -> Option<StationId> {
        self.index.get(name).copied()
    }

    /// Look up a station by name.
    pub fn station(&self, name: &str) -> Option<&Station> {
        self.id_of(name).map(|id| &self.stations[id.0])
    }

    /// Look up a station by id.
    pub fn get(&self, id: StationId) -> Option<&Station> {
        self.stations.get(id.0)
    }

    /// Check whether a station is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Neighbors of a station as `(name, weights)`, in insertion order.
    ///
    /// Returns `None` for an unknown station.
    pub fn neighbors(&self, name: &str) -> Option<impl Iterator<Item = (&str, Weights)> + '_> {
        let id = self.id_of(name)?;
        Some(
            self.adjacency[id.0]
                .iter()
                .map(|n| (self.stations[n.station.0].name(), n.weights)),
        )
    }

    /// All stations, in insertion order.
    pub fn stations(&self) -> impl Iterator<Item = &Station> {
        self.stations.iter()
    }

    /// All connections as `(from, to, weights)`, in insertion order.
    ///
    /// Each undirected connection appears once, oriented as it was added.
    pub fn connections(&self) -> impl Iterator<Item = (&Station, &Station, Weights)> {
        self.connections
            .iter()
            .map(|c| (&self.stations[c.from.0], &self.stations[c.to.0], c.weights))
    }

    /// Number of stations.
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    /// Returns true if there are no stations.
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Number of undirected connections (parallel connections counted separately).
    pub fn connection_count(&self) -> usize {
        self.connections.len()
    }

    /// Adjacency entries for a station id the network issued.
    pub(crate) fn adjacent(&self, id: StationId) -> &[Neighbor] {
        &self.adjacency[id.0]
    }

    /// Station for an id the network issued.
    pub(crate) fn at(&self, id: StationId) -> &Station {
        &self.stations[id.0]
    }
}
