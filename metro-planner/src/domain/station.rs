//! Station identity and position types.

use std::borrow::Borrow;
use std::fmt;

use super::error::NetworkError;

/// A non-empty, case-sensitive station name.
///
/// Names are the public key of the network: two stations with the same name
/// are the same station. This type guarantees that any `StationName` is
/// non-empty by construction.
///
/// # Examples
///
/// ```
/// use metro_planner::domain::StationName;
///
/// let name = StationName::parse("Kadikoy").unwrap();
/// assert_eq!(name.as_str(), "Kadikoy");
///
/// // Empty names are rejected
/// assert!(StationName::parse("").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StationName(String);

impl StationName {
    /// Parse a station name.
    ///
    /// The name is kept verbatim; no trimming or case folding happens.
    pub fn parse(s: &str) -> Result<Self, NetworkError> {
        if s.is_empty() {
            return Err(NetworkError::EmptyStationName);
        }
        Ok(StationName(s.to_string()))
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for StationName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for StationName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationName({})", self.0)
    }
}

impl fmt::Display for StationName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Stable arena index of a station within its network.
///
/// Ids are assigned in insertion order and are only meaningful for the
/// network that issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StationId(pub usize);

/// Planar position of a station.
///
/// Only the A* heuristic reads coordinates. Stations created implicitly by a
/// connection sit at the origin until positioned.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Coordinates {
    x: f64,
    y: f64,
}

impl Coordinates {
    /// The default position `(0, 0)`.
    pub const ORIGIN: Coordinates = Coordinates { x: 0.0, y: 0.0 };

    /// Create coordinates, rejecting NaN and infinite components.
    pub fn new(x: f64, y: f64) -> Result<Self, NetworkError> {
        if !x.is_finite() || !y.is_finite() {
            return Err(NetworkError::InvalidCoordinates { x, y });
        }
        Ok(Coordinates { x, y })
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    /// True when both components are exactly zero.
    pub fn is_origin(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    /// Manhattan distance `|dx| + |dy|`.
    pub fn manhattan(&self, other: &Coordinates) -> f64 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }
}

/// A station registered in a network.
#[derive(Debug, Clone, PartialEq)]
pub struct Station {
    id: StationId,
    name: StationName,
    coordinates: Coordinates,
}

impl Station {
    pub(crate) fn new(id: StationId, name: StationName, coordinates: Coordinates) -> Self {
        Self {
            id,
            name,
            coordinates,
        }
    }

    pub fn id(&self) -> StationId {
        self.id
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn coordinates(&self) -> Coordinates {
        self.coordinates
    }

    pub(crate) fn set_coordinates(&mut self, coordinates: Coordinates) {
        self.coordinates = coordinates;
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Any non-empty string is a valid name and round-trips
        #[test]
        fn non_empty_roundtrip(s in ".{1,20}") {
            let name = StationName::parse(&s).unwrap();
            prop_assert_eq!(name.as_str(), s.as_str());
        }

        /// Manhattan distance is symmetric and non-negative
        #[test]
        fn manhattan_symmetric(
            ax in -1e6f64..1e6, ay in -1e6f64..1e6,
            bx in -1e6f64..1e6, by in -1e6f64..1e6,
        ) {
            let a = Coordinates::new(ax, ay).unwrap();
            let b = Coordinates::new(bx, by).unwrap();
            prop_assert!(a.manhattan(&b) >= 0.0);
            prop_assert_eq!(a.manhattan(&b), b.manhattan(&a));
        }
    }
}
