//! Fluent construction of networks.

use crate::domain::{Coordinates, NetworkError, Weights};

use super::Network;

/// Builder for creating networks.
///
/// Each call validates its input; the first error is remembered and
/// returned from [`build`](Self::build), and later calls are ignored.
///
/// # Example
///
/// ```
/// use metro_planner::network::NetworkBuilder;
///
/// let network = NetworkBuilder::new()
///     .station("E", 10.0, 10.0)
///     .connect("D", "E", 0.0, 2.0)
///     .build()
///     .unwrap();
///
/// assert_eq!(network.len(), 2);
/// assert_eq!(network.connection_count(), 1);
/// ```
#[derive(Debug, Default)]
pub struct NetworkBuilder {
    inner: Network,
    error: Option<NetworkError>,
}

impl NetworkBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a station at `(x, y)`.
    pub fn station(mut self, name: &str, x: f64, y: f64) -> Self {
        if self.error.is_none() {
            let result = Coordinates::new(x, y)
                .and_then(|coordinates| self.inner.add_station(name, coordinates));
            if let Err(e) = result {
                self.error = Some(e);
            }
        }
        self
    }

    /// Add a connection with the given transfer and travel times.
    pub fn connect(mut self, from: &str, to: &str, transfer_time: f64, travel_time: f64) -> Self {
        if self.error.is_none() {
            let result = Weights::new(transfer_time, travel_time)
                .and_then(|weights| self.inner.add_connection(from, to, weights));
            if let Err(e) = result {
                self.error = Some(e);
            }
        }
        self
    }

    /// Build the network.
    pub fn build(self) -> Result<Network, NetworkError> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(self.inner),
        }
    }
}

/// The demonstration network.
///
/// ```text
/// A --2-- B --(1+3)-- C --4-- D --2-- E --6-- F
///  \_____________5____________/
/// ```
///
/// Only E `(10, 10)` and F `(20, 20)` are positioned; the rest sit at the
/// origin.
pub fn sample_network() -> Result<Network, NetworkError> {
    NetworkBuilder::new()
        .connect("A", "B", 0.0, 2.0)
        .connect("B", "C", 1.0, 3.0)
        .connect("C", "D", 0.0, 4.0)
        .connect("A", "D", 0.0, 5.0)
        .station("E", 10.0, 10.0)
        .station("F", 20.0, 20.0)
        .connect("D", "E", 0.0, 2.0)
        .connect("E", "F", 0.0, 6.0)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder() {
        let network = NetworkBuilder::new()
            .station("A", 1.0, 2.0)
            .connect("A", "B", 1.0, 3.0)
            .connect("B", "C", 0.0, 1.0)
            .build()
            .unwrap();

        assert_eq!(network.len(), 3);
        assert_eq!(network.connection_count(), 2);
        assert_eq!(
            network.station("A").unwrap().coordinates(),
            Coordinates::new(1.0, 2.0).unwrap()
        );
    }

    #[test]
    fn builder_reports_first_error() {
        let result = NetworkBuilder::new()
            .connect("A", "B", 0.0, -1.0)
            .station("", 0.0, 0.0)
            .build();

        assert!(matches!(
            result,
            Err(NetworkError::InvalidWeight {
                field: "travel_time",
                ..
            })
        ));
    }

    #[test]
    fn builder_rejects_bad_coordinates() {
        let result = NetworkBuilder::new().station("A", f64::NAN, 0.0).build();
        assert!(matches!(result, Err(NetworkError::InvalidCoordinates { .. })));
    }

    #[test]
    fn sample_network_shape() {
        let network = sample_network().unwrap();

        assert_eq!(network.len(), 6);
        assert_eq!(network.connection_count(), 6);
        assert!(network.station("A").unwrap().coordinates().is_origin());
        assert_eq!(
            network.station("E").unwrap().coordinates(),
            Coordinates::new(10.0, 10.0).unwrap()
        );

        let from_b: Vec<_> = network
            .neighbors("B")
            .unwrap()
            .map(|(n, w)| (n, w.transfer_time(), w.travel_time()))
            .collect();
        assert_eq!(from_b, vec![("A", 0.0, 2.0), ("C", 1.0, 3.0)]);
    }
}
