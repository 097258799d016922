//! Connection weights.

use super::error::NetworkError;

/// Costs attached to a connection.
///
/// Both values are finite and non-negative by construction. A* never reopens
/// a closed station, so a negative weight could make it return a more
/// expensive path than the true optimum; rejecting such weights up front
/// keeps the cheapest-route guarantee intact.
///
/// # Examples
///
/// ```
/// use metro_planner::domain::Weights;
///
/// let w = Weights::new(1.0, 3.0).unwrap();
/// assert_eq!(w.cost(), 4.0);
///
/// assert_eq!(Weights::default().cost(), 1.0);
/// assert!(Weights::new(-1.0, 3.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weights {
    transfer_time: f64,
    travel_time: f64,
}

impl Weights {
    /// Create weights from a transfer time and a travel time.
    pub fn new(transfer_time: f64, travel_time: f64) -> Result<Self, NetworkError> {
        check("transfer_time", transfer_time)?;
        check("travel_time", travel_time)?;
        Ok(Self {
            transfer_time,
            travel_time,
        })
    }

    /// Weights with the given travel time and no transfer penalty.
    pub fn travel(travel_time: f64) -> Result<Self, NetworkError> {
        Self::new(0.0, travel_time)
    }

    /// Cost of switching lines on this connection.
    pub fn transfer_time(&self) -> f64 {
        self.transfer_time
    }

    /// Cost of riding this connection.
    pub fn travel_time(&self) -> f64 {
        self.travel_time
    }

    /// Combined edge cost used by the cheapest-route search.
    pub fn cost(&self) -> f64 {
        self.travel_time + self.transfer_time
    }
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            transfer_time: 0.0,
            travel_time: 1.0,
        }
    }
}

fn check(field: &'static str, value: f64) -> Result<(), NetworkError> {
    if !value.is_finite() || value < 0.0 {
        return Err(NetworkError::InvalidWeight { field, value });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_weights() {
        let w = Weights::default();
        assert_eq!(w.transfer_time(), 0.0);
        assert_eq!(w.travel_time(), 1.0);
    }

    #[test]
    fn travel_only() {
        let w = Weights::travel(5.0).unwrap();
        assert_eq!(w.transfer_time(), 0.0);
        assert_eq!(w.travel_time(), 5.0);
        assert_eq!(w.cost(), 5.0);
    }

    #[test]
    fn zero_is_allowed() {
        assert_eq!(Weights::new(0.0, 0.0).unwrap().cost(), 0.0);
    }

    #[test]
    fn reject_negative() {
        let err = Weights::new(-0.5, 1.0).unwrap_err();
        assert!(matches!(
            err,
            NetworkError::InvalidWeight {
                field: "transfer_time",
                ..
            }
        ));

        let err = Weights::travel(-2.0).unwrap_err();
        assert!(matches!(
            err,
            NetworkError::InvalidWeight {
                field: "travel_time",
                ..
            }
        ));
    }

    #[test]
    fn reject_non_finite() {
        assert!(Weights::new(f64::NAN, 1.0).is_err());
        assert!(Weights::new(0.0, f64::INFINITY).is_err());
    }
}
