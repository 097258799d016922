//! Application state for the web layer.

use std::sync::Arc;

use crate::network::Network;
use crate::planner::{Planner, SearchConfig};

/// Shared application state.
///
/// The network is frozen when the state is built; handlers only read it,
/// so concurrent requests never observe a mutation.
#[derive(Clone)]
pub struct AppState {
    /// The network being served
    pub network: Arc<Network>,

    /// Route search configuration
    pub config: Arc<SearchConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(network: Network, config: SearchConfig) -> Self {
        Self {
            network: Arc::new(network),
            config: Arc::new(config),
        }
    }

    /// A planner over the shared network.
    pub fn planner(&self) -> Planner<'_> {
        Planner::new(&self.network, &self.config)
    }
}
