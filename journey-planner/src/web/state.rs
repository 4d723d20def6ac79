//! Application state for the web layer.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::network::SubwayMap;
use crate::planner::SearchConfig;

/// Shared application state.
///
/// Route queries hold the read lock for the whole search and condition
/// changes take the write lock, so a search never sees a toggle half way
/// through.
#[derive(Clone)]
pub struct AppState {
    /// The subway map, including its live station and line handles
    pub network: Arc<RwLock<SubwayMap>>,

    /// Journey planner configuration
    pub config: Arc<SearchConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(network: SubwayMap, config: SearchConfig) -> Self {
        Self {
            network: Arc::new(RwLock::new(network)),
            config: Arc::new(config),
        }
    }
}
