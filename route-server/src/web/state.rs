//! Application state for the web layer.

use std::sync::Arc;

use crate::directions::OrsClient;
use crate::geocode::NominatimClient;
use crate::pipeline::RouteAggregator;
use crate::safety::OverpassClient;

/// The pipeline wired to the live providers.
pub type LiveAggregator = RouteAggregator<NominatimClient, OrsClient, OverpassClient>;

/// Shared application state.
///
/// The aggregator is immutable, so every request shares the same one.
#[derive(Clone)]
pub struct AppState {
    pub aggregator: Arc<LiveAggregator>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(aggregator: LiveAggregator) -> Self {
        Self {
            aggregator: Arc::new(aggregator),
        }
    }
}
