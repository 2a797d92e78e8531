//! Pipeline configuration.

use std::time::Duration;

/// Tunables for a route query.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Upper bound on alternative routes requested from the provider.
    pub max_alternatives: u8,

    /// Radius around the source searched for police stations (meters).
    pub safety_radius_m: u32,

    /// Deadline for each external call, independent of the HTTP clients'
    /// own timeouts.
    pub call_timeout: Duration,

    /// How far a route endpoint may lie from its geocoded coordinate before
    /// we log it (meters). Providers snap endpoints to the nearest road.
    pub endpoint_tolerance_m: f64,
}

impl PipelineConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(
        max_alternatives: u8,
        safety_radius_m: u32,
        call_timeout: Duration,
        endpoint_tolerance_m: f64,
    ) -> Self {
        Self {
            max_alternatives,
            safety_radius_m,
            call_timeout,
            endpoint_tolerance_m,
        }
    }

    pub fn with_safety_radius(mut self, radius_m: u32) -> Self {
        self.safety_radius_m = radius_m;
        self
    }

    pub fn with_call_timeout(mut self, timeout: Duration) -> Self {
        self.call_timeout = timeout;
        self
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            max_alternatives: 3,
            safety_radius_m: 5000,
            call_timeout: Duration::from_secs(10),
            endpoint_tolerance_m: 1000.0,
        }
    }
}
