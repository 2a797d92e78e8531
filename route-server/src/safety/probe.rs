//! Safety assessment around a point.

use tracing::{debug, warn};

use crate::domain::{Coordinate, PoliceStation, SafetySummary};

use super::client::PoiSource;
use super::score::{ScoreSeed, placeholder_summary};

/// Stations found near a point, plus the advisory summary.
#[derive(Debug, Clone, PartialEq)]
pub struct Assessment {
    pub police_stations: Vec<PoliceStation>,

    /// `None` when the station lookup failed.
    pub summary: Option<SafetySummary>,
}

impl Assessment {
    /// The degraded result: no stations, no summary.
    pub fn unavailable() -> Self {
        Self {
            police_stations: Vec::new(),
            summary: None,
        }
    }
}

/// Looks up police stations and derives a safety summary.
///
/// Never fails: a lookup error is logged and turned into
/// [`Assessment::unavailable`], so a route query can still succeed without
/// its safety panel.
#[derive(Debug, Clone)]
pub struct SafetyProbe<S> {
    source: S,
    seed: ScoreSeed,
}

impl<S: PoiSource> SafetyProbe<S> {
    pub fn new(source: S, seed: ScoreSeed) -> Self {
        Self { source, seed }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub async fn assess(&self, point: Coordinate, radius_m: u32) -> Assessment {
        match self.source.police_stations(point, radius_m).await {
            Ok(police_stations) => {
                let summary = placeholder_summary(&mut self.seed.rng(), police_stations.len());
                debug!(%point, radius_m, stations = police_stations.len(), "safety assessed");
                Assessment {
                    police_stations,
                    summary: Some(summary),
                }
            }
            Err(e) => {
                warn!(%point, error = %e, "police station lookup failed, omitting safety summary");
                Assessment::unavailable()
            }
        }
    }
}
