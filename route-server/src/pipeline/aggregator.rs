//! Route query orchestration.

use std::future::Future;

use futures::future::try_join;
use tokio::time::timeout;
use tracing::{debug, info, warn};

use crate::directions::Router;
use crate::domain::{Coordinate, Endpoint, PlaceQuery, QueryResult, RouteSet};
use crate::geocode::Geocoder;
use crate::safety::{Assessment, PoiSource, SafetyProbe};

use super::config::PipelineConfig;
use super::error::{Field, Provider, QueryError};

/// Runs route queries against a geocoder, a router and a safety probe.
///
/// Holds no per-query state, so one aggregator can serve any number of
/// concurrent [`run`](Self::run) calls.
pub struct RouteAggregator<G, R, S> {
    geocoder: G,
    router: R,
    probe: SafetyProbe<S>,
    config: PipelineConfig,
}

impl<G, R, S> RouteAggregator<G, R, S>
where
    G: Geocoder + Sync,
    R: Router + Sync,
    S: PoiSource + Sync,
{
    /// Create a new aggregator.
    pub fn new(geocoder: G, router: R, probe: SafetyProbe<S>, config: PipelineConfig) -> Self {
        Self {
            geocoder,
            router,
            probe,
            config,
        }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Resolve both places, fetch routes between them and assess safety
    /// around the source.
    ///
    /// Fails if either name is blank, either place cannot be resolved, or no
    /// route is found. A failed safety lookup does not fail the query; the
    /// result then has no summary and no stations.
    pub async fn run(
        &self,
        source_name: &str,
        destination_name: &str,
    ) -> Result<QueryResult, QueryError> {
        let (source, destination) = validate(source_name, destination_name)?;

        let (source_coord, destination_coord) =
            try_join(self.geocode(&source), self.geocode(&destination)).await?;
        debug!(%source, %source_coord, %destination, %destination_coord, "endpoints resolved");

        let routes = self
            .bounded(
                Provider::Directions,
                self.router.find_routes(
                    source_coord,
                    destination_coord,
                    self.config.max_alternatives,
                ),
            )
            .await?
            .map_err(QueryError::from)?;
        self.check_endpoints(&routes, &source_coord, &destination_coord);

        let assessment = self.assess(source_coord).await;

        info!(
            %source,
            %destination,
            routes = routes.len(),
            police_stations = assessment.police_stations.len(),
            safety = assessment.summary.is_some(),
            "route query complete"
        );

        Ok(QueryResult {
            source: Endpoint {
                place: source,
                coordinate: source_coord,
            },
            destination: Endpoint {
                place: destination,
                coordinate: destination_coord,
            },
            routes,
            police_stations: assessment.police_stations,
            safety: assessment.summary,
        })
    }

    async fn geocode(&self, place: &PlaceQuery) -> Result<Coordinate, QueryError> {
        self.bounded(Provider::Geocoding, self.geocoder.resolve(place))
            .await?
            .map_err(QueryError::from)
    }

    async fn assess(&self, point: Coordinate) -> Assessment {
        let assessment = self.probe.assess(point, self.config.safety_radius_m);

        match timeout(self.config.call_timeout, assessment).await {
            Ok(assessment) => assessment,
            Err(_) => {
                warn!(
                    %point,
                    timeout = ?self.config.call_timeout,
                    "safety probe timed out, omitting safety summary"
                );
                Assessment::unavailable()
            }
        }
    }

    /// Apply the per-call deadline to a provider call.
    async fn bounded<T, E>(
        &self,
        provider: Provider,
        call: impl Future<Output = Result<T, E>>,
    ) -> Result<Result<T, E>, QueryError> {
        timeout(self.config.call_timeout, call)
            .await
            .map_err(|_| QueryError::Timeout { provider })
    }

    fn check_endpoints(&self, routes: &RouteSet, source: &Coordinate, destination: &Coordinate) {
        let tolerance = self.config.endpoint_tolerance_m;
        for (rank, route) in routes.iter().enumerate() {
            if !route.endpoints_within(source, destination, tolerance) {
                warn!(
                    rank,
                    start_offset_m = route.start().distance_meters(source),
                    end_offset_m = route.end().distance_meters(destination),
                    tolerance_m = tolerance,
                    "route endpoints are far from the geocoded places"
                );
            }
        }
    }
}

/// Check both names before anything touches the network.
fn validate(source: &str, destination: &str) -> Result<(PlaceQuery, PlaceQuery), QueryError> {
    match (PlaceQuery::parse(source), PlaceQuery::parse(destination)) {
        (Ok(s), Ok(d)) => Ok((s, d)),
        (Err(_), Ok(_)) => Err(QueryError::InvalidInput {
            field: Field::Source,
        }),
        (Ok(_), Err(_)) => Err(QueryError::InvalidInput {
            field: Field::Destination,
        }),
        (Err(_), Err(_)) => Err(QueryError::InvalidInput { field: Field::Both }),
    }
}

#[cfg(test)]
#[path = "aggregator_tests.rs"]
mod tests;
