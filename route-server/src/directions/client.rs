//! OpenRouteService directions client.

use std::future::Future;
use std::time::Duration;

use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use tracing::debug;

use crate::domain::{Coordinate, RouteSet};

use super::convert::convert_feature_collection;
use super::error::DirectionsError;
use super::types::{AlternativeRoutes, DirectionsRequest, ErrorBody, FeatureCollection};

/// Default base URL for the hosted OpenRouteService API.
const DEFAULT_BASE_URL: &str = "https://api.openrouteservice.org";

/// Default routing profile.
const DEFAULT_PROFILE: &str = "driving-car";

/// Default weight factor for alternatives. Alternatives may be up to 30%
/// longer than the primary route.
const DEFAULT_WEIGHT_FACTOR: f64 = 1.3;

/// Finds alternative routes between two points.
///
/// Implemented by [`OrsClient`]; tests substitute their own.
pub trait Router {
    /// Request up to `max_alternatives` routes, returned in provider ranking
    /// order.
    ///
    /// Fails with [`DirectionsError::NoRoute`] when the provider finds none.
    fn find_routes(
        &self,
        source: Coordinate,
        destination: Coordinate,
        max_alternatives: u8,
    ) -> impl Future<Output = Result<RouteSet, DirectionsError>> + Send;
}

/// Configuration for the directions client.
#[derive(Debug, Clone)]
pub struct DirectionsConfig {
    /// API key, sent as the `Authorization` header
    pub api_key: String,
    /// Base URL for the API (defaults to the hosted service)
    pub base_url: String,
    /// Routing profile, e.g. `driving-car`
    pub profile: String,
    /// Diversity weighting for alternative routes
    pub weight_factor: f64,
    /// Request timeout
    pub timeout: Duration,
}

impl DirectionsConfig {
    /// Create a new config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            profile: DEFAULT_PROFILE.to_string(),
            weight_factor: DEFAULT_WEIGHT_FACTOR,
            timeout: Duration::from_secs(10),
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_profile(mut self, profile: impl Into<String>) -> Self {
        self.profile = profile.into();
        self
    }

    pub fn with_weight_factor(mut self, factor: f64) -> Self {
        self.weight_factor = factor;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// OpenRouteService API client.
#[derive(Debug, Clone)]
pub struct OrsClient {
    http: reqwest::Client,
    url: String,
    weight_factor: f64,
}

impl OrsClient {
    /// Create a new client with the given configuration.
    pub fn new(config: DirectionsConfig) -> Result<Self, DirectionsError> {
        let mut headers = HeaderMap::new();

        let api_key =
            HeaderValue::from_str(&config.api_key).map_err(|_| DirectionsError::Api {
                status: 0,
                message: "Invalid API key format".to_string(),
            })?;
        headers.insert(AUTHORIZATION, api_key);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            http,
            url: format!(
                "{}/v2/directions/{}/geojson",
                config.base_url.trim_end_matches('/'),
                config.profile
            ),
            weight_factor: config.weight_factor,
        })
    }

    /// Fetch the raw feature collection for a two-point request.
    pub async fn get_directions(
        &self,
        source: Coordinate,
        destination: Coordinate,
        max_alternatives: u8,
    ) -> Result<FeatureCollection, DirectionsError> {
        let request = DirectionsRequest {
            coordinates: vec![source.to_lon_lat(), destination.to_lon_lat()],
            alternative_routes: AlternativeRoutes {
                target_count: max_alternatives,
                weight_factor: self.weight_factor,
            },
        };

        let response = self.http.post(&self.url).json(&request).send().await?;

        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(DirectionsError::Unauthorized);
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(DirectionsError::RateLimited);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();

            // A 404 also covers a wrong base URL or profile; only the
            // routing error codes mean "no route"
            let no_route = status == reqwest::StatusCode::NOT_FOUND
                && serde_json::from_str::<ErrorBody>(&body).is_ok_and(|b| b.is_no_route());
            if no_route {
                return Err(DirectionsError::NoRoute);
            }

            return Err(DirectionsError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| DirectionsError::Json {
            message: e.to_string(),
            body: Some(body.chars().take(500).collect()),
        })
    }
}

impl Router for OrsClient {
    async fn find_routes(
        &self,
        source: Coordinate,
        destination: Coordinate,
        max_alternatives: u8,
    ) -> Result<RouteSet, DirectionsError> {
        let fc = self
            .get_directions(source, destination, max_alternatives)
            .await?;

        if fc.features.is_empty() {
            return Err(DirectionsError::NoRoute);
        }

        let routes = convert_feature_collection(&fc)?;
        let primary = fc
            .features
            .first()
            .and_then(|f| f.properties.as_ref())
            .and_then(|p| p.summary.as_ref());
        debug!(
            %source,
            %destination,
            count = routes.len(),
            primary_distance_m = ?primary.and_then(|s| s.distance),
            primary_duration_s = ?primary.and_then(|s| s.duration),
            "fetched routes"
        );
        Ok(routes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    const PATH: &str = "/v2/directions/driving-car/geojson";

    fn shivaji_nagar() -> Coordinate {
        Coordinate::new(73.847, 18.530).unwrap()
    }

    fn hadapsar() -> Coordinate {
        Coordinate::new(73.926, 18.500).unwrap()
    }

    fn client_for(server: &MockServer) -> OrsClient {
        OrsClient::new(DirectionsConfig::new("test-key").with_base_url(server.base_url())).unwrap()
    }

    fn line(coords: serde_json::Value) -> serde_json::Value {
        json!({
            "type": "Feature",
            "properties": {},
            "geometry": {"type": "LineString", "coordinates": coords}
        })
    }

    #[test]
    fn config_builder() {
        let config = DirectionsConfig::new("test-key")
            .with_base_url("http://localhost:8080")
            .with_profile("driving-hgv")
            .with_weight_factor(1.6)
            .with_timeout(Duration::from_secs(60));

        assert_eq!(config.api_key, "test-key");
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.profile, "driving-hgv");
        assert_eq!(config.weight_factor, 1.6);
        assert_eq!(config.timeout, Duration::from_secs(60));
    }

    #[test]
    fn config_defaults() {
        let config = DirectionsConfig::new("test-key");

        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.profile, "driving-car");
        assert_eq!(config.weight_factor, 1.3);
        assert_eq!(config.timeout, Duration::from_secs(10));
    }

    #[test]
    fn rejects_unprintable_api_key() {
        let result = OrsClient::new(DirectionsConfig::new("bad\nkey"));
        assert!(matches!(result, Err(DirectionsError::Api { status: 0, .. })));
    }

    #[tokio::test]
    async fn sends_key_and_alternatives_and_keeps_order() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path(PATH)
                    .header("authorization", "test-key")
                    .json_body(json!({
                        "coordinates": [[73.847, 18.53], [73.926, 18.5]],
                        "alternative_routes": {"target_count": 3, "weight_factor": 1.3}
                    }));
                then.status(200).json_body(json!({
                    "type": "FeatureCollection",
                    "features": [
                        line(json!([[73.847, 18.53], [73.88, 18.52], [73.926, 18.5]])),
                        line(json!([[73.847, 18.53], [73.87, 18.54], [73.926, 18.5]])),
                    ]
                }));
            })
            .await;

        let routes = client_for(&server)
            .find_routes(shivaji_nagar(), hadapsar(), 3)
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(routes.len(), 2);
        assert_eq!(routes[0].points()[1], Coordinate::new(73.88, 18.52).unwrap());
        assert_eq!(routes[1].points()[1], Coordinate::new(73.87, 18.54).unwrap());
    }

    #[tokio::test]
    async fn empty_features_is_no_route() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path(PATH);
                then.status(200)
                    .json_body(json!({"type": "FeatureCollection", "features": []}));
            })
            .await;

        let err = client_for(&server)
            .find_routes(shivaji_nagar(), hadapsar(), 3)
            .await
            .unwrap_err();

        assert!(matches!(err, DirectionsError::NoRoute));
    }

    #[tokio::test]
    async fn not_found_status_is_no_route() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path(PATH);
                then.status(404).json_body(json!({
                    "error": {"code": 2010, "message": "Could not find routable point"}
                }));
            })
            .await;

        let err = client_for(&server)
            .find_routes(shivaji_nagar(), hadapsar(), 3)
            .await
            .unwrap_err();

        assert!(matches!(err, DirectionsError::NoRoute));
    }

    #[tokio::test]
    async fn route_not_found_code_is_no_route() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path(PATH);
                then.status(404).json_body(json!({
                    "error": {"code": 2009, "message": "Route could not be found"}
                }));
            })
            .await;

        let err = client_for(&server)
            .find_routes(shivaji_nagar(), hadapsar(), 3)
            .await
            .unwrap_err();

        assert!(matches!(err, DirectionsError::NoRoute));
    }

    #[tokio::test]
    async fn unknown_path_is_api_error() {
        // Nothing is mounted, as with a wrong base URL or profile
        let server = MockServer::start_async().await;

        let err = client_for(&server)
            .find_routes(shivaji_nagar(), hadapsar(), 3)
            .await
            .unwrap_err();

        assert!(matches!(err, DirectionsError::Api { status: 404, .. }));
    }

    #[tokio::test]
    async fn bad_key_is_unauthorized() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path(PATH);
                then.status(403)
                    .json_body(json!({"error": "Access to this API has been disallowed"}));
            })
            .await;

        let err = client_for(&server)
            .find_routes(shivaji_nagar(), hadapsar(), 3)
            .await
            .unwrap_err();

        assert!(matches!(err, DirectionsError::Unauthorized));
    }

    #[tokio::test]
    async fn quota_exhausted_is_rate_limited() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path(PATH);
                then.status(429).body("Rate limit exceeded");
            })
            .await;

        let err = client_for(&server)
            .find_routes(shivaji_nagar(), hadapsar(), 3)
            .await
            .unwrap_err();

        assert!(matches!(err, DirectionsError::RateLimited));
    }

    #[tokio::test]
    async fn degenerate_geometry_is_rejected() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path(PATH);
                then.status(200).json_body(json!({
                    "type": "FeatureCollection",
                    "features": [line(json!([[73.847, 18.53]]))]
                }));
            })
            .await;

        let err = client_for(&server)
            .find_routes(shivaji_nagar(), hadapsar(), 3)
            .await
            .unwrap_err();

        assert!(matches!(err, DirectionsError::Geometry(_)));
    }
}
