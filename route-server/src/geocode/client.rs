//! Nominatim HTTP client.

use std::future::Future;
use std::time::Duration;

use tracing::debug;

use crate::domain::{Coordinate, PlaceQuery};

use super::error::GeocodeError;
use super::types::NominatimPlace;

/// Default base URL for the public Nominatim instance.
const DEFAULT_BASE_URL: &str = "https://nominatim.openstreetmap.org";

/// Default `User-Agent`, required by the Nominatim usage policy.
const DEFAULT_USER_AGENT: &str = concat!("route-server/", env!("CARGO_PKG_VERSION"));

/// Resolves a place name to a coordinate.
///
/// Implemented by [`NominatimClient`]; tests substitute their own.
pub trait Geocoder {
    /// Resolve `place` to the provider's best match.
    ///
    /// Fails with [`GeocodeError::NotFound`] when there are no matches.
    fn resolve(
        &self,
        place: &PlaceQuery,
    ) -> impl Future<Output = Result<Coordinate, GeocodeError>> + Send;
}

/// Configuration for the Nominatim client.
#[derive(Debug, Clone)]
pub struct NominatimConfig {
    /// Base URL for the API (defaults to the public instance)
    pub base_url: String,
    /// Identifying user agent sent with every request
    pub user_agent: String,
    /// Request timeout
    pub timeout: Duration,
}

impl NominatimConfig {
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: Duration::from_secs(10),
        }
    }

    /// Set a custom base URL (for testing or a self-hosted instance).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for NominatimConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Nominatim search client.
#[derive(Debug, Clone)]
pub struct NominatimClient {
    http: reqwest::Client,
    base_url: String,
}

impl NominatimClient {
    /// Create a new client with the given configuration.
    pub fn new(config: NominatimConfig) -> Result<Self, GeocodeError> {
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent)
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Run a text search, returning all matches in provider order.
    ///
    /// Only one match is requested since only the first is ever used.
    pub async fn search(&self, place: &PlaceQuery) -> Result<Vec<NominatimPlace>, GeocodeError> {
        let url = format!("{}/search", self.base_url);

        let response = self
            .http
            .get(&url)
            .query(&[("format", "json"), ("limit", "1"), ("q", place.as_str())])
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GeocodeError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| GeocodeError::Json {
            message: e.to_string(),
            body: Some(body.chars().take(500).collect()),
        })
    }
}

impl Geocoder for NominatimClient {
    async fn resolve(&self, place: &PlaceQuery) -> Result<Coordinate, GeocodeError> {
        let matches = self.search(place).await?;

        let first = matches
            .into_iter()
            .next()
            .ok_or_else(|| GeocodeError::NotFound {
                place: place.to_string(),
            })?;

        let coordinate = Coordinate::new(first.lon, first.lat)?;
        debug!(
            %place,
            %coordinate,
            display_name = first.display_name.as_deref().unwrap_or(""),
            "geocoded"
        );
        Ok(coordinate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    fn place(s: &str) -> PlaceQuery {
        PlaceQuery::parse(s).unwrap()
    }

    fn client_for(server: &MockServer) -> NominatimClient {
        NominatimClient::new(NominatimConfig::new().with_base_url(server.base_url())).unwrap()
    }

    #[test]
    fn config_defaults() {
        let config = NominatimConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert!(config.user_agent.starts_with("route-server/"));
        assert_eq!(config.timeout, Duration::from_secs(10));
    }

    #[test]
    fn config_builder() {
        let config = NominatimConfig::new()
            .with_base_url("http://localhost:8080")
            .with_user_agent("test-agent")
            .with_timeout(Duration::from_secs(2));

        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.user_agent, "test-agent");
        assert_eq!(config.timeout, Duration::from_secs(2));
    }

    #[tokio::test]
    async fn resolves_first_match() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/search")
                    .query_param("format", "json")
                    .query_param("q", "Shivaji Nagar, Pune")
                    .header_exists("user-agent");
                then.status(200).json_body(json!([
                    {"lat": "18.530", "lon": "73.847", "display_name": "Shivaji Nagar"},
                    {"lat": "19.0", "lon": "72.8", "display_name": "Elsewhere"}
                ]));
            })
            .await;

        let coordinate = client_for(&server)
            .resolve(&place("Shivaji Nagar, Pune"))
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(coordinate, Coordinate::new(73.847, 18.530).unwrap());
    }

    #[tokio::test]
    async fn empty_result_is_not_found() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/search");
                then.status(200).json_body(json!([]));
            })
            .await;

        let err = client_for(&server)
            .resolve(&place("Nowhere Special"))
            .await
            .unwrap_err();

        assert!(matches!(err, GeocodeError::NotFound { ref place } if place == "Nowhere Special"));
    }

    #[tokio::test]
    async fn server_error_is_api_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/search");
                then.status(503).body("overloaded");
            })
            .await;

        let err = client_for(&server)
            .resolve(&place("Hadapsar, Pune"))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            GeocodeError::Api { status: 503, ref message } if message == "overloaded"
        ));
    }

    #[tokio::test]
    async fn malformed_body_is_json_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/search");
                then.status(200).body("<html>rate limited</html>");
            })
            .await;

        let err = client_for(&server)
            .resolve(&place("Hadapsar, Pune"))
            .await
            .unwrap_err();

        assert!(matches!(err, GeocodeError::Json { .. }));
    }

    #[tokio::test]
    async fn out_of_range_match_is_rejected() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/search");
                then.status(200)
                    .json_body(json!([{"lat": "118.5", "lon": "73.9"}]));
            })
            .await;

        let err = client_for(&server)
            .resolve(&place("Hadapsar, Pune"))
            .await
            .unwrap_err();

        assert!(matches!(err, GeocodeError::InvalidCoordinate(_)));
    }

    #[tokio::test]
    async fn slow_provider_times_out() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/search");
                then.status(200)
                    .delay(Duration::from_secs(2))
                    .json_body(json!([]));
            })
            .await;

        let client = NominatimClient::new(
            NominatimConfig::new()
                .with_base_url(server.base_url())
                .with_timeout(Duration::from_millis(100)),
        )
        .unwrap();

        let err = client.resolve(&place("Hadapsar, Pune")).await.unwrap_err();
        assert!(matches!(err, GeocodeError::Timeout));
    }
}
