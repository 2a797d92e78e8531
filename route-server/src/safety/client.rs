//! Overpass API client.

use std::future::Future;
use std::time::Duration;

use tracing::warn;

use crate::domain::{Coordinate, PoliceStation};

use super::error::OverpassError;
use super::types::OverpassResponse;

/// Default base URL for the main public Overpass instance.
const DEFAULT_BASE_URL: &str = "https://overpass-api.de";

/// Looks up police stations around a point.
///
/// Implemented by [`OverpassClient`]; tests substitute their own.
pub trait PoiSource {
    /// All police stations within `radius_m` meters of `center`.
    fn police_stations(
        &self,
        center: Coordinate,
        radius_m: u32,
    ) -> impl Future<Output = Result<Vec<PoliceStation>, OverpassError>> + Send;
}

/// Build the Overpass QL query for police nodes around `center`.
///
/// Overpass takes `lat,lon` in `around`, the reverse of our canonical order.
///
/// ```
/// use route_server::domain::Coordinate;
/// use route_server::safety::police_query;
///
/// let q = police_query(Coordinate::new(73.847, 18.53).unwrap(), 5000);
/// assert_eq!(q, r#"[out:json];node["amenity"="police"](around:5000,18.53,73.847);out;"#);
/// ```
pub fn police_query(center: Coordinate, radius_m: u32) -> String {
    format!(
        r#"[out:json];node["amenity"="police"](around:{},{},{});out;"#,
        radius_m,
        center.lat(),
        center.lon()
    )
}

/// Configuration for the Overpass client.
#[derive(Debug, Clone)]
pub struct OverpassConfig {
    /// Base URL for the API
    pub base_url: String,
    /// Request timeout
    pub timeout: Duration,
}

impl OverpassConfig {
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(10),
        }
    }

    /// Set a custom base URL (for testing or a mirror).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for OverpassConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Client for the Overpass interpreter endpoint.
#[derive(Debug, Clone)]
pub struct OverpassClient {
    http: reqwest::Client,
    base_url: String,
}

impl OverpassClient {
    /// Create a new Overpass client.
    pub fn new(config: OverpassConfig) -> Result<Self, OverpassError> {
        let http = reqwest::Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Run an Overpass QL query and decode the JSON response.
    pub async fn interpret(&self, query: &str) -> Result<OverpassResponse, OverpassError> {
        let url = format!("{}/api/interpreter", self.base_url);

        let response = self.http.get(&url).query(&[("data", query)]).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(OverpassError::RateLimited);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(OverpassError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| OverpassError::Json {
            message: e.to_string(),
            body: Some(body.chars().take(500).collect()),
        })
    }
}

impl PoiSource for OverpassClient {
    async fn police_stations(
        &self,
        center: Coordinate,
        radius_m: u32,
    ) -> Result<Vec<PoliceStation>, OverpassError> {
        let response = self.interpret(&police_query(center, radius_m)).await?;

        if let Some(remark) = &response.remark {
            warn!(%center, %remark, "Overpass returned a partial result");
        }

        let stations = response
            .elements
            .iter()
            .filter_map(|element| {
                let coordinate = element
                    .lat
                    .zip(element.lon)
                    .and_then(|(lat, lon)| Coordinate::new(lon, lat).ok());
                match coordinate {
                    Some(c) => Some(PoliceStation::new(c, element.name().map(str::to_string))),
                    None => {
                        warn!(
                            id = ?element.id,
                            kind = element.kind.as_deref().unwrap_or("unknown"),
                            "skipping police element without a valid position"
                        );
                        None
                    }
                }
            })
            .collect();

        Ok(stations)
    }
}
