//! OpenRouteService request and response DTOs.
//!
//! Only the parts of the GeoJSON response we read are modeled; properties
//! such as segments, way points and bbox are ignored.

use serde::{Deserialize, Serialize};

/// Body of `POST /v2/directions/{profile}/geojson`.
#[derive(Debug, Clone, Serialize)]
pub struct DirectionsRequest {
    /// Waypoints as `[lon, lat]` pairs, in travel order.
    pub coordinates: Vec<[f64; 2]>,

    pub alternative_routes: AlternativeRoutes,
}

/// Alternative-route options.
#[derive(Debug, Clone, Serialize)]
pub struct AlternativeRoutes {
    /// Maximum number of routes to return, including the primary one.
    pub target_count: u8,

    /// How much longer than the primary an alternative may be.
    pub weight_factor: f64,
}

/// GeoJSON feature collection, one feature per route.
#[derive(Debug, Clone, Deserialize)]
pub struct FeatureCollection {
    #[serde(default)]
    pub features: Vec<Feature>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Feature {
    pub geometry: Geometry,

    #[serde(default)]
    pub properties: Option<FeatureProperties>,
}

/// A `LineString` geometry. Positions are `[lon, lat]` or
/// `[lon, lat, elevation]` when elevation was requested.
#[derive(Debug, Clone, Deserialize)]
pub struct Geometry {
    #[serde(rename = "type", default)]
    pub kind: Option<String>,

    pub coordinates: Vec<Vec<f64>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FeatureProperties {
    #[serde(default)]
    pub summary: Option<RouteSummary>,
}

/// Provider-reported totals for a route.
#[derive(Debug, Clone, Deserialize)]
pub struct RouteSummary {
    /// Meters
    #[serde(default)]
    pub distance: Option<f64>,

    /// Seconds
    #[serde(default)]
    pub duration: Option<f64>,
}

/// Error body sent with non-success statuses.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ErrorDetail {
    pub code: u32,

    #[serde(default)]
    pub message: Option<String>,
}

/// Route not found between the points.
pub const ROUTE_NOT_FOUND: u32 = 2009;

/// A point could not be snapped to the road network.
pub const POINT_NOT_FOUND: u32 = 2010;

impl ErrorBody {
    /// Whether the body reports that no route exists, as opposed to a
    /// missing endpoint or profile.
    pub fn is_no_route(&self) -> bool {
        matches!(self.error.code, ROUTE_NOT_FOUND | POINT_NOT_FOUND)
    }
}
