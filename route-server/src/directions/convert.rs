//! Conversion from directions DTOs to domain routes.

use crate::domain::{Coordinate, Route, RouteSet};

use super::types::{Feature, FeatureCollection};

/// Error during DTO to domain conversion.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConversionError {
    /// A position had fewer than two numbers
    #[error("route {route}: position {position} has {len} values, need lon and lat")]
    ShortPosition {
        route: usize,
        position: usize,
        len: usize,
    },

    /// A position was outside WGS84 bounds
    #[error("route {route}: position {position} is out of range")]
    OutOfRange { route: usize, position: usize },

    /// Fewer than two positions in a route
    #[error("route {route}: needs at least 2 positions, got {len}")]
    Degenerate { route: usize, len: usize },

    /// The geometry was not a `LineString`
    #[error("route {route}: unsupported geometry type {kind}")]
    UnsupportedGeometry { route: usize, kind: String },
}

/// Convert a feature collection into routes, keeping provider order.
///
/// Any malformed feature fails the whole collection.
pub fn convert_feature_collection(fc: &FeatureCollection) -> Result<RouteSet, ConversionError> {
    fc.features
        .iter()
        .enumerate()
        .map(|(idx, feature)| convert_feature(idx, feature))
        .collect()
}

fn convert_feature(route: usize, feature: &Feature) -> Result<Route, ConversionError> {
    // Untyped geometries are accepted as line strings
    if let Some(kind) = feature.geometry.kind.as_deref().filter(|k| *k != "LineString") {
        return Err(ConversionError::UnsupportedGeometry {
            route,
            kind: kind.to_string(),
        });
    }

    let points = feature
        .geometry
        .coordinates
        .iter()
        .enumerate()
        .map(|(position, pos)| match pos.as_slice() {
            [lon, lat, ..] => Coordinate::new(*lon, *lat)
                .map_err(|_| ConversionError::OutOfRange { route, position }),
            _ => Err(ConversionError::ShortPosition {
                route,
                position,
                len: pos.len(),
            }),
        })
        .collect::<Result<Vec<_>, _>>()?;

    Route::new(points).map_err(|e| ConversionError::Degenerate { route, len: e.0 })
}
