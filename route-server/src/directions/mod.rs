//! Alternative driving routes via OpenRouteService.
//!
//! Key characteristics of the directions API:
//! - Coordinates travel as `[lon, lat]` in both directions, which matches
//!   our canonical [`Coordinate`](crate::domain::Coordinate) order
//! - Alternatives are requested with a target count and a weight factor;
//!   the factor trades route length for path diversity
//! - The API key goes in the `Authorization` header, verbatim

mod client;
mod convert;
mod error;
mod types;

pub use client::{DirectionsConfig, OrsClient, Router};
pub use convert::{ConversionError, convert_feature_collection};
pub use error::DirectionsError;
pub use types::{
    AlternativeRoutes, DirectionsRequest, ErrorBody, ErrorDetail, Feature, FeatureCollection,
    FeatureProperties, Geometry, RouteSummary,
};
