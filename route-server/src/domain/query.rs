//! The composed result of one route query.

use super::{Coordinate, PlaceQuery, PoliceStation, RouteSet, SafetySummary};

/// A resolved endpoint: the name the user typed and where it geocoded to.
#[derive(Debug, Clone, PartialEq)]
pub struct Endpoint {
    pub place: PlaceQuery,
    pub coordinate: Coordinate,
}

/// Everything the presentation layer needs to draw one query.
///
/// `safety` is `None` when the safety probe failed; the routes are still
/// valid in that case.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryResult {
    pub source: Endpoint,
    pub destination: Endpoint,
    pub routes: RouteSet,
    pub police_stations: Vec<PoliceStation>,
    pub safety: Option<SafetySummary>,
}
