//! Route geometries.

use super::Coordinate;

/// Error returned when a route has fewer than two points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("route must have at least 2 points, got {0}")]
pub struct DegenerateRoute(pub usize);

/// An ordered path from source to destination.
///
/// A route always has at least two points; the first is near the source and
/// the last is near the destination (providers snap endpoints to the road
/// network, so they are rarely identical to the geocoded coordinates).
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    points: Vec<Coordinate>,
}

/// Routes in provider ranking order.
pub type RouteSet = Vec<Route>;

impl Route {
    /// Create a route from its points.
    pub fn new(points: Vec<Coordinate>) -> Result<Self, DegenerateRoute> {
        if points.len() < 2 {
            return Err(DegenerateRoute(points.len()));
        }
        Ok(Self { points })
    }

    pub fn points(&self) -> &[Coordinate] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false; kept for the `len` / `is_empty` pairing.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn start(&self) -> Coordinate {
        self.points[0]
    }

    pub fn end(&self) -> Coordinate {
        self.points[self.points.len() - 1]
    }

    /// Total path length in meters.
    pub fn length_meters(&self) -> f64 {
        self.points
            .windows(2)
            .map(|pair| pair[0].distance_meters(&pair[1]))
            .sum()
    }

    /// Whether both endpoints are within `tolerance_m` of the given coordinates.
    pub fn endpoints_within(
        &self,
        source: &Coordinate,
        destination: &Coordinate,
        tolerance_m: f64,
    ) -> bool {
        self.start().distance_meters(source) <= tolerance_m
            && self.end().distance_meters(destination) <= tolerance_m
    }
}
