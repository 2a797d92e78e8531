//! Domain types for the route planner.
//!
//! These types enforce their invariants at construction time, so code that
//! receives a `Coordinate`, `PlaceQuery` or `Route` can trust its validity.

mod coordinate;
mod place;
mod query;
mod route;
mod safety;

pub use coordinate::{Coordinate, InvalidCoordinate};
pub use place::{EmptyPlace, PlaceQuery};
pub use query::{Endpoint, QueryResult};
pub use route::{DegenerateRoute, Route, RouteSet};
pub use safety::{
    AdvisoryScore, CrimeRate, PoliceStation, SafetySummary, ScoreRange, StreetLights,
    UNNAMED_POLICE_STATION,
};
