//! Web layer for the route planner.
//!
//! A small JSON API over [`RouteAggregator`](crate::pipeline::RouteAggregator).
//! Rendering the map is the client's job.

mod dto;
mod error;
mod routes;
mod state;

pub use dto::*;
pub use error::AppError;
pub use routes::create_router;
pub use state::{AppState, LiveAggregator};
