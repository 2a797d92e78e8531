//! The route-and-safety pipeline.
//!
//! One call to [`RouteAggregator::run`] takes two place names and walks a
//! fixed sequence of stages:
//!
//! 1. validate both names
//! 2. geocode both (concurrently)
//! 3. fetch alternative routes
//! 4. assess safety around the source
//! 5. compose the [`QueryResult`](crate::domain::QueryResult)
//!
//! Stages 2 and 3 are mandatory and abort the run on failure. Stage 4 is
//! supplementary and degrades instead.

mod aggregator;
mod config;
mod error;

pub use aggregator::RouteAggregator;
pub use config::PipelineConfig;
pub use error::{ErrorKind, Field, Provider, ProviderFailure, QueryError};
