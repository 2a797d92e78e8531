//! Safe route planner server.
//!
//! Resolves two place names, asks a routing provider for alternative routes
//! between them and looks up police stations around the source, returning
//! everything a map page needs in one response.

pub mod config;
pub mod directions;
pub mod domain;
pub mod geocode;
pub mod pipeline;
pub mod safety;
pub mod web;
