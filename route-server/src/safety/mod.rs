//! Police-station lookup and the advisory safety summary.
//!
//! Stations come from the Overpass API (an OpenStreetMap query service),
//! filtered to nodes tagged `amenity=police`. The station count is the only
//! real signal here; every other figure in the summary is a placeholder
//! sampled by [`score`], and is labeled as such all the way to the wire.

mod client;
mod error;
mod probe;
pub mod score;
mod types;

pub use client::{OverpassClient, OverpassConfig, PoiSource, police_query};
pub use error::OverpassError;
pub use probe::{Assessment, SafetyProbe};
pub use score::ScoreSeed;
pub use types::{OverpassElement, OverpassResponse};
