//! Place-name geocoding via Nominatim.
//!
//! Nominatim is OpenStreetMap's text search. It returns matches ranked by
//! importance; the first match is taken as authoritative, there is no
//! disambiguation step.
//!
//! Usage policy requires an identifying `User-Agent` on every request.

mod client;
mod error;
mod types;

pub use client::{Geocoder, NominatimClient, NominatimConfig};
pub use error::GeocodeError;
pub use types::NominatimPlace;
