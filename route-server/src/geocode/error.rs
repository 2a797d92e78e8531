//! Geocoder error types.

use crate::domain::InvalidCoordinate;

/// Errors from resolving a place name.
#[derive(Debug, thiserror::Error)]
pub enum GeocodeError {
    /// The provider returned zero matches
    #[error("no coordinates found for {place}")]
    NotFound { place: String },

    /// HTTP request failed (connection refused, DNS, TLS...)
    #[error("HTTP error: {0}")]
    Http(reqwest::Error),

    /// Request exceeded its deadline
    #[error("geocoding request timed out")]
    Timeout,

    /// API returned an error status code
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// JSON deserialization failed
    #[error("JSON parse error: {message}")]
    Json {
        message: String,
        body: Option<String>,
    },

    /// The first match carried an out-of-range position
    #[error(transparent)]
    InvalidCoordinate(#[from] InvalidCoordinate),
}

impl From<reqwest::Error> for GeocodeError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            GeocodeError::Timeout
        } else {
            GeocodeError::Http(err)
        }
    }
}
