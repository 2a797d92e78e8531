//! Directions client error types.

/// Errors from the directions provider.
#[derive(Debug, thiserror::Error)]
pub enum DirectionsError {
    /// The provider found no path between the two points
    #[error("no route found between the given points")]
    NoRoute,

    /// Invalid API key or unauthorized
    #[error("unauthorized (invalid API key)")]
    Unauthorized,

    /// Rate limited or quota exhausted
    #[error("rate limited by directions API")]
    RateLimited,

    /// HTTP request failed (connection refused, DNS, TLS...)
    #[error("HTTP error: {0}")]
    Http(reqwest::Error),

    /// Request exceeded its deadline
    #[error("directions request timed out")]
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

    /// A route geometry could not be converted
    #[error("invalid route geometry: {0}")]
    Geometry(#[from] super::ConversionError),
}

impl From<reqwest::Error> for DirectionsError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            DirectionsError::Timeout
        } else {
            DirectionsError::Http(err)
        }
    }
}
