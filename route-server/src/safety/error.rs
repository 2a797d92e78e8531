//! Overpass client error types.

/// Errors from the map-data query provider.
///
/// These never reach the caller of the pipeline: the probe logs them and
/// degrades to "no safety data".
#[derive(Debug, thiserror::Error)]
pub enum OverpassError {
    /// HTTP request failed (connection refused, DNS, TLS...)
    #[error("HTTP error: {0}")]
    Http(reqwest::Error),

    /// Request exceeded its deadline
    #[error("Overpass request timed out")]
    Timeout,

    /// Overpass is overloaded and refused the query
    #[error("rate limited by Overpass API")]
    RateLimited,

    /// API returned an error status code
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// JSON deserialization failed
    #[error("JSON parse error: {message}")]
    Json {
        message: String,
        body: Option<String>,
    },
}

impl From<reqwest::Error> for OverpassError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            OverpassError::Timeout
        } else {
            OverpassError::Http(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        assert_eq!(
            OverpassError::Timeout.to_string(),
            "Overpass request timed out"
        );
        let err = OverpassError::Api {
            status: 504,
            message: "Gateway Timeout".into(),
        };
        assert_eq!(err.to_string(), "API error 504: Gateway Timeout");
    }
}
