//! Pipeline error types.
//!
//! Provider clients each have their own error enum. Here they collapse into
//! the five kinds a caller can act on, keeping enough detail to tell a bad
//! API key apart from a flaky network.

use std::fmt;

use crate::directions::DirectionsError;
use crate::geocode::GeocodeError;

/// Which input was missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Source,
    Destination,
    Both,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Field::Source => "source",
            Field::Destination => "destination",
            Field::Both => "source and destination",
        })
    }
}

/// External service involved in a failure. The map-data provider never
/// appears: its failures are absorbed by the safety probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    Geocoding,
    Directions,
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Provider::Geocoding => "geocoding",
            Provider::Directions => "directions",
        })
    }
}

/// What went wrong talking to a provider.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProviderFailure {
    #[error("unauthorized (check API key)")]
    Unauthorized,

    #[error("rate limited")]
    RateLimited,

    #[error("HTTP status {0}")]
    Status(u16),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("malformed response: {0}")]
    Malformed(String),
}

/// Fieldless view of [`QueryError`] for mapping to user messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidInput,
    NotFound,
    NoRoute,
    ProviderError,
    Timeout,
}

/// Why a route query failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    /// A place name was empty; no provider was called
    #[error("{field} must not be empty")]
    InvalidInput { field: Field },

    /// The geocoder had no match for a place
    #[error("no coordinates found for {place}")]
    NotFound { place: String },

    /// The directions provider found no path
    #[error("no route found between the given places")]
    NoRoute,

    /// A provider failed for reasons other than "nothing found"
    #[error("{provider} provider error: {failure}")]
    ProviderError {
        provider: Provider,
        failure: ProviderFailure,
    },

    /// A provider did not answer in time
    #[error("{provider} request timed out")]
    Timeout { provider: Provider },
}

impl QueryError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            QueryError::InvalidInput { .. } => ErrorKind::InvalidInput,
            QueryError::NotFound { .. } => ErrorKind::NotFound,
            QueryError::NoRoute => ErrorKind::NoRoute,
            QueryError::ProviderError { .. } => ErrorKind::ProviderError,
            QueryError::Timeout { .. } => ErrorKind::Timeout,
        }
    }

    fn provider(provider: Provider, failure: ProviderFailure) -> Self {
        QueryError::ProviderError { provider, failure }
    }
}

/// Shared mapping for non-success statuses.
fn status_failure(status: u16) -> ProviderFailure {
    match status {
        401 | 403 => ProviderFailure::Unauthorized,
        429 => ProviderFailure::RateLimited,
        s => ProviderFailure::Status(s),
    }
}

impl From<GeocodeError> for QueryError {
    fn from(err: GeocodeError) -> Self {
        let p = Provider::Geocoding;
        match err {
            GeocodeError::NotFound { place } => QueryError::NotFound { place },
            GeocodeError::Timeout => QueryError::Timeout { provider: p },
            GeocodeError::Http(e) => {
                QueryError::provider(p, ProviderFailure::Transport(e.to_string()))
            }
            GeocodeError::Api { status, .. } => QueryError::provider(p, status_failure(status)),
            GeocodeError::Json { message, .. } => {
                QueryError::provider(p, ProviderFailure::Malformed(message))
            }
            GeocodeError::InvalidCoordinate(e) => {
                QueryError::provider(p, ProviderFailure::Malformed(e.to_string()))
            }
        }
    }
}

impl From<DirectionsError> for QueryError {
    fn from(err: DirectionsError) -> Self {
        let p = Provider::Directions;
        match err {
            DirectionsError::NoRoute => QueryError::NoRoute,
            DirectionsError::Timeout => QueryError::Timeout { provider: p },
            DirectionsError::Unauthorized => QueryError::provider(p, ProviderFailure::Unauthorized),
            DirectionsError::RateLimited => QueryError::provider(p, ProviderFailure::RateLimited),
            DirectionsError::Http(e) => {
                QueryError::provider(p, ProviderFailure::Transport(e.to_string()))
            }
            DirectionsError::Api { status, .. } => QueryError::provider(p, status_failure(status)),
            DirectionsError::Json { message, .. } => {
                QueryError::provider(p, ProviderFailure::Malformed(message))
            }
            DirectionsError::Geometry(e) => {
                QueryError::provider(p, ProviderFailure::Malformed(e.to_string()))
            }
        }
    }
}
