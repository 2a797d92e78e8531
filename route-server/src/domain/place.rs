//! Free-text place queries.

use std::fmt;

/// Error returned when a place name is empty after trimming.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("place name must not be empty")]
pub struct EmptyPlace;

/// A non-empty, trimmed place name such as `"Hadapsar, Pune"`.
///
/// # Examples
///
/// ```
/// use route_server::domain::PlaceQuery;
///
/// let place = PlaceQuery::parse("  Hadapsar, Pune ").unwrap();
/// assert_eq!(place.as_str(), "Hadapsar, Pune");
///
/// assert!(PlaceQuery::parse("   ").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct PlaceQuery(String);

impl PlaceQuery {
    /// Parse a place name, trimming surrounding whitespace.
    pub fn parse(s: &str) -> Result<Self, EmptyPlace> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(EmptyPlace);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for PlaceQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PlaceQuery({:?})", self.0)
    }
}

impl fmt::Display for PlaceQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
