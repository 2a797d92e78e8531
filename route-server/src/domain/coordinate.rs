//! WGS84 coordinate type.

use std::fmt;

/// Mean Earth radius in meters (IUGG).
const EARTH_RADIUS_M: f64 = 6_371_008.8;

/// Error returned when a longitude/latitude pair is out of range.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("invalid coordinate ({lon}, {lat}): {reason}")]
pub struct InvalidCoordinate {
    lon: f64,
    lat: f64,
    reason: &'static str,
}

/// A WGS84 position, stored in (longitude, latitude) order.
///
/// Every provider in the system is normalized to this order, so a route
/// point and a geocoded marker can be compared directly.
///
/// # Examples
///
/// ```
/// use route_server::domain::Coordinate;
///
/// let shivaji_nagar = Coordinate::new(73.847, 18.530).unwrap();
/// assert_eq!(shivaji_nagar.lon(), 73.847);
///
/// // Latitude out of range
/// assert!(Coordinate::new(73.8, 95.0).is_err());
/// ```
#[derive(Clone, Copy, PartialEq)]
pub struct Coordinate {
    lon: f64,
    lat: f64,
}

impl Coordinate {
    /// Create a coordinate, validating both axes.
    pub fn new(lon: f64, lat: f64) -> Result<Self, InvalidCoordinate> {
        if !lon.is_finite() || !lat.is_finite() {
            return Err(InvalidCoordinate {
                lon,
                lat,
                reason: "must be finite",
            });
        }
        if !(-180.0..=180.0).contains(&lon) {
            return Err(InvalidCoordinate {
                lon,
                lat,
                reason: "longitude must be within [-180, 180]",
            });
        }
        if !(-90.0..=90.0).contains(&lat) {
            return Err(InvalidCoordinate {
                lon,
                lat,
                reason: "latitude must be within [-90, 90]",
            });
        }
        Ok(Self { lon, lat })
    }

    pub fn lon(&self) -> f64 {
        self.lon
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Great-circle distance to `other` in meters (haversine).
    pub fn distance_meters(&self, other: &Coordinate) -> f64 {
        let phi1 = self.lat.to_radians();
        let phi2 = other.lat.to_radians();
        let d_phi = (other.lat - self.lat).to_radians();
        let d_lambda = (other.lon - self.lon).to_radians();

        let a = (d_phi / 2.0).sin().powi(2)
            + phi1.cos() * phi2.cos() * (d_lambda / 2.0).sin().powi(2);
        2.0 * EARTH_RADIUS_M * a.sqrt().min(1.0).asin()
    }

    /// The `[lon, lat]` pair, as GeoJSON and the directions provider expect.
    pub fn to_lon_lat(self) -> [f64; 2] {
        [self.lon, self.lat]
    }
}

impl fmt::Debug for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Coordinate({}, {})", self.lon, self.lat)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.5},{:.5}", self.lon, self.lat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_bounds() {
        assert!(Coordinate::new(180.0, 90.0).is_ok());
        assert!(Coordinate::new(-180.0, -90.0).is_ok());
        assert!(Coordinate::new(0.0, 0.0).is_ok());
    }

    #[test]
    fn rejects_out_of_range() {
        assert!(Coordinate::new(180.1, 0.0).is_err());
        assert!(Coordinate::new(0.0, -90.5).is_err());
        assert!(Coordinate::new(f64::NAN, 0.0).is_err());
        assert!(Coordinate::new(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn error_display() {
        let err = Coordinate::new(10.0, 100.0).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid coordinate (10, 100): latitude must be within [-90, 90]"
        );
    }

    #[test]
    fn distance_between_pune_neighbourhoods() {
        let shivaji_nagar = Coordinate::new(73.847, 18.530).unwrap();
        let hadapsar = Coordinate::new(73.926, 18.500).unwrap();
        let d = shivaji_nagar.distance_meters(&hadapsar);
        // Roughly 8.9 km as the crow flies
        assert!((8_500.0..9_300.0).contains(&d), "got {d}");
    }

    #[test]
    fn distance_to_self_is_zero() {
        let c = Coordinate::new(-0.1276, 51.5072).unwrap();
        assert_eq!(c.distance_meters(&c), 0.0);
    }

    #[test]
    fn lon_lat_order() {
        let c = Coordinate::new(73.847, 18.530).unwrap();
        assert_eq!(c.to_lon_lat(), [73.847, 18.530]);
        assert_eq!(format!("{:?}", c), "Coordinate(73.847, 18.53)");
    }
}
