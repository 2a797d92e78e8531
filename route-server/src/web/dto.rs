//! Data transfer objects for web requests and responses.
//!
//! Every position on the wire is a `[lon, lat]` pair, routes and markers
//! alike. Map libraries that want `[lat, lon]` must swap both.

use serde::{Deserialize, Serialize};

use crate::domain::{AdvisoryScore, Endpoint, PoliceStation, QueryResult, Route, SafetySummary};

/// Shown with every safety summary.
pub const PLACEHOLDER_NOTE: &str = "Advisory placeholder: only the police station count comes \
     from map data. Scores, crime rate, street lights and accident figures are not based on real \
     statistics.";

/// Request to plan routes between two places.
///
/// Missing and `null` fields both read as empty, so the pipeline reports
/// them as invalid input rather than the request failing to decode.
#[derive(Debug, Deserialize)]
pub struct RouteQueryRequest {
    /// Free-text source, e.g. "Shivaji Nagar, Pune"
    #[serde(default)]
    pub source: Option<String>,

    /// Free-text destination
    #[serde(default)]
    pub destination: Option<String>,
}

impl RouteQueryRequest {
    pub fn source(&self) -> &str {
        self.source.as_deref().unwrap_or_default()
    }

    pub fn destination(&self) -> &str {
        self.destination.as_deref().unwrap_or_default()
    }
}

/// Response for a route query.
#[derive(Debug, Serialize)]
pub struct RouteQueryResponse {
    pub source: EndpointResult,
    pub destination: EndpointResult,

    /// Routes in provider ranking order (rank 0 is the primary route)
    pub routes: Vec<RouteResult>,

    pub police_stations: Vec<PoliceStationResult>,

    /// Absent when the police station lookup failed
    pub safety: Option<SafetyResult>,
}

/// A resolved place.
#[derive(Debug, Serialize)]
pub struct EndpointResult {
    /// The place name as queried (trimmed)
    pub name: String,

    /// `[lon, lat]`
    pub position: [f64; 2],
}

/// One candidate route.
#[derive(Debug, Serialize)]
pub struct RouteResult {
    pub rank: usize,

    /// `[lon, lat]` pairs from source to destination
    pub points: Vec<[f64; 2]>,

    /// Path length in meters
    pub length_m: f64,
}

/// A police station marker.
#[derive(Debug, Serialize)]
pub struct PoliceStationResult {
    pub name: String,

    /// `[lon, lat]`
    pub position: [f64; 2],
}

/// An advisory score with the range it was drawn from.
#[derive(Debug, Serialize)]
pub struct ScoreResult {
    pub value: f64,
    pub min: f64,
    pub max: f64,
}

/// The safety panel.
#[derive(Debug, Serialize)]
pub struct SafetyResult {
    /// Always true; see `note`
    pub placeholder: bool,
    pub note: &'static str,
    pub source_safety_score: ScoreResult,
    pub destination_safety_score: ScoreResult,
    pub crime_rate: String,
    pub street_lights: String,
    pub nearby_police_stations: usize,
    pub average_accidents_per_month: u32,
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Stable code for programmatic handling, e.g. `NO_ROUTE`
    pub code: &'static str,

    /// Message suitable for showing to the user
    pub message: String,
}

// ============================================================================
// Conversion implementations
// ============================================================================

impl RouteQueryResponse {
    /// Create from a pipeline result.
    pub fn from_result(result: &QueryResult) -> Self {
        Self {
            source: EndpointResult::from_endpoint(&result.source),
            destination: EndpointResult::from_endpoint(&result.destination),
            routes: result
                .routes
                .iter()
                .enumerate()
                .map(|(rank, route)| RouteResult::from_route(rank, route))
                .collect(),
            police_stations: result
                .police_stations
                .iter()
                .map(PoliceStationResult::from_station)
                .collect(),
            safety: result.safety.as_ref().map(SafetyResult::from_summary),
        }
    }
}

impl EndpointResult {
    pub fn from_endpoint(endpoint: &Endpoint) -> Self {
        Self {
            name: endpoint.place.to_string(),
            position: endpoint.coordinate.to_lon_lat(),
        }
    }
}

impl RouteResult {
    pub fn from_route(rank: usize, route: &Route) -> Self {
        Self {
            rank,
            points: route.points().iter().map(|c| c.to_lon_lat()).collect(),
            length_m: route.length_meters().round(),
        }
    }
}

impl PoliceStationResult {
    pub fn from_station(station: &PoliceStation) -> Self {
        Self {
            name: station.name.clone(),
            position: station.coordinate.to_lon_lat(),
        }
    }
}

impl ScoreResult {
    fn from_score(score: &AdvisoryScore) -> Self {
        Self {
            value: score.value,
            min: score.range.min,
            max: score.range.max,
        }
    }
}

impl SafetyResult {
    pub fn from_summary(summary: &SafetySummary) -> Self {
        Self {
            placeholder: true,
            note: PLACEHOLDER_NOTE,
            source_safety_score: ScoreResult::from_score(&summary.source_safety_score),
            destination_safety_score: ScoreResult::from_score(&summary.destination_safety_score),
            crime_rate: summary.crime_rate.to_string(),
            street_lights: summary.street_lights.to_string(),
            nearby_police_stations: summary.nearby_police_station_count,
            average_accidents_per_month: summary.average_accidents_per_month,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Coordinate, CrimeRate, PlaceQuery, ScoreRange, StreetLights};

    fn c(lon: f64, lat: f64) -> Coordinate {
        Coordinate::new(lon, lat).unwrap()
    }

    fn make_result(safety: Option<SafetySummary>) -> QueryResult {
        QueryResult {
            source: Endpoint {
                place: PlaceQuery::parse("Shivaji Nagar, Pune").unwrap(),
                coordinate: c(73.847, 18.530),
            },
            destination: Endpoint {
                place: PlaceQuery::parse("Hadapsar, Pune").unwrap(),
                coordinate: c(73.926, 18.500),
            },
            routes: vec![
                Route::new(vec![c(73.847, 18.530), c(73.926, 18.500)]).unwrap(),
                Route::new(vec![c(73.847, 18.530), c(73.88, 18.54), c(73.926, 18.500)]).unwrap(),
            ],
            police_stations: vec![PoliceStation::new(c(73.849, 18.531), None)],
            safety,
        }
    }

    fn make_summary() -> SafetySummary {
        SafetySummary {
            source_safety_score: AdvisoryScore {
                value: 8.4,
                range: ScoreRange::new(7.0, 10.0),
            },
            destination_safety_score: AdvisoryScore {
                value: 5.1,
                range: ScoreRange::new(4.0, 7.0),
            },
            crime_rate: CrimeRate::Moderate,
            street_lights: StreetLights::Available,
            nearby_police_station_count: 1,
            average_accidents_per_month: 6,
        }
    }

    #[test]
    fn response_from_result() {
        let resp = RouteQueryResponse::from_result(&make_result(Some(make_summary())));

        assert_eq!(resp.source.name, "Shivaji Nagar, Pune");
        assert_eq!(resp.source.position, [73.847, 18.530]);
        assert_eq!(resp.routes.len(), 2);
        assert_eq!(resp.routes[0].rank, 0);
        assert_eq!(resp.routes[1].rank, 1);
        assert_eq!(resp.routes[1].points[1], [73.88, 18.54]);
        assert!(resp.routes[0].length_m > 8_000.0);
        assert_eq!(resp.police_stations[0].name, "Unnamed Police Station");
    }

    #[test]
    fn safety_is_labeled_placeholder() {
        let resp = RouteQueryResponse::from_result(&make_result(Some(make_summary())));
        let json = serde_json::to_value(&resp).unwrap();

        let safety = &json["safety"];
        assert_eq!(safety["placeholder"], true);
        assert_eq!(safety["crime_rate"], "Moderate");
        assert_eq!(safety["street_lights"], "Available");
        assert_eq!(safety["nearby_police_stations"], 1);
        assert_eq!(safety["source_safety_score"]["value"], 8.4);
        assert_eq!(safety["source_safety_score"]["min"], 7.0);
        assert_eq!(safety["destination_safety_score"]["max"], 7.0);
        assert!(safety["note"].as_str().unwrap().contains("placeholder"));
    }

    #[test]
    fn missing_safety_serializes_as_null() {
        let resp = RouteQueryResponse::from_result(&make_result(None));
        let json = serde_json::to_value(&resp).unwrap();

        assert!(json["safety"].is_null());
        assert_eq!(json["routes"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn request_fields_default_to_empty() {
        let req: RouteQueryRequest = serde_json::from_str(r#"{"source": "Hadapsar"}"#).unwrap();
        assert_eq!(req.source(), "Hadapsar");
        assert_eq!(req.destination(), "");
    }

    #[test]
    fn null_fields_read_as_empty() {
        let req: RouteQueryRequest =
            serde_json::from_str(r#"{"source": null, "destination": "Hadapsar"}"#).unwrap();
        assert_eq!(req.source(), "");
        assert_eq!(req.destination(), "Hadapsar");
    }
}
