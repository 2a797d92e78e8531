//! Police stations and the advisory safety summary.
//!
//! The summary is a placeholder. Apart from the police station count, none
//! of its figures come from real crime, lighting or accident data; they are
//! sampled from fixed ranges so the presentation layer has something to
//! show. Do not treat them as a risk model.

use std::fmt;

use super::Coordinate;

/// Label used when the map-data provider gives a station no name.
pub const UNNAMED_POLICE_STATION: &str = "Unnamed Police Station";

/// A police station near the queried point.
#[derive(Debug, Clone, PartialEq)]
pub struct PoliceStation {
    pub coordinate: Coordinate,
    pub name: String,
}

impl PoliceStation {
    /// Create a station, falling back to the placeholder name.
    pub fn new(coordinate: Coordinate, name: Option<String>) -> Self {
        let name = name
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| UNNAMED_POLICE_STATION.to_string());
        Self { coordinate, name }
    }
}

/// A half-open interval `[min, max)` that an advisory score is drawn from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreRange {
    pub min: f64,
    pub max: f64,
}

impl ScoreRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value < self.max
    }
}

/// A score value together with the range it was sampled from.
///
/// The range is part of the value: consumers should show it, since the
/// point value alone suggests a precision that does not exist.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdvisoryScore {
    pub value: f64,
    pub range: ScoreRange,
}

/// Categorical crime-rate label.
///
/// The placeholder summary always reports `Moderate`; the other variants
/// exist for when a real crime data source is wired in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrimeRate {
    Low,
    Moderate,
    High,
}

impl fmt::Display for CrimeRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CrimeRate::Low => "Low",
            CrimeRate::Moderate => "Moderate",
            CrimeRate::High => "High",
        })
    }
}

/// Categorical street-light availability label.
///
/// The placeholder summary always reports `Available`; `Partial` and
/// `Unavailable` are reserved for real lighting data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreetLights {
    Available,
    Partial,
    Unavailable,
}

impl fmt::Display for StreetLights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            StreetLights::Available => "Available",
            StreetLights::Partial => "Partial",
            StreetLights::Unavailable => "Unavailable",
        })
    }
}

/// Advisory safety figures for one query. Placeholder data, see module docs.
#[derive(Debug, Clone, PartialEq)]
pub struct SafetySummary {
    pub source_safety_score: AdvisoryScore,
    pub destination_safety_score: AdvisoryScore,
    pub crime_rate: CrimeRate,
    pub street_lights: StreetLights,
    pub nearby_police_station_count: usize,
    pub average_accidents_per_month: u32,
}
