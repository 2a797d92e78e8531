//! Placeholder safety scoring.
//!
//! None of these numbers are derived from crime, lighting or accident data.
//! Scores are drawn uniformly from fixed ranges, the labels are constants,
//! and only the police station count reflects the real query. Replacing
//! this with a real model is a separate piece of work, not a tweak here.

use std::ops::RangeInclusive;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::domain::{AdvisoryScore, CrimeRate, SafetySummary, ScoreRange, StreetLights};

/// Range the source safety score is drawn from.
pub const SOURCE_SCORE_RANGE: ScoreRange = ScoreRange::new(7.0, 10.0);

/// Range the destination safety score is drawn from. Adjacent to, and
/// disjoint from, the source range.
pub const DESTINATION_SCORE_RANGE: ScoreRange = ScoreRange::new(4.0, 7.0);

/// Range of the accidents-per-month estimate.
pub const ACCIDENTS_PER_MONTH: RangeInclusive<u32> = 1..=10;

/// Where placeholder randomness comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScoreSeed {
    /// Fresh OS entropy for every assessment
    #[default]
    Entropy,
    /// Same sequence for every assessment (tests, reproducible demos)
    Fixed(u64),
}

impl ScoreSeed {
    /// A new generator for one assessment.
    pub fn rng(&self) -> StdRng {
        match self {
            ScoreSeed::Entropy => StdRng::from_entropy(),
            ScoreSeed::Fixed(seed) => StdRng::seed_from_u64(*seed),
        }
    }
}

/// Build a placeholder summary for a point with `station_count` stations.
pub fn placeholder_summary<R: Rng + ?Sized>(rng: &mut R, station_count: usize) -> SafetySummary {
    SafetySummary {
        source_safety_score: sample_score(rng, SOURCE_SCORE_RANGE),
        destination_safety_score: sample_score(rng, DESTINATION_SCORE_RANGE),
        crime_rate: CrimeRate::Moderate,
        street_lights: StreetLights::Available,
        nearby_police_station_count: station_count,
        average_accidents_per_month: rng.gen_range(ACCIDENTS_PER_MONTH),
    }
}

/// Uniform sample truncated to one decimal. Truncation, not rounding,
/// keeps the value inside the half-open range.
fn sample_score<R: Rng + ?Sized>(rng: &mut R, range: ScoreRange) -> AdvisoryScore {
    let raw: f64 = rng.gen_range(range.min..range.max);
    AdvisoryScore {
        value: (raw * 10.0).floor() / 10.0,
        range,
    }
}
