//! Nominatim response types.

use serde::{Deserialize, Deserializer};

/// One search match. Only the fields we use are decoded.
#[derive(Debug, Clone, Deserialize)]
pub struct NominatimPlace {
    #[serde(deserialize_with = "degrees")]
    pub lon: f64,

    #[serde(deserialize_with = "degrees")]
    pub lat: f64,

    #[serde(default)]
    pub display_name: Option<String>,
}

/// Nominatim sends degrees as strings (`"73.8474"`); accept numbers too.
fn degrees<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Degrees {
        Number(f64),
        Text(String),
    }

    match Degrees::deserialize(deserializer)? {
        Degrees::Number(n) => Ok(n),
        Degrees::Text(s) => s
            .trim()
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("invalid degrees: {s:?}"))),
    }
}
