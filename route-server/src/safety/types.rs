//! Overpass API response DTOs.

use std::collections::HashMap;

use serde::Deserialize;

/// `[out:json]` response envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct OverpassResponse {
    pub elements: Vec<OverpassElement>,

    /// Set when the query ran out of time or memory on the server. The
    /// element list is then incomplete.
    #[serde(default)]
    pub remark: Option<String>,
}

/// A node returned by the query. Ways and relations would lack `lat`/`lon`
/// without `out center`, hence the options.
#[derive(Debug, Clone, Deserialize)]
pub struct OverpassElement {
    #[serde(rename = "type", default)]
    pub kind: Option<String>,

    #[serde(default)]
    pub id: Option<u64>,

    #[serde(default)]
    pub lat: Option<f64>,

    #[serde(default)]
    pub lon: Option<f64>,

    #[serde(default)]
    pub tags: Option<HashMap<String, String>>,
}

impl OverpassElement {
    /// The `name` tag, if present.
    pub fn name(&self) -> Option<&str> {
        self.tags.as_ref()?.get("name").map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_elements_with_and_without_tags() {
        let json = r#"{
            "version": 0.6,
            "generator": "Overpass API",
            "elements": [
                {"type": "node", "id": 1, "lat": 18.53, "lon": 73.85,
                 "tags": {"amenity": "police", "name": "Shivajinagar Police Station"}},
                {"type": "node", "id": 2, "lat": 18.52, "lon": 73.84,
                 "tags": {"amenity": "police"}},
                {"type": "node", "id": 3, "lat": 18.51, "lon": 73.86}
            ]
        }"#;

        let resp: OverpassResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.elements.len(), 3);
        assert_eq!(resp.elements[0].name(), Some("Shivajinagar Police Station"));
        assert_eq!(resp.elements[1].name(), None);
        assert_eq!(resp.elements[2].name(), None);
        assert!(resp.remark.is_none());
    }
}
