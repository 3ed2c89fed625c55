//! Output formatters
//!
//! Provides trait-based output formatting for geocode results.

pub mod json;
pub mod text;
pub mod url;

use crate::error::Result;
use crate::location::LocationResult;
use serde::{Deserialize, Serialize};

/// Information about an output format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormatInfo {
    /// Format name
    pub name: String,
    /// Format description
    pub description: String,
}

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Get the format name
    fn name(&self) -> &str;

    /// Get the format description
    fn description(&self) -> &str;

    /// Format a geocode result
    fn format(&self, location: &LocationResult) -> Result<String>;
}

/// Get a formatter by name
pub fn get_formatter(name: &str) -> Option<Box<dyn OutputFormatter>> {
    match name.to_lowercase().as_str() {
        "json" => Some(Box::new(json::JsonFormatter)),
        "text" => Some(Box::new(text::TextFormatter)),
        "url" => Some(Box::new(url::UrlFormatter)),
        _ => None,
    }
}

/// List all available formatters
pub fn available_formats() -> Vec<FormatInfo> {
    [
        &json::JsonFormatter as &dyn OutputFormatter,
        &text::TextFormatter,
        &url::UrlFormatter,
    ]
    .into_iter()
    .map(|f| FormatInfo {
        name: f.name().to_string(),
        description: f.description().to_string(),
    })
    .collect()
}

#[cfg(test)]
pub(crate) fn sample_location() -> LocationResult {
    LocationResult::from_json(
        "1600 Amphitheatre Parkway",
        r#"{
            "status": "OK",
            "results": [{
                "formatted_address": "1600 Amphitheatre Pkwy, Mountain View, CA 94043, USA",
                "geometry": {
                    "location": {"lat": 37.4224, "lng": -122.0842},
                    "location_type": "ROOFTOP"
                },
                "place_id": "ChIJ2eUgeAK6j4ARbn5u_wAGqWA",
                "address_components": [
                    {"long_name": "Mountain View", "short_name": "Mountain View", "types": ["locality", "political"]},
                    {"long_name": "United States", "short_name": "US", "types": ["country", "political"]}
                ],
                "types": ["street_address"]
            }]
        }"#,
    )
}
