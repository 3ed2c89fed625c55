//! Human-readable text output formatter

use crate::error::Result;
use crate::format::OutputFormatter;
use crate::location::LocationResult;

/// Text formatter - outputs human-readable summary
pub struct TextFormatter;

impl OutputFormatter for TextFormatter {
    fn name(&self) -> &str {
        "text"
    }

    fn description(&self) -> &str {
        "Human-readable text"
    }

    fn format(&self, location: &LocationResult) -> Result<String> {
        let mut output = String::new();

        output.push_str(&format!("Query: {}\n", location.query()));

        if location.is_empty() {
            output.push_str("No result");
            if let Some(status) = location.status() {
                output.push_str(&format!(" ({})", status));
            }
            output.push('\n');
            if let Some(message) = location.error_message() {
                output.push_str(&format!("Error: {}\n", message));
            }
            return Ok(output);
        }

        output.push_str(&format!("Address: {}\n", location.formatted_address()));
        if let Some(coords) = location.coordinates() {
            output.push_str(&format!(
                "Coordinates: ({:.6}, {:.6})\n",
                coords.lat, coords.lng
            ));
        }
        if !location.location_type().is_empty() {
            output.push_str(&format!("Location type: {}\n", location.location_type()));
        }
        if !location.place_id().is_empty() {
            output.push_str(&format!("Place ID: {}\n", location.place_id()));
        }
        if !location.types().is_empty() {
            output.push_str(&format!("Types: {}\n", location.types().join(", ")));
        }
        if let Some(viewport) = location.viewport() {
            output.push_str(&format!(
                "Viewport: ({:.6}, {:.6}) - ({:.6}, {:.6})\n",
                viewport.southwest.lat,
                viewport.southwest.lng,
                viewport.northeast.lat,
                viewport.northeast.lng
            ));
        }
        if location.is_partial_match() {
            output.push_str("Partial match\n");
        }

        if !location.address_components().is_empty() {
            output.push_str("\nComponents:\n");
            for component in location.address_components() {
                output.push_str(&format!(
                    "  {} ({}): {}\n",
                    component.long_name,
                    component.short_name,
                    component.types.join(", ")
                ));
            }
        }

        if location.candidate_count() > 1 {
            output.push_str(&format!(
                "\n{} more candidate(s) not shown\n",
                location.candidate_count() - 1
            ));
        }

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::sample_location;

    #[test]
    fn test_text_format() {
        let output = TextFormatter.format(&sample_location()).unwrap();

        assert!(output.contains("Query: 1600 Amphitheatre Parkway"));
        assert!(output.contains("Address: 1600 Amphitheatre Pkwy"));
        assert!(output.contains("Coordinates: (37.422400, -122.084200)"));
        assert!(output.contains("Location type: ROOFTOP"));
        assert!(output.contains("Components:"));
        assert!(output.contains("United States (US): country, political"));
        assert!(!output.contains("Partial match"));
    }

    #[test]
    fn test_text_format_empty_with_status() {
        let location = LocationResult::from_json(
            "nowhere",
            r#"{"status": "REQUEST_DENIED", "error_message": "bad key"}"#,
        );
        let output = TextFormatter.format(&location).unwrap();

        assert!(output.contains("No result (REQUEST_DENIED)"));
        assert!(output.contains("Error: bad key"));
    }

    #[test]
    fn test_text_formatter_info() {
        assert_eq!(TextFormatter.name(), "text");
        assert!(!TextFormatter.description().is_empty());
    }
}
