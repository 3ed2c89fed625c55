//! URL output formatter

use crate::constants::api::MAPS_LINK_URL;
use crate::error::{Error, Result};
use crate::format::OutputFormatter;
use crate::location::LocationResult;

/// URL formatter - outputs a map link for the result coordinates
pub struct UrlFormatter;

impl OutputFormatter for UrlFormatter {
    fn name(&self) -> &str {
        "url"
    }

    fn description(&self) -> &str {
        "Map URL for the result"
    }

    fn format(&self, location: &LocationResult) -> Result<String> {
        let coords = location.coordinates().ok_or_else(|| {
            Error::Geocoding(format!("No coordinates for '{}'", location.query()))
        })?;

        let mut url = format!("{}{},{}", MAPS_LINK_URL, coords.lat, coords.lng);
        if !location.place_id().is_empty() {
            url.push_str(&format!(
                "&query_place_id={}",
                urlencoding::encode(location.place_id())
            ));
        }
        Ok(url)
    }
}
