//! Geocode result projection
//!
//! `LocationResult` is an immutable view over the first candidate of an API
//! response. Every accessor degrades to an empty value (`""`, empty slice,
//! `None`, `false`) when the field or the whole result set is absent.

pub mod raw;

pub use raw::{
    AddressComponent, GeocodeCandidate, Geometry, GeometryLocation, LatLng, RawGeocodeResponse,
    Viewport,
};

use crate::constants::status;
use serde::Serialize;
use tracing::warn;

/// Typed view over the first geocode match for an address query
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LocationResult {
    query: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    error_message: Option<String>,

    candidate_count: usize,

    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<GeocodeCandidate>,
}

impl LocationResult {
    /// Project a response as given, without looking at its status
    pub fn new(address: impl Into<String>, response: Option<RawGeocodeResponse>) -> Self {
        let Some(response) = response else {
            return Self::empty(address);
        };

        let candidate_count = response.results.len();
        Self {
            query: address.into(),
            status: Some(response.status).filter(|s| !s.is_empty()),
            error_message: response.error_message,
            candidate_count,
            result: response.results.into_iter().next(),
        }
    }

    /// A result with no data besides the original query
    pub fn empty(address: impl Into<String>) -> Self {
        Self {
            query: address.into(),
            ..Self::default()
        }
    }

    /// Project a response, keeping candidates only when the status is `OK`
    ///
    /// Non-OK responses keep their status and error message so callers can
    /// tell "no match" apart from a failed call.
    pub fn from_response(address: impl Into<String>, response: RawGeocodeResponse) -> Self {
        if response.status == status::OK {
            return Self::new(address, Some(response));
        }

        Self {
            query: address.into(),
            status: Some(response.status).filter(|s| !s.is_empty()),
            error_message: response.error_message,
            candidate_count: 0,
            result: None,
        }
    }

    /// Decode a response body and project it
    ///
    /// Malformed JSON yields an empty result.
    pub fn from_json(address: impl Into<String>, body: &str) -> Self {
        match serde_json::from_str::<RawGeocodeResponse>(body) {
            Ok(response) => Self::from_response(address, response),
            Err(e) => {
                warn!("Failed to decode geocode response: {}", e);
                Self::empty(address)
            }
        }
    }

    /// The address that was queried
    pub fn query(&self) -> &str {
        &self.query
    }

    /// API status, if a response was decoded
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// API error message, if any
    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// True when there is no candidate to read from
    pub fn is_empty(&self) -> bool {
        self.result.is_none()
    }

    /// Number of candidates the API returned; only the first is surfaced
    pub fn candidate_count(&self) -> usize {
        self.candidate_count
    }

    pub fn formatted_address(&self) -> &str {
        self.result
            .as_ref()
            .and_then(|r| r.formatted_address.as_deref())
            .unwrap_or_default()
    }

    fn geometry(&self) -> Option<&Geometry> {
        self.result.as_ref()?.geometry.as_ref()
    }

    pub fn latitude(&self) -> Option<f64> {
        self.geometry()?.location?.lat
    }

    pub fn longitude(&self) -> Option<f64> {
        self.geometry()?.location?.lng
    }

    /// Both coordinates, when both are present
    pub fn coordinates(&self) -> Option<LatLng> {
        Some(LatLng::new(self.latitude()?, self.longitude()?))
    }

    pub fn location_type(&self) -> &str {
        self.geometry()
            .and_then(|g| g.location_type.as_deref())
            .unwrap_or_default()
    }

    /// Recommended viewport for displaying the result
    pub fn viewport(&self) -> Option<&Viewport> {
        self.geometry()?.viewport.as_ref()
    }

    /// Bounding box that fully contains the result, when the API provides one
    pub fn bounds(&self) -> Option<&Viewport> {
        self.geometry()?.bounds.as_ref()
    }

    pub fn place_id(&self) -> &str {
        self.result
            .as_ref()
            .and_then(|r| r.place_id.as_deref())
            .unwrap_or_default()
    }

    pub fn address_components(&self) -> &[AddressComponent] {
        self.result
            .as_ref()
            .map(|r| r.address_components.as_slice())
            .unwrap_or_default()
    }

    pub fn types(&self) -> &[String] {
        self.result
            .as_ref()
            .map(|r| r.types.as_slice())
            .unwrap_or_default()
    }

    pub fn is_partial_match(&self) -> bool {
        self.result
            .as_ref()
            .and_then(|r| r.partial_match)
            .unwrap_or(false)
    }

    /// First address component tagged with `kind`
    pub fn component(&self, kind: &str) -> Option<&AddressComponent> {
        self.address_components().iter().find(|c| c.has_type(kind))
    }

    fn long_name(&self, kind: &str) -> &str {
        self.component(kind)
            .map(|c| c.long_name.as_str())
            .unwrap_or_default()
    }

    pub fn street_number(&self) -> &str {
        self.long_name("street_number")
    }

    /// Street name
    pub fn route(&self) -> &str {
        self.long_name("route")
    }

    pub fn locality(&self) -> &str {
        self.long_name("locality")
    }

    /// Town, used in place of locality in some countries (e.g. UK, Sweden)
    pub fn postal_town(&self) -> &str {
        self.long_name("postal_town")
    }

    /// Second-order administrative area (county)
    pub fn district(&self) -> &str {
        self.long_name("administrative_area_level_2")
    }

    /// First-order administrative area (state, province)
    pub fn region_name(&self) -> &str {
        self.long_name("administrative_area_level_1")
    }

    pub fn country(&self) -> &str {
        self.long_name("country")
    }

    /// ISO 3166-1 country code
    pub fn country_code(&self) -> &str {
        self.component("country")
            .map(|c| c.short_name.as_str())
            .unwrap_or_default()
    }

    pub fn postcode(&self) -> &str {
        self.long_name("postal_code")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADDRESS: &str = "1600 Amphitheatre Parkway";

    const SAMPLE: &str = r#"{
        "status": "OK",
        "results": [
            {
                "formatted_address": "1600 Amphitheatre Pkwy, Mountain View, CA 94043, USA",
                "geometry": {
                    "location": {"lat": 37.4, "lng": -122.1},
                    "location_type": "ROOFTOP",
                    "viewport": {
                        "northeast": {"lat": 37.41, "lng": -122.08},
                        "southwest": {"lat": 37.39, "lng": -122.11}
                    }
                },
                "place_id": "ChIJ2eUgeAK6j4ARbn5u_wAGqWA",
                "address_components": [
                    {"long_name": "1600", "short_name": "1600", "types": ["street_number"]},
                    {"long_name": "Amphitheatre Parkway", "short_name": "Amphitheatre Pkwy", "types": ["route"]},
                    {"long_name": "Mountain View", "short_name": "Mountain View", "types": ["locality", "political"]},
                    {"long_name": "Santa Clara County", "short_name": "Santa Clara County", "types": ["administrative_area_level_2", "political"]},
                    {"long_name": "California", "short_name": "CA", "types": ["administrative_area_level_1", "political"]},
                    {"long_name": "United States", "short_name": "US", "types": ["country", "political"]},
                    {"long_name": "94043", "short_name": "94043", "types": ["postal_code"]}
                ],
                "types": ["street_address"],
                "partial_match": true
            },
            {
                "formatted_address": "Somewhere else"
            }
        ]
    }"#;

    fn assert_empty_defaults(location: &LocationResult) {
        assert_eq!(location.formatted_address(), "");
        assert_eq!(location.latitude(), None);
        assert_eq!(location.longitude(), None);
        assert_eq!(location.coordinates(), None);
        assert_eq!(location.location_type(), "");
        assert_eq!(location.viewport(), None);
        assert_eq!(location.bounds(), None);
        assert_eq!(location.place_id(), "");
        assert!(location.address_components().is_empty());
        assert!(location.types().is_empty());
        assert!(!location.is_partial_match());
        assert_eq!(location.country(), "");
        assert!(location.is_empty());
    }

    #[test]
    fn test_empty_object_defaults() {
        let location = LocationResult::new(ADDRESS, Some(RawGeocodeResponse::default()));
        assert_eq!(location.query(), ADDRESS);
        assert_empty_defaults(&location);
        assert_eq!(location.status(), None);
    }

    #[test]
    fn test_absent_response_defaults() {
        let location = LocationResult::new(ADDRESS, None);
        assert_eq!(location.query(), ADDRESS);
        assert_empty_defaults(&location);
        assert_eq!(location, LocationResult::empty(ADDRESS));
    }

    #[test]
    fn test_full_result_accessors() {
        let location = LocationResult::from_json(ADDRESS, SAMPLE);

        assert_eq!(location.query(), ADDRESS);
        assert_eq!(location.status(), Some("OK"));
        assert_eq!(
            location.formatted_address(),
            "1600 Amphitheatre Pkwy, Mountain View, CA 94043, USA"
        );
        assert_eq!(location.latitude(), Some(37.4));
        assert_eq!(location.longitude(), Some(-122.1));
        assert_eq!(location.coordinates(), Some(LatLng::new(37.4, -122.1)));
        assert_eq!(location.location_type(), "ROOFTOP");
        assert_eq!(location.place_id(), "ChIJ2eUgeAK6j4ARbn5u_wAGqWA");
        assert_eq!(location.types(), ["street_address".to_string()]);
        assert!(location.is_partial_match());
        assert_eq!(location.candidate_count(), 2);
        assert!(!location.is_empty());

        let viewport = location.viewport().unwrap();
        assert_eq!(viewport.northeast, LatLng::new(37.41, -122.08));
        assert_eq!(viewport.southwest, LatLng::new(37.39, -122.11));
        assert_eq!(location.bounds(), None);
    }

    #[test]
    fn test_address_component_accessors() {
        let location = LocationResult::from_json(ADDRESS, SAMPLE);

        assert_eq!(location.address_components().len(), 7);
        let route = &location.address_components()[1];
        assert_eq!(route.long_name, "Amphitheatre Parkway");
        assert_eq!(route.short_name, "Amphitheatre Pkwy");
        assert_eq!(route.types, vec!["route".to_string()]);

        assert_eq!(location.street_number(), "1600");
        assert_eq!(location.route(), "Amphitheatre Parkway");
        assert_eq!(location.locality(), "Mountain View");
        assert_eq!(location.district(), "Santa Clara County");
        assert_eq!(location.region_name(), "California");
        assert_eq!(location.country(), "United States");
        assert_eq!(location.country_code(), "US");
        assert_eq!(location.postcode(), "94043");
        assert_eq!(location.postal_town(), "");
        assert!(location.component("neighborhood").is_none());
    }

    #[test]
    fn test_only_first_candidate_surfaced() {
        let location = LocationResult::from_json(ADDRESS, SAMPLE);
        assert_ne!(location.formatted_address(), "Somewhere else");
    }

    #[test]
    fn test_non_ok_status_keeps_status_only() {
        let body = r#"{
            "status": "REQUEST_DENIED",
            "error_message": "The provided API key is invalid.",
            "results": [{"formatted_address": "ignored"}]
        }"#;
        let location = LocationResult::from_json(ADDRESS, body);

        assert_empty_defaults(&location);
        assert_eq!(location.status(), Some("REQUEST_DENIED"));
        assert_eq!(
            location.error_message(),
            Some("The provided API key is invalid.")
        );
        assert_eq!(location.candidate_count(), 0);
    }

    #[test]
    fn test_zero_results() {
        let body = r#"{"status": "ZERO_RESULTS", "results": []}"#;
        let location = LocationResult::from_json(ADDRESS, body);

        assert_empty_defaults(&location);
        assert_eq!(location.status(), Some(status::ZERO_RESULTS));
        assert_eq!(location.error_message(), None);
    }

    #[test]
    fn test_malformed_json_is_empty() {
        let location = LocationResult::from_json(ADDRESS, "<html>oops</html>");
        assert_eq!(location.query(), ADDRESS);
        assert_empty_defaults(&location);
        assert_eq!(location.status(), None);
    }

    #[test]
    fn test_new_ignores_status() {
        let response: RawGeocodeResponse = serde_json::from_str(
            r#"{"status": "ZERO_RESULTS", "results": [{"place_id": "abc"}]}"#,
        )
        .unwrap();
        let location = LocationResult::new(ADDRESS, Some(response));
        assert_eq!(location.place_id(), "abc");
    }

    #[test]
    fn test_missing_lng_only() {
        let body = r#"{"status": "OK", "results": [{"geometry": {"location": {"lat": 10.0}}}]}"#;
        let location = LocationResult::from_json(ADDRESS, body);
        assert_eq!(location.latitude(), Some(10.0));
        assert_eq!(location.longitude(), None);
        assert_eq!(location.coordinates(), None);
    }

    #[test]
    fn test_viewport_missing_southwest_keeps_other_fields() {
        let body = r#"{
            "status": "OK",
            "results": [{
                "formatted_address": "Paris, France",
                "place_id": "abc",
                "geometry": {
                    "location": {"lat": 48.85, "lng": 2.35},
                    "location_type": "APPROXIMATE",
                    "viewport": {"northeast": {"lat": 48.9, "lng": 2.47}}
                }
            }]
        }"#;
        let location = LocationResult::from_json("Paris", body);

        assert_eq!(location.formatted_address(), "Paris, France");
        assert_eq!(location.place_id(), "abc");
        assert_eq!(location.latitude(), Some(48.85));
        assert_eq!(location.longitude(), Some(2.35));
        assert_eq!(location.location_type(), "APPROXIMATE");
        assert_eq!(location.viewport(), None);
        assert!(!location.is_empty());
    }

    #[test]
    fn test_bounds_missing_coordinate_keeps_viewport() {
        let body = r#"{
            "status": "OK",
            "results": [{
                "geometry": {
                    "viewport": {
                        "northeast": {"lat": 48.9, "lng": 2.47},
                        "southwest": {"lat": 48.8, "lng": 2.22}
                    },
                    "bounds": {
                        "northeast": {"lat": 48.9},
                        "southwest": {"lat": 48.8, "lng": 2.22}
                    }
                }
            }]
        }"#;
        let location = LocationResult::from_json("Paris", body);

        assert_eq!(location.bounds(), None);
        assert_eq!(
            location.viewport().map(|v| v.southwest),
            Some(LatLng::new(48.8, 2.22))
        );
    }

    #[test]
    fn test_null_lists_keep_other_fields() {
        let body = r#"{
            "status": "OK",
            "results": [{
                "formatted_address": "Paris, France",
                "place_id": "abc",
                "types": null,
                "address_components": null,
                "geometry": {"location": {"lat": 48.85, "lng": 2.35}}
            }]
        }"#;
        let location = LocationResult::from_json("Paris", body);

        assert_eq!(location.formatted_address(), "Paris, France");
        assert_eq!(location.place_id(), "abc");
        assert_eq!(location.coordinates(), Some(LatLng::new(48.85, 2.35)));
        assert!(location.types().is_empty());
        assert!(location.address_components().is_empty());
        assert_eq!(location.country(), "");
    }

    #[test]
    fn test_serialize() {
        let location = LocationResult::from_json(ADDRESS, SAMPLE);
        let json = serde_json::to_value(&location).unwrap();

        assert_eq!(json["query"], ADDRESS);
        assert_eq!(json["status"], "OK");
        assert_eq!(json["result"]["geometry"]["location"]["lat"], 37.4);

        let empty = serde_json::to_value(LocationResult::empty(ADDRESS)).unwrap();
        assert!(empty.get("result").is_none());
        assert!(empty.get("status").is_none());
    }
}
