//! Wire model of the geocoding API response
//!
//! Decoding is lenient: a field that is missing, `null` or of the wrong shape
//! falls back to its empty value without failing the rest of the payload.
//! A viewport or bounds box is only kept when both corners are complete.
//!
//! Example body:
//! `{"status": "OK", "results": [{"formatted_address": "...", "geometry": {...}}]}`

use serde::de::{DeserializeOwned, Deserializer};
use serde::{Deserialize, Serialize};

/// Decode a field as `Some(T)`, or `None` if it is null or malformed
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| serde_json::from_value(v).ok()))
}

/// Decode a field as `T`, or `T::default()` if it is null or malformed
fn lenient_or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    Ok(lenient(deserializer)?.unwrap_or_default())
}

/// A latitude/longitude pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    /// Create a new coordinate pair
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Rectangular region given by its north-east and south-west corners
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub northeast: LatLng,
    pub southwest: LatLng,
}

/// Decoded API payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawGeocodeResponse {
    /// `OK`, `ZERO_RESULTS`, `REQUEST_DENIED`, ...
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub status: String,

    #[serde(default, deserialize_with = "lenient_or_default")]
    pub results: Vec<GeocodeCandidate>,

    /// Present on error statuses
    #[serde(
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub error_message: Option<String>,
}

/// One geocode match
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeocodeCandidate {
    #[serde(
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub formatted_address: Option<String>,

    #[serde(
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub geometry: Option<Geometry>,

    #[serde(
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub place_id: Option<String>,

    #[serde(default, deserialize_with = "lenient_or_default")]
    pub address_components: Vec<AddressComponent>,

    #[serde(default, deserialize_with = "lenient_or_default")]
    pub types: Vec<String>,

    #[serde(
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub partial_match: Option<bool>,
}

/// Geometry block of a match
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    #[serde(
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub location: Option<GeometryLocation>,

    /// `ROOFTOP`, `RANGE_INTERPOLATED`, `GEOMETRIC_CENTER` or `APPROXIMATE`
    #[serde(
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub location_type: Option<String>,

    #[serde(
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub viewport: Option<Viewport>,

    #[serde(
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub bounds: Option<Viewport>,
}

/// Point location where either coordinate may be missing
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GeometryLocation {
    #[serde(default, deserialize_with = "lenient")]
    pub lat: Option<f64>,

    #[serde(default, deserialize_with = "lenient")]
    pub lng: Option<f64>,
}

/// A structured piece of the formatted address
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AddressComponent {
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub long_name: String,

    #[serde(default, deserialize_with = "lenient_or_default")]
    pub short_name: String,

    #[serde(default, deserialize_with = "lenient_or_default")]
    pub types: Vec<String>,
}

impl AddressComponent {
    /// Whether this component is tagged with the given type
    pub fn has_type(&self, kind: &str) -> bool {
        self.types.iter().any(|t| t == kind)
    }
}
