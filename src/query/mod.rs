//! Request construction for the geocoding API
//!
//! `GeocodeOptions` carries the optional biasing parameters (viewport bounds,
//! region code, component filters). The functions in [`url`] turn an address
//! plus options into a fully encoded request URL without doing any I/O.

pub mod url;

pub use url::{build_options_query, build_request_url, build_service_url, redact_key};

use crate::error::{Error, Result};
use crate::location::LatLng;

/// Optional request parameters
///
/// `bounds` is kept in its raw nested form so that a malformed viewport is
/// reported by [`build_options_query`] instead of being silently reshaped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeocodeOptions {
    /// Two `[lat, lng]` pairs describing the viewport to bias towards
    pub bounds: Option<Vec<Vec<f64>>>,

    /// Two-letter region code (ccTLD)
    pub region: Option<String>,

    /// Component filters as `(type, value)` in insertion order
    pub components: Vec<(String, String)>,
}

impl GeocodeOptions {
    /// Create an empty options bag
    pub fn new() -> Self {
        Self::default()
    }

    /// Set raw viewport bounds
    pub fn bounds(mut self, bounds: Vec<Vec<f64>>) -> Self {
        self.bounds = Some(bounds);
        self
    }

    /// Set viewport bounds from two corners
    pub fn viewport(self, first: LatLng, second: LatLng) -> Self {
        self.bounds(vec![
            vec![first.lat, first.lng],
            vec![second.lat, second.lng],
        ])
    }

    /// Set the region code
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Append a component filter
    pub fn component(mut self, kind: impl Into<String>, value: impl Into<String>) -> Self {
        self.components.push((kind.into(), value.into()));
        self
    }

    /// True when no option would be serialized
    pub fn is_empty(&self) -> bool {
        self.bounds.is_none() && self.region.is_none() && self.components.is_empty()
    }
}

/// Parse viewport text of the form `lat,lng|lat,lng`
///
/// Only number parsing is checked here; the pair count is validated when the
/// query is built.
pub fn parse_bounds(text: &str) -> Result<Vec<Vec<f64>>> {
    text.split('|')
        .map(|pair| {
            pair.split(',')
                .map(|value| {
                    value
                        .trim()
                        .parse::<f64>()
                        .ok()
                        .filter(|v| v.is_finite())
                        .ok_or_else(|| {
                            Error::InvalidViewport(format!("not a number: '{}'", value.trim()))
                        })
                })
                .collect()
        })
        .collect()
}

/// Parse a component filter of the form `type:value`
pub fn parse_component(text: &str) -> Result<(String, String)> {
    match text.split_once(':') {
        Some((kind, value)) if !kind.trim().is_empty() => {
            Ok((kind.trim().to_string(), value.to_string()))
        }
        _ => Err(Error::InvalidComponent(format!(
            "expected type:value, got '{}'",
            text
        ))),
    }
}
