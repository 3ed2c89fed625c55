//! Request URL assembly
//!
//! All functions here are pure: identical inputs always produce the same string.

use crate::constants::api::{PLAIN_SCHEME, SECURE_SCHEME, SERVICE_PATH};
use crate::error::{Error, Result};
use crate::query::GeocodeOptions;

/// Base endpoint for the given API key
///
/// A non-empty key selects the secure endpoint and is appended as `key=`;
/// otherwise the plain endpoint is returned without a key.
pub fn build_service_url(api_key: &str) -> String {
    if api_key.is_empty() {
        format!("{}{}", PLAIN_SCHEME, SERVICE_PATH)
    } else {
        format!("{}{}key={}", SECURE_SCHEME, SERVICE_PATH, api_key)
    }
}

/// Serialize the present options as `&name=value` fragments
///
/// Order is fixed: bounds, region, components. Absent options are omitted.
pub fn build_options_query(options: &GeocodeOptions) -> Result<String> {
    let mut query = String::new();

    if let Some(bounds) = &options.bounds {
        let [first, second] = bounds.as_slice() else {
            return Err(Error::InvalidViewport(format!(
                "expected 2 coordinate pairs, got {}",
                bounds.len()
            )));
        };
        let (first, second) = match (first.as_slice(), second.as_slice()) {
            ([lat1, lng1], [lat2, lng2]) => ((lat1, lng1), (lat2, lng2)),
            _ => {
                return Err(Error::InvalidViewport(format!(
                    "each pair needs 2 values, got {} and {}",
                    first.len(),
                    second.len()
                )));
            }
        };
        query.push_str(&format!(
            "&bounds={},{}|{},{}",
            first.0, first.1, second.0, second.1
        ));
    }

    if let Some(region) = &options.region {
        query.push_str(&format!("&region={}", urlencoding::encode(region)));
    }

    if !options.components.is_empty() {
        let components = options
            .components
            .iter()
            .map(|(kind, value)| format!("{}:{}", kind, urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("|");
        query.push_str(&format!("&components={}", components));
    }

    Ok(query)
}

/// Full request URL for an address
///
/// Fails with [`Error::MissingAddress`] for a blank address and with
/// [`Error::InvalidViewport`] for malformed bounds. No partial URL is returned.
pub fn build_request_url(
    api_key: &str,
    address: &str,
    options: &GeocodeOptions,
    sensor: &str,
) -> Result<String> {
    if address.trim().is_empty() {
        return Err(Error::MissingAddress);
    }

    Ok(format!(
        "{}&address={}{}&sensor={}",
        build_service_url(api_key),
        urlencoding::encode(address),
        build_options_query(options)?,
        urlencoding::encode(sensor)
    ))
}

/// Mask the API key in a request URL, for logging
pub fn redact_key(url: &str) -> String {
    let Some(start) = url.find("?key=").map(|i| i + "?key=".len()) else {
        return url.to_string();
    };
    let end = url[start..].find('&').map_or(url.len(), |i| start + i);
    format!("{}***{}", &url[..start], &url[end..])
}
