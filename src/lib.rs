//! geocode: Address Geocoding Client
//!
//! A library and CLI tool for turning free-form addresses into structured
//! locations with the Google Maps Geocoding API.
//!
//! ## Features
//!
//! - Request URL construction with viewport, region and component biasing
//! - Typed, never-failing accessors over the first geocode match
//! - Pluggable HTTP transport (reqwest by default)
//! - CLI with JSON, text and map-link output
//!
//! ## Quick Start
//!
//! ```rust
//! use geocode::query::{build_request_url, GeocodeOptions};
//! use geocode::location::LocationResult;
//!
//! let options = GeocodeOptions::new()
//!     .region("us")
//!     .component("country", "US");
//! let url = build_request_url("", "1600 Amphitheatre Parkway", &options, "false").unwrap();
//! assert!(url.contains("&region=us&components=country:US"));
//!
//! // Body returned by the API for that URL
//! let body = r#"{"status": "OK", "results": [{"geometry": {"location": {"lat": 37.4, "lng": -122.1}}}]}"#;
//! let location = LocationResult::from_json("1600 Amphitheatre Parkway", body);
//! assert_eq!(location.latitude(), Some(37.4));
//! assert_eq!(location.formatted_address(), "");
//! ```

pub mod cli;
pub mod client;
pub mod config;
pub mod constants;
pub mod error;
pub mod format;
pub mod location;
pub mod query;

// Re-export commonly used types
pub use client::{Geocoder, Transport};
pub use config::Config;
pub use error::{Error, Result};
pub use location::{AddressComponent, LatLng, LocationResult, RawGeocodeResponse, Viewport};
pub use query::GeocodeOptions;
