//! Centralized constants for the geocode crate

/// External API endpoints
pub mod api {
    /// Geocoding endpoint without scheme; the scheme depends on whether a key is used
    pub const SERVICE_PATH: &str = "://maps.googleapis.com/maps/api/geocode/json?";

    /// Scheme used when an API key is supplied
    pub const SECURE_SCHEME: &str = "https";

    /// Scheme used for keyless requests
    pub const PLAIN_SCHEME: &str = "http";

    /// Google Maps link for a coordinate pair
    pub const MAPS_LINK_URL: &str = "https://www.google.com/maps/search/?api=1&query=";
}

/// Geocoding API response values
pub mod status {
    /// The only status that carries usable results
    pub const OK: &str = "OK";

    /// Valid request, no matches
    pub const ZERO_RESULTS: &str = "ZERO_RESULTS";
}

/// Value of the `sensor` parameter when the caller does not give one
pub const DEFAULT_SENSOR: &str = "false";
