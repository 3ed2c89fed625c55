//! Error types for geocode

use thiserror::Error;

/// Main error type for geocode operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("Address is required in order to process")]
    MissingAddress,

    #[error("Viewport format is invalid: {0}")]
    InvalidViewport(String),

    #[error("Invalid component filter: {0}")]
    InvalidComponent(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Geocoding error: {0}")]
    Geocoding(String),
}

/// Result type alias for geocode operations
pub type Result<T> = std::result::Result<T, Error>;
