//! Default configuration values
//!
//! Named constants for all tunable parameters

/// Default output format
pub const DEFAULT_FORMAT: &str = "text";

/// Default HTTP request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Default User-Agent header
pub const DEFAULT_USER_AGENT: &str = concat!("geocode/", env!("CARGO_PKG_VERSION"));

/// Config file name
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Application directory name (for XDG paths)
pub const APP_DIR_NAME: &str = "geocode";
