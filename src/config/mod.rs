//! Configuration management
//!
//! Loads and saves configuration from XDG-compliant paths.
//! Config location: ~/.config/geocode/config.toml

pub mod defaults;

use crate::error::{Error, Result};
use defaults::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Geocoding API settings
    #[serde(default)]
    pub api: ApiConfig,

    /// Default values for lookups
    #[serde(default)]
    pub defaults: DefaultsConfig,

    /// HTTP transport settings
    #[serde(default)]
    pub http: HttpConfig,
}

/// Geocoding API settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiConfig {
    /// API key; empty means keyless requests over plain http
    #[serde(default)]
    pub key: String,

    /// Value of the `sensor` request parameter
    #[serde(default)]
    pub sensor: bool,
}

/// Default values for lookups
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Region code used when none is given; empty means no region biasing
    #[serde(default)]
    pub region: String,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: String,
}

/// HTTP transport settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User-Agent header
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

// Default value functions for serde
fn default_format() -> String {
    DEFAULT_FORMAT.to_string()
}
fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}
fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            region: String::new(),
            format: default_format(),
        }
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|p| p.join(APP_DIR_NAME))
            .ok_or_else(|| Error::Config("Could not determine config directory".to_string()))
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE_NAME))
    }

    /// Load configuration from the default path
    ///
    /// Creates default config if file doesn't exist
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from a specific path, creating it if missing
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = fs::read_to_string(path).map_err(|e| {
                Error::Config(format!("Failed to read config file: {}", e))
            })?;

            toml::from_str(&content).map_err(|e| {
                Error::Config(format!("Failed to parse config file: {}", e))
            })
        } else {
            let config = Config::default();
            config.save_to(path)?;
            Ok(config)
        }
    }

    /// Save configuration to the default path
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                Error::Config(format!("Failed to create config directory: {}", e))
            })?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            Error::Config(format!("Failed to serialize config: {}", e))
        })?;

        fs::write(path, content).map_err(|e| {
            Error::Config(format!("Failed to write config file: {}", e))
        })?;

        Ok(())
    }

    /// Get a configuration value by key path
    ///
    /// Key format: "section.key"
    /// Returns the value as a string, or None if not found
    pub fn get(&self, key: &str) -> Option<String> {
        let parts: Vec<&str> = key.split('.').collect();

        match parts.as_slice() {
            ["api", "key"] => Some(self.api.key.clone()),
            ["api", "sensor"] => Some(self.api.sensor.to_string()),

            ["defaults", "region"] => Some(self.defaults.region.clone()),
            ["defaults", "format"] => Some(self.defaults.format.clone()),

            ["http", "timeout_secs"] => Some(self.http.timeout_secs.to_string()),
            ["http", "user_agent"] => Some(self.http.user_agent.clone()),

            _ => None,
        }
    }

    /// Set a configuration value by key path
    ///
    /// Returns error if key is invalid or value type is wrong
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let parts: Vec<&str> = key.split('.').collect();

        match parts.as_slice() {
            ["api", "key"] => {
                self.api.key = value.to_string();
            }
            ["api", "sensor"] => {
                self.api.sensor = value.parse().map_err(|_| {
                    Error::Config(format!("Invalid boolean value: {}", value))
                })?;
            }

            ["defaults", "region"] => {
                self.defaults.region = value.to_string();
            }
            ["defaults", "format"] => {
                self.defaults.format = value.to_string();
            }

            ["http", "timeout_secs"] => {
                self.http.timeout_secs = value.parse().map_err(|_| {
                    Error::Config(format!("Invalid timeout value: {}", value))
                })?;
            }
            ["http", "user_agent"] => {
                self.http.user_agent = value.to_string();
            }

            _ => {
                return Err(Error::Config(format!("Unknown config key: {}", key)));
            }
        }

        Ok(())
    }

    /// List all available config keys
    pub fn available_keys() -> Vec<&'static str> {
        vec![
            "api.key",
            "api.sensor",
            "defaults.region",
            "defaults.format",
            "http.timeout_secs",
            "http.user_agent",
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.api.key, "");
        assert!(!config.api.sensor);
        assert_eq!(config.defaults.region, "");
        assert_eq!(config.defaults.format, "text");
        assert_eq!(config.http.timeout_secs, 10);
        assert!(config.http.user_agent.starts_with("geocode/"));
    }

    #[test]
    fn test_get_set() {
        let mut config = Config::default();

        assert_eq!(config.get("api.sensor"), Some("false".to_string()));

        config.set("api.key", "ABC123").unwrap();
        assert_eq!(config.get("api.key"), Some("ABC123".to_string()));

        config.set("api.sensor", "true").unwrap();
        assert!(config.api.sensor);

        config.set("http.timeout_secs", "30").unwrap();
        assert_eq!(config.get("http.timeout_secs"), Some("30".to_string()));
        assert_eq!(config.http.timeout_secs, 30);
    }

    #[test]
    fn test_get_invalid_key() {
        let config = Config::default();
        assert_eq!(config.get("invalid.key"), None);
    }

    #[test]
    fn test_set_invalid_key() {
        let mut config = Config::default();
        let result = config.set("invalid.key", "value");
        assert!(result.is_err());
    }

    #[test]
    fn test_set_invalid_value() {
        let mut config = Config::default();
        assert!(config.set("http.timeout_secs", "soon").is_err());
        assert!(config.set("api.sensor", "maybe").is_err());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("geocode").join("config.toml");

        let mut config = Config::default();
        config.api.key = "ABC123".to_string();
        config.defaults.region = "es".to_string();
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.api.key, "ABC123");
        assert_eq!(loaded.defaults.region, "es");
    }

    #[test]
    fn test_load_creates_default() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");

        let config = Config::load_from(&path).unwrap();
        assert!(path.exists());
        assert_eq!(config.defaults.format, "text");
    }

    #[test]
    fn test_load_partial_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "[api]\nkey = \"XYZ\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.api.key, "XYZ");
        assert_eq!(config.http.timeout_secs, 10);
    }

    #[test]
    fn test_load_invalid_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "not = [valid").unwrap();

        assert!(matches!(Config::load_from(&path), Err(Error::Config(_))));
    }

    #[test]
    fn test_serialization_format() {
        let config = Config::default();
        let toml = toml::to_string_pretty(&config).unwrap();

        assert!(toml.contains("[api]"));
        assert!(toml.contains("[defaults]"));
        assert!(toml.contains("[http]"));
    }

    #[test]
    fn test_available_keys() {
        let keys = Config::available_keys();
        assert!(keys.contains(&"api.key"));
        assert!(keys.contains(&"defaults.region"));
        assert!(keys.contains(&"http.timeout_secs"));
    }
}
