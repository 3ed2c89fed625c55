//! Config command handler
//!
//! View and modify configuration settings.

use crate::config::Config;
use crate::error::{Error, Result};
use clap::Args;

/// Config command arguments
#[derive(Args)]
pub struct ConfigArgs {
    /// Configuration key (e.g., "defaults.region")
    pub key: Option<String>,

    /// Value to set (if not provided, shows current value)
    pub value: Option<String>,

    /// Show config file path
    #[arg(long)]
    pub path: bool,

    /// Reset config to defaults
    #[arg(long)]
    pub reset: bool,
}

/// Run the config command
pub fn run(args: ConfigArgs) -> Result<()> {
    if args.path {
        println!("{}", Config::config_path()?.display());
        return Ok(());
    }

    if args.reset {
        Config::default().save()?;
        println!("Configuration reset to defaults");
        return Ok(());
    }

    let mut config = Config::load()?;

    match (args.key.as_deref(), args.value.as_deref()) {
        (None, None) => show_all_config(&config),

        (Some(key), None) => {
            let value = config.get(key).ok_or_else(|| {
                Error::Config(format!(
                    "Unknown config key: {} (available: {})",
                    key,
                    Config::available_keys().join(", ")
                ))
            })?;
            println!("{}", value);
        }

        (Some(key), Some(value)) => {
            config.set(key, value)?;
            config.save()?;
            if key == "api.key" {
                println!("{} = ***", key);
            } else {
                println!("{} = {}", key, value);
            }
        }

        (None, Some(_)) => {
            return Err(Error::Config(
                "Must specify a key to set a value".to_string(),
            ));
        }
    }

    Ok(())
}

/// Display all configuration values
fn show_all_config(config: &Config) {
    println!("[api]");
    if config.api.key.is_empty() {
        println!("key = \"\" # not configured");
    } else {
        println!("key = \"***\" # configured");
    }
    println!("sensor = {}", config.api.sensor);
    println!();

    println!("[defaults]");
    println!("region = \"{}\"", config.defaults.region);
    println!("format = \"{}\"", config.defaults.format);
    println!();

    println!("[http]");
    println!("timeout_secs = {}", config.http.timeout_secs);
    println!("user_agent = \"{}\"", config.http.user_agent);
}
