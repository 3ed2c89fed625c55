//! Lookup command handler
//!
//! Geocodes an address and prints the first result.

use crate::client::Geocoder;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::format::{available_formats, get_formatter};
use crate::query::{parse_bounds, parse_component, GeocodeOptions};
use clap::Args;

/// Address and request options shared by `lookup` and `url`
#[derive(Args, Debug)]
pub struct QueryArgs {
    /// Address to geocode
    pub address: Option<String>,

    /// API key (overrides api.key from config)
    #[arg(long, short = 'k', env = "GEOCODE_API_KEY", hide_env_values = true)]
    pub key: Option<String>,

    /// Region code to bias results (e.g. "es")
    #[arg(long, short = 'r')]
    pub region: Option<String>,

    /// Viewport to bias results: "lat,lng|lat,lng"
    #[arg(long)]
    pub bounds: Option<String>,

    /// Component filter "type:value" (repeatable)
    #[arg(long = "component", short = 'c')]
    pub components: Vec<String>,

    /// Send sensor=true
    #[arg(long)]
    pub sensor: bool,
}

impl QueryArgs {
    /// Build request options, falling back to config defaults
    pub fn options(&self, config: &Config) -> Result<GeocodeOptions> {
        let mut options = GeocodeOptions::new();

        if let Some(bounds) = &self.bounds {
            options = options.bounds(parse_bounds(bounds)?);
        }

        let region = self
            .region
            .clone()
            .unwrap_or_else(|| config.defaults.region.clone());
        if !region.is_empty() {
            options = options.region(region);
        }

        for component in &self.components {
            let (kind, value) = parse_component(component)?;
            options = options.component(kind, value);
        }

        Ok(options)
    }

    /// Apply command-line overrides to the loaded config
    pub fn apply(&self, config: &mut Config) {
        if let Some(key) = &self.key {
            config.api.key = key.clone();
        }
        if self.sensor {
            config.api.sensor = true;
        }
    }

    /// The address argument, required for any request
    pub fn address(&self) -> Result<&str> {
        self.address.as_deref().ok_or(Error::MissingAddress)
    }
}

/// Lookup command arguments
#[derive(Args, Debug)]
pub struct LookupArgs {
    #[command(flatten)]
    pub query: QueryArgs,

    /// Output format
    #[arg(long, short = 'f')]
    pub format: Option<String>,

    /// List available formats
    #[arg(short = 'F', long = "list-formats")]
    pub list_formats: bool,
}

impl LookupArgs {
    /// Output format from `--format`, falling back to the configured default
    pub fn format_name(&self, config: &Config) -> String {
        self.format
            .as_deref()
            .unwrap_or(&config.defaults.format)
            .to_string()
    }
}

/// Run the lookup command
pub async fn run(args: LookupArgs) -> Result<()> {
    if args.list_formats {
        list_formats();
        return Ok(());
    }

    let mut config = Config::load()?;
    args.query.apply(&mut config);

    let format = args.format_name(&config);
    let formatter = get_formatter(&format)
        .ok_or_else(|| Error::Config(format!("Unknown format: {}", format)))?;

    let address = args.query.address()?;
    let options = args.query.options(&config)?;

    let geocoder = Geocoder::from_config(&config)?;
    let location = geocoder.get(address, &options).await?;

    if location.is_empty() {
        match location.status() {
            Some(status) => eprintln!("No result for '{}' (status {})", address, status),
            None => eprintln!("No result for '{}'", address),
        }
    }

    println!("{}", formatter.format(&location)?);

    Ok(())
}

/// Print available output formats
fn list_formats() {
    println!("Available output formats:");
    for format in available_formats() {
        println!("  {:6} - {}", format.name, format.description);
    }
}
