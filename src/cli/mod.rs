//! CLI command handlers
//!
//! Each subcommand has its own module with handler functions.

pub mod config;
pub mod lookup;
pub mod url;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// Geocode addresses with the Google Maps Geocoding API
#[derive(Parser)]
#[command(name = "geocode")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Geocode an address
    Lookup(lookup::LookupArgs),

    /// Print the request URL for an address without sending it
    Url(url::UrlArgs),

    /// Manage configuration
    Config(config::ConfigArgs),
}

/// Run the CLI
pub async fn run() -> crate::error::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    match cli.command {
        Commands::Lookup(args) => lookup::run(args).await,
        Commands::Url(args) => url::run(args),
        Commands::Config(args) => config::run(args),
    }
}
