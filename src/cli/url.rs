//! URL command handler
//!
//! Prints the request URL for an address. No request is sent.

use crate::cli::lookup::QueryArgs;
use crate::config::Config;
use crate::error::Result;
use crate::query::{build_request_url, build_service_url};
use clap::Args;

/// URL command arguments
#[derive(Args, Debug)]
pub struct UrlArgs {
    #[command(flatten)]
    pub query: QueryArgs,

    /// Print only the base service URL
    #[arg(long)]
    pub service: bool,
}

/// Run the url command
pub fn run(args: UrlArgs) -> Result<()> {
    let mut config = Config::load()?;
    args.query.apply(&mut config);

    println!("{}", render(&args, &config)?);

    Ok(())
}

/// The URL to print for these arguments; never touches the network
fn render(args: &UrlArgs, config: &Config) -> Result<String> {
    if args.service {
        return Ok(build_service_url(&config.api.key));
    }

    build_request_url(
        &config.api.key,
        args.query.address()?,
        &args.query.options(config)?,
        &config.api.sensor.to_string(),
    )
}
