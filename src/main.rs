#![allow(dead_code)]

mod cli;
mod config;
mod docs;
mod http;
mod logging;
mod state;
mod types;

use clap::Parser;
use tracing::{error, info};

use crate::cli::{Cli, Commands};
use crate::types::Result;

#[tokio::main]
async fn main() -> Result<()> {
    // Pick up PORT and friends from a local .env if present
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Configuration is needed before logging for level/format defaults.
    // A load failure here is deferred so it gets reported through the
    // initialized logger below.
    let config = cli.load_config();

    logging::init(
        if cli.log_level.is_some() || cli.verbose || cli.quiet {
            Some(cli.log_level_to_str())
        } else {
            None
        },
        cli.log_format_override(),
        config.as_ref().ok(),
    )?;

    info!("Starting webhook-inspector");

    let result = match cli.command.clone().unwrap_or(Commands::Run) {
        Commands::Run => match config {
            Ok(config) => cli::run_server(&cli, Some(config)).await,
            Err(e) => Err(e),
        },
        Commands::Validate => cli::validate_config(&cli).await,
        Commands::Openapi => cli::print_openapi(&cli).await,
        Commands::Version => cli::show_version().await,
    };

    if let Err(e) = &result {
        error!(error = %e, "Fatal error");
    }
    result
}
