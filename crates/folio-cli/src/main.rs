//! Folio CLI
//!
//! Generates category index routes for documentation versions.

#![warn(clippy::all)]
#![forbid(unsafe_code)]

use anyhow::Result;
use clap::Parser;
use folio_cli::cli::{Cli, Command};
use folio_cli::commands::{RoutesOptions, cmd_categories, cmd_routes};
use folio_cli::config_handlers::handle_config_command;
use folio_cli::{FolioConfig, logging};

#[tokio::main]
async fn main() -> Result<()> {
    dispatch(Cli::parse()).await
}

async fn dispatch(cli: Cli) -> Result<()> {
    let config_path = cli.config.as_deref();

    let result = match cli.command {
        // Config commands print plain output and run without a subscriber.
        Command::Config { action } => return Ok(handle_config_command(config_path, action)?),
        Command::Routes {
            version_file,
            out_dir,
            output,
            dry_run,
        } => {
            let config = setup(config_path, cli.verbose)?;
            let options = RoutesOptions {
                version: version_file,
                out_dir,
                output,
                dry_run,
            };
            cmd_routes(&config, options).await
        }
        Command::Categories { version_file } => {
            setup(config_path, cli.verbose)?;
            cmd_categories(&version_file).await
        }
    };

    if let Err(e) = &result {
        tracing::error!("{e}");
    }
    Ok(result?)
}

/// Load the configuration and install the log subscriber.
fn setup(config_path: Option<&str>, verbose: bool) -> Result<FolioConfig> {
    let config = FolioConfig::load(config_path)?;
    logging::init(verbose, &config.log_level)?;
    tracing::debug!(data_dir = %config.data_dir.display(), "Configuration loaded");
    Ok(config)
}
