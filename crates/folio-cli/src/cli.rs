//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Folio - generated category index routes for documentation sites
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, env = "FOLIO_CONFIG")]
    pub config: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate routes for categories with a generated index page
    Routes {
        /// Version description (JSON)
        #[arg(value_name = "VERSION_JSON")]
        version_file: PathBuf,

        /// Directory for generated data files (overrides `data_dir`)
        #[arg(long)]
        out_dir: Option<PathBuf>,

        /// Write the route list here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Keep data files in memory instead of writing them
        #[arg(long)]
        dry_run: bool,
    },

    /// List every category of every sidebar
    Categories {
        /// Version description (JSON)
        #[arg(value_name = "VERSION_JSON")]
        version_file: PathBuf,
    },

    /// Configuration file operations
    Config {
        /// Config operation
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// `folio config` subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show the resolved config file path
    Path,

    /// Print a configuration value by key
    Get {
        /// Key, e.g. `data_dir`
        key: String,
    },

    /// Write a default configuration file
    Init {
        /// Target file (defaults to the platform config path)
        #[arg(short, long)]
        file: Option<String>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
