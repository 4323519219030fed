//! # folio-cli
//!
//! Command-line front end for Folio.
//!
//! - `folio routes`: generate category index routes and their data files
//! - `folio categories`: list the categories of every sidebar
//! - `folio config`: inspect and initialise the configuration file

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_handlers;
pub mod logging;

pub use config::FolioConfig;
