//! Error types for folio-core

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type alias for Folio operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur across the Folio crates.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// I/O error tied to a specific file or directory
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        /// Path being read or written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input could not be parsed into the expected shape
    #[error("Parse error: {0}")]
    Parse(String),

    /// A data sink refused or failed to persist a payload
    #[error("Data sink error: {0}")]
    Sink(String),
}

impl Error {
    /// Creates an I/O error annotated with the path that caused it.
    pub fn io_with_path(source: std::io::Error, path: impl AsRef<Path>) -> Self {
        Error::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Creates a new configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config(message.into())
    }

    /// Creates a new parse error.
    pub fn parse<S: Into<String>>(message: S) -> Self {
        Error::Parse(message.into())
    }

    /// Creates a new data sink error.
    pub fn sink<S: Into<String>>(message: S) -> Self {
        Error::Sink(message.into())
    }
}
