//! Folio configuration file.
//!
//! Resolution order:
//!
//! 1. `--config <PATH>` (or the `FOLIO_CONFIG` environment variable)
//! 2. `<platform config dir>/folio/config.toml`
//! 3. Built-in defaults
//!
//! An explicitly given file must exist; the platform file is optional.

use std::path::{Path, PathBuf};

use folio_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// Name used for the platform config directory.
pub const PROJECT_NAME: &str = "folio";

/// Folio settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FolioConfig {
    /// Directory generated data files are written to.
    pub data_dir: PathBuf,

    /// Default log filter when `RUST_LOG` is unset.
    pub log_level: String,
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(".folio/data"),
            log_level: "info".to_string(),
        }
    }
}

impl FolioConfig {
    /// Platform default location of the config file.
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(PROJECT_NAME).join("config.toml"))
    }

    /// The config file that [`FolioConfig::load`] would read.
    pub fn resolve_config_path(explicit: Option<&str>) -> Option<PathBuf> {
        match explicit {
            Some(path) => Some(PathBuf::from(path)),
            None => Self::default_config_path(),
        }
    }

    /// Load the configuration, falling back to defaults when no file exists.
    pub fn load(explicit: Option<&str>) -> Result<Self> {
        match explicit {
            Some(path) => Self::from_file(Path::new(path)),
            None => match Self::default_config_path() {
                Some(path) if path.exists() => Self::from_file(&path),
                _ => {
                    log::debug!("No config file found, using defaults");
                    Ok(Self::default())
                }
            },
        }
    }

    /// Parse a config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
        let config = Self::from_toml_str(&content)
            .map_err(|e| Error::config(format!("{}: {e}", path.display())))?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse config TOML.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::config(format!("Invalid config: {e}")))
    }

    /// Serialise to pretty TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }
}
