//! Data sinks for generated route payloads.
//!
//! Route generation never touches the file system directly. Every payload
//! goes through a [`DataSink`], which decides where it lives and returns the
//! reference a route uses to load it.
//!
//! # Sinks
//!
//! - [`FsDataSink`]: writes one file per payload under a base directory
//! - [`MemoryDataSink`]: keeps payloads in memory (tests, dry runs)

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use folio_core::{Error, Result};
use tokio::sync::RwLock;

/// Destination for generated data payloads.
#[async_trait]
pub trait DataSink: Send + Sync {
    /// Persist `content` under `file_name` and return its module reference.
    ///
    /// `file_name` is a single path segment; implementations reject names
    /// that would escape their storage root.
    async fn create_data(&self, file_name: &str, content: &str) -> Result<String>;
}

fn validate_file_name(file_name: &str) -> Result<()> {
    if file_name.is_empty()
        || file_name == "."
        || file_name == ".."
        || file_name.contains(['/', '\\'])
    {
        return Err(Error::sink(format!("Invalid data file name: '{file_name}'")));
    }
    Ok(())
}

// ============================================================================
// FsDataSink
// ============================================================================

/// Writes payloads as files under a base directory.
///
/// The directory is created on first write. The returned reference is the
/// written file's path.
#[derive(Debug, Clone)]
pub struct FsDataSink {
    base_dir: PathBuf,
}

impl FsDataSink {
    /// Creates a sink rooted at `base_dir`.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Directory payloads are written to.
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }
}

#[async_trait]
impl DataSink for FsDataSink {
    async fn create_data(&self, file_name: &str, content: &str) -> Result<String> {
        validate_file_name(file_name)?;

        tokio::fs::create_dir_all(&self.base_dir)
            .await
            .map_err(|e| Error::io_with_path(e, &self.base_dir))?;

        let path = self.base_dir.join(file_name);
        tokio::fs::write(&path, content)
            .await
            .map_err(|e| Error::io_with_path(e, &path))?;

        log::trace!("Wrote {} bytes to {}", content.len(), path.display());
        Ok(path.display().to_string())
    }
}

// ============================================================================
// MemoryDataSink
// ============================================================================

/// Keeps payloads in memory, keyed by file name.
///
/// References have the form `"{prefix}/{file_name}"`.
#[derive(Debug)]
pub struct MemoryDataSink {
    prefix: String,
    files: RwLock<BTreeMap<String, String>>,
}

impl MemoryDataSink {
    /// Default reference prefix.
    pub const DEFAULT_PREFIX: &'static str = "@generated";

    /// Creates an empty sink using [`Self::DEFAULT_PREFIX`].
    pub fn new() -> Self {
        Self::with_prefix(Self::DEFAULT_PREFIX)
    }

    /// Creates an empty sink whose references start with `prefix`.
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            files: RwLock::new(BTreeMap::new()),
        }
    }

    /// Content stored under `file_name`, if any.
    pub async fn get(&self, file_name: &str) -> Option<String> {
        self.files.read().await.get(file_name).cloned()
    }

    /// Names of every stored payload, sorted.
    pub async fn file_names(&self) -> Vec<String> {
        self.files.read().await.keys().cloned().collect()
    }

    /// Number of stored payloads.
    pub async fn len(&self) -> usize {
        self.files.read().await.len()
    }

    /// Whether no payload has been stored.
    pub async fn is_empty(&self) -> bool {
        self.files.read().await.is_empty()
    }
}

impl Default for MemoryDataSink {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DataSink for MemoryDataSink {
    async fn create_data(&self, file_name: &str, content: &str) -> Result<String> {
        validate_file_name(file_name)?;
        self.files
            .write()
            .await
            .insert(file_name.to_string(), content.to_string());
        Ok(format!("{}/{file_name}", self.prefix))
    }
}
