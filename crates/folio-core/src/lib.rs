//! Folio Core: shared errors and naming utilities.
//!
//! This crate provides the foundational types used across all Folio crates.
//! It has no internal Folio dependencies (dependency level 0).
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`util`]: Slug and hashed file name utilities

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod util;

// Re-export key types at crate root for convenience
pub use error::{Error, Result};

pub use util::hash::{docu_hash, kebab_case, simple_hash};
pub use util::slug::Slugger;
