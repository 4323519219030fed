//! Naming utilities shared by the route generators.
//!
//! # Modules
//!
//! - [`hash`]: Deterministic hashed file names
//! - [`slug`]: Uniqueness-guaranteeing slug generation

pub mod hash;
pub mod slug;
