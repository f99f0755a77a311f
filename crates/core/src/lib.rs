//! Core types and utilities for shrink
//!
//! This is the foundation crate that all other shrink crates depend on.
//! It provides:
//! - Path types (AbsPath, RelPath)
//! - Base error types
//! - Minification options shared by config, engine and CLI
//!
//! This crate has no dependencies on other shrink crates.

pub mod error;
pub mod options;
pub mod path;

pub use error::{Error, Result};
pub use options::MinifyOptions;
