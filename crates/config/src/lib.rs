//! Configuration management for shrink
//!
//! This crate handles:
//! - Configuration loading (`.shrink.toml`) and validation
//! - Logging initialization

pub mod config;
pub mod logging;

// Re-export error types from core
pub use shrink_core::{Error, Result};

// Re-export main types
pub use config::{CONFIG_FILE_NAME, Config, DEFAULT_ROOT, GeneralConfig, RunConfig};
pub use shrink_core::MinifyOptions;
