//! CLI command implementations

pub mod minify;
