//! Logging configuration for shrink CLI
//!
//! Provides terminal output and optional file logging using tracing.
//! The per-file "Minifying ..." records are `info` events, so they show up
//! on stdout with the default filter.

use crate::{Error, Result};
use std::io::IsTerminal;
use std::path::Path;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Crates whose events pass the default filter
const LOG_TARGETS: &[&str] = &["shrink", "shrink_cli", "shrink_engine", "shrink_config"];

/// Build the default filter directives for a level
///
/// ```
/// assert_eq!(
///     shrink_config::logging::default_directives("debug"),
///     "shrink=debug,shrink_cli=debug,shrink_engine=debug,shrink_config=debug"
/// );
/// ```
pub fn default_directives(level: &str) -> String {
    LOG_TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Initialize the logging system
///
/// # Arguments
/// * `verbose` - Enable debug level logging and timestamps
/// * `log_file` - Optional path to write logs to a file
///
/// `RUST_LOG` overrides the terminal filter. The file layer always records at
/// debug level.
///
/// # Examples
/// ```ignore
/// // Basic usage with info level
/// init(false, None)?;
///
/// // Write logs to file
/// init(true, Some(Path::new("shrink.log")))?;
/// ```
pub fn init(verbose: bool, log_file: Option<&Path>) -> Result<()> {
    let level = if verbose { "debug" } else { "info" };

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directives(level)))
        .map_err(|e| Error::Message(format!("Invalid log filter: {e}")))?;

    let stdout_layer = fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .with_ansi(std::io::stdout().is_terminal());

    // No timestamps in normal mode
    let stdout_layer = if verbose {
        stdout_layer.boxed()
    } else {
        stdout_layer.without_time().boxed()
    };

    let file_layer = match log_file {
        Some(log_path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(log_path)?;

            let file_filter = EnvFilter::try_new("debug")
                .map_err(|e| Error::Message(format!("Invalid log filter: {e}")))?;

            Some(
                fmt::layer()
                    .with_writer(file)
                    .with_ansi(false)
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true)
                    .pretty()
                    .with_filter(file_filter),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(stdout_layer.with_filter(env_filter))
        .with(file_layer)
        .try_init()
        .map_err(|e| Error::Message(format!("Failed to initialize logging: {e}")))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::panic)]
    use super::*;

    #[test]
    fn test_default_directives_cover_all_crates() {
        let directives = default_directives("info");
        for target in LOG_TARGETS {
            assert!(directives.contains(&format!("{target}=info")));
        }
    }

    #[test]
    fn test_default_directives_parse() {
        assert!(EnvFilter::try_new(default_directives("debug")).is_ok());
    }
}
