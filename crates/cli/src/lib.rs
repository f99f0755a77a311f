//! Shrink CLI library
//!
//! This library contains all the CLI logic for shrink, making it reusable
//! for testing and integration with other tools.

pub mod cmd;
pub mod command;
pub mod common;
pub mod error;
pub mod stats;

use anyhow::{Context, Result};
use clap::Parser;
use std::io::IsTerminal;
use std::path::PathBuf;

use cmd::minify::MinifyCommand;
use command::Command;
use common::{RuntimeContext, load_config};
use error::CommandError;

/// Shrink - minify every HTML file under a directory, in place
#[derive(Debug, Parser)]
#[command(name = "shrink")]
#[command(about = "Minify every HTML file under a directory, in place")]
#[command(version)]
#[command(long_about = "Minify every HTML file under a directory, in place

Walks ROOT recursively and rewrites each *.html file with its minified form.
Whitespace and comments are removed and optional attribute quotes dropped.
Files are overwritten without a backup. The first error stops the run unless
--keep-going is given.")]
pub struct Cli {
    /// Directory to minify [default: data]
    #[arg(env = "SHRINK_ROOT", value_name = "ROOT")]
    pub root: Option<PathBuf>,

    /// Path to the config file [default: ./.shrink.toml]
    #[arg(long, env = "SHRINK_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose output (shows DEBUG level logs)
    #[arg(short, long)]
    pub verbose: bool,

    /// Write logs to a file (useful for debugging)
    #[arg(long, env = "SHRINK_LOG_FILE", value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Run options
    #[command(flatten)]
    pub minify: MinifyCommand,
}

/// Main entry point for the CLI application
///
/// # Errors
///
/// Returns an error if logging or configuration setup fails, if the run is
/// aborted, or if any file failed in a `--keep-going` run.
pub fn run(cli: Cli) -> Result<()> {
    shrink_config::logging::init(cli.verbose, cli.log_file.as_deref())
        .context("Failed to initialize logging")?;

    let context = build_context(&cli)?;
    let report = cli
        .minify
        .execute(&context)
        .with_context(|| format!("Failed to minify {}", context.root().display()))?;

    let color = context.config.general.color && std::io::stdout().is_terminal();
    stats::print_summary(&report, color);

    if !report.is_success() {
        return Err(CommandError::MinifyFailed {
            failed: report.stats.failed,
            total: report.stats.total(),
        }
        .into());
    }

    Ok(())
}

/// Merge config file, environment and flags into a runtime context
///
/// # Errors
///
/// Returns an error if the working directory is unreadable or the config is
/// invalid.
pub fn build_context(cli: &Cli) -> Result<RuntimeContext> {
    let cwd = std::env::current_dir().context("Failed to get current directory")?;
    let mut config = load_config(cli.config.as_deref(), &cwd)?;

    cli.minify.apply_to(&mut config);
    config.validate().context("Invalid configuration")?;

    Ok(RuntimeContext::new(config, cli.root.as_deref()))
}
