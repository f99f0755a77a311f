//! Error types for CLI commands
//!
//! Structured error types using thiserror. Engine errors pass through
//! unchanged so the file that stopped a run is named in the final message.

use thiserror::Error;

/// Errors that can occur during command execution
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum CommandError {
    /// The engine aborted the run
    #[error(transparent)]
    Engine(#[from] shrink_engine::Error),

    /// Continue-on-error run finished with failures
    #[error("Minify failed: {failed} out of {total} files")]
    MinifyFailed {
        /// Number of files that failed
        failed: usize,
        /// Total number of files attempted
        total: usize,
    },
}

/// Result type alias for command operations
pub type Result<T> = std::result::Result<T, CommandError>;
