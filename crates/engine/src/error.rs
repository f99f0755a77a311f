//! Error types for shrink-engine
//!
//! Every variant that concerns a single file carries its path so a fail-fast
//! abort names the file that stopped the run.

use shrink_core::path::AbsPath;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

/// Result type alias for engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for shrink-engine
#[derive(Error, Debug)]
pub enum Error {
    /// Root directory missing or not accessible
    #[error("Cannot access root directory {path}: {source}")]
    RootNotFound {
        /// Root as given by the caller
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Root exists but is not a directory
    #[error("Root {path} is not a directory")]
    RootNotDirectory {
        /// Root as given by the caller
        path: PathBuf,
    },

    /// Error reading a directory during traversal
    #[error("Failed to read directory {path}: {source}")]
    DirectoryRead {
        /// Directory that could not be listed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: walkdir::Error,
    },

    /// Error reading a file
    #[error("Failed to read file {path}: {source}")]
    FileRead {
        /// File being read
        path: AbsPath,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Error writing a file
    #[error("Failed to write file {path}: {source}")]
    FileWrite {
        /// File being overwritten
        path: AbsPath,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// File content is not valid UTF-8
    #[error("Invalid UTF-8 in {path}: {source}")]
    InvalidUtf8 {
        /// Offending file
        path: String,
        /// Underlying error
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// The minifier rejected the content
    #[error("Minification failed for {path}: {message}")]
    Minify {
        /// Offending file
        path: String,
        /// Minifier error message
        message: String,
    },

    /// Path is not absolute
    #[error("Path must be absolute: {path}")]
    PathNotAbsolute {
        /// Rejected path
        path: PathBuf,
    },

    /// Path is not relative
    #[error("Path must be relative: {path}")]
    PathNotRelative {
        /// Rejected path
        path: PathBuf,
    },

    /// Invalid path prefix
    #[error("Path {} is not under base directory {}", path.display(), base.display())]
    InvalidPathPrefix {
        /// Path that was stripped
        path: Arc<PathBuf>,
        /// Expected prefix
        base: Arc<PathBuf>,
    },

    /// Thread pool could not be built
    #[error("Failed to start worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Other error with context
    #[error("{context}: {source}")]
    Other {
        /// What was being done
        context: String,
        /// Underlying error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

// Convert from shrink_core::Error
impl From<shrink_core::Error> for Error {
    fn from(err: shrink_core::Error) -> Self {
        match err {
            shrink_core::Error::PathNotAbsolute { path } => Error::PathNotAbsolute { path },
            shrink_core::Error::PathNotRelative { path } => Error::PathNotRelative { path },
            shrink_core::Error::InvalidPathPrefix { path, base } => {
                Error::InvalidPathPrefix { path, base }
            }
            shrink_core::Error::Io(e) => Error::Io(e),
            shrink_core::Error::Message(_) => Error::Other {
                context: "Shared error".to_string(),
                source: Box::new(err),
            },
        }
    }
}

impl Error {
    /// Whether this error concerns a single file rather than the whole run
    ///
    /// Continue-on-error runs only isolate per-file errors; everything else
    /// still aborts.
    pub fn is_per_file(&self) -> bool {
        matches!(
            self,
            Error::FileRead { .. }
                | Error::FileWrite { .. }
                | Error::InvalidUtf8 { .. }
                | Error::Minify { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::panic)]
    use super::*;

    #[test]
    fn test_core_io_error_converts_to_io() {
        let core = shrink_core::Error::Io(std::io::Error::other("boom"));
        assert!(matches!(Error::from(core), Error::Io(_)));
    }

    #[test]
    fn test_core_message_wrapped() {
        let core = shrink_core::Error::Message("bad".to_string());
        let err = Error::from(core);
        assert_eq!(err.to_string(), "Shared error: bad");
    }

    #[test]
    fn test_per_file_classification() {
        let minify = Error::Minify {
            path: "a.html".to_string(),
            message: "nope".to_string(),
        };
        assert!(minify.is_per_file());

        let root = Error::RootNotDirectory {
            path: PathBuf::from("data"),
        };
        assert!(!root.is_per_file());
    }
}
