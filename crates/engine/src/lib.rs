//! # Shrink Engine
//!
//! Walks a directory tree and rewrites every `*.html` file in place with its
//! minified form.
//!
//! - **Discovery**: Recursive, deterministic enumeration of HTML files
//! - **Content Processing**: Trait-based minification with a pluggable [`Minifier`]
//! - **System Abstraction**: Filesystem reads and writes abstracted for testing and dry runs
//! - **Runner**: Fail-fast or continue-on-error runs, sequential or on a thread pool

pub mod adapters;
pub mod content;
pub mod entry;
pub mod error;
pub mod processor;
pub mod runner;
pub mod stats;
pub mod system;

// Re-export path types from core
pub use shrink_core::path::{AbsPath, RelPath};

pub use content::Minifier;
pub use entry::{HtmlFile, discover};
pub use error::{Error, Result};
pub use processor::{ContentProcessor, FileOutcome};
pub use runner::{ErrorPolicy, FileFailure, MinifyRun, Parallelism, RunPolicy, RunReport};
pub use shrink_core::MinifyOptions;
pub use stats::{RunStats, StatsSnapshot};
