//! Content processing for in-place minification
//!
//! This module handles the per-file pipeline:
//! 1. Read the file
//! 2. Decode as UTF-8
//! 3. Minify with the configured options
//! 4. Overwrite the file with the result
//!
//! The original content is not kept anywhere once step 4 succeeds.

use crate::content::Minifier;
use crate::entry::HtmlFile;
use crate::error::{Error, Result};
use crate::system::System;
use shrink_core::MinifyOptions;
use shrink_core::path::RelPath;

/// Result of minifying one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileOutcome {
    /// File location relative to the root
    pub rel_path: RelPath,

    /// Size before minification
    pub bytes_before: usize,

    /// Size after minification
    pub bytes_after: usize,
}

impl FileOutcome {
    /// Bytes removed (zero if the output grew)
    pub fn saved(&self) -> usize {
        self.bytes_before.saturating_sub(self.bytes_after)
    }
}

/// Content processor with a pluggable minifier
pub struct ContentProcessor<M>
where
    M: Minifier,
{
    minifier: M,
    options: MinifyOptions,
}

impl<M> ContentProcessor<M>
where
    M: Minifier,
{
    /// Create a new content processor
    ///
    /// # Examples
    ///
    /// ```
    /// use shrink_engine::content::NoOpMinifier;
    /// use shrink_engine::processor::ContentProcessor;
    /// use shrink_engine::MinifyOptions;
    ///
    /// let processor = ContentProcessor::new(NoOpMinifier, MinifyOptions::default());
    /// ```
    pub fn new(minifier: M, options: MinifyOptions) -> Self {
        Self { minifier, options }
    }

    /// Options handed to every minifier call
    pub fn options(&self) -> &MinifyOptions {
        &self.options
    }

    /// Minify a file in place
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File cannot be read
    /// - Content is not valid UTF-8
    /// - Minification fails
    /// - File cannot be written (the file may then be truncated or unchanged)
    pub fn process_file(&self, system: &dyn System, file: &HtmlFile) -> Result<FileOutcome> {
        let raw = system.read_file(&file.path)?;
        let bytes_before = raw.len();

        let text = String::from_utf8(raw).map_err(|e| Error::InvalidUtf8 {
            path: file.path.to_string(),
            source: e,
        })?;

        let minified = self.process_content(&text, &file.path.to_string())?;
        system.write_file(&file.path, minified.as_bytes())?;

        Ok(FileOutcome {
            rel_path: file.rel_path.clone(),
            bytes_before,
            bytes_after: minified.len(),
        })
    }

    /// Minify content directly (without touching disk)
    ///
    /// # Errors
    ///
    /// Returns [`Error::Minify`] naming `path_for_errors` if the minifier fails.
    pub fn process_content(&self, content: &str, path_for_errors: &str) -> Result<String> {
        self.minifier
            .minify(content, &self.options)
            .map_err(|e| Error::Minify {
                path: path_for_errors.to_string(),
                message: e.to_string(),
            })
    }
}
