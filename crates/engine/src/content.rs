//! Content processing traits
//!
//! This module defines the minification seam. The engine drives traversal,
//! reading and writing; the transform itself comes from any [`Minifier`]
//! implementation, which keeps the engine testable with stub transforms.

use shrink_core::MinifyOptions;

/// Trait for the minification transform
///
/// Implementations must be pure with respect to the filesystem: they receive
/// the full text of one file and return its replacement.
pub trait Minifier: Send + Sync {
    /// Error type for minification failures
    type Error: std::error::Error + Send + Sync + 'static;

    /// Minify one document
    ///
    /// # Arguments
    ///
    /// * `content` - Full text of the HTML file
    /// * `options` - Which size reductions to apply
    ///
    /// # Errors
    ///
    /// Returns an error if the input cannot be minified (e.g., input the
    /// implementation cannot tolerate)
    fn minify(&self, content: &str, options: &MinifyOptions) -> Result<String, Self::Error>;
}

/// No-op minifier for testing or when minification is disabled
pub struct NoOpMinifier;

impl Minifier for NoOpMinifier {
    type Error = std::io::Error;

    fn minify(&self, content: &str, _options: &MinifyOptions) -> Result<String, Self::Error> {
        Ok(content.to_string())
    }
}
