//! Minification options
//!
//! The option set handed to every minifier invocation. All size-reducing
//! options default to enabled.

use serde::{Deserialize, Serialize};

/// Options passed to the minification transform
///
/// ```toml
/// [minify]
/// removeComments = true
/// removeOptionalAttributeQuotes = false
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MinifyOptions {
    /// Drop optional spaces inside tags, such as between attributes
    ///
    /// Whitespace between elements is collapsed whatever this is set to.
    #[serde(default = "default_true")]
    pub remove_empty_space: bool,

    /// Drop whitespace-only text between tags, including the single space
    /// that would otherwise be kept between inline elements
    #[serde(default = "default_true")]
    pub remove_all_empty_space: bool,

    /// Drop comment nodes
    #[serde(default = "default_true")]
    pub remove_comments: bool,

    /// Omit quotes around attribute values when the markup stays unambiguous
    #[serde(default = "default_true")]
    pub remove_optional_attribute_quotes: bool,

    /// Also minify inline `<style>` content
    #[serde(default)]
    pub minify_css: bool,

    /// Also minify inline `<script>` content
    #[serde(default)]
    pub minify_js: bool,
}

fn default_true() -> bool {
    true
}

impl Default for MinifyOptions {
    fn default() -> Self {
        Self {
            remove_empty_space: true,
            remove_all_empty_space: true,
            remove_comments: true,
            remove_optional_attribute_quotes: true,
            minify_css: false,
            minify_js: false,
        }
    }
}

impl MinifyOptions {
    /// True when every whitespace, comment and quoting option is switched off
    pub fn is_passthrough(&self) -> bool {
        !(self.remove_empty_space
            || self.remove_all_empty_space
            || self.remove_comments
            || self.remove_optional_attribute_quotes
            || self.minify_css
            || self.minify_js)
    }
}
