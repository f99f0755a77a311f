//! Adapter implementations for engine traits
//!
//! This module provides the production [`Minifier`](crate::content::Minifier)
//! backed by the `minify-html` crate.

pub mod minify_html;

pub use self::minify_html::HtmlMinifier;

use crate::processor::ContentProcessor;
use shrink_core::MinifyOptions;

/// Convenience function to create a fully configured ContentProcessor
///
/// # Examples
///
/// ```
/// use shrink_engine::adapters::create_processor;
/// use shrink_engine::MinifyOptions;
///
/// let processor = create_processor(MinifyOptions::default());
/// let out = processor.process_content("<p>\n  hi\n</p>", "inline").unwrap();
/// assert!(!out.contains('\n'));
/// ```
pub fn create_processor(options: MinifyOptions) -> ContentProcessor<HtmlMinifier> {
    ContentProcessor::new(HtmlMinifier::new(), options)
}
