//! `minify-html` adapter that implements the Minifier trait from engine
//!
//! Option mapping:
//! - `remove_comments` turns off `keep_comments`
//! - `remove_empty_space` turns off `keep_spaces_between_attributes`
//! - `remove_optional_attribute_quotes` turns off
//!   `ensure_spec_compliant_unquoted_attribute_values`; `minify-html` always
//!   drops quotes it can, this only decides how far it goes
//! - `remove_all_empty_space` runs [`strip_inter_tag_space`] over the output
//!
//! `minify-html` always collapses whitespace between elements and cannot be
//! told to keep it. It does keep a single space between inline elements where
//! the space affects rendering; that space is what `remove_all_empty_space`
//! removes.
//!
//! Opening and closing tags are always kept, so the output keeps the tag
//! structure of the input.

use crate::content::Minifier;
use minify_html::{Cfg, minify};
use shrink_core::MinifyOptions;
use thiserror::Error;

/// Elements whose content is copied verbatim by [`strip_inter_tag_space`]
const RAW_TEXT_ELEMENTS: [&str; 4] = ["pre", "script", "style", "textarea"];

/// Error type for the minify-html adapter
#[derive(Error, Debug)]
pub enum HtmlMinifyError {
    /// Output bytes were not UTF-8
    #[error("minifier produced invalid UTF-8: {0}")]
    InvalidOutput(#[from] std::string::FromUtf8Error),
}

/// Adapter that wraps `minify_html::minify`
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlMinifier;

impl HtmlMinifier {
    /// Create a new adapter
    pub fn new() -> Self {
        Self
    }

    /// Translate shrink options into a `minify-html` configuration
    pub fn cfg(options: &MinifyOptions) -> Cfg {
        Cfg {
            keep_comments: !options.remove_comments,
            keep_spaces_between_attributes: !options.remove_empty_space,
            ensure_spec_compliant_unquoted_attribute_values: !options
                .remove_optional_attribute_quotes,
            keep_closing_tags: true,
            keep_html_and_head_opening_tags: true,
            minify_css: options.minify_css,
            minify_js: options.minify_js,
            ..Cfg::new()
        }
    }
}

impl Minifier for HtmlMinifier {
    type Error = HtmlMinifyError;

    fn minify(&self, content: &str, options: &MinifyOptions) -> Result<String, Self::Error> {
        if options.is_passthrough() {
            return Ok(content.to_string());
        }

        let cfg = Self::cfg(options);
        let minified = String::from_utf8(minify(content.as_bytes(), &cfg))?;

        if options.remove_all_empty_space {
            Ok(strip_inter_tag_space(&minified))
        } else {
            Ok(minified)
        }
    }
}

/// Drop every whitespace-only text run between tags
///
/// Text with any visible character is kept as is, and so is everything inside
/// `pre`, `script`, `style` and `textarea`.
///
/// ```
/// use shrink_engine::adapters::minify_html::strip_inter_tag_space;
///
/// assert_eq!(
///     strip_inter_tag_space("<p><b>a</b> <i>b</i></p>"),
///     "<p><b>a</b><i>b</i></p>"
/// );
/// ```
pub fn strip_inter_tag_space(html: &str) -> String {
    let bytes = html.as_bytes();
    let mut out = String::with_capacity(html.len());
    let mut pos = 0;

    while pos < bytes.len() {
        if is_tag_start(bytes, pos) {
            let end = tag_end(html, pos);
            let tag = &html[pos..end];
            out.push_str(tag);
            pos = end;

            if let Some(name) = raw_text_element(tag) {
                let close = closing_tag_start(html, pos, name);
                out.push_str(&html[pos..close]);
                pos = close;
            }
        } else {
            let end = (pos + 1..bytes.len())
                .find(|&i| is_tag_start(bytes, i))
                .unwrap_or(bytes.len());
            let text = &html[pos..end];
            if !text.bytes().all(|b| b.is_ascii_whitespace()) {
                out.push_str(text);
            }
            pos = end;
        }
    }

    out
}

/// A `<` opens markup only when followed by a name, `/`, `!` or `?`
fn is_tag_start(bytes: &[u8], pos: usize) -> bool {
    bytes[pos] == b'<'
        && bytes
            .get(pos + 1)
            .is_some_and(|b| b.is_ascii_alphabetic() || matches!(b, b'/' | b'!' | b'?'))
}

/// Index just past the `>` closing the tag that starts at `start`
fn tag_end(html: &str, start: usize) -> usize {
    let rest = &html[start..];
    if rest.starts_with("<!--") {
        return rest.find("-->").map_or(html.len(), |i| start + i + 3);
    }

    let mut quote = None;
    for (i, b) in rest.bytes().enumerate().skip(1) {
        match quote {
            Some(q) if b == q => quote = None,
            Some(_) => {}
            None if b == b'"' || b == b'\'' => quote = Some(b),
            None if b == b'>' => return start + i + 1,
            None => {}
        }
    }
    html.len()
}

/// Name of the raw-text element this opening tag starts, if any
fn raw_text_element(tag: &str) -> Option<&'static str> {
    let name: String = tag[1..]
        .chars()
        .take_while(char::is_ascii_alphanumeric)
        .collect();
    RAW_TEXT_ELEMENTS
        .into_iter()
        .find(|raw| raw.eq_ignore_ascii_case(&name))
}

/// Start of the `</name` that closes a raw-text element, or the end of input
fn closing_tag_start(html: &str, from: usize, name: &str) -> usize {
    // ASCII lowercasing keeps byte offsets intact
    let lowered = html[from..].to_ascii_lowercase();
    lowered
        .find(&format!("</{name}"))
        .map_or(html.len(), |i| from + i)
}
