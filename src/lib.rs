//! HTML pretty-printing and minification.
//!
//! Two pure string transformations over markup, well-formed or not:
//!
//! - [`format_html`] re-indents a document, one tag or text run per line,
//!   two spaces per nesting level. Void elements (`<br>`, `<img>`, ...) and
//!   self-closing tags never open a level; unbalanced closing tags clamp the
//!   level at zero instead of failing.
//! - [`minify_html`] strips comments and collapses inter-tag whitespace,
//!   while the content of `pre`, `textarea`, `script` and `style` elements
//!   comes out byte-for-byte identical.
//!
//! Both return an empty string for whitespace-only input and never fail.
//! The byte-level wrappers [`format_bytes`] and [`minify_bytes`] add the one
//! failure mode a document read from disk can have: not being UTF-8.

mod error;
mod format;
mod minify;
mod tag;

pub use error::FormatError;
pub use format::format_html;
pub use minify::minify_html;

/// UTF-8-validate `src`, then [`format_html`] it.
pub fn format_bytes(src: &[u8]) -> Result<String, FormatError> {
    Ok(format_html(std::str::from_utf8(src)?))
}

/// UTF-8-validate `src`, then [`minify_html`] it.
pub fn minify_bytes(src: &[u8]) -> Result<String, FormatError> {
    Ok(minify_html(std::str::from_utf8(src)?))
}
