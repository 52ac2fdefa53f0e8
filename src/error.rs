//! The one error the library can report.

use thiserror::Error;

/// A document handed to the formatter was not UTF-8 text.
///
/// The scan itself is total: once the input decodes, both operations succeed
/// on any character sequence, so this is the only failure the library
/// distinguishes. Callers surface the message and leave any previous output
/// untouched.
#[derive(Debug, Error)]
#[error("input is not valid UTF-8 (valid up to byte {})", .source.valid_up_to())]
pub struct FormatError {
    #[from]
    source: std::str::Utf8Error,
}
