//! Low-level tag scanning shared by the formatter and the minifier.
//!
//! Everything here operates on raw bytes. All structurally significant
//! characters (`<`, `>`, `/`, quotes, whitespace) are ASCII, so byte offsets
//! produced by these helpers are always valid `char` boundaries in the
//! original `&str`.

use memchr::memchr;

/// Raw pieces of a `<...>` slice.
#[derive(Clone, Copy, Debug)]
pub(crate) struct TagInfo<'a> {
    pub(crate) name: &'a [u8],
    pub(crate) is_end: bool,
    pub(crate) self_closing: bool,
}

/// Elements that cannot have children and therefore never open a new
/// indentation level.
pub(crate) fn is_void(name: &[u8]) -> bool {
    matches_ignore_ascii_case(
        name,
        &[
            b"area", b"base", b"br", b"col", b"embed", b"hr", b"img", b"input", b"link", b"meta",
            b"param", b"source", b"track", b"wbr",
        ],
    )
}

/// Elements whose text content is whitespace-significant and must be copied
/// through minification untouched.
pub(crate) fn is_preserved(name: &[u8]) -> bool {
    matches_ignore_ascii_case(name, &[b"pre", b"textarea", b"script", b"style"])
}

#[inline]
pub(crate) fn is_name_char(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'-' || b == b'_' || b == b':'
}

#[inline]
pub(crate) fn is_ws(b: u8) -> bool {
    b == b' ' || b == b'\t' || b == b'\n' || b == b'\r'
}

fn matches_ignore_ascii_case(name: &[u8], set: &[&[u8]]) -> bool {
    set.iter().any(|&s| name.eq_ignore_ascii_case(s))
}

/// Find the '>' for a tag starting at `i` (`s[i] == '<'`), being quote-aware.
pub(crate) fn find_tag_end(s: &[u8], mut i: usize) -> Option<usize> {
    let n = s.len();
    i += 1;
    let mut quote: u8 = 0;
    while i < n {
        let b = s[i];
        if quote != 0 {
            if b == quote {
                quote = 0;
            }
        } else if b == b'"' || b == b'\'' {
            quote = b;
        } else if b == b'>' {
            return Some(i);
        }
        i += 1;
    }
    None
}

/// Extract tag name, end/self-closing flags from raw `<...>` bytes.
///
/// Tags with no parseable name (`<!DOCTYPE html>`, `<?xml?>`, a bare `<>`)
/// come back with an empty `name`.
pub(crate) fn parse_tag_info(tag: &[u8]) -> TagInfo<'_> {
    let n = tag.len();
    if n < 2 {
        return TagInfo {
            name: b"",
            is_end: false,
            self_closing: false,
        };
    }
    let mut i = 1;

    let mut is_end = false;
    if tag[i] == b'/' {
        is_end = true;
        i += 1;
    }
    while i < n && is_ws(tag[i]) {
        i += 1;
    }
    let start = i;
    while i < n && is_name_char(tag[i]) {
        i += 1;
    }
    let name = &tag[start..i];

    // self-closing? check before '>'
    let mut j = n - 1;
    while j > 0 && is_ws(tag[j - 1]) {
        j -= 1;
    }
    let self_closing = j >= 2 && tag[j - 1] == b'/';

    TagInfo {
        name,
        is_end,
        self_closing,
    }
}

/// Index of the first `-` of the `-->` terminator at or after `i`, or `None`
/// if the comment never closes.
pub(crate) fn find_comment_end(s: &[u8], i: usize) -> Option<usize> {
    let mut k = i;
    while let Some(p) = memchr(b'-', &s[k..]) {
        let j = k + p;
        if s[j..].starts_with(b"-->") {
            return Some(j);
        }
        k = j + 1;
    }
    None
}
