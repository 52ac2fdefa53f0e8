//! Re-indenting pretty-printer.
//!
//! One pass over the input, one tag or text run per output line, two spaces
//! of indentation per nesting level. Malformed markup never fails: the
//! nesting level clamps at zero and unterminated constructs are copied
//! through verbatim.

use crate::tag::{find_comment_end, is_void, parse_tag_info};

const INDENT: &str = "  ";

/// Scanner position relative to the surrounding markup.
///
/// The pending tag is the input slice from `start` to the cursor, so a tag
/// buffer exists exactly while the scanner is inside a tag.
#[derive(Clone, Copy, Debug)]
enum Mode {
    /// Nothing scanned yet.
    Default,
    /// Between tags.
    Content,
    /// Accumulating a tag; `start` is the offset of its `<`.
    Tag { start: usize },
    /// Between `<!--` and `-->`.
    Comment,
}

/// Re-indent `input` so that every tag and every text run sits on its own
/// line, indented two spaces per nesting level.
///
/// Whitespace-only input produces an empty string.
pub fn format_html(input: &str) -> String {
    let src = input.as_bytes();
    let n = src.len();
    let mut out = String::with_capacity(n + n / 4);
    let mut depth = 0usize;
    let mut mode = Mode::Default;
    let mut i = 0usize;

    while i < n {
        match mode {
            Mode::Default | Mode::Content => {
                if src[i..].starts_with(b"<!--") {
                    push_line_start(&mut out, depth);
                    out.push_str("<!--");
                    i += 4;
                    mode = Mode::Comment;
                } else if src[i] == b'<' {
                    mode = Mode::Tag { start: i };
                    i += 1;
                } else {
                    i = emit_text(&mut out, input, i, depth);
                    mode = Mode::Content;
                }
            }
            Mode::Tag { start } => {
                if src[i] == b'>' {
                    emit_tag(&mut out, &input[start..=i], &mut depth);
                    mode = Mode::Content;
                }
                i += 1;
            }
            Mode::Comment => match find_comment_end(src, i) {
                Some(j) => {
                    out.push_str(&input[i..j]);
                    out.push_str("-->");
                    i = j + 3;
                    mode = Mode::Content;
                }
                None => {
                    // Comment never closes: the rest of the input is comment.
                    out.push_str(&input[i..]);
                    i = n;
                }
            },
        }
    }

    // A tag still open at end of input is flushed as-is.
    if let Mode::Tag { start } = mode {
        push_line_start(&mut out, depth);
        out.push_str(&input[start..]);
    }

    out.trim().to_owned()
}

fn push_line_start(out: &mut String, depth: usize) {
    out.push('\n');
    for _ in 0..depth {
        out.push_str(INDENT);
    }
}

/// Emit a complete `<...>` slice on its own line and adjust the nesting
/// level. Closing tags pull the level down before they are printed; opening
/// tags push it up afterwards, except void elements, self-closing tags, and
/// tags with no parseable name (doctype, processing instructions).
fn emit_tag(out: &mut String, tag: &str, depth: &mut usize) {
    let info = parse_tag_info(tag.as_bytes());
    if info.is_end {
        *depth = depth.saturating_sub(1);
        push_line_start(out, *depth);
        out.push_str(tag);
    } else {
        push_line_start(out, *depth);
        out.push_str(tag);
        if !info.self_closing && !info.name.is_empty() && !is_void(info.name) {
            *depth += 1;
        }
    }
}

/// Emit one step of inter-tag text starting at `i`; returns the new cursor.
///
/// Newlines, carriage returns and tabs are dropped. A space is dropped when
/// the last character already emitted is a space; the lookback inspects the
/// output buffer, not the input, so runs collapse across tag boundaries too.
/// Text emitted directly after a `>` first gets a fresh indented line.
fn emit_text(out: &mut String, input: &str, i: usize, depth: usize) -> usize {
    let src = input.as_bytes();
    match src[i] {
        b'\n' | b'\r' | b'\t' => i + 1,
        b' ' => {
            if !out.ends_with(' ') {
                if out.ends_with('>') {
                    push_line_start(out, depth);
                }
                out.push(' ');
            }
            i + 1
        }
        _ => {
            // Longest run without whitespace or '<'; safe to slice since both
            // endpoints land on ASCII.
            let mut j = i + 1;
            while j < src.len() && !matches!(src[j], b'<' | b' ' | b'\n' | b'\r' | b'\t') {
                j += 1;
            }
            if out.ends_with('>') {
                push_line_start(out, depth);
            }
            out.push_str(&input[i..j]);
            j
        }
    }
}
