//! Whitespace-collapsing minifier.
//!
//! Comments are dropped and whitespace runs collapse to single spaces, but
//! the text inside `pre`, `textarea`, `script` and `style` elements is
//! whitespace-significant and must come out byte-for-byte identical. Those
//! regions are lifted out into placeholders before the collapse pass and
//! spliced back in afterwards.

use memchr::memchr;

use crate::tag::{find_comment_end, find_tag_end, is_preserved, is_ws, parse_tag_info};

/// Collapse `input` to its minimal form: no comments, single-space text
/// separation, no whitespace hugging tag punctuation. Content of preserve
/// elements survives untouched.
///
/// Whitespace-only input produces an empty string.
pub fn minify_html(input: &str) -> String {
    let (masked, kept) = mask_preserved(input);
    if !kept.is_empty() {
        log::debug!("masked {} preserve region(s)", kept.len());
    }
    let collapsed = collapse(&masked);
    restore(collapsed, &kept)
}

/// Placeholder for the `idx`-th preserve region. Must contain no whitespace
/// and no `<`/`>` so the collapse pass copies it through unchanged; U+0001
/// keeps it from colliding with ordinary document text.
fn placeholder(idx: usize) -> String {
    format!("\u{1}{idx}\u{1}")
}

/// Replace the inner content of every `pre`/`textarea`/`script`/`style`
/// element with a placeholder, returning the masked document and the
/// original slices. An unclosed preserve element masks to end of input.
fn mask_preserved(input: &str) -> (String, Vec<&str>) {
    let src = input.as_bytes();
    let n = src.len();
    let mut masked = String::with_capacity(n);
    let mut kept: Vec<&str> = Vec::new();
    let mut i = 0usize;

    while i < n {
        let Some(lt) = memchr(b'<', &src[i..]).map(|off| i + off) else {
            masked.push_str(&input[i..]);
            break;
        };
        masked.push_str(&input[i..lt]);

        // Copy comments through whole so markup inside them is not mistaken
        // for a preserve element; the collapse pass strips them.
        if src[lt..].starts_with(b"<!--") {
            match find_comment_end(src, lt + 4) {
                Some(j) => {
                    masked.push_str(&input[lt..j + 3]);
                    i = j + 3;
                }
                None => {
                    masked.push_str(&input[lt..]);
                    i = n;
                }
            }
            continue;
        }

        let Some(gt) = find_tag_end(src, lt) else {
            masked.push_str(&input[lt..]);
            break;
        };
        masked.push_str(&input[lt..=gt]);
        i = gt + 1;

        let info = parse_tag_info(&src[lt..=gt]);
        if !info.is_end && !info.self_closing && is_preserved(info.name) {
            match find_matching_end(src, i, info.name) {
                Some((content_end, after)) => {
                    kept.push(&input[i..content_end]);
                    masked.push_str(&placeholder(kept.len() - 1));
                    masked.push_str(&input[content_end..after]);
                    i = after;
                }
                None => {
                    kept.push(&input[i..]);
                    masked.push_str(&placeholder(kept.len() - 1));
                    i = n;
                }
            }
        }
    }

    (masked, kept)
}

/// Find the matching `</name>` from `i`, case-insensitively. Returns the
/// offset of its `<` and the offset just past its `>`.
fn find_matching_end(src: &[u8], mut i: usize, name: &[u8]) -> Option<(usize, usize)> {
    let n = src.len();
    while i < n {
        let lt = memchr(b'<', &src[i..]).map(|off| i + off)?;
        if lt + 1 < n && src[lt + 1] == b'/' {
            let gt = find_tag_end(src, lt)?;
            let info = parse_tag_info(&src[lt..=gt]);
            if info.is_end && info.name.eq_ignore_ascii_case(name) {
                return Some((lt, gt + 1));
            }
            i = gt + 1;
        } else {
            i = lt + 1;
        }
    }
    None
}

/// The collapse pass: drop comments, shrink every whitespace run to one
/// space, and drop the run entirely at the document edges, next to `<` or
/// `>`, or right before `/>`.
fn collapse(input: &str) -> String {
    let src = input.as_bytes();
    let n = src.len();
    let mut out = String::with_capacity(n);
    let mut i = 0usize;

    while i < n {
        if src[i..].starts_with(b"<!--") {
            match find_comment_end(src, i + 4) {
                Some(j) => {
                    i = j + 3;
                    continue;
                }
                // Comment never closes: the rest of the input is comment.
                None => break,
            }
        }
        if is_ws(src[i]) {
            let mut j = i + 1;
            while j < n && is_ws(src[j]) {
                j += 1;
            }
            let keep = !out.is_empty()
                && !out.ends_with('<')
                && !out.ends_with('>')
                && j < n
                && src[j] != b'<'
                && src[j] != b'>'
                && !src[j..].starts_with(b"/>");
            if keep {
                out.push(' ');
            }
            i = j;
            continue;
        }
        // Longest run without whitespace, stopping at '<' so the comment
        // check above sees every candidate; slice endpoints are ASCII.
        let mut j = i + 1;
        while j < n && src[j] != b'<' && !is_ws(src[j]) {
            j += 1;
        }
        out.push_str(&input[i..j]);
        i = j;
    }

    out
}

/// Splice each preserved slice back over its placeholder.
fn restore(mut out: String, kept: &[&str]) -> String {
    for (idx, content) in kept.iter().enumerate() {
        let ph = placeholder(idx);
        if let Some(pos) = out.find(&ph) {
            out.replace_range(pos..pos + ph.len(), content);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn masking_lifts_pre_content() {
        let (masked, kept) = mask_preserved("<pre>  a\n  b  </pre>");
        assert_eq!(masked, format!("<pre>{}</pre>", placeholder(0)));
        assert_eq!(kept, vec!["  a\n  b  "]);
    }

    #[test]
    fn masking_ignores_comments() {
        let (masked, kept) = mask_preserved("<!-- <pre> -->x");
        assert_eq!(masked, "<!-- <pre> -->x");
        assert!(kept.is_empty());
    }

    #[test]
    fn unclosed_preserve_masks_to_eof() {
        let (masked, kept) = mask_preserved("<pre>a  b");
        assert_eq!(masked, format!("<pre>{}", placeholder(0)));
        assert_eq!(kept, vec!["a  b"]);
    }

    #[test]
    fn collapse_drops_ws_next_to_punctuation() {
        assert_eq!(collapse("a   <b>  c  </b>   d"), "a<b>c</b>d");
        assert_eq!(collapse("<img src='a' />"), "<img src='a'/>");
    }
}
