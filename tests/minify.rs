//! Integration tests for the minifier.

use htmlfmt::minify_html;

/// Helper to drop every whitespace character, leaving the token stream.
fn strip_ws(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Helper to remove `<!-- ... -->` spans the way the minifier does.
fn strip_comments(s: &str) -> String {
    let mut out = String::new();
    let mut rest = s;
    while let Some(start) = rest.find("<!--") {
        out.push_str(&rest[..start]);
        match rest[start..].find("-->") {
            Some(end) => rest = &rest[start + end + 3..],
            None => return out,
        }
    }
    out.push_str(rest);
    out
}

#[test]
fn whitespace_only_input_is_empty() {
    assert_eq!(minify_html(""), "");
    assert_eq!(minify_html("  \n\t  "), "");
}

#[test]
fn collapses_document() {
    assert_eq!(
        minify_html("<div>\n  <p> hi </p>\n</div>"),
        "<div><p>hi</p></div>"
    );
}

#[test]
fn strips_comments() {
    assert_eq!(
        minify_html("<div><!-- note --><p>a</p></div>"),
        "<div><p>a</p></div>"
    );
    assert_eq!(minify_html("x <!-- c --> y"), "x y");
}

#[test]
fn collapses_text_runs() {
    assert_eq!(minify_html("one   two\n\nthree"), "one two three");
}

#[test]
fn removes_ws_next_to_tag_punctuation() {
    assert_eq!(minify_html("a   <b>  c  </b>   d"), "a<b>c</b>d");
}

#[test]
fn removes_ws_before_self_closing() {
    assert_eq!(minify_html("<img src='a' />"), "<img src='a'/>");
}

#[test]
fn collapses_ws_inside_tags() {
    assert_eq!(
        minify_html("<div   class=\"a\"  >x</div>"),
        "<div class=\"a\">x</div>"
    );
}

#[test]
fn preserves_pre_exactly() {
    assert_eq!(
        minify_html("<pre>  a\n  b  </pre>"),
        "<pre>  a\n  b  </pre>"
    );
}

#[test]
fn preserves_script_and_style() {
    assert_eq!(
        minify_html("<script>\nlet a  =  1;\n</script>"),
        "<script>\nlet a  =  1;\n</script>"
    );
    assert_eq!(
        minify_html("<style>\n.a  { color: red; }\n</style>"),
        "<style>\n.a  { color: red; }\n</style>"
    );
}

#[test]
fn preserves_textarea() {
    assert_eq!(
        minify_html("<form> <textarea>  raw\ntext </textarea> </form>"),
        "<form><textarea>  raw\ntext </textarea></form>"
    );
}

#[test]
fn preserve_tags_match_case_insensitively() {
    assert_eq!(minify_html("<PRE> a  b </PRE>"), "<PRE> a  b </PRE>");
}

#[test]
fn collapse_resumes_after_preserve_block() {
    assert_eq!(
        minify_html("<div>\n  <pre> keep  this </pre>\n  <p> x </p>\n</div>"),
        "<div><pre> keep  this </pre><p>x</p></div>"
    );
}

#[test]
fn unclosed_preserve_runs_to_end_of_input() {
    assert_eq!(minify_html("<pre>a  b"), "<pre>a  b");
}

#[test]
fn empty_preserve_block() {
    assert_eq!(minify_html("<pre></pre>"), "<pre></pre>");
}

#[test]
fn round_trip_token_stream_modulo_comments() {
    let inputs = [
        "<div>\n <p>a b</p>\n</div>",
        "x <!-- c --> y<div>z</div>",
        "<ul>\n  <li>one</li>\n  <li>two</li>\n</ul>",
    ];
    for input in inputs {
        assert_eq!(
            strip_ws(&minify_html(input)),
            strip_ws(&strip_comments(input)),
            "token stream changed for {input:?}"
        );
    }
}
