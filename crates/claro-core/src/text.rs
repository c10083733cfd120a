//! Text utilities shared by the store and the rewrite heuristic.

use crate::defaults::TEXT_SNIPPET_MAX_CHARS;

/// Truncate `value` to at most `max` characters. Counts Unicode scalar
/// values, never splits a character.
pub fn clamp_chars(value: &str, max: usize) -> &str {
    match value.char_indices().nth(max) {
        Some((idx, _)) => &value[..idx],
        None => value,
    }
}

/// Collapse every whitespace run to a single space and trim the ends.
pub fn collapse_whitespace(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Whitespace-collapsed preview of `text`. Output longer than the snippet
/// cap is cut one character short and suffixed with an ellipsis, so the
/// result never exceeds the cap.
pub fn to_snippet(text: &str) -> String {
    let clean = collapse_whitespace(text);
    if clean.chars().count() > TEXT_SNIPPET_MAX_CHARS {
        let cut: String = clean.chars().take(TEXT_SNIPPET_MAX_CHARS - 1).collect();
        format!("{}…", cut)
    } else {
        clean
    }
}
