//! Snippet extraction around the first query match

use crate::utils::string_utils::{
    find_case_insensitive, normalize_whitespace, safe_truncate_chars, slice_chars,
};
use crate::utils::{ELLIPSIS, SNIPPET_CONTEXT_AFTER, SNIPPET_CONTEXT_BEFORE};

/// Extract a snippet of `text` centred on the first occurrence of `query`.
///
/// Whitespace is collapsed first. When the query is absent the snippet is the
/// leading `max_length` characters. Otherwise it spans
/// [`SNIPPET_CONTEXT_BEFORE`] characters before the match to
/// [`SNIPPET_CONTEXT_AFTER`] characters after it, with an ellipsis on each
/// side that was cut.
#[must_use]
pub fn extract_snippet(text: &str, query: &str, max_length: usize) -> String {
    let clean = normalize_whitespace(text);
    let len = clean.chars().count();

    let Some(index) = find_case_insensitive(&clean, query) else {
        let mut snippet = safe_truncate_chars(&clean, max_length).to_string();
        if len > max_length {
            snippet.push_str(ELLIPSIS);
        }
        return snippet;
    };

    let start = index.saturating_sub(SNIPPET_CONTEXT_BEFORE);
    let end = len.min(index + query.chars().count() + SNIPPET_CONTEXT_AFTER);

    let mut snippet = String::with_capacity(end - start + 2 * ELLIPSIS.len());
    if start > 0 {
        snippet.push_str(ELLIPSIS);
    }
    snippet.push_str(slice_chars(&clean, start, end));
    if end < len {
        snippet.push_str(ELLIPSIS);
    }
    snippet
}

/// Trim `text` and keep at most `max_chars` characters.
///
/// The ellipsis is decided on the untrimmed length, so surrounding
/// whitespace can add one even when nothing visible was cut.
#[must_use]
pub fn truncate_description(text: &str, max_chars: usize) -> String {
    let mut out = safe_truncate_chars(text.trim(), max_chars).to_string();
    if text.chars().count() > max_chars {
        out.push_str(ELLIPSIS);
    }
    out
}
