//! UTF-8-safe text helpers for the search widget
//!
//! All positions handled here are counted in characters, never bytes, so
//! truncation and match windows cannot split a multi-byte character.

/// Safely truncate a string to a maximum number of CHARACTERS (not bytes).
///
/// # Examples
/// ```
/// # use sitewright::utils::string_utils::safe_truncate_chars;
/// assert_eq!(safe_truncate_chars("Hello, World!", 5), "Hello");
/// assert_eq!(safe_truncate_chars("🎉🎊🎈", 2), "🎉🎊");
/// assert_eq!(safe_truncate_chars("Hi", 100), "Hi");
/// ```
#[inline]
pub fn safe_truncate_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        None => s,
        Some((byte_idx, _)) => &s[..byte_idx],
    }
}

/// Slice `s` by character positions `[start, end)`.
///
/// Out-of-range bounds are clamped to the string length.
pub fn slice_chars(s: &str, start: usize, end: usize) -> &str {
    let byte_at = |n: usize| s.char_indices().nth(n).map_or(s.len(), |(idx, _)| idx);
    let start_byte = byte_at(start);
    let end_byte = byte_at(end.max(start));
    &s[start_byte..end_byte]
}

/// Collapse every run of whitespace into a single space and trim both ends.
///
/// ```
/// # use sitewright::utils::string_utils::normalize_whitespace;
/// assert_eq!(normalize_whitespace("  a \n\t b  "), "a b");
/// ```
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Character index of the first case-insensitive occurrence of `needle`.
///
/// Comparison is per character on the lowercase mapping, so the returned
/// index and the needle length line up with the original text even when
/// lowercasing would change the string length.
pub fn find_case_insensitive(haystack: &str, needle: &str) -> Option<usize> {
    let needle: Vec<char> = needle.chars().collect();
    if needle.is_empty() {
        return Some(0);
    }
    let hay: Vec<char> = haystack.chars().collect();
    if needle.len() > hay.len() {
        return None;
    }

    (0..=hay.len() - needle.len()).find(|&start| {
        hay[start..start + needle.len()]
            .iter()
            .zip(&needle)
            .all(|(a, b)| a.to_lowercase().eq(b.to_lowercase()))
    })
}

/// Case-insensitive substring test.
#[inline]
pub fn contains_case_insensitive(haystack: &str, needle: &str) -> bool {
    find_case_insensitive(haystack, needle).is_some()
}
