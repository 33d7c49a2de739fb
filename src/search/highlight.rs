//! Query highlighting for result titles and descriptions

use html_escape::encode_text;
use regex::RegexBuilder;

/// Wrap every case-insensitive occurrence of `query` in
/// `<mark class="{class}">`.
///
/// Matching runs on the raw text; every segment is HTML-escaped on output, so
/// the returned string is always safe to insert as markup.
#[must_use]
pub fn highlight_text(text: &str, query: &str, class: &str) -> String {
    if text.is_empty() || query.is_empty() {
        return encode_text(text).into_owned();
    }

    let regex = match RegexBuilder::new(&regex::escape(query))
        .case_insensitive(true)
        .build()
    {
        Ok(regex) => regex,
        Err(e) => {
            log::debug!("Cannot highlight query '{query}': {e}");
            return encode_text(text).into_owned();
        }
    };

    let class = html_escape::encode_double_quoted_attribute(class);
    let mut out = String::with_capacity(text.len() + 32);
    let mut last = 0;
    for found in regex.find_iter(text) {
        out.push_str(&encode_text(&text[last..found.start()]));
        out.push_str(&format!(
            r#"<mark class="{class}">{}</mark>"#,
            encode_text(found.as_str())
        ));
        last = found.end();
    }
    out.push_str(&encode_text(&text[last..]));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_every_occurrence_preserving_case() {
        assert_eq!(
            highlight_text("abc ABC", "abc", "search-highlight"),
            r#"<mark class="search-highlight">abc</mark> <mark class="search-highlight">ABC</mark>"#
        );
    }

    #[test]
    fn regex_metacharacters_are_literal() {
        assert_eq!(
            highlight_text("C++ and C", "c++", "hl"),
            r#"<mark class="hl">C++</mark> and C"#
        );
        assert_eq!(highlight_text("a.b axb", "a.b", "hl"), r#"<mark class="hl">a.b</mark> axb"#);
    }

    #[test]
    fn empty_inputs_are_returned_escaped() {
        assert_eq!(highlight_text("", "abc", "hl"), "");
        assert_eq!(highlight_text("<b>x</b>", "", "hl"), "&lt;b&gt;x&lt;/b&gt;");
    }

    #[test]
    fn page_markup_cannot_escape_the_dropdown() {
        assert_eq!(
            highlight_text("<img onerror=x> fox", "fox", "hl"),
            r#"&lt;img onerror=x&gt; <mark class="hl">fox</mark>"#
        );
    }
}
