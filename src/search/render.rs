//! Dropdown markup for a result set

use std::fmt::Write as _;

use html_escape::encode_text;

use super::highlight::highlight_text;
use super::types::SearchResult;
use crate::config::SearchConfig;

/// Id of the dropdown element the widget owns
pub const CONTAINER_ID: &str = "searchResultsContainer";
/// Class of the dropdown element
pub const CONTAINER_CLASS: &str = "search-results-dropdown";

/// Inner markup for `results`, or the no-results notice when empty
#[must_use]
pub fn render_results(results: &[SearchResult], query: &str, config: &SearchConfig) -> String {
    render_results_with_selection(results, query, config, None)
}

/// Like [`render_results`], marking the keyboard-selected item
#[must_use]
pub fn render_results_with_selection(
    results: &[SearchResult],
    query: &str,
    config: &SearchConfig,
    selected: Option<usize>,
) -> String {
    if results.is_empty() {
        return format!(
            r#"<div class="search-no-results"><i class="fa fa-search"></i><p>{} for "{}"</p></div>"#,
            encode_text(config.no_results_message()),
            encode_text(query)
        );
    }

    let class = config.highlight_class();
    let mut html = String::new();
    for (index, result) in results.iter().enumerate() {
        let item_class = if selected == Some(index) {
            "search-result-item selected"
        } else {
            "search-result-item"
        };
        let _ = write!(
            html,
            r#"<div class="{item_class}" data-index="{index}"><div class="search-result-icon">{}</div><div class="search-result-content"><div class="search-result-title">{}</div>"#,
            result.kind.icon(),
            highlight_text(&result.title, query, class)
        );
        if !result.description.is_empty() {
            let _ = write!(
                html,
                r#"<div class="search-result-desc">{}</div>"#,
                highlight_text(&result.description, query, class)
            );
        }
        if let Some(rating) = &result.rating {
            let _ = write!(
                html,
                r#"<div class="search-result-rating">{}</div>"#,
                encode_text(rating)
            );
        }
        html.push_str("</div></div>");
    }
    html
}

/// The dropdown element: visibility plus current inner markup
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultsContainer {
    visible: bool,
    inner_html: String,
}

impl ResultsContainer {
    /// A hidden, empty container
    #[must_use]
    pub fn hidden() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    #[must_use]
    pub fn inner_html(&self) -> &str {
        &self.inner_html
    }

    /// Replace the contents and display the container
    pub fn show(&mut self, inner_html: String) {
        self.inner_html = inner_html;
        self.visible = true;
    }

    /// Hide the container, keeping its last contents
    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// Outer markup of the container element
    #[must_use]
    pub fn to_html(&self) -> String {
        let display = if self.visible { "block" } else { "none" };
        format!(
            r#"<div id="{CONTAINER_ID}" class="{CONTAINER_CLASS}" style="display: {display}">{}</div>"#,
            self.inner_html
        )
    }
}
