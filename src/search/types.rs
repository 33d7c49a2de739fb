//! Common types used across the search module
//!
//! This module contains the result record produced per query and the typed
//! per-page-type records the extractors read out of the document.

use ego_tree::NodeId;
use scraper::ElementRef;
use serde::{Deserialize, Serialize};

use super::page::Page;
use super::selectors;

/// What a result points at; selects the icon in the dropdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultKind {
    Product,
    Review,
    Topic,
    Status,
    Guide,
    Support,
    Content,
}

impl ResultKind {
    /// Icon markup shown next to the result
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Product => r#"<i class="fa fa-gamepad"></i>"#,
            Self::Review => r#"<i class="fa fa-star"></i>"#,
            Self::Topic => r#"<i class="fa fa-comments"></i>"#,
            Self::Status => r#"<i class="fa fa-shield-alt"></i>"#,
            Self::Guide => r#"<i class="fa fa-book"></i>"#,
            Self::Support => r#"<i class="fa fa-life-ring"></i>"#,
            Self::Content => r#"<i class="fa fa-file-text"></i>"#,
        }
    }
}

/// Individual search result item
///
/// Transient: built per query and dropped when the query changes or the
/// dropdown is hidden.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<String>,
    #[serde(rename = "type")]
    pub kind: ResultKind,
    /// Originating node in the parsed page
    #[serde(skip)]
    pub element: Option<NodeId>,
}

impl SearchResult {
    pub(crate) fn new(kind: ResultKind, title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            link: None,
            image: None,
            rating: None,
            kind,
            element: None,
        }
    }

    pub(crate) fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub(crate) fn link(mut self, link: Option<String>) -> Self {
        self.link = link;
        self
    }

    pub(crate) fn image(mut self, image: Option<String>) -> Self {
        self.image = image;
        self
    }

    pub(crate) fn rating(mut self, rating: &str) -> Self {
        self.rating = (!rating.is_empty()).then(|| rating.to_string());
        self
    }

    pub(crate) fn element(mut self, element: ElementRef<'_>) -> Self {
        self.element = Some(element.id());
        self
    }

    /// A link the browser can actually follow (`#` is a placeholder)
    #[must_use]
    pub fn navigable_link(&self) -> Option<&str> {
        self.link.as_deref().filter(|l| !l.is_empty() && *l != "#")
    }
}

/// Store card on the home and product pages
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductCard {
    pub name: String,
    pub description: String,
    pub link: Option<String>,
    pub image: Option<String>,
}

impl ProductCard {
    pub(crate) fn read(page: &Page, el: ElementRef<'_>) -> Self {
        Self {
            name: Page::first_text(el, &selectors::PRODUCT_NAME),
            description: Page::first_text(el, &selectors::PRODUCT_DESC),
            link: page.first_href(el),
            image: page.first_src(el),
        }
    }

    pub(crate) fn search_text(&self) -> String {
        format!("{} {}", self.name, self.description)
    }
}

/// Customer vouch / review block
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewCard {
    pub username: String,
    pub text: String,
    pub rating: String,
}

impl ReviewCard {
    pub(crate) fn read(el: ElementRef<'_>) -> Self {
        Self {
            username: Page::first_text(el, &selectors::REVIEW_AUTHOR),
            text: Page::first_text(el, &selectors::REVIEW_TEXT),
            rating: Page::first_text(el, &selectors::REVIEW_RATING),
        }
    }

    pub(crate) fn search_text(&self) -> String {
        format!("{} {}", self.username, self.text)
    }
}

/// Row in a forum topic listing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TopicRow {
    pub title: String,
    pub description: String,
    pub link: Option<String>,
}

impl TopicRow {
    pub(crate) fn read(page: &Page, el: ElementRef<'_>) -> Self {
        Self {
            title: Page::first_text(el, &selectors::TOPIC_TITLE),
            description: Page::first_text(el, &selectors::TOPIC_DESC),
            link: page.first_href(el),
        }
    }

    pub(crate) fn search_text(&self) -> String {
        format!("{} {}", self.title, self.description)
    }
}

/// Product or group entry on the status page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusItem {
    pub title: String,
    pub status: String,
    pub description: String,
}

impl StatusItem {
    pub(crate) fn read(el: ElementRef<'_>) -> Self {
        Self {
            title: Page::first_text(el, &selectors::STATUS_TITLE),
            status: Page::first_text(el, &selectors::STATUS_STATE),
            description: Page::first_text(el, &selectors::STATUS_DESC),
        }
    }

    pub(crate) fn search_text(&self) -> String {
        format!("{} {} {}", self.title, self.status, self.description)
    }
}

/// Any headed block of content: sections, articles, FAQ entries
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentBlock {
    pub heading: String,
    pub text: String,
}

impl ContentBlock {
    /// Read a block whose heading is the first match of `heading`
    pub(crate) fn read(el: ElementRef<'_>, heading: &scraper::Selector) -> Self {
        Self {
            heading: Page::first_text(el, heading),
            text: Page::text_of(el),
        }
    }
}
