//! CSS selectors for the page templates the widget reads
//!
//! These are parsed once at first access and cached forever. They describe
//! markup owned by the site templates, so they are grouped by page type.

use scraper::Selector;
use std::sync::LazyLock;

// Hardcoded selectors should NEVER fail to parse - if they do, it's a bug here.
fn parse(css: &'static str) -> Selector {
    Selector::parse(css)
        .unwrap_or_else(|e| panic!("BUG: hardcoded CSS selector '{css}' is invalid: {e}"))
}

// ============================================================================
// Widget anchors
// ============================================================================

pub static SEARCH_ROOT: LazyLock<Selector> = LazyLock::new(|| parse("#elSearch"));
pub static SEARCH_FORM: LazyLock<Selector> = LazyLock::new(|| parse("#elSearch form"));
pub static SEARCH_FIELD: LazyLock<Selector> = LazyLock::new(|| parse("#elSearchField"));
pub static SEARCH_WRAPPER: LazyLock<Selector> = LazyLock::new(|| parse("#elSearchWrapper"));
pub static RESULTS_CONTAINER: LazyLock<Selector> =
    LazyLock::new(|| parse("#searchResultsContainer"));

// ============================================================================
// Shared
// ============================================================================

pub static ANCHOR: LazyLock<Selector> = LazyLock::new(|| parse("a"));
pub static IMAGE: LazyLock<Selector> = LazyLock::new(|| parse("img"));
pub static HEADING_1_TO_3: LazyLock<Selector> = LazyLock::new(|| parse("h1, h2, h3"));
pub static HEADING_1_TO_4: LazyLock<Selector> = LazyLock::new(|| parse("h1, h2, h3, h4"));
pub static HEADING_1_TO_5: LazyLock<Selector> = LazyLock::new(|| parse("h1, h2, h3, h4, h5"));
pub static SECTION_OR_BOX: LazyLock<Selector> = LazyLock::new(|| parse("section, .ipsBox"));

// ============================================================================
// Home / products
// ============================================================================

pub static PRODUCT_CARD: LazyLock<Selector> =
    LazyLock::new(|| parse(".cStoreGame, .cStoreGame_name, .statusProduct"));
pub static PRODUCT_NAME: LazyLock<Selector> =
    LazyLock::new(|| parse(".cStoreGame_name, .statusProduct__title, h3"));
pub static PRODUCT_DESC: LazyLock<Selector> =
    LazyLock::new(|| parse(".statusProduct__desc, p"));

// ============================================================================
// Reviews
// ============================================================================

pub static REVIEW_CARD: LazyLock<Selector> =
    LazyLock::new(|| parse(".vouch-item, .review-item, .testimonial"));
pub static REVIEW_AUTHOR: LazyLock<Selector> =
    LazyLock::new(|| parse(".vouch-username, .review-author"));
pub static REVIEW_TEXT: LazyLock<Selector> =
    LazyLock::new(|| parse(".vouch-text, .review-text"));
pub static REVIEW_RATING: LazyLock<Selector> = LazyLock::new(|| parse(".vouch-stars, .rating"));

// ============================================================================
// Forum
// ============================================================================

pub static TOPIC_ROW: LazyLock<Selector> =
    LazyLock::new(|| parse("[data-topic-id], .ipsDataItem, .cTopicRow"));
pub static TOPIC_TITLE: LazyLock<Selector> =
    LazyLock::new(|| parse(".ipsDataItem_title, .ipsType_break, h3, h4"));
pub static TOPIC_DESC: LazyLock<Selector> =
    LazyLock::new(|| parse(".ipsDataItem_meta, .ipsType_light, p"));
pub static TOPIC_ELEMENT: LazyLock<Selector> =
    LazyLock::new(|| parse(r#"[id*="topic"], .topic-item"#));

// ============================================================================
// Status
// ============================================================================

pub static STATUS_ITEM: LazyLock<Selector> =
    LazyLock::new(|| parse(".statusProduct, .statusGroup"));
pub static STATUS_TITLE: LazyLock<Selector> =
    LazyLock::new(|| parse(".statusProduct__title, .statusGroup__title, h2, h3"));
pub static STATUS_STATE: LazyLock<Selector> = LazyLock::new(|| parse(".status, .statusRow"));
pub static STATUS_DESC: LazyLock<Selector> = LazyLock::new(|| parse(".statusProduct__desc"));

// ============================================================================
// Guides / support / generic
// ============================================================================

pub static GUIDE_BLOCK: LazyLock<Selector> =
    LazyLock::new(|| parse("article, .guide-item, .ipsBox"));
pub static SUPPORT_BLOCK: LazyLock<Selector> =
    LazyLock::new(|| parse(".faq-item, .support-item, .ipsBox"));
pub static GENERIC_BLOCK: LazyLock<Selector> =
    LazyLock::new(|| parse("section, article, .ipsBox, main"));
