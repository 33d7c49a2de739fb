//! Per-page-type result extractors
//!
//! Each extractor walks its selectors in document order, keeps the elements
//! whose text contains the query (case-insensitively) and caps the list at
//! `max_results`. There is no ranking.

use scraper::Selector;

use super::page::Page;
use super::page_type::PageType;
use super::selectors;
use super::snippet::{extract_snippet, truncate_description};
use super::types::{
    ContentBlock, ProductCard, ResultKind, ReviewCard, SearchResult, StatusItem, TopicRow,
};
use crate::config::SearchConfig;
use crate::utils::string_utils::contains_case_insensitive;

/// Signature shared by every extractor
pub type Extractor = fn(&Page, &str, &SearchConfig) -> Vec<SearchResult>;

/// Run `query` against `page` with the extractor for its page type.
///
/// Returns nothing for queries the config does not accept.
#[must_use]
pub fn perform_search(page: &Page, query: &str, config: &SearchConfig) -> Vec<SearchResult> {
    if !config.accepts(query) {
        return Vec::new();
    }

    let page_type = PageType::detect(page.url().path());
    let mut results = (page_type.extractor())(page, query, config);
    results.truncate(config.max_results());

    log::debug!(
        "Search '{}' on {:?} page: {} results",
        query,
        page_type,
        results.len()
    );
    results
}

fn has_title(results: &[SearchResult], title: &str) -> bool {
    results.iter().any(|r| r.title == title)
}

fn snippet(text: &str, query: &str, config: &SearchConfig) -> String {
    extract_snippet(text, query, config.snippet_length())
}

/// Store cards, then headed sections that mention the query
pub fn search_products(page: &Page, query: &str, config: &SearchConfig) -> Vec<SearchResult> {
    let mut results: Vec<SearchResult> = page
        .select_all(&selectors::PRODUCT_CARD)
        .filter_map(|el| {
            let card = ProductCard::read(page, el);
            contains_case_insensitive(&card.search_text(), query).then(|| {
                SearchResult::new(ResultKind::Product, card.name.trim())
                    .description(card.description.trim())
                    .link(card.link)
                    .image(card.image)
            })
        })
        .collect();

    for section in page.select_all(&selectors::SECTION_OR_BOX) {
        let block = ContentBlock::read(section, &selectors::HEADING_1_TO_4);
        if block.heading.is_empty()
            || !contains_case_insensitive(&block.text, query)
            || results.len() >= config.max_results()
        {
            continue;
        }
        let title = block.heading.trim();
        if !has_title(&results, title) {
            results.push(
                SearchResult::new(ResultKind::Content, title)
                    .description(snippet(&block.text, query, config))
                    .element(section),
            );
        }
    }

    results.truncate(config.max_results());
    results
}

/// Customer vouches
pub fn search_reviews(page: &Page, query: &str, config: &SearchConfig) -> Vec<SearchResult> {
    let mut results: Vec<SearchResult> = page
        .select_all(&selectors::REVIEW_CARD)
        .filter_map(|el| {
            let review = ReviewCard::read(el);
            contains_case_insensitive(&review.search_text(), query).then(|| {
                SearchResult::new(ResultKind::Review, review.username.trim())
                    .description(truncate_description(&review.text, config.snippet_length()))
                    .rating(&review.rating)
                    .element(el)
            })
        })
        .collect();

    results.truncate(config.max_results());
    results
}

/// Topic listing rows, then any other topic-looking element
pub fn search_forum(page: &Page, query: &str, config: &SearchConfig) -> Vec<SearchResult> {
    let mut results: Vec<SearchResult> = page
        .select_all(&selectors::TOPIC_ROW)
        .filter_map(|el| {
            let topic = TopicRow::read(page, el);
            contains_case_insensitive(&topic.search_text(), query).then(|| {
                SearchResult::new(ResultKind::Topic, topic.title.trim())
                    .description(truncate_description(
                        &topic.description,
                        config.snippet_length(),
                    ))
                    .link(topic.link)
                    .element(el)
            })
        })
        .collect();

    for el in page.select_all(&selectors::TOPIC_ELEMENT) {
        let mut title = Page::first_text(el, &selectors::HEADING_1_TO_3);
        if title.is_empty() {
            title = el.value().attr("data-title").unwrap_or_default().to_string();
        }
        if !contains_case_insensitive(&title, query) || results.len() >= config.max_results() {
            continue;
        }
        let title = title.trim();
        if !has_title(&results, title) {
            results.push(
                SearchResult::new(ResultKind::Topic, title)
                    .description("Forum topic")
                    .element(el),
            );
        }
    }

    results.truncate(config.max_results());
    results
}

/// Product and group status entries
pub fn search_status(page: &Page, query: &str, config: &SearchConfig) -> Vec<SearchResult> {
    let mut results: Vec<SearchResult> = page
        .select_all(&selectors::STATUS_ITEM)
        .filter_map(|el| {
            let item = StatusItem::read(el);
            contains_case_insensitive(&item.search_text(), query).then(|| {
                SearchResult::new(ResultKind::Status, item.title.trim())
                    .description(item.status.trim())
                    .element(el)
            })
        })
        .collect();

    results.truncate(config.max_results());
    results
}

/// Guide articles; only the title is matched
pub fn search_guides(page: &Page, query: &str, config: &SearchConfig) -> Vec<SearchResult> {
    headed_blocks(page, &selectors::GUIDE_BLOCK, &selectors::HEADING_1_TO_3)
        .filter(|(_, block)| contains_case_insensitive(&block.heading, query))
        .take(config.max_results())
        .map(|(el, block)| {
            SearchResult::new(ResultKind::Guide, block.heading.trim())
                .description(snippet(&block.text, query, config))
                .element(el)
        })
        .collect()
}

/// FAQ and support entries, matched on their whole text
pub fn search_support(page: &Page, query: &str, config: &SearchConfig) -> Vec<SearchResult> {
    headed_blocks(page, &selectors::SUPPORT_BLOCK, &selectors::HEADING_1_TO_4)
        .filter(|(_, block)| contains_case_insensitive(&block.text, query))
        .take(config.max_results())
        .map(|(el, block)| {
            let title = match block.heading.trim() {
                "" => "Support Article",
                title => title,
            };
            SearchResult::new(ResultKind::Support, title)
                .description(snippet(&block.text, query, config))
                .element(el)
        })
        .collect()
}

/// Any headed section of a page with no dedicated extractor
pub fn search_generic(page: &Page, query: &str, config: &SearchConfig) -> Vec<SearchResult> {
    let mut results = Vec::new();

    for (el, block) in headed_blocks(page, &selectors::GENERIC_BLOCK, &selectors::HEADING_1_TO_5) {
        if block.heading.is_empty() || !contains_case_insensitive(&block.text, query) {
            continue;
        }
        let description = snippet(&block.text, query, config);
        if !description.is_empty() && results.len() < config.max_results() {
            results.push(
                SearchResult::new(ResultKind::Content, block.heading.trim())
                    .description(description)
                    .element(el),
            );
        }
    }

    results
}

fn headed_blocks<'a>(
    page: &'a Page,
    blocks: &'a Selector,
    heading: &'a Selector,
) -> impl Iterator<Item = (scraper::ElementRef<'a>, ContentBlock)> + 'a {
    page.select_all(blocks)
        .map(move |el| (el, ContentBlock::read(el, heading)))
}
