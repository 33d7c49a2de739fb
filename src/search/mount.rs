//! Mounting the results container into served page HTML
//!
//! The page is probed with scraper to pick the anchor, then rewritten with
//! lol_html so everything outside the anchor passes through byte-for-byte.

use std::sync::atomic::{AtomicBool, Ordering};

use lol_html::html_content::ContentType;
use lol_html::{HtmlRewriter, Settings, element};
use scraper::Html;

use super::errors::{WidgetError, WidgetResult};
use super::render::ResultsContainer;
use super::selectors;

/// Append the hidden results container to `#elSearchWrapper` (or
/// `#elSearch` when there is no wrapper) and make that anchor
/// `position: relative`.
///
/// Pages that already carry a `#searchResultsContainer`, or have no anchor
/// at all, are returned unchanged.
pub fn mount_results_container(html: &str) -> WidgetResult<String> {
    let anchor = {
        let document = Html::parse_document(html);
        if document.select(&selectors::RESULTS_CONTAINER).next().is_some() {
            return Ok(html.to_string());
        }
        if document.select(&selectors::SEARCH_WRAPPER).next().is_some() {
            "#elSearchWrapper"
        } else if document.select(&selectors::SEARCH_ROOT).next().is_some() {
            "#elSearch"
        } else {
            log::debug!("No search anchor in page, results container not mounted");
            return Ok(html.to_string());
        }
    };

    let container = ResultsContainer::hidden().to_html();
    let mounted = AtomicBool::new(false);
    let mut output = Vec::with_capacity(html.len() + container.len());

    let mut rewriter = HtmlRewriter::new(
        Settings {
            element_content_handlers: vec![element!(anchor, |el| {
                // Ids should be unique; only the first match gets the container.
                if mounted.swap(true, Ordering::Relaxed) {
                    return Ok(());
                }
                let style = with_relative_position(el.get_attribute("style").as_deref());
                el.set_attribute("style", &style)?;
                el.append(&container, ContentType::Html);
                Ok(())
            })],
            ..Settings::default()
        },
        |c: &[u8]| output.extend_from_slice(c),
    );

    rewriter
        .write(html.as_bytes())
        .map_err(|e| WidgetError::Rewrite(e.to_string()))?;
    rewriter
        .end()
        .map_err(|e| WidgetError::Rewrite(e.to_string()))?;

    Ok(String::from_utf8(output)?)
}

/// Set `position: relative` in an inline style, replacing any position
fn with_relative_position(style: Option<&str>) -> String {
    let mut declarations: Vec<&str> = style
        .unwrap_or_default()
        .split(';')
        .map(str::trim)
        .filter(|decl| {
            !decl.is_empty()
                && !decl
                    .split(':')
                    .next()
                    .is_some_and(|prop| prop.trim().eq_ignore_ascii_case("position"))
        })
        .collect();
    declarations.push("position: relative");
    declarations.join("; ")
}
