//! Parsed page the widget searches
//!
//! Wraps a `scraper::Html` document together with the URL it was served
//! from, so link and image attributes resolve the way the browser reports
//! them (`a.href`, `img.src`).

use ego_tree::NodeId;
use scraper::html::Select;
use scraper::{ElementRef, Html, Selector};
use url::Url;

use super::errors::{WidgetError, WidgetResult};
use super::selectors;
use crate::utils::resolve_against;

/// A rendered page: its URL and parsed DOM
#[derive(Debug, Clone)]
pub struct Page {
    url: Url,
    document: Html,
}

impl Page {
    /// Parse `html` as the document served at `url`
    pub fn parse(html: &str, url: &str) -> WidgetResult<Self> {
        let url = Url::parse(url).map_err(|source| WidgetError::InvalidUrl {
            url: url.to_string(),
            source,
        })?;
        Ok(Self::from_parts(url, Html::parse_document(html)))
    }

    #[must_use]
    pub fn from_parts(url: Url, document: Html) -> Self {
        Self { url, document }
    }

    #[must_use]
    pub fn url(&self) -> &Url {
        &self.url
    }

    #[must_use]
    pub fn document(&self) -> &Html {
        &self.document
    }

    /// Every element matching `selector`, in document order
    pub fn select_all<'a, 'b>(&'a self, selector: &'b Selector) -> Select<'a, 'b> {
        self.document.select(selector)
    }

    /// Whether any element matches `selector`
    #[must_use]
    pub fn has(&self, selector: &Selector) -> bool {
        self.document.select(selector).next().is_some()
    }

    /// Look a result's element back up by node id
    #[must_use]
    pub fn element(&self, id: NodeId) -> Option<ElementRef<'_>> {
        self.document.tree.get(id).and_then(ElementRef::wrap)
    }

    /// Concatenated descendant text, like `textContent`
    #[must_use]
    pub fn text_of(el: ElementRef<'_>) -> String {
        el.text().collect()
    }

    /// Text of the first descendant matching `selector`, or empty
    #[must_use]
    pub fn first_text(el: ElementRef<'_>, selector: &Selector) -> String {
        el.select(selector).next().map(Self::text_of).unwrap_or_default()
    }

    /// Resolved `href` of the first descendant anchor
    #[must_use]
    pub fn first_href(&self, el: ElementRef<'_>) -> Option<String> {
        let anchor = el.select(&selectors::ANCHOR).next()?;
        resolve_against(&self.url, anchor.value().attr("href")?)
    }

    /// Resolved `src` of the first descendant image
    #[must_use]
    pub fn first_src(&self, el: ElementRef<'_>) -> Option<String> {
        let image = el.select(&selectors::IMAGE).next()?;
        resolve_against(&self.url, image.value().attr("src")?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_links_like_the_browser() {
        let page = Page::parse(
            r#"<div id="card"><a>no href</a><a href="/buy">Buy</a><img src="img/logo.png"></div>"#,
            "https://shop.example/store/valorant",
        )
        .unwrap();
        let card = page.select_all(&Selector::parse("#card").unwrap()).next().unwrap();

        // The first anchor wins even without an href.
        assert_eq!(page.first_href(card), None);
        assert_eq!(
            page.first_src(card).as_deref(),
            Some("https://shop.example/store/img/logo.png")
        );
    }

    #[test]
    fn empty_href_is_the_page_itself() {
        let page = Page::parse(
            r#"<div class="cStoreGame"><a href="">Valorant</a><img src=""></div>"#,
            "https://shop.example/store/valorant",
        )
        .unwrap();
        let card = page.select_all(&selectors::PRODUCT_CARD).next().unwrap();

        assert_eq!(
            page.first_href(card).as_deref(),
            Some("https://shop.example/store/valorant")
        );
        assert_eq!(
            page.first_src(card).as_deref(),
            Some("https://shop.example/store/valorant")
        );
    }

    #[test]
    fn text_includes_all_descendants() {
        let page = Page::parse(
            "<section><h2>Title <b>bold</b></h2><p>Body</p></section>",
            "https://shop.example/",
        )
        .unwrap();
        let section = page.select_all(&selectors::SECTION_OR_BOX).next().unwrap();
        assert_eq!(Page::first_text(section, &selectors::HEADING_1_TO_4), "Title bold");
        assert_eq!(Page::text_of(section), "Title boldBody");
    }

    #[test]
    fn invalid_url_is_an_error() {
        assert!(matches!(
            Page::parse("<p></p>", "not a url"),
            Err(WidgetError::InvalidUrl { .. })
        ));
    }
}
