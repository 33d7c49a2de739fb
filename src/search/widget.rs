//! Search widget state machine
//!
//! One [`SearchWidget`] owns everything a mounted search box needs: the page,
//! the pending debounced query, the current results and the dropdown. Time
//! is passed in explicitly so the debounce can be driven by a real timer
//! ([`super::session::SearchSession`]) or stepped by hand.

use std::time::Duration;

use ego_tree::NodeId;
use tokio::time::Instant;

use super::extractors::perform_search;
use super::page::Page;
use super::render::{ResultsContainer, render_results_with_selection};
use super::selectors;
use super::types::SearchResult;
use crate::config::SearchConfig;
use crate::utils::REVEAL_TRANSITION;

/// Where the widget is in its input cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    /// A query is waiting for its debounce deadline
    Debouncing,
    Searching,
    /// Results (or the no-results notice) are on screen
    Displaying,
}

/// Keys the search field reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    ArrowDown,
    ArrowUp,
    Enter,
    Other,
}

/// Temporary highlight applied to a revealed element.
///
/// The element is scrolled smoothly to the centre of the viewport, its
/// background set to `background_color` with `transition`, and the original
/// background restored after `revert_after`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealEffect {
    pub background_color: String,
    pub transition: &'static str,
    pub revert_after: Duration,
}

/// What activating a result asks the host page to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickAction {
    Navigate { url: String },
    Reveal { element: NodeId, effect: RevealEffect },
    None,
}

#[derive(Debug, Clone)]
struct PendingSearch {
    query: String,
    deadline: Instant,
}

/// A search box mounted on a page
#[derive(Debug)]
pub struct SearchWidget {
    page: Page,
    config: SearchConfig,
    phase: Phase,
    pending: Option<PendingSearch>,
    query: String,
    results: Vec<SearchResult>,
    selected: Option<usize>,
    container: ResultsContainer,
}

impl SearchWidget {
    /// Attach to `page`, or `None` when it has no search form and field
    pub fn mount(page: Page, config: SearchConfig) -> Option<Self> {
        if !page.has(&selectors::SEARCH_FORM) || !page.has(&selectors::SEARCH_FIELD) {
            log::warn!("Search elements not found");
            return None;
        }

        Some(Self {
            page,
            config,
            phase: Phase::Idle,
            pending: None,
            query: String::new(),
            results: Vec::new(),
            selected: None,
            container: ResultsContainer::hidden(),
        })
    }

    #[must_use]
    pub fn page(&self) -> &Page {
        &self.page
    }

    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Query behind the current results
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub fn results(&self) -> &[SearchResult] {
        &self.results
    }

    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    #[must_use]
    pub fn container(&self) -> &ResultsContainer {
        &self.container
    }

    /// When the pending search is due, if one is pending
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|p| p.deadline)
    }

    /// The field's value changed.
    ///
    /// Long enough queries replace any pending search with one due after
    /// the search delay; anything shorter hides the dropdown.
    pub fn input(&mut self, value: &str, now: Instant) {
        let query = value.trim();
        if self.config.accepts(query) {
            self.pending = Some(PendingSearch {
                query: query.to_string(),
                deadline: now + self.config.search_delay(),
            });
            self.phase = Phase::Debouncing;
        } else {
            self.hide();
        }
    }

    /// The form was submitted: search right away
    pub fn submit(&mut self, value: &str) {
        self.pending = None;
        self.search(value.trim());
    }

    /// Run the pending search if its deadline has passed.
    ///
    /// Returns whether a search ran.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.pending.take() {
            Some(pending) if pending.deadline <= now => {
                self.search(&pending.query);
                true
            }
            other => {
                self.pending = other;
                false
            }
        }
    }

    /// A key was pressed in the search field
    pub fn key(&mut self, key: Key) -> ClickAction {
        match key {
            Key::Escape => self.hide(),
            Key::ArrowDown if !self.results.is_empty() => {
                let last = self.results.len() - 1;
                self.select(Some(self.selected.map_or(0, |i| (i + 1).min(last))));
            }
            Key::ArrowUp if self.selected.is_some() => {
                self.select(self.selected.map(|i| i.saturating_sub(1)));
            }
            Key::Enter => {
                if let Some(index) = self.selected {
                    return self.click(index);
                }
            }
            _ => {}
        }
        ClickAction::None
    }

    /// A click landed somewhere in the document
    pub fn document_click(&mut self, inside_search: bool) {
        if !inside_search {
            self.hide();
        }
    }

    /// The result at `index` was clicked
    pub fn click(&mut self, index: usize) -> ClickAction {
        let Some(result) = self.results.get(index) else {
            return ClickAction::None;
        };

        if let Some(url) = result.navigable_link() {
            return ClickAction::Navigate {
                url: url.to_string(),
            };
        }

        let element = result.element;
        match element {
            Some(element) => {
                let effect = RevealEffect {
                    background_color: self.config.reveal_color().to_string(),
                    transition: REVEAL_TRANSITION,
                    revert_after: self.config.reveal_duration(),
                };
                self.hide();
                ClickAction::Reveal { element, effect }
            }
            None => ClickAction::None,
        }
    }

    /// Hide the dropdown and forget the current results
    pub fn hide(&mut self) {
        self.pending = None;
        self.container.hide();
        self.selected = None;
        self.results.clear();
        self.phase = Phase::Idle;
    }

    fn search(&mut self, query: &str) {
        if !self.config.accepts(query) {
            self.hide();
            return;
        }

        self.phase = Phase::Searching;
        self.query = query.to_string();
        self.results = perform_search(&self.page, query, &self.config);
        self.selected = None;
        self.render();
        self.phase = Phase::Displaying;
    }

    fn select(&mut self, index: Option<usize>) {
        self.selected = index;
        self.render();
    }

    fn render(&mut self) {
        let html =
            render_results_with_selection(&self.results, &self.query, &self.config, self.selected);
        self.container.show(html);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEARCH_BOX: &str = r#"<div id="elSearch"><form><input id="elSearchField"></form></div>"#;

    fn widget(path: &str, body: &str) -> SearchWidget {
        let html = format!("<html><body>{SEARCH_BOX}{body}</body></html>");
        let page = Page::parse(&html, &format!("https://shop.example{path}")).unwrap();
        SearchWidget::mount(page, SearchConfig::default()).unwrap()
    }

    #[test]
    fn missing_field_disables_the_widget() {
        let page = Page::parse(
            r#"<div id="elSearch"><form></form></div>"#,
            "https://shop.example/",
        )
        .unwrap();
        assert!(SearchWidget::mount(page, SearchConfig::default()).is_none());
    }

    #[test]
    fn latest_input_supersedes_pending() {
        let mut w = widget("/status", r#"<div class="statusProduct"><h3>Valorant</h3></div>"#);
        let t0 = Instant::now();

        w.input("va", t0);
        w.input(" val ", t0 + Duration::from_millis(100));
        assert_eq!(w.phase(), Phase::Debouncing);
        assert!(!w.poll(t0 + Duration::from_millis(300)));
        assert!(w.poll(t0 + Duration::from_millis(400)));

        assert_eq!(w.query(), "val");
        assert_eq!(w.phase(), Phase::Displaying);
        assert!(w.container().is_visible());
    }

    #[test]
    fn short_input_hides() {
        let mut w = widget("/status", r#"<div class="statusProduct"><h3>Valorant</h3></div>"#);
        w.submit("valorant");
        assert!(w.container().is_visible());

        w.input("v", Instant::now());
        assert_eq!(w.phase(), Phase::Idle);
        assert!(!w.container().is_visible());
        assert!(w.results().is_empty());
        assert_eq!(w.next_deadline(), None);
    }

    #[test]
    fn arrows_clamp_and_enter_clicks() {
        let mut w = widget(
            "/",
            r#"<div class="cStoreGame"><h3>Rust A</h3><a href="/rust-a">go</a></div>
               <div class="cStoreGame"><h3>Rust B</h3><a href="/rust-b">go</a></div>"#,
        );
        w.submit("rust");
        assert_eq!(w.results().len(), 2);

        assert_eq!(w.key(Key::ArrowUp), ClickAction::None);
        assert_eq!(w.selected(), None);
        w.key(Key::ArrowDown);
        w.key(Key::ArrowDown);
        w.key(Key::ArrowDown);
        assert_eq!(w.selected(), Some(1));
        w.key(Key::ArrowUp);
        assert_eq!(w.selected(), Some(0));

        assert_eq!(
            w.key(Key::Enter),
            ClickAction::Navigate {
                url: "https://shop.example/rust-a".into()
            }
        );
    }

    #[test]
    fn reveal_hides_the_dropdown() {
        let mut w = widget(
            "/reviews",
            r#"<div class="vouch-item"><span class="vouch-username">sam</span><p class="vouch-text">great loader</p></div>"#,
        );
        w.submit("loader");

        match w.click(0) {
            ClickAction::Reveal { element, effect } => {
                assert!(w.page().element(element).is_some());
                assert_eq!(effect.background_color, "rgba(0, 94, 255, 0.1)");
                assert_eq!(effect.revert_after, Duration::from_millis(2000));
            }
            other => panic!("expected reveal, got {other:?}"),
        }
        assert!(!w.container().is_visible());
        assert_eq!(w.click(0), ClickAction::None);
    }

    #[test]
    fn outside_click_and_escape_hide() {
        let mut w = widget("/status", r#"<div class="statusProduct"><h3>Valorant</h3></div>"#);
        w.submit("val");
        w.document_click(true);
        assert!(w.container().is_visible());
        w.document_click(false);
        assert!(!w.container().is_visible());

        w.submit("val");
        w.key(Key::Escape);
        assert_eq!(w.phase(), Phase::Idle);
    }
}
