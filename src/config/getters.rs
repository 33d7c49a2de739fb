//! Getter methods for `SiteConfig` and `SearchConfig`

use std::path::Path;
use std::time::Duration;

use super::types::{SearchConfig, SiteConfig};

impl SiteConfig {
    #[must_use]
    pub fn root_dir(&self) -> &Path {
        &self.root_dir
    }

    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    #[must_use]
    pub fn port(&self) -> u16 {
        self.port
    }

    #[must_use]
    pub fn search(&self) -> &SearchConfig {
        &self.search
    }
}

impl SearchConfig {
    #[must_use]
    pub fn min_search_length(&self) -> usize {
        self.min_search_length
    }

    #[must_use]
    pub fn max_results(&self) -> usize {
        self.max_results
    }

    #[must_use]
    pub fn highlight_class(&self) -> &str {
        &self.highlight_class
    }

    #[must_use]
    pub fn no_results_message(&self) -> &str {
        &self.no_results_message
    }

    #[must_use]
    pub fn search_delay(&self) -> Duration {
        self.search_delay
    }

    #[must_use]
    pub fn snippet_length(&self) -> usize {
        self.snippet_length
    }

    #[must_use]
    pub fn reveal_color(&self) -> &str {
        &self.reveal_color
    }

    #[must_use]
    pub fn reveal_duration(&self) -> Duration {
        self.reveal_duration
    }

    /// Whether a trimmed query is long enough to run
    #[must_use]
    pub fn accepts(&self, query: &str) -> bool {
        !query.is_empty() && query.chars().count() >= self.min_search_length
    }
}
