//! Core configuration types
//!
//! `SiteConfig` drives the static responder and HTTP server; `SearchConfig`
//! carries the process-wide constants of the in-page search widget. Both are
//! immutable once built.

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::utils::{
    DEFAULT_PORT, HIGHLIGHT_CLASS, MAX_RESULTS, MIN_SEARCH_LENGTH, NO_RESULTS_MESSAGE, PORT_ENV,
    REVEAL_COLOR, REVEAL_DURATION_MS, SEARCH_DELAY_MS, SITE_ROOT_ENV, SNIPPET_LENGTH,
};

/// Main configuration struct for serving a site
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Document root every request path is resolved under.
    ///
    /// **INVARIANT:** Always an absolute path (normalized in builder).
    pub(crate) root_dir: PathBuf,
    pub(crate) host: String,
    pub(crate) port: u16,
    pub(crate) search: SearchConfig,
}

/// Constants of the search widget
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Queries with fewer characters never run
    pub(crate) min_search_length: usize,
    /// Hard cap on results per query
    pub(crate) max_results: usize,
    pub(crate) highlight_class: String,
    pub(crate) no_results_message: String,
    /// Quiet period after the last keystroke before a search fires
    pub(crate) search_delay: Duration,
    /// Length of a snippet when the query does not occur in the text
    pub(crate) snippet_length: usize,
    pub(crate) reveal_color: String,
    /// How long a revealed element keeps its highlight background
    pub(crate) reveal_duration: Duration,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            min_search_length: MIN_SEARCH_LENGTH,
            max_results: MAX_RESULTS,
            highlight_class: HIGHLIGHT_CLASS.to_string(),
            no_results_message: NO_RESULTS_MESSAGE.to_string(),
            search_delay: Duration::from_millis(SEARCH_DELAY_MS),
            snippet_length: SNIPPET_LENGTH,
            reveal_color: REVEAL_COLOR.to_string(),
            reveal_duration: Duration::from_millis(REVEAL_DURATION_MS),
        }
    }
}

// Constructors
impl SiteConfig {
    /// Build a configuration from the process environment.
    ///
    /// * `PORT` selects the listening port (default 3000)
    /// * `SITE_ROOT` selects the document root (default: current directory)
    ///
    /// An empty `PORT` counts as unset. Any other value that is not a valid
    /// port number is an error rather than a silent fallback.
    pub fn from_env() -> Result<Self> {
        let root = match std::env::var_os(SITE_ROOT_ENV) {
            Some(dir) => PathBuf::from(dir),
            None => std::env::current_dir().context("Failed to get current directory")?,
        };

        let port = match std::env::var(PORT_ENV) {
            Ok(raw) => parse_port(&raw)?,
            Err(std::env::VarError::NotPresent) => DEFAULT_PORT,
            Err(e) => return Err(anyhow!("Invalid {PORT_ENV}: {e}")),
        };

        Self::builder().root_dir(root).port(port).build()
    }

    /// Address string suitable for `TcpListener::bind`
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Parse a port number from an environment value; blank means the default
pub fn parse_port(raw: &str) -> Result<u16> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(DEFAULT_PORT);
    }
    trimmed
        .parse::<u16>()
        .map_err(|e| anyhow!("Invalid {PORT_ENV} value '{raw}': {e}"))
}

impl SearchConfig {
    #[must_use]
    pub fn with_min_search_length(mut self, chars: usize) -> Self {
        self.min_search_length = chars;
        self
    }

    #[must_use]
    pub fn with_max_results(mut self, max: usize) -> Self {
        self.max_results = max;
        self
    }

    #[must_use]
    pub fn with_search_delay(mut self, delay: Duration) -> Self {
        self.search_delay = delay;
        self
    }

    #[must_use]
    pub fn with_no_results_message(mut self, message: impl Into<String>) -> Self {
        self.no_results_message = message.into();
        self
    }

    #[must_use]
    pub fn with_highlight_class(mut self, class: impl Into<String>) -> Self {
        self.highlight_class = class.into();
        self
    }

    #[must_use]
    pub fn with_reveal_duration(mut self, duration: Duration) -> Self {
        self.reveal_duration = duration;
        self
    }
}
