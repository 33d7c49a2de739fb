//! Shared configuration constants for sitewright
//!
//! This module contains default values and configuration constants used
//! throughout the codebase to ensure consistency and avoid magic numbers.

/// Default listening port when `PORT` is not set
pub const DEFAULT_PORT: u16 = 3000;

/// Default bind address: all interfaces
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Environment variable selecting the listening port
pub const PORT_ENV: &str = "PORT";

/// Environment variable selecting the document root
pub const SITE_ROOT_ENV: &str = "SITE_ROOT";

/// The one `.html` document that is served under its own name instead of
/// being redirected to a clean URL.
pub const ROOT_DOCUMENT: &str = "/index.html";

/// Body returned with every 404
pub const NOT_FOUND_BODY: &str = "<h1>404 - File Not Found</h1>";

/// Queries shorter than this (in characters) never execute a search
pub const MIN_SEARCH_LENGTH: usize = 2;

/// Upper bound on rendered results per query
pub const MAX_RESULTS: usize = 10;

/// Debounce delay between the last keystroke and the search, in milliseconds
pub const SEARCH_DELAY_MS: u64 = 300;

/// Default snippet length when the query is not found in the text
pub const SNIPPET_LENGTH: usize = 150;

/// Characters kept before the first match in a snippet window
pub const SNIPPET_CONTEXT_BEFORE: usize = 50;

/// Characters kept after the first match in a snippet window
pub const SNIPPET_CONTEXT_AFTER: usize = 100;

/// Class applied to `<mark>` elements wrapping query matches
pub const HIGHLIGHT_CLASS: &str = "search-highlight";

pub const NO_RESULTS_MESSAGE: &str = "No results found";

/// Background applied to a revealed in-page result
pub const REVEAL_COLOR: &str = "rgba(0, 94, 255, 0.1)";

/// How long the reveal background stays before reverting, in milliseconds
pub const REVEAL_DURATION_MS: u64 = 2000;

/// Transition used while the reveal background fades in and out
pub const REVEAL_TRANSITION: &str = "background-color 0.3s";

/// Ellipsis marker used by every truncation in the search widget
pub const ELLIPSIS: &str = "...";
