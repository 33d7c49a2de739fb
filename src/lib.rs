//! Static site serving with clean URLs, plus the site's in-page search.
//!
//! * [`responder`] maps request paths to files under a document root and
//!   redirects `.html` URLs to their extensionless form.
//! * [`server`] puts the responder behind an axum fallback route.
//! * [`search`] scans a parsed page for a query and renders the dropdown.

pub mod config;
pub mod responder;
pub mod search;
pub mod server;
pub mod utils;

pub use config::{SearchConfig, SiteConfig};
pub use responder::{Reply, StaticResponder};
pub use search::{Page, PageType, SearchResult, SearchWidget, perform_search};
pub use server::{ServerError, create_router, serve, serve_on};

/// Install the global `tracing` subscriber.
///
/// Honours `RUST_LOG`, defaulting to `info`. `log` records from the page
/// processing code are forwarded into the same subscriber.
pub fn init_logging() {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(filter)
        .try_init();
}
