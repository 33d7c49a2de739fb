//! Error types for the search widget
//!
//! Missing page anchors are not errors: the widget simply does not mount.
//! These cover the inputs the widget cannot work with at all.

use std::string::FromUtf8Error;
use thiserror::Error;

/// Result type alias for widget operations
pub type WidgetResult<T> = Result<T, WidgetError>;

#[derive(Debug, Error)]
pub enum WidgetError {
    /// The page URL could not be parsed
    #[error("Invalid page URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// lol_html rejected the document while mounting the container
    #[error("HTML rewrite error: {0}")]
    Rewrite(String),

    #[error("Invalid UTF-8 in rewritten HTML: {0}")]
    Utf8(#[from] FromUtf8Error),
}
