//! Page classification from the URL path

use serde::{Deserialize, Serialize};

use super::extractors::{self, Extractor};

/// Slugs that mark a product landing page
const PRODUCT_SLUGS: &[&str] = &[
    "valorant",
    "rust",
    "fortnite",
    "battlefield",
    "delta-force",
    "bo6",
    "warzone",
    "hwid",
];

/// Kind of page, which decides what content the search reads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageType {
    Home,
    Products,
    Reviews,
    Forum,
    Status,
    Guides,
    Support,
    Generic,
}

impl PageType {
    /// Classify a page by the last segment of its path.
    ///
    /// Keyword checks run before the home check, so `/forum/` (empty last
    /// segment) is Home while `/forum.html` is Forum.
    #[must_use]
    pub fn detect(path: &str) -> Self {
        let path = path.to_lowercase();
        let file_name = match path.rsplit('/').next() {
            Some(name) if !name.is_empty() => name,
            _ => "index.html",
        };

        if file_name.contains("forum") {
            Self::Forum
        } else if file_name.contains("review") {
            Self::Reviews
        } else if file_name.contains("status") {
            Self::Status
        } else if file_name.contains("guide") {
            Self::Guides
        } else if file_name.contains("support") {
            Self::Support
        } else if file_name == "index.html" {
            Self::Home
        } else if PRODUCT_SLUGS.iter().any(|slug| file_name.contains(slug)) {
            Self::Products
        } else {
            Self::Generic
        }
    }

    /// Extractor that searches this kind of page
    #[must_use]
    pub fn extractor(self) -> Extractor {
        match self {
            Self::Home | Self::Products => extractors::search_products,
            Self::Reviews => extractors::search_reviews,
            Self::Forum => extractors::search_forum,
            Self::Status => extractors::search_status,
            Self::Guides => extractors::search_guides,
            Self::Support => extractors::search_support,
            Self::Generic => extractors::search_generic,
        }
    }
}
