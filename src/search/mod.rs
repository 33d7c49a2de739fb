//! In-page search widget
//!
//! Searches a parsed page for case-insensitive substring matches of a query.
//! Every query rescans the document with the extractor for the page's type;
//! there is no index and no ranking beyond document order.

pub mod errors;
pub mod extractors;
pub mod highlight;
pub mod mount;
pub mod page;
pub mod page_type;
pub mod render;
pub mod selectors;
pub mod session;
pub mod snippet;
pub mod types;
pub mod widget;

pub use errors::{WidgetError, WidgetResult};
pub use extractors::{Extractor, perform_search};
pub use highlight::highlight_text;
pub use mount::mount_results_container;
pub use page::Page;
pub use page_type::PageType;
pub use render::{ResultsContainer, render_results, render_results_with_selection};
pub use session::{SearchSession, SessionUpdate, WidgetEvent};
pub use snippet::extract_snippet;
pub use types::{ResultKind, SearchResult};
pub use widget::{ClickAction, Key, Phase, RevealEffect, SearchWidget};
