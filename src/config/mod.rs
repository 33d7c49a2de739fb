//! Configuration module
//!
//! This module provides `SiteConfig`, its type-safe builder, and the
//! `SearchConfig` constants shared by the search widget.

// Sub-modules
pub mod builder;
pub mod getters;
pub mod methods;
pub mod types;

// Re-exports for public API
pub use builder::{SiteConfigBuilder, WithRootDir};
pub use types::{SearchConfig, SiteConfig, parse_port};
