//! Builder methods available for all states
//!
//! This module contains methods that can be called on the builder
//! regardless of its current type state.

use super::builder::SiteConfigBuilder;
use super::types::SearchConfig;

impl<State> SiteConfigBuilder<State> {
    /// Set the listening port.
    ///
    /// Port `0` asks the OS for an ephemeral port, which is what the
    /// integration tests use.
    ///
    /// ```rust
    /// # use sitewright::config::SiteConfig;
    /// # fn main() -> anyhow::Result<()> {
    /// let config = SiteConfig::builder()
    ///     .root_dir("/srv/site")
    ///     .port(8080)
    ///     .build()?;
    /// assert_eq!(config.port(), 8080);
    /// # Ok(())
    /// # }
    /// ```
    #[must_use]
    pub fn port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    #[must_use]
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Replace the search widget constants
    #[must_use]
    pub fn search(mut self, search: SearchConfig) -> Self {
        self.search = search;
        self
    }
}
