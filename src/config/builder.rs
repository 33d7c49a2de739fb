//! Type-safe builder for `SiteConfig` using the typestate pattern
//!
//! The document root is the only required field; `build()` does not exist
//! until it has been set.

use crate::utils::{DEFAULT_HOST, DEFAULT_PORT};
use anyhow::{Context, Result};
use std::marker::PhantomData;
use std::path::PathBuf;

use super::types::{SearchConfig, SiteConfig};

// Type states for the builder
pub struct WithRootDir;

pub struct SiteConfigBuilder<State = ()> {
    pub(crate) root_dir: Option<PathBuf>,
    pub(crate) host: String,
    pub(crate) port: u16,
    pub(crate) search: SearchConfig,
    pub(crate) _phantom: PhantomData<State>,
}

impl Default for SiteConfigBuilder<()> {
    fn default() -> Self {
        Self {
            root_dir: None,
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            search: SearchConfig::default(),
            _phantom: PhantomData,
        }
    }
}

impl SiteConfig {
    /// Create a builder for configuring a `SiteConfig` with a fluent interface
    #[must_use]
    pub fn builder() -> SiteConfigBuilder<()> {
        SiteConfigBuilder::default()
    }
}

impl SiteConfigBuilder<()> {
    pub fn root_dir(self, dir: impl Into<PathBuf>) -> SiteConfigBuilder<WithRootDir> {
        SiteConfigBuilder {
            root_dir: Some(dir.into()),
            host: self.host,
            port: self.port,
            search: self.search,
            _phantom: PhantomData,
        }
    }
}

// Build method only available when the root is set
impl SiteConfigBuilder<WithRootDir> {
    pub fn build(self) -> Result<SiteConfig> {
        let root_dir = self
            .root_dir
            .context("root_dir is required")?;

        // Relative roots are anchored at the current directory so request
        // resolution does not depend on later cwd changes.
        let root_dir = if root_dir.is_absolute() {
            root_dir
        } else {
            std::env::current_dir()
                .context("Failed to get current directory")?
                .join(root_dir)
        };

        Ok(SiteConfig {
            root_dir,
            host: self.host,
            port: self.port,
            search: self.search,
        })
    }
}
