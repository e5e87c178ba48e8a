//! Composing providers into a lookup.

use std::fmt;
use std::path::PathBuf;

use super::env_backend::DEFAULT_ENV_PREFIX;
use super::provider::{from_backends, from_env, from_file, from_optional_file};
use crate::domain::error::ConfigError;
use crate::domain::ports::{ConfigProvider, SharedBackend};
use crate::services::lookup::ConfigLookup;

/// Project config file, created by hand or by deployment tooling
pub const PROJECT_CONFIG_PATH: &str = ".fabcfg/config.yaml";

/// Local overrides on top of the project config
pub const LOCAL_CONFIG_PATH: &str = ".fabcfg/local.yaml";

/// Configuration loader composing providers into a [`ConfigLookup`]
///
/// Providers are consulted in registration order and their backends are kept
/// in that order, so the first registered provider has the highest priority.
/// Nothing is merged; each key resolves to the first backend that has it.
#[derive(Default)]
pub struct ConfigLoader {
    providers: Vec<Box<dyn ConfigProvider>>,
}

impl ConfigLoader {
    /// Loader with no providers
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard layering
    ///
    /// Precedence (highest to lowest):
    /// 1. Environment variables (`FABCFG_*` prefix)
    /// 2. `.fabcfg/local.yaml` (optional)
    /// 3. `.fabcfg/config.yaml` (optional)
    pub fn standard() -> Self {
        Self::new()
            .with_env(DEFAULT_ENV_PREFIX)
            .with_optional_file(LOCAL_CONFIG_PATH)
            .with_optional_file(PROJECT_CONFIG_PATH)
    }

    /// Append a provider below those already registered
    #[must_use]
    pub fn with_provider(mut self, provider: impl ConfigProvider + 'static) -> Self {
        self.providers.push(Box::new(provider));
        self
    }

    /// Append a file that must exist
    #[must_use]
    pub fn with_file(self, path: impl Into<PathBuf>) -> Self {
        self.with_provider(from_file(path.into()))
    }

    /// Append a file that is skipped when missing
    #[must_use]
    pub fn with_optional_file(self, path: impl Into<PathBuf>) -> Self {
        self.with_provider(from_optional_file(path.into()))
    }

    /// Append environment variables starting with `prefix`
    #[must_use]
    pub fn with_env(self, prefix: impl Into<String>) -> Self {
        self.with_provider(from_env(prefix.into()))
    }

    /// Append an already built backend
    #[must_use]
    pub fn with_backend(self, backend: SharedBackend) -> Self {
        self.with_provider(from_backends(vec![backend]))
    }

    /// Invoke every provider and collect their backends in priority order
    pub fn backends(&self) -> Result<Vec<SharedBackend>, ConfigError> {
        let mut backends = Vec::new();
        for provider in &self.providers {
            backends.extend(provider.backends()?);
        }
        Ok(backends)
    }

    /// Load configuration into a lookup
    pub fn load(&self) -> Result<ConfigLookup, ConfigError> {
        let backends = self.backends()?;
        tracing::debug!(
            providers = self.providers.len(),
            backends = backends.len(),
            "configuration loaded"
        );
        Ok(ConfigLookup::new(backends))
    }
}

impl fmt::Debug for ConfigLoader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigLoader")
            .field("providers", &self.providers.len())
            .finish()
    }
}
