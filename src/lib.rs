//! Fabric Config Ext - layered configuration for Fabric clients
//!
//! Configuration is read through an ordered list of backends (in-memory
//! maps, YAML/JSON files, environment variables). A [`ConfigLookup`] resolves
//! each dotted key to the first backend that has it and offers typed
//! accessors that fall back to zero values instead of failing. Typed readers
//! such as [`CryptoConfig`] layer their own defaults on top.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): configuration values, duration grammar, ports
//! - **Service Layer** (`services`): the lookup facade and typed readers
//! - **Infrastructure Layer** (`infrastructure`): backends, loading, logging
//! - **CLI Layer** (`cli`): the `fabcfg` inspection tool
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use fabric_config_ext::{ConfigLookup, CryptoConfig, CryptoSuiteConfig, MapConfigBackend};
//!
//! let backend: MapConfigBackend = [("client.BCCSP.security.default.provider", "PKCS11")]
//!     .into_iter()
//!     .collect();
//! let lookup = ConfigLookup::new([Arc::new(backend) as fabric_config_ext::SharedBackend]);
//! let crypto = CryptoConfig::from_lookup(lookup);
//!
//! assert_eq!(crypto.security_provider(), "pkcs11");
//! assert_eq!(crypto.security_level(), 256);
//! ```

pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::models::ConfigValue;
pub use domain::ports::{ConfigBackend, ConfigProvider, CryptoSuiteConfig, SharedBackend};
pub use domain::{ConfigError, ParseDurationError};
pub use infrastructure::config::{ConfigFormat, ConfigLoader, EnvConfigBackend, MapConfigBackend};
pub use services::{ConfigLookup, CryptoConfig};
