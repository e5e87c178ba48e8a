//! Port trait definitions
//!
//! - `ConfigBackend`: a single source of configuration key/value pairs
//! - `ConfigProvider`: produces an ordered list of backends
//! - `CryptoSuiteConfig`: typed crypto-suite settings read from a lookup

pub mod config_backend;
pub mod crypto_suite_config;

pub use config_backend::{ConfigBackend, ConfigProvider, SharedBackend};
pub use crypto_suite_config::CryptoSuiteConfig;
