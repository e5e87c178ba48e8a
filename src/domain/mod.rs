//! Domain layer for the layered configuration lookup
//!
//! This module contains the configuration value model, the duration grammar
//! and the ports that backends and typed readers implement.

pub mod error;
pub mod models;
pub mod ports;

pub use error::{ConfigError, ParseDurationError};
