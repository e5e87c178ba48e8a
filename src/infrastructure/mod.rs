//! Infrastructure layer module
//!
//! This module contains the adapters that populate configuration backends
//! and the ambient services around them:
//! - Configuration backends, providers and loading
//! - Logging infrastructure
//! - Path variable substitution
//!
//! Infrastructure implementations satisfy the port traits defined in the domain layer.

pub mod config;
pub mod logging;
pub mod pathvar;
