//! CLI command implementations.

pub mod crypto;
pub mod get;
