//! Logging infrastructure
//!
//! Structured logging using tracing and tracing-subscriber:
//! - JSON or pretty stderr output
//! - Optional rolling JSON log files
//! - Settings read from the `client.logging` configuration section

pub mod config;
pub mod logger;

pub use config::{keys, LogConfig, LogFormat, RotationPolicy};
pub use logger::{parse_log_level, LoggerImpl};
