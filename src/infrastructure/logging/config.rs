//! Logging settings.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::services::ConfigLookup;

/// Configuration keys under `client.logging`
pub mod keys {
    /// Log level name
    pub const LEVEL: &str = "client.logging.level";
    /// `json` or `pretty`
    pub const FORMAT: &str = "client.logging.format";
    /// Directory for rolling log files
    pub const DIR: &str = "client.logging.dir";
    /// `daily`, `hourly` or `never`
    pub const ROTATION: &str = "client.logging.rotation";
}

/// Logging configuration
///
/// Usually read from the `client.logging` section of the layered
/// configuration with [`LogConfig::from_lookup`]. Command-line flags override
/// individual fields afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format on stderr
    #[serde(default)]
    pub format: LogFormat,

    /// Directory for rolling JSON log files; stderr only when unset
    pub log_dir: Option<PathBuf>,

    /// Write log lines to stderr
    #[serde(default = "default_true")]
    pub enable_stderr: bool,

    /// How often the log file rolls over
    #[serde(default)]
    pub rotation: RotationPolicy,
}

/// Log line format
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// One JSON object per line
    Json,
    /// Multi-line human-readable output
    #[default]
    Pretty,
}

/// Log file rotation schedule
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RotationPolicy {
    /// New file every day
    #[default]
    Daily,
    /// New file every hour
    Hourly,
    /// A single file
    Never,
}

impl LogConfig {
    /// Read `client.logging.*`, keeping the default for absent or unknown values.
    pub fn from_lookup(lookup: &ConfigLookup) -> Self {
        let defaults = Self::default();

        let level = Some(lookup.get_lower_string(keys::LEVEL))
            .filter(|level| !level.is_empty())
            .unwrap_or(defaults.level);
        let format = match lookup.get_lower_string(keys::FORMAT).as_str() {
            "json" => LogFormat::Json,
            "pretty" => LogFormat::Pretty,
            _ => defaults.format,
        };
        let rotation = match lookup.get_lower_string(keys::ROTATION).as_str() {
            "daily" => RotationPolicy::Daily,
            "hourly" => RotationPolicy::Hourly,
            "never" => RotationPolicy::Never,
            _ => defaults.rotation,
        };
        let log_dir = Some(lookup.get_string(keys::DIR))
            .filter(|dir| !dir.is_empty())
            .map(PathBuf::from);

        Self {
            level,
            format,
            log_dir,
            enable_stderr: defaults.enable_stderr,
            rotation,
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
            log_dir: None,
            enable_stderr: true,
            rotation: RotationPolicy::default(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

const fn default_true() -> bool {
    true
}
