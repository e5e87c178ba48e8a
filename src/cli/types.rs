//! CLI type definitions
//!
//! This module contains clap command structures that define the CLI interface.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::cli::commands::get::GetArgs;
use crate::infrastructure::config::DEFAULT_ENV_PREFIX;
use crate::infrastructure::logging::LogFormat;

/// Top-level command line
#[derive(Parser, Debug)]
#[command(name = "fabcfg")]
#[command(about = "Inspect layered Fabric client configuration", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file; repeat to layer several, earlier files take priority.
    /// Defaults to .fabcfg/local.yaml then .fabcfg/config.yaml when omitted.
    #[arg(short, long = "config", value_name = "FILE", global = true)]
    pub config: Vec<PathBuf>,

    /// Prefix for environment variable overrides
    #[arg(long, default_value = DEFAULT_ENV_PREFIX, global = true)]
    pub env_prefix: String,

    /// Ignore environment variable overrides
    #[arg(long, global = true)]
    pub no_env: bool,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Log level (trace, debug, info, warn, error); falls back to client.logging.level
    #[arg(long, value_name = "LEVEL", global = true)]
    pub log_level: Option<String>,

    /// Log output format on stderr; falls back to client.logging.format, then pretty
    #[arg(long, value_enum, global = true)]
    pub log_format: Option<LogFormatArg>,
}

/// `fabcfg` subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve a single configuration key
    Get(GetArgs),

    /// Show the crypto suite (BCCSP) settings
    Crypto,
}

/// Log format accepted by `--log-format`
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormatArg {
    /// JSON lines
    Json,
    /// Human-readable
    Pretty,
}

impl From<LogFormatArg> for LogFormat {
    fn from(arg: LogFormatArg) -> Self {
        match arg {
            LogFormatArg::Json => Self::Json,
            LogFormatArg::Pretty => Self::Pretty,
        }
    }
}
