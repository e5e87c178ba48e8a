//! Command-line interface for inspecting layered configuration.

pub mod commands;
pub mod display;
pub mod output;
pub mod types;

use anyhow::{Context, Result};

pub use types::{Cli, Commands, LogFormatArg};

use crate::infrastructure::config::{ConfigLoader, LOCAL_CONFIG_PATH, PROJECT_CONFIG_PATH};
use crate::infrastructure::logging::{LogConfig, LoggerImpl};
use crate::services::ConfigLookup;

/// Build the loader described by the global flags.
///
/// Environment overrides come first, then each `--config` file in the order
/// given. Without any `--config`, the standard optional project files are used.
pub fn build_loader(cli: &Cli) -> ConfigLoader {
    let mut loader = ConfigLoader::new();
    if !cli.no_env {
        loader = loader.with_env(cli.env_prefix.clone());
    }
    if cli.config.is_empty() {
        loader
            .with_optional_file(LOCAL_CONFIG_PATH)
            .with_optional_file(PROJECT_CONFIG_PATH)
    } else {
        cli.config
            .iter()
            .fold(loader, |loader, path| loader.with_file(path.clone()))
    }
}

/// Load every configured source into a lookup
pub fn load_lookup(cli: &Cli) -> Result<ConfigLookup> {
    build_loader(cli)
        .load()
        .context("Failed to load configuration")
}

/// Logging settings: `client.logging.*` from the lookup, then flag overrides.
pub fn log_config(cli: &Cli, lookup: &ConfigLookup) -> LogConfig {
    let mut config = LogConfig::from_lookup(lookup);
    if let Some(level) = &cli.log_level {
        config.level.clone_from(level);
    }
    if let Some(format) = cli.log_format {
        config.format = format.into();
    }
    config
}

/// Install the global logger; keep the returned guard alive
pub fn init_logging(cli: &Cli, lookup: &ConfigLookup) -> Result<LoggerImpl> {
    LoggerImpl::init(&log_config(cli, lookup)).context("Failed to initialize logging")
}

/// Report a fatal error and exit with status 1.
pub fn handle_error(err: &anyhow::Error, json_mode: bool) -> ! {
    if json_mode {
        let body = serde_json::json!({ "error": format!("{err:#}") });
        println!("{}", serde_json::to_string_pretty(&body).unwrap_or_default());
    } else {
        eprintln!("Error: {err:#}");
    }
    std::process::exit(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::ConfigValue;
    use crate::domain::ports::SharedBackend;
    use crate::infrastructure::config::MapConfigBackend;
    use crate::infrastructure::logging::{self, LogFormat};
    use clap::Parser;
    use std::sync::Arc;

    fn logging_lookup(level: &str, format: &str) -> ConfigLookup {
        let backend: MapConfigBackend = [
            (logging::keys::LEVEL, ConfigValue::from(level)),
            (logging::keys::FORMAT, ConfigValue::from(format)),
        ]
        .into_iter()
        .collect();
        ConfigLookup::new([Arc::new(backend) as SharedBackend])
    }

    #[test]
    fn test_parse_global_flags() {
        let cli = Cli::parse_from([
            "fabcfg", "-c", "a.yaml", "--config", "b.json", "--no-env", "--json", "get",
            "client.BCCSP.security.level", "--as", "int",
        ]);

        assert_eq!(cli.config.len(), 2);
        assert!(cli.no_env);
        assert!(cli.json);
        assert!(matches!(cli.command, Commands::Get(ref args) if args.key == "client.BCCSP.security.level"));
    }

    #[test]
    fn test_log_config_precedence() {
        let lookup = logging_lookup("ERROR", "json");

        let from_flags = Cli::parse_from([
            "fabcfg", "--log-level", "debug", "--log-format", "pretty", "crypto",
        ]);
        let config = log_config(&from_flags, &lookup);
        assert_eq!(config.level, "debug");
        assert_eq!(config.format, LogFormat::Pretty);

        let from_config = Cli::parse_from(["fabcfg", "crypto"]);
        let config = log_config(&from_config, &lookup);
        assert_eq!(config.level, "error");
        assert_eq!(config.format, LogFormat::Json);

        let config = log_config(&from_config, &ConfigLookup::default());
        assert_eq!(config.level, "warn");
        assert_eq!(config.format, LogFormat::Pretty);
    }

    #[test]
    fn test_loader_uses_given_files_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("first.yaml");
        let second = dir.path().join("second.yaml");
        std::fs::write(&first, "peer:\n  name: first\n").unwrap();
        std::fs::write(&second, "peer:\n  name: second\n  port: 7051\n").unwrap();

        let cli = Cli::parse_from([
            "fabcfg",
            "--no-env",
            "-c",
            first.to_str().unwrap(),
            "-c",
            second.to_str().unwrap(),
            "crypto",
        ]);
        let lookup = load_lookup(&cli).unwrap();

        assert_eq!(lookup.len(), 2);
        assert_eq!(lookup.get_string("peer.name"), "first");
        assert_eq!(lookup.get_int("peer.port"), 7051);
    }
}
