//! Implementation of the `fabcfg crypto` command.

use anyhow::Result;
use serde::Serialize;

use crate::cli::display::{mask_secret, settings_table};
use crate::cli::output::{output, CommandOutput};
use crate::domain::ports::CryptoSuiteConfig;
use crate::services::{ConfigLookup, CryptoConfig};

/// Crypto-suite settings as reported by `fabcfg crypto`
#[derive(Debug, Serialize)]
pub struct CryptoOutput {
    /// Whether the crypto suite is enabled
    pub security_enabled: bool,
    /// Hash algorithm family
    pub hash_algorithm: String,
    /// Security level in bits
    pub security_level: i64,
    /// Lower-cased provider name
    pub provider: String,
    /// Software signature verification
    pub soft_verify: bool,
    /// PKCS11 library found on disk, or empty
    pub provider_lib_path: String,
    /// Masked PIN; empty when no PIN is set
    pub provider_pin: String,
    /// PKCS11 token label
    pub provider_label: String,
    /// Resolved key store directory
    pub key_store_path: String,
}

impl CryptoOutput {
    /// Snapshot `config`, masking the PIN
    pub fn from_config(config: &dyn CryptoSuiteConfig) -> Self {
        Self {
            security_enabled: config.is_security_enabled(),
            hash_algorithm: config.security_algorithm(),
            security_level: config.security_level(),
            provider: config.security_provider(),
            soft_verify: config.soft_verify(),
            provider_lib_path: config.security_provider_lib_path(),
            provider_pin: mask_secret(&config.security_provider_pin()),
            provider_label: config.security_provider_label(),
            key_store_path: config.key_store_path().display().to_string(),
        }
    }
}

impl CommandOutput for CryptoOutput {
    fn to_human(&self) -> String {
        settings_table(&[
            ("security enabled", self.security_enabled.to_string()),
            ("hash algorithm", self.hash_algorithm.clone()),
            ("security level", self.security_level.to_string()),
            ("provider", self.provider.clone()),
            ("soft verify", self.soft_verify.to_string()),
            ("provider library", self.provider_lib_path.clone()),
            ("provider pin", self.provider_pin.clone()),
            ("provider label", self.provider_label.clone()),
            ("key store", self.key_store_path.clone()),
        ])
        .to_string()
    }
}

/// Print the crypto-suite settings read from `lookup`
pub fn execute(lookup: &ConfigLookup, json_mode: bool) -> Result<()> {
    let config = CryptoConfig::from_lookup(lookup.clone());
    output(&CryptoOutput::from_config(&config), json_mode);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::ConfigValue;
    use crate::domain::ports::SharedBackend;
    use crate::infrastructure::config::MapConfigBackend;
    use crate::services::crypto_suite::keys;
    use std::sync::Arc;

    #[test]
    fn test_pin_is_masked() {
        let backend: MapConfigBackend = [
            (keys::SECURITY_PIN, ConfigValue::from("98765432")),
            (keys::SECURITY_DEFAULT_PROVIDER, ConfigValue::from("PKCS11")),
        ]
        .into_iter()
        .collect();
        let config = CryptoConfig::from_backends([Arc::new(backend) as SharedBackend]);

        let out = CryptoOutput::from_config(&config);
        assert_eq!(out.provider_pin, "********");
        assert_eq!(out.provider, "pkcs11");
        assert!(!out.to_human().contains("98765432"));
    }

    #[test]
    fn test_defaults_rendered() {
        let out = CryptoOutput::from_config(&CryptoConfig::default());
        let json = out.to_json();

        assert_eq!(json["hash_algorithm"], "SHA2");
        assert_eq!(json["security_level"], 256);
        assert_eq!(json["provider"], "sw");
        assert_eq!(json["provider_pin"], "");
    }
}
