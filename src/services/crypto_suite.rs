//! Crypto-suite (BCCSP) settings read from a layered configuration.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::ports::{CryptoSuiteConfig, SharedBackend};
use crate::infrastructure::pathvar;
use crate::services::lookup::ConfigLookup;

const DEF_ENABLED: bool = true;
const DEF_HASH_ALGORITHM: &str = "SHA2";
const DEF_LEVEL: i64 = 256;
const DEF_PROVIDER: &str = "SW";
const DEF_SOFT_VERIFY: bool = true;

/// Configuration keys read by [`CryptoConfig`]
pub mod keys {
    /// Crypto suite on or off
    pub const SECURITY_ENABLED: &str = "client.BCCSP.security.enabled";
    /// Security level in bits
    pub const SECURITY_LEVEL: &str = "client.BCCSP.security.level";
    /// Provider name, `SW` or `PKCS11`
    pub const SECURITY_DEFAULT_PROVIDER: &str = "client.BCCSP.security.default.provider";
    /// Hash algorithm family
    pub const SECURITY_HASH_ALGORITHM: &str = "client.BCCSP.security.hashAlgorithm";
    /// Software signature verification
    pub const SECURITY_SOFT_VERIFY: &str = "client.BCCSP.security.softVerify";
    /// Comma-separated PKCS11 library candidates
    pub const SECURITY_LIBRARY: &str = "client.BCCSP.security.library";
    /// PKCS11 PIN
    pub const SECURITY_PIN: &str = "client.BCCSP.security.pin";
    /// PKCS11 token label
    pub const SECURITY_LABEL: &str = "client.BCCSP.security.label";
    /// Ephemeral keys
    pub const SECURITY_EPHEMERAL: &str = "client.BCCSP.security.ephemeral";
    /// Root of the crypto store
    pub const CRYPTO_STORE_PATH: &str = "client.credentialStore.cryptoStore.path";
}

/// Crypto suite configuration for the client
///
/// Defaults apply only when a key is absent from every backend. A key that is
/// present but holds an unusable value reads as the accessor's zero value.
#[derive(Debug, Clone, Default)]
pub struct CryptoConfig {
    backend: ConfigLookup,
}

impl CryptoConfig {
    /// Reader over a fresh lookup of `backends`
    pub fn from_backends(backends: impl IntoIterator<Item = SharedBackend>) -> Self {
        Self::from_lookup(ConfigLookup::new(backends))
    }

    /// Reader over an existing lookup
    pub const fn from_lookup(backend: ConfigLookup) -> Self {
        Self { backend }
    }

    /// The lookup the settings are read from
    pub const fn lookup(&self) -> &ConfigLookup {
        &self.backend
    }

    fn bool_or(&self, key: &str, default: bool) -> bool {
        self.backend
            .lookup(key)
            .map_or(default, |v| v.as_lenient_bool().unwrap_or_default())
    }
}

impl From<ConfigLookup> for CryptoConfig {
    fn from(lookup: ConfigLookup) -> Self {
        Self::from_lookup(lookup)
    }
}

impl CryptoSuiteConfig for CryptoConfig {
    fn is_security_enabled(&self) -> bool {
        self.bool_or(keys::SECURITY_ENABLED, DEF_ENABLED)
    }

    fn security_algorithm(&self) -> String {
        self.backend
            .lookup(keys::SECURITY_HASH_ALGORITHM)
            .map_or_else(|| DEF_HASH_ALGORITHM.to_string(), |v| v.to_config_string())
    }

    fn security_level(&self) -> i64 {
        self.backend
            .lookup(keys::SECURITY_LEVEL)
            .map_or(DEF_LEVEL, |v| v.as_int().unwrap_or_default())
    }

    fn security_provider(&self) -> String {
        self.backend
            .lookup(keys::SECURITY_DEFAULT_PROVIDER)
            .map_or_else(|| DEF_PROVIDER.to_string(), |v| v.to_config_string())
            .to_lowercase()
    }

    fn soft_verify(&self) -> bool {
        self.bool_or(keys::SECURITY_SOFT_VERIFY, DEF_SOFT_VERIFY)
    }

    fn security_provider_lib_path(&self) -> String {
        let configured = self.backend.get_string(keys::SECURITY_LIBRARY);
        let candidates: Vec<&str> = configured.split(',').map(str::trim).collect();
        debug!(?candidates, "configured BCCSP lib paths");

        let lib = candidates
            .iter()
            .find(|path| !path.is_empty() && may_exist(Path::new(path)))
            .map(|path| (*path).to_string())
            .unwrap_or_default();

        if lib.is_empty() {
            debug!("softhsm library was not found");
        } else {
            debug!(%lib, "found softhsm library");
        }
        lib
    }

    fn security_provider_pin(&self) -> String {
        self.backend.get_string(keys::SECURITY_PIN)
    }

    fn security_provider_label(&self) -> String {
        self.backend.get_string(keys::SECURITY_LABEL)
    }

    fn key_store_path(&self) -> PathBuf {
        let store = pathvar::subst(&self.backend.get_string(keys::CRYPTO_STORE_PATH));
        Path::new(&store).join("keystore")
    }
}

/// True unless the filesystem reports the path as not found.
fn may_exist(path: &Path) -> bool {
    match std::fs::metadata(path) {
        Ok(_) => true,
        Err(err) => err.kind() != std::io::ErrorKind::NotFound,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::ConfigValue;
    use crate::infrastructure::config::MapConfigBackend;
    use std::sync::Arc;

    fn config(pairs: Vec<(&str, ConfigValue)>) -> CryptoConfig {
        CryptoConfig::from_backends([
            Arc::new(pairs.into_iter().collect::<MapConfigBackend>()) as SharedBackend
        ])
    }

    #[test]
    fn test_defaults_when_absent() {
        let cfg = config(vec![]);

        assert!(cfg.is_security_enabled());
        assert_eq!(cfg.security_algorithm(), "SHA2");
        assert_eq!(cfg.security_level(), 256);
        assert_eq!(cfg.security_provider(), "sw");
        assert!(cfg.soft_verify());
        assert_eq!(cfg.security_provider_lib_path(), "");
        assert_eq!(cfg.security_provider_pin(), "");
        assert_eq!(cfg.key_store_path(), PathBuf::from("keystore"));
    }

    #[test]
    fn test_present_but_unusable_values_read_as_zero() {
        let cfg = config(vec![
            (keys::SECURITY_ENABLED, ConfigValue::from("yes please")),
            (keys::SECURITY_LEVEL, ConfigValue::from("high")),
            (keys::SECURITY_HASH_ALGORITHM, ConfigValue::Null),
        ]);

        assert!(!cfg.is_security_enabled());
        assert_eq!(cfg.security_level(), 0);
        assert_eq!(cfg.security_algorithm(), "");
    }

    #[test]
    fn test_flags_accept_string_and_numeric_booleans() {
        let cfg = config(vec![
            (keys::SECURITY_ENABLED, ConfigValue::from("true")),
            (keys::SECURITY_SOFT_VERIFY, ConfigValue::Int(1)),
        ]);
        assert!(cfg.is_security_enabled());
        assert!(cfg.soft_verify());

        let cfg = config(vec![
            (keys::SECURITY_ENABLED, ConfigValue::from("0")),
            (keys::SECURITY_SOFT_VERIFY, ConfigValue::Int(0)),
        ]);
        assert!(!cfg.is_security_enabled());
        assert!(!cfg.soft_verify());
    }

    #[test]
    fn test_provider_is_lower_cased() {
        let cfg = config(vec![(keys::SECURITY_DEFAULT_PROVIDER, ConfigValue::from("PKCS11"))]);
        assert_eq!(cfg.security_provider(), "pkcs11");
    }

    #[test]
    fn test_lib_path_picks_first_existing() {
        let dir = tempfile::tempdir().unwrap();
        let lib = dir.path().join("libsofthsm2.so");
        std::fs::write(&lib, b"").unwrap();

        let configured = format!("/nonexistent/libsofthsm2.so, {} ,/also/missing.so", lib.display());
        let cfg = config(vec![(keys::SECURITY_LIBRARY, ConfigValue::from(configured))]);

        assert_eq!(cfg.security_provider_lib_path(), lib.display().to_string());
    }

    #[test]
    fn test_lib_path_none_found() {
        let cfg = config(vec![(
            keys::SECURITY_LIBRARY,
            ConfigValue::from("/nonexistent/a.so,/nonexistent/b.so"),
        )]);
        assert_eq!(cfg.security_provider_lib_path(), "");
    }
}
