//! Port for typed crypto-suite settings.

use std::path::PathBuf;

/// Configuration items for the client crypto suite (BCCSP).
pub trait CryptoSuiteConfig: Send + Sync {
    /// Whether the crypto suite is enabled (default true)
    fn is_security_enabled(&self) -> bool;
    /// Hash algorithm family (default `SHA2`)
    fn security_algorithm(&self) -> String;
    /// Security level in bits (default 256)
    fn security_level(&self) -> i64;
    /// Provider name, lower-cased (`sw`, `pkcs11`)
    fn security_provider(&self) -> String;
    /// Whether signatures are verified in software (default true)
    fn soft_verify(&self) -> bool;
    /// First configured PKCS11 library that exists on disk, or empty
    fn security_provider_lib_path(&self) -> String;
    /// PKCS11 user PIN, verbatim
    fn security_provider_pin(&self) -> String;
    /// PKCS11 token label
    fn security_provider_label(&self) -> String;
    /// Crypto store path with variables substituted, joined with `keystore`
    fn key_store_path(&self) -> PathBuf;
}
