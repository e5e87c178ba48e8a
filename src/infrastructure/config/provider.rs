//! Ready-made [`ConfigProvider`]s
//!
//! Each constructor captures what it needs and reads its source only when the
//! provider is invoked.

use std::path::PathBuf;
use std::sync::Arc;

use super::env_backend::EnvConfigBackend;
use super::file_backend::{load_file, parse_document, ConfigFormat};
use crate::domain::error::ConfigError;
use crate::domain::ports::{ConfigProvider, SharedBackend};

/// Provider for a configuration file that must exist
pub fn from_file(path: PathBuf) -> impl ConfigProvider {
    move || -> Result<Vec<SharedBackend>, ConfigError> {
        let backend = load_file(&path)?;
        Ok(vec![Arc::new(backend) as SharedBackend])
    }
}

/// Provider for a configuration file that may be missing
///
/// A missing file contributes no backend. Any other read or parse failure is
/// still an error.
pub fn from_optional_file(path: PathBuf) -> impl ConfigProvider {
    move || -> Result<Vec<SharedBackend>, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "optional config file not present");
            return Ok(Vec::new());
        }
        let backend = load_file(&path)?;
        Ok(vec![Arc::new(backend) as SharedBackend])
    }
}

/// Provider for an in-memory document
pub fn from_raw(bytes: Vec<u8>, format: ConfigFormat) -> impl ConfigProvider {
    move || -> Result<Vec<SharedBackend>, ConfigError> {
        let text = std::str::from_utf8(&bytes).map_err(|e| ConfigError::Parse {
            origin: "raw bytes".to_string(),
            format: format.name(),
            message: e.to_string(),
        })?;
        let backend = parse_document(text, format, "raw bytes")?;
        Ok(vec![Arc::new(backend) as SharedBackend])
    }
}

/// Provider for environment variables starting with `prefix`
pub fn from_env(prefix: String) -> impl ConfigProvider {
    move || -> Result<Vec<SharedBackend>, ConfigError> {
        let backend = EnvConfigBackend::from_env(&prefix);
        Ok(vec![Arc::new(backend) as SharedBackend])
    }
}

/// Provider that hands out already-built backends
pub fn from_backends(backends: Vec<SharedBackend>) -> impl ConfigProvider {
    move || -> Result<Vec<SharedBackend>, ConfigError> { Ok(backends.clone()) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::ConfigBackend;

    #[test]
    fn test_from_raw_yaml() {
        let provider = from_raw(
            b"client:\n  BCCSP:\n    security:\n      level: 384\n".to_vec(),
            ConfigFormat::Yaml,
        );
        let backends = provider.backends().unwrap();

        assert_eq!(backends.len(), 1);
        assert!(backends[0].lookup("client.BCCSP.security.level").is_some());
    }

    #[test]
    fn test_from_raw_rejects_invalid_utf8() {
        let provider = from_raw(vec![0xff, 0xfe], ConfigFormat::Json);
        assert!(matches!(
            provider.backends(),
            Err(ConfigError::Parse { format: "json", .. })
        ));
    }

    #[test]
    fn test_from_file_missing_is_error() {
        let provider = from_file(PathBuf::from("/nonexistent/fabcfg/config.yaml"));
        assert!(matches!(provider.backends(), Err(ConfigError::Io { .. })));
    }

    #[test]
    fn test_from_optional_file_missing_is_empty() {
        let provider = from_optional_file(PathBuf::from("/nonexistent/fabcfg/config.yaml"));
        assert!(provider.backends().unwrap().is_empty());
    }
}
