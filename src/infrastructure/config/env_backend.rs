//! Environment variable backend.

use std::borrow::Cow;
use std::collections::HashMap;

use figment::providers::Env;

use crate::domain::models::ConfigValue;
use crate::domain::ports::ConfigBackend;

/// Prefix used when none is configured.
pub const DEFAULT_ENV_PREFIX: &str = "FABCFG_";

/// Backend over prefixed environment variables
///
/// `FABCFG_CLIENT__BCCSP__SECURITY__LEVEL=384` is stored as
/// `client.bccsp.security.level`. Environment names cannot carry the mixed
/// case used in file keys, so lookups here are case-insensitive.
///
/// A value becomes a boolean or number only when that reading renders back
/// to the exact same text: `384` is an integer, while `0123` stays a string.
///
/// The environment is read once, at construction.
#[derive(Debug, Clone)]
pub struct EnvConfigBackend {
    prefix: String,
    values: HashMap<String, ConfigValue>,
}

impl EnvConfigBackend {
    /// Snapshot every variable starting with `prefix`.
    pub fn from_env(prefix: &str) -> Self {
        let values: HashMap<String, ConfigValue> = Env::prefixed(prefix)
            .split("__")
            .iter()
            .map(|(key, raw)| (key.as_str().to_lowercase(), typed_value(raw)))
            .collect();

        tracing::debug!(prefix, keys = values.len(), "loaded environment overrides");
        Self {
            prefix: prefix.to_string(),
            values,
        }
    }

    /// Prefix this backend was read with
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Number of variables captured
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when no variable carried the prefix
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Promote `raw` to a bool or number only if it renders back unchanged.
fn typed_value(raw: String) -> ConfigValue {
    match raw.as_str() {
        "true" => return ConfigValue::Bool(true),
        "false" => return ConfigValue::Bool(false),
        _ => {}
    }
    if let Ok(n) = raw.parse::<i64>() {
        if n.to_string() == raw {
            return ConfigValue::Int(n);
        }
    }
    if let Ok(f) = raw.parse::<f64>() {
        if f.is_finite() && f.to_string() == raw {
            return ConfigValue::Float(f);
        }
    }
    ConfigValue::String(raw)
}

impl ConfigBackend for EnvConfigBackend {
    fn lookup(&self, key: &str) -> Option<&ConfigValue> {
        let key = if key.bytes().any(|b| b.is_ascii_uppercase()) {
            Cow::Owned(key.to_lowercase())
        } else {
            Cow::Borrowed(key)
        };
        self.values.get(key.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_keys_from_env() {
        temp_env::with_vars(
            [
                ("FABCFGTEST_CLIENT__BCCSP__SECURITY__LEVEL", Some("384")),
                ("FABCFGTEST_CLIENT__BCCSP__SECURITY__ENABLED", Some("false")),
                ("FABCFGTEST_CLIENT__BCCSP__SECURITY__LABEL", Some("ForFabric")),
            ],
            || {
                let backend = EnvConfigBackend::from_env("FABCFGTEST_");

                assert_eq!(
                    backend.lookup("client.BCCSP.security.level"),
                    Some(&ConfigValue::Int(384))
                );
                assert_eq!(
                    backend.lookup("client.bccsp.security.enabled"),
                    Some(&ConfigValue::Bool(false))
                );
                assert_eq!(
                    backend.lookup("client.BCCSP.security.label"),
                    Some(&ConfigValue::from("ForFabric"))
                );
                assert_eq!(backend.prefix(), "FABCFGTEST_");
            },
        );
    }

    #[test]
    fn test_unrelated_variables_ignored() {
        temp_env::with_vars(
            [
                ("FABCFGEMPTY_ONLY", None::<&str>),
                ("OTHER_CLIENT__LEVEL", Some("1")),
            ],
            || {
                let backend = EnvConfigBackend::from_env("FABCFGEMPTY_");
                assert!(backend.is_empty());
                assert_eq!(backend.lookup("client.level"), None);
            },
        );
    }

    #[test]
    fn test_numeric_looking_strings_keep_their_text() {
        temp_env::with_vars(
            [
                ("FABCFGTEXT_CLIENT__BCCSP__SECURITY__PIN", Some("0123")),
                ("FABCFGTEXT_CLIENT__BCCSP__SECURITY__LABEL", Some("1e3")),
                ("FABCFGTEXT_PEER__RATIO", Some("2.0")),
                ("FABCFGTEXT_PEER__WEIGHT", Some("0.5")),
                ("FABCFGTEXT_PEER__OFFSET", Some("-7")),
                ("FABCFGTEXT_PEER__RETRIES", Some("+3")),
                ("FABCFGTEXT_PEER__TLS", Some("True")),
            ],
            || {
                let backend = EnvConfigBackend::from_env("FABCFGTEXT_");
                let get = |key: &str| backend.lookup(key).cloned();

                assert_eq!(get("client.BCCSP.security.pin"), Some(ConfigValue::from("0123")));
                assert_eq!(get("client.BCCSP.security.label"), Some(ConfigValue::from("1e3")));
                assert_eq!(get("peer.ratio"), Some(ConfigValue::from("2.0")));
                assert_eq!(get("peer.weight"), Some(ConfigValue::Float(0.5)));
                assert_eq!(get("peer.offset"), Some(ConfigValue::Int(-7)));
                assert_eq!(get("peer.retries"), Some(ConfigValue::from("+3")));
                assert_eq!(get("peer.tls"), Some(ConfigValue::from("True")));
            },
        );
    }

    #[test]
    fn test_typed_value_round_trip_rule() {
        assert_eq!(typed_value("true".into()), ConfigValue::Bool(true));
        assert_eq!(typed_value("256".into()), ConfigValue::Int(256));
        assert_eq!(typed_value("007".into()), ConfigValue::from("007"));
        assert_eq!(typed_value(String::new()), ConfigValue::from(""));
        assert_eq!(typed_value("24s".into()), ConfigValue::from("24s"));
    }
}
