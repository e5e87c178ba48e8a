//! Common test utilities for integration tests
//!
//! Provides the shared key/value fixtures used across test files.

#![allow(dead_code)]

use std::sync::Arc;

use fabric_config_ext::{ConfigValue, MapConfigBackend, SharedBackend};

/// Build a backend populated with one of every value shape under `prefix`.
pub fn custom_backend(prefix: &str) -> MapConfigBackend {
    let entries: Vec<(String, ConfigValue)> = vec![
        ("bool.true".into(), true.into()),
        ("bool.false".into(), false.into()),
        ("bool.invalid".into(), "INVALID".into()),
        ("int.positive".into(), 5.into()),
        ("int.negative".into(), (-5).into()),
        ("int.invalid".into(), "INVALID".into()),
        ("string.valid".into(), "valid-string".into()),
        ("string.valid.mixed.case".into(), "VaLiD-StRiNg".into()),
        ("string.valid.lower.case".into(), "valid-string".into()),
        ("string.valid.upper.case".into(), "VALID-STRING".into()),
        ("string.empty".into(), "".into()),
        ("string.nil".into(), ConfigValue::Null),
        ("string.number".into(), 1234.into()),
        ("duration.valid.hour".into(), "24h".into()),
        ("duration.valid.minute".into(), "24m".into()),
        ("duration.valid.second".into(), "24s".into()),
        ("duration.valid.millisecond".into(), "24ms".into()),
        ("duration.valid.microsecond".into(), "24\u{00b5}s".into()),
        ("duration.valid.nanosecond".into(), "24ns".into()),
        ("duration.valid.no.unit".into(), "12".into()),
        ("duration.invalid".into(), "24XYZ".into()),
        ("duration.nil".into(), ConfigValue::Null),
        ("duration.empty".into(), "".into()),
    ];

    entries
        .into_iter()
        .map(|(key, value)| (format!("{prefix}.{key}"), value))
        .collect()
}

/// One fixture backend per prefix, in the given order.
pub fn multiple_custom_backends(prefixes: &[&str]) -> Vec<SharedBackend> {
    prefixes
        .iter()
        .map(|prefix| Arc::new(custom_backend(prefix)) as SharedBackend)
        .collect()
}

/// Wrap explicit pairs into a shared backend.
pub fn shared<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> SharedBackend
where
    K: Into<String>,
    V: Into<ConfigValue>,
{
    Arc::new(pairs.into_iter().collect::<MapConfigBackend>())
}
