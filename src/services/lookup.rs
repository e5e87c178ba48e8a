//! Layered lookup over an ordered list of configuration backends.

use std::fmt;
use std::time::Duration;

use tracing::trace;

use crate::domain::models::ConfigValue;
use crate::domain::ports::SharedBackend;

/// Typed facade over an ordered list of backends
///
/// The first backend that contains a key wins; values are never merged
/// across backends. Accessors never fail: a missing key or a value that does
/// not coerce to the requested type yields the type's zero value, and callers
/// layer their own defaults on top.
///
/// ```
/// use std::sync::Arc;
/// use std::time::Duration;
/// use fabric_config_ext::domain::ports::SharedBackend;
/// use fabric_config_ext::infrastructure::config::MapConfigBackend;
/// use fabric_config_ext::services::ConfigLookup;
///
/// let overrides: MapConfigBackend = [("peer.timeout", "3s")].into_iter().collect();
/// let base: MapConfigBackend = [("peer.timeout", "10s"), ("peer.url", "grpcs://peer0:7051")]
///     .into_iter()
///     .collect();
/// let backends: Vec<SharedBackend> = vec![Arc::new(overrides), Arc::new(base)];
/// let lookup = ConfigLookup::new(backends);
///
/// assert_eq!(lookup.get_duration("peer.timeout"), Duration::from_secs(3));
/// assert_eq!(lookup.get_string("peer.url"), "grpcs://peer0:7051");
/// assert_eq!(lookup.get_int("peer.retries"), 0);
/// ```
#[derive(Clone, Default)]
pub struct ConfigLookup {
    backends: Vec<SharedBackend>,
}

impl ConfigLookup {
    /// Build a lookup; iteration order defines priority.
    pub fn new(backends: impl IntoIterator<Item = SharedBackend>) -> Self {
        Self {
            backends: backends.into_iter().collect(),
        }
    }

    /// Number of backends consulted.
    pub fn len(&self) -> usize {
        self.backends.len()
    }

    /// True when there are no backends
    pub fn is_empty(&self) -> bool {
        self.backends.is_empty()
    }

    /// Backends in priority order
    pub fn backends(&self) -> &[SharedBackend] {
        &self.backends
    }

    /// Raw value from the first backend containing `key`
    pub fn lookup(&self, key: &str) -> Option<&ConfigValue> {
        self.backends.iter().find_map(|backend| backend.lookup(key))
    }

    /// Boolean value, or false when missing or not a boolean
    pub fn get_bool(&self, key: &str) -> bool {
        self.coerce(key, "bool", ConfigValue::as_bool)
            .unwrap_or_default()
    }

    /// Integer value, or 0 when missing or not integral
    pub fn get_int(&self, key: &str) -> i64 {
        self.coerce(key, "int", ConfigValue::as_int)
            .unwrap_or_default()
    }

    /// String rendering of the value; empty when missing or nil
    pub fn get_string(&self, key: &str) -> String {
        self.lookup(key)
            .map(ConfigValue::to_config_string)
            .unwrap_or_default()
    }

    /// Same as [`get_string`](Self::get_string), lower-cased
    pub fn get_lower_string(&self, key: &str) -> String {
        self.get_string(key).to_lowercase()
    }

    /// Duration value, or zero when missing or unparseable
    ///
    /// A bare number without a unit is read as nanoseconds.
    pub fn get_duration(&self, key: &str) -> Duration {
        self.coerce(key, "duration", ConfigValue::as_duration)
            .unwrap_or_default()
    }

    fn coerce<T>(
        &self,
        key: &str,
        wanted: &'static str,
        convert: impl FnOnce(&ConfigValue) -> Option<T>,
    ) -> Option<T> {
        let value = self.lookup(key)?;
        let converted = convert(value);
        if converted.is_none() {
            trace!(key, wanted, found = value.kind(), "config value not coercible");
        }
        converted
    }
}

impl fmt::Debug for ConfigLookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigLookup")
            .field("backends", &self.backends.len())
            .finish()
    }
}
