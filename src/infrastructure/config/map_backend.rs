//! In-memory backend.

use std::collections::HashMap;

use crate::domain::models::ConfigValue;
use crate::domain::ports::ConfigBackend;

/// In-memory map implementation of [`ConfigBackend`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MapConfigBackend {
    values: HashMap<String, ConfigValue>,
}

impl MapConfigBackend {
    /// Wrap an existing map of dotted keys
    pub const fn new(values: HashMap<String, ConfigValue>) -> Self {
        Self { values }
    }

    /// Number of stored keys
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when no key is stored
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl ConfigBackend for MapConfigBackend {
    fn lookup(&self, key: &str) -> Option<&ConfigValue> {
        self.values.get(key)
    }
}

impl<K, V> FromIterator<(K, V)> for MapConfigBackend
where
    K: Into<String>,
    V: Into<ConfigValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::new(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
