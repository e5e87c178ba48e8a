//! File-derived backends
//!
//! YAML and JSON documents are flattened into dotted keys:
//!
//! ```yaml
//! client:
//!   BCCSP:
//!     security:
//!       level: 256
//! ```
//!
//! becomes `client.BCCSP.security.level = 256`. Sequences flatten to indexed
//! keys (`orderers.0.url`).

use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde_json::Value;

use super::map_backend::MapConfigBackend;
use crate::domain::error::ConfigError;
use crate::domain::models::ConfigValue;

/// Serialization format of a configuration document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// `.yaml` or `.yml`
    Yaml,
    /// `.json`
    Json,
}

impl ConfigFormat {
    /// Infer the format from a file extension
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default();
        ext.parse()
    }

    /// Lower-case format name
    pub const fn name(self) -> &'static str {
        match self {
            Self::Yaml => "yaml",
            Self::Json => "json",
        }
    }
}

impl FromStr for ConfigFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "yaml" | "yml" => Ok(Self::Yaml),
            "json" => Ok(Self::Json),
            other => Err(ConfigError::UnsupportedFormat(other.to_string())),
        }
    }
}

impl fmt::Display for ConfigFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Read and flatten a configuration file. The format follows the extension.
pub fn load_file(path: &Path) -> Result<MapConfigBackend, ConfigError> {
    let format = ConfigFormat::from_path(path)?;
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let backend = parse_document(&text, format, &path.display().to_string())?;
    tracing::debug!(
        path = %path.display(),
        %format,
        keys = backend.len(),
        "loaded config file"
    );
    Ok(backend)
}

/// Parse a document held in memory. `origin` names it in error messages.
pub fn parse_document(
    text: &str,
    format: ConfigFormat,
    origin: &str,
) -> Result<MapConfigBackend, ConfigError> {
    if text.trim().is_empty() {
        return Ok(MapConfigBackend::default());
    }

    let parse_error = |message: String| ConfigError::Parse {
        origin: origin.to_string(),
        format: format.name(),
        message,
    };
    let document: Value = match format {
        ConfigFormat::Yaml => serde_yaml::from_str(text).map_err(|e| parse_error(e.to_string()))?,
        ConfigFormat::Json => serde_json::from_str(text).map_err(|e| parse_error(e.to_string()))?,
    };

    match document {
        Value::Null => Ok(MapConfigBackend::default()),
        Value::Object(_) => {
            let mut values = HashMap::new();
            flatten_into("", document, &mut values);
            Ok(MapConfigBackend::new(values))
        }
        _ => Err(ConfigError::NotAMapping(origin.to_string())),
    }
}

/// Flatten a nested document into `values`, joining path segments with `.`.
pub(crate) fn flatten_into(prefix: &str, value: Value, values: &mut HashMap<String, ConfigValue>) {
    let join = |segment: &str| {
        if prefix.is_empty() {
            segment.to_string()
        } else {
            format!("{prefix}.{segment}")
        }
    };

    match value {
        Value::Object(map) => {
            for (key, child) in map {
                flatten_into(&join(&key), child, values);
            }
        }
        Value::Array(items) => {
            for (index, child) in items.into_iter().enumerate() {
                flatten_into(&join(&index.to_string()), child, values);
            }
        }
        scalar => {
            if !prefix.is_empty() {
                values.insert(prefix.to_string(), to_config_value(scalar));
            }
        }
    }
}

fn to_config_value(value: Value) -> ConfigValue {
    match value {
        Value::Bool(b) => ConfigValue::Bool(b),
        Value::Number(n) => n
            .as_i64()
            .map(ConfigValue::Int)
            .or_else(|| n.as_f64().map(ConfigValue::Float))
            .unwrap_or(ConfigValue::Null),
        Value::String(s) => ConfigValue::String(s),
        Value::Null | Value::Array(_) | Value::Object(_) => ConfigValue::Null,
    }
}
