//! Implementation of the `fabcfg get` command.

use anyhow::Result;
use clap::{Args, ValueEnum};
use serde::Serialize;
use serde_json::Value;

use crate::cli::output::{output, CommandOutput};
use crate::services::ConfigLookup;

/// Arguments for `fabcfg get`
#[derive(Args, Debug)]
pub struct GetArgs {
    /// Dotted key path, e.g. client.BCCSP.security.level
    pub key: String,

    /// How to read the value
    #[arg(long = "as", value_enum, default_value_t = ValueKind::Raw)]
    pub kind: ValueKind,
}

/// Accessor used to read the key
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    /// The stored value as-is
    Raw,
    /// Strict boolean
    Bool,
    /// Integer, 0 when not integral
    Int,
    /// String rendering
    String,
    /// String, lower-cased
    Lower,
    /// Duration, zero when unparseable
    Duration,
}

/// Result of resolving one key
#[derive(Debug, Serialize)]
pub struct GetOutput {
    /// Key as requested
    pub key: String,
    /// Accessor used
    pub kind: ValueKind,
    /// Whether any backend holds the key
    pub found: bool,
    /// Value read through the accessor
    pub value: Value,
}

impl CommandOutput for GetOutput {
    fn to_human(&self) -> String {
        match &self.value {
            Value::Null if !self.found => "(not set)".to_string(),
            Value::Null => "null".to_string(),
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

/// Resolve `key` through the lookup and read it as `kind`.
pub fn resolve(lookup: &ConfigLookup, key: &str, kind: ValueKind) -> GetOutput {
    let raw = lookup.lookup(key);
    let value = match kind {
        ValueKind::Raw => raw
            .and_then(|v| serde_json::to_value(v).ok())
            .unwrap_or(Value::Null),
        ValueKind::Bool => Value::Bool(lookup.get_bool(key)),
        ValueKind::Int => Value::from(lookup.get_int(key)),
        ValueKind::String => Value::String(lookup.get_string(key)),
        ValueKind::Lower => Value::String(lookup.get_lower_string(key)),
        ValueKind::Duration => Value::String(format!("{:?}", lookup.get_duration(key))),
    };

    GetOutput {
        key: key.to_string(),
        kind,
        found: raw.is_some(),
        value,
    }
}

/// Resolve and print one key
pub fn execute(args: &GetArgs, lookup: &ConfigLookup, json_mode: bool) -> Result<()> {
    let result = resolve(lookup, &args.key, args.kind);
    tracing::debug!(key = %result.key, found = result.found, "resolved key");
    output(&result, json_mode);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::ConfigValue;
    use crate::domain::ports::SharedBackend;
    use crate::infrastructure::config::MapConfigBackend;
    use std::sync::Arc;

    fn lookup() -> ConfigLookup {
        let backend: MapConfigBackend = [
            ("peer.timeout", ConfigValue::from("24ms")),
            ("peer.name", ConfigValue::from("Peer0")),
            ("peer.port", ConfigValue::Int(7051)),
            ("peer.tls", ConfigValue::Null),
        ]
        .into_iter()
        .collect();
        ConfigLookup::new([Arc::new(backend) as SharedBackend])
    }

    #[test]
    fn test_raw_found_and_missing() {
        let lookup = lookup();

        let found = resolve(&lookup, "peer.port", ValueKind::Raw);
        assert!(found.found);
        assert_eq!(found.value, Value::from(7051));
        assert_eq!(found.to_human(), "7051");

        let missing = resolve(&lookup, "peer.missing", ValueKind::Raw);
        assert!(!missing.found);
        assert_eq!(missing.to_human(), "(not set)");

        let null = resolve(&lookup, "peer.tls", ValueKind::Raw);
        assert!(null.found);
        assert_eq!(null.to_human(), "null");
    }

    #[test]
    fn test_typed_reads() {
        let lookup = lookup();

        assert_eq!(resolve(&lookup, "peer.timeout", ValueKind::Duration).to_human(), "24ms");
        assert_eq!(resolve(&lookup, "peer.name", ValueKind::Lower).to_human(), "peer0");
        assert_eq!(resolve(&lookup, "peer.port", ValueKind::String).to_human(), "7051");
        assert_eq!(resolve(&lookup, "peer.name", ValueKind::Bool).to_human(), "false");
        assert_eq!(resolve(&lookup, "peer.missing", ValueKind::Int).to_human(), "0");
    }

    #[test]
    fn test_json_shape() {
        let json = resolve(&lookup(), "peer.name", ValueKind::String).to_json();
        assert_eq!(json["key"], "peer.name");
        assert_eq!(json["kind"], "string");
        assert_eq!(json["found"], true);
        assert_eq!(json["value"], "Peer0");
    }
}
