//! Raw configuration values and their coercions.

use std::fmt;
use std::time::Duration;

use serde::Serialize;

use super::duration::parse_lenient_duration;

/// A raw configuration value as stored by a backend.
///
/// Coercion helpers return `None` when the value cannot be read as the
/// requested type; callers decide what default to fall back to.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ConfigValue {
    /// Explicitly stored nil, distinct from the key being absent
    Null,
    /// Boolean
    Bool(bool),
    /// Signed integer
    Int(i64),
    /// Floating point number from YAML, JSON or the environment
    Float(f64),
    /// Text
    String(String),
}

impl ConfigValue {
    /// Returns the contained boolean. No other variant reads as a boolean.
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Reads the value as a boolean the permissive way.
    ///
    /// Numbers are true when non-zero. Strings accept `1 t T TRUE true True`
    /// and `0 f F FALSE false False` (surrounding whitespace is not trimmed).
    /// `Null` is false. Any other string yields `None`.
    pub fn as_lenient_bool(&self) -> Option<bool> {
        match self {
            Self::Null => Some(false),
            Self::Bool(b) => Some(*b),
            Self::Int(n) => Some(*n != 0),
            Self::Float(f) => Some(*f != 0.0),
            Self::String(s) => match s.as_str() {
                "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
                "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
                _ => None,
            },
        }
    }

    /// Returns the value as an integer when it holds one exactly.
    ///
    /// Floats and numeric strings qualify only when they have no fractional
    /// part and fit in an `i64`.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            Self::Float(f) => float_to_int(*f),
            Self::String(s) => {
                let trimmed = s.trim();
                trimmed
                    .parse::<i64>()
                    .ok()
                    .or_else(|| trimmed.parse::<f64>().ok().and_then(float_to_int))
            }
            Self::Null | Self::Bool(_) => None,
        }
    }

    /// Renders the value as a string. `Null` renders as the empty string.
    pub fn to_config_string(&self) -> String {
        match self {
            Self::Null => String::new(),
            Self::Bool(b) => b.to_string(),
            Self::Int(n) => n.to_string(),
            Self::Float(f) => f.to_string(),
            Self::String(s) => s.clone(),
        }
    }

    /// Reads the value as a non-negative duration.
    ///
    /// Integers are nanoseconds. Strings follow the duration grammar, with a
    /// unit-less number also taken as nanoseconds.
    pub fn as_duration(&self) -> Option<Duration> {
        match self {
            Self::String(s) => parse_lenient_duration(s),
            Self::Int(n) => u64::try_from(*n).ok().map(Duration::from_nanos),
            Self::Float(f) if f.is_finite() && *f >= 0.0 => Some(Duration::from_nanos(*f as u64)),
            _ => None,
        }
    }

    /// Short name of the stored variant, for diagnostics.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::String(_) => "string",
        }
    }
}

fn float_to_int(f: f64) -> Option<i64> {
    #[allow(clippy::cast_precision_loss)]
    let in_range = f >= i64::MIN as f64 && f < i64::MAX as f64;
    (f.is_finite() && f.fract() == 0.0 && in_range).then(|| f as i64)
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_config_string())
    }
}

impl From<bool> for ConfigValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for ConfigValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for ConfigValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u32> for ConfigValue {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for ConfigValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for ConfigValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for ConfigValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl<T: Into<Self>> From<Option<T>> for ConfigValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}
