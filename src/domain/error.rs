//! Error types for configuration loading and duration parsing.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while building configuration backends.
///
/// The lookup itself never fails; these only surface from providers and
/// loaders that read files or the environment.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A configuration file could not be read
    #[error("Failed to read config file {path}: {source}")]
    Io {
        /// File that failed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A document was not valid for its format
    #[error("Failed to parse {origin} as {format}: {message}")]
    Parse {
        /// File path or other description of the input
        origin: String,
        /// Format name, `yaml` or `json`
        format: &'static str,
        /// Parser message
        message: String,
    },

    /// The file extension names no known format
    #[error("Unsupported config format: {0}. Must be one of: yaml, yml, json")]
    UnsupportedFormat(String),

    /// The document parsed but is not a key/value mapping
    #[error("Config document in {0} must be a mapping at the top level")]
    NotAMapping(String),
}

/// Errors produced by the duration grammar.
///
/// Typed accessors swallow these and fall back to a zero duration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseDurationError {
    /// Text does not follow the duration grammar
    #[error("invalid duration {0:?}")]
    Invalid(String),

    /// A number without a unit
    #[error("missing unit in duration {0:?}")]
    MissingUnit(String),

    /// A unit outside `ns us µs ms s m h`
    #[error("unknown unit {unit:?} in duration {input:?}")]
    UnknownUnit {
        /// The unrecognised unit
        unit: String,
        /// Full input text
        input: String,
    },

    /// More than `i64::MAX` nanoseconds
    #[error("duration {0:?} overflows 64-bit nanoseconds")]
    Overflow(String),
}
