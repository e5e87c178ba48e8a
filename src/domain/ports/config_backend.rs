//! Backend and provider ports.

use std::sync::Arc;

use crate::domain::error::ConfigError;
use crate::domain::models::ConfigValue;

/// Port trait for a single source of configuration key/value pairs
///
/// Keys are dot-delimited paths such as `client.BCCSP.security.level`. A key
/// either maps to exactly one stored value or is absent; a stored
/// [`ConfigValue::Null`] is a real value and is reported as found.
///
/// # Contract
///
/// - `lookup` has no side effects and never fails. Absence is signalled only
///   by `None`.
/// - Backends are read-only once constructed. Any file or environment reads
///   happen before the backend is handed to a lookup.
/// - Implementations must be `Send + Sync` so a single backend can be shared
///   by several lookups across threads without locking.
///
/// # Examples
///
/// ```
/// use fabric_config_ext::domain::models::ConfigValue;
/// use fabric_config_ext::domain::ports::ConfigBackend;
///
/// struct Fixed;
///
/// impl ConfigBackend for Fixed {
///     fn lookup(&self, key: &str) -> Option<&ConfigValue> {
///         static LEVEL: ConfigValue = ConfigValue::Int(256);
///         (key == "client.BCCSP.security.level").then_some(&LEVEL)
///     }
/// }
///
/// assert_eq!(Fixed.lookup("client.BCCSP.security.level"), Some(&ConfigValue::Int(256)));
/// assert_eq!(Fixed.lookup("client.BCCSP.security.pin"), None);
/// ```
pub trait ConfigBackend: Send + Sync {
    /// Return the raw value stored under `key`, if any
    fn lookup(&self, key: &str) -> Option<&ConfigValue>;
}

/// A backend handle that can be reused across several lookups.
pub type SharedBackend = Arc<dyn ConfigBackend>;

/// Produces an ordered list of backends, highest priority first.
///
/// Any `Fn() -> Result<Vec<SharedBackend>, ConfigError>` closure is a
/// provider, so loaders can be composed from plain functions.
pub trait ConfigProvider: Send + Sync {
    /// Build the backends, or fail if a source cannot be read
    fn backends(&self) -> Result<Vec<SharedBackend>, ConfigError>;
}

impl<F> ConfigProvider for F
where
    F: Fn() -> Result<Vec<SharedBackend>, ConfigError> + Send + Sync,
{
    fn backends(&self) -> Result<Vec<SharedBackend>, ConfigError> {
        self()
    }
}
