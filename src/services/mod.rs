//! Services: the lookup facade and typed readers built on it.

pub mod crypto_suite;
pub mod lookup;

pub use crypto_suite::CryptoConfig;
pub use lookup::ConfigLookup;
