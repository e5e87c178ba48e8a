//! Domain models: configuration values and the duration grammar.

pub mod config_value;
pub mod duration;

pub use config_value::ConfigValue;
pub use duration::{parse_duration, parse_lenient_duration};
