//! Configuration backends and loading
//!
//! - In-memory map backend
//! - YAML/JSON file backends flattened to dotted keys
//! - Prefixed environment variable backend (figment)
//! - Providers and a loader composing them in priority order

pub mod env_backend;
pub mod file_backend;
pub mod loader;
pub mod map_backend;
pub mod provider;

pub use env_backend::{EnvConfigBackend, DEFAULT_ENV_PREFIX};
pub use file_backend::{load_file, parse_document, ConfigFormat};
pub use loader::{ConfigLoader, LOCAL_CONFIG_PATH, PROJECT_CONFIG_PATH};
pub use map_backend::MapConfigBackend;
