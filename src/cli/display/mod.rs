//! Display helpers for CLI output formatting.

pub mod table;

pub use table::settings_table;

/// Mask a secret for display, keeping only whether it is set.
pub fn mask_secret(secret: &str) -> String {
    if secret.is_empty() {
        String::new()
    } else {
        "********".to_string()
    }
}
