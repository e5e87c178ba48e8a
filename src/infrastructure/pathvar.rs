//! Path variable substitution for configured filesystem paths.

use std::path::Path;

/// Replace `${VAR}` and `$VAR` references with environment values.
///
/// Unset variables expand to the empty string, except `GOPATH`, which falls
/// back to `$HOME/go`.
pub fn subst(path: &str) -> String {
    shellexpand::env_with_context_no_errors(path, resolve).into_owned()
}

fn resolve(name: &str) -> Option<String> {
    match std::env::var(name) {
        Ok(value) => Some(value),
        Err(_) if name == "GOPATH" => Some(default_gopath()),
        Err(_) => Some(String::new()),
    }
}

fn default_gopath() -> String {
    std::env::var("HOME")
        .map(|home| Path::new(&home).join("go").display().to_string())
        .unwrap_or_default()
}
