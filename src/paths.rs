//! Configuration and log directory resolution.

use std::env;
use std::path::{Path, PathBuf};

/// Directory name under the user's config base.
const APP_DIR: &str = "ui-locale";

/// Resolve an XDG base directory from environment or default to `$HOME` + segments.
///
/// Inputs:
/// - `var`: Environment variable to check (e.g., `XDG_CONFIG_HOME`).
/// - `home_default`: Fallback path segments relative to `$HOME` if `var` is unset/empty.
///
/// Output: Resolved base directory path.
fn xdg_base_dir(var: &str, home_default: &[&str]) -> PathBuf {
    if let Ok(p) = env::var(var)
        && !p.trim().is_empty()
    {
        return PathBuf::from(p);
    }
    let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
    let mut base = PathBuf::from(home);
    for seg in home_default {
        base = base.join(seg);
    }
    base
}

/// Return `$HOME/.config/ui-locale` when HOME is set, without creating it.
fn home_config_dir() -> Option<PathBuf> {
    env::var("HOME")
        .ok()
        .filter(|h| !h.trim().is_empty())
        .map(|home| Path::new(&home).join(".config").join(APP_DIR))
}

/// Config directory: `$HOME/.config/ui-locale`, else `$XDG_CONFIG_HOME/ui-locale`.
///
/// The directory is not created here; writers create it on demand.
#[must_use]
pub fn config_dir() -> PathBuf {
    home_config_dir().unwrap_or_else(|| xdg_base_dir("XDG_CONFIG_HOME", &[".config"]).join(APP_DIR))
}

/// Logs directory under config: `<config dir>/logs` (ensured to exist).
#[must_use]
pub fn logs_dir() -> PathBuf {
    let dir = config_dir().join("logs");
    let _ = std::fs::create_dir_all(&dir);
    dir
}

/// Preference file holding the persisted language: `<config dir>/settings.conf`.
#[must_use]
pub fn settings_file() -> PathBuf {
    config_dir().join("settings.conf")
}
