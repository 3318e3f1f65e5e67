//! Persistent key-value storage for the user's language preference.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::{PoisonError, RwLock};

use crate::i18n::error::I18nError;

/// Key under which the active language is stored.
pub const LANGUAGE_KEY: &str = "language";

/// Header written when the settings file is created from scratch.
const SETTINGS_HEADER: &str = "# ui-locale settings\n# language = <code> selects the UI language (e.g. pl, en)\n";

/// A persistent string key-value store.
pub trait PreferenceStore: Send + Sync {
    /// What: Read the value stored under `key`.
    ///
    /// Output:
    /// - `Ok(None)` when nothing is stored
    ///
    /// # Errors
    /// - Store-specific read failures
    fn load(&self, key: &str) -> Result<Option<String>, I18nError>;

    /// What: Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    /// - Store-specific write failures
    fn save(&self, key: &str, value: &str) -> Result<(), I18nError>;
}

/// Normalise a settings key: lowercase, with `.`, `-` and spaces mapped to `_`.
fn normalize_key(key: &str) -> String {
    key.trim().to_lowercase().replace(['.', '-', ' '], "_")
}

/// `key = value` settings file that keeps comments and unrelated keys intact.
#[derive(Debug, Clone)]
pub struct SettingsFileStore {
    /// Backing file.
    path: PathBuf,
}

impl SettingsFileStore {
    /// Store backed by `path`; the file is created on first save.
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Store backed by the default `<config dir>/settings.conf`.
    #[must_use]
    pub fn default_location() -> Self {
        Self::new(crate::paths::settings_file())
    }

    /// Wrap an I/O error with the backing path.
    fn io_error(&self, source: std::io::Error) -> I18nError {
        I18nError::Preference {
            path: self.path.clone(),
            source,
        }
    }

    /// Read the file, treating a missing file as empty.
    fn read_contents(&self) -> Result<String, I18nError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(contents),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(String::new()),
            Err(e) => Err(self.io_error(e)),
        }
    }
}

/// Split a settings line into its normalised key and raw value.
fn parse_line(line: &str) -> Option<(String, &str)> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with("//") {
        return None;
    }
    let (key, value) = trimmed.split_once('=')?;
    Some((normalize_key(key), value.trim()))
}

impl PreferenceStore for SettingsFileStore {
    fn load(&self, key: &str) -> Result<Option<String>, I18nError> {
        let wanted = normalize_key(key);
        let contents = self.read_contents()?;
        // Last assignment wins, matching how the file reads top to bottom.
        let value = contents
            .lines()
            .filter_map(parse_line)
            .filter(|(k, _)| *k == wanted)
            .map(|(_, v)| v.to_string())
            .next_back()
            .filter(|v| !v.is_empty());
        Ok(value)
    }

    fn save(&self, key: &str, value: &str) -> Result<(), I18nError> {
        let wanted = normalize_key(key);
        // `load` trims and splits on lines, so anything else would not read back as written.
        if value.contains(['\n', '\r']) || value.trim() != value {
            return Err(I18nError::InvalidPreferenceValue {
                key: wanted,
                value: value.to_string(),
            });
        }
        let contents = self.read_contents()?;

        let mut lines: Vec<String> = if contents.trim().is_empty() {
            SETTINGS_HEADER.lines().map(str::to_string).collect()
        } else {
            contents.lines().map(str::to_string).collect()
        };

        let mut replaced = false;
        for line in &mut lines {
            if parse_line(line).is_some_and(|(k, _)| k == wanted) {
                *line = format!("{wanted} = {value}");
                replaced = true;
            }
        }
        if !replaced {
            lines.push(format!("{wanted} = {value}"));
        }

        if let Some(dir) = self.path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir).map_err(|e| self.io_error(e))?;
        }
        let mut new_content = lines.join("\n");
        new_content.push('\n');
        fs::write(&self.path, new_content).map_err(|e| self.io_error(e))?;

        tracing::debug!(path = %self.path.display(), key = %wanted, value, "preference saved");
        Ok(())
    }
}

/// In-memory store, for tests and hosts that persist elsewhere.
#[derive(Debug, Default)]
pub struct MemoryStore {
    /// Stored values by normalised key.
    values: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with one value.
    #[must_use]
    pub fn with_value(key: &str, value: &str) -> Self {
        let store = Self::new();
        store
            .values
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(normalize_key(key), value.to_string());
        store
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>, I18nError> {
        Ok(self
            .values
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&normalize_key(key))
            .cloned())
    }

    fn save(&self, key: &str, value: &str) -> Result<(), I18nError> {
        self.values
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(normalize_key(key), value.to_string());
        Ok(())
    }
}
