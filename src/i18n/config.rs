//! `i18n.yml` configuration.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::i18n::error::I18nError;
use crate::i18n::loader::LocaleLoader;
use crate::i18n::resolver::TranslationResolver;
use crate::i18n::resources::ResourceSet;

/// Language used before detection and as the fallback when nothing is configured.
pub const DEFAULT_LANGUAGE: &str = "pl";

/// Localization settings read from `i18n.yml`.
///
/// Every field has a default, so an empty or partial file is valid.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct I18nConfig {
    /// Initial active language before detection runs.
    pub default_language: String,
    /// Language consulted when the active one lacks a key.
    pub fallback_language: String,
    /// Aliases applied to detected or stored codes (e.g. `pl-PL: pl`).
    pub fallbacks: HashMap<String, String>,
    /// Load bundles from this directory instead of the built-in ones.
    pub locales_dir: Option<PathBuf>,
    /// Run language detection at startup.
    pub detect: bool,
    /// Persist language switches to the preference store.
    pub persist: bool,
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            default_language: DEFAULT_LANGUAGE.to_string(),
            fallback_language: DEFAULT_LANGUAGE.to_string(),
            fallbacks: HashMap::new(),
            locales_dir: None,
            detect: true,
            persist: true,
        }
    }
}

impl I18nConfig {
    /// What: Parse configuration from YAML text.
    ///
    /// # Errors
    /// - The `serde_norway` error for malformed YAML or mistyped fields
    pub fn from_yaml(yaml_content: &str) -> Result<Self, serde_norway::Error> {
        if yaml_content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_norway::from_str(yaml_content)
    }

    /// What: Read configuration from `path`.
    ///
    /// Output:
    /// - Parsed config; `I18nConfig::default()` when the file does not exist
    ///
    /// Details:
    /// - A relative `locales_dir` is resolved against the config file's directory
    ///
    /// # Errors
    /// - `Io` when the file exists but cannot be read
    /// - `Config` when the file cannot be parsed
    pub fn load(path: &Path) -> Result<Self, I18nError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "i18n config not found, using defaults");
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path).map_err(|source| I18nError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config = Self::from_yaml(&contents).map_err(|source| I18nError::Config {
            path: path.to_path_buf(),
            source,
        })?;

        if let Some(dir) = config.locales_dir.as_mut()
            && dir.is_relative()
            && let Some(base) = path.parent()
        {
            *dir = base.join(&*dir);
        }

        tracing::debug!(
            path = %path.display(),
            default = %config.default_language,
            fallback = %config.fallback_language,
            aliases = config.fallbacks.len(),
            "loaded i18n config"
        );
        Ok(config)
    }

    /// What: Build the resource set this configuration points at.
    ///
    /// Output:
    /// - Bundles from `locales_dir` when set, otherwise the built-in bundles
    ///
    /// # Errors
    /// - Any loader error for the configured directory
    pub fn resources(&self) -> Result<ResourceSet, I18nError> {
        match &self.locales_dir {
            Some(dir) => LocaleLoader::new(dir.clone()).load_all(),
            None => ResourceSet::builtin(),
        }
    }

    /// What: Build a resolver from this configuration.
    ///
    /// # Errors
    /// - Resource loading errors
    /// - `Configuration` when `fallback_language` has no bundle
    pub fn build_resolver(&self) -> Result<TranslationResolver, I18nError> {
        TranslationResolver::new(
            self.resources()?,
            self.fallback_language.clone(),
            self.default_language.clone(),
        )
    }
}

/// What: Find the i18n configuration file.
///
/// Inputs:
/// - `explicit`: Path given on the command line, if any
///
/// Output:
/// - First candidate in order: `explicit`, `CARGO_MANIFEST_DIR/config/i18n.yml`
///   (development checkout), `<config dir>/i18n.yml`
///
/// Details:
/// - `explicit` is returned even if it does not exist so the caller reports it
/// - Returns the config-dir path when nothing exists; [`I18nConfig::load`]
///   then falls back to defaults
#[must_use]
pub fn find_config_file(explicit: Option<&Path>) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }

    let dev_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("config")
        .join("i18n.yml");
    if dev_path.is_file() {
        return dev_path;
    }

    crate::paths::config_dir().join("i18n.yml")
}
