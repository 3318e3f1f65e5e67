//! Error type shared by the i18n module.

use std::path::PathBuf;

/// Errors surfaced by resource loading, configuration and resolver construction.
///
/// Missing translation keys are never reported through this type: lookups
/// recover locally and echo the key.
#[derive(Debug, thiserror::Error)]
pub enum I18nError {
    /// The fallback language has no bundle in the resource set.
    #[error("fallback language '{fallback}' is not one of the available languages: {available:?}")]
    Configuration {
        /// Requested fallback language code.
        fallback: String,
        /// Language codes that do have a bundle.
        available: Vec<String>,
    },

    /// A bundle in the resource set contains no strings.
    #[error("bundle for language '{language}' contains no translations")]
    EmptyBundle {
        /// Language code of the empty bundle.
        language: String,
    },

    /// A locale file name is not shaped like a language code.
    #[error("invalid language code '{code}', expected language[-script][-region] (e.g. 'pl', 'en-US')")]
    InvalidLanguageCode {
        /// Offending code.
        code: String,
    },

    /// No locale file exists for the requested language.
    #[error("locale file not found: {}", path.display())]
    BundleNotFound {
        /// Path of the last candidate that was tried.
        path: PathBuf,
    },

    /// A locale file exists but has no content.
    #[error("locale file is empty: {}", path.display())]
    EmptyFile {
        /// Path of the empty file.
        path: PathBuf,
    },

    /// Reading a locale file or directory failed.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// Path being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A JSON locale document could not be parsed.
    #[error("failed to parse JSON locale {}: {source}", path.display())]
    Json {
        /// Path (or pseudo-path for built-in data) of the document.
        path: PathBuf,
        /// Underlying parser error.
        #[source]
        source: serde_json::Error,
    },

    /// A YAML locale document could not be parsed.
    #[error("failed to parse YAML locale {}: {source}", path.display())]
    Yaml {
        /// Path of the document.
        path: PathBuf,
        /// Underlying parser error.
        #[source]
        source: serde_norway::Error,
    },

    /// The i18n configuration file could not be parsed.
    #[error("failed to parse i18n config {}: {source}", path.display())]
    Config {
        /// Path of the configuration file.
        path: PathBuf,
        /// Underlying parser error.
        #[source]
        source: serde_norway::Error,
    },

    /// A value cannot be written to a line-based store without changing on reload.
    #[error("cannot store {value:?} under '{key}': value must be a single line without surrounding whitespace")]
    InvalidPreferenceValue {
        /// Normalised key being written.
        key: String,
        /// Rejected value.
        value: String,
    },

    /// The preference store could not be read or written.
    #[error("preference store {} failed: {source}", path.display())]
    Preference {
        /// Backing file of the store.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}
