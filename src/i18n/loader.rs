//! Locale file loading and parsing.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::i18n::error::I18nError;
use crate::i18n::resources::ResourceSet;
use crate::i18n::translations::LocaleBundle;

/// Built-in English bundle.
const BUILTIN_EN: &str = include_str!("../../locales/en.json");
/// Built-in Polish bundle.
const BUILTIN_PL: &str = include_str!("../../locales/pl.json");

/// Language codes and JSON sources compiled into the crate.
pub(crate) const BUILTIN_BUNDLES: [(&str, &str); 2] = [("en", BUILTIN_EN), ("pl", BUILTIN_PL)];

/// File extensions recognised as locale files, in lookup order.
const LOCALE_EXTENSIONS: [&str; 3] = ["json", "yml", "yaml"];

/// What: Load a locale file and parse it into a `LocaleBundle`.
///
/// Inputs:
/// - `code`: Language code (e.g., "pl", "en-US")
/// - `locales_dir`: Path to locales directory
///
/// Output:
/// - `Result<LocaleBundle, I18nError>` containing translations or error
///
/// # Errors
/// - `InvalidLanguageCode` when the code is empty or malformed
/// - `BundleNotFound` when no `{code}.json`, `{code}.yml` or `{code}.yaml` exists
/// - `Io` when the file cannot be read
/// - `EmptyFile` when the file has no content
/// - `Json` / `Yaml` when the content cannot be parsed
pub fn load_locale_file(code: &str, locales_dir: &Path) -> Result<LocaleBundle, I18nError> {
    if !is_valid_language_code(code) {
        return Err(I18nError::InvalidLanguageCode {
            code: code.to_string(),
        });
    }

    let mut last_candidate = locales_dir.join(code);
    for ext in LOCALE_EXTENSIONS {
        let candidate = locales_dir.join(format!("{code}.{ext}"));
        if candidate.is_file() {
            return parse_locale_path(&candidate);
        }
        last_candidate = candidate;
    }

    Err(I18nError::BundleNotFound {
        path: last_candidate,
    })
}

/// What: Read and parse one locale file, choosing the format by extension.
fn parse_locale_path(path: &Path) -> Result<LocaleBundle, I18nError> {
    let contents = fs::read_to_string(path).map_err(|source| I18nError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    if contents.trim().is_empty() {
        return Err(I18nError::EmptyFile {
            path: path.to_path_buf(),
        });
    }

    let is_json = path.extension().and_then(|e| e.to_str()) == Some("json");
    if is_json {
        parse_json_bundle(&contents).map_err(|source| I18nError::Json {
            path: path.to_path_buf(),
            source,
        })
    } else {
        let code = path.file_stem().and_then(|s| s.to_str()).unwrap_or("");
        parse_yaml_bundle(&contents, code).map_err(|source| I18nError::Yaml {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// What: Validate language code format.
///
/// Inputs:
/// - `code`: Language code to validate
///
/// Output:
/// - `true` if format looks valid, `false` otherwise
///
/// Details:
/// - Accepts `language`, `language-region` and `language-script-region`
/// - Rejects empty codes, codes longer than 20 characters, spaces and
///   characters other than ASCII alphanumerics and hyphens
#[must_use]
pub fn is_valid_language_code(code: &str) -> bool {
    if code.is_empty() || code.len() > 20 {
        return false;
    }

    code.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
        && !code.starts_with('-')
        && !code.ends_with('-')
        && !code.contains("--")
}

/// What: Parse a JSON locale document into a `LocaleBundle`.
///
/// Details:
/// - Nested objects are flattened into dot-notation keys
/// - Non-string leaves are skipped
///
/// # Errors
/// - Returns the parser error for invalid JSON
pub fn parse_json_bundle(json_content: &str) -> Result<LocaleBundle, serde_json::Error> {
    let doc: serde_json::Value = serde_json::from_str(json_content)?;
    let mut bundle = LocaleBundle::new();
    flatten_json_value(&doc, "", &mut bundle);
    Ok(bundle)
}

/// Recursively flatten a JSON tree into dot-notation keys.
fn flatten_json_value(value: &serde_json::Value, prefix: &str, bundle: &mut LocaleBundle) {
    match value {
        serde_json::Value::Object(map) => {
            for (key, val) in map {
                flatten_json_value(val, &join_key(prefix, key), bundle);
            }
        }
        serde_json::Value::String(s) => bundle.insert(prefix, s.as_str()),
        other => {
            tracing::debug!(key = prefix, value = %other, "skipping non-string locale leaf");
        }
    }
}

/// What: Parse a YAML locale document into a `LocaleBundle`.
///
/// Inputs:
/// - `yaml_content`: YAML file content
/// - `code`: Language code of the file, used to unwrap a `code:` root key
///
/// Details:
/// - A document whose only top-level key equals `code` (e.g. `en-US:`) is
///   unwrapped; otherwise the document root is the bundle root
/// - Nested mappings are flattened into dot-notation keys
///
/// # Errors
/// - Returns the parser error for invalid YAML
pub fn parse_yaml_bundle(
    yaml_content: &str,
    code: &str,
) -> Result<LocaleBundle, serde_norway::Error> {
    let doc: serde_norway::Value = serde_norway::from_str(yaml_content)?;

    let root = match doc.as_mapping() {
        Some(map) if map.len() == 1 => match doc.get(code) {
            Some(inner) if inner.is_mapping() => inner,
            _ => &doc,
        },
        _ => &doc,
    };

    let mut bundle = LocaleBundle::new();
    flatten_yaml_value(root, "", &mut bundle);
    Ok(bundle)
}

/// Recursively flatten a YAML tree into dot-notation keys.
fn flatten_yaml_value(value: &serde_norway::Value, prefix: &str, bundle: &mut LocaleBundle) {
    match value {
        serde_norway::Value::Mapping(map) => {
            for (key, val) in map {
                if let Some(key_str) = key.as_str() {
                    flatten_yaml_value(val, &join_key(prefix, key_str), bundle);
                }
            }
        }
        serde_norway::Value::String(s) => bundle.insert(prefix, s.as_str()),
        _ => {
            tracing::debug!(key = prefix, "skipping non-string locale leaf");
        }
    }
}

/// Append `key` to a dotted `prefix`.
fn join_key(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{prefix}.{key}")
    }
}

/// Locale loader that caches loaded bundles.
pub struct LocaleLoader {
    /// Directory holding `{code}.json|yml|yaml` files.
    locales_dir: PathBuf,
    /// Bundles already read from disk, by language code.
    cache: HashMap<String, LocaleBundle>,
}

impl LocaleLoader {
    /// What: Create a new `LocaleLoader` for `locales_dir`.
    #[must_use]
    pub fn new(locales_dir: PathBuf) -> Self {
        Self {
            locales_dir,
            cache: HashMap::new(),
        }
    }

    /// What: Load a locale bundle, using the cache if available.
    ///
    /// # Errors
    /// - See [`load_locale_file`]; failures are also logged at warn level
    pub fn load(&mut self, code: &str) -> Result<LocaleBundle, I18nError> {
        if let Some(bundle) = self.cache.get(code) {
            tracing::debug!(code, "locale bundle served from cache");
            return Ok(bundle.clone());
        }

        match load_locale_file(code, &self.locales_dir) {
            Ok(bundle) => {
                tracing::debug!(code, keys = bundle.len(), "loaded locale bundle");
                self.cache.insert(code.to_string(), bundle.clone());
                Ok(bundle)
            }
            Err(e) => {
                tracing::warn!(code, error = %e, "failed to load locale bundle");
                Err(e)
            }
        }
    }

    /// What: Load every locale file in the directory into a `ResourceSet`.
    ///
    /// Details:
    /// - Files whose stem is not a language code are skipped
    /// - When the same code exists in several formats, the first extension in
    ///   `json`, `yml`, `yaml` order wins
    ///
    /// # Errors
    /// - `Io` when the directory cannot be listed
    /// - Any load error of an individual locale file
    /// - `EmptyBundle` when a file parses to no strings
    pub fn load_all(&mut self) -> Result<ResourceSet, I18nError> {
        let entries = fs::read_dir(&self.locales_dir).map_err(|source| I18nError::Io {
            path: self.locales_dir.clone(),
            source,
        })?;

        let mut codes: Vec<String> = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| I18nError::Io {
                path: self.locales_dir.clone(),
                source,
            })?;
            let path = entry.path();
            let is_locale = path
                .extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| LOCALE_EXTENSIONS.contains(&e));
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            if !is_locale || !path.is_file() {
                continue;
            }
            if !is_valid_language_code(stem) {
                tracing::debug!(file = %path.display(), "ignoring file with non-language name");
                continue;
            }
            if !codes.iter().any(|c| c == stem) {
                codes.push(stem.to_string());
            }
        }
        codes.sort();

        let mut resources = ResourceSet::new();
        for code in codes {
            let bundle = self.load(&code)?;
            resources.insert(code, bundle)?;
        }
        Ok(resources)
    }
}
