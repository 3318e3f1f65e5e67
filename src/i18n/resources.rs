//! Language code -> bundle mapping shared by the resolver.

use std::collections::HashMap;
use std::path::PathBuf;

use crate::i18n::error::I18nError;
use crate::i18n::loader::{BUILTIN_BUNDLES, parse_json_bundle};
use crate::i18n::translations::LocaleBundle;

/// Every bundle known to the application, keyed by language code.
///
/// Invariant: no bundle is empty. Enforced by [`ResourceSet::insert`].
#[derive(Debug, Clone, Default)]
pub struct ResourceSet {
    /// Bundles by language code.
    bundles: HashMap<String, LocaleBundle>,
}

impl ResourceSet {
    /// Create an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// What: Build the set from the bundles compiled into the crate (`en`, `pl`).
    ///
    /// # Errors
    /// - `Json` if a built-in document is malformed
    /// - `EmptyBundle` if a built-in document has no strings
    pub fn builtin() -> Result<Self, I18nError> {
        let mut set = Self::new();
        for (code, source) in BUILTIN_BUNDLES {
            let bundle = parse_json_bundle(source).map_err(|source| I18nError::Json {
                path: PathBuf::from(format!("<builtin>/{code}.json")),
                source,
            })?;
            set.insert(code, bundle)?;
        }
        Ok(set)
    }

    /// What: Add or replace the bundle for `code`.
    ///
    /// # Errors
    /// - `EmptyBundle` when `bundle` holds no strings; the set is left unchanged
    pub fn insert(&mut self, code: impl Into<String>, bundle: LocaleBundle) -> Result<(), I18nError> {
        let code = code.into();
        if bundle.is_empty() {
            return Err(I18nError::EmptyBundle { language: code });
        }
        self.bundles.insert(code, bundle);
        Ok(())
    }

    /// Bundle for `code`, if any.
    #[must_use]
    pub fn bundle(&self, code: &str) -> Option<&LocaleBundle> {
        self.bundles.get(code)
    }

    /// `true` when a bundle exists for `code`.
    #[must_use]
    pub fn contains(&self, code: &str) -> bool {
        self.bundles.contains_key(code)
    }

    /// Language codes with a bundle, in unspecified order.
    #[must_use]
    pub fn languages(&self) -> Vec<&str> {
        self.bundles.keys().map(String::as_str).collect()
    }

    /// Number of languages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bundles.len()
    }

    /// `true` when no language is loaded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bundles.is_empty()
    }
}
