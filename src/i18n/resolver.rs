//! Translation resolution against an active and a fallback language.

use std::fmt::Display;
use std::sync::{PoisonError, RwLock};

use crate::i18n::error::I18nError;
use crate::i18n::resources::ResourceSet;
use crate::i18n::translations::{interpolate, translate_with_fallback};

/// Resolves dotted keys for the active language.
///
/// Lookup order is: active language bundle, fallback language bundle, then
/// the key itself. The active language is the only mutable state and may be
/// any code, including one without a bundle.
///
/// The resolver is `Send + Sync`; share it by reference or behind an `Arc`.
#[derive(Debug)]
pub struct TranslationResolver {
    /// Bundles, read-only after construction.
    resources: ResourceSet,
    /// Language consulted when the active one lacks a key.
    fallback: String,
    /// Currently selected language code.
    active: RwLock<String>,
}

impl TranslationResolver {
    /// What: Create a resolver over `resources`.
    ///
    /// Inputs:
    /// - `resources`: Bundles by language code
    /// - `fallback`: Language consulted when the active one lacks a key
    /// - `initial`: Starting active language (not validated)
    ///
    /// # Errors
    /// - `Configuration` when `fallback` has no bundle in `resources`
    pub fn new(
        resources: ResourceSet,
        fallback: impl Into<String>,
        initial: impl Into<String>,
    ) -> Result<Self, I18nError> {
        let fallback = fallback.into();
        if !resources.contains(&fallback) {
            let mut available: Vec<String> =
                resources.languages().into_iter().map(str::to_string).collect();
            available.sort();
            return Err(I18nError::Configuration {
                fallback,
                available,
            });
        }

        let initial = initial.into();
        tracing::debug!(
            fallback = %fallback,
            initial = %initial,
            languages = resources.len(),
            "translation resolver ready"
        );
        Ok(Self {
            resources,
            fallback,
            active: RwLock::new(initial),
        })
    }

    /// What: Resolver over the built-in `en` and `pl` bundles, Polish first.
    ///
    /// # Errors
    /// - See [`ResourceSet::builtin`]
    pub fn builtin() -> Result<Self, I18nError> {
        Self::new(ResourceSet::builtin()?, "pl", "pl")
    }

    /// What: Make `code` the active language.
    ///
    /// Details:
    /// - Any code is accepted; one without a bundle resolves every key through
    ///   the fallback language or the key itself
    /// - Takes effect before returning and is idempotent
    pub fn change_language(&self, code: &str) {
        let mut active = self.active.write().unwrap_or_else(PoisonError::into_inner);
        if *active != code {
            tracing::info!(from = %*active, to = code, "active language changed");
            code.clone_into(&mut *active);
        }
        if !self.resources.contains(code) {
            tracing::debug!(
                code,
                fallback = %self.fallback,
                "active language has no bundle, lookups use fallback"
            );
        }
    }

    /// Currently active language code.
    #[must_use]
    pub fn active_language(&self) -> String {
        self.active
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Fallback language code.
    #[must_use]
    pub fn fallback_language(&self) -> &str {
        &self.fallback
    }

    /// Language codes with a bundle, in unspecified order.
    #[must_use]
    pub fn available_languages(&self) -> Vec<&str> {
        self.resources.languages()
    }

    /// Read-only access to the bundles.
    #[must_use]
    pub const fn resources(&self) -> &ResourceSet {
        &self.resources
    }

    /// What: Resolve `key` for the active language.
    ///
    /// Output:
    /// - Active language string, else fallback language string, else `key`
    #[must_use]
    pub fn translate(&self, key: &str) -> String {
        let active = self.active.read().unwrap_or_else(PoisonError::into_inner);
        translate_with_fallback(
            key,
            self.resources.bundle(&active),
            self.resources.bundle(&self.fallback),
        )
    }

    /// What: Resolve `key` and substitute `{{name}}` placeholders.
    ///
    /// Inputs:
    /// - `key`: Dotted key
    /// - `vars`: Placeholder names and values
    ///
    /// Details:
    /// - Substitution applies to whatever tier produced the text, the echoed
    ///   key included
    #[must_use]
    pub fn translate_with(&self, key: &str, vars: &[(&str, &dyn Display)]) -> String {
        interpolate(&self.translate(key), vars)
    }

    /// What: Check whether `key` resolves without echoing.
    ///
    /// Output:
    /// - `true` when the active or the fallback bundle has a string for `key`
    #[must_use]
    pub fn has_key(&self, key: &str) -> bool {
        let active = self.active.read().unwrap_or_else(PoisonError::into_inner);
        [active.as_str(), self.fallback.as_str()]
            .into_iter()
            .filter_map(|code| self.resources.bundle(code))
            .any(|bundle| crate::i18n::translations::translate(key, bundle).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::translations::LocaleBundle;

    fn bundle(pairs: &[(&str, &str)]) -> LocaleBundle {
        pairs.iter().copied().collect()
    }

    fn two_language_set() -> ResourceSet {
        let mut set = ResourceSet::new();
        set.insert("en", bundle(&[("nav.dashboard", "Dashboard")]))
            .expect("non-empty bundle");
        set.insert(
            "pl",
            bundle(&[
                ("nav.dashboard", "Pulpit"),
                ("common.beta_notice", "Wersja beta"),
            ]),
        )
        .expect("non-empty bundle");
        set
    }

    #[test]
    fn new_rejects_unknown_fallback() {
        let err = TranslationResolver::new(two_language_set(), "de", "en")
            .expect_err("fallback without bundle must fail");
        match err {
            I18nError::Configuration {
                fallback,
                available,
            } => {
                assert_eq!(fallback, "de");
                assert_eq!(available, vec!["en".to_string(), "pl".to_string()]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn initial_language_is_not_validated() {
        let resolver =
            TranslationResolver::new(two_language_set(), "pl", "xx").expect("valid fallback");
        assert_eq!(resolver.active_language(), "xx");
        assert_eq!(resolver.translate("nav.dashboard"), "Pulpit");
    }

    #[test]
    fn three_tier_resolution() {
        let resolver =
            TranslationResolver::new(two_language_set(), "pl", "en").expect("valid fallback");
        assert_eq!(resolver.translate("nav.dashboard"), "Dashboard");
        assert_eq!(resolver.translate("common.beta_notice"), "Wersja beta");
        assert_eq!(resolver.translate("nonexistent.key"), "nonexistent.key");
    }

    #[test]
    fn change_language_is_immediate_and_idempotent() {
        let resolver =
            TranslationResolver::new(two_language_set(), "pl", "en").expect("valid fallback");
        resolver.change_language("pl");
        assert_eq!(resolver.active_language(), "pl");
        assert_eq!(resolver.translate("nav.dashboard"), "Pulpit");
        resolver.change_language("pl");
        assert_eq!(resolver.translate("nav.dashboard"), "Pulpit");
        resolver.change_language("en");
        assert_eq!(resolver.translate("nav.dashboard"), "Dashboard");
    }

    #[test]
    fn has_key_checks_active_and_fallback() {
        let resolver =
            TranslationResolver::new(two_language_set(), "pl", "en").expect("valid fallback");
        assert!(resolver.has_key("nav.dashboard"));
        assert!(resolver.has_key("common.beta_notice"));
        assert!(!resolver.has_key("nav.missing"));
        assert!(!resolver.has_key("nav"));
    }

    #[test]
    fn translate_with_interpolates_any_tier() {
        let mut set = two_language_set();
        set.insert("de", bundle(&[("auth.welcome", "Willkommen, {{name}}!")]))
            .expect("non-empty bundle");
        let resolver = TranslationResolver::new(set, "de", "en").expect("valid fallback");
        let name = "Ala";
        assert_eq!(
            resolver.translate_with("auth.welcome", &[("name", &name)]),
            "Willkommen, Ala!"
        );
        assert_eq!(
            resolver.translate_with("missing.{{name}}", &[("name", &name)]),
            "missing.Ala"
        );
    }

    #[test]
    fn resolver_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TranslationResolver>();

        let resolver = std::sync::Arc::new(
            TranslationResolver::new(two_language_set(), "pl", "en").expect("valid fallback"),
        );
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let resolver = std::sync::Arc::clone(&resolver);
                std::thread::spawn(move || {
                    let code = if i % 2 == 0 { "en" } else { "pl" };
                    resolver.change_language(code);
                    let text = resolver.translate("nav.dashboard");
                    assert!(text == "Dashboard" || text == "Pulpit");
                })
            })
            .collect();
        for handle in handles {
            handle.join().expect("worker thread panicked");
        }
        let active = resolver.active_language();
        assert!(active == "en" || active == "pl");
    }
}
