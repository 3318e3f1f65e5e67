//! Application-facing binding: resolver plus detection and persistence.

use std::collections::{HashMap, HashSet};
use std::fmt::Display;

use crate::i18n::config::I18nConfig;
use crate::i18n::detection::{DetectionSource, LanguageDetector};
use crate::i18n::error::I18nError;
use crate::i18n::resolver::TranslationResolver;
use crate::i18n::store::{LANGUAGE_KEY, PreferenceStore};

/// Owns one resolver and the store its language choice is persisted to.
///
/// Construct one per application instance and pass it to the UI layer.
pub struct Localizer<S: PreferenceStore> {
    /// Key lookups and the active language.
    resolver: TranslationResolver,
    /// Where switches are persisted.
    store: S,
    /// Aliases used when negotiating detected codes.
    aliases: HashMap<String, String>,
    /// Whether switches are written to `store`.
    persist: bool,
}

impl<S: PreferenceStore> Localizer<S> {
    /// What: Wrap an existing resolver.
    ///
    /// Details:
    /// - Persistence is on and no aliases are configured
    #[must_use]
    pub fn new(resolver: TranslationResolver, store: S) -> Self {
        Self {
            resolver,
            store,
            aliases: HashMap::new(),
            persist: true,
        }
    }

    /// What: Build the resolver described by `config` and run startup detection.
    ///
    /// Details:
    /// - Detection runs only when `config.detect` is set
    ///
    /// # Errors
    /// - Any error of [`I18nConfig::build_resolver`]
    pub fn from_config(config: &I18nConfig, store: S) -> Result<Self, I18nError> {
        let mut localizer = Self::new(config.build_resolver()?, store);
        localizer.aliases.clone_from(&config.fallbacks);
        localizer.persist = config.persist;
        if config.detect {
            localizer.startup();
        }
        Ok(localizer)
    }

    /// What: Apply the stored or system language preference.
    ///
    /// Output:
    /// - The detected code and its source, or None when nothing was found
    ///
    /// Details:
    /// - Detection does not persist; only explicit switches do
    pub fn startup(&self) -> Option<(String, DetectionSource)> {
        let detected = LanguageDetector::new(&self.store, &self.aliases).apply(&self.resolver);
        match &detected {
            Some((code, source)) => {
                tracing::info!(code = %code, ?source, "startup language selected");
            }
            None => {
                tracing::debug!(
                    code = %self.resolver.active_language(),
                    "no language preference found, keeping default"
                );
            }
        }
        detected
    }

    /// What: Switch language and persist the choice.
    ///
    /// Details:
    /// - The switch is applied before persisting and stays applied if the
    ///   write fails
    ///
    /// # Errors
    /// - The store's write error, including a code it cannot hold verbatim;
    ///   it is also logged at warn level
    pub fn change_language(&self, code: &str) -> Result<(), I18nError> {
        self.resolver.change_language(code);
        if !self.persist {
            return Ok(());
        }
        self.store.save(LANGUAGE_KEY, code).inspect_err(|e| {
            tracing::warn!(code, error = %e, "failed to persist language preference");
        })
    }

    /// What: Negotiate `code` against the available languages, then switch.
    ///
    /// Details:
    /// - `pl-PL` becomes `pl` when only `pl` has a bundle; unknown codes pass
    ///   through unchanged
    ///
    /// # Errors
    /// - See [`Localizer::change_language`]
    pub fn change_language_negotiated(&self, code: &str) -> Result<String, I18nError> {
        let available: HashSet<&str> = self.resolver.available_languages().into_iter().collect();
        let negotiated = crate::i18n::detection::negotiate_language(code, &available, &self.aliases);
        self.change_language(&negotiated)?;
        Ok(negotiated)
    }

    /// Translate `key` for the active language.
    #[must_use]
    pub fn t(&self, key: &str) -> String {
        self.resolver.translate(key)
    }

    /// Translate `key` and substitute `{{name}}` placeholders.
    #[must_use]
    pub fn t_with(&self, key: &str, vars: &[(&str, &dyn Display)]) -> String {
        self.resolver.translate_with(key, vars)
    }

    /// Active language code.
    #[must_use]
    pub fn active_language(&self) -> String {
        self.resolver.active_language()
    }

    /// Whether switches through [`Localizer::change_language`] are written to the store.
    #[must_use]
    pub const fn persists(&self) -> bool {
        self.persist
    }

    /// The underlying resolver.
    #[must_use]
    pub const fn resolver(&self) -> &TranslationResolver {
        &self.resolver
    }

    /// The preference store.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }
}
