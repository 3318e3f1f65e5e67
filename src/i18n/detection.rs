//! Startup language detection: stored preference first, then the system locale.

use std::collections::{HashMap, HashSet};
use std::env;

use crate::i18n::resolver::TranslationResolver;
use crate::i18n::store::{LANGUAGE_KEY, PreferenceStore};

/// Environment variables consulted for the system locale, in priority order.
const LOCALE_VARS: [&str; 3] = ["LC_ALL", "LC_MESSAGES", "LANG"];

/// Longest alias chain followed before giving up.
const MAX_ALIAS_STEPS: usize = 10;

/// Where a detected language came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetectionSource {
    /// The preference store.
    Stored,
    /// The process environment.
    System,
}

/// What: Detect system locale from environment variables.
///
/// Output:
/// - `Option<String>` containing locale code (e.g., "pl-PL") or None if not detectable
///
/// Details:
/// - Checks `LC_ALL`, `LC_MESSAGES` and `LANG` in order
pub fn detect_system_locale() -> Option<String> {
    detect_locale_with(|name| env::var(name).ok())
}

/// What: Detect a locale through an arbitrary variable lookup.
///
/// Inputs:
/// - `lookup`: Returns the value of an environment-style variable
///
/// Output:
/// - First variable in `LC_ALL`, `LC_MESSAGES`, `LANG` order that parses to a locale
pub fn detect_locale_with<F>(lookup: F) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    LOCALE_VARS
        .into_iter()
        .filter_map(|name| lookup(name))
        .find_map(|value| parse_locale_string(&value))
}

/// What: Parse a POSIX locale string into a language code.
///
/// Inputs:
/// - `locale_str`: Locale string like "pl_PL.UTF-8", "de_DE@euro", "en-US", "pl"
///
/// Output:
/// - `Some("pl-PL")`-style code, or None for empty, `C` and `POSIX` locales
///
/// Details:
/// - Drops the encoding (`.UTF-8`) and modifier (`@euro`)
/// - Lowercases the language, title-cases a 4-letter script, uppercases the region
pub fn parse_locale_string(locale_str: &str) -> Option<String> {
    let trimmed = locale_str.trim();
    let base = trimmed.split(['.', '@']).next()?.trim();
    if base.is_empty() || base.eq_ignore_ascii_case("c") || base.eq_ignore_ascii_case("posix") {
        return None;
    }

    let mut parts = base.split(['_', '-']);
    let language = parts.next()?.to_ascii_lowercase();
    if language.is_empty() || !language.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }

    let mut code = language;
    for part in parts {
        if part.is_empty() || !part.chars().all(|c| c.is_ascii_alphanumeric()) {
            return None;
        }
        code.push('-');
        if part.len() == 4 {
            let mut chars = part.chars();
            if let Some(first) = chars.next() {
                code.push(first.to_ascii_uppercase());
                code.push_str(&chars.as_str().to_ascii_lowercase());
            }
        } else {
            code.push_str(&part.to_ascii_uppercase());
        }
    }
    Some(code)
}

/// What: Map a requested code onto an available language.
///
/// Inputs:
/// - `code`: Requested code (e.g. "pl-PL")
/// - `available`: Codes with a bundle
/// - `aliases`: Configured code -> code aliases
///
/// Output:
/// - `code` itself when available; else the first available code reached by
///   following `aliases`; else the primary subtag (`pl-PL` -> `pl`) when
///   available; else `code` unchanged
///
/// Details:
/// - Alias chains are cycle-safe and bounded
pub fn negotiate_language(
    code: &str,
    available: &HashSet<&str>,
    aliases: &HashMap<String, String>,
) -> String {
    if available.contains(code) {
        return code.to_string();
    }

    let mut current = code;
    let mut visited = HashSet::new();
    while visited.insert(current) && visited.len() <= MAX_ALIAS_STEPS {
        let Some(next) = aliases.get(current) else {
            break;
        };
        tracing::debug!(from = current, to = %next, "following language alias");
        if available.contains(next.as_str()) {
            return next.clone();
        }
        current = next;
    }

    if let Some((primary, _)) = code.split_once('-')
        && available.contains(primary)
    {
        tracing::debug!(code, primary, "using primary language subtag");
        return primary.to_string();
    }

    tracing::debug!(code, "no available language matches, keeping code as-is");
    code.to_string()
}

/// Chooses the startup language from a preference store and the environment.
pub struct LanguageDetector<'a> {
    /// Store holding a previously chosen language.
    store: &'a dyn PreferenceStore,
    /// Code aliases from configuration.
    aliases: &'a HashMap<String, String>,
    /// System locale source ([`detect_system_locale`] unless replaced).
    system_locale: Box<dyn Fn() -> Option<String> + 'a>,
}

impl<'a> LanguageDetector<'a> {
    /// Detector reading the real process environment.
    #[must_use]
    pub fn new(store: &'a dyn PreferenceStore, aliases: &'a HashMap<String, String>) -> Self {
        Self {
            store,
            aliases,
            system_locale: Box::new(detect_system_locale),
        }
    }

    /// What: Read the system locale through `lookup` instead of the process environment.
    #[must_use]
    pub fn with_env<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String> + 'a,
    {
        self.system_locale = Box::new(move || detect_locale_with(&lookup));
        self
    }

    /// What: Find the preferred language.
    ///
    /// Output:
    /// - Negotiated code and its source, or None when neither source has one
    ///
    /// Details:
    /// - A store read failure is logged and treated as "no stored preference"
    #[must_use]
    pub fn detect(&self, available: &HashSet<&str>) -> Option<(String, DetectionSource)> {
        let stored = match self.store.load(LANGUAGE_KEY) {
            Ok(value) => value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty()),
            Err(e) => {
                tracing::warn!(error = %e, "failed to read stored language preference");
                None
            }
        };

        let (raw, source) = match stored {
            Some(code) => (code, DetectionSource::Stored),
            None => (
                (self.system_locale)()?,
                DetectionSource::System,
            ),
        };

        let code = negotiate_language(&raw, available, self.aliases);
        tracing::debug!(raw = %raw, code = %code, ?source, "detected language");
        Some((code, source))
    }

    /// What: Detect and apply the preferred language to `resolver`.
    ///
    /// Output:
    /// - The detection result; the resolver is left untouched when None
    pub fn apply(&self, resolver: &TranslationResolver) -> Option<(String, DetectionSource)> {
        let available: HashSet<&str> = resolver.available_languages().into_iter().collect();
        let detected = self.detect(&available)?;
        resolver.change_language(&detected.0);
        Some(detected)
    }
}
