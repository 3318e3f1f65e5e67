//! Internationalization (i18n) for UI strings.
//!
//! This module provides bundle loading, translation lookup, language detection
//! and preference persistence.
//!
//! # Overview
//!
//! - **Bundles**: One JSON (or YAML) document per language. Nested objects are
//!   flattened into dot-notation keys, so `{"nav": {"dashboard": "..."}}` is
//!   addressed as `nav.dashboard`. English and Polish bundles ship with the crate.
//! - **Lookup**: [`TranslationResolver::translate`] tries the active language,
//!   then the fallback language, then returns the key itself. It never fails.
//! - **Interpolation**: `{{name}}` placeholders are replaced with caller values;
//!   nothing is escaped.
//! - **Detection**: At startup a stored preference wins over `LC_ALL`,
//!   `LC_MESSAGES` and `LANG`.
//! - **Persistence**: [`Localizer::change_language`] writes the new code under
//!   the `language` key of `settings.conf`.
//!
//! # Configuration
//!
//! `config/i18n.yml` (or `~/.config/ui-locale/i18n.yml`):
//! - `default_language`: Active language before detection (default `pl`)
//! - `fallback_language`: Second lookup tier (default `pl`)
//! - `fallbacks`: Aliases for detected codes (e.g. `pl-PL: pl`)
//! - `locales_dir`: Directory of `{code}.json|yml` files replacing the built-ins
//!
//! # Usage
//!
//! ```rust
//! use ui_locale::i18n::TranslationResolver;
//!
//! let resolver = TranslationResolver::builtin().expect("built-in bundles");
//! assert_eq!(resolver.translate("common.loading"), "Ładowanie...");
//!
//! resolver.change_language("en");
//! assert_eq!(resolver.translate("nav.dashboard"), "Dashboard");
//!
//! let name = "Ala";
//! assert_eq!(
//!     resolver.translate_with("auth.welcome", &[("name", &name)]),
//!     "Welcome back, Ala!"
//! );
//! assert_eq!(resolver.translate("nonexistent.key"), "nonexistent.key");
//! ```
//!
//! # Error Handling
//!
//! - A fallback language without a bundle fails construction with
//!   [`I18nError::Configuration`]
//! - Missing or malformed keys are never errors; the key is returned and a
//!   debug event is logged
//! - Failing to persist a switch is reported, but the switch stays applied

mod binding;
mod config;
mod detection;
mod error;
mod loader;
mod resolver;
mod resources;
mod store;
pub mod translations;

pub use binding::Localizer;
pub use config::{DEFAULT_LANGUAGE, I18nConfig, find_config_file};
pub use detection::{
    DetectionSource, LanguageDetector, detect_locale_with, detect_system_locale,
    negotiate_language, parse_locale_string,
};
pub use error::I18nError;
pub use loader::{
    LocaleLoader, is_valid_language_code, load_locale_file, parse_json_bundle, parse_yaml_bundle,
};
pub use resolver::TranslationResolver;
pub use resources::ResourceSet;
pub use store::{LANGUAGE_KEY, MemoryStore, PreferenceStore, SettingsFileStore};
pub use translations::{LocaleBundle, TranslationMap, interpolate, translate, translate_with_fallback};
