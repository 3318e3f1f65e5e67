//! Language detection and persistence through the binding layer.
//!
//! Tests cover:
//! - A switch is written to `settings.conf` and restored on the next start
//! - Stored preference beats the system locale
//! - Configured directories and aliases

#![cfg(test)]

use std::collections::HashMap;
use std::fs;

use tempfile::TempDir;
use ui_locale::i18n::{
    DetectionSource, I18nConfig, LANGUAGE_KEY, LanguageDetector, Localizer, MemoryStore,
    PreferenceStore, SettingsFileStore, TranslationResolver,
};

/// What: Configuration with detection off, so tests ignore the host locale.
fn quiet_config() -> I18nConfig {
    I18nConfig {
        detect: false,
        ..I18nConfig::default()
    }
}

#[test]
/// What: A persisted switch is restored by the next localizer.
///
/// Details:
/// - Simulates two application runs sharing one settings file
fn integration_switch_survives_restart() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory for test");
    let settings = temp_dir.path().join("settings.conf");

    let first = Localizer::from_config(&quiet_config(), SettingsFileStore::new(settings.clone()))
        .expect("first run builds");
    assert_eq!(first.active_language(), "pl");
    first.change_language("en").expect("settings file is writable");

    let contents = fs::read_to_string(&settings).expect("settings file written");
    assert!(contents.lines().any(|l| l == "language = en"));

    let second = Localizer::new(
        TranslationResolver::builtin().expect("built-in resolver"),
        SettingsFileStore::new(settings),
    );
    let detected = second.startup();
    assert_eq!(detected, Some(("en".to_string(), DetectionSource::Stored)));
    assert_eq!(second.t("nav.dashboard"), "Dashboard");
}

#[test]
/// What: Detection uses the environment only when nothing is stored.
fn integration_detection_order() {
    let aliases = HashMap::new();
    let resolver = TranslationResolver::builtin().expect("built-in resolver");
    let lang_en = |name: &str| (name == "LANG").then(|| "en_US.UTF-8".to_string());

    let empty = MemoryStore::new();
    let detected = LanguageDetector::new(&empty, &aliases)
        .with_env(lang_en)
        .apply(&resolver);
    assert_eq!(detected, Some(("en".to_string(), DetectionSource::System)));
    assert_eq!(resolver.translate("nav.dashboard"), "Dashboard");

    let stored = MemoryStore::with_value(LANGUAGE_KEY, "pl");
    let detected = LanguageDetector::new(&stored, &aliases)
        .with_env(lang_en)
        .apply(&resolver);
    assert_eq!(detected, Some(("pl".to_string(), DetectionSource::Stored)));
    assert_eq!(resolver.translate("nav.dashboard"), "Pulpit");
}

#[test]
/// What: A config file pointing at a locales directory replaces the built-ins.
fn integration_config_with_locales_dir() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory for test");
    let dir = temp_dir.path();
    fs::create_dir_all(dir.join("locales")).expect("Failed to create locales dir");
    fs::write(
        dir.join("locales").join("de.yml"),
        "de:\n  nav:\n    dashboard: Übersicht\n",
    )
    .expect("Failed to write de locale");
    fs::write(
        dir.join("locales").join("en.json"),
        r#"{ "nav": { "dashboard": "Dashboard", "reports": "Reports" } }"#,
    )
    .expect("Failed to write en locale");
    fs::write(
        dir.join("i18n.yml"),
        "default_language: de\nfallback_language: en\ndetect: false\nlocales_dir: locales\nfallbacks:\n  de-AT: de\n",
    )
    .expect("Failed to write config");

    let config = I18nConfig::load(&dir.join("i18n.yml")).expect("config loads");
    let localizer = Localizer::from_config(&config, MemoryStore::new()).expect("builds");

    assert_eq!(localizer.t("nav.dashboard"), "Übersicht");
    assert_eq!(localizer.t("nav.reports"), "Reports");
    assert_eq!(localizer.t("common.loading"), "common.loading");

    let applied = localizer
        .change_language_negotiated("de-AT")
        .expect("memory store accepts writes");
    assert_eq!(applied, "de");
    assert_eq!(
        localizer.store().load(LANGUAGE_KEY).expect("load"),
        Some("de".to_string())
    );
}
