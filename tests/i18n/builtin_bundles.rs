//! Consistency checks for the shipped locale files.

#![cfg(test)]

use std::collections::BTreeSet;
use std::path::PathBuf;

use ui_locale::i18n::{LocaleLoader, ResourceSet};

/// What: Path of the repository's `locales/` directory.
fn locales_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("locales")
}

#[test]
/// What: Loading `locales/` from disk matches the compiled-in bundles.
fn integration_disk_bundles_match_builtin() {
    let builtin = ResourceSet::builtin().expect("built-in bundles");
    let mut loader = LocaleLoader::new(locales_dir());
    let from_disk = loader.load_all().expect("locales directory loads");

    let mut codes = from_disk.languages();
    codes.sort_unstable();
    assert_eq!(codes, vec!["en", "pl"]);
    for code in codes {
        assert_eq!(from_disk.bundle(code), builtin.bundle(code), "{code}");
    }
}

#[test]
/// What: Every English key also exists in Polish, the fallback language.
///
/// Details:
/// - Polish may carry extra keys; those reach English users via fallback
fn integration_polish_covers_english_keys() {
    let builtin = ResourceSet::builtin().expect("built-in bundles");
    let keys = |code: &str| -> BTreeSet<String> {
        builtin
            .bundle(code)
            .expect("bundle exists")
            .iter()
            .map(|(k, _)| k.to_string())
            .collect()
    };
    let en = keys("en");
    let pl = keys("pl");
    let missing: Vec<&String> = en.difference(&pl).collect();
    assert!(missing.is_empty(), "keys missing from pl: {missing:?}");
}

#[test]
/// What: Placeholders match between languages for shared keys.
fn integration_placeholders_match_across_languages() {
    let builtin = ResourceSet::builtin().expect("built-in bundles");
    let en = builtin.bundle("en").expect("en bundle");
    let pl = builtin.bundle("pl").expect("pl bundle");

    let placeholders = |text: &str| -> BTreeSet<String> {
        text.split("{{")
            .skip(1)
            .filter_map(|rest| rest.split_once("}}").map(|(name, _)| name.trim().to_string()))
            .collect()
    };

    for (key, en_text) in en.iter() {
        if let Some(pl_text) = pl.get(key) {
            assert_eq!(placeholders(en_text), placeholders(pl_text), "{key}");
        }
    }
}
