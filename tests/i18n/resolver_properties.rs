//! Lookup properties of the translation resolver.
//!
//! Tests cover:
//! - Every leaf resolves in its own language
//! - Active -> fallback -> key resolution order
//! - Idempotent and reversible language switches

#![cfg(test)]

use ui_locale::i18n::{I18nError, LocaleBundle, ResourceSet, TranslationResolver};

/// What: Build a resolver over the built-in bundles.
///
/// Output:
/// - Resolver with `pl` as fallback and initial language
fn builtin() -> TranslationResolver {
    TranslationResolver::builtin().expect("built-in resolver must build")
}

/// What: Collect every `(language, key, value)` triple of the built-in bundles.
fn all_leaves(resolver: &TranslationResolver) -> Vec<(String, String, String)> {
    let mut leaves = Vec::new();
    for code in resolver.available_languages() {
        let bundle = resolver
            .resources()
            .bundle(code)
            .expect("listed language has a bundle");
        for (key, value) in bundle.iter() {
            leaves.push((code.to_string(), key.to_string(), value.to_string()));
        }
    }
    leaves
}

#[test]
/// What: Every string leaf resolves to itself in its own language.
///
/// Details:
/// - Switches to each language and checks all of its keys
fn integration_every_leaf_resolves_in_its_language() {
    let resolver = builtin();
    let leaves = all_leaves(&resolver);
    assert!(!leaves.is_empty());

    for (code, key, value) in leaves {
        resolver.change_language(&code);
        assert_eq!(resolver.translate(&key), value, "{code}/{key}");
    }
}

#[test]
/// What: Keys missing from the active bundle come from the fallback bundle.
fn integration_missing_keys_use_fallback() {
    let resolver = builtin();
    resolver.change_language("en");
    let pl = resolver
        .resources()
        .bundle("pl")
        .expect("pl bundle")
        .clone();
    let en = resolver.resources().bundle("en").expect("en bundle").clone();

    let mut checked = 0;
    for (key, value) in pl.iter() {
        if en.get(key).is_none() {
            assert_eq!(resolver.translate(key), value);
            checked += 1;
        }
    }
    assert!(checked > 0, "built-in pl bundle should have a pl-only key");
    assert_eq!(
        resolver.translate("common.beta_notice"),
        "Ta funkcja jest w wersji beta"
    );
}

#[test]
/// What: Keys missing everywhere are echoed unchanged.
fn integration_missing_everywhere_echoes_key() {
    let resolver = builtin();
    for code in ["pl", "en", "de"] {
        resolver.change_language(code);
        assert_eq!(resolver.translate("nonexistent.key"), "nonexistent.key");
        assert_eq!(resolver.translate("nav"), "nav");
        assert_eq!(resolver.translate(""), "");
        assert_eq!(resolver.translate("nav..dashboard"), "nav..dashboard");
    }
}

#[test]
/// What: Concrete lookups for the shipped bundles.
fn integration_concrete_scenarios() {
    let resolver = builtin();

    resolver.change_language("pl");
    assert_eq!(resolver.translate("common.loading"), "Ładowanie...");
    assert_eq!(resolver.translate("nonexistent.key"), "nonexistent.key");

    resolver.change_language("en");
    assert_eq!(resolver.translate("nav.dashboard"), "Dashboard");

    let languages = resolver.available_languages();
    assert!(languages.contains(&"en"));
    assert!(languages.contains(&"pl"));
}

#[test]
/// What: Switching twice equals switching once; en -> pl -> en restores lookups.
fn integration_switch_idempotent_and_reversible() {
    let resolver = builtin();
    let keys: Vec<String> = resolver
        .resources()
        .bundle("en")
        .expect("en bundle")
        .iter()
        .map(|(k, _)| k.to_string())
        .collect();

    resolver.change_language("en");
    let original: Vec<String> = keys.iter().map(|k| resolver.translate(k)).collect();

    resolver.change_language("en");
    let twice: Vec<String> = keys.iter().map(|k| resolver.translate(k)).collect();
    assert_eq!(original, twice);

    resolver.change_language("pl");
    assert_ne!(resolver.translate("nav.dashboard"), "Dashboard");
    resolver.change_language("en");
    let restored: Vec<String> = keys.iter().map(|k| resolver.translate(k)).collect();
    assert_eq!(original, restored);
}

#[test]
/// What: Construction fails when the fallback has no bundle.
fn integration_construction_requires_fallback_bundle() {
    let mut resources = ResourceSet::new();
    let bundle: LocaleBundle = [("nav.dashboard", "Dashboard")].into_iter().collect();
    resources.insert("en", bundle).expect("non-empty bundle");

    let result = TranslationResolver::new(resources, "pl", "en");
    assert!(matches!(
        result,
        Err(I18nError::Configuration { ref fallback, .. }) if fallback == "pl"
    ));
}

#[test]
/// What: Interpolation fills known placeholders and leaves others alone.
fn integration_interpolation() {
    let resolver = builtin();
    let count = 12;
    assert_eq!(
        resolver.translate_with("dashboard.items_count", &[("count", &count)]),
        "Liczba elementów: 12"
    );
    resolver.change_language("en");
    assert_eq!(
        resolver.translate_with("dashboard.items_count", &[("other", &count)]),
        "{{count}} items"
    );
}
