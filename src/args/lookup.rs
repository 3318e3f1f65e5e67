//! Command-line key lookup.

use std::fmt::Display;

use ui_locale::i18n::TranslationResolver;

/// What: Resolve each key and print one result per line.
///
/// Inputs:
/// - `resolver`: Resolver with the language already selected
/// - `keys`: Dotted keys to resolve
/// - `vars`: `{{name}}` substitutions applied to every result
pub fn handle_lookup(resolver: &TranslationResolver, keys: &[String], vars: &[(String, String)]) {
    tracing::debug!(
        language = %resolver.active_language(),
        keys = keys.len(),
        "resolving keys from CLI"
    );
    for line in render_lookup(resolver, keys, vars) {
        println!("{line}");
    }
}

/// What: Resolve each key with interpolation.
///
/// Output:
/// - One resolved string per key, in input order
pub fn render_lookup(
    resolver: &TranslationResolver,
    keys: &[String],
    vars: &[(String, String)],
) -> Vec<String> {
    let vars: Vec<(&str, &dyn Display)> = vars
        .iter()
        .map(|(name, value)| (name.as_str(), value as &dyn Display))
        .collect();
    keys.iter()
        .map(|key| resolver.translate_with(key, &vars))
        .collect()
}
