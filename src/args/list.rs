//! Command-line listing of available languages.

use ui_locale::i18n::TranslationResolver;

/// What: Print the available languages, one per line.
///
/// Details:
/// - The active language is prefixed with `*`
/// - Each code is followed by its name in the active language
///   (`settings.languages.<code>`) when that key exists
pub fn handle_list(resolver: &TranslationResolver) {
    for line in render_list(resolver) {
        println!("{line}");
    }
}

/// What: Build the language listing lines, sorted by code.
pub fn render_list(resolver: &TranslationResolver) -> Vec<String> {
    let active = resolver.active_language();
    let mut codes = resolver.available_languages();
    codes.sort_unstable();

    codes
        .into_iter()
        .map(|code| {
            let marker = if code == active { '*' } else { ' ' };
            let name_key = format!("settings.languages.{code}");
            if resolver.has_key(&name_key) {
                format!("{marker} {code}\t{}", resolver.translate(&name_key))
            } else {
                format!("{marker} {code}")
            }
        })
        .collect()
}
