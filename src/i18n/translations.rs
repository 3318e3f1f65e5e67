//! Locale bundles, dotted key paths and placeholder interpolation.

use std::collections::HashMap;
use std::fmt::Display;

/// Translation map: dot-notation key -> translated string.
pub type TranslationMap = HashMap<String, String>;

/// All translated strings of one language, keyed by dotted path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocaleBundle {
    /// Flattened entries (`nav.dashboard` -> `Dashboard`).
    entries: TranslationMap,
}

impl LocaleBundle {
    /// What: Create an empty bundle.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// What: Insert or replace one entry.
    ///
    /// Inputs:
    /// - `key`: Dotted key (e.g. `nav.dashboard`)
    /// - `value`: Translated text
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Number of string leaves in the bundle.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` when the bundle holds no strings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// What: Look up a raw dotted key without path validation.
    ///
    /// Output:
    /// - `Some(&str)` when the key is a string leaf of this bundle
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Iterate over `(key, value)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// What: Resolve a validated key path against this bundle.
    ///
    /// Details:
    /// - Only string leaves are stored, so an interior node such as `nav`
    ///   never resolves and is reported as missing
    pub(crate) fn lookup(&self, path: &KeyPath<'_>) -> Result<&str, LookupError> {
        self.get(path.key).ok_or(LookupError::Missing)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for LocaleBundle {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Why a single bundle could not produce a string for a key.
///
/// Never leaves the crate: the resolver turns every variant into the next
/// fallback tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LookupError {
    /// The key was empty.
    EmptyKey,
    /// The key contained an empty segment (`a..b`, `.a`, `a.`).
    EmptySegment,
    /// The path does not end at a string leaf.
    Missing,
}

/// A dotted key whose segments are all non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct KeyPath<'a> {
    /// Original key, used for the flat bundle lookup.
    key: &'a str,
    /// Number of segments.
    depth: usize,
}

impl<'a> KeyPath<'a> {
    /// What: Split a dotted key into its path.
    ///
    /// Output:
    /// - `Err(LookupError)` for an empty key or a key with an empty segment
    pub(crate) fn parse(key: &'a str) -> Result<Self, LookupError> {
        if key.is_empty() {
            return Err(LookupError::EmptyKey);
        }
        let mut depth = 0;
        for segment in key.split('.') {
            if segment.is_empty() {
                return Err(LookupError::EmptySegment);
            }
            depth += 1;
        }
        Ok(Self { key, depth })
    }

    /// Number of segments in the path.
    pub(crate) const fn depth(&self) -> usize {
        self.depth
    }
}

/// What: Look up a translation in the translation map.
///
/// Inputs:
/// - `key`: Dot-notation key (e.g., "nav.dashboard")
/// - `translations`: Bundle to search
///
/// Output:
/// - `Option<String>` containing translation or None if not found or malformed
#[must_use]
pub fn translate(key: &str, translations: &LocaleBundle) -> Option<String> {
    let path = KeyPath::parse(key).ok()?;
    translations.lookup(&path).ok().map(str::to_string)
}

/// What: Look up a translation with a fallback bundle, echoing the key last.
///
/// Inputs:
/// - `key`: Dot-notation key
/// - `primary`: Bundle of the active language (absent when the active
///   language has no bundle)
/// - `fallback`: Bundle of the fallback language
///
/// Output:
/// - Translated string from `primary`, else from `fallback`, else `key` itself
///
/// Details:
/// - Never fails; misses are logged at debug level so they stay discoverable
pub fn translate_with_fallback(
    key: &str,
    primary: Option<&LocaleBundle>,
    fallback: Option<&LocaleBundle>,
) -> String {
    let path = match KeyPath::parse(key) {
        Ok(path) => path,
        Err(err) => {
            tracing::debug!(key, error = ?err, "malformed translation key, returning key as-is");
            return key.to_string();
        }
    };

    if let Some(text) = primary.and_then(|b| b.lookup(&path).ok()) {
        return text.to_string();
    }

    if let Some(text) = fallback.and_then(|b| b.lookup(&path).ok()) {
        tracing::debug!(key, "translation key not found in active language, using fallback");
        return text.to_string();
    }

    tracing::debug!(
        key,
        depth = path.depth(),
        "missing translation key, returning key as-is"
    );
    key.to_string()
}

/// What: Substitute `{{name}}` placeholders with caller-supplied values.
///
/// Inputs:
/// - `text`: Resolved string
/// - `vars`: Variable names and values
///
/// Output:
/// - `text` with every known placeholder replaced by the value's `Display` form
///
/// Details:
/// - Whitespace around the name is ignored (`{{ name }}` matches `name`)
/// - Unknown names and unterminated `{{` are left untouched
/// - Values are inserted verbatim; no escaping and no re-expansion
#[must_use]
pub fn interpolate(text: &str, vars: &[(&str, &dyn Display)]) -> String {
    if vars.is_empty() || !text.contains("{{") {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(open) = rest.find("{{") {
        out.push_str(&rest[..open]);
        let after_open = &rest[open + 2..];
        let Some(close) = after_open.find("}}") else {
            out.push_str(&rest[open..]);
            return out;
        };
        let name = after_open[..close].trim();
        match vars.iter().find(|(k, _)| *k == name) {
            Some((_, value)) => out.push_str(&value.to_string()),
            None => out.push_str(&rest[open..open + 2 + close + 2]),
        }
        rest = &after_open[close + 2..];
    }
    out.push_str(rest);
    out
}
