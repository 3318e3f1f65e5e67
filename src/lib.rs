//! Library entry for ui-locale: language-scoped UI string lookup.

pub mod i18n;
pub mod paths;
