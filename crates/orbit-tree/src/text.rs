#![forbid(unsafe_code)]

//! Localized strings keyed by locale code.

use std::collections::BTreeMap;

use orbit_core::locale::{DEFAULT_LOCALE, primary_language};
use serde::{Deserialize, Serialize};

/// Text in several locales, e.g. `{"en": "Research", "de": "Forschung"}`.
///
/// Lookup falls back from the exact locale to its primary language, then to
/// [`DEFAULT_LOCALE`], then to the first entry by locale code.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocalizedText(BTreeMap<String, String>);

impl LocalizedText {
    /// Empty text.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Text with a single locale entry.
    #[must_use]
    pub fn single(locale: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new().with(locale, text)
    }

    /// Builder: add or replace a locale entry.
    #[must_use]
    pub fn with(mut self, locale: impl Into<String>, text: impl Into<String>) -> Self {
        self.0.insert(locale.into(), text.into());
        self
    }

    /// Resolve the text for `locale`. Returns `""` when there are no entries.
    #[must_use]
    pub fn get(&self, locale: &str) -> &str {
        self.0
            .get(locale)
            .or_else(|| {
                let primary = primary_language(locale);
                self.0.get(primary).or_else(|| {
                    self.0
                        .iter()
                        .find(|(k, _)| primary_language(k) == primary)
                        .map(|(_, v)| v)
                })
            })
            .or_else(|| self.0.get(DEFAULT_LOCALE))
            .or_else(|| self.0.values().next())
            .map_or("", String::as_str)
    }

    /// Exact lookup without fallback.
    #[must_use]
    pub fn get_exact(&self, locale: &str) -> Option<&str> {
        self.0.get(locale).map(String::as_str)
    }

    /// Locale codes with an entry, in sorted order.
    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Whether there are no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for LocalizedText {
    /// Text in the default locale.
    fn from(text: &str) -> Self {
        Self::single(DEFAULT_LOCALE, text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> LocalizedText {
        LocalizedText::new()
            .with("en", "Research")
            .with("de", "Forschung")
            .with("pt-BR", "Pesquisa")
    }

    #[test]
    fn exact_match_wins() {
        assert_eq!(sample().get("de"), "Forschung");
        assert_eq!(sample().get("pt-BR"), "Pesquisa");
    }

    #[test]
    fn region_falls_back_to_language() {
        assert_eq!(sample().get("de-AT"), "Forschung");
        assert_eq!(sample().get("pt-PT"), "Pesquisa");
    }

    #[test]
    fn unknown_falls_back_to_default_then_first() {
        assert_eq!(sample().get("ja"), "Research");
        let no_en = LocalizedText::new().with("fr", "Recherche").with("es", "Investigación");
        assert_eq!(no_en.get("ja"), "Investigación");
    }

    #[test]
    fn empty_text_is_empty_string() {
        assert_eq!(LocalizedText::new().get("en"), "");
        assert!(LocalizedText::new().is_empty());
    }

    #[test]
    fn serde_is_a_plain_map() {
        let text: LocalizedText = serde_json::from_str(r#"{"en":"Hi","fr":"Salut"}"#).unwrap();
        assert_eq!(text.get_exact("fr"), Some("Salut"));
        assert_eq!(text.locales().collect::<Vec<_>>(), vec!["en", "fr"]);
    }
}
