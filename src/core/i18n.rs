//! Bilingual text resolution
//!
//! The catalog ships English and Japanese text for most fields. Resolution
//! is pure and total: a field authored in both locales returns the exact
//! string for the requested locale, a field authored only in English
//! returns the English text for either locale. Nothing here can fail at
//! runtime - unsupported locales are unrepresentable.

use serde::Serialize;

/// Supported display languages
///
/// A display-only concern: no behavior branches on the locale beyond
/// string selection.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    #[strum(serialize = "en")]
    En,
    #[strum(serialize = "ja")]
    Ja,
}

impl Locale {
    /// Native-script label for the locale toggle
    pub const fn native_name(self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::Ja => "日本語",
        }
    }

    pub const fn toggled(self) -> Self {
        match self {
            Locale::En => Locale::Ja,
            Locale::Ja => Locale::En,
        }
    }
}

/// A single display string authored in one or both locales
///
/// The builtin catalog is inconsistent in translation coverage (three
/// error scenarios carry English text only). That gap is reported by
/// [`ContentCatalog::missing_translations`](crate::core::catalog::ContentCatalog::missing_translations)
/// rather than papered over here; resolution simply falls back.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct LocalizedText {
    en: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    ja: Option<&'static str>,
}

impl LocalizedText {
    /// Text authored in both locales
    pub const fn pair(en: &'static str, ja: &'static str) -> Self {
        Self { en, ja: Some(ja) }
    }

    /// Text authored in English only (documented fallback, not a failure)
    pub const fn english(en: &'static str) -> Self {
        Self { en, ja: None }
    }

    /// Resolve for a locale, falling back to English when no translation
    /// exists. Never blank, never an error.
    pub fn resolve(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::En => self.en,
            Locale::Ja => self.ja.unwrap_or(self.en),
        }
    }

    /// Whether the text is authored in the given locale (no fallback)
    pub const fn has(&self, locale: Locale) -> bool {
        match locale {
            Locale::En => true,
            Locale::Ja => self.ja.is_some(),
        }
    }
}

/// An ordered list of short strings (pros, cons, symptoms, ...) authored
/// in one or both locales
///
/// Both renditions of a list are authored to the same length; order is
/// significant and preserved.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct LocalizedList {
    en: &'static [&'static str],
    #[serde(skip_serializing_if = "Option::is_none")]
    ja: Option<&'static [&'static str]>,
}

impl LocalizedList {
    pub const fn pair(en: &'static [&'static str], ja: &'static [&'static str]) -> Self {
        Self { en, ja: Some(ja) }
    }

    pub const fn english(en: &'static [&'static str]) -> Self {
        Self { en, ja: None }
    }

    pub fn resolve(&self, locale: Locale) -> &'static [&'static str] {
        match locale {
            Locale::En => self.en,
            Locale::Ja => self.ja.unwrap_or(self.en),
        }
    }

    pub const fn has(&self, locale: Locale) -> bool {
        match locale {
            Locale::En => true,
            Locale::Ja => self.ja.is_some(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match_both_locales() {
        let text = LocalizedText::pair("Next", "次へ");
        assert_eq!(text.resolve(Locale::En), "Next");
        assert_eq!(text.resolve(Locale::Ja), "次へ");
    }

    #[test]
    fn test_english_fallback() {
        let text = LocalizedText::english("Insufficient Logging");
        assert_eq!(text.resolve(Locale::En), "Insufficient Logging");
        assert_eq!(text.resolve(Locale::Ja), "Insufficient Logging");
        assert!(text.has(Locale::En));
        assert!(!text.has(Locale::Ja));
    }

    #[test]
    fn test_list_resolution() {
        let list = LocalizedList::pair(&["a", "b"], &["あ", "い"]);
        assert_eq!(list.resolve(Locale::Ja), &["あ", "い"]);

        let english_only = LocalizedList::english(&["x"]);
        assert_eq!(english_only.resolve(Locale::Ja), &["x"]);
    }

    #[test]
    fn test_locale_toggle_is_involution() {
        assert_eq!(Locale::En.toggled(), Locale::Ja);
        assert_eq!(Locale::En.toggled().toggled(), Locale::En);
    }

    #[test]
    fn test_locale_parses_from_str() {
        use std::str::FromStr;
        assert_eq!(Locale::from_str("ja").unwrap(), Locale::Ja);
        assert_eq!(Locale::from_str("en").unwrap(), Locale::En);
        assert!(Locale::from_str("fr").is_err());
    }
}
