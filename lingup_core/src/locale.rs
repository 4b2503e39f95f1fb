//! Site languages and localized field selection.

use serde::{Deserialize, Serialize};

/// Languages the site is translated into.
///
/// Uzbek is the default; the header switches to it on first render.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Uz,
    Ru,
    En,
}

impl Language {
    /// Order used by the language switcher.
    pub const ALL: [Language; 3] = [Language::Uz, Language::En, Language::Ru];

    /// Parse a BCP-47-ish tag by prefix (`ru-RU` → `Ru`, `uz` → `Uz`).
    /// Anything else is English.
    pub fn from_tag(tag: &str) -> Self {
        let tag = tag.trim().to_ascii_lowercase();
        if tag.starts_with("ru") {
            Language::Ru
        } else if tag.starts_with("uz") {
            Language::Uz
        } else {
            Language::En
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Language::Uz => "uz",
            Language::Ru => "ru",
            Language::En => "en",
        }
    }

    /// Native name shown in the language switcher.
    pub fn label(&self) -> &'static str {
        match self {
            Language::Uz => "O'zbek",
            Language::Ru => "Русский",
            Language::En => "English",
        }
    }
}

/// Pick the `X_ru` / `X_uz` variant of a field for `lang`, falling back to
/// the base field `X` when the variant is absent or empty.
pub fn pick_localized<'a>(
    lang: Language,
    base: Option<&'a str>,
    ru: Option<&'a str>,
    uz: Option<&'a str>,
) -> Option<&'a str> {
    let localized = match lang {
        Language::Ru => ru,
        Language::Uz => uz,
        Language::En => None,
    };
    non_empty(localized).or_else(|| non_empty(base))
}

pub(crate) fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.trim().is_empty())
}
