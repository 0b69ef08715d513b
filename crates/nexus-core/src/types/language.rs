//! Supported UI languages

use serde::{Deserialize, Serialize};

/// Closed set of UI locales
///
/// Unknown codes never become a `Language`; callers fall back to
/// [`Language::default`] or keep their current value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Vi,
    Zh,
    Ru,
    Th,
    Ja,
    Ko,
    Fr,
    De,
    Es,
}

impl Language {
    /// All languages, in menu order
    pub const ALL: [Language; 10] = [
        Language::En,
        Language::Vi,
        Language::Zh,
        Language::Ru,
        Language::Th,
        Language::Ja,
        Language::Ko,
        Language::Fr,
        Language::De,
        Language::Es,
    ];

    /// Locale code as persisted
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Vi => "vi",
            Language::Zh => "zh",
            Language::Ru => "ru",
            Language::Th => "th",
            Language::Ja => "ja",
            Language::Ko => "ko",
            Language::Fr => "fr",
            Language::De => "de",
            Language::Es => "es",
        }
    }

    /// Parse an exact locale code; anything else is unsupported
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|lang| lang.code() == code)
    }

    /// Name of the language in itself
    pub fn native_name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Vi => "Tiếng Việt",
            Language::Zh => "中文",
            Language::Ru => "Русский",
            Language::Th => "ไทย",
            Language::Ja => "日本語",
            Language::Ko => "한국어",
            Language::Fr => "Français",
            Language::De => "Deutsch",
            Language::Es => "Español",
        }
    }

    /// Flag glyph shown in the language menu
    pub fn flag(&self) -> &'static str {
        match self {
            Language::En => "🇺🇸",
            Language::Vi => "🇻🇳",
            Language::Zh => "🇨🇳",
            Language::Ru => "🇷🇺",
            Language::Th => "🇹🇭",
            Language::Ja => "🇯🇵",
            Language::Ko => "🇰🇷",
            Language::Fr => "🇫🇷",
            Language::De => "🇩🇪",
            Language::Es => "🇪🇸",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
