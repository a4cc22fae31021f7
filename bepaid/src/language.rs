//! Languages the gateway can use for customer notifications and payment pages.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A notification language, sent as a lowercase two-letter code.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[allow(missing_docs)]
pub enum Language {
    #[default]
    En,
    Es,
    Tr,
    De,
    It,
    Ru,
    Zh,
    Fr,
    Da,
    Sv,
    No,
    Fi,
    Pl,
    Ja,
    Be,
    Uk,
    Ka,
    Ro,
}

impl Language {
    /// Every supported language.
    pub const ALL: [Self; 18] = [
        Self::En,
        Self::Es,
        Self::Tr,
        Self::De,
        Self::It,
        Self::Ru,
        Self::Zh,
        Self::Fr,
        Self::Da,
        Self::Sv,
        Self::No,
        Self::Fi,
        Self::Pl,
        Self::Ja,
        Self::Be,
        Self::Uk,
        Self::Ka,
        Self::Ro,
    ];

    /// Returns the wire code, e.g. `"ru"`.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Es => "es",
            Self::Tr => "tr",
            Self::De => "de",
            Self::It => "it",
            Self::Ru => "ru",
            Self::Zh => "zh",
            Self::Fr => "fr",
            Self::Da => "da",
            Self::Sv => "sv",
            Self::No => "no",
            Self::Fi => "fi",
            Self::Pl => "pl",
            Self::Ja => "ja",
            Self::Be => "be",
            Self::Uk => "uk",
            Self::Ka => "ka",
            Self::Ro => "ro",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
