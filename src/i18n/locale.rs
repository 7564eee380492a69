//! The `Locale` type: the closed set of languages content is published in.

use crate::i18n::{LocaleConfig, LocaleRegistry};
use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A supported content locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    Ko,
    En,
    Ja,
    Zh,
}

impl Locale {
    /// Every locale, in registry order.
    pub const ALL: [Locale; 4] = [Locale::Ko, Locale::En, Locale::Ja, Locale::Zh];

    /// Parse a locale from a language code.
    ///
    /// Surrounding whitespace is ignored and matching is case-insensitive,
    /// so `"EN"` and `" ja "` are accepted.
    ///
    /// # Example
    /// ```ignore
    /// let korean = Locale::from_code("ko")?;
    /// ```
    pub fn from_code(code: &str) -> Result<Locale> {
        let normalized = code.trim().to_ascii_lowercase();
        match LocaleRegistry::get().get_by_code(&normalized) {
            Some(config) => Ok(config.locale),
            None => bail!("Unknown locale code: '{}'", code),
        }
    }

    /// ISO 639-1 code (e.g., "ko").
    pub fn code(&self) -> &'static str {
        match self {
            Locale::Ko => "ko",
            Locale::En => "en",
            Locale::Ja => "ja",
            Locale::Zh => "zh",
        }
    }

    /// Position in `Locale::ALL` and in the registry.
    pub(crate) fn index(&self) -> usize {
        match self {
            Locale::Ko => 0,
            Locale::En => 1,
            Locale::Ja => 2,
            Locale::Zh => 3,
        }
    }

    /// Full registry metadata for this locale.
    pub fn config(&self) -> &'static LocaleConfig {
        LocaleRegistry::get().config(*self)
    }

    /// English name of the language.
    pub fn name(&self) -> &'static str {
        self.config().name
    }

    /// Name of the language in that language.
    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }
}

impl Default for Locale {
    fn default() -> Self {
        LocaleRegistry::get().default_locale()
    }
}

impl FromStr for Locale {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Locale::from_code(s)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
