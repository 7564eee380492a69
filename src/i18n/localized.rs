use crate::i18n::Locale;
use serde::{Deserialize, Serialize};

/// A value translated into every supported locale.
///
/// One field per locale, so a missing translation fails to compile instead
/// of failing at render time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Localized<T> {
    pub ko: T,
    pub en: T,
    pub ja: T,
    pub zh: T,
}

impl<T> Localized<T> {
    pub fn new(ko: T, en: T, ja: T, zh: T) -> Self {
        Self { ko, en, ja, zh }
    }

    pub fn get(&self, locale: Locale) -> &T {
        match locale {
            Locale::Ko => &self.ko,
            Locale::En => &self.en,
            Locale::Ja => &self.ja,
            Locale::Zh => &self.zh,
        }
    }

    pub fn map<U, F>(self, mut f: F) -> Localized<U>
    where
        F: FnMut(T) -> U,
    {
        Localized {
            ko: f(self.ko),
            en: f(self.en),
            ja: f(self.ja),
            zh: f(self.zh),
        }
    }

    /// Iterate `(locale, value)` pairs in registry order.
    pub fn iter(&self) -> impl Iterator<Item = (Locale, &T)> {
        Locale::ALL.into_iter().map(move |locale| (locale, self.get(locale)))
    }
}

impl Localized<String> {
    /// Build from string slices, mostly for compiled-in content.
    pub fn text(ko: &str, en: &str, ja: &str, zh: &str) -> Self {
        Self::new(ko.to_string(), en.to_string(), ja.to_string(), zh.to_string())
    }
}
