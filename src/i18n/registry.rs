//! Locale registry: Single source of truth for all supported locales.
//!
//! The registry is a process-wide singleton built with `OnceLock` on first
//! access and immutable afterwards.

use crate::i18n::Locale;
use serde::Serialize;
use std::sync::OnceLock;

/// Metadata for a supported locale.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocaleConfig {
    /// The locale this entry describes
    #[serde(skip)]
    pub locale: Locale,

    /// ISO 639-1 language code (e.g., "ko", "en")
    pub code: &'static str,

    /// English name of the language (e.g., "Korean", "Japanese")
    pub name: &'static str,

    /// Native name of the language (e.g., "한국어", "日本語")
    pub native_name: &'static str,

    /// Whether this is the fallback locale for requests without a preference
    pub is_default: bool,
}

/// Global locale registry singleton.
pub struct LocaleRegistry {
    locales: Vec<LocaleConfig>,
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<LocaleRegistry> = OnceLock::new();

impl LocaleRegistry {
    /// Get the global locale registry instance.
    pub fn get() -> &'static LocaleRegistry {
        REGISTRY.get_or_init(|| LocaleRegistry {
            locales: default_locales(),
        })
    }

    /// Get a locale configuration by its code.
    ///
    /// Matching is exact; callers that accept user input should normalize
    /// through [`Locale::from_code`] instead.
    pub fn get_by_code(&self, code: &str) -> Option<&LocaleConfig> {
        self.locales.iter().find(|config| config.code == code)
    }

    /// Get the configuration for a locale.
    pub fn config(&self, locale: Locale) -> &LocaleConfig {
        &self.locales[locale.index()]
    }

    /// All locales in registry order (ko, en, ja, zh).
    pub fn list_all(&self) -> &[LocaleConfig] {
        &self.locales
    }

    /// The locale used when a request carries no usable preference.
    pub fn default_locale(&self) -> Locale {
        self.locales
            .iter()
            .find(|config| config.is_default)
            .map(|config| config.locale)
            .unwrap_or(Locale::Ko)
    }
}

/// Default locale configurations, in the same order as `Locale::ALL`.
fn default_locales() -> Vec<LocaleConfig> {
    vec![
        LocaleConfig {
            locale: Locale::Ko,
            code: "ko",
            name: "Korean",
            native_name: "한국어",
            is_default: true,
        },
        LocaleConfig {
            locale: Locale::En,
            code: "en",
            name: "English",
            native_name: "English",
            is_default: false,
        },
        LocaleConfig {
            locale: Locale::Ja,
            code: "ja",
            name: "Japanese",
            native_name: "日本語",
            is_default: false,
        },
        LocaleConfig {
            locale: Locale::Zh,
            code: "zh",
            name: "Chinese",
            native_name: "中文",
            is_default: false,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_get_returns_singleton() {
        let registry1 = LocaleRegistry::get();
        let registry2 = LocaleRegistry::get();

        // Should return the same instance (same memory address)
        assert!(std::ptr::eq(registry1, registry2));
    }

    #[test]
    fn test_registry_order_matches_locale_all() {
        let registry = LocaleRegistry::get();
        let codes: Vec<_> = registry.list_all().iter().map(|c| c.locale).collect();
        assert_eq!(codes, Locale::ALL.to_vec());
    }

    #[test]
    fn test_get_by_code_korean() {
        let config = LocaleRegistry::get().get_by_code("ko").unwrap();
        assert_eq!(config.locale, Locale::Ko);
        assert_eq!(config.name, "Korean");
        assert_eq!(config.native_name, "한국어");
        assert!(config.is_default);
    }

    #[test]
    fn test_get_by_code_nonexistent() {
        assert!(LocaleRegistry::get().get_by_code("fr").is_none());
        assert!(LocaleRegistry::get().get_by_code("KO").is_none());
    }

    #[test]
    fn test_config_lookup_by_locale() {
        let registry = LocaleRegistry::get();
        for locale in Locale::ALL {
            assert_eq!(registry.config(locale).locale, locale);
        }
    }

    #[test]
    fn test_exactly_one_default() {
        let defaults = LocaleRegistry::get()
            .list_all()
            .iter()
            .filter(|c| c.is_default)
            .count();
        assert_eq!(defaults, 1);
        assert_eq!(LocaleRegistry::get().default_locale(), Locale::Ko);
    }

    #[test]
    fn test_config_serializes_camel_case() {
        let json = serde_json::to_value(LocaleRegistry::get().config(Locale::Ja)).unwrap();
        assert_eq!(json["code"], "ja");
        assert_eq!(json["nativeName"], "日本語");
        assert_eq!(json["isDefault"], false);
        assert!(json.get("locale").is_none());
    }
}
