//! HTTP surface: router, shared state and handlers.

pub mod content;
pub mod error;
pub mod query;
pub mod referral;

pub use error::ApiError;
pub use query::QueryParams;

use crate::content::Catalog;
use crate::i18n::Locale;
use crate::referral::ReferralStore;
use axum::routing::get;
use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// State shared by every handler.
pub struct AppState {
    pub store: Arc<dyn ReferralStore>,
    pub catalog: &'static Catalog,
    pub default_locale: Locale,
}

impl AppState {
    pub fn new(store: Arc<dyn ReferralStore>, catalog: &'static Catalog, default_locale: Locale) -> Self {
        Self {
            store,
            catalog,
            default_locale,
        }
    }

    /// The requested locale, or the default when absent or unknown.
    pub fn resolve_locale(&self, lang: Option<&str>) -> Locale {
        lang.and_then(|code| Locale::from_code(code).ok())
            .unwrap_or(self.default_locale)
    }
}

pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(content::health))
        .route("/api/locales", get(content::list_locales))
        .route("/api/articles", get(content::list_articles))
        .route("/api/articles/:id", get(content::get_article))
        .route("/api/terms", get(content::get_terms))
        .route(
            "/api/referral",
            get(referral::get_stats).post(referral::post_action),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::referral::MemoryReferralStore;

    fn state(default_locale: Locale) -> AppState {
        AppState::new(
            Arc::new(MemoryReferralStore::new(100)),
            Catalog::get(),
            default_locale,
        )
    }

    #[test]
    fn test_resolve_locale_explicit() {
        assert_eq!(state(Locale::Ko).resolve_locale(Some("ja")), Locale::Ja);
        assert_eq!(state(Locale::Ko).resolve_locale(Some("ZH")), Locale::Zh);
    }

    #[test]
    fn test_resolve_locale_falls_back_to_default() {
        assert_eq!(state(Locale::En).resolve_locale(None), Locale::En);
        assert_eq!(state(Locale::Ko).resolve_locale(Some("fr")), Locale::Ko);
    }
}
