use crate::content::{Article, ArticleSummaryView, ArticleView, Catalog, Category};
use crate::i18n::{Locale, LocaleConfig, LocaleRegistry};
use crate::server::error::ApiError;
use crate::server::query::QueryParams;
use crate::server::AppState;
use crate::terms::TermsDocument;
use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;
use serde_json::{json, Value};
use std::sync::Arc;

/// Filters accepted by the article list route.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ArticleListQuery {
    pub lang: Option<String>,
    pub category: Option<Category>,
    pub tag: Option<String>,
    pub featured: Option<bool>,
    pub q: Option<String>,
}

impl TryFrom<&QueryParams> for ArticleListQuery {
    type Error = ApiError;

    fn try_from(params: &QueryParams) -> Result<Self, Self::Error> {
        let category = params
            .get("category")
            .map(|raw| raw.parse::<Category>())
            .transpose()
            .map_err(|_| ApiError::bad_request("Invalid category"))?;

        Ok(Self {
            lang: params.get("lang").map(String::from),
            category,
            tag: params.get("tag").map(String::from),
            featured: params.flag("featured")?,
            q: params.get("q").map(String::from),
        })
    }
}

#[derive(Debug, Serialize)]
pub struct ArticleList {
    pub locale: Locale,
    pub count: usize,
    pub articles: Vec<ArticleSummaryView<'static>>,
}

pub async fn health(State(state): State<Arc<AppState>>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "articles": state.catalog.len(),
    }))
}

pub async fn list_locales() -> Json<&'static [LocaleConfig]> {
    Json(LocaleRegistry::get().list_all())
}

pub async fn list_articles(
    State(state): State<Arc<AppState>>,
    params: QueryParams,
) -> Result<Json<ArticleList>, ApiError> {
    let query = ArticleListQuery::try_from(&params)?;
    let locale = state.resolve_locale(query.lang.as_deref());
    let catalog: &'static Catalog = state.catalog;

    let candidates: Vec<&'static Article> = match query.q.as_deref() {
        Some(q) => catalog.search(q, locale),
        None => catalog.all().iter().collect(),
    };

    let articles: Vec<ArticleSummaryView<'static>> = candidates
        .into_iter()
        .filter(|a| query.category.map_or(true, |c| a.category == c))
        .filter(|a| query.tag.as_deref().map_or(true, |t| a.has_tag(t)))
        .filter(|a| query.featured.map_or(true, |f| a.is_featured() == f))
        .map(|a| ArticleSummaryView::new(a, locale))
        .collect();

    Ok(Json(ArticleList {
        locale,
        count: articles.len(),
        articles,
    }))
}

pub async fn get_article(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    query: QueryParams,
) -> Result<Json<ArticleView<'static>>, ApiError> {
    let locale = state.resolve_locale(query.get("lang"));
    let catalog: &'static Catalog = state.catalog;
    let article = catalog
        .find(&id)
        .ok_or_else(|| ApiError::NotFound("Article not found".to_string()))?;
    Ok(Json(ArticleView::new(article, locale)))
}

pub async fn get_terms(
    State(state): State<Arc<AppState>>,
    query: QueryParams,
) -> Json<&'static TermsDocument> {
    let locale = state.resolve_locale(query.get("lang"));
    Json(TermsDocument::for_locale(locale))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> QueryParams {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<Vec<_>>()
            .into()
    }

    #[test]
    fn test_list_query_parses_filters() {
        let query = ArticleListQuery::try_from(&params(&[
            ("lang", "ja"),
            ("category", "Conditions"),
            ("featured", "false"),
            ("tag", "ocd"),
        ]))
        .unwrap();
        assert_eq!(query.lang.as_deref(), Some("ja"));
        assert_eq!(query.category, Some(Category::Conditions));
        assert_eq!(query.featured, Some(false));
        assert_eq!(query.tag.as_deref(), Some("ocd"));
        assert_eq!(query.q, None);
    }

    #[test]
    fn test_list_query_rejects_bad_values() {
        let err = ArticleListQuery::try_from(&params(&[("category", "therapy")])).unwrap_err();
        assert_eq!(err.to_string(), "Invalid category");

        let err = ArticleListQuery::try_from(&params(&[("featured", "maybe")])).unwrap_err();
        assert_eq!(err.to_string(), "Invalid featured value");
    }

    #[test]
    fn test_list_query_repeated_key_keeps_first() {
        let query =
            ArticleListQuery::try_from(&params(&[("category", "workplace"), ("category", "nope")]))
                .unwrap();
        assert_eq!(query.category, Some(Category::Workplace));
    }
}
