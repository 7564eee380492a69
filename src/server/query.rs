//! Query-string extraction that never answers with axum's plain-text rejection.

use crate::server::error::ApiError;
use async_trait::async_trait;
use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;

pub const INVALID_QUERY: &str = "Invalid query string";

/// Raw query pairs in request order. Repeated keys resolve to their first value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// `true`/`false` flag; anything else is a 400 naming the key.
    pub fn flag(&self, key: &str) -> Result<Option<bool>, ApiError> {
        match self.get(key) {
            None => Ok(None),
            Some("true") => Ok(Some(true)),
            Some("false") => Ok(Some(false)),
            Some(_) => Err(ApiError::bad_request(format!("Invalid {} value", key))),
        }
    }
}

impl From<Vec<(String, String)>> for QueryParams {
    fn from(pairs: Vec<(String, String)>) -> Self {
        QueryParams(pairs)
    }
}

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for QueryParams {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Query(pairs) = Query::<Vec<(String, String)>>::try_from_uri(&parts.uri)
            .map_err(|_| ApiError::bad_request(INVALID_QUERY))?;
        Ok(QueryParams(pairs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    async fn extract(uri: &str) -> QueryParams {
        let (mut parts, _) = Request::builder().uri(uri).body(()).unwrap().into_parts();
        QueryParams::from_request_parts(&mut parts, &()).await.unwrap()
    }

    #[tokio::test]
    async fn test_first_value_wins() {
        let params = extract("/api/referral?userId=a&userId=b").await;
        assert_eq!(params.get("userId"), Some("a"));
        assert_eq!(params.get("missing"), None);
    }

    #[tokio::test]
    async fn test_percent_decoding() {
        let params = extract("/api/articles?q=sleep%20hygiene&lang=en").await;
        assert_eq!(params.get("q"), Some("sleep hygiene"));
    }

    #[tokio::test]
    async fn test_no_query_string() {
        assert_eq!(extract("/api/terms").await, QueryParams::default());
    }

    #[tokio::test]
    async fn test_flag() {
        let params = extract("/api/articles?featured=true&draft=false&hidden=maybe").await;
        assert_eq!(params.flag("featured").unwrap(), Some(true));
        assert_eq!(params.flag("draft").unwrap(), Some(false));
        assert_eq!(params.flag("other").unwrap(), None);
        assert_eq!(params.flag("hidden").unwrap_err().to_string(), "Invalid hidden value");
    }
}
