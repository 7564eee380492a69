//! The process-wide article catalog.
//!
//! Built once on first access from the compiled-in data and immutable for
//! the life of the process.

use crate::content::articles::default_articles;
use crate::content::model::{Article, Category};
use crate::content::validator::{CatalogValidator, ValidationReport};
use crate::i18n::Locale;
use std::sync::OnceLock;

pub struct Catalog {
    articles: Vec<Article>,
}

static CATALOG: OnceLock<Catalog> = OnceLock::new();

impl Catalog {
    /// Get the global catalog instance.
    pub fn get() -> &'static Catalog {
        CATALOG.get_or_init(|| Catalog::new(default_articles()))
    }

    /// Build a catalog from an explicit article list.
    pub fn new(articles: Vec<Article>) -> Self {
        Self { articles }
    }

    pub fn all(&self) -> &[Article] {
        &self.articles
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    pub fn find(&self, id: &str) -> Option<&Article> {
        self.articles.iter().find(|article| article.id == id)
    }

    pub fn by_category(&self, category: Category) -> impl Iterator<Item = &Article> {
        self.articles
            .iter()
            .filter(move |article| article.category == category)
    }

    pub fn featured(&self) -> impl Iterator<Item = &Article> {
        self.articles.iter().filter(|article| article.is_featured())
    }

    pub fn by_tag<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a Article> {
        self.articles.iter().filter(move |article| article.has_tag(tag))
    }

    /// Case-insensitive substring search over title, summary and tags in
    /// one locale. A blank query matches nothing.
    pub fn search(&self, query: &str, locale: Locale) -> Vec<&Article> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }

        self.articles
            .iter()
            .filter(|article| {
                article.title.get(locale).to_lowercase().contains(&needle)
                    || article.summary.get(locale).to_lowercase().contains(&needle)
                    || article.tags.iter().any(|t| t.to_lowercase().contains(&needle))
            })
            .collect()
    }

    pub fn validate(&self) -> ValidationReport {
        CatalogValidator::validate(&self.articles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_has_no_errors() {
        let report = Catalog::get().validate();
        assert!(!report.has_errors(), "catalog errors: {:?}", report.errors);
    }

    #[test]
    fn test_builtin_catalog_covers_every_category() {
        let catalog = Catalog::get();
        for category in Category::ALL {
            assert!(
                catalog.by_category(category).next().is_some(),
                "no article in category {}",
                category
            );
        }
    }

    #[test]
    fn test_builtin_catalog_every_locale_has_content() {
        for article in Catalog::get().all() {
            for (locale, sections) in article.content.iter() {
                assert!(!sections.is_empty(), "{} missing {}", article.id, locale);
            }
        }
    }

    #[test]
    fn test_find() {
        let catalog = Catalog::get();
        assert_eq!(catalog.find("ptsd-overview").unwrap().category, Category::Conditions);
        assert!(catalog.find("does-not-exist").is_none());
    }

    #[test]
    fn test_featured_preserves_order() {
        let ids: Vec<_> = Catalog::get().featured().map(|a| a.id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "what-is-mental-health",
                "understanding-depression",
                "stress-management-techniques"
            ]
        );
    }

    #[test]
    fn test_by_tag_case_insensitive() {
        let ids: Vec<_> = Catalog::get().by_tag("ANXIETY").map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["anxiety-disorders", "ocd-overview"]);
    }

    #[test]
    fn test_search_by_localized_title() {
        let catalog = Catalog::get();
        let results = catalog.search("うつ病", Locale::Ja);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "understanding-depression");

        // The Korean title does not match a Japanese query
        assert!(catalog.search("うつ病", Locale::Ko).is_empty());
    }

    #[test]
    fn test_search_is_case_insensitive_and_matches_tags() {
        let results = Catalog::get().search("BURNOUT", Locale::En);
        assert_eq!(results[0].id, "workplace-burnout");
    }

    #[test]
    fn test_search_blank_query() {
        assert!(Catalog::get().search("   ", Locale::En).is_empty());
    }

    #[test]
    fn test_custom_catalog() {
        let catalog = Catalog::new(Vec::new());
        assert!(catalog.is_empty());
        assert!(catalog.validate().is_clean());
    }
}
