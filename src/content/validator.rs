//! Catalog integrity validation.
//!
//! Checks the invariants every article must hold before the catalog is
//! served: unique slug ids, a non-empty body in every locale, and
//! well-formed citations and product records.

use crate::content::model::Article;
use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

/// Validation report containing errors and warnings about the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Problems that make the catalog unfit to serve
    pub errors: Vec<String>,

    /// Gaps worth fixing that do not block serving
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if the report is clean (no errors or warnings)
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for article catalogs.
pub struct CatalogValidator;

static SLUG_REGEX: OnceLock<Regex> = OnceLock::new();
static URL_REGEX: OnceLock<Regex> = OnceLock::new();

impl CatalogValidator {
    /// Validate a full list of articles.
    pub fn validate(articles: &[Article]) -> ValidationReport {
        let mut report = ValidationReport::new();
        let mut seen = HashSet::new();

        for article in articles {
            if !seen.insert(article.id.as_str()) {
                report
                    .errors
                    .push(format!("Duplicate article id '{}'", article.id));
            }
            Self::validate_article(article, &mut report);
        }

        report
    }

    fn validate_article(article: &Article, report: &mut ValidationReport) {
        let id = article.id.as_str();

        if !Self::slug_regex().is_match(id) {
            report
                .errors
                .push(format!("Article id '{}' is not a lowercase slug", id));
        }

        if article.read_time == 0 {
            report.errors.push(format!("{}: read time must be positive", id));
        }

        for (locale, sections) in article.content.iter() {
            if sections.is_empty() {
                report
                    .errors
                    .push(format!("{}: no content for locale '{}'", id, locale));
                continue;
            }
            for (index, section) in sections.iter().enumerate() {
                if section.is_empty() {
                    report.errors.push(format!(
                        "{}: section {} in locale '{}' is empty",
                        id, index, locale
                    ));
                }
                if let Some(list) = &section.list {
                    if list.items.is_empty() {
                        report.errors.push(format!(
                            "{}: section {} in locale '{}' has a list with no items",
                            id, index, locale
                        ));
                    }
                }
            }
        }

        for (locale, title) in article.title.iter() {
            if title.trim().is_empty() {
                report
                    .errors
                    .push(format!("{}: empty title for locale '{}'", id, locale));
            }
        }

        for (locale, summary) in article.summary.iter() {
            if summary.trim().is_empty() {
                report
                    .warnings
                    .push(format!("{}: empty summary for locale '{}'", id, locale));
            }
        }

        if article.sources.is_empty() {
            report.warnings.push(format!("{}: no sources cited", id));
        }
        for source in &article.sources {
            if !Self::url_regex().is_match(&source.url) {
                report.errors.push(format!(
                    "{}: source '{}' has an invalid url '{}'",
                    id, source.name, source.url
                ));
            }
        }

        if article.tags.is_empty() {
            report.warnings.push(format!("{}: no tags", id));
        }

        for product in article.recommended_products.iter().flatten() {
            if !product.price.is_finite() || product.price < 0.0 {
                report.errors.push(format!(
                    "{}: product '{}' has an invalid price {}",
                    id, product.title.en, product.price
                ));
            }
        }
    }

    fn slug_regex() -> &'static Regex {
        SLUG_REGEX.get_or_init(|| Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").unwrap())
    }

    fn url_regex() -> &'static Regex {
        URL_REGEX.get_or_init(|| Regex::new(r"^https?://[^\s/$.?#][^\s]*$").unwrap())
    }
}
