//! Single-locale renderings of catalog records, as served over HTTP.

use crate::content::model::{
    Affiliate, Article, ArticleSection, Category, ProductCategory, RecommendedProduct, Source,
};
use crate::i18n::Locale;
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductView<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub price: f64,
    pub affiliate: Affiliate,
    pub link: &'a str,
    pub image_url: &'a str,
    pub category: ProductCategory,
}

impl<'a> ProductView<'a> {
    pub fn new(product: &'a RecommendedProduct, locale: Locale) -> Self {
        Self {
            title: product.title.get(locale),
            description: product.description.get(locale),
            price: product.price,
            affiliate: product.affiliate,
            link: &product.link,
            image_url: &product.image_url,
            category: product.category,
        }
    }
}

/// Listing entry: everything but the body.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleSummaryView<'a> {
    pub id: &'a str,
    pub locale: Locale,
    pub category: Category,
    pub title: &'a str,
    pub summary: &'a str,
    pub read_time: u32,
    pub tags: &'a [String],
    pub last_updated: NaiveDate,
    pub featured: bool,
}

impl<'a> ArticleSummaryView<'a> {
    pub fn new(article: &'a Article, locale: Locale) -> Self {
        Self {
            id: &article.id,
            locale,
            category: article.category,
            title: article.title.get(locale),
            summary: article.summary.get(locale),
            read_time: article.read_time,
            tags: &article.tags,
            last_updated: article.last_updated,
            featured: article.is_featured(),
        }
    }
}

/// A full article rendered for one locale.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleView<'a> {
    #[serde(flatten)]
    pub summary: ArticleSummaryView<'a>,
    pub sections: &'a [ArticleSection],
    pub sources: &'a [Source],
    pub recommended_products: Vec<ProductView<'a>>,
}

impl<'a> ArticleView<'a> {
    pub fn new(article: &'a Article, locale: Locale) -> Self {
        Self {
            summary: ArticleSummaryView::new(article, locale),
            sections: article.content.get(locale),
            sources: &article.sources,
            recommended_products: article
                .recommended_products
                .iter()
                .flatten()
                .map(|product| ProductView::new(product, locale))
                .collect(),
        }
    }
}
