use crate::i18n::Localized;
use anyhow::{bail, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Article category tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Basics,
    Conditions,
    Management,
    Lifestyle,
    Relationships,
    Workplace,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Basics,
        Category::Conditions,
        Category::Management,
        Category::Lifestyle,
        Category::Relationships,
        Category::Workplace,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Basics => "basics",
            Category::Conditions => "conditions",
            Category::Management => "management",
            Category::Lifestyle => "lifestyle",
            Category::Relationships => "relationships",
            Category::Workplace => "workplace",
        }
    }
}

impl FromStr for Category {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_lowercase();
        match Category::ALL.iter().find(|c| c.as_str() == normalized) {
            Some(category) => Ok(*category),
            None => bail!("Unknown category: '{}'", s),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListType {
    Bullet,
    Numbered,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionList {
    #[serde(rename = "type")]
    pub kind: ListType,
    pub items: Vec<String>,
}

/// One block of an article body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paragraphs: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list: Option<SectionList>,
}

impl ArticleSection {
    /// A heading followed by paragraphs.
    pub fn text(heading: &str, paragraphs: &[&str]) -> Self {
        Self {
            heading: Some(heading.to_string()),
            paragraphs: Some(paragraphs.iter().map(|p| p.to_string()).collect()),
            list: None,
        }
    }

    /// A heading followed by a list.
    pub fn list(heading: &str, kind: ListType, items: &[&str]) -> Self {
        Self {
            heading: Some(heading.to_string()),
            paragraphs: None,
            list: Some(SectionList {
                kind,
                items: items.iter().map(|i| i.to_string()).collect(),
            }),
        }
    }

    /// True when the section would render as nothing.
    pub fn is_empty(&self) -> bool {
        let no_heading = self.heading.as_deref().map_or(true, |h| h.trim().is_empty());
        let no_paragraphs = self
            .paragraphs
            .as_ref()
            .map_or(true, |p| p.iter().all(|s| s.trim().is_empty()));
        let no_items = self.list.as_ref().map_or(true, |l| l.items.is_empty());
        no_heading && no_paragraphs && no_items
    }
}

/// Citation metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Source {
    pub name: String,
    pub organization: String,
    pub url: String,
    pub access_date: NaiveDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Affiliate {
    Coupang,
    Amazon,
    Iherb,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductCategory {
    Book,
    Tool,
    Supplement,
    Device,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendedProduct {
    pub title: Localized<String>,
    pub description: Localized<String>,
    pub price: f64,
    pub affiliate: Affiliate,
    pub link: String,
    pub image_url: String,
    pub category: ProductCategory,
}

/// A localized educational article.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: String,
    pub category: Category,
    pub title: Localized<String>,
    pub summary: Localized<String>,
    pub content: Localized<Vec<ArticleSection>>,
    pub read_time: u32,
    pub tags: Vec<String>,
    pub sources: Vec<Source>,
    pub last_updated: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommended_products: Option<Vec<RecommendedProduct>>,
}

impl Article {
    pub fn is_featured(&self) -> bool {
        self.featured.unwrap_or(false)
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag.trim()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parse() {
        assert_eq!("workplace".parse::<Category>().unwrap(), Category::Workplace);
        assert_eq!(" Basics ".parse::<Category>().unwrap(), Category::Basics);
        assert!("therapy".parse::<Category>().is_err());
    }

    #[test]
    fn test_category_serde_matches_as_str() {
        for category in Category::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.as_str()));
        }
    }

    #[test]
    fn test_section_list_serializes_type_field() {
        let section = ArticleSection::list("Steps", ListType::Numbered, &["one", "two"]);
        let json = serde_json::to_value(&section).unwrap();
        assert_eq!(json["list"]["type"], "numbered");
        assert_eq!(json["list"]["items"][1], "two");
        assert!(json.get("paragraphs").is_none());
    }

    #[test]
    fn test_section_is_empty() {
        assert!(ArticleSection::default().is_empty());
        assert!(!ArticleSection::text("Heading", &[]).is_empty());

        let blank = ArticleSection {
            heading: Some("  ".to_string()),
            paragraphs: Some(vec![String::new()]),
            list: None,
        };
        assert!(blank.is_empty());
    }

    #[test]
    fn test_source_camel_case() {
        let source = Source {
            name: "Depression".to_string(),
            organization: "WHO".to_string(),
            url: "https://www.who.int".to_string(),
            access_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        };
        let json = serde_json::to_value(&source).unwrap();
        assert_eq!(json["accessDate"], "2024-03-01");
    }
}
