//! Educational article catalog.
//!
//! - `model`: Article records and their parts
//! - `catalog`: The immutable, process-wide catalog and its queries
//! - `validator`: Integrity checks run before the catalog is served
//! - `view`: Single-locale renderings for the HTTP layer

mod articles;
mod catalog;
pub mod model;
mod validator;
pub mod view;

pub use catalog::Catalog;
pub use model::{
    Affiliate, Article, ArticleSection, Category, ListType, ProductCategory, RecommendedProduct,
    SectionList, Source,
};
pub use validator::{CatalogValidator, ValidationReport};
pub use view::{ArticleSummaryView, ArticleView, ProductView};
