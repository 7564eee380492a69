//! Internationalization (i18n) module for multi-locale content.
//!
//! All locale-related logic is contained here. Content is published in a
//! fixed set of four locales, so the locale type is a closed enum and every
//! translated field is a [`Localized`] record with one slot per locale.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for locale metadata (names, default)
//! - `locale`: The `Locale` enum and code parsing
//! - `localized`: Fixed-key per-locale record used throughout the content model
//!
//! # Example
//!
//! ```rust,ignore
//! use mindwell::i18n::{Locale, LocaleRegistry, Localized};
//!
//! let japanese = Locale::from_code("ja")?;
//! let title = Localized::new("우울증", "Depression", "うつ病", "抑郁症");
//! assert_eq!(*title.get(japanese), "うつ病");
//!
//! let default = LocaleRegistry::get().default_locale();
//! ```

mod locale;
mod localized;
mod registry;

pub use locale::Locale;
pub use localized::Localized;
pub use registry::{LocaleConfig, LocaleRegistry};
