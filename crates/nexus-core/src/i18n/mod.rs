//! Localization table
//!
//! Static UI strings per [`Language`](crate::types::Language). Every language
//! carries a complete table; only category label overrides may be partial,
//! in which case the catalog's default category name is used.

mod table;
mod locales;

pub use table::{Translations, PricingLabels, translations, format_template};
