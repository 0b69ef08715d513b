//! Built-in catalog data, embedded at build time

use super::error::CatalogResult;
use super::store::Catalog;

/// The directory's own catalog, as shipped
pub const BUILTIN_CATALOG_JSON: &str = include_str!("../../data/catalog.json");

impl Catalog {
    /// Parse the embedded catalog
    pub fn builtin() -> CatalogResult<Self> {
        Self::from_json(BUILTIN_CATALOG_JSON)
    }
}
