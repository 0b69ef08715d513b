//! Catalog store
//!
//! The catalog is the static, immutable set of tools and categories the
//! directory lists. It is built once (normally from the embedded data file)
//! and shared read-only, typically behind an `Arc`.

mod error;
mod store;
mod builtin;

pub use error::{CatalogError, CatalogResult};
pub use store::{Catalog, CatalogFile};
pub use builtin::BUILTIN_CATALOG_JSON;
