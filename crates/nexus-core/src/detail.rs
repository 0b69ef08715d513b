//! Detail resolver
//!
//! Resolves the `/tool/{id}` path parameter to a tool and its alternatives.
//! A miss is a `CatalogError::ToolNotFound` value for the view layer to render
//! as a placeholder, never a panic.

use crate::catalog::{Catalog, CatalogError, CatalogResult};
use crate::debug_log;
use crate::types::Tool;

/// A resolved tool together with its resolvable alternatives
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolDetail<'a> {
    pub tool: &'a Tool,
    pub alternatives: Vec<&'a Tool>,
}

/// Exact-match lookup by id
pub fn resolve_tool<'a>(catalog: &'a Catalog, id: &str) -> CatalogResult<&'a Tool> {
    catalog
        .get(id)
        .ok_or_else(|| CatalogError::ToolNotFound(id.to_string()))
}

/// Alternatives of `tool` that exist in the catalog, in listed order
///
/// Ids that do not resolve are skipped. Duplicates listed in
/// `tool.alternatives` are kept as listed.
pub fn resolve_alternatives<'a>(catalog: &'a Catalog, tool: &Tool) -> Vec<&'a Tool> {
    tool.alternatives
        .iter()
        .filter_map(|id| match resolve_tool(catalog, id) {
            Ok(alt) => Some(alt),
            Err(_) => {
                debug_log!("Skipping unknown alternative '{}' of '{}'", id, tool.id);
                None
            }
        })
        .collect()
}

/// Resolve a tool and its alternatives in one step
pub fn resolve_detail<'a>(catalog: &'a Catalog, id: &str) -> CatalogResult<ToolDetail<'a>> {
    let tool = resolve_tool(catalog, id)?;
    Ok(ToolDetail {
        tool,
        alternatives: resolve_alternatives(catalog, tool),
    })
}
