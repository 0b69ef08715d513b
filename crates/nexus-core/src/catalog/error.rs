//! Catalog error types

use thiserror::Error;

/// Errors that can occur while building or querying a catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    /// No tool with this id (detail lookups)
    #[error("Tool not found: {0}")]
    ToolNotFound(String),

    /// Two tools share an id
    #[error("Duplicate tool id: {0}")]
    DuplicateTool(String),

    /// Two categories share an id
    #[error("Duplicate category id: {0}")]
    DuplicateCategory(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl CatalogError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, CatalogError::ToolNotFound(_))
    }
}

pub type CatalogResult<T> = Result<T, CatalogError>;
