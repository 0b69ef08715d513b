//! Catalog storage and lookup

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::types::{Category, Tool};
use crate::{debug_log, info_log, warn_log};
use super::error::{CatalogError, CatalogResult};

/// Serialized catalog layout
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogFile {
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub tools: Vec<Tool>,
}

/// Immutable collection of tools and categories
///
/// Insertion order is the display order; nothing in the crate reorders it.
/// Dangling references (a tool's category or alternatives naming records that
/// do not exist) are accepted and only reported to the debug log.
///
/// # Example
///
/// ```
/// use nexus_core::catalog::Catalog;
/// use nexus_core::types::{Category, PricingTier, Tool};
///
/// let catalog = Catalog::new(
///     vec![Tool::new("scribe", "Scribe", "writing", PricingTier::Free)],
///     vec![Category::new("writing", "Writing", "PenTool")],
/// ).unwrap();
///
/// assert!(catalog.get("scribe").is_some());
/// ```
#[derive(Debug, Clone)]
pub struct Catalog {
    tools: Vec<Tool>,
    categories: Vec<Category>,
    tool_index: HashMap<String, usize>,
    category_index: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids
    pub fn new(tools: Vec<Tool>, categories: Vec<Category>) -> CatalogResult<Self> {
        let mut tool_index = HashMap::with_capacity(tools.len());
        for (pos, tool) in tools.iter().enumerate() {
            if tool_index.insert(tool.id.clone(), pos).is_some() {
                return Err(CatalogError::DuplicateTool(tool.id.clone()));
            }
        }

        let mut category_index = HashMap::with_capacity(categories.len());
        for (pos, category) in categories.iter().enumerate() {
            if category_index.insert(category.id.clone(), pos).is_some() {
                return Err(CatalogError::DuplicateCategory(category.id.clone()));
            }
        }

        let catalog = Self {
            tools,
            categories,
            tool_index,
            category_index,
        };
        catalog.report_dangling();

        info_log!(
            "Loaded catalog: {} tools, {} categories",
            catalog.tools.len(),
            catalog.categories.len()
        );
        Ok(catalog)
    }

    /// An empty catalog
    pub fn empty() -> Self {
        Self {
            tools: vec![],
            categories: vec![],
            tool_index: HashMap::new(),
            category_index: HashMap::new(),
        }
    }

    /// Parse a catalog from JSON (`{"categories": [...], "tools": [...]}`)
    pub fn from_json(json: &str) -> CatalogResult<Self> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Self::from_file(file)
    }

    /// Parse a catalog from YAML with the same layout as the JSON form
    pub fn from_yaml(yaml: &str) -> CatalogResult<Self> {
        let file: CatalogFile = serde_yaml::from_str(yaml)?;
        Self::from_file(file)
    }

    pub fn from_file(file: CatalogFile) -> CatalogResult<Self> {
        Self::new(file.tools, file.categories)
    }

    /// All tools, in catalog order
    pub fn tools(&self) -> &[Tool] {
        &self.tools
    }

    /// All categories, in catalog order
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Exact-id tool lookup
    pub fn get(&self, id: &str) -> Option<&Tool> {
        self.tool_index.get(id).map(|&pos| &self.tools[pos])
    }

    /// Exact-id category lookup
    pub fn category(&self, id: &str) -> Option<&Category> {
        self.category_index.get(id).map(|&pos| &self.categories[pos])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.tool_index.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Tools whose category id names no category, as `(tool id, category id)`
    pub fn dangling_categories(&self) -> Vec<(&str, &str)> {
        self.tools
            .iter()
            .filter(|t| !self.category_index.contains_key(&t.category))
            .map(|t| (t.id.as_str(), t.category.as_str()))
            .collect()
    }

    /// Alternative ids that name no tool, as `(tool id, alternative id)`
    pub fn dangling_alternatives(&self) -> Vec<(&str, &str)> {
        self.tools
            .iter()
            .flat_map(|t| {
                t.alternatives
                    .iter()
                    .filter(|alt| !self.tool_index.contains_key(alt.as_str()))
                    .map(move |alt| (t.id.as_str(), alt.as_str()))
            })
            .collect()
    }

    fn report_dangling(&self) {
        for (tool, category) in self.dangling_categories() {
            warn_log!("Tool '{}' references unknown category '{}'", tool, category);
        }
        for (tool, alt) in self.dangling_alternatives() {
            debug_log!("Tool '{}' lists unknown alternative '{}'", tool, alt);
        }
        for category in self.categories.iter().filter(|c| c.icon().is_none()) {
            debug_log!("Category '{}' has unresolved icon '{}'", category.id, category.icon);
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PricingTier;

    fn sample_tools() -> Vec<Tool> {
        vec![
            Tool::new("a", "Scribe", "writing", PricingTier::Free),
            Tool::new("b", "Paintly", "design", PricingTier::Paid),
        ]
    }

    #[test]
    fn test_lookup_preserves_order() {
        let catalog = Catalog::new(sample_tools(), vec![]).unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.tools()[0].id, "a");
        assert_eq!(catalog.tools()[1].id, "b");
        assert_eq!(catalog.get("b").map(|t| t.name.as_str()), Some("Paintly"));
        assert!(catalog.get("B").is_none());
        assert!(catalog.contains("a"));
    }

    #[test]
    fn test_duplicate_tool_rejected() {
        let mut tools = sample_tools();
        tools.push(Tool::new("a", "Again", "writing", PricingTier::Free));

        assert!(matches!(
            Catalog::new(tools, vec![]),
            Err(CatalogError::DuplicateTool(id)) if id == "a"
        ));
    }

    #[test]
    fn test_duplicate_category_rejected() {
        let categories = vec![
            Category::new("writing", "Writing", "PenTool"),
            Category::new("writing", "Copy", "PenTool"),
        ];

        assert!(matches!(
            Catalog::new(vec![], categories),
            Err(CatalogError::DuplicateCategory(_))
        ));
    }

    #[test]
    fn test_dangling_references_tolerated() {
        let tools = vec![
            Tool::new("x", "X", "nowhere", PricingTier::Free).with_alternatives(["y", "ghost"]),
            Tool::new("y", "Y", "writing", PricingTier::Free),
        ];
        let categories = vec![Category::new("writing", "Writing", "PenTool")];

        let catalog = Catalog::new(tools, categories).unwrap();
        assert_eq!(catalog.dangling_categories(), vec![("x", "nowhere")]);
        assert_eq!(catalog.dangling_alternatives(), vec![("x", "ghost")]);
    }

    #[test]
    fn test_from_json_and_yaml() {
        let json = r#"{
            "categories": [{"id": "writing", "name": "Writing", "icon": "PenTool"}],
            "tools": [{
                "id": "scribe", "name": "Scribe",
                "shortDescription": "s", "fullDescription": "f",
                "category": "writing", "pricing": "Free",
                "websiteUrl": "https://example.com"
            }]
        }"#;
        let catalog = Catalog::from_json(json).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.category("writing").map(|c| c.name.as_str()), Some("Writing"));

        let yaml = "
categories:
  - id: writing
    name: Writing
    icon: PenTool
tools:
  - id: scribe
    name: Scribe
    shortDescription: s
    fullDescription: f
    category: writing
    pricing: Waitlist
    websiteUrl: https://example.com
";
        let catalog = Catalog::from_yaml(yaml).unwrap();
        assert_eq!(catalog.get("scribe").map(|t| t.pricing), Some(PricingTier::Waitlist));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(Catalog::from_json("{"), Err(CatalogError::Json(_))));
    }

    #[test]
    fn test_empty() {
        let catalog = Catalog::default();
        assert!(catalog.is_empty());
        assert!(catalog.get("anything").is_none());
    }
}
