//! Catalog record types

use serde::{Deserialize, Serialize};

use crate::icons::CategoryIcon;
use super::pricing::PricingTier;

/// A single directory entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tool {
    /// Unique identifier, also the `/tool/{id}` path parameter
    pub id: String,
    /// Display name
    pub name: String,
    /// One-line summary shown on cards
    pub short_description: String,
    /// Long-form description shown on the detail page
    pub full_description: String,
    /// Category id (may reference a category that does not exist)
    pub category: String,
    /// Pricing tier
    pub pricing: PricingTier,
    /// External website address
    pub website_url: String,
    /// Ordered feature list
    #[serde(default)]
    pub features: Vec<String>,
    /// Ids of alternative tools (may be empty or dangling)
    #[serde(default)]
    pub alternatives: Vec<String>,
    /// Tags, in authored order
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Tool {
    /// Create a tool with the required fields; lists start empty
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
        pricing: PricingTier,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            short_description: String::new(),
            full_description: String::new(),
            category: category.into(),
            pricing,
            website_url: String::new(),
            features: vec![],
            alternatives: vec![],
            tags: vec![],
        }
    }

    /// Set the short description
    pub fn with_short_description(mut self, text: impl Into<String>) -> Self {
        self.short_description = text.into();
        self
    }

    /// Set the full description
    pub fn with_full_description(mut self, text: impl Into<String>) -> Self {
        self.full_description = text.into();
        self
    }

    /// Set the website address
    pub fn with_website(mut self, url: impl Into<String>) -> Self {
        self.website_url = url.into();
        self
    }

    /// Set the features
    pub fn with_features<I, S>(mut self, features: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.features = features.into_iter().map(Into::into).collect();
        self
    }

    /// Set the alternative tool ids
    pub fn with_alternatives<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.alternatives = ids.into_iter().map(Into::into).collect();
        self
    }

    /// Set the tags
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// First tag, if any (cards only show one)
    pub fn primary_tag(&self) -> Option<&str> {
        self.tags.first().map(String::as_str)
    }
}

/// A grouping label for tools
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier
    pub id: String,
    /// Default (English) display name
    pub name: String,
    /// Symbolic icon name, e.g. `"Code"`
    #[serde(default)]
    pub icon: String,
}

impl Category {
    pub fn new(id: impl Into<String>, name: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            icon: icon.into(),
        }
    }

    /// Resolve the symbolic icon name; unknown names yield `CategoryIcon::None`
    pub fn icon(&self) -> CategoryIcon {
        CategoryIcon::resolve(&self.icon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_builder() {
        let tool = Tool::new("scribe", "Scribe", "writing", PricingTier::Free)
            .with_short_description("Writes things")
            .with_tags(["ai", "text"])
            .with_alternatives(["paintly"]);

        assert_eq!(tool.id, "scribe");
        assert_eq!(tool.primary_tag(), Some("ai"));
        assert_eq!(tool.alternatives, vec!["paintly".to_string()]);
        assert!(tool.features.is_empty());
    }

    #[test]
    fn test_tool_deserialize_camel_case() {
        let json = r#"{
            "id": "scribe",
            "name": "Scribe",
            "shortDescription": "Short",
            "fullDescription": "Full",
            "category": "writing",
            "pricing": "Open Source",
            "websiteUrl": "https://example.com",
            "tags": ["ai"]
        }"#;

        let tool: Tool = serde_json::from_str(json).unwrap();
        assert_eq!(tool.short_description, "Short");
        assert_eq!(tool.pricing, PricingTier::OpenSource);
        assert!(tool.alternatives.is_empty());
        assert!(tool.features.is_empty());
    }

    #[test]
    fn test_category_icon_resolution() {
        let known = Category::new("coding", "Coding", "Code");
        assert_eq!(known.icon(), CategoryIcon::Code);

        let unknown = Category::new("misc", "Misc", "NoSuchIcon");
        assert_eq!(unknown.icon(), CategoryIcon::None);
    }
}
