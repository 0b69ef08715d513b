//! Query state

use serde::{Deserialize, Serialize};

/// Reserved category value meaning "no category filter"
pub const ALL_CATEGORIES: &str = "all";

/// Current search text and category selection
///
/// Lives for the session only and is never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryState {
    pub search_text: String,
    pub selected_category: String,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            search_text: String::new(),
            selected_category: ALL_CATEGORIES.to_string(),
        }
    }
}

impl QueryState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Query with both fields set
    pub fn with(search_text: impl Into<String>, selected_category: impl Into<String>) -> Self {
        Self {
            search_text: search_text.into(),
            selected_category: selected_category.into(),
        }
    }

    /// Replace the search text; returns whether it changed
    pub fn set_search_text(&mut self, text: impl Into<String>) -> bool {
        let text = text.into();
        if self.search_text == text {
            return false;
        }
        self.search_text = text;
        true
    }

    /// Replace the selected category; any string is accepted.
    /// Returns whether it changed.
    pub fn set_selected_category(&mut self, id: impl Into<String>) -> bool {
        let id = id.into();
        if self.selected_category == id {
            return false;
        }
        self.selected_category = id;
        true
    }

    /// The category restriction, or `None` for the `"all"` sentinel
    pub fn category_filter(&self) -> Option<&str> {
        if self.selected_category == ALL_CATEGORIES {
            None
        } else {
            Some(&self.selected_category)
        }
    }

    /// No search text and no category restriction
    pub fn is_unfiltered(&self) -> bool {
        self.search_text.is_empty() && self.category_filter().is_none()
    }

    /// Back to the initial state
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
