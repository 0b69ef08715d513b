//! Directory page

use serde::Serialize;

use crate::catalog::Catalog;
use crate::i18n::Translations;
use crate::query::QueryState;
use crate::types::Tool;
use super::card::ToolCard;

/// Shown in place of the grid when nothing matches
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmptyState {
    pub title: String,
    pub description: String,
}

/// Listing page: header, result summary and cards
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryView {
    /// Display name of the selected category
    pub title: String,
    /// "Showing N tools"
    pub summary: String,
    pub result_count: usize,
    pub search_placeholder: String,
    /// Sidebar heading above the category navigation
    pub categories_heading: String,
    pub search_text: String,
    pub selected_category: String,
    pub cards: Vec<ToolCard>,
    pub empty: Option<EmptyState>,
}

impl DirectoryView {
    /// Build the page from an already filtered tool list
    pub fn build(catalog: &Catalog, query: &QueryState, visible: &[&Tool], t: &Translations) -> Self {
        let empty = visible.is_empty().then(|| EmptyState {
            title: t.no_tools_found.to_string(),
            description: t.no_tools_desc.to_string(),
        });

        Self {
            title: t.category_name(catalog, &query.selected_category),
            summary: t.results_summary(visible.len()),
            result_count: visible.len(),
            search_placeholder: t.search_placeholder.to_string(),
            categories_heading: t.categories.to_string(),
            search_text: query.search_text.clone(),
            selected_category: query.selected_category.clone(),
            cards: visible.iter().map(|tool| ToolCard::build(tool, t)).collect(),
            empty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::translations;
    use crate::query::visible_tools;
    use crate::types::{Category, Language, PricingTier};

    fn catalog() -> Catalog {
        Catalog::new(
            vec![
                Tool::new("a", "Scribe", "writing", PricingTier::Free).with_tags(["ai"]),
                Tool::new("b", "Paintly", "design", PricingTier::Paid).with_tags(["ai"]),
            ],
            vec![Category::new("design", "Design", "Image")],
        )
        .unwrap()
    }

    #[test]
    fn test_directory_view_all() {
        let catalog = catalog();
        let query = QueryState::default();
        let visible = visible_tools(&catalog, &query);
        let view = DirectoryView::build(&catalog, &query, &visible, translations(Language::En));

        assert_eq!(view.title, "All Tools");
        assert_eq!(view.categories_heading, "Categories");
        assert_eq!(view.summary, "Showing 2 tools");
        assert_eq!(view.cards.len(), 2);
        assert!(view.empty.is_none());
    }

    #[test]
    fn test_directory_view_category_without_override() {
        let catalog = catalog();
        let query = QueryState::with("", "design");
        let visible = visible_tools(&catalog, &query);
        let view = DirectoryView::build(&catalog, &query, &visible, translations(Language::En));

        assert_eq!(view.title, "Design");
        assert_eq!(view.cards[0].id, "b");
    }

    #[test]
    fn test_directory_view_empty_state() {
        let catalog = catalog();
        let query = QueryState::with("zzz", "all");
        let visible = visible_tools(&catalog, &query);
        let view = DirectoryView::build(&catalog, &query, &visible, translations(Language::Fr));

        assert_eq!(view.summary, "0 outils affichés");
        let empty = view.empty.unwrap();
        assert_eq!(empty.title, "Aucun outil trouvé");
    }

    #[test]
    fn test_categories_heading_follows_language() {
        let catalog = catalog();
        let query = QueryState::default();
        let visible = visible_tools(&catalog, &query);
        let english = DirectoryView::build(&catalog, &query, &visible, translations(Language::En));
        let german = DirectoryView::build(&catalog, &query, &visible, translations(Language::De));

        assert_eq!(german.categories_heading, translations(Language::De).categories);
        assert_ne!(german.categories_heading, english.categories_heading);
    }
}
