//! Filter engine
//!
//! A tool is visible when it passes both checks:
//! - category: the query selects `"all"`, or the tool's category equals the selection
//! - search: the lower-cased search text is empty, or a substring of the
//!   lower-cased name, short description, or any tag
//!
//! Matching is plain substring containment. There is no ranking; results keep
//! catalog order.

use crate::catalog::Catalog;
use crate::types::Tool;
use super::state::QueryState;

/// Precomputed predicate for one query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolFilter {
    /// Lower-cased search text (empty matches everything)
    needle: String,
    /// Required category, `None` for the `"all"` sentinel
    category: Option<String>,
}

impl ToolFilter {
    /// Build the predicate for a query
    pub fn from_query(query: &QueryState) -> Self {
        Self {
            needle: query.search_text.to_lowercase(),
            category: query.category_filter().map(str::to_string),
        }
    }

    /// Matches every tool
    pub fn all() -> Self {
        Self {
            needle: String::new(),
            category: None,
        }
    }

    /// Check if a tool matches this filter
    pub fn matches(&self, tool: &Tool) -> bool {
        self.matches_category(tool) && self.matches_search(tool)
    }

    fn matches_category(&self, tool: &Tool) -> bool {
        match self.category {
            Some(ref category) => tool.category == *category,
            None => true,
        }
    }

    fn matches_search(&self, tool: &Tool) -> bool {
        if self.needle.is_empty() {
            return true;
        }

        tool.name.to_lowercase().contains(&self.needle)
            || tool.short_description.to_lowercase().contains(&self.needle)
            || tool.tags.iter().any(|tag| tag.to_lowercase().contains(&self.needle))
    }

    /// Apply to a slice of tools, preserving order
    pub fn apply<'a>(&self, tools: &'a [Tool]) -> Vec<&'a Tool> {
        tools.iter().filter(|t| self.matches(t)).collect()
    }
}

/// Tools visible for a query, in catalog order
///
/// Pure: identical inputs always produce the identical sequence.
pub fn visible_tools<'a>(catalog: &'a Catalog, query: &QueryState) -> Vec<&'a Tool> {
    ToolFilter::from_query(query).apply(catalog.tools())
}

/// Memoizes the visible set on the `(search_text, selected_category)` pair
///
/// Stores catalog positions rather than references so it can live next to the
/// catalog it indexes. The memo is also keyed on the catalog it was computed
/// from, so passing a different catalog recomputes instead of reusing positions.
#[derive(Debug, Default)]
pub struct FilterCache {
    key: Option<(CatalogStamp, QueryState)>,
    visible: Vec<usize>,
    computations: usize,
}

/// Identity of the catalog a memoized result was computed from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CatalogStamp {
    addr: usize,
    len: usize,
}

impl CatalogStamp {
    fn of(catalog: &Catalog) -> Self {
        Self {
            addr: catalog.tools().as_ptr() as usize,
            len: catalog.len(),
        }
    }
}

impl FilterCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog positions of the visible tools, recomputed only when the query changed
    pub fn visible_indices(&mut self, catalog: &Catalog, query: &QueryState) -> &[usize] {
        let stamp = CatalogStamp::of(catalog);
        let fresh = matches!(self.key, Some((ref s, ref q)) if *s == stamp && q == query);
        if !fresh {
            let filter = ToolFilter::from_query(query);
            self.visible = catalog
                .tools()
                .iter()
                .enumerate()
                .filter(|(_, tool)| filter.matches(tool))
                .map(|(pos, _)| pos)
                .collect();
            self.key = Some((stamp, query.clone()));
            self.computations += 1;
        }
        &self.visible
    }

    /// Visible tools for the query
    pub fn visible<'a>(&mut self, catalog: &'a Catalog, query: &QueryState) -> Vec<&'a Tool> {
        let tools = catalog.tools();
        self.visible_indices(catalog, query)
            .iter()
            .filter_map(|&pos| tools.get(pos))
            .collect()
    }

    /// Number of visible tools for the query
    pub fn count(&mut self, catalog: &Catalog, query: &QueryState) -> usize {
        self.visible_indices(catalog, query).len()
    }

    /// Drop the memoized result
    pub fn invalidate(&mut self) {
        self.key = None;
        self.visible.clear();
    }

    /// How many times the visible set has been computed
    pub fn computations(&self) -> usize {
        self.computations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Category, PricingTier};
    use proptest::prelude::*;

    fn scenario_catalog() -> Catalog {
        Catalog::new(
            vec![
                Tool::new("A", "Scribe", "writing", PricingTier::Free)
                    .with_short_description("Drafts long-form articles")
                    .with_tags(["ai", "text"]),
                Tool::new("B", "Paintly", "design", PricingTier::Paid)
                    .with_short_description("Turns sketches into illustrations")
                    .with_tags(["ai", "image"]),
            ],
            vec![
                Category::new("writing", "Writing", "PenTool"),
                Category::new("design", "Design", "Image"),
            ],
        )
        .unwrap()
    }

    fn ids(tools: &[&Tool]) -> Vec<String> {
        tools.iter().map(|t| t.id.clone()).collect()
    }

    #[test]
    fn test_search_across_categories() {
        let catalog = scenario_catalog();
        let visible = visible_tools(&catalog, &QueryState::with("ai", "all"));
        assert_eq!(ids(&visible), vec!["A", "B"]);
    }

    #[test]
    fn test_category_only() {
        let catalog = scenario_catalog();
        let visible = visible_tools(&catalog, &QueryState::with("", "design"));
        assert_eq!(ids(&visible), vec!["B"]);
    }

    #[test]
    fn test_no_match() {
        let catalog = scenario_catalog();
        assert!(visible_tools(&catalog, &QueryState::with("zzz", "all")).is_empty());
    }

    #[test]
    fn test_identity_filter() {
        let catalog = scenario_catalog();
        let visible = visible_tools(&catalog, &QueryState::default());
        assert_eq!(visible.len(), catalog.len());
    }

    #[test]
    fn test_case_insensitive() {
        let catalog = scenario_catalog();
        assert_eq!(ids(&visible_tools(&catalog, &QueryState::with("PAINT", "all"))), vec!["B"]);
        assert_eq!(ids(&visible_tools(&catalog, &QueryState::with("Long-Form", "all"))), vec!["A"]);
        assert_eq!(ids(&visible_tools(&catalog, &QueryState::with("IMA", "all"))), vec!["B"]);
    }

    #[test]
    fn test_tag_substring_not_token() {
        let catalog = scenario_catalog();
        // "ext" is inside the tag "text" but not a whole tag
        assert_eq!(ids(&visible_tools(&catalog, &QueryState::with("ext", "all"))), vec!["A"]);
    }

    #[test]
    fn test_full_description_not_searched() {
        let catalog = Catalog::new(
            vec![Tool::new("x", "X", "writing", PricingTier::Free)
                .with_full_description("hidden keyword")],
            vec![],
        )
        .unwrap();
        assert!(visible_tools(&catalog, &QueryState::with("hidden", "all")).is_empty());
    }

    #[test]
    fn test_unknown_category_matches_nothing() {
        let catalog = scenario_catalog();
        assert!(visible_tools(&catalog, &QueryState::with("", "nonexistent")).is_empty());
        // The sentinel is case-sensitive
        assert!(visible_tools(&catalog, &QueryState::with("", "ALL")).is_empty());
    }

    #[test]
    fn test_search_and_category_combined() {
        let catalog = scenario_catalog();
        assert!(visible_tools(&catalog, &QueryState::with("paint", "writing")).is_empty());
        assert_eq!(ids(&visible_tools(&catalog, &QueryState::with("ai", "writing"))), vec!["A"]);
    }

    #[test]
    fn test_whitespace_is_not_trimmed() {
        let catalog = scenario_catalog();
        assert_eq!(visible_tools(&catalog, &QueryState::with(" ", "all")).len(), 2);
        assert!(visible_tools(&catalog, &QueryState::with("  scribe", "all")).is_empty());
    }

    #[test]
    fn test_filter_all() {
        let catalog = scenario_catalog();
        assert_eq!(ToolFilter::all().apply(catalog.tools()).len(), 2);
    }

    #[test]
    fn test_cache_memoizes_on_query_pair() {
        let catalog = scenario_catalog();
        let mut cache = FilterCache::new();
        let query = QueryState::with("ai", "all");

        assert_eq!(cache.count(&catalog, &query), 2);
        assert_eq!(cache.count(&catalog, &query.clone()), 2);
        assert_eq!(cache.computations(), 1);

        let narrowed = QueryState::with("ai", "design");
        assert_eq!(ids(&cache.visible(&catalog, &narrowed)), vec!["B"]);
        assert_eq!(cache.computations(), 2);

        cache.invalidate();
        cache.visible(&catalog, &narrowed);
        assert_eq!(cache.computations(), 3);
    }

    #[test]
    fn test_cache_recomputes_for_another_catalog() {
        let big = scenario_catalog();
        let small = Catalog::new(
            vec![Tool::new("C", "Clipper", "video", PricingTier::Freemium)],
            vec![],
        )
        .unwrap();
        let mut cache = FilterCache::new();
        let query = QueryState::default();

        assert_eq!(cache.count(&big, &query), 2);
        assert_eq!(ids(&cache.visible(&small, &query)), vec!["C"]);
        assert_eq!(cache.computations(), 2);

        assert_eq!(ids(&cache.visible(&big, &query)), vec!["A", "B"]);
        assert_eq!(cache.computations(), 3);
    }

    #[test]
    fn test_cache_agrees_with_pure_function() {
        let catalog = Catalog::builtin().unwrap();
        let mut cache = FilterCache::new();
        for (search, category) in [("", "all"), ("code", "all"), ("VIDEO", "video"), ("e", "audio"), ("x", "nope")] {
            let query = QueryState::with(search, category);
            assert_eq!(cache.visible(&catalog, &query), visible_tools(&catalog, &query));
        }
    }

    fn arb_tool() -> impl Strategy<Value = Tool> {
        (
            "[a-zA-Z ]{0,8}",
            "[a-zA-Z ]{0,12}",
            prop::sample::select(vec!["writing", "design", "video"]),
            prop::collection::vec("[a-zA-Z]{0,5}", 0..3),
        )
            .prop_map(|(name, short, category, tags)| {
                Tool::new("", name, category, PricingTier::Free)
                    .with_short_description(short)
                    .with_tags(tags)
            })
    }

    fn arb_catalog() -> impl Strategy<Value = Catalog> {
        prop::collection::vec(arb_tool(), 0..12).prop_map(|tools| {
            let tools = tools
                .into_iter()
                .enumerate()
                .map(|(pos, mut tool)| {
                    tool.id = format!("t{}", pos);
                    tool
                })
                .collect();
            Catalog::new(tools, vec![]).unwrap()
        })
    }

    fn arb_query() -> impl Strategy<Value = QueryState> {
        (
            "[a-zA-Z]{0,3}",
            prop::sample::select(vec!["all", "writing", "design", "video", "unknown"]),
        )
            .prop_map(|(search, category)| QueryState::with(search, category))
    }

    proptest! {
        #[test]
        fn prop_result_is_ordered_subsequence(catalog in arb_catalog(), query in arb_query()) {
            let visible = visible_tools(&catalog, &query);
            let positions: Vec<usize> = visible
                .iter()
                .map(|t| catalog.tools().iter().position(|c| c.id == t.id).unwrap())
                .collect();
            prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
        }

        #[test]
        fn prop_category_respected(catalog in arb_catalog(), query in arb_query()) {
            for tool in visible_tools(&catalog, &query) {
                prop_assert!(query.selected_category == "all" || tool.category == query.selected_category);
            }
        }

        #[test]
        fn prop_search_respected(catalog in arb_catalog(), query in arb_query()) {
            let needle = query.search_text.to_lowercase();
            for tool in visible_tools(&catalog, &query) {
                prop_assert!(
                    needle.is_empty()
                        || tool.name.to_lowercase().contains(&needle)
                        || tool.short_description.to_lowercase().contains(&needle)
                        || tool.tags.iter().any(|t| t.to_lowercase().contains(&needle))
                );
            }
        }

        #[test]
        fn prop_idempotent(catalog in arb_catalog(), query in arb_query()) {
            prop_assert_eq!(visible_tools(&catalog, &query), visible_tools(&catalog, &query));
        }

        #[test]
        fn prop_identity_query_returns_everything(catalog in arb_catalog()) {
            prop_assert_eq!(visible_tools(&catalog, &QueryState::default()).len(), catalog.len());
        }
    }
}
