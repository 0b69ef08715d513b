//! Category navigation and language menu entries

use serde::Serialize;

use crate::catalog::Catalog;
use crate::i18n::Translations;
use crate::icons::CategoryIcon;
use crate::types::Language;

/// A sidebar entry for one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryNavItem {
    pub id: String,
    pub label: String,
    pub icon: CategoryIcon,
    pub active: bool,
}

/// A language menu entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageOption {
    pub language: Language,
    pub code: &'static str,
    pub native_name: &'static str,
    pub flag: &'static str,
    pub active: bool,
}

/// One entry per catalog category, in catalog order
pub fn category_nav(catalog: &Catalog, selected: &str, t: &Translations) -> Vec<CategoryNavItem> {
    catalog
        .categories()
        .iter()
        .map(|category| CategoryNavItem {
            id: category.id.clone(),
            label: t.category_name(catalog, &category.id),
            icon: category.icon(),
            active: category.id == selected,
        })
        .collect()
}

/// All supported languages, marking the current one
pub fn language_options(current: Language) -> Vec<LanguageOption> {
    Language::ALL
        .iter()
        .map(|&language| LanguageOption {
            language,
            code: language.code(),
            native_name: language.native_name(),
            flag: language.flag(),
            active: language == current,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::translations;

    #[test]
    fn test_category_nav() {
        let catalog = Catalog::builtin().unwrap();
        let nav = category_nav(&catalog, "video", translations(Language::Vi));

        assert_eq!(nav.len(), catalog.categories().len());
        assert_eq!(nav[0].id, "all");
        assert_eq!(nav[0].label, "Tất cả công cụ");
        assert_eq!(nav[0].icon, CategoryIcon::LayoutGrid);

        let active: Vec<_> = nav.iter().filter(|item| item.active).map(|item| item.id.as_str()).collect();
        assert_eq!(active, vec!["video"]);
    }

    #[test]
    fn test_language_options() {
        let options = language_options(Language::Ko);
        assert_eq!(options.len(), 10);
        assert_eq!(options.iter().filter(|o| o.active).count(), 1);
        assert!(options.iter().any(|o| o.active && o.code == "ko"));
    }
}
