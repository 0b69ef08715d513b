//! The directory shell state
//!
//! [`Directory`] ties the pieces together: it owns the catalog, the session
//! query, the settings controller, and the filter cache, and derives every
//! view the shell renders. It is the only writer of query and settings state.

use std::sync::Arc;

use serde::Serialize;

use crate::catalog::{Catalog, CatalogResult};
use crate::i18n::{translations, Translations};
use crate::logging::SharedLogger;
use crate::query::{FilterCache, QueryState};
use crate::route::Route;
use crate::settings::{Settings, SettingsController, SettingsResult, SettingsStore};
use crate::types::{Language, Theme, Tool};
use crate::view::{
    category_nav, language_options, CategoryNavItem, DetailView, DirectoryView, LanguageOption,
};
use crate::{log_debug, log_info};

/// The page for an address
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "page", content = "view", rename_all = "camelCase")]
pub enum Page {
    Directory(DirectoryView),
    Tool(DetailView),
}

/// Directory session: catalog, query, settings and derived views
pub struct Directory {
    catalog: Arc<Catalog>,
    query: QueryState,
    settings: SettingsController,
    cache: FilterCache,
    logger: SharedLogger,
}

impl Directory {
    pub fn new(catalog: Arc<Catalog>, settings: SettingsController, logger: SharedLogger) -> Self {
        Self {
            catalog,
            query: QueryState::default(),
            settings,
            cache: FilterCache::new(),
            logger,
        }
    }

    /// Open the built-in catalog with settings resolved from `store`
    pub fn open(store: Arc<dyn SettingsStore>, prefers_dark: bool, logger: SharedLogger) -> CatalogResult<Self> {
        let catalog = Arc::new(Catalog::builtin()?);
        let settings = SettingsController::load(store, prefers_dark, logger.clone());
        Ok(Self::new(catalog, settings, logger))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Shared handle to the catalog
    pub fn catalog_handle(&self) -> Arc<Catalog> {
        Arc::clone(&self.catalog)
    }

    pub fn query(&self) -> &QueryState {
        &self.query
    }

    pub fn settings(&self) -> Settings {
        self.settings.settings()
    }

    pub fn theme(&self) -> Theme {
        self.settings.theme()
    }

    pub fn language(&self) -> Language {
        self.settings.language()
    }

    /// Name of the settings backend
    pub fn store_name(&self) -> &str {
        self.settings.store_name()
    }

    /// String table for the active language
    pub fn translations(&self) -> &'static Translations {
        translations(self.settings.language())
    }

    // Query

    /// Replace the search text; returns whether it changed
    pub fn set_search_text(&mut self, text: impl Into<String>) -> bool {
        let changed = self.query.set_search_text(text);
        if changed {
            log_debug!(self.logger, "[Directory] Search text: '{}'", self.query.search_text);
        }
        changed
    }

    /// Replace the category selection; returns whether it changed
    pub fn set_selected_category(&mut self, id: impl Into<String>) -> bool {
        let changed = self.query.set_selected_category(id);
        if changed {
            log_debug!(self.logger, "[Directory] Category: '{}'", self.query.selected_category);
        }
        changed
    }

    pub fn reset_query(&mut self) {
        self.query.reset();
    }

    /// Tools visible for the current query, in catalog order
    pub fn visible_tools(&mut self) -> Vec<&Tool> {
        self.cache.visible(&self.catalog, &self.query)
    }

    pub fn visible_count(&mut self) -> usize {
        self.cache.count(&self.catalog, &self.query)
    }

    /// Times the visible set was actually recomputed
    pub fn filter_computations(&self) -> usize {
        self.cache.computations()
    }

    // Settings

    pub fn set_theme(&mut self, theme: Theme) -> SettingsResult<()> {
        let result = self.settings.set_theme(theme);
        self.log_settings_change(&result);
        result
    }

    pub fn set_theme_value(&mut self, value: &str) -> SettingsResult<Theme> {
        let result = self.settings.set_theme_value(value);
        self.log_settings_change(&result);
        result
    }

    pub fn toggle_theme(&mut self) -> SettingsResult<Theme> {
        let result = self.settings.toggle_theme();
        self.log_settings_change(&result);
        result
    }

    pub fn set_language(&mut self, language: Language) -> SettingsResult<()> {
        let result = self.settings.set_language(language);
        self.log_settings_change(&result);
        result
    }

    /// Switch language by locale code; unsupported codes are rejected
    pub fn set_language_code(&mut self, code: &str) -> SettingsResult<Language> {
        let result = self.settings.set_language_code(code);
        self.log_settings_change(&result);
        result
    }

    /// Rejected input changed nothing, so only applied values are logged
    fn log_settings_change<T>(&self, result: &SettingsResult<T>) {
        if matches!(result, Err(err) if err.is_rejection()) {
            return;
        }
        log_info!(
            self.logger,
            "[Directory] Settings: theme={} language={}",
            self.settings.theme(),
            self.settings.language()
        );
    }

    // Views

    pub fn directory_view(&mut self) -> DirectoryView {
        let t = self.translations();
        let visible = self.cache.visible(&self.catalog, &self.query);
        DirectoryView::build(&self.catalog, &self.query, &visible, t)
    }

    /// Detail page for a tool id
    pub fn detail_view(&self, id: &str) -> DetailView {
        DetailView::build(&self.catalog, id, self.translations())
    }

    /// Map an address to a route; unknown addresses go to the directory
    pub fn resolve_route(&self, address: &str) -> Route {
        Route::resolve(address)
    }

    /// Render whichever page an address resolves to
    pub fn page(&mut self, address: &str) -> Page {
        match self.resolve_route(address) {
            Route::Directory => Page::Directory(self.directory_view()),
            Route::Tool(id) => Page::Tool(self.detail_view(&id)),
        }
    }

    pub fn category_nav(&self) -> Vec<CategoryNavItem> {
        category_nav(&self.catalog, &self.query.selected_category, self.translations())
    }

    pub fn language_options(&self) -> Vec<LanguageOption> {
        language_options(self.settings.language())
    }
}

impl std::fmt::Debug for Directory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Directory")
            .field("tools", &self.catalog.len())
            .field("query", &self.query)
            .field("settings", &self.settings)
            .finish()
    }
}
