//! Node.js bindings for the Nexus directory core via napi-rs

#![deny(clippy::all)]

use napi::bindgen_prelude::*;
use napi_derive::napi;
use std::sync::Arc;

use nexus_core::app::Directory as CoreDirectory;
use nexus_core::logging::{ConsoleLogger, NoOpLogger, SharedLogger};
use nexus_core::route::Route as CoreRoute;
use nexus_core::settings::{
    FileSettingsStore as CoreFileSettingsStore,
    SettingsResult as CoreSettingsResult,
    SettingsStore as CoreSettingsStore,
    create_settings_store as core_create_settings_store,
    list_settings_stores as core_list_settings_stores,
};
use nexus_core::types::{
    PricingTier as CorePricingTier,
    Theme as CoreTheme,
    Tool as CoreTool,
};
use nexus_core::view::{
    CategoryNavItem as CoreCategoryNavItem,
    DetailView as CoreDetailView,
    DirectoryView as CoreDirectoryView,
    LanguageOption as CoreLanguageOption,
    ToolCard as CoreToolCard,
    ToolPage as CoreToolPage,
};

// ============================================================================
// Catalog Types
// ============================================================================

#[napi(string_enum)]
pub enum PricingTier {
    Free,
    Freemium,
    Paid,
    Waitlist,
    OpenSource,
}

impl From<CorePricingTier> for PricingTier {
    fn from(tier: CorePricingTier) -> Self {
        match tier {
            CorePricingTier::Free => PricingTier::Free,
            CorePricingTier::Freemium => PricingTier::Freemium,
            CorePricingTier::Paid => PricingTier::Paid,
            CorePricingTier::Waitlist => PricingTier::Waitlist,
            CorePricingTier::OpenSource => PricingTier::OpenSource,
        }
    }
}

#[napi(object)]
pub struct ToolInfo {
    pub id: String,
    pub name: String,
    pub short_description: String,
    pub full_description: String,
    pub category: String,
    pub pricing: PricingTier,
    pub website_url: String,
    pub features: Vec<String>,
    pub alternatives: Vec<String>,
    pub tags: Vec<String>,
}

impl From<&CoreTool> for ToolInfo {
    fn from(tool: &CoreTool) -> Self {
        Self {
            id: tool.id.clone(),
            name: tool.name.clone(),
            short_description: tool.short_description.clone(),
            full_description: tool.full_description.clone(),
            category: tool.category.clone(),
            pricing: tool.pricing.into(),
            website_url: tool.website_url.clone(),
            features: tool.features.clone(),
            alternatives: tool.alternatives.clone(),
            tags: tool.tags.clone(),
        }
    }
}

// ============================================================================
// View Types
// ============================================================================

#[napi(object)]
pub struct ToolCard {
    pub id: String,
    pub name: String,
    pub monogram: String,
    pub short_description: String,
    pub pricing: PricingTier,
    /// Localized pricing label
    pub pricing_label: String,
    /// Badge color: green, blue, red, yellow or purple
    pub badge_tone: String,
    pub primary_tag: Option<String>,
    pub from_hue: u32,
    pub to_hue: u32,
    /// CSS `linear-gradient(...)` for the logo placeholder
    pub gradient: String,
    pub path: String,
}

impl From<CoreToolCard> for ToolCard {
    fn from(card: CoreToolCard) -> Self {
        Self {
            gradient: card.gradient.css(),
            from_hue: card.gradient.from_hue as u32,
            to_hue: card.gradient.to_hue as u32,
            id: card.id,
            name: card.name,
            monogram: card.monogram,
            short_description: card.short_description,
            pricing: card.pricing.into(),
            pricing_label: card.pricing_label,
            badge_tone: card.badge_tone.as_str().to_string(),
            primary_tag: card.primary_tag,
            path: card.path,
        }
    }
}

#[napi(object)]
pub struct DirectoryView {
    pub title: String,
    pub summary: String,
    pub result_count: u32,
    pub search_placeholder: String,
    pub categories_heading: String,
    pub search_text: String,
    pub selected_category: String,
    pub cards: Vec<ToolCard>,
    /// Set only when no tool matches
    pub empty_title: Option<String>,
    pub empty_description: Option<String>,
}

impl From<CoreDirectoryView> for DirectoryView {
    fn from(view: CoreDirectoryView) -> Self {
        let (empty_title, empty_description) = match view.empty {
            Some(empty) => (Some(empty.title), Some(empty.description)),
            None => (None, None),
        };
        Self {
            title: view.title,
            summary: view.summary,
            result_count: view.result_count as u32,
            search_placeholder: view.search_placeholder,
            categories_heading: view.categories_heading,
            search_text: view.search_text,
            selected_category: view.selected_category,
            cards: view.cards.into_iter().map(Into::into).collect(),
            empty_title,
            empty_description,
        }
    }
}

#[napi(object)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

#[napi(object)]
pub struct ToolPage {
    pub id: String,
    pub name: String,
    pub monogram: String,
    pub full_description: String,
    pub category_label: String,
    pub pricing_label: String,
    pub badge_tone: String,
    pub website_url: String,
    pub visit_label: String,
    pub share_label: String,
    pub features_heading: String,
    pub features: Vec<String>,
    pub faq_heading: String,
    pub faq: Vec<FaqEntry>,
    pub tags_heading: String,
    pub tags: Vec<String>,
    pub alternatives_heading: String,
    pub alternatives: Vec<ToolCard>,
}

impl From<CoreToolPage> for ToolPage {
    fn from(page: CoreToolPage) -> Self {
        Self {
            id: page.id,
            name: page.name,
            monogram: page.monogram,
            full_description: page.full_description,
            category_label: page.category_label,
            pricing_label: page.pricing_label,
            badge_tone: page.badge_tone.as_str().to_string(),
            website_url: page.website_url,
            visit_label: page.visit_label,
            share_label: page.share_label,
            features_heading: page.features_heading,
            features: page.features,
            faq_heading: page.faq_heading,
            faq: page
                .faq
                .into_iter()
                .map(|entry| FaqEntry { question: entry.question, answer: entry.answer })
                .collect(),
            tags_heading: page.tags_heading,
            tags: page.tags,
            alternatives_heading: page.alternatives_heading,
            alternatives: page.alternatives.into_iter().map(Into::into).collect(),
        }
    }
}

/// Detail page; `page` is absent when the id did not resolve
#[napi(object)]
pub struct DetailView {
    pub found: bool,
    /// Not-found title, or the tool name
    pub title: String,
    pub back_label: String,
    pub page: Option<ToolPage>,
}

impl From<CoreDetailView> for DetailView {
    fn from(view: CoreDetailView) -> Self {
        match view {
            CoreDetailView::Found(page) => {
                let back_label = page.back_label.clone();
                let page = ToolPage::from(*page);
                Self {
                    found: true,
                    title: page.name.clone(),
                    back_label,
                    page: Some(page),
                }
            }
            CoreDetailView::NotFound { title, back_label } => Self {
                found: false,
                title,
                back_label,
                page: None,
            },
        }
    }
}

#[napi(object)]
pub struct CategoryNavItem {
    pub id: String,
    pub label: String,
    /// Icon name, absent when the catalog names an unknown icon
    pub icon: Option<String>,
    pub active: bool,
}

impl From<CoreCategoryNavItem> for CategoryNavItem {
    fn from(item: CoreCategoryNavItem) -> Self {
        Self {
            icon: item.icon.name().map(str::to_string),
            id: item.id,
            label: item.label,
            active: item.active,
        }
    }
}

#[napi(object)]
pub struct LanguageOption {
    pub code: String,
    pub native_name: String,
    pub flag: String,
    pub active: bool,
}

impl From<CoreLanguageOption> for LanguageOption {
    fn from(option: CoreLanguageOption) -> Self {
        Self {
            code: option.code.to_string(),
            native_name: option.native_name.to_string(),
            flag: option.flag.to_string(),
            active: option.active,
        }
    }
}

// ============================================================================
// Routes
// ============================================================================

#[napi(string_enum)]
pub enum RouteKind {
    Directory,
    Tool,
}

#[napi(object)]
pub struct RouteInfo {
    pub kind: RouteKind,
    pub tool_id: Option<String>,
    /// Canonical address
    pub path: String,
}

impl From<CoreRoute> for RouteInfo {
    fn from(route: CoreRoute) -> Self {
        let path = route.path();
        match route {
            CoreRoute::Directory => Self { kind: RouteKind::Directory, tool_id: None, path },
            CoreRoute::Tool(id) => Self { kind: RouteKind::Tool, tool_id: Some(id), path },
        }
    }
}

// ============================================================================
// Settings Types
// ============================================================================

#[napi(string_enum)]
pub enum Theme {
    Dark,
    Light,
}

impl From<Theme> for CoreTheme {
    fn from(theme: Theme) -> Self {
        match theme {
            Theme::Dark => CoreTheme::Dark,
            Theme::Light => CoreTheme::Light,
        }
    }
}

impl From<CoreTheme> for Theme {
    fn from(theme: CoreTheme) -> Self {
        match theme {
            CoreTheme::Dark => Theme::Dark,
            CoreTheme::Light => Theme::Light,
        }
    }
}

#[napi(object)]
pub struct SettingsInfo {
    pub theme: Theme,
    pub language: String,
    pub store: String,
}

#[napi(object)]
pub struct StoreInfo {
    pub name: String,
    pub description: String,
}

#[napi(object)]
pub struct DirectoryOptions {
    /// Registered settings store name (default: "file")
    pub store: Option<String>,
    /// Explicit settings file; takes precedence over `store`
    pub settings_path: Option<String>,
    /// Ambient dark-mode preference used on first run
    pub prefers_dark: Option<bool>,
    /// Log to stderr (including debug output) instead of discarding it
    pub verbose: Option<bool>,
}

/// List registered settings stores
#[napi]
pub fn list_settings_stores() -> Vec<StoreInfo> {
    core_list_settings_stores()
        .into_iter()
        .map(|(name, description)| StoreInfo { name, description })
        .collect()
}

/// Storage failures are already logged and the value applies for the session,
/// so only rejected input surfaces as a JS exception
fn settle<T>(result: CoreSettingsResult<T>, current: impl FnOnce() -> T) -> Result<T> {
    match result {
        Ok(value) => Ok(value),
        Err(e) if e.is_rejection() => Err(Error::from_reason(e.to_string())),
        Err(_) => Ok(current()),
    }
}

// ============================================================================
// NexusDirectory
// ============================================================================

#[napi]
pub struct NexusDirectory {
    inner: CoreDirectory,
}

#[napi]
impl NexusDirectory {
    #[napi(constructor)]
    pub fn new(options: Option<DirectoryOptions>) -> Result<Self> {
        let options = options.unwrap_or(DirectoryOptions {
            store: None,
            settings_path: None,
            prefers_dark: None,
            verbose: None,
        });

        let store: Arc<dyn CoreSettingsStore> = match (options.settings_path, options.store) {
            (Some(path), _) => Arc::new(CoreFileSettingsStore::new(path)),
            (None, name) => {
                let name = name.unwrap_or_else(|| "file".to_string());
                core_create_settings_store(&name)
                    .ok_or_else(|| Error::from_reason(format!("Unknown settings store: {}", name)))?
            }
        };

        let logger: SharedLogger = if options.verbose.unwrap_or(false) {
            Arc::new(ConsoleLogger::verbose())
        } else {
            Arc::new(NoOpLogger::new())
        };

        let inner = CoreDirectory::open(store, options.prefers_dark.unwrap_or(false), logger)
            .map_err(|e| Error::from_reason(e.to_string()))?;
        Ok(Self { inner })
    }

    // Query

    #[napi(getter)]
    pub fn search_text(&self) -> String {
        self.inner.query().search_text.clone()
    }

    #[napi(getter)]
    pub fn selected_category(&self) -> String {
        self.inner.query().selected_category.clone()
    }

    /// Returns whether the text changed
    #[napi]
    pub fn set_search_text(&mut self, text: String) -> bool {
        self.inner.set_search_text(text)
    }

    /// Any id is accepted; unknown ids simply match nothing
    #[napi]
    pub fn set_selected_category(&mut self, id: String) -> bool {
        self.inner.set_selected_category(id)
    }

    #[napi]
    pub fn reset_query(&mut self) {
        self.inner.reset_query();
    }

    #[napi]
    pub fn visible_tools(&mut self) -> Vec<ToolInfo> {
        self.inner.visible_tools().into_iter().map(Into::into).collect()
    }

    // Views

    #[napi]
    pub fn directory_view(&mut self) -> DirectoryView {
        self.inner.directory_view().into()
    }

    /// Detail page for a tool id or a `/tool/{id}` address
    #[napi]
    pub fn detail_view(&self, address: String) -> DetailView {
        let id = match CoreRoute::parse(&address) {
            Some(CoreRoute::Tool(id)) => id,
            _ => address,
        };
        self.inner.detail_view(&id).into()
    }

    /// Resolve an address; anything unknown maps to the directory
    #[napi]
    pub fn resolve_route(&self, address: String) -> RouteInfo {
        self.inner.resolve_route(&address).into()
    }

    /// True when the address renders the detail page
    #[napi]
    pub fn is_detail_route(&self, address: String) -> bool {
        matches!(self.inner.resolve_route(&address), CoreRoute::Tool(_))
    }

    #[napi]
    pub fn categories(&self) -> Vec<CategoryNavItem> {
        self.inner.category_nav().into_iter().map(Into::into).collect()
    }

    #[napi]
    pub fn languages(&self) -> Vec<LanguageOption> {
        self.inner.language_options().into_iter().map(Into::into).collect()
    }

    // Settings

    #[napi]
    pub fn settings(&self) -> SettingsInfo {
        let settings = self.inner.settings();
        SettingsInfo {
            theme: settings.theme.into(),
            language: settings.language.code().to_string(),
            store: self.inner.store_name().to_string(),
        }
    }

    #[napi(getter)]
    pub fn theme(&self) -> Theme {
        self.inner.theme().into()
    }

    #[napi(getter)]
    pub fn is_dark(&self) -> bool {
        self.inner.theme().is_dark()
    }

    #[napi(getter)]
    pub fn language(&self) -> String {
        self.inner.language().code().to_string()
    }

    #[napi]
    pub fn set_theme(&mut self, theme: Theme) -> Result<()> {
        let result = self.inner.set_theme(theme.into());
        settle(result, || ())
    }

    #[napi]
    pub fn toggle_theme(&mut self) -> Result<Theme> {
        let result = self.inner.toggle_theme();
        settle(result, || self.inner.theme()).map(Into::into)
    }

    /// Switch language by code; throws for unsupported codes
    #[napi]
    pub fn set_language(&mut self, code: String) -> Result<String> {
        let result = self.inner.set_language_code(&code);
        settle(result, || self.inner.language()).map(|language| language.code().to_string())
    }
}

// ============================================================================
// Debug Logging
// ============================================================================

/// Get the debug log file path
#[napi]
pub fn get_debug_log_path() -> String {
    nexus_core::logging::log_file_path().to_string_lossy().to_string()
}

/// Clear the debug log file
#[napi]
pub fn clear_debug_log() {
    nexus_core::logging::clear_log();
}

/// Write a message to the debug log
#[napi]
pub fn debug_log(module: String, message: String) {
    nexus_core::logging::info(&module, &message);
}
