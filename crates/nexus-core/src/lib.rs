//! Nexus Core
//!
//! Catalog, search/filter and settings engine for the Nexus AI tool directory.
//! Runtime agnostic: the same crate backs the Node.js binding or any native
//! shell.
//!
//! ## Flow
//!
//! The catalog is immutable. Search text and the category selection live in
//! a [`QueryState`]; the filter engine turns catalog + query into the visible
//! tool list. Theme and language are owned by the [`SettingsController`] and
//! written through a [`SettingsStore`] on every change.
//!
//! ```rust
//! use std::sync::Arc;
//! use nexus_core::{Directory, MemorySettingsStore, NoOpLogger};
//!
//! let mut directory = Directory::open(
//!     Arc::new(MemorySettingsStore::new()),
//!     true,
//!     Arc::new(NoOpLogger::new()),
//! ).unwrap();
//!
//! directory.set_search_text("image");
//! let view = directory.directory_view();
//! assert_eq!(view.result_count, view.cards.len());
//! ```

pub mod types;
pub mod icons;
pub mod logging;
pub mod catalog;
pub mod i18n;
pub mod query;
pub mod detail;
pub mod settings;
pub mod route;
pub mod view;
pub mod app;

// Re-export commonly used types
pub use types::{Tool, Category, PricingTier, BadgeTone, Language, Theme};

pub use icons::CategoryIcon;

pub use catalog::{Catalog, CatalogError, CatalogResult};

pub use i18n::{Translations, translations, format_template};

pub use query::{QueryState, ToolFilter, FilterCache, visible_tools, ALL_CATEGORIES};

pub use detail::{ToolDetail, resolve_tool, resolve_alternatives, resolve_detail};

pub use settings::{
    SettingsStore, SettingsError, SettingsResult,
    MemorySettingsStore, FileSettingsStore,
    Settings, SettingsController,
    register_settings_store, create_settings_store, list_settings_stores,
};

pub use logging::{Logger, NoOpLogger, ConsoleLogger};

pub use route::Route;

pub use view::{ToolCard, DirectoryView, DetailView, ToolPage, CategoryNavItem, LanguageOption};

pub use app::{Directory, Page};
