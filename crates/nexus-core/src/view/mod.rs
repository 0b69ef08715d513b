//! Render-ready view models
//!
//! Everything here is derived: built from the catalog, the query, and the
//! active [`Translations`](crate::i18n::Translations), then handed to the
//! shell. Nothing in a view model feeds back into state.

mod card;
mod directory;
mod detail;
mod menu;

pub use card::{ToolCard, Gradient, monogram};
pub use directory::{DirectoryView, EmptyState};
pub use detail::{DetailView, ToolPage, FaqEntry};
pub use menu::{CategoryNavItem, LanguageOption, category_nav, language_options};
