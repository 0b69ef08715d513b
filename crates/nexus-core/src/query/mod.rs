//! Search and category query state, and the filter engine over it
//!
//! ## Architecture
//!
//! ```text
//! search box ──set_search_text──┐
//!                               ▼
//!                          QueryState ──► ToolFilter::from_query ──► visible_tools(catalog)
//!                               ▲                                          │
//! category list ─set_selected_category                     FilterCache memoizes on
//!                                                          (search_text, selected_category)
//! ```

mod state;
mod filter;

pub use state::{QueryState, ALL_CATEGORIES};
pub use filter::{ToolFilter, FilterCache, visible_tools};
