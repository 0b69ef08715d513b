//! Core types for the tool directory
//!
//! This module contains the shared record and enumeration types used across
//! the catalog, query, settings and view layers.

mod tool;
mod pricing;
mod language;
mod theme;

pub use tool::{Tool, Category};
pub use pricing::{PricingTier, BadgeTone};
pub use language::Language;
pub use theme::Theme;
