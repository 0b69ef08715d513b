//! Settings persistence and the settings controller
//!
//! Storage backends:
//! - `MemorySettingsStore`: In-memory for tests and ephemeral sessions
//! - `FileSettingsStore`: YAML file under the user config directory
//!
//! `SettingsController` owns the current theme and language, resolves them
//! from storage at startup and writes every change straight back.

mod traits;
mod memory;
mod file;
mod registry;
mod controller;

pub use traits::{SettingsStore, SettingsError, SettingsResult};
pub use memory::MemorySettingsStore;
pub use file::FileSettingsStore;
pub use registry::{
    register_settings_store, create_settings_store, list_settings_stores,
    has_settings_store, unregister_settings_store, StoreFactory,
};
pub use controller::{Settings, SettingsController, THEME_KEY, LANGUAGE_KEY};
