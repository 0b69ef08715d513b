//! Settings store registry for creating backends by name

use std::collections::HashMap;
use std::sync::Arc;

use once_cell::sync::Lazy;
use parking_lot::RwLock;

use super::traits::SettingsStore;
use super::file::FileSettingsStore;
use super::memory::MemorySettingsStore;

/// Factory function type for creating settings stores
pub type StoreFactory = Box<dyn Fn() -> Arc<dyn SettingsStore> + Send + Sync>;

struct StoreDefinition {
    name: String,
    description: String,
    factory: StoreFactory,
}

static REGISTRY: Lazy<RwLock<HashMap<String, StoreDefinition>>> = Lazy::new(|| {
    let mut map = HashMap::new();

    map.insert(
        "memory".to_string(),
        StoreDefinition {
            name: "memory".to_string(),
            description: "In-memory storage, discarded on exit".to_string(),
            factory: Box::new(|| Arc::new(MemorySettingsStore::new())),
        },
    );

    map.insert(
        "file".to_string(),
        StoreDefinition {
            name: "file".to_string(),
            description: "YAML file in the user config directory".to_string(),
            factory: Box::new(|| Arc::new(FileSettingsStore::user())),
        },
    );

    RwLock::new(map)
});

/// Register a settings store type, replacing any store with the same name
///
/// # Example
///
/// ```
/// use nexus_core::settings::{register_settings_store, create_settings_store, MemorySettingsStore};
/// use std::sync::Arc;
///
/// register_settings_store(
///     "scratch",
///     "Throwaway store",
///     Box::new(|| Arc::new(MemorySettingsStore::new())),
/// );
/// assert!(create_settings_store("scratch").is_some());
/// ```
pub fn register_settings_store(name: &str, description: &str, factory: StoreFactory) {
    REGISTRY.write().insert(
        name.to_string(),
        StoreDefinition {
            name: name.to_string(),
            description: description.to_string(),
            factory,
        },
    );
}

/// Create a settings store by name; `None` if the name is not registered
pub fn create_settings_store(name: &str) -> Option<Arc<dyn SettingsStore>> {
    REGISTRY.read().get(name).map(|def| (def.factory)())
}

/// All registered stores as `(name, description)`, sorted by name
pub fn list_settings_stores() -> Vec<(String, String)> {
    let mut stores: Vec<_> = REGISTRY
        .read()
        .values()
        .map(|def| (def.name.clone(), def.description.clone()))
        .collect();
    stores.sort();
    stores
}

pub fn has_settings_store(name: &str) -> bool {
    REGISTRY.read().contains_key(name)
}

/// Unregister a settings store (mainly for testing)
pub fn unregister_settings_store(name: &str) -> bool {
    REGISTRY.write().remove(name).is_some()
}
