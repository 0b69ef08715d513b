//! In-memory settings store

use std::collections::HashMap;

use parking_lot::RwLock;

use super::traits::{SettingsStore, SettingsResult};

/// In-memory settings store for tests and ephemeral sessions
///
/// Values are lost when the store is dropped.
///
/// # Example
///
/// ```
/// use nexus_core::settings::{SettingsStore, MemorySettingsStore};
///
/// let store = MemorySettingsStore::new();
/// store.set("theme", "dark").unwrap();
/// assert_eq!(store.get("theme"), Some("dark".to_string()));
/// ```
#[derive(Debug, Default)]
pub struct MemorySettingsStore {
    values: RwLock<HashMap<String, String>>,
}

impl MemorySettingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with initial values
    pub fn with_values<I, K, V>(initial: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let values = initial
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self {
            values: RwLock::new(values),
        }
    }

    pub fn clear(&self) {
        self.values.write().clear();
    }

    pub fn len(&self) -> usize {
        self.values.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl SettingsStore for MemorySettingsStore {
    fn name(&self) -> &str {
        "memory"
    }

    fn get(&self, key: &str) -> Option<String> {
        self.values.read().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> SettingsResult<()> {
        self.values.write().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> SettingsResult<()> {
        self.values.write().remove(key);
        Ok(())
    }
}

impl Clone for MemorySettingsStore {
    fn clone(&self) -> Self {
        Self {
            values: RwLock::new(self.values.read().clone()),
        }
    }
}
