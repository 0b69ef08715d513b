//! File-based settings store (YAML)
//!
//! Settings live in `<config dir>/nexus/settings.yaml` as a flat map:
//!
//! ```yaml
//! language: en
//! theme: dark
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use parking_lot::RwLock;

use crate::warn_log;
use super::traits::{SettingsError, SettingsResult, SettingsStore};

type SettingsMap = BTreeMap<String, String>;

/// File-based settings store
///
/// Reads are served from an in-memory cache filled on first access; every
/// write rewrites the whole file. A file that cannot be parsed reads as empty
/// and is backed up (`settings.yaml.backup`) before the next write replaces it.
///
/// # Example
///
/// ```no_run
/// use nexus_core::settings::{FileSettingsStore, SettingsStore};
///
/// let store = FileSettingsStore::user();
/// store.set("theme", "dark").unwrap();
/// ```
pub struct FileSettingsStore {
    path: PathBuf,
    cache: RwLock<Option<SettingsMap>>,
}

impl FileSettingsStore {
    /// Create a store backed by a specific file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cache: RwLock::new(None),
        }
    }

    /// Store in the user's config directory (`~/.config/nexus/settings.yaml` on Linux)
    pub fn user() -> Self {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")).join(".config"));
        Self::new(config_dir.join("nexus").join("settings.yaml"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Read and parse the file; a missing file is an empty map
    fn load(&self) -> SettingsResult<SettingsMap> {
        if !self.path.exists() {
            return Ok(SettingsMap::new());
        }

        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(SettingsMap::new());
        }

        serde_yaml::from_str(&content)
            .map_err(|e| SettingsError::Parse(format!("Failed to parse {}: {}", self.path.display(), e)))
    }

    fn save(&self, map: &SettingsMap) -> SettingsResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_yaml::to_string(map)
            .map_err(|e| SettingsError::Parse(format!("Failed to serialize YAML: {}", e)))?;
        fs::write(&self.path, content)?;

        *self.cache.write() = Some(map.clone());
        Ok(())
    }

    /// Cached map, loading on first use. Unreadable files read as empty.
    fn current(&self) -> SettingsMap {
        if let Some(map) = self.cache.read().as_ref() {
            return map.clone();
        }

        let map = match self.load() {
            Ok(map) => map,
            Err(e) => {
                warn_log!("Ignoring unreadable settings file: {}", e);
                SettingsMap::new()
            }
        };
        *self.cache.write() = Some(map.clone());
        map
    }

    /// Map to build the next write on; backs up a corrupt file first
    fn writable(&self) -> SettingsResult<SettingsMap> {
        match self.load() {
            Ok(map) => Ok(map),
            Err(SettingsError::Parse(_)) => {
                self.backup()?;
                Ok(SettingsMap::new())
            }
            Err(e) => Err(e),
        }
    }

    /// Re-read the file, dropping the cache
    pub fn reload(&self) -> SettingsResult<()> {
        let map = self.load()?;
        *self.cache.write() = Some(map);
        Ok(())
    }

    /// Copy the current file next to itself; `None` when there is no file
    pub fn backup(&self) -> SettingsResult<Option<PathBuf>> {
        if !self.exists() {
            return Ok(None);
        }

        let backup_path = self.path.with_extension("yaml.backup");
        fs::copy(&self.path, &backup_path)?;
        Ok(Some(backup_path))
    }
}

impl std::fmt::Debug for FileSettingsStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileSettingsStore")
            .field("path", &self.path)
            .field("exists", &self.exists())
            .finish()
    }
}

impl SettingsStore for FileSettingsStore {
    fn name(&self) -> &str {
        "file"
    }

    fn get(&self, key: &str) -> Option<String> {
        self.current().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> SettingsResult<()> {
        let mut map = self.writable()?;
        map.insert(key.to_string(), value.to_string());
        self.save(&map)
    }

    fn remove(&self, key: &str) -> SettingsResult<()> {
        let mut map = self.writable()?;
        if map.remove(key).is_some() {
            self.save(&map)
        } else {
            Ok(())
        }
    }
}
