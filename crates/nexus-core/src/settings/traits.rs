//! Settings storage trait and errors

use thiserror::Error;

/// Errors that can occur during settings operations
#[derive(Error, Debug)]
pub enum SettingsError {
    /// Language code outside the supported set
    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    /// Theme value other than `dark` / `light`
    #[error("Unsupported theme: {0}")]
    UnsupportedTheme(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Settings file exists but could not be parsed or written as YAML
    #[error("Settings file error: {0}")]
    Parse(String),

    #[error("Settings error: {0}")]
    Other(String),
}

impl SettingsError {
    /// Validation failures that leave state untouched
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            SettingsError::UnsupportedLanguage(_) | SettingsError::UnsupportedTheme(_)
        )
    }
}

pub type SettingsResult<T> = Result<T, SettingsError>;

/// Key-value storage for persisted settings
///
/// Values are plain scalar strings with no schema versioning. Reads never
/// fail: a backend that cannot read reports the key as absent and the caller
/// falls back to defaults.
pub trait SettingsStore: Send + Sync {
    /// Human-readable name of this store
    fn name(&self) -> &str;

    /// Check if this store can be used on this host
    fn is_available(&self) -> bool {
        true
    }

    /// Read a value
    fn get(&self, key: &str) -> Option<String>;

    /// Write a value, durably for persistent backends
    fn set(&self, key: &str, value: &str) -> SettingsResult<()>;

    /// Remove a value
    fn remove(&self, key: &str) -> SettingsResult<()>;

    fn has(&self, key: &str) -> bool {
        self.get(key).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_classification() {
        assert!(SettingsError::UnsupportedLanguage("xx".into()).is_rejection());
        assert!(SettingsError::UnsupportedTheme("sepia".into()).is_rejection());
        assert!(!SettingsError::Parse("bad".into()).is_rejection());
    }

    #[test]
    fn test_error_display() {
        let err = SettingsError::UnsupportedLanguage("xx".into());
        assert_eq!(err.to_string(), "Unsupported language: xx");
    }
}
