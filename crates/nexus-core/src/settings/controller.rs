//! Settings controller
//!
//! Single owner of the theme and language. Values are resolved from storage
//! before anything reads them, and every mutation is written back at once.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::logging::SharedLogger;
use crate::types::{Language, Theme};
use super::traits::{SettingsError, SettingsResult, SettingsStore};

/// Storage key for the theme flag
pub const THEME_KEY: &str = "theme";

/// Storage key for the language code
pub const LANGUAGE_KEY: &str = "language";

/// Snapshot of the user's settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub theme: Theme,
    pub language: Language,
}

/// Owns the settings state and its persistence
///
/// Setters take `&mut self`; readers get `Copy` snapshots. When a write to
/// storage fails the new value still applies for this session and the storage
/// error is returned.
pub struct SettingsController {
    settings: Settings,
    store: Arc<dyn SettingsStore>,
    logger: SharedLogger,
}

impl SettingsController {
    /// Resolve settings from storage
    ///
    /// Theme: persisted `dark`/`light`, otherwise the ambient preference.
    /// Language: persisted supported code, otherwise English. The resolved
    /// values are written back so a first run seeds storage and corrupt
    /// entries are replaced.
    pub fn load(store: Arc<dyn SettingsStore>, prefers_dark: bool, logger: SharedLogger) -> Self {
        let theme = match store.get(THEME_KEY) {
            Some(value) => Theme::parse(&value).unwrap_or_else(|| {
                logger.warn(&format!(
                    "[Settings] Ignoring persisted theme '{}', using ambient preference",
                    value
                ));
                Theme::from_preference(prefers_dark)
            }),
            None => Theme::from_preference(prefers_dark),
        };

        let language = match store.get(LANGUAGE_KEY) {
            Some(code) => Language::from_code(&code).unwrap_or_else(|| {
                logger.warn(&format!(
                    "[Settings] Ignoring persisted language '{}', using default",
                    code
                ));
                Language::default()
            }),
            None => Language::default(),
        };

        let controller = Self {
            settings: Settings { theme, language },
            store,
            logger,
        };

        // Errors are already logged by persist; startup carries on with the resolved values
        let _ = controller.persist(THEME_KEY, theme.as_str());
        let _ = controller.persist(LANGUAGE_KEY, language.code());

        controller.logger.info(&format!(
            "[Settings] Loaded theme={} language={} from {} store",
            theme,
            language,
            controller.store.name()
        ));
        controller
    }

    /// Current settings snapshot
    pub fn settings(&self) -> Settings {
        self.settings
    }

    pub fn theme(&self) -> Theme {
        self.settings.theme
    }

    pub fn language(&self) -> Language {
        self.settings.language
    }

    /// Name of the backing store
    pub fn store_name(&self) -> &str {
        self.store.name()
    }

    pub fn set_theme(&mut self, theme: Theme) -> SettingsResult<()> {
        self.settings.theme = theme;
        self.persist(THEME_KEY, theme.as_str())
    }

    /// Flip between dark and light; returns the new theme
    pub fn toggle_theme(&mut self) -> SettingsResult<Theme> {
        let theme = self.settings.theme.toggled();
        self.set_theme(theme)?;
        Ok(theme)
    }

    /// Set the theme from its persisted form; unknown values are rejected
    /// and leave the theme unchanged
    pub fn set_theme_value(&mut self, value: &str) -> SettingsResult<Theme> {
        let theme = Theme::parse(value).ok_or_else(|| {
            self.logger.warn(&format!("[Settings] Rejected theme '{}'", value));
            SettingsError::UnsupportedTheme(value.to_string())
        })?;
        self.set_theme(theme)?;
        Ok(theme)
    }

    pub fn set_language(&mut self, language: Language) -> SettingsResult<()> {
        self.settings.language = language;
        self.persist(LANGUAGE_KEY, language.code())
    }

    /// Set the language from a locale code; unsupported codes are rejected
    /// and leave the language unchanged
    pub fn set_language_code(&mut self, code: &str) -> SettingsResult<Language> {
        let language = Language::from_code(code).ok_or_else(|| {
            self.logger.warn(&format!("[Settings] Rejected language '{}'", code));
            SettingsError::UnsupportedLanguage(code.to_string())
        })?;
        self.set_language(language)?;
        Ok(language)
    }

    fn persist(&self, key: &str, value: &str) -> SettingsResult<()> {
        self.store.set(key, value).map_err(|e| {
            self.logger.warn(&format!(
                "[Settings] Failed to persist {}={} to {} store: {}",
                key,
                value,
                self.store.name(),
                e
            ));
            e
        })
    }
}

impl std::fmt::Debug for SettingsController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SettingsController")
            .field("settings", &self.settings)
            .field("store", &self.store.name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::test_support::RecordingLogger;
    use crate::logging::NoOpLogger;
    use crate::settings::{FileSettingsStore, MemorySettingsStore};

    fn noop() -> SharedLogger {
        Arc::new(NoOpLogger::new())
    }

    /// Store whose writes always fail
    struct ReadOnlyStore;

    impl SettingsStore for ReadOnlyStore {
        fn name(&self) -> &str {
            "read-only"
        }
        fn get(&self, _key: &str) -> Option<String> {
            None
        }
        fn set(&self, _key: &str, _value: &str) -> SettingsResult<()> {
            Err(SettingsError::Other("read-only".into()))
        }
        fn remove(&self, _key: &str) -> SettingsResult<()> {
            Err(SettingsError::Other("read-only".into()))
        }
    }

    #[test]
    fn test_first_run_uses_ambient_preference_and_default_language() {
        let store = Arc::new(MemorySettingsStore::new());
        let controller = SettingsController::load(store.clone(), true, noop());

        assert_eq!(controller.theme(), Theme::Dark);
        assert_eq!(controller.language(), Language::En);

        // Resolved values are seeded into storage
        assert_eq!(store.get(THEME_KEY), Some("dark".to_string()));
        assert_eq!(store.get(LANGUAGE_KEY), Some("en".to_string()));
    }

    #[test]
    fn test_persisted_values_win_over_preference() {
        let store = Arc::new(MemorySettingsStore::with_values([("theme", "light"), ("language", "ko")]));
        let controller = SettingsController::load(store, true, noop());

        assert_eq!(controller.settings(), Settings { theme: Theme::Light, language: Language::Ko });
    }

    #[test]
    fn test_corrupt_values_fall_back_and_are_replaced() {
        let store = Arc::new(MemorySettingsStore::with_values([("theme", "sepia"), ("language", "xx")]));
        let logger = Arc::new(RecordingLogger::default());
        let controller = SettingsController::load(store.clone(), false, logger.clone());

        assert_eq!(controller.theme(), Theme::Light);
        assert_eq!(controller.language(), Language::En);
        assert_eq!(store.get(THEME_KEY), Some("light".to_string()));
        assert_eq!(store.get(LANGUAGE_KEY), Some("en".to_string()));
        assert!(logger.contains("Ignoring persisted theme 'sepia'"));
        assert!(logger.contains("Ignoring persisted language 'xx'"));
    }

    #[test]
    fn test_set_theme_persists() {
        let store = Arc::new(MemorySettingsStore::new());
        let mut controller = SettingsController::load(store.clone(), false, noop());

        assert_eq!(controller.toggle_theme().unwrap(), Theme::Dark);
        assert_eq!(store.get(THEME_KEY), Some("dark".to_string()));

        controller.set_theme(Theme::Light).unwrap();
        assert_eq!(store.get(THEME_KEY), Some("light".to_string()));
    }

    #[test]
    fn test_set_language_persists() {
        let store = Arc::new(MemorySettingsStore::new());
        let mut controller = SettingsController::load(store.clone(), false, noop());

        assert_eq!(controller.set_language_code("vi").unwrap(), Language::Vi);
        assert_eq!(controller.language(), Language::Vi);
        assert_eq!(store.get(LANGUAGE_KEY), Some("vi".to_string()));
    }

    #[test]
    fn test_unsupported_language_rejected() {
        let store = Arc::new(MemorySettingsStore::new());
        let mut controller = SettingsController::load(store.clone(), false, noop());
        controller.set_language(Language::De).unwrap();

        let err = controller.set_language_code("xx").unwrap_err();
        assert!(matches!(err, SettingsError::UnsupportedLanguage(ref code) if code == "xx"));
        assert!(err.is_rejection());
        assert_eq!(controller.language(), Language::De);
        assert_eq!(store.get(LANGUAGE_KEY), Some("de".to_string()));
    }

    #[test]
    fn test_unsupported_theme_rejected() {
        let store = Arc::new(MemorySettingsStore::new());
        let mut controller = SettingsController::load(store, true, noop());

        assert!(matches!(
            controller.set_theme_value("sepia"),
            Err(SettingsError::UnsupportedTheme(_))
        ));
        assert_eq!(controller.theme(), Theme::Dark);
        assert_eq!(controller.set_theme_value("light").unwrap(), Theme::Light);
    }

    #[test]
    fn test_storage_failure_still_applies_for_session() {
        let logger = Arc::new(RecordingLogger::default());
        let mut controller = SettingsController::load(Arc::new(ReadOnlyStore), false, logger.clone());
        assert!(logger.contains("Failed to persist theme=light"));

        let result = controller.set_language(Language::Ja);
        assert!(matches!(result, Err(SettingsError::Other(_))));
        assert_eq!(controller.language(), Language::Ja);
    }

    #[test]
    fn test_restored_across_restarts_with_file_store() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.yaml");

        {
            let mut controller =
                SettingsController::load(Arc::new(FileSettingsStore::new(&path)), false, noop());
            controller.set_theme(Theme::Dark).unwrap();
            controller.set_language(Language::Th).unwrap();
        }

        // Ambient preference no longer matters once a theme is persisted
        let restored = SettingsController::load(Arc::new(FileSettingsStore::new(&path)), false, noop());
        assert_eq!(restored.settings(), Settings { theme: Theme::Dark, language: Language::Th });
        assert_eq!(restored.store_name(), "file");
    }
}
