//! Built-in logger sinks

use super::file_logger::LogLevel;
use super::traits::Logger;

/// Discards everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpLogger;

impl NoOpLogger {
    pub fn new() -> Self {
        Self
    }
}

impl Logger for NoOpLogger {
    fn debug(&self, _message: &str) {}
    fn info(&self, _message: &str) {}
    fn warn(&self, _message: &str) {}
    fn error(&self, _message: &str) {}
}

/// Writes `[Nexus] LEVEL: message` lines to stderr
///
/// Everything goes to stderr so a host that uses stdout for data (a CLI
/// printing JSON views, say) is not disturbed. Messages below the threshold
/// are dropped; the default threshold is `Info`.
#[derive(Debug, Clone)]
pub struct ConsoleLogger {
    prefix: String,
    min_level: LogLevel,
}

impl Default for ConsoleLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleLogger {
    pub fn new() -> Self {
        Self {
            prefix: "[Nexus]".to_string(),
            min_level: LogLevel::Info,
        }
    }

    /// Include debug output
    pub fn verbose() -> Self {
        Self::new().with_level(LogLevel::Debug)
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_level(mut self, min_level: LogLevel) -> Self {
        self.min_level = min_level;
        self
    }

    pub fn enabled(&self, level: LogLevel) -> bool {
        level >= self.min_level
    }

    fn emit(&self, level: LogLevel, message: &str) {
        if self.enabled(level) {
            eprintln!("{} {}: {}", self.prefix, level, message);
        }
    }
}

impl Logger for ConsoleLogger {
    fn debug(&self, message: &str) {
        self.emit(LogLevel::Debug, message);
    }

    fn info(&self, message: &str) {
        self.emit(LogLevel::Info, message);
    }

    fn warn(&self, message: &str) {
        self.emit(LogLevel::Warn, message);
    }

    fn error(&self, message: &str) {
        self.emit(LogLevel::Error, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::test_support::RecordingLogger;

    #[test]
    fn test_console_threshold() {
        let logger = ConsoleLogger::new();
        assert!(!logger.enabled(LogLevel::Debug));
        assert!(logger.enabled(LogLevel::Info));
        assert!(logger.enabled(LogLevel::Error));

        assert!(ConsoleLogger::verbose().enabled(LogLevel::Debug));
        assert!(!ConsoleLogger::verbose().enabled(LogLevel::Trace));
    }

    #[test]
    fn test_console_prefix() {
        let logger = ConsoleLogger::new().with_prefix("[Shell]").with_level(LogLevel::Warn);
        assert_eq!(logger.prefix, "[Shell]");
        assert!(!logger.enabled(LogLevel::Info));
    }

    #[test]
    fn test_log_dispatches_by_level() {
        let logger = RecordingLogger::default();
        logger.log(LogLevel::Trace, "a");
        logger.log(LogLevel::Warn, "b");

        let lines = logger.lines.lock().clone();
        assert_eq!(lines, vec!["DEBUG a".to_string(), "WARN b".to_string()]);
    }
}
