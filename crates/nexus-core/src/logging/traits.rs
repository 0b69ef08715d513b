//! Logger trait

use std::sync::Arc;

use super::file_logger::LogLevel;

/// Sink for diagnostic messages from the directory core
///
/// The core never prints on its own. Hosts inject one of:
/// - `NoOpLogger`: tests and quiet embedding
/// - `ConsoleLogger`: stderr with a level threshold
/// - a host adapter (e.g. forwarding to a JS `console`)
pub trait Logger: Send + Sync {
    fn debug(&self, message: &str);

    fn info(&self, message: &str);

    fn warn(&self, message: &str);

    fn error(&self, message: &str);

    /// Dispatch by level; `Trace` is folded into `debug`
    fn log(&self, level: LogLevel, message: &str) {
        match level {
            LogLevel::Trace | LogLevel::Debug => self.debug(message),
            LogLevel::Info => self.info(message),
            LogLevel::Warn => self.warn(message),
            LogLevel::Error => self.error(message),
        }
    }
}

/// Logger shared between the directory, its settings controller and the host
pub type SharedLogger = Arc<dyn Logger>;

/// Convenience macros for logging
#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $($arg:tt)*) => {
        $logger.debug(&format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($arg:tt)*) => {
        $logger.info(&format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_warn {
    ($logger:expr, $($arg:tt)*) => {
        $logger.warn(&format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_error {
    ($logger:expr, $($arg:tt)*) => {
        $logger.error(&format!($($arg)*))
    };
}

#[cfg(test)]
pub(crate) mod test_support {
    use parking_lot::Mutex;

    use super::Logger;

    /// Logger that records messages so tests can assert on them
    #[derive(Debug, Default)]
    pub struct RecordingLogger {
        pub lines: Mutex<Vec<String>>,
    }

    impl RecordingLogger {
        pub fn contains(&self, needle: &str) -> bool {
            self.lines.lock().iter().any(|l| l.contains(needle))
        }
    }

    impl Logger for RecordingLogger {
        fn debug(&self, message: &str) {
            self.lines.lock().push(format!("DEBUG {}", message));
        }
        fn info(&self, message: &str) {
            self.lines.lock().push(format!("INFO {}", message));
        }
        fn warn(&self, message: &str) {
            self.lines.lock().push(format!("WARN {}", message));
        }
        fn error(&self, message: &str) {
            self.lines.lock().push(format!("ERROR {}", message));
        }
    }
}
