//! Logging
//!
//! Two layers: an injected [`Logger`] for messages a host should see, and a
//! process-global file log ([`file_logger`]) for low-level diagnostics that
//! is off unless `NEXUS_DEBUG` is set.

mod traits;
mod sinks;
pub mod file_logger;

pub use traits::{Logger, SharedLogger};
pub use sinks::{NoOpLogger, ConsoleLogger};

pub use file_logger::{
    log, trace, debug, info, warn, error,
    log_file_path, clear_log, LogLevel,
};

#[cfg(test)]
pub(crate) use traits::test_support;
