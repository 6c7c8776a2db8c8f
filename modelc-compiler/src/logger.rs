//! Leveled logging handed to the pipeline.
//!
//! The compiler never logs through a global; callers pass a [`Logger`] and
//! every stage reports through it. [`TracingLogger`] is the production
//! implementation.

use tracing::Level;

/// Log target used by [`TracingLogger`].
pub const LOG_TARGET: &str = "modelc::compiler";

/// A sink for leveled log messages.
pub trait Logger {
    /// Record a message at the given level.
    fn log(&self, level: Level, message: &str);

    fn debug(&self, message: &str) {
        self.log(Level::DEBUG, message);
    }

    fn info(&self, message: &str) {
        self.log(Level::INFO, message);
    }

    fn warn(&self, message: &str) {
        self.log(Level::WARN, message);
    }

    fn error(&self, message: &str) {
        self.log(Level::ERROR, message);
    }
}

/// Forwards messages to the `tracing` subscriber installed by the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn log(&self, level: Level, message: &str) {
        match level {
            Level::ERROR => tracing::error!(target: LOG_TARGET, "{}", message),
            Level::WARN => tracing::warn!(target: LOG_TARGET, "{}", message),
            Level::INFO => tracing::info!(target: LOG_TARGET, "{}", message),
            Level::DEBUG => tracing::debug!(target: LOG_TARGET, "{}", message),
            _ => tracing::trace!(target: LOG_TARGET, "{}", message),
        }
    }
}

