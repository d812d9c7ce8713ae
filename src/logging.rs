//! Injectable logging capability.
//!
//! Components take an `Arc<dyn Logger>` instead of reaching for a global, so
//! callers decide where records go. [`LogFacade`] forwards to the `log` crate
//! and is what every component uses unless told otherwise.

use std::fmt;
use std::sync::{Arc, Mutex};

pub use log::Level;

/// Log target used by [`LogFacade`].
pub const TARGET: &str = "dragon_render";

/// A sink for diagnostic messages.
pub trait Logger: Send + Sync + fmt::Debug {
    fn log(&self, level: Level, message: &str);

    /// Whether a record at `level` would be kept. Check this before building
    /// an expensive message.
    fn enabled(&self, _level: Level) -> bool {
        true
    }

    fn debug(&self, message: &str) {
        self.log(Level::Debug, message);
    }

    fn warn(&self, message: &str) {
        self.log(Level::Warn, message);
    }

    fn error(&self, message: &str) {
        self.log(Level::Error, message);
    }
}

/// Forwards records to the `log` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogFacade;

impl Logger for LogFacade {
    fn log(&self, level: Level, message: &str) {
        log::log!(target: TARGET, level, "{message}");
    }

    fn enabled(&self, level: Level) -> bool {
        log::log_enabled!(target: TARGET, level)
    }
}

/// Returns the logger components fall back to.
pub fn default_logger() -> Arc<dyn Logger> {
    Arc::new(LogFacade)
}

/// Keeps every record in memory.
///
/// Useful in tests, or wherever log output has to be inspected afterwards.
#[derive(Debug)]
pub struct MemoryLogger {
    records: Mutex<Vec<(Level, String)>>,
    max_level: Level,
}

impl Default for MemoryLogger {
    fn default() -> Self {
        Self::with_level(Level::Trace)
    }
}

impl MemoryLogger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keeps only records at `max_level` or more severe.
    pub fn with_level(max_level: Level) -> Self {
        Self {
            records: Mutex::new(Vec::new()),
            max_level,
        }
    }

    /// Returns a copy of the records captured so far, oldest first.
    pub fn records(&self) -> Vec<(Level, String)> {
        match self.records.lock() {
            Ok(records) => records.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Returns the messages logged at exactly `level`.
    pub fn messages_at(&self, level: Level) -> Vec<String> {
        self.records()
            .into_iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m)
            .collect()
    }
}

impl Logger for MemoryLogger {
    fn log(&self, level: Level, message: &str) {
        if !self.enabled(level) {
            return;
        }
        let mut records = match self.records.lock() {
            Ok(records) => records,
            Err(poisoned) => poisoned.into_inner(),
        };
        records.push((level, message.to_string()));
    }

    fn enabled(&self, level: Level) -> bool {
        level <= self.max_level
    }
}
