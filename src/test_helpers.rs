//! Test-only helpers shared by unit tests.

use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

use log::Level;
use logtest::Logger;
use rstest::fixture;

use crate::fragment::FragmentRecord;

/// Builds a fragment record from raw parts.
pub fn fragment(group: &str, index: u32, last: u32, timestamp: u64, chunk: &str) -> FragmentRecord {
    FragmentRecord::new(group, index, last, timestamp, chunk)
}

/// Builds the two-fragment attempt encoding `{"<key>":<value>}` under `group`.
pub fn two_part_attempt(group: &str, timestamp: u64, key: &str, value: u32) -> [FragmentRecord; 2] {
    [
        fragment(group, 0, 1, timestamp, "{\""),
        fragment(group, 1, 1, timestamp, &format!("{key}\":{value}}}")),
    ]
}

/// Handle to the global logger with exclusive access.
///
/// Serialises log-capturing tests so they do not consume each other's
/// records.
pub struct LoggerHandle {
    guard: MutexGuard<'static, Logger>,
}

impl LoggerHandle {
    /// Acquire the global [`Logger`] instance and discard stale records.
    pub fn new() -> Self {
        static LOGGER: OnceLock<Mutex<Logger>> = OnceLock::new();

        let logger = LOGGER.get_or_init(|| Mutex::new(Logger::start()));
        let mut guard = logger.lock().unwrap_or_else(PoisonError::into_inner);
        while guard.pop().is_some() {}

        Self { guard }
    }

    /// Drain captured records, returning their levels and rendered messages.
    pub fn drain(&mut self) -> Vec<(Level, String)> {
        let mut records = Vec::new();
        while let Some(record) = self.guard.pop() {
            records.push((record.level(), record.args().to_string()));
        }
        records
    }
}

#[fixture]
pub fn logger() -> LoggerHandle { LoggerHandle::new() }
