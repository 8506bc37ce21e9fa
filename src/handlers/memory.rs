//! In-memory capturing handler

use crate::core::{Handler, LogRecord, Result};
use parking_lot::Mutex;

/// Captures published records in memory.
///
/// Useful for tests and for in-process inspection of recent log activity;
/// `records` returns a snapshot copy, so readers never race dispatch.
pub struct MemoryHandler {
    name: String,
    records: Mutex<Vec<LogRecord>>,
}

impl MemoryHandler {
    pub fn new() -> Self {
        Self {
            name: "memory".to_string(),
            records: Mutex::new(Vec::new()),
        }
    }

    /// Override the name this handler reports.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Snapshot copy of everything captured so far.
    pub fn records(&self) -> Vec<LogRecord> {
        self.records.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }

    pub fn clear(&self) {
        self.records.lock().clear();
    }
}

impl Default for MemoryHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl Handler for MemoryHandler {
    fn publish(&self, record: &LogRecord) -> Result<()> {
        self.records.lock().push(record.clone());
        Ok(())
    }

    fn name(&self) -> &str {
        &self.name
    }
}
