//! Log record structure

use super::log_level::LogLevel;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;

// Thread-local caches for thread information to avoid repeated allocations
thread_local! {
    static THREAD_ID_CACHE: RefCell<Option<String>> = const { RefCell::new(None) };
    static THREAD_NAME_CACHE: RefCell<Option<Option<String>>> = const { RefCell::new(None) };
}

/// Get cached thread ID, computing and caching it on first access
fn get_thread_id() -> String {
    THREAD_ID_CACHE.with(|cache| {
        let mut cache = cache.borrow_mut();
        if cache.is_none() {
            *cache = Some(format!("{:?}", std::thread::current().id()));
        }
        cache.as_ref().expect("thread_id cache initialized in previous line").clone()
    })
}

/// Get cached thread name, computing and caching it on first access
fn get_thread_name() -> Option<String> {
    THREAD_NAME_CACHE.with(|cache| {
        let mut cache = cache.borrow_mut();
        if cache.is_none() {
            *cache = Some(std::thread::current().name().map(String::from));
        }
        cache.as_ref().expect("thread_name cache initialized in previous line").clone()
    })
}

/// An immutable snapshot of one log event.
///
/// Records are constructed per logging call and consumed synchronously by
/// dispatch; handlers only ever see a shared reference. `timestamp` is `None`
/// when the caller suppressed time capture, `index` is the optional caller
/// supplied sequence number.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogRecord {
    pub logger_name: String,
    pub message: String,
    pub level: LogLevel,
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<u64>,
    pub thread_id: String,
    pub thread_name: Option<String>,
}

impl LogRecord {
    /// Sanitize log message to prevent log injection attacks
    ///
    /// Replaces newlines, carriage returns, and tabs with escape sequences
    /// to prevent attackers from injecting fake log entries.
    fn sanitize_message(message: &str) -> String {
        message
            .replace('\n', "\\n")
            .replace('\r', "\\r")
            .replace('\t', "\\t")
    }

    pub fn new(logger_name: impl Into<String>, level: LogLevel, message: String) -> Self {
        Self {
            logger_name: logger_name.into(),
            message: Self::sanitize_message(&message),
            level,
            timestamp: Some(Utc::now()),
            index: None,
            thread_id: get_thread_id(),
            thread_name: get_thread_name(),
        }
    }

    pub fn with_index(mut self, index: u64) -> Self {
        self.index = Some(index);
        self
    }

    /// Suppress time capture; the record carries no timestamp.
    pub fn without_timestamp(mut self) -> Self {
        self.timestamp = None;
        self
    }

    /// The replacement record dispatched when a logging call fails mid-way.
    ///
    /// Keeps the logger name, message, index, and time-suppression policy of
    /// the failed record; the level is forced to `Fatal`.
    pub fn fatal_substitute(&self) -> Self {
        let mut substitute = Self::new(
            self.logger_name.clone(),
            LogLevel::Fatal,
            self.message.clone(),
        );
        substitute.index = self.index;
        if self.timestamp.is_none() {
            substitute.timestamp = None;
        }
        substitute
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_sanitized() {
        let record = LogRecord::new("svc", LogLevel::Info, "a\nb\rc\td".to_string());
        assert_eq!(record.message, "a\\nb\\rc\\td");
    }

    #[test]
    fn test_timestamp_captured_by_default() {
        let record = LogRecord::new("svc", LogLevel::Info, "x".to_string());
        assert!(record.timestamp.is_some());
        assert!(record.index.is_none());
    }

    #[test]
    fn test_without_timestamp() {
        let record = LogRecord::new("svc", LogLevel::Info, "x".to_string()).without_timestamp();
        assert!(record.timestamp.is_none());
    }

    #[test]
    fn test_fatal_substitute_preserves_identity() {
        let record = LogRecord::new("svc.worker", LogLevel::Warn, "boom".to_string())
            .with_index(7)
            .without_timestamp();
        let substitute = record.fatal_substitute();

        assert_eq!(substitute.logger_name, "svc.worker");
        assert_eq!(substitute.message, "boom");
        assert_eq!(substitute.level, LogLevel::Fatal);
        assert_eq!(substitute.index, Some(7));
        assert!(substitute.timestamp.is_none());
    }
}
