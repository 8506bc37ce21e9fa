//! Stream-style logging adapter

use super::{log_level::LogLevel, logger::Logger};
use std::fmt;

/// A `fmt::Write` adapter that buffers writes and emits them as one record
/// when dropped.
///
/// The gate is evaluated once when the stream is created; a stream obtained
/// while its level is disabled silently ignores all writes, keeping the
/// disabled path cheap.
///
/// ```
/// use hierlog::{logger, LogLevel};
/// use std::fmt::Write;
///
/// let log = logger("svc");
/// let mut stream = log.stream(LogLevel::Info);
/// let _ = write!(stream, "processed {} items", 3);
/// // record emitted here, when the stream goes out of scope
/// ```
pub struct LoggerStream<'a> {
    logger: &'a Logger,
    level: LogLevel,
    enabled: bool,
    buffer: String,
}

impl<'a> LoggerStream<'a> {
    pub(crate) fn new(logger: &'a Logger, level: LogLevel, enabled: bool) -> Self {
        Self {
            logger,
            level,
            enabled,
            buffer: String::new(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Emit the buffered message now instead of waiting for drop.
    pub fn flush(&mut self) {
        if self.enabled && !self.buffer.is_empty() {
            self.logger.log(self.level, std::mem::take(&mut self.buffer));
        } else {
            self.buffer.clear();
        }
    }
}

impl fmt::Write for LoggerStream<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        if self.enabled {
            self.buffer.push_str(s);
        }
        Ok(())
    }
}

impl Drop for LoggerStream<'_> {
    fn drop(&mut self) {
        self.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::Result;
    use crate::core::handler::{Handler, HandlerRef};
    use crate::core::log_record::LogRecord;
    use parking_lot::Mutex;
    use std::fmt::Write;
    use std::sync::Arc;

    struct Capture {
        records: Mutex<Vec<LogRecord>>,
    }

    impl Handler for Capture {
        fn publish(&self, record: &LogRecord) -> Result<()> {
            self.records.lock().push(record.clone());
            Ok(())
        }

        fn name(&self) -> &str {
            "capture"
        }
    }

    #[test]
    fn test_stream_emits_on_drop() {
        let logger = Logger::new(String::new(), None, LogLevel::Info);
        let capture = Arc::new(Capture {
            records: Mutex::new(Vec::new()),
        });
        logger.add_handler(Arc::clone(&capture) as HandlerRef);

        {
            let mut stream = logger.stream(LogLevel::Info);
            write!(stream, "count={}", 3).unwrap();
            write!(stream, " done").unwrap();
            assert!(capture.records.lock().is_empty());
        }

        let records = capture.records.lock();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].message, "count=3 done");
        assert_eq!(records[0].level, LogLevel::Info);
    }

    #[test]
    fn test_disabled_stream_ignores_writes() {
        let logger = Logger::new(String::new(), None, LogLevel::Warn);
        let capture = Arc::new(Capture {
            records: Mutex::new(Vec::new()),
        });
        logger.add_handler(Arc::clone(&capture) as HandlerRef);

        {
            let mut stream = logger.stream(LogLevel::Info);
            assert!(!stream.is_enabled());
            write!(stream, "suppressed").unwrap();
        }

        assert!(capture.records.lock().is_empty());
    }

    #[test]
    fn test_empty_stream_emits_nothing() {
        let logger = Logger::new(String::new(), None, LogLevel::Info);
        let capture = Arc::new(Capture {
            records: Mutex::new(Vec::new()),
        });
        logger.add_handler(Arc::clone(&capture) as HandlerRef);

        drop(logger.stream(LogLevel::Info));
        assert!(capture.records.lock().is_empty());
    }
}
