//! Logger tree node: level resolution, handler management, dispatch

use super::{
    error::{LoggerError, Result},
    handler::HandlerRef,
    log_level::LogLevel,
    log_record::LogRecord,
    stream::LoggerStream,
};
use parking_lot::{ReentrantMutex, RwLock};
use std::cell::RefCell;
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// A named node in the logger tree.
///
/// Loggers are created by the registry (`LogManager`), which owns them and
/// establishes parent edges from the dotted name structure. Each logger
/// carries its own severity level (`Unset` on non-root loggers means
/// "inherit"), an additivity flag, and an ordered handler list guarded by a
/// re-entrant per-logger lock.
///
/// Logging entry points never return an error and never panic across the
/// call boundary: emission-time failures are converted into a single
/// FATAL-level substitute record and redispatched.
pub struct Logger {
    name: String,
    // Read-only back-edge for traversal; the registry map is the owner.
    parent: Option<Arc<Logger>>,
    level: RwLock<LogLevel>,
    additive: AtomicBool,
    handlers: ReentrantMutex<RefCell<Vec<HandlerRef>>>,
}

impl Logger {
    pub(crate) fn new(name: String, parent: Option<Arc<Logger>>, level: LogLevel) -> Self {
        Self {
            name,
            parent,
            level: RwLock::new(level),
            additive: AtomicBool::new(true),
            handlers: ReentrantMutex::new(RefCell::new(Vec::new())),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parent(&self) -> Option<&Arc<Logger>> {
        self.parent.as_ref()
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// This logger's own level, `Unset` meaning "inherit".
    pub fn level(&self) -> LogLevel {
        *self.level.read()
    }

    /// Set this logger's level.
    ///
    /// Non-root loggers accept any level, including `Unset` to resume
    /// inheriting. The root must always resolve to a concrete level, so
    /// setting `Unset` on it fails with `InvalidArgument`.
    pub fn set_level(&self, level: LogLevel) -> Result<()> {
        if self.is_root() && !level.is_concrete() {
            return Err(LoggerError::invalid_argument(
                "cannot set level UNSET on the root logger",
            ));
        }
        *self.level.write() = level;
        Ok(())
    }

    /// Whether records dispatched here also flow to the parent's handlers.
    pub fn additive(&self) -> bool {
        self.additive.load(Ordering::Relaxed)
    }

    pub fn set_additive(&self, additive: bool) {
        self.additive.store(additive, Ordering::Relaxed);
    }

    /// The level this logger actually enforces: its own level, or the
    /// nearest ancestor's concrete level when its own is `Unset`.
    ///
    /// Resolved lazily on every check so a runtime level change on any
    /// ancestor is instantly visible to all descendants.
    pub fn effective_level(&self) -> LogLevel {
        let mut current = self;
        loop {
            let level = *current.level.read();
            if level.is_concrete() {
                return level;
            }
            match &current.parent {
                Some(parent) => current = parent,
                // The registry never leaves the root at Unset.
                None => return LogLevel::default(),
            }
        }
    }

    /// Whether a record at `level` would pass this logger's gate.
    pub fn is_enabled(&self, level: LogLevel) -> bool {
        level >= self.effective_level()
    }

    // ---- handler management -------------------------------------------

    /// Append `handler` unless an identical instance is already attached.
    /// Duplicate adds are a no-op; insertion order is preserved.
    pub fn add_handler(&self, handler: HandlerRef) {
        let guard = self.handlers.lock();
        let mut handlers = guard.borrow_mut();
        if !handlers.iter().any(|existing| Arc::ptr_eq(existing, &handler)) {
            handlers.push(handler);
        }
    }

    /// Remove the first handler matching `handler` by identity; no-op when
    /// absent.
    pub fn remove_handler(&self, handler: &HandlerRef) {
        let guard = self.handlers.lock();
        let mut handlers = guard.borrow_mut();
        if let Some(pos) = handlers.iter().position(|existing| Arc::ptr_eq(existing, handler)) {
            handlers.remove(pos);
        }
    }

    /// Remove the first handler whose reported name matches; no-op when
    /// absent.
    pub fn remove_handler_by_name(&self, name: &str) {
        let guard = self.handlers.lock();
        let mut handlers = guard.borrow_mut();
        if let Some(pos) = handlers.iter().position(|h| h.name() == name) {
            handlers.remove(pos);
        }
    }

    /// Snapshot copy of the attached handlers, never a live view.
    pub fn handlers(&self) -> Vec<HandlerRef> {
        self.handlers.lock().borrow().clone()
    }

    pub fn find_handler(&self, name: &str) -> Option<HandlerRef> {
        self.handlers
            .lock()
            .borrow()
            .iter()
            .find(|h| h.name() == name)
            .cloned()
    }

    pub fn clear_handlers(&self) {
        self.handlers.lock().borrow_mut().clear();
    }

    // ---- dispatch ------------------------------------------------------

    /// Invoke every attached handler in insertion order, then recurse into
    /// the parent while this logger's lock is still held.
    ///
    /// Lock acquisition order is always child-before-parent and the
    /// ancestor chain is acyclic, so concurrent dispatch starting at
    /// different loggers cannot deadlock. A failing handler stops later
    /// handlers of the same pass; the error surfaces to the emission
    /// boundary, never to the logging caller.
    fn call_handlers(&self, record: &LogRecord) -> Result<()> {
        let guard = self.handlers.lock();
        // Snapshot under the lock: a handler re-entering this logger can
        // mutate the list without invalidating this pass.
        let snapshot: Vec<HandlerRef> = guard.borrow().clone();
        for handler in &snapshot {
            handler.publish(record)?;
        }
        if self.additive() {
            if let Some(parent) = &self.parent {
                parent.call_handlers(record)?;
            }
        }
        drop(guard);
        Ok(())
    }

    /// The failure-absorbing boundary: the first pass captures both errors
    /// and panics; on failure a FATAL substitute is dispatched exactly
    /// once, and a failure of that pass is deliberately left uncaught.
    fn emit(&self, record: LogRecord) {
        let first = panic::catch_unwind(AssertUnwindSafe(|| self.call_handlers(&record)));
        if !matches!(first, Ok(Ok(()))) {
            let substitute = record.fatal_substitute();
            let _ = self.call_handlers(&substitute);
        }
    }

    // ---- logging surface ----------------------------------------------

    /// Log a pre-formatted message at `level`.
    ///
    /// When the gate is closed this is a no-op: no record is built and no
    /// handler is touched.
    pub fn log(&self, level: LogLevel, message: impl Into<String>) {
        if !self.is_enabled(level) {
            return;
        }
        self.emit(LogRecord::new(self.name.clone(), level, message.into()));
    }

    /// Log a message carrying a caller-supplied sequence index.
    pub fn log_indexed(&self, level: LogLevel, index: u64, message: impl Into<String>) {
        if !self.is_enabled(level) {
            return;
        }
        self.emit(LogRecord::new(self.name.clone(), level, message.into()).with_index(index));
    }

    /// Log a message without capturing a timestamp.
    pub fn log_no_time(&self, level: LogLevel, message: impl Into<String>) {
        if !self.is_enabled(level) {
            return;
        }
        self.emit(LogRecord::new(self.name.clone(), level, message.into()).without_timestamp());
    }

    /// Log a lazily built message. `build` runs only when the gate is open,
    /// keeping disabled calls free of formatting cost; a panic inside it is
    /// absorbed like any other emission failure.
    pub fn log_with<F>(&self, level: LogLevel, build: F)
    where
        F: FnOnce() -> String,
    {
        if !self.is_enabled(level) {
            return;
        }
        match panic::catch_unwind(AssertUnwindSafe(build)) {
            Ok(message) => self.emit(LogRecord::new(self.name.clone(), level, message)),
            Err(_) => {
                let substitute = LogRecord::new(
                    self.name.clone(),
                    LogLevel::Fatal,
                    "log message formatting failed".to_string(),
                );
                let _ = self.call_handlers(&substitute);
            }
        }
    }

    /// Stream-style logging: the returned stream buffers writes and emits
    /// one record at `level` when dropped. The gate is captured here, so a
    /// closed stream ignores writes.
    pub fn stream(&self, level: LogLevel) -> LoggerStream<'_> {
        LoggerStream::new(self, level, self.is_enabled(level))
    }

    #[inline]
    pub fn debug(&self, message: impl Into<String>) {
        self.log(LogLevel::Debug, message);
    }

    #[inline]
    pub fn info(&self, message: impl Into<String>) {
        self.log(LogLevel::Info, message);
    }

    #[inline]
    pub fn warn(&self, message: impl Into<String>) {
        self.log(LogLevel::Warn, message);
    }

    #[inline]
    pub fn error(&self, message: impl Into<String>) {
        self.log(LogLevel::Error, message);
    }

    #[inline]
    pub fn alert(&self, message: impl Into<String>) {
        self.log(LogLevel::Alert, message);
    }

    #[inline]
    pub fn fatal(&self, message: impl Into<String>) {
        self.log(LogLevel::Fatal, message);
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.name)
            .field("level", &self.level())
            .field("additive", &self.additive())
            .finish_non_exhaustive()
    }
}
