//! Logger registry: name-to-instance map, root ownership, shutdown

use super::{error::Result, log_level::LogLevel, logger::Logger};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

/// Name of the root logger.
pub const ROOT_LOGGER_NAME: &str = "";

const DEFAULT_ROOT_LEVEL: LogLevel = LogLevel::Info;

/// Owns every logger in the process and the tree structure between them.
///
/// Dotted names define the hierarchy: `"a.b.c"` is a child of `"a.b"`,
/// which is a child of `"a"`, which is a child of the root (named `""`).
/// Lookup creates missing loggers, materializing every absent ancestor so
/// parent edges always reach the root. The map holds the owning `Arc` for
/// each logger; child-to-parent edges are shared read-only handles used for
/// traversal only.
pub struct LogManager {
    loggers: RwLock<HashMap<String, Arc<Logger>>>,
}

impl LogManager {
    pub fn new() -> Self {
        let root = Arc::new(Logger::new(
            ROOT_LOGGER_NAME.to_string(),
            None,
            DEFAULT_ROOT_LEVEL,
        ));
        let mut map = HashMap::new();
        map.insert(ROOT_LOGGER_NAME.to_string(), root);
        Self {
            loggers: RwLock::new(map),
        }
    }

    /// The single root logger.
    pub fn root(&self) -> Arc<Logger> {
        Arc::clone(
            self.loggers
                .read()
                .get(ROOT_LOGGER_NAME)
                .expect("registry always holds the root logger"),
        )
    }

    /// Create-or-return the logger for `name`.
    ///
    /// Newly created loggers start at `Unset` (inheriting) and additive.
    pub fn get(&self, name: &str) -> Arc<Logger> {
        if let Some(logger) = self.loggers.read().get(name) {
            return Arc::clone(logger);
        }
        let mut map = self.loggers.write();
        Self::get_or_create(&mut map, name)
    }

    fn get_or_create(map: &mut HashMap<String, Arc<Logger>>, name: &str) -> Arc<Logger> {
        if let Some(logger) = map.get(name) {
            return Arc::clone(logger);
        }
        let parent_name = name.rsplit_once('.').map_or(ROOT_LOGGER_NAME, |(p, _)| p);
        let parent = Self::get_or_create(map, parent_name);
        let logger = Arc::new(Logger::new(
            name.to_string(),
            Some(parent),
            LogLevel::Unset,
        ));
        map.insert(name.to_string(), Arc::clone(&logger));
        logger
    }

    /// Number of loggers currently registered, the root included.
    pub fn len(&self) -> usize {
        self.loggers.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.loggers.read().is_empty()
    }
}

impl Default for LogManager {
    fn default() -> Self {
        Self::new()
    }
}

// The process-wide default manager. Created on first use, torn down by
// `shutdown`.
static DEFAULT_MANAGER: RwLock<Option<Arc<LogManager>>> = RwLock::new(None);

/// The process-wide default manager, created on first use.
pub fn default_manager() -> Arc<LogManager> {
    if let Some(manager) = DEFAULT_MANAGER.read().as_ref() {
        return Arc::clone(manager);
    }
    let mut slot = DEFAULT_MANAGER.write();
    Arc::clone(slot.get_or_insert_with(|| Arc::new(LogManager::new())))
}

/// Create-or-return a logger by name from the default manager.
pub fn logger(name: &str) -> Arc<Logger> {
    default_manager().get(name)
}

/// The default manager's root logger.
pub fn root() -> Arc<Logger> {
    default_manager().root()
}

/// The root logger's own level.
pub fn root_level() -> LogLevel {
    root().level()
}

/// Set the root logger's level; `Unset` is rejected with `InvalidArgument`.
pub fn set_root_level(level: LogLevel) -> Result<()> {
    root().set_level(level)
}

/// Tear down the default manager, dropping its name-to-logger map.
///
/// Logger handles obtained before this call must not be used afterwards;
/// the next `logger`/`root` call starts a fresh registry.
pub fn shutdown() {
    DEFAULT_MANAGER.write().take();
}
