//! # Hierlog
//!
//! A hierarchical, thread-safe Rust logging framework: a registry-owned tree
//! of named loggers with inherited severity thresholds, pluggable handlers,
//! and additive propagation of records up the tree.
//!
//! ## Features
//!
//! - **Hierarchical**: dotted logger names form a tree; levels inherit from
//!   the nearest configured ancestor and records flow to ancestor handlers
//! - **Thread Safe**: per-logger re-entrant locking, designed for concurrent
//!   logging, handler mutation, and level changes
//! - **Never Throws**: logging calls absorb handler failures instead of
//!   surfacing them to the caller
//! - **Pluggable Handlers**: console, file, in-memory, and custom sinks

pub mod core;
pub mod handlers;
pub mod macros;

pub mod prelude {
    #[cfg(feature = "console")]
    pub use crate::handlers::ConsoleHandler;
    #[cfg(feature = "file")]
    pub use crate::handlers::FileHandler;
    pub use crate::handlers::MemoryHandler;

    pub use crate::core::{
        default_manager, logger, root, root_level, set_root_level, shutdown, Handler, HandlerRef,
        LogLevel, LogManager, LogRecord, Logger, LoggerError, LoggerStream, OutputFormat, Result,
        TimestampFormat, ROOT_LOGGER_NAME,
    };
}

#[cfg(feature = "console")]
pub use crate::handlers::ConsoleHandler;
#[cfg(feature = "file")]
pub use crate::handlers::FileHandler;
pub use crate::handlers::MemoryHandler;

pub use crate::core::{
    default_manager, logger, root, root_level, set_root_level, shutdown, Handler, HandlerRef,
    LogLevel, LogManager, LogRecord, Logger, LoggerError, LoggerStream, OutputFormat, Result,
    TimestampFormat, ROOT_LOGGER_NAME,
};
