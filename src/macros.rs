//! Logging macros for ergonomic log message formatting.
//!
//! These macros provide a convenient interface for logging with automatic
//! string formatting, similar to `println!` and `format!`. Formatting is
//! two-phase: the level gate is checked first and the format arguments are
//! only evaluated when the gate is open, so disabled calls stay cheap.
//!
//! # Examples
//!
//! ```
//! use hierlog::prelude::*;
//! use hierlog::info;
//!
//! let log = hierlog::logger("svc");
//!
//! // Basic logging
//! info!(log, "Server started");
//!
//! // With format arguments
//! let port = 8080;
//! info!(log, "Server listening on port {}", port);
//! ```

/// Log a message with automatic formatting.
///
/// # Examples
///
/// ```
/// # use hierlog::prelude::*;
/// # let log = hierlog::logger("svc");
/// use hierlog::log;
/// log!(log, LogLevel::Info, "Simple message");
/// log!(log, LogLevel::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log_with($level, || format!($($arg)+))
    };
}

/// Log a debug-level message.
///
/// # Examples
///
/// ```
/// # use hierlog::prelude::*;
/// # let log = hierlog::logger("svc");
/// use hierlog::debug;
/// debug!(log, "Debug information");
/// debug!(log, "Counter value: {}", 10);
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message.
///
/// # Examples
///
/// ```
/// # use hierlog::prelude::*;
/// # let log = hierlog::logger("svc");
/// use hierlog::info;
/// info!(log, "Application started");
/// info!(log, "Processing {} items", 100);
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a warning-level message.
///
/// # Examples
///
/// ```
/// # use hierlog::prelude::*;
/// # let log = hierlog::logger("svc");
/// use hierlog::warn;
/// warn!(log, "Low disk space");
/// warn!(log, "Retry attempt {} of {}", 3, 5);
/// ```
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warn, $($arg)+)
    };
}

/// Log an error-level message.
///
/// # Examples
///
/// ```
/// # use hierlog::prelude::*;
/// # let log = hierlog::logger("svc");
/// use hierlog::error;
/// error!(log, "Failed to connect to database");
/// error!(log, "Error code: {}, message: {}", 500, "Internal error");
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Log an alert-level message.
///
/// # Examples
///
/// ```
/// # use hierlog::prelude::*;
/// # let log = hierlog::logger("svc");
/// use hierlog::alert;
/// alert!(log, "Replica set degraded");
/// alert!(log, "Only {} replicas healthy", 1);
/// ```
#[macro_export]
macro_rules! alert {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Alert, $($arg)+)
    };
}

/// Log a fatal-level message.
///
/// # Examples
///
/// ```
/// # use hierlog::prelude::*;
/// # let log = hierlog::logger("svc");
/// use hierlog::fatal;
/// fatal!(log, "Critical system failure");
/// fatal!(log, "Unable to recover from error: {}", "disk full");
/// ```
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Fatal, $($arg)+)
    };
}
