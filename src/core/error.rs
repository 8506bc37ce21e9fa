//! Error types for the logging core

pub type Result<T> = std::result::Result<T, LoggerError>;

/// Failure taxonomy.
///
/// Configuration-time misuse (`InvalidArgument`) is reported to the caller
/// as a hard error. Failures raised while a record is being emitted never
/// reach the logging call's caller; the dispatch path absorbs them.
#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Programmer misuse detected during setup
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// IO error with context
    #[error("IO error while {operation}: {message}")]
    IoOperation {
        operation: String,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Handler rejected or failed to publish a record
    #[error("handler '{handler}' failed to publish: {message}")]
    Publish { handler: String, message: String },

    /// Writer error (generic)
    #[error("writer error: {0}")]
    Writer(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl LoggerError {
    /// Create an invalid argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        LoggerError::InvalidArgument(message.into())
    }

    /// Create an IO operation error with context
    pub fn io_operation(
        operation: impl Into<String>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        LoggerError::IoOperation {
            operation: operation.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a publish failure for a named handler
    pub fn publish(handler: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::Publish {
            handler: handler.into(),
            message: message.into(),
        }
    }

    /// Create a writer error (generic)
    pub fn writer<S: Into<String>>(msg: S) -> Self {
        LoggerError::Writer(msg.into())
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        LoggerError::Other(msg.into())
    }
}
