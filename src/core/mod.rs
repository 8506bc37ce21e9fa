//! Core logger types and traits

pub mod error;
pub mod handler;
pub mod log_level;
pub mod log_record;
pub mod logger;
pub mod output_format;
pub mod registry;
pub mod stream;
pub mod timestamp;

pub use error::{LoggerError, Result};
pub use handler::{Handler, HandlerRef};
pub use log_level::LogLevel;
pub use log_record::LogRecord;
pub use logger::Logger;
pub use output_format::OutputFormat;
pub use registry::{
    default_manager, logger, root, root_level, set_root_level, shutdown, LogManager,
    ROOT_LOGGER_NAME,
};
pub use stream::LoggerStream;
pub use timestamp::TimestampFormat;
