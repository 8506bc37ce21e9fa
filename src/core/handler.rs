//! Handler trait for log output destinations

use super::{error::Result, log_record::LogRecord};
use std::sync::Arc;

/// A sink that receives and outputs log records.
///
/// One handler instance may be attached to several loggers and published
/// from several threads at once, so implementations guard their own writers.
/// Durability, buffering, and delivery are handler-defined.
pub trait Handler: Send + Sync {
    fn publish(&self, record: &LogRecord) -> Result<()>;

    fn flush(&self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str;
}

/// Shared handle to a handler; identity comparisons use `Arc::ptr_eq`.
pub type HandlerRef = Arc<dyn Handler>;
