//! Timestamp formatting for handler output

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Placeholder printed for records whose time capture was suppressed.
const NO_TIMESTAMP: &str = "-";

/// Timestamp rendering options for the shipped handlers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// ISO 8601 with milliseconds: `2025-01-08T10:30:45.123Z` (default)
    #[default]
    Iso8601,

    /// RFC 3339 with timezone offset: `2025-01-08T10:30:45+00:00`
    Rfc3339,

    /// Unix timestamp in milliseconds: `1736332245123`
    UnixMillis,

    /// Custom strftime format string
    Custom(String),
}

impl TimestampFormat {
    #[must_use]
    pub fn format(&self, datetime: &DateTime<Utc>) -> String {
        match self {
            TimestampFormat::Iso8601 => datetime.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string(),
            TimestampFormat::Rfc3339 => datetime.to_rfc3339(),
            TimestampFormat::UnixMillis => datetime.timestamp_millis().to_string(),
            TimestampFormat::Custom(format_str) => datetime.format(format_str).to_string(),
        }
    }

    /// Format a record timestamp, rendering a suppressed one as `-`.
    #[must_use]
    pub fn format_opt(&self, datetime: Option<&DateTime<Utc>>) -> String {
        match datetime {
            Some(datetime) => self.format(datetime),
            None => NO_TIMESTAMP.to_string(),
        }
    }
}
