//! Record rendering shared by the shipped handlers

use super::log_record::LogRecord;
use super::timestamp::TimestampFormat;

/// Output format for log records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text format (default)
    ///
    /// Example: `[2025-01-08T10:30:45.123Z] [ERROR] svc.worker - connection lost`
    #[default]
    Text,

    /// JSON format for machine processing
    ///
    /// Example: `{"timestamp":"2025-01-08T10:30:45.123Z","level":"ERROR","logger":"svc.worker","message":"connection lost"}`
    Json,
}

impl OutputFormat {
    /// Render a record according to this format.
    pub fn format(&self, record: &LogRecord, timestamp_format: &TimestampFormat) -> String {
        match self {
            OutputFormat::Text => Self::format_text(record, timestamp_format),
            OutputFormat::Json => Self::format_json(record, timestamp_format),
        }
    }

    fn format_text(record: &LogRecord, timestamp_format: &TimestampFormat) -> String {
        let timestamp_str = timestamp_format.format_opt(record.timestamp.as_ref());
        let logger_name = if record.logger_name.is_empty() {
            "root"
        } else {
            &record.logger_name
        };

        let mut base = format!(
            "[{}] [{:5}] {} - {}",
            timestamp_str,
            record.level.to_str(),
            logger_name,
            record.message
        );

        if let Some(index) = record.index {
            base.push_str(&format!(" (#{})", index));
        }

        base
    }

    fn format_json(record: &LogRecord, timestamp_format: &TimestampFormat) -> String {
        let mut json_obj = serde_json::Map::new();

        json_obj.insert(
            "timestamp".to_string(),
            match (&record.timestamp, timestamp_format) {
                (Some(ts), TimestampFormat::UnixMillis) => {
                    serde_json::Value::Number(ts.timestamp_millis().into())
                }
                (Some(ts), format) => serde_json::Value::String(format.format(ts)),
                (None, _) => serde_json::Value::Null,
            },
        );
        json_obj.insert(
            "level".to_string(),
            serde_json::Value::String(record.level.to_str().to_string()),
        );
        json_obj.insert(
            "logger".to_string(),
            serde_json::Value::String(record.logger_name.clone()),
        );
        json_obj.insert(
            "message".to_string(),
            serde_json::Value::String(record.message.clone()),
        );
        if let Some(index) = record.index {
            json_obj.insert("index".to_string(), serde_json::Value::Number(index.into()));
        }
        json_obj.insert(
            "thread_id".to_string(),
            serde_json::Value::String(record.thread_id.clone()),
        );
        if let Some(ref name) = record.thread_name {
            json_obj.insert(
                "thread_name".to_string(),
                serde_json::Value::String(name.clone()),
            );
        }

        serde_json::to_string(&serde_json::Value::Object(json_obj)).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::log_level::LogLevel;

    #[test]
    fn test_text_format_contains_fields() {
        let record = LogRecord::new("svc.worker", LogLevel::Error, "connection lost".to_string());
        let output = OutputFormat::Text.format(&record, &TimestampFormat::Iso8601);
        assert!(output.contains("[ERROR]"));
        assert!(output.contains("svc.worker"));
        assert!(output.contains("connection lost"));
    }

    #[test]
    fn test_text_format_root_and_index() {
        let record = LogRecord::new("", LogLevel::Warn, "low disk".to_string()).with_index(9);
        let output = OutputFormat::Text.format(&record, &TimestampFormat::Iso8601);
        assert!(output.contains("root"));
        assert!(output.contains("(#9)"));
    }

    #[test]
    fn test_text_format_suppressed_timestamp() {
        let record =
            LogRecord::new("svc", LogLevel::Info, "timeless".to_string()).without_timestamp();
        let output = OutputFormat::Text.format(&record, &TimestampFormat::Iso8601);
        assert!(output.starts_with("[-]"));
    }

    #[test]
    fn test_json_format_round_trips() {
        let record =
            LogRecord::new("svc", LogLevel::Info, "hello".to_string()).with_index(3);
        let output = OutputFormat::Json.format(&record, &TimestampFormat::Iso8601);
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["level"], "INFO");
        assert_eq!(value["logger"], "svc");
        assert_eq!(value["message"], "hello");
        assert_eq!(value["index"], 3);
        assert!(value["timestamp"].is_string());
    }

    #[test]
    fn test_json_format_null_timestamp() {
        let record =
            LogRecord::new("svc", LogLevel::Info, "timeless".to_string()).without_timestamp();
        let output = OutputFormat::Json.format(&record, &TimestampFormat::Iso8601);
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert!(value["timestamp"].is_null());
    }
}
