//! Console handler implementation

use crate::core::{Handler, LogLevel, LogRecord, OutputFormat, Result, TimestampFormat};
use colored::Colorize;

/// Writes records to the terminal, routing Error/Alert/Fatal to stderr.
pub struct ConsoleHandler {
    name: String,
    use_colors: bool,
    timestamp_format: TimestampFormat,
    output_format: OutputFormat,
}

impl ConsoleHandler {
    pub fn new() -> Self {
        Self {
            name: "console".to_string(),
            use_colors: true,
            timestamp_format: TimestampFormat::default(),
            output_format: OutputFormat::default(),
        }
    }

    pub fn with_colors(use_colors: bool) -> Self {
        Self {
            use_colors,
            ..Self::new()
        }
    }

    /// Override the name this handler reports, so several console handlers
    /// can be told apart by `find_handler`/`remove_handler_by_name`.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    #[must_use]
    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }

    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    /// Format as text with optional colors
    fn format_text(&self, record: &LogRecord) -> String {
        let output = OutputFormat::Text.format(record, &self.timestamp_format);
        if self.use_colors {
            output.color(record.level.color_code()).to_string()
        } else {
            output
        }
    }
}

impl Default for ConsoleHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl Handler for ConsoleHandler {
    fn publish(&self, record: &LogRecord) -> Result<()> {
        let output = match self.output_format {
            OutputFormat::Text => self.format_text(record),
            OutputFormat::Json => self.output_format.format(record, &self.timestamp_format),
        };

        // Route Error and above to stderr, others to stdout
        match record.level {
            LogLevel::Error | LogLevel::Alert | LogLevel::Fatal => eprintln!("{}", output),
            _ => println!("{}", output),
        }
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        use std::io::Write;
        // Flush both stdout and stderr since we write to both
        std::io::stdout().flush()?;
        std::io::stderr().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        &self.name
    }
}
