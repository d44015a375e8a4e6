//! Rendering of log records into output lines
//!
//! - Text: `[2025-01-08 10:30:45] ERROR importer: row rejected	{"row":17}`
//! - Json: one JSON object per record
//!
//! Sinks can also replace rendering entirely with a [`FormatFn`].

use super::log_entry::LogEntry;
use super::timestamp::TimestampFormat;
use serde_json::{Map, Value};
use std::fmt;
use std::sync::Arc;

/// User-supplied rendering function
pub type FormatFn = Arc<dyn Fn(&LogEntry) -> String + Send + Sync>;

/// Output format for log records
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable single line (default)
    #[default]
    Text,

    /// JSON object per line
    Json,
}

/// Renders a [`LogEntry`] into a line of text
#[derive(Clone, Default)]
pub struct RecordFormatter {
    use_colors: bool,
    timestamp_format: TimestampFormat,
    output_format: OutputFormat,
    format_fn: Option<FormatFn>,
}

impl RecordFormatter {
    /// Plain text formatter without colors
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    #[must_use]
    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }

    /// Replace the built-in rendering with `format_fn`
    #[must_use]
    pub fn with_format_fn(mut self, format_fn: FormatFn) -> Self {
        self.format_fn = Some(format_fn);
        self
    }

    pub fn uses_colors(&self) -> bool {
        self.use_colors
    }

    pub fn format(&self, entry: &LogEntry) -> String {
        if let Some(ref format_fn) = self.format_fn {
            return format_fn(entry);
        }
        match self.output_format {
            OutputFormat::Text => self.format_text(entry),
            OutputFormat::Json => self.format_json(entry),
        }
    }

    fn format_text(&self, entry: &LogEntry) -> String {
        let timestamp = self.timestamp_format.format(&entry.timestamp);
        let level = entry.level.to_str();
        let params = entry
            .params
            .as_ref()
            .map(|params| format!("\t{}", params))
            .unwrap_or_default();

        if self.use_colors {
            self.format_text_colored(entry, &timestamp, level, &params)
        } else {
            format!(
                "[{}] {} {}: {}{}",
                timestamp, level, entry.module, entry.message, params
            )
        }
    }

    #[cfg(feature = "console")]
    fn format_text_colored(
        &self,
        entry: &LogEntry,
        timestamp: &str,
        level: &str,
        params: &str,
    ) -> String {
        use colored::Colorize;
        let params = if params.is_empty() {
            String::new()
        } else {
            params.bright_black().to_string()
        };
        format!(
            "[{}] {} {}: {}{}",
            timestamp.bright_black(),
            entry.level.paint(level),
            entry.module,
            entry.message,
            params
        )
    }

    #[cfg(not(feature = "console"))]
    fn format_text_colored(
        &self,
        entry: &LogEntry,
        timestamp: &str,
        level: &str,
        params: &str,
    ) -> String {
        format!(
            "[{}] {} {}: {}{}",
            timestamp, level, entry.module, entry.message, params
        )
    }

    fn format_json(&self, entry: &LogEntry) -> String {
        let mut json_obj = Map::new();

        let timestamp = if self.timestamp_format.is_numeric() {
            Value::Number(entry.timestamp.timestamp_millis().into())
        } else {
            Value::String(self.timestamp_format.format(&entry.timestamp))
        };
        json_obj.insert("timestamp".to_string(), timestamp);
        json_obj.insert(
            "level".to_string(),
            Value::String(entry.level.name().to_string()),
        );
        json_obj.insert("module".to_string(), Value::String(entry.module.clone()));
        json_obj.insert("message".to_string(), Value::String(entry.message.clone()));
        if let Some(ref params) = entry.params {
            json_obj.insert("params".to_string(), params.clone());
        }

        serde_json::to_string(&Value::Object(json_obj)).unwrap_or_default()
    }
}

impl fmt::Debug for RecordFormatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordFormatter")
            .field("use_colors", &self.use_colors)
            .field("timestamp_format", &self.timestamp_format)
            .field("output_format", &self.output_format)
            .field("format_fn", &self.format_fn.as_ref().map(|_| "<fn>"))
            .finish()
    }
}
