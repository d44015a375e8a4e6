//! Log record structure

use super::log_level::LogLevel;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single log record, built once per logging call and shared read-only
/// with every sink.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub level: LogLevel,
    /// Message text with `\n`, `\r` and `\t` escaped as `\\n`, `\\r`, `\\t`
    pub message: String,
    pub module: String,
    pub timestamp: DateTime<Utc>,
    /// Opaque caller payload, never inspected by the summarizer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<Value>,
}

impl LogEntry {
    /// Sanitize log message to prevent log injection attacks
    ///
    /// Replaces newlines, carriage returns, and tabs with escape sequences
    /// so one call always renders as one line.
    fn sanitize_message(message: &str) -> String {
        message
            .replace('\n', "\\n")
            .replace('\r', "\\r")
            .replace('\t', "\\t")
    }

    /// Build a record stamped with the current time
    pub fn new(level: LogLevel, module: impl Into<String>, message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            level,
            message: Self::sanitize_message(&message),
            module: module.into(),
            timestamp: Utc::now(),
            params: None,
        }
    }

    pub fn with_params(mut self, params: Value) -> Self {
        self.params = Some(params);
        self
    }

    /// Override the timestamp (mostly useful for deterministic formatting)
    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_entry() {
        let before = Utc::now();
        let entry = LogEntry::new(LogLevel::Warn, "importer", "row skipped");
        assert_eq!(entry.level, LogLevel::Warn);
        assert_eq!(entry.module, "importer");
        assert_eq!(entry.message, "row skipped");
        assert!(entry.params.is_none());
        assert!(entry.timestamp >= before);
    }

    #[test]
    fn test_message_sanitized() {
        let entry = LogEntry::new(LogLevel::Info, "m", "line1\nline2\tx\r");
        assert_eq!(entry.message, "line1\\nline2\\tx\\r");
    }

    #[test]
    fn test_params_passed_through() {
        let entry =
            LogEntry::new(LogLevel::Error, "m", "bad row").with_params(json!({"row": 17, "x": [1, null]}));
        assert_eq!(entry.params, Some(json!({"row": 17, "x": [1, null]})));
    }
}
