//! Per-module logger facade

use super::{context::LoggingContext, log_entry::LogEntry, log_level::LogLevel};
use serde_json::Value;
use std::sync::Arc;

/// Logger bound to one module name
///
/// Every call builds one [`LogEntry`], stamped at call time, and hands it
/// to all sinks of the shared [`LoggingContext`]. The logger itself does
/// not filter. Methods return `&Self` so calls can be chained.
///
/// # Example
///
/// ```
/// use rust_log_summarizer::prelude::*;
/// use serde_json::json;
///
/// let context = LoggingContext::builder()
///     .summarizer(SummarizerConfig::new().threshold(LogLevel::Warn, 2))
///     .build()
///     .unwrap();
/// let log = context.create_logger("loader");
///
/// log.info("batch started")
///     .warn_with("slow row", json!({"row": 4}))
///     .warn("slow row");
///
/// assert!(!context.can_continue());
/// ```
#[derive(Clone)]
pub struct Logger {
    module: String,
    context: Arc<LoggingContext>,
}

impl Logger {
    pub fn new(context: Arc<LoggingContext>, module: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            context,
        }
    }

    pub fn module(&self) -> &str {
        &self.module
    }

    pub fn context(&self) -> &Arc<LoggingContext> {
        &self.context
    }

    pub fn log(&self, level: LogLevel, message: impl Into<String>, params: Option<Value>) -> &Self {
        let mut entry = LogEntry::new(level, self.module.as_str(), message);
        entry.params = params;
        self.context.dispatch(&entry);
        self
    }

    #[inline]
    pub fn fatal(&self, message: impl Into<String>) -> &Self {
        self.log(LogLevel::Fatal, message, None)
    }

    #[inline]
    pub fn error(&self, message: impl Into<String>) -> &Self {
        self.log(LogLevel::Error, message, None)
    }

    #[inline]
    pub fn warn(&self, message: impl Into<String>) -> &Self {
        self.log(LogLevel::Warn, message, None)
    }

    #[inline]
    pub fn success(&self, message: impl Into<String>) -> &Self {
        self.log(LogLevel::Success, message, None)
    }

    #[inline]
    pub fn info(&self, message: impl Into<String>) -> &Self {
        self.log(LogLevel::Info, message, None)
    }

    #[inline]
    pub fn debug(&self, message: impl Into<String>) -> &Self {
        self.log(LogLevel::Debug, message, None)
    }

    #[inline]
    pub fn trace(&self, message: impl Into<String>) -> &Self {
        self.log(LogLevel::Trace, message, None)
    }

    pub fn fatal_with(&self, message: impl Into<String>, params: Value) -> &Self {
        self.log(LogLevel::Fatal, message, Some(params))
    }

    pub fn error_with(&self, message: impl Into<String>, params: Value) -> &Self {
        self.log(LogLevel::Error, message, Some(params))
    }

    pub fn warn_with(&self, message: impl Into<String>, params: Value) -> &Self {
        self.log(LogLevel::Warn, message, Some(params))
    }

    pub fn success_with(&self, message: impl Into<String>, params: Value) -> &Self {
        self.log(LogLevel::Success, message, Some(params))
    }

    pub fn info_with(&self, message: impl Into<String>, params: Value) -> &Self {
        self.log(LogLevel::Info, message, Some(params))
    }

    pub fn debug_with(&self, message: impl Into<String>, params: Value) -> &Self {
        self.log(LogLevel::Debug, message, Some(params))
    }

    pub fn trace_with(&self, message: impl Into<String>, params: Value) -> &Self {
        self.log(LogLevel::Trace, message, Some(params))
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger").field("module", &self.module).finish()
    }
}
