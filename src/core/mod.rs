//! Core logging types and traits

pub mod context;
pub mod error;
pub mod formatter;
pub mod log_entry;
pub mod log_level;
pub mod logger;
pub mod metrics;
pub mod sink;
pub mod summarizer;
pub mod timestamp;

pub use context::{LoggingContext, LoggingContextBuilder};
pub use error::{LoggerError, Result};
pub use formatter::{FormatFn, OutputFormat, RecordFormatter};
pub use log_entry::LogEntry;
pub use log_level::LogLevel;
pub use logger::Logger;
pub use metrics::DispatchMetrics;
pub use sink::Sink;
pub use summarizer::{HaltReason, Summarizer, SummarizerConfig, SummaryCounts};
pub use timestamp::TimestampFormat;
