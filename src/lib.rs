//! # Rust Log Summarizer
//!
//! A leveled logging facade with pluggable sinks and an error-budget
//! summarizer.
//!
//! ## Features
//!
//! - **Seven levels**: fatal, error, warn, success, info, debug, trace
//! - **Sinks**: console (colored), file, and custom [`Sink`] implementations
//! - **Summarizer**: per-level counters with thresholds that tell a batch
//!   job when to stop
//! - **Thread Safe**: loggers share one [`LoggingContext`] across threads
//!
//! ## Example
//!
//! ```
//! use rust_log_summarizer::prelude::*;
//!
//! fn run() -> Result<()> {
//!     let context = LoggingContext::builder()
//!         .sink(ConsoleSink::new().with_min_level(LogLevel::Warn))
//!         .summarizer(SummarizerConfig::new().threshold(LogLevel::Error, 3))
//!         .build()?;
//!     let log = context.create_logger("import");
//!
//!     for row in 0..10 {
//!         if row % 4 == 0 {
//!             log.error(format!("row {} rejected", row));
//!         }
//!         context.try_continue()?;
//!     }
//!     Ok(())
//! }
//!
//! let err = run().unwrap_err();
//! assert!(err.is_policy_halt());
//! ```

pub mod core;
pub mod macros;
pub mod sinks;

pub mod prelude {
    #[cfg(feature = "console")]
    pub use crate::sinks::{ConsoleSink, ConsoleTarget};
    #[cfg(feature = "file")]
    pub use crate::sinks::FileSink;
    pub use crate::core::{
        DispatchMetrics, FormatFn, HaltReason, LogEntry, LogLevel, Logger, LoggerError,
        LoggingContext, LoggingContextBuilder, OutputFormat, RecordFormatter, Result, Sink,
        Summarizer, SummarizerConfig, SummaryCounts, TimestampFormat,
    };
}

#[cfg(feature = "console")]
pub use self::sinks::{ConsoleSink, ConsoleTarget};
#[cfg(feature = "file")]
pub use self::sinks::FileSink;
pub use self::core::{
    DispatchMetrics, FormatFn, HaltReason, LogEntry, LogLevel, Logger, LoggerError,
    LoggingContext, LoggingContextBuilder, OutputFormat, RecordFormatter, Result, Sink,
    Summarizer, SummarizerConfig, SummaryCounts, TimestampFormat,
};
