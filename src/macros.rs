//! Logging macros with `format!`-style arguments
//!
//! Each macro expands to a call to [`Logger::log`](crate::Logger::log)
//! without params.
//!
//! # Examples
//!
//! ```
//! use rust_log_summarizer::prelude::*;
//! use rust_log_summarizer::{info, warn};
//!
//! let context = LoggingContext::builder()
//!     .summarizer(SummarizerConfig::new())
//!     .build()
//!     .unwrap();
//! let log = context.create_logger("server");
//!
//! info!(log, "Server started");
//! let port = 8080;
//! warn!(log, "Port {} already in use, retrying", port);
//!
//! assert_eq!(context.sum_log().get(LogLevel::Warn), 1);
//! ```

/// Log a message at an explicit level.
///
/// # Examples
///
/// ```
/// # use rust_log_summarizer::prelude::*;
/// # let context = std::sync::Arc::new(LoggingContext::new());
/// # let log = context.create_logger("example");
/// use rust_log_summarizer::log;
/// log!(log, LogLevel::Info, "Simple message");
/// log!(log, LogLevel::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log($level, format!($($arg)+), None)
    };
}

/// Log a trace-level message.
///
/// # Examples
///
/// ```
/// # use rust_log_summarizer::prelude::*;
/// # let context = std::sync::Arc::new(LoggingContext::new());
/// # let log = context.create_logger("example");
/// use rust_log_summarizer::trace;
/// trace!(log, "Entering parse_row()");
/// trace!(log, "Row index: {}", 7);
/// ```
#[macro_export]
macro_rules! trace {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Trace, $($arg)+)
    };
}

/// Log a debug-level message.
///
/// # Examples
///
/// ```
/// # use rust_log_summarizer::prelude::*;
/// # let context = std::sync::Arc::new(LoggingContext::new());
/// # let log = context.create_logger("example");
/// use rust_log_summarizer::debug;
/// debug!(log, "Cache warmed");
/// debug!(log, "Cache entries: {}", 128);
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message.
///
/// # Examples
///
/// ```
/// # use rust_log_summarizer::prelude::*;
/// # let context = std::sync::Arc::new(LoggingContext::new());
/// # let log = context.create_logger("example");
/// use rust_log_summarizer::info;
/// info!(log, "Import started");
/// info!(log, "Processing {} files", 12);
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a success-level message.
///
/// # Examples
///
/// ```
/// # use rust_log_summarizer::prelude::*;
/// # let context = std::sync::Arc::new(LoggingContext::new());
/// # let log = context.create_logger("example");
/// use rust_log_summarizer::success;
/// success!(log, "Batch committed");
/// success!(log, "Committed {} rows", 500);
/// ```
#[macro_export]
macro_rules! success {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Success, $($arg)+)
    };
}

/// Log a warning-level message.
///
/// # Examples
///
/// ```
/// # use rust_log_summarizer::prelude::*;
/// # let context = std::sync::Arc::new(LoggingContext::new());
/// # let log = context.create_logger("example");
/// use rust_log_summarizer::warn;
/// warn!(log, "Slow row");
/// warn!(log, "Retry attempt {} of {}", 3, 5);
/// ```
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warn, $($arg)+)
    };
}

/// Log an error-level message.
///
/// # Examples
///
/// ```
/// # use rust_log_summarizer::prelude::*;
/// # let context = std::sync::Arc::new(LoggingContext::new());
/// # let log = context.create_logger("example");
/// use rust_log_summarizer::error;
/// error!(log, "Row rejected");
/// error!(log, "Rejected row {}", 17);
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Log a fatal-level message.
///
/// # Examples
///
/// ```
/// # use rust_log_summarizer::prelude::*;
/// # let context = std::sync::Arc::new(LoggingContext::new());
/// # let log = context.create_logger("example");
/// use rust_log_summarizer::fatal;
/// fatal!(log, "Source unreadable");
/// fatal!(log, "Unable to recover: {}", "disk full");
/// ```
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Fatal, $($arg)+)
    };
}
