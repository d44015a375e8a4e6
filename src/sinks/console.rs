//! Console sink implementation

use crate::core::{
    FormatFn, LogEntry, LogLevel, OutputFormat, RecordFormatter, Result, Sink, TimestampFormat,
};
use std::io::Write;

/// Where console output goes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConsoleTarget {
    Stdout,
    Stderr,
    /// Error and fatal to stderr, everything else to stdout
    #[default]
    Split,
}

/// Writes records to the terminal, colored by level
///
/// Defaults: colors on, minimum level `info`, [`ConsoleTarget::Split`].
pub struct ConsoleSink {
    min_level: LogLevel,
    target: ConsoleTarget,
    formatter: RecordFormatter,
}

impl ConsoleSink {
    pub fn new() -> Self {
        Self::with_colors(true)
    }

    pub fn with_colors(use_colors: bool) -> Self {
        Self {
            min_level: LogLevel::Info,
            target: ConsoleTarget::default(),
            formatter: RecordFormatter::new().with_colors(use_colors),
        }
    }

    /// Only write records at `level` or more severe
    #[must_use]
    pub fn with_min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    #[must_use]
    pub fn with_target(mut self, target: ConsoleTarget) -> Self {
        self.target = target;
        self
    }

    /// Set the output format for this sink
    ///
    /// # Example
    ///
    /// ```
    /// use rust_log_summarizer::sinks::ConsoleSink;
    /// use rust_log_summarizer::OutputFormat;
    ///
    /// let sink = ConsoleSink::new().with_output_format(OutputFormat::Json);
    /// ```
    #[must_use]
    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.formatter = self.formatter.with_output_format(format);
        self
    }

    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.formatter = self.formatter.with_timestamp_format(format);
        self
    }

    /// Replace line rendering with a custom function
    #[must_use]
    pub fn with_format_fn(mut self, format_fn: FormatFn) -> Self {
        self.formatter = self.formatter.with_format_fn(format_fn);
        self
    }

    pub fn min_level(&self) -> LogLevel {
        self.min_level
    }

    pub fn accepts(&self, level: LogLevel) -> bool {
        level.passes(self.min_level)
    }

    fn goes_to_stderr(&self, level: LogLevel) -> bool {
        match self.target {
            ConsoleTarget::Stdout => false,
            ConsoleTarget::Stderr => true,
            ConsoleTarget::Split => matches!(level, LogLevel::Error | LogLevel::Fatal),
        }
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

impl Sink for ConsoleSink {
    fn observe(&mut self, entry: &LogEntry) -> Result<()> {
        if !self.accepts(entry.level) {
            return Ok(());
        }

        let output = self.formatter.format(entry);
        if self.goes_to_stderr(entry.level) {
            eprintln!("{}", output);
        } else {
            println!("{}", output);
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        std::io::stdout().flush()?;
        std::io::stderr().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_level_filter() {
        let sink = ConsoleSink::new().with_min_level(LogLevel::Success);
        assert!(sink.accepts(LogLevel::Fatal));
        assert!(sink.accepts(LogLevel::Success));
        assert!(!sink.accepts(LogLevel::Info));
        assert!(!sink.accepts(LogLevel::Trace));
    }

    #[test]
    fn test_defaults() {
        let sink = ConsoleSink::default();
        assert_eq!(sink.min_level(), LogLevel::Info);
        assert_eq!(sink.name(), "console");
    }

    #[test]
    fn test_target_routing() {
        let split = ConsoleSink::new();
        assert!(split.goes_to_stderr(LogLevel::Error));
        assert!(split.goes_to_stderr(LogLevel::Fatal));
        assert!(!split.goes_to_stderr(LogLevel::Warn));

        let stdout = ConsoleSink::new().with_target(ConsoleTarget::Stdout);
        assert!(!stdout.goes_to_stderr(LogLevel::Fatal));

        let stderr = ConsoleSink::new().with_target(ConsoleTarget::Stderr);
        assert!(stderr.goes_to_stderr(LogLevel::Info));
    }

    #[test]
    fn test_observe_filtered_and_written() {
        let mut sink = ConsoleSink::with_colors(false).with_min_level(LogLevel::Warn);
        assert!(sink.observe(&LogEntry::new(LogLevel::Debug, "t", "hidden")).is_ok());
        assert!(sink.observe(&LogEntry::new(LogLevel::Warn, "t", "shown")).is_ok());
        assert!(sink.flush().is_ok());
    }
}
