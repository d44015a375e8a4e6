//! File sink implementation

use crate::core::{
    FormatFn, LogEntry, LogLevel, LoggerError, OutputFormat, RecordFormatter, Result, Sink,
    TimestampFormat,
};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::mem;
use std::path::{Path, PathBuf};

/// Appends one line per record to a file, without colors
///
/// Missing parent directories are created. Output is buffered and flushed
/// on [`Sink::flush`] and on drop.
pub struct FileSink {
    path: PathBuf,
    writer: BufWriter<File>,
    min_level: LogLevel,
    formatter: RecordFormatter,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                LoggerError::io_operation(
                    "creating log directory",
                    parent.display().to_string(),
                    e,
                )
            })?;
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| {
                LoggerError::io_operation("opening log file", path.display().to_string(), e)
            })?;

        Ok(Self {
            path,
            writer: BufWriter::new(file),
            min_level: LogLevel::Info,
            formatter: RecordFormatter::new(),
        })
    }

    /// Only write records at `level` or more severe
    #[must_use]
    pub fn with_min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    /// Set the timestamp format for this sink
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use rust_log_summarizer::sinks::FileSink;
    /// use rust_log_summarizer::TimestampFormat;
    ///
    /// let sink = FileSink::new("/var/log/import.log")
    ///     .unwrap()
    ///     .with_timestamp_format(TimestampFormat::Rfc3339);
    /// ```
    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.formatter = mem::take(&mut self.formatter).with_timestamp_format(format);
        self
    }

    #[must_use]
    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.formatter = mem::take(&mut self.formatter).with_output_format(format);
        self
    }

    #[must_use]
    pub fn with_format_fn(mut self, format_fn: FormatFn) -> Self {
        self.formatter = mem::take(&mut self.formatter).with_format_fn(format_fn);
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Sink for FileSink {
    fn observe(&mut self, entry: &LogEntry) -> Result<()> {
        if !entry.level.passes(self.min_level) {
            return Ok(());
        }

        let mut output = self.formatter.format(entry);
        output.push('\n');
        self.writer
            .write_all(output.as_bytes())
            .map_err(|e| LoggerError::file_sink(self.path.display().to_string(), e.to_string()))
    }

    fn flush(&mut self) -> Result<()> {
        self.writer
            .flush()
            .map_err(|e| LoggerError::file_sink(self.path.display().to_string(), e.to_string()))
    }

    fn name(&self) -> &str {
        "file"
    }
}

impl Drop for FileSink {
    fn drop(&mut self) {
        let _ = self.flush();
    }
}
