//! Sink trait for log output destinations

use super::{error::Result, log_entry::LogEntry};

/// Anything that observes log records: console and file writers, the
/// summarizer, or user-defined destinations.
///
/// Sinks are invoked synchronously, in registration order, before the
/// logging call returns. A sink decides on its own whether to act on a
/// record (e.g. by minimum level).
pub trait Sink: Send + Sync {
    fn observe(&mut self, entry: &LogEntry) -> Result<()>;

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "sink"
    }
}
