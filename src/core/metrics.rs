//! Dispatch metrics for the logging context
//!
//! Counts records dispatched to sinks and sink failures (errors and
//! panics). Separate from the summarizer, which counts by level.

use std::sync::atomic::{AtomicU64, Ordering};

/// # Example
///
/// ```
/// use rust_log_summarizer::DispatchMetrics;
///
/// let metrics = DispatchMetrics::new();
/// metrics.record_dispatched();
/// metrics.record_sink_failure();
///
/// assert_eq!(metrics.dispatched_count(), 1);
/// assert_eq!(metrics.sink_failures(), 1);
/// ```
#[derive(Debug)]
pub struct DispatchMetrics {
    /// Records handed to the sink list
    dispatched: AtomicU64,

    /// Individual sink calls that returned an error or panicked
    sink_failures: AtomicU64,

    /// Records for which at least one sink failed
    failed_records: AtomicU64,
}

impl DispatchMetrics {
    pub const fn new() -> Self {
        Self {
            dispatched: AtomicU64::new(0),
            sink_failures: AtomicU64::new(0),
            failed_records: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn dispatched_count(&self) -> u64 {
        self.dispatched.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn sink_failures(&self) -> u64 {
        self.sink_failures.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn failed_records(&self) -> u64 {
        self.failed_records.load(Ordering::Relaxed)
    }

    /// Returns the previous value
    #[inline]
    pub fn record_dispatched(&self) -> u64 {
        self.dispatched.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_sink_failure(&self) -> u64 {
        self.sink_failures.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_failed_record(&self) -> u64 {
        self.failed_records.fetch_add(1, Ordering::Relaxed)
    }

    /// Share of dispatched records that hit a failing sink, 0.0 - 100.0
    pub fn failure_rate(&self) -> f64 {
        let dispatched = self.dispatched_count() as f64;
        if dispatched == 0.0 {
            0.0
        } else {
            (self.failed_records() as f64 / dispatched) * 100.0
        }
    }
}

impl Default for DispatchMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for DispatchMetrics {
    /// Snapshot of the current values
    fn clone(&self) -> Self {
        Self {
            dispatched: AtomicU64::new(self.dispatched_count()),
            sink_failures: AtomicU64::new(self.sink_failures()),
            failed_records: AtomicU64::new(self.failed_records()),
        }
    }
}
