//! Logging context: the sink list, the optional summarizer and the
//! continuation queries
//!
//! A context is created once at process start, shared as
//! `Arc<LoggingContext>` with every [`Logger`], and dropped at exit (which
//! flushes the sinks).

use super::{
    error::{LoggerError, Result},
    log_entry::LogEntry,
    logger::Logger,
    metrics::DispatchMetrics,
    sink::Sink,
    summarizer::{SharedSummarizer, Summarizer, SummarizerConfig, SummaryCounts},
};
use parking_lot::RwLock;
use std::fmt;
use std::sync::Arc;

/// Holds the registered sinks in registration order
///
/// Sinks are append-only. At most one [`Summarizer`] can be registered; it
/// receives records like any other sink and backs [`sum_log`],
/// [`can_continue`] and [`try_continue`].
///
/// Sinks must not log through the context they are registered with:
/// dispatch holds the sink list lock.
///
/// [`sum_log`]: LoggingContext::sum_log
/// [`can_continue`]: LoggingContext::can_continue
/// [`try_continue`]: LoggingContext::try_continue
pub struct LoggingContext {
    sinks: RwLock<Vec<Box<dyn Sink>>>,
    summarizer: RwLock<Option<Arc<Summarizer>>>,
    metrics: DispatchMetrics,
}

impl LoggingContext {
    /// Empty context: no sinks, no summarizer
    #[must_use]
    pub fn new() -> Self {
        Self {
            sinks: RwLock::new(Vec::new()),
            summarizer: RwLock::new(None),
            metrics: DispatchMetrics::new(),
        }
    }

    #[must_use]
    pub fn builder() -> LoggingContextBuilder {
        LoggingContextBuilder::new()
    }

    /// Create a logger bound to `module`
    pub fn create_logger(self: &Arc<Self>, module: impl Into<String>) -> Logger {
        Logger::new(Arc::clone(self), module)
    }

    pub fn add_sink(&self, sink: Box<dyn Sink>) {
        self.sinks.write().push(sink);
    }

    /// Register a new summarizer built from `config` and return a handle to it
    pub fn setup_summarizer(&self, config: SummarizerConfig) -> Result<Arc<Summarizer>> {
        let summarizer = Arc::new(Summarizer::with_config(config));
        self.add_summarizer(Arc::clone(&summarizer))?;
        Ok(summarizer)
    }

    /// Register an existing summarizer
    ///
    /// Fails with [`LoggerError::SummarizerAlreadyRegistered`] when the
    /// context already has one.
    pub fn add_summarizer(&self, summarizer: Arc<Summarizer>) -> Result<()> {
        let mut slot = self.summarizer.write();
        if slot.is_some() {
            return Err(LoggerError::SummarizerAlreadyRegistered);
        }
        self.sinks
            .write()
            .push(Box::new(SharedSummarizer(Arc::clone(&summarizer))));
        *slot = Some(summarizer);
        Ok(())
    }

    pub fn summarizer(&self) -> Option<Arc<Summarizer>> {
        self.summarizer.read().clone()
    }

    /// Current counts, or an empty summary when no summarizer is registered
    pub fn sum_log(&self) -> SummaryCounts {
        self.summarizer
            .read()
            .as_ref()
            .map(|summarizer| summarizer.counts())
            .unwrap_or_default()
    }

    /// `true` when no summarizer is registered
    pub fn can_continue(&self) -> bool {
        self.summarizer
            .read()
            .as_ref()
            .map_or(true, |summarizer| summarizer.can_continue())
    }

    /// No-op when no summarizer is registered
    pub fn try_continue(&self) -> Result<()> {
        match self.summarizer.read().as_ref() {
            Some(summarizer) => summarizer.try_continue(),
            None => Ok(()),
        }
    }

    pub fn sink_count(&self) -> usize {
        self.sinks.read().len()
    }

    pub fn metrics(&self) -> &DispatchMetrics {
        &self.metrics
    }

    /// Deliver `entry` to every sink, in registration order
    ///
    /// A failing or panicking sink is reported on stderr and does not stop
    /// delivery to the sinks after it.
    pub fn dispatch(&self, entry: &LogEntry) {
        let mut sinks = self.sinks.write();
        let mut has_error = false;

        for (idx, sink) in sinks.iter_mut().enumerate() {
            let observe_result =
                std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| sink.observe(entry)));

            match observe_result {
                Ok(Ok(())) => {}
                Ok(Err(e)) => {
                    eprintln!("[LOGGER ERROR] Sink #{} ({}) failed: {}", idx, sink.name(), e);
                    self.metrics.record_sink_failure();
                    has_error = true;
                }
                Err(panic_info) => {
                    eprintln!(
                        "[LOGGER CRITICAL] Sink #{} ({}) panicked: {}. \
                         Other sinks continue to function.",
                        idx,
                        sink.name(),
                        panic_message(panic_info.as_ref())
                    );
                    self.metrics.record_sink_failure();
                    has_error = true;
                }
            }
        }

        self.metrics.record_dispatched();
        if has_error {
            self.metrics.record_failed_record();
        }
    }

    /// Flush every sink, stopping at the first error
    pub fn flush(&self) -> Result<()> {
        let mut sinks = self.sinks.write();
        for sink in sinks.iter_mut() {
            sink.flush()?;
        }
        Ok(())
    }
}

fn panic_message(panic_info: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = panic_info.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = panic_info.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}

impl Default for LoggingContext {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for LoggingContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Summarizer slot before sinks, the order add_summarizer locks them in
        let has_summarizer = self.summarizer.read().is_some();
        let sinks = self.sinks.read();
        let names: Vec<&str> = sinks.iter().map(|sink| sink.name()).collect();
        f.debug_struct("LoggingContext")
            .field("sinks", &names)
            .field("summarizer", &has_summarizer)
            .finish()
    }
}

impl Drop for LoggingContext {
    fn drop(&mut self) {
        if let Err(e) = self.flush() {
            eprintln!("[LOGGER ERROR] Failed to flush during shutdown: {}", e);
        }
    }
}

/// Builder for a shared [`LoggingContext`]
///
/// Sinks are registered in the order the builder methods are called,
/// the summarizer included.
///
/// # Example
/// ```
/// use rust_log_summarizer::prelude::*;
///
/// let context = LoggingContext::builder()
///     .sink(ConsoleSink::new().with_min_level(LogLevel::Warn))
///     .summarizer(SummarizerConfig::new().threshold(LogLevel::Error, 10))
///     .build()
///     .unwrap();
///
/// let log = context.create_logger("importer");
/// log.info("starting");
/// assert!(context.try_continue().is_ok());
/// ```
#[derive(Default)]
pub struct LoggingContextBuilder {
    sinks: Vec<Box<dyn Sink>>,
    summarizer: Option<Arc<Summarizer>>,
    duplicate_summarizer: bool,
}

impl LoggingContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a sink
    #[must_use = "builder methods return a new value"]
    pub fn sink<S: Sink + 'static>(mut self, sink: S) -> Self {
        self.sinks.push(Box::new(sink));
        self
    }

    /// Register a summarizer built from `config` at this position
    #[must_use = "builder methods return a new value"]
    pub fn summarizer(mut self, config: SummarizerConfig) -> Self {
        if self.summarizer.is_some() {
            self.duplicate_summarizer = true;
            return self;
        }
        let summarizer = Arc::new(Summarizer::with_config(config));
        self.sinks
            .push(Box::new(SharedSummarizer(Arc::clone(&summarizer))));
        self.summarizer = Some(summarizer);
        self
    }

    /// Build the context
    ///
    /// Fails when more than one summarizer was requested.
    pub fn build(self) -> Result<Arc<LoggingContext>> {
        if self.duplicate_summarizer {
            return Err(LoggerError::SummarizerAlreadyRegistered);
        }
        Ok(Arc::new(LoggingContext {
            sinks: RwLock::new(self.sinks),
            summarizer: RwLock::new(self.summarizer),
            metrics: DispatchMetrics::new(),
        }))
    }
}
