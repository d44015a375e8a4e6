//! Error-budget summarizer
//!
//! The summarizer counts every record its logging context dispatches, per
//! level, and answers whether the surrounding job may keep going. Batch
//! jobs call [`Summarizer::try_continue`] at checkpoints to stop once the
//! configured budget is spent.
//!
//! The policy is a plain count threshold per level plus an optional
//! "halt on first fatal" switch. There is no decay or windowing: counters
//! only grow, so once continuation is denied it stays denied for the
//! lifetime of the instance.
//!
//! # Example
//!
//! ```
//! use rust_log_summarizer::{LogEntry, LogLevel, Summarizer, SummarizerConfig};
//!
//! let summarizer = Summarizer::with_config(
//!     SummarizerConfig::new().threshold(LogLevel::Error, 3),
//! );
//!
//! for _ in 0..2 {
//!     summarizer.observe(&LogEntry::new(LogLevel::Error, "import", "bad row"));
//! }
//! assert!(summarizer.can_continue());
//!
//! summarizer.observe(&LogEntry::new(LogLevel::Error, "import", "bad row"));
//! assert!(summarizer.try_continue().is_err());
//! ```

use super::{
    error::{LoggerError, Result},
    log_entry::LogEntry,
    log_level::LogLevel,
    sink::Sink,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use std::ops::Index;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

/// Why the summarizer denies continuation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HaltReason {
    /// A fatal record was observed while `halt_on_fatal` is set
    FatalObserved,

    /// A tracked level reached its configured threshold
    ThresholdReached {
        level: LogLevel,
        count: u64,
        threshold: u64,
    },
}

impl fmt::Display for HaltReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HaltReason::FatalObserved => write!(f, "fatal record observed"),
            HaltReason::ThresholdReached {
                level,
                count,
                threshold,
            } => write!(
                f,
                "{} count {} reached threshold {}",
                level.name(),
                count,
                threshold
            ),
        }
    }
}

/// Continuation policy for a [`Summarizer`]
///
/// `SummarizerConfig::new()` halts on the first fatal record and tracks no
/// thresholds. Use [`SummarizerConfig::permissive`] for a policy that never
/// denies continuation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummarizerConfig {
    thresholds: BTreeMap<LogLevel, u64>,
    halt_on_fatal: bool,
}

/// Untyped shape accepted by [`SummarizerConfig::from_value`]
#[derive(Debug, Deserialize)]
struct RawSummarizerConfig {
    #[serde(default)]
    thresholds: BTreeMap<String, i64>,
    #[serde(default, rename = "haltOnFatal", alias = "halt_on_fatal")]
    halt_on_fatal: Option<bool>,
}

impl SummarizerConfig {
    pub fn new() -> Self {
        Self {
            thresholds: BTreeMap::new(),
            halt_on_fatal: true,
        }
    }

    /// Count everything, never deny continuation
    pub fn permissive() -> Self {
        Self {
            thresholds: BTreeMap::new(),
            halt_on_fatal: false,
        }
    }

    /// Deny continuation once `level` has been observed `max` times
    #[must_use = "builder methods return a new value"]
    pub fn threshold(mut self, level: LogLevel, max: u64) -> Self {
        self.thresholds.insert(level, max);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn halt_on_fatal(mut self, halt: bool) -> Self {
        self.halt_on_fatal = halt;
        self
    }

    pub fn thresholds(&self) -> &BTreeMap<LogLevel, u64> {
        &self.thresholds
    }

    pub fn threshold_for(&self, level: LogLevel) -> Option<u64> {
        self.thresholds.get(&level).copied()
    }

    pub fn halts_on_fatal(&self) -> bool {
        self.halt_on_fatal
    }

    /// Build a configuration from a JSON value such as
    /// `{"thresholds": {"error": 3}, "haltOnFatal": true}`
    ///
    /// Unknown level names and negative thresholds are rejected with
    /// [`LoggerError::InvalidConfiguration`]. A missing `haltOnFatal`
    /// defaults to `true`.
    pub fn from_value(value: Value) -> Result<Self> {
        let raw: RawSummarizerConfig = serde_json::from_value(value)
            .map_err(|e| LoggerError::config("Summarizer", e.to_string()))?;

        let mut config = Self::new().halt_on_fatal(raw.halt_on_fatal.unwrap_or(true));
        for (name, max) in raw.thresholds {
            let level: LogLevel = name
                .parse()
                .map_err(|_| LoggerError::config("Summarizer", format!("unknown level '{}'", name)))?;
            let max = u64::try_from(max).map_err(|_| {
                LoggerError::config(
                    "Summarizer",
                    format!("negative threshold {} for '{}'", max, level.name()),
                )
            })?;
            config.thresholds.insert(level, max);
        }
        Ok(config)
    }

    /// Parse a configuration from JSON text
    pub fn from_json(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Snapshot of per-level counts
///
/// Only levels observed at least once are present. Missing levels read as
/// zero through [`SummaryCounts::get`] and indexing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SummaryCounts(BTreeMap<LogLevel, u64>);

impl SummaryCounts {
    pub fn get(&self, level: LogLevel) -> u64 {
        self.0.get(&level).copied().unwrap_or(0)
    }

    pub fn contains(&self, level: LogLevel) -> bool {
        self.0.contains_key(&level)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of distinct levels present
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn total(&self) -> u64 {
        self.0.values().sum()
    }

    /// Iterate counts, most severe level first
    pub fn iter(&self) -> impl Iterator<Item = (LogLevel, u64)> + '_ {
        self.0.iter().rev().map(|(level, count)| (*level, *count))
    }

    pub fn as_map(&self) -> &BTreeMap<LogLevel, u64> {
        &self.0
    }
}

impl Index<LogLevel> for SummaryCounts {
    type Output = u64;

    fn index(&self, level: LogLevel) -> &u64 {
        self.0.get(&level).unwrap_or(&0)
    }
}

impl fmt::Display for SummaryCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (level, count) in self.iter() {
            if !first {
                write!(f, " ")?;
            }
            write!(f, "{}={}", level.name(), count)?;
            first = false;
        }
        Ok(())
    }
}

/// Counts observed records per level and applies a [`SummarizerConfig`]
///
/// Counters are atomics, so a summarizer can be shared across threads
/// (typically as `Arc<Summarizer>`) without losing increments.
///
/// A summarizer is not a [`Sink`] on its own. It joins a context through
/// [`LoggingContext::setup_summarizer`] or
/// [`LoggingContext::add_summarizer`], which keeps it visible to the
/// context's continuation queries:
///
/// ```compile_fail
/// use rust_log_summarizer::{LoggingContext, Summarizer};
///
/// let context = LoggingContext::new();
/// context.add_sink(Box::new(Summarizer::new()));
/// ```
///
/// [`LoggingContext::setup_summarizer`]: crate::LoggingContext::setup_summarizer
/// [`LoggingContext::add_summarizer`]: crate::LoggingContext::add_summarizer
#[derive(Debug)]
pub struct Summarizer {
    config: SummarizerConfig,
    counters: [AtomicU64; LogLevel::COUNT],
    halt_announced: AtomicBool,
}

impl Summarizer {
    /// Permissive summarizer: counts everything, never blocks
    pub fn new() -> Self {
        Self::with_config(SummarizerConfig::permissive())
    }

    pub fn with_config(config: SummarizerConfig) -> Self {
        Self {
            config,
            counters: Default::default(),
            halt_announced: AtomicBool::new(false),
        }
    }

    /// Build from a JSON configuration value, see [`SummarizerConfig::from_value`]
    pub fn from_value(value: Value) -> Result<Self> {
        SummarizerConfig::from_value(value).map(Self::with_config)
    }

    pub fn config(&self) -> &SummarizerConfig {
        &self.config
    }

    /// Count one record. Never fails; `params` are not looked at.
    pub fn observe(&self, entry: &LogEntry) {
        let level = entry.level;
        let count = self.counters[level.rank() as usize]
            .fetch_add(1, Ordering::AcqRel)
            .saturating_add(1);

        if self.halt_announced.load(Ordering::Acquire) {
            return;
        }
        if let Some(reason) = self.reason_for(level, count) {
            if !self.halt_announced.swap(true, Ordering::AcqRel) {
                eprintln!("[LOGGER WARNING] Summarizer halted: {}", reason);
            }
        }
    }

    /// Current count for a single level
    #[inline]
    pub fn count(&self, level: LogLevel) -> u64 {
        self.counters[level.rank() as usize].load(Ordering::Acquire)
    }

    /// Total records observed across all levels
    pub fn total(&self) -> u64 {
        LogLevel::ALL.iter().map(|level| self.count(*level)).sum()
    }

    /// Snapshot of the current counters
    pub fn counts(&self) -> SummaryCounts {
        SummaryCounts(
            LogLevel::ALL
                .iter()
                .map(|level| (*level, self.count(*level)))
                .filter(|(_, count)| *count > 0)
                .collect(),
        )
    }

    /// First reason continuation is denied, if any
    ///
    /// A fatal record wins over thresholds; thresholds are checked most
    /// severe level first.
    pub fn halt_reason(&self) -> Option<HaltReason> {
        if self.config.halt_on_fatal && self.count(LogLevel::Fatal) > 0 {
            return Some(HaltReason::FatalObserved);
        }
        self.config
            .thresholds
            .iter()
            .rev()
            .find_map(|(level, threshold)| {
                let count = self.count(*level);
                (count >= *threshold).then_some(HaltReason::ThresholdReached {
                    level: *level,
                    count,
                    threshold: *threshold,
                })
            })
    }

    pub fn can_continue(&self) -> bool {
        self.halt_reason().is_none()
    }

    /// `Ok(())` while the policy allows continuation,
    /// [`LoggerError::PolicyHalt`] otherwise
    pub fn try_continue(&self) -> Result<()> {
        match self.halt_reason() {
            Some(reason) => Err(LoggerError::PolicyHalt(reason)),
            None => Ok(()),
        }
    }

    fn reason_for(&self, level: LogLevel, count: u64) -> Option<HaltReason> {
        if level == LogLevel::Fatal && self.config.halt_on_fatal {
            return Some(HaltReason::FatalObserved);
        }
        let threshold = self.config.threshold_for(level)?;
        (count >= threshold).then_some(HaltReason::ThresholdReached {
            level,
            count,
            threshold,
        })
    }
}

impl Default for Summarizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Sink adapter that lets a logging context count into a summarizer it
/// also hands out to callers
pub(crate) struct SharedSummarizer(pub(crate) Arc<Summarizer>);

impl Sink for SharedSummarizer {
    fn observe(&mut self, entry: &LogEntry) -> Result<()> {
        self.0.observe(entry);
        Ok(())
    }

    fn name(&self) -> &str {
        "summarizer"
    }
}
