//! Log level definitions
//!
//! Severity runs `fatal > error > warn > success > info > debug > trace`.
//! Each level carries a rank where 0 is the most severe. `success` sits
//! between `warn` and `info` and threshold configurations rely on that rank.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Fatal = 0,
    Error = 1,
    Warn = 2,
    Success = 3,
    #[default]
    Info = 4,
    Debug = 5,
    Trace = 6,
}

impl LogLevel {
    /// Number of defined levels
    pub const COUNT: usize = 7;

    /// Every level, most severe first
    pub const ALL: [LogLevel; LogLevel::COUNT] = [
        LogLevel::Fatal,
        LogLevel::Error,
        LogLevel::Warn,
        LogLevel::Success,
        LogLevel::Info,
        LogLevel::Debug,
        LogLevel::Trace,
    ];

    /// Integer rank, 0 = most severe
    #[inline]
    pub const fn rank(self) -> u8 {
        self as u8
    }

    /// Level for a rank, if the rank is in range
    pub fn from_rank(rank: u8) -> Option<Self> {
        Self::ALL.get(rank as usize).copied()
    }

    pub fn to_str(&self) -> &'static str {
        match self {
            LogLevel::Fatal => "FATAL",
            LogLevel::Error => "ERROR",
            LogLevel::Warn => "WARN",
            LogLevel::Success => "SUCCESS",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
            LogLevel::Trace => "TRACE",
        }
    }

    /// Lowercase name, as used in configuration keys and summaries
    pub fn name(&self) -> &'static str {
        match self {
            LogLevel::Fatal => "fatal",
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Success => "success",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }

    /// Whether a record at this level passes a `min_level` filter
    #[inline]
    pub fn passes(self, min_level: LogLevel) -> bool {
        self >= min_level
    }

    /// Paint text in this level's color
    #[cfg(feature = "console")]
    pub fn paint(&self, text: &str) -> colored::ColoredString {
        use colored::Colorize;
        match self {
            LogLevel::Fatal => text.white().on_red(),
            LogLevel::Error => text.red(),
            LogLevel::Warn => text.yellow(),
            LogLevel::Success => text.black().on_green(),
            LogLevel::Info => text.cyan(),
            LogLevel::Debug | LogLevel::Trace => text.blue(),
        }
    }
}

impl Ord for LogLevel {
    /// More severe levels compare greater
    fn cmp(&self, other: &Self) -> Ordering {
        other.rank().cmp(&self.rank())
    }
}

impl PartialOrd for LogLevel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "FATAL" => Ok(LogLevel::Fatal),
            "ERROR" => Ok(LogLevel::Error),
            "WARN" | "WARNING" => Ok(LogLevel::Warn),
            "SUCCESS" => Ok(LogLevel::Success),
            "INFO" => Ok(LogLevel::Info),
            "DEBUG" => Ok(LogLevel::Debug),
            "TRACE" => Ok(LogLevel::Trace),
            _ => Err(format!("Invalid log level: '{}'", s)),
        }
    }
}
