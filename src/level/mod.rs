//! Severity model and stream routing.
//!
//! # Levels
//! ```text
//! ALERT(1) CRITICAL(2) ERROR(3)  → stderr
//! WARNING(4) NOTICE(5) INFORMATIONAL(6) DEBUG(7) → stdout
//! ```
//!
//! # Design Decisions
//! - Based loosely on BSD syslog (RFC 3164), without EMERGENCY
//! - Ranks are part of the wire format and never change
//! - Lower rank means more urgent, so `Ord` sorts most urgent first

pub mod stream;

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

pub use stream::Stream;

/// Severity of a log record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Level {
    /// Action must be taken immediately.
    Alert = 1,
    /// Critical conditions.
    Critical = 2,
    /// Error conditions.
    Error = 3,
    /// Warning conditions.
    Warning = 4,
    /// Normal but significant condition.
    Notice = 5,
    /// Informational messages.
    Informational = 6,
    /// Debug-level messages.
    Debug = 7,
}

impl Level {
    /// Every level, most urgent first.
    pub const ALL: [Level; 7] = [
        Level::Alert,
        Level::Critical,
        Level::Error,
        Level::Warning,
        Level::Notice,
        Level::Informational,
        Level::Debug,
    ];

    /// Numeric rank written to the `level` field.
    pub fn rank(self) -> u8 {
        self as u8
    }

    pub fn from_rank(rank: u8) -> Option<Level> {
        Level::ALL.into_iter().find(|level| level.rank() == rank)
    }

    /// Canonical upper-case name.
    pub fn name(self) -> &'static str {
        match self {
            Level::Alert => "ALERT",
            Level::Critical => "CRITICAL",
            Level::Error => "ERROR",
            Level::Warning => "WARNING",
            Level::Notice => "NOTICE",
            Level::Informational => "INFORMATIONAL",
            Level::Debug => "DEBUG",
        }
    }

    /// Output stream for records of this level.
    ///
    /// WARNING and everything less urgent goes to stdout, the rest to stderr.
    pub fn stream(self) -> Stream {
        if self.rank() >= Level::Warning.rank() {
            Stream::Stdout
        } else {
            Stream::Stderr
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a level name or rank is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown severity level: {0:?}")]
pub struct ParseLevelError(pub String);

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(rank) = trimmed.parse::<u8>() {
            return Level::from_rank(rank).ok_or_else(|| ParseLevelError(s.to_string()));
        }

        match trimmed.to_ascii_uppercase().as_str() {
            "ALERT" => Ok(Level::Alert),
            "CRITICAL" | "CRIT" => Ok(Level::Critical),
            "ERROR" => Ok(Level::Error),
            "WARNING" | "WARN" => Ok(Level::Warning),
            "NOTICE" => Ok(Level::Notice),
            "INFORMATIONAL" | "INFO" => Ok(Level::Informational),
            "DEBUG" => Ok(Level::Debug),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}
