//! Per-call record inputs.

use crate::fields::Fields;
use crate::level::Level;

/// Everything a single log call contributes to the document.
#[derive(Debug, Clone, Copy)]
pub struct LogRecord<'a> {
    pub short_message: &'a str,
    /// Omitted from the document when `None`; `Some("")` is still written.
    pub full_message: Option<&'a str>,
    /// Milliseconds since the Unix epoch.
    pub timestamp: i64,
    pub level: Level,
    pub fields: &'a Fields,
}

impl<'a> LogRecord<'a> {
    pub fn new(level: Level, short_message: &'a str, timestamp: i64, fields: &'a Fields) -> Self {
        Self {
            short_message,
            full_message: None,
            timestamp,
            level,
            fields,
        }
    }

    pub fn with_full_message(mut self, full_message: Option<&'a str>) -> Self {
        self.full_message = full_message;
        self
    }
}
