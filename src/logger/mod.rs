//! Logging entry points.
//!
//! # Data Flow
//! ```text
//! alert / critical / ... / debug            (short message only)
//! alert_pairs / ... / debug_pairs           (flat key/value slice → convert_to_map)
//! alert_fields / ... / debug_fields         (ready-made Fields)
//!     → Logger::log (capture timestamp)
//!     → encoder::encode
//!     → Level::stream → Sink::write_line
//! ```
//!
//! # Design Decisions
//! - Identity is injected, never read from ambient state inside the call
//! - One synchronous write per call; errors go back to the caller
//! - `global` offers the initialize-once process-wide logger

pub mod global;

use std::io;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::config::{ChillogConfig, ConfigError, Identity};
use crate::encoder::{encode, LogRecord};
use crate::fields::{convert_to_map, Fields};
use crate::level::Level;
use crate::sink::{Sink, StdSink};

/// Formats records for one process identity and writes them to a sink.
#[derive(Debug, Clone)]
pub struct Logger<S = StdSink> {
    identity: Arc<Identity>,
    sink: S,
}

impl Logger<StdSink> {
    /// Logger writing to the process's stdout/stderr.
    pub fn new(identity: Identity) -> Self {
        Self::with_sink(identity, StdSink)
    }

    /// Resolve the identity from the environment and write to stdout/stderr.
    pub fn from_env(config: &ChillogConfig) -> Result<Self, ConfigError> {
        Ok(Self::new(Identity::from_env(config)?))
    }
}

impl<S: Sink> Logger<S> {
    pub fn with_sink(identity: impl Into<Arc<Identity>>, sink: S) -> Self {
        Self {
            identity: identity.into(),
            sink,
        }
    }

    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Encode and write one record, timestamped now.
    pub fn log(
        &self,
        level: Level,
        short_message: &str,
        full_message: Option<&str>,
        fields: &Fields,
    ) -> io::Result<()> {
        self.log_at(now_millis(), level, short_message, full_message, fields)
    }

    /// Encode and write one record with an explicit timestamp (ms since epoch).
    pub fn log_at(
        &self,
        timestamp: i64,
        level: Level,
        short_message: &str,
        full_message: Option<&str>,
        fields: &Fields,
    ) -> io::Result<()> {
        let record = LogRecord::new(level, short_message, timestamp, fields)
            .with_full_message(full_message);
        let line = encode(&self.identity, &record);
        self.sink.write_line(level.stream(), &line)
    }

    /// [`Logger::log`] with a flat `key, value, ...` slice.
    pub fn log_pairs<P: AsRef<str>>(
        &self,
        level: Level,
        short_message: &str,
        full_message: Option<&str>,
        pairs: &[P],
    ) -> io::Result<()> {
        self.log(level, short_message, full_message, &convert_to_map(Some(pairs)))
    }
}

macro_rules! level_methods {
    ($($level:ident => $plain:ident, $pairs:ident, $fields:ident;)*) => {
        impl<S: Sink> Logger<S> {
            $(
                #[doc = concat!("Log a short message at `", stringify!($level), "`.")]
                pub fn $plain(&self, short_message: &str) -> io::Result<()> {
                    self.log(Level::$level, short_message, None, &Fields::new())
                }

                #[doc = concat!("Log at `", stringify!($level), "` with a flat key/value slice.")]
                pub fn $pairs<P: AsRef<str>>(
                    &self,
                    short_message: &str,
                    full_message: Option<&str>,
                    pairs: &[P],
                ) -> io::Result<()> {
                    self.log_pairs(Level::$level, short_message, full_message, pairs)
                }

                #[doc = concat!("Log at `", stringify!($level), "` with extra fields.")]
                pub fn $fields(
                    &self,
                    short_message: &str,
                    full_message: Option<&str>,
                    fields: &Fields,
                ) -> io::Result<()> {
                    self.log(Level::$level, short_message, full_message, fields)
                }
            )*
        }
    };
}

level_methods! {
    Alert => alert, alert_pairs, alert_fields;
    Critical => critical, critical_pairs, critical_fields;
    Error => error, error_pairs, error_fields;
    Warning => warning, warning_pairs, warning_fields;
    Notice => notice, notice_pairs, notice_fields;
    Informational => info, info_pairs, info_fields;
    Debug => debug, debug_pairs, debug_fields;
}

/// Current time in milliseconds since the Unix epoch.
pub fn now_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::Stream;
    use crate::sink::MemorySink;
    use serde_json::Value;

    fn logger() -> Logger<MemorySink> {
        Logger::with_sink(Identity::new("web-1", "billing"), MemorySink::new())
    }

    fn only_line(logger: &Logger<MemorySink>) -> (Stream, Value) {
        let mut lines = logger.sink().take();
        assert_eq!(lines.len(), 1);
        let (stream, line) = lines.remove(0);
        (stream, serde_json::from_str(&line).unwrap())
    }

    #[test]
    fn test_short_message_only() {
        let logger = logger();
        logger.warning("disk almost full").unwrap();

        let (stream, doc) = only_line(&logger);
        assert_eq!(stream, Stream::Stdout);
        assert_eq!(doc["level"], 4);
        assert_eq!(doc["short_message"], "disk almost full");
        assert_eq!(doc.as_object().unwrap().len(), 6);
    }

    #[test]
    fn test_pairs_entry_point() {
        let logger = logger();
        logger
            .error_pairs("payment failed", Some("card declined"), &["order", "42", "retry"])
            .unwrap();

        let (stream, doc) = only_line(&logger);
        assert_eq!(stream, Stream::Stderr);
        assert_eq!(doc["level"], 3);
        assert_eq!(doc["full_message"], "card declined");
        assert_eq!(doc["_order"], "42");
        assert_eq!(doc["_retry"], "");
    }

    #[test]
    fn test_fields_entry_point() {
        let logger = logger();
        let mut fields = Fields::new();
        fields.insert("id", 7).insert_null("trace");
        logger.debug_fields("cache miss", None, &fields).unwrap();

        let (stream, doc) = only_line(&logger);
        assert_eq!(stream, Stream::Stdout);
        assert_eq!(doc["__id"], "7");
        assert_eq!(doc["_trace"], "NULL");
        assert!(doc.get("full_message").is_none());
    }

    #[test]
    fn test_every_family_routes_by_rank() {
        let logger = logger();
        logger.alert("a").unwrap();
        logger.critical("c").unwrap();
        logger.error("e").unwrap();
        logger.warning("w").unwrap();
        logger.notice("n").unwrap();
        logger.info("i").unwrap();
        logger.debug("d").unwrap();

        let lines = logger.sink().take();
        let routed: Vec<(Stream, u64)> = lines
            .iter()
            .map(|(stream, line)| {
                let doc: Value = serde_json::from_str(line).unwrap();
                (*stream, doc["level"].as_u64().unwrap())
            })
            .collect();

        assert_eq!(
            routed,
            vec![
                (Stream::Stderr, 1),
                (Stream::Stderr, 2),
                (Stream::Stderr, 3),
                (Stream::Stdout, 4),
                (Stream::Stdout, 5),
                (Stream::Stdout, 6),
                (Stream::Stdout, 7),
            ]
        );
    }

    #[test]
    fn test_timestamp_is_captured_at_call() {
        let logger = logger();
        let before = now_millis();
        logger.info("tick").unwrap();
        let after = now_millis();

        let (_, doc) = only_line(&logger);
        let ts = doc["timestamp"].as_i64().unwrap();
        assert!(ts >= before && ts <= after);
    }

    #[test]
    fn test_log_at_uses_given_timestamp() {
        let logger = logger();
        logger
            .log_at(1234, Level::Notice, "fixed", None, &Fields::new())
            .unwrap();
        let (_, doc) = only_line(&logger);
        assert_eq!(doc["timestamp"], 1234);
    }
}
