//! Chillog Logging Format v1 encoder.
//!
//! # Data Flow
//! ```text
//! Identity (host, service)  ─┐
//! LogRecord (per call)      ─┴→ json.rs (encode) → single-line JSON text
//! ```
//!
//! # Document
//! ```text
//! version, host, service, short_message, timestamp, level   always
//! full_message                                              when provided
//! _<key>                                                    per extra field
//! __id                                                      instead of _id
//! ```
//!
//! # Design Decisions
//! - Pure: no clock, no I/O; the caller supplies the timestamp
//! - Reserved key is chosen before insertion, so `_id` never exists
//! - Key order in the output is unspecified

pub mod json;
pub mod record;

pub use json::encode;
pub use record::LogRecord;

/// Value of the `version` field.
pub const FORMAT_VERSION: u64 = 1;

/// Rendered value for an extra field whose value is absent.
pub const NULL_VALUE: &str = "NULL";

/// Extra field name that is renamed to avoid the downstream `_id` field.
pub const RESERVED_NAME: &str = "id";

pub mod keys {
    pub const VERSION: &str = "version";
    pub const HOST: &str = "host";
    pub const SERVICE: &str = "service";
    pub const SHORT_MESSAGE: &str = "short_message";
    pub const FULL_MESSAGE: &str = "full_message";
    pub const TIMESTAMP: &str = "timestamp";
    pub const LEVEL: &str = "level";
    pub const RESERVED_ID: &str = "__id";
}
