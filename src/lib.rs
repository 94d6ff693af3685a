//! Chillog: structured logging in the Chillog Logging Format v1.
//!
//! Every call produces one single-line JSON document and writes it to
//! stdout (WARNING and less urgent) or stderr (ERROR and more urgent).
//!
//! ```no_run
//! use chillog::{Fields, Identity, Logger};
//!
//! let logger = Logger::new(Identity::new("web-1", "billing"));
//! logger.info("service started")?;
//! logger.error_pairs("charge failed", Some("card declined"), &["order", "42"])?;
//! logger.notice_fields("login", None, &Fields::new().with("id", "u-17"))?;
//! # Ok::<(), std::io::Error>(())
//! ```

pub mod config;
pub mod encoder;
pub mod fields;
pub mod level;
pub mod logger;
pub mod sink;

pub use config::{ChillogConfig, ConfigError, Identity};
pub use encoder::{encode, LogRecord};
pub use fields::{convert_to_map, Fields};
pub use level::{Level, Stream};
pub use logger::global::{
    alert, alert_fields, alert_pairs, critical, critical_fields, critical_pairs, debug,
    debug_fields, debug_pairs, error, error_fields, error_pairs, info, info_fields, info_pairs,
    init, log, notice, notice_fields, notice_pairs, warning, warning_fields, warning_pairs,
};
pub use logger::Logger;
pub use sink::{MemorySink, Sink, StdSink};
