//! Output sinks.
//!
//! # Responsibilities
//! - Write one encoded record as one line to the selected stream
//! - Provide a capturing sink for tests and embedders
//!
//! # Design Decisions
//! - The sink owns line atomicity; the logger does no locking of its own
//! - Write failures are returned to the caller, never retried

pub mod memory;
pub mod std_streams;

use std::io;

use crate::level::Stream;

pub use memory::MemorySink;
pub use std_streams::StdSink;

/// Destination for encoded records.
pub trait Sink: Send + Sync {
    /// Write `line` followed by a newline to `stream`.
    fn write_line(&self, stream: Stream, line: &str) -> io::Result<()>;
}

impl<S: Sink + ?Sized> Sink for std::sync::Arc<S> {
    fn write_line(&self, stream: Stream, line: &str) -> io::Result<()> {
        (**self).write_line(stream, line)
    }
}

impl<S: Sink + ?Sized> Sink for &S {
    fn write_line(&self, stream: Stream, line: &str) -> io::Result<()> {
        (**self).write_line(stream, line)
    }
}
