//! In-memory capturing sink.

use std::io;
use std::sync::{Mutex, MutexGuard};

use crate::level::Stream;
use crate::sink::Sink;

/// Records every line together with the stream it was routed to.
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Mutex<Vec<(Stream, String)>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all captured lines in write order.
    pub fn lines(&self) -> Vec<(Stream, String)> {
        self.guard().clone()
    }

    /// Captured lines written to `stream`.
    pub fn lines_for(&self, stream: Stream) -> Vec<String> {
        self.guard()
            .iter()
            .filter(|(s, _)| *s == stream)
            .map(|(_, line)| line.clone())
            .collect()
    }

    /// Remove and return everything captured so far.
    pub fn take(&self) -> Vec<(Stream, String)> {
        std::mem::take(&mut *self.guard())
    }

    fn guard(&self) -> MutexGuard<'_, Vec<(Stream, String)>> {
        // A panicking writer cannot leave a half-pushed entry behind.
        self.lines.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Sink for MemorySink {
    fn write_line(&self, stream: Stream, line: &str) -> io::Result<()> {
        self.guard().push((stream, line.to_string()));
        Ok(())
    }
}
