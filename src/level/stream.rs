//! The two output destinations a record can be routed to.

use std::fmt;

/// Standard stream selected by [`Level::stream`](crate::level::Level::stream).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stream {
    /// Normal sink.
    Stdout,
    /// Error sink.
    Stderr,
}

impl fmt::Display for Stream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stream::Stdout => f.write_str("stdout"),
            Stream::Stderr => f.write_str("stderr"),
        }
    }
}
