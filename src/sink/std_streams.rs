//! Process standard output and standard error.

use std::io::{self, Write};

use crate::level::Stream;
use crate::sink::Sink;

/// Writes to the process's stdout/stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdSink;

impl StdSink {
    pub fn new() -> Self {
        Self
    }
}

impl Sink for StdSink {
    fn write_line(&self, stream: Stream, line: &str) -> io::Result<()> {
        let mut buf = String::with_capacity(line.len() + 1);
        buf.push_str(line);
        buf.push('\n');

        // Single write under the stream lock keeps concurrent lines whole.
        match stream {
            Stream::Stdout => {
                let mut out = io::stdout().lock();
                out.write_all(buf.as_bytes())?;
                out.flush()
            }
            Stream::Stderr => {
                let mut err = io::stderr().lock();
                err.write_all(buf.as_bytes())?;
                err.flush()
            }
        }
    }
}
