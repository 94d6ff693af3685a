//! Shared utilities for integration tests.

use chillog::{Identity, Logger, MemorySink, Stream};
use serde_json::{Map, Value};

pub const HOST: &str = "fake-host";
pub const SERVICE: &str = "fake-service-name";

/// Logger with a fixed identity writing into memory.
#[allow(dead_code)]
pub fn capture_logger() -> Logger<MemorySink> {
    Logger::with_sink(Identity::new(HOST, SERVICE), MemorySink::new())
}

/// Parse one emitted line into its JSON object.
pub fn parse_document(line: &str) -> Map<String, Value> {
    assert!(!line.contains('\n'), "record spans several lines: {line}");
    match serde_json::from_str(line).expect("record is valid JSON") {
        Value::Object(map) => map,
        other => panic!("record is not a JSON object: {other}"),
    }
}

/// Take the single captured record, with its stream.
#[allow(dead_code)]
pub fn single_record(logger: &Logger<MemorySink>) -> (Stream, Map<String, Value>) {
    let mut lines = logger.sink().take();
    assert_eq!(lines.len(), 1, "expected exactly one record");
    let (stream, line) = lines.remove(0);
    (stream, parse_document(&line))
}

/// Assert the six always-present fields.
pub fn assert_base_fields(doc: &Map<String, Value>, short_message: &str, rank: u8) {
    assert_eq!(doc["version"], 1);
    assert_eq!(doc["host"], HOST);
    assert_eq!(doc["service"], SERVICE);
    assert_eq!(doc["short_message"], short_message);
    assert_eq!(doc["level"], rank);
    assert!(doc["timestamp"].is_i64());
}
