//! JSON serialization of a [`LogRecord`].

use serde_json::{Map, Value};

use crate::config::Identity;
use crate::encoder::record::LogRecord;
use crate::encoder::{keys, FORMAT_VERSION, NULL_VALUE, RESERVED_NAME};

/// Build the JSON object for `record`.
pub fn to_object(identity: &Identity, record: &LogRecord<'_>) -> Map<String, Value> {
    let mut object = Map::new();

    object.insert(keys::VERSION.into(), Value::from(FORMAT_VERSION));
    object.insert(keys::HOST.into(), Value::from(identity.host()));
    object.insert(keys::SERVICE.into(), Value::from(identity.service()));
    object.insert(keys::SHORT_MESSAGE.into(), Value::from(record.short_message));
    object.insert(keys::TIMESTAMP.into(), Value::from(record.timestamp));
    object.insert(keys::LEVEL.into(), Value::from(record.level.rank()));

    if let Some(full_message) = record.full_message {
        object.insert(keys::FULL_MESSAGE.into(), Value::from(full_message));
    }

    for (key, value) in record.fields.iter() {
        object.insert(extra_key(key), Value::from(value.unwrap_or(NULL_VALUE)));
    }

    object
}

/// Encode `record` as a single line of JSON (no trailing newline).
pub fn encode(identity: &Identity, record: &LogRecord<'_>) -> String {
    Value::Object(to_object(identity, record)).to_string()
}

/// Document key for an extra field.
fn extra_key(key: &str) -> String {
    if key == RESERVED_NAME {
        keys::RESERVED_ID.to_string()
    } else {
        format!("_{key}")
    }
}
