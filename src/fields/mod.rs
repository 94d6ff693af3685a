//! Caller-supplied extra fields.
//!
//! # Data Flow
//! ```text
//! flat ["k1", "v1", "k2", ...]   → pairs.rs (convert_to_map) ─┐
//! (key, value) iterators / maps  → Fields::from_iter / From ──┴→ Fields → encoder
//! ```
//!
//! # Design Decisions
//! - Values are stringified on insertion; the encoder only sees text or absence
//! - Duplicate keys: last write wins
//! - Iteration order is by key and carries no meaning in the output document

pub mod pairs;

use std::collections::{BTreeMap, HashMap};
use std::fmt::Display;

pub use pairs::convert_to_map;

/// Mapping from field name to its textual value, or `None` for an absent value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fields {
    entries: BTreeMap<String, Option<String>>,
}

impl Fields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `value` rendered through its `Display` implementation.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Display) -> &mut Self {
        self.entries.insert(key.into(), Some(value.to_string()));
        self
    }

    /// Insert a key whose value is absent. Encoded as `"NULL"`.
    pub fn insert_null(&mut self, key: impl Into<String>) -> &mut Self {
        self.entries.insert(key.into(), None);
        self
    }

    /// Insert an optional value; `None` behaves like [`Fields::insert_null`].
    pub fn insert_opt<V: Display>(&mut self, key: impl Into<String>, value: Option<V>) -> &mut Self {
        self.entries.insert(key.into(), value.map(|v| v.to_string()));
        self
    }

    /// Builder-style [`Fields::insert`].
    pub fn with(mut self, key: impl Into<String>, value: impl Display) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<Option<&str>> {
        self.entries.get(key).map(|v| v.as_deref())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_deref()))
    }
}

impl<K: Into<String>, V: Display> FromIterator<(K, V)> for Fields {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut fields = Fields::new();
        for (key, value) in iter {
            fields.insert(key, value);
        }
        fields
    }
}

impl From<HashMap<String, Option<String>>> for Fields {
    fn from(map: HashMap<String, Option<String>>) -> Self {
        Self {
            entries: map.into_iter().collect(),
        }
    }
}

impl From<BTreeMap<String, Option<String>>> for Fields {
    fn from(entries: BTreeMap<String, Option<String>>) -> Self {
        Self { entries }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_stringifies() {
        let mut fields = Fields::new();
        fields.insert("count", 42).insert("ratio", 0.5).insert("ok", true);

        assert_eq!(fields.get("count"), Some(Some("42")));
        assert_eq!(fields.get("ratio"), Some(Some("0.5")));
        assert_eq!(fields.get("ok"), Some(Some("true")));
        assert_eq!(fields.get("missing"), None);
    }

    #[test]
    fn test_null_values() {
        let mut fields = Fields::new();
        fields.insert_null("a").insert_opt("b", None::<u32>).insert_opt("c", Some(7));

        assert_eq!(fields.get("a"), Some(None));
        assert_eq!(fields.get("b"), Some(None));
        assert_eq!(fields.get("c"), Some(Some("7")));
    }

    #[test]
    fn test_last_write_wins() {
        let fields: Fields = vec![("k", "first"), ("k", "second")].into_iter().collect();
        assert_eq!(fields.len(), 1);
        assert_eq!(fields.get("k"), Some(Some("second")));
    }

    #[test]
    fn test_from_hash_map() {
        let mut map = HashMap::new();
        map.insert("user".to_string(), Some("alice".to_string()));
        map.insert("session".to_string(), None);

        let fields = Fields::from(map);
        assert_eq!(fields.len(), 2);
        assert_eq!(fields.get("session"), Some(None));
    }
}
