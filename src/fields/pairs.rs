//! Flat key/value sequence normalization.

use crate::fields::Fields;

/// Convert an alternating `key, value, key, value, ...` sequence into [`Fields`].
///
/// `None` and an empty slice both yield no fields. A trailing key without a
/// value maps to `""`. Later duplicates overwrite earlier ones.
pub fn convert_to_map<S: AsRef<str>>(pairs: Option<&[S]>) -> Fields {
    let mut fields = Fields::new();
    let Some(pairs) = pairs else {
        return fields;
    };

    for chunk in pairs.chunks(2) {
        let key = chunk[0].as_ref();
        let value = chunk.get(1).map(AsRef::as_ref).unwrap_or("");
        fields.insert(key, value);
    }

    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_sequence() {
        assert!(convert_to_map::<&str>(None).is_empty());
    }

    #[test]
    fn test_empty_sequence() {
        let empty: [&str; 0] = [];
        assert!(convert_to_map(Some(&empty[..])).is_empty());
    }

    #[test]
    fn test_single_pair() {
        let fields = convert_to_map(Some(&["key", "value"][..]));
        assert_eq!(fields.len(), 1);
        assert_eq!(fields.get("key"), Some(Some("value")));
    }

    #[test]
    fn test_trailing_key_gets_empty_value() {
        let fields = convert_to_map(Some(&["key1", "value1", "key2"][..]));
        assert_eq!(fields.len(), 2);
        assert_eq!(fields.get("key1"), Some(Some("value1")));
        assert_eq!(fields.get("key2"), Some(Some("")));
    }

    #[test]
    fn test_duplicate_keys() {
        let owned = vec!["k".to_string(), "a".to_string(), "k".to_string(), "b".to_string()];
        let fields = convert_to_map(Some(owned.as_slice()));
        assert_eq!(fields.len(), 1);
        assert_eq!(fields.get("k"), Some(Some("b")));
    }
}
