//! Key-value list flattening
//!
//! Turns an alternating key/value list into a single deterministic
//! `key=value` string: duplicate keys collapse (last write wins), keys sort
//! in byte order, so two calls with the same logical content in any order
//! render identically. Required for log diffing and test stability.

use super::value::{render, FieldValue};

/// Sentinel paired with a trailing key that has no value.
pub const MISSING_VALUE: &str = "(MISSING)";

/// Flatten an alternating key/value list into `"k1"=v1 "k2"=v2 ...`.
///
/// Keys and values are both rendered through the value renderer, so keys
/// appear quoted. Empty input produces an empty string.
///
/// # Panics
///
/// Panics if an element in key position is not a string. A non-string key is
/// a caller bug and is surfaced immediately rather than emitted as corrupted
/// output.
pub fn flatten(kv_list: &[FieldValue]) -> String {
    let mut fields = std::collections::BTreeMap::new();
    for pair in kv_list.chunks(2) {
        let key = match pair[0].as_key() {
            Some(k) => k.to_string(),
            None => panic!("log key is not a string: {}", render(&pair[0])),
        };
        let value = pair
            .get(1)
            .cloned()
            .unwrap_or_else(|| FieldValue::String(MISSING_VALUE.to_string()));
        fields.insert(key, value);
    }

    let mut out = String::new();
    for (i, (key, value)) in fields.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push_str(&render(&FieldValue::String(key.clone())));
        out.push('=');
        out.push_str(&render(value));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_list() {
        assert_eq!(flatten(&[]), "");
    }

    #[test]
    fn test_single_pair() {
        let kv = [FieldValue::from("port"), FieldValue::from(8080)];
        assert_eq!(flatten(&kv), "\"port\"=8080");
    }

    #[test]
    fn test_keys_sorted() {
        let kv = [
            FieldValue::from("b"),
            FieldValue::from(2),
            FieldValue::from("a"),
            FieldValue::from(1),
        ];
        assert_eq!(flatten(&kv), "\"a\"=1 \"b\"=2");
    }

    #[test]
    fn test_duplicate_key_last_wins() {
        let kv = [
            FieldValue::from("k"),
            FieldValue::from("first"),
            FieldValue::from("k"),
            FieldValue::from("second"),
        ];
        assert_eq!(flatten(&kv), "\"k\"=\"second\"");
    }

    #[test]
    fn test_odd_length_pairs_missing_sentinel() {
        let kv = [
            FieldValue::from("done"),
            FieldValue::from(true),
            FieldValue::from("dangling"),
        ];
        assert_eq!(flatten(&kv), "\"dangling\"=\"(MISSING)\" \"done\"=true");
    }

    #[test]
    #[should_panic(expected = "log key is not a string")]
    fn test_non_string_key_panics() {
        let kv = [FieldValue::from(42), FieldValue::from("value")];
        flatten(&kv);
    }

    #[test]
    fn test_null_value_renders_null() {
        let kv = [FieldValue::from("maybe"), FieldValue::Null];
        assert_eq!(flatten(&kv), "\"maybe\"=null");
    }
}
