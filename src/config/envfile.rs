//! Codec for the flat `KEY=VALUE` env-file format.

use indexmap::IndexMap;

/// Parse env-file text into an ordered key → value mapping.
///
/// Each line is split at the first `=`; lines without one are skipped.
/// A duplicate key takes the later value but keeps the position of its
/// first occurrence.
pub fn decode(text: &str) -> IndexMap<String, String> {
    let mut entries = IndexMap::new();
    for line in text.lines() {
        if let Some((key, value)) = line.split_once('=') {
            entries.insert(key.to_string(), value.to_string());
        }
    }
    entries
}

/// Encode an ordered mapping back to env-file text, one `key=value` per
/// line in mapping order.
pub fn encode(entries: &IndexMap<String, String>) -> String {
    entries
        .iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_splits_at_first_equals() {
        let entries = decode("A=1\nB=x=y");
        assert_eq!(entries.get("A").map(String::as_str), Some("1"));
        assert_eq!(entries.get("B").map(String::as_str), Some("x=y"));
    }

    #[test]
    fn lines_without_equals_are_skipped() {
        let entries = decode("A=1\njunk\nB=2");
        assert_eq!(entries.len(), 2);
        assert!(!entries.contains_key("junk"));
    }

    #[test]
    fn duplicate_key_keeps_first_position_last_value() {
        let entries = decode("A=1\nB=2\nA=3");
        let pairs: Vec<_> = entries
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        assert_eq!(pairs, vec![("A", "3"), ("B", "2")]);
    }

    #[test]
    fn empty_value_is_kept() {
        let entries = decode("A=");
        assert_eq!(entries.get("A").map(String::as_str), Some(""));
    }

    #[test]
    fn round_trip() {
        let text = "SH_ROUTES='/date' date\nSH_BASIC_AUTH=admin:secret";
        assert_eq!(encode(&decode(text)), text);
    }

    #[test]
    fn encode_empty_mapping_is_empty_string() {
        assert_eq!(encode(&IndexMap::new()), "");
    }
}
