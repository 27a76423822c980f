//! JSON document reading and writing.
//!
//! Documents are written with four-space indentation and raw UTF-8, and
//! objects keep their key order through a read/modify/write cycle.

use crate::error::Result;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;
use std::path::Path;

const INDENT: &[u8] = b"    ";

/// Serialize a value as four-space indented JSON.
pub fn to_pretty_string<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<String> {
    let mut buffer = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(INDENT));
    value.serialize(&mut serializer)?;
    // serde_json only emits valid UTF-8
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// Read and parse a JSON document.
pub fn read_json<P: AsRef<Path>>(path: P) -> Result<Value> {
    let contents = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

/// Serialize a value and overwrite the file at `path`.
pub fn write_json<P: AsRef<Path>, T: Serialize + ?Sized>(path: P, value: &T) -> Result<()> {
    let contents = to_pretty_string(value)?;
    std::fs::write(path, contents)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_pretty_indent() {
        let value = json!({"a": [1, 2], "b": {"c": "é"}});
        let text = to_pretty_string(&value).unwrap();
        assert_eq!(
            text,
            "{\n    \"a\": [\n        1,\n        2\n    ],\n    \"b\": {\n        \"c\": \"é\"\n    }\n}"
        );
    }

    #[test]
    fn test_key_order_survives_round_trip() {
        let text = r#"{"zeta": 1, "alpha": 2, "mid": {"y": true, "b": false}}"#;
        let value: Value = serde_json::from_str(text).unwrap();
        let keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, ["zeta", "alpha", "mid"]);

        let written = to_pretty_string(&value).unwrap();
        assert!(written.find("zeta").unwrap() < written.find("alpha").unwrap());
        assert!(written.find("\"y\"").unwrap() < written.find("\"b\"").unwrap());
    }

    #[test]
    fn test_read_write_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.json");

        write_json(&path, &json!({"format_version": [1, 1, 0]})).unwrap();
        let value = read_json(&path).unwrap();
        assert_eq!(value, json!({"format_version": [1, 1, 0]}));
    }
}
