// Author: Dustin Pilgrim
// License: MIT

use std::fs;
use std::path::Path;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::ast::{Document, Section, Value};
use crate::parser::parse;
use crate::HfcError;

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::String(s) => serializer.serialize_str(s),
            Value::Integer(n) => serializer.serialize_i64(*n),
            Value::Float(n) => serializer.serialize_f64(*n),
            Value::Boolean(b) => serializer.serialize_bool(*b),
            Value::List(items) => items.serialize(serializer),
            Value::Null => serializer.serialize_unit(),
        }
    }
}

/// A section is a single-key map: `{ "name": { "var": value, ... } }`.
impl Serialize for Section {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.name, &self.variables)?;
        map.end()
    }
}

impl Serialize for Document {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.sections.serialize(serializer)
    }
}

/// Export an HFC document to pretty-printed JSON.
///
/// The document becomes an array with one single-key object per section, so
/// duplicate section names and the order of sections and variables survive:
///
/// ```text
/// [
///   { "Server": { "host": "localhost", "port": 8080 } },
///   { "Flags": { "debug": false, "tags": ["a", "b"], "unset": null } }
/// ]
/// ```
///
/// This is a one-way dump; HFC text stays the source of truth.
pub fn export_document_to_json(doc: &Document) -> Result<String, HfcError> {
    serde_json::to_string_pretty(doc).map_err(|e| HfcError::SerializationError {
        kind: crate::error::SerializationErrorKind::UnrepresentableValue,
        message: format!("Failed to encode JSON: {}", e),
        hint: None,
        code: Some(510),
    })
}

/// Read, parse and export an HFC file in one call.
///
/// # Errors
/// Returns error if file doesn't exist or contains invalid HFC syntax.
pub fn export_hfc_file<P: AsRef<Path>>(path: P) -> Result<String, HfcError> {
    let input = fs::read_to_string(path.as_ref()).map_err(|e| {
        HfcError::file_error(
            format!("Failed to read file: {}", e),
            path.as_ref().to_string_lossy().to_string(),
        )
    })?;

    let doc = parse(&input)?;
    export_document_to_json(&doc)
}

/// Write the JSON export of `doc` to `path`.
pub fn write_json<P: AsRef<Path>>(doc: &Document, path: P) -> Result<(), HfcError> {
    let json = export_document_to_json(doc)?;
    fs::write(path.as_ref(), json).map_err(|e| HfcError::FileError {
        message: format!("Failed to write JSON: {}", e),
        path: path.as_ref().to_string_lossy().to_string(),
        hint: None,
        code: Some(302),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const INPUT: &str = r#"
== Server ==
host = "localhost"
port = 8080
ratio = 0,75

== Flags ==
debug = nao
tags = ["a", ("b", 2)]
unset
"#;

    #[test]
    fn test_export_document_to_json() {
        let doc = parse(INPUT).expect("Failed to parse");
        let json_output = export_document_to_json(&doc).expect("Failed to export document to JSON");

        println!("--- Exported JSON ---\n{}", json_output);

        let v: serde_json::Value = serde_json::from_str(&json_output).unwrap();
        assert!(v.is_array());
        assert_eq!(v[0]["Server"]["host"], "localhost");
        assert_eq!(v[0]["Server"]["port"], 8080);
        assert_eq!(v[0]["Server"]["ratio"], 0.75);
        assert_eq!(v[1]["Flags"]["debug"], false);
        assert_eq!(v[1]["Flags"]["tags"], serde_json::json!(["a", ["b", 2]]));
        assert!(v[1]["Flags"]["unset"].is_null());
    }

    #[test]
    fn test_export_keeps_order_and_duplicates() {
        let doc = parse("== B ==\nz = 1\na = 2\n== A ==\n== B ==\n").unwrap();
        let json_output = export_document_to_json(&doc).unwrap();

        let z = json_output.find("\"z\"").unwrap();
        let a = json_output.find("\"a\"").unwrap();
        assert!(z < a, "variables should keep declaration order");

        let v: serde_json::Value = serde_json::from_str(&json_output).unwrap();
        assert_eq!(v.as_array().map(Vec::len), Some(3));
        assert!(v[2]["B"].as_object().unwrap().is_empty());
    }

    #[test]
    fn test_export_file_and_write_json() {
        let dir = tempdir().unwrap();
        let hfc = dir.path().join("config.hfc");
        let json = dir.path().join("config.json");
        fs::write(&hfc, INPUT).unwrap();

        let exported = export_hfc_file(&hfc).expect("Failed to export file");
        let doc = parse(INPUT).unwrap();
        write_json(&doc, &json).expect("Failed to write json");

        assert_eq!(fs::read_to_string(&json).unwrap(), exported);
    }

    #[test]
    fn test_export_missing_file() {
        assert!(matches!(
            export_hfc_file("/no/such/config.hfc"),
            Err(HfcError::FileError { .. })
        ));
    }
}
