//! Outline document construction and IO.
//!
//! The outline is an insertion-ordered JSON object keyed `Adhikarana_1 …
//! Adhikarana_N`. A freshly rebuilt entry carries `name`, `sutras`, and six
//! empty placeholder fields that a human editor fills in later; the validator
//! reads only `name` and `sutras` back and leaves everything else untouched.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Value};

use crate::constants::outline::{ENTRY_KEY_PREFIX, FIELD_NAME, FIELD_SUTRAS, JSON_INDENT};
use crate::errors::OutlineError;
use crate::grouping::AdhikaranaRun;
use crate::types::{AdhikaranaName, EntryKey, SpanText};

/// The machine-meaningful core of one outline entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutlineEntry {
    /// Adhikarana label this entry describes.
    pub name: AdhikaranaName,
    /// Declared sutra span for the label.
    pub sutras: SpanText,
}

/// Ordered outline document: entry key to entry, in document order.
pub type OutlineDocument = IndexMap<EntryKey, OutlineEntry>;

/// Build an outline from consecutive runs, one entry per run, keyed
/// `Adhikarana_1 … Adhikarana_N` in run order.
pub fn build_outline(runs: &[AdhikaranaRun]) -> OutlineDocument {
    runs.iter()
        .enumerate()
        .map(|(idx, run)| {
            let key = format!("{ENTRY_KEY_PREFIX}{}", idx + 1);
            let entry = OutlineEntry {
                name: run.name.clone(),
                sutras: run.span(),
            };
            (key, entry)
        })
        .collect()
}

/// Expand the outline into its JSON document form, appending each of
/// `placeholder_fields` as an empty string in the given order.
pub fn outline_to_json(outline: &OutlineDocument, placeholder_fields: &[&str]) -> Value {
    let mut document = Map::new();
    for (key, entry) in outline {
        let mut fields = Map::new();
        fields.insert(FIELD_NAME.to_string(), Value::String(entry.name.clone()));
        fields.insert(FIELD_SUTRAS.to_string(), Value::String(entry.sutras.clone()));
        for placeholder in placeholder_fields {
            fields.insert(placeholder.to_string(), Value::String(String::new()));
        }
        document.insert(key.clone(), Value::Object(fields));
    }
    Value::Object(document)
}

/// Write the outline document to `path` as pretty JSON (4-space indent,
/// non-ASCII text left unescaped).
pub fn write_outline(
    path: &Path,
    outline: &OutlineDocument,
    placeholder_fields: &[&str],
) -> Result<(), OutlineError> {
    let document = outline_to_json(outline, placeholder_fields);
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    let formatter = PrettyFormatter::with_indent(JSON_INDENT.as_bytes());
    let mut serializer = serde_json::Serializer::with_formatter(&mut writer, formatter);
    document.serialize(&mut serializer)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

/// Read an outline document back as an ordered key/value map.
///
/// Entry shapes are not checked here; the validator extracts the fields it
/// needs and reports a [`OutlineError::MalformedEntry`] when one is missing.
pub fn read_outline(path: &Path) -> Result<Map<String, Value>, OutlineError> {
    let text = std::fs::read_to_string(path)?;
    match serde_json::from_str(&text)? {
        Value::Object(map) => Ok(map),
        _ => Err(OutlineError::NotAnObject),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::outline::PLACEHOLDER_FIELDS;

    fn run(name: &str, ids: &[&str]) -> AdhikaranaRun {
        AdhikaranaRun {
            name: name.to_string(),
            sutra_ids: ids.iter().map(|id| id.to_string()).collect(),
        }
    }

    #[test]
    fn build_outline_numbers_entries_in_run_order() {
        let runs = vec![run("A", &["1.1.1", "1.1.2"]), run("B", &["1.1.3"])];
        let outline = build_outline(&runs);
        let keys: Vec<&str> = outline.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["Adhikarana_1", "Adhikarana_2"]);
        assert_eq!(outline["Adhikarana_1"].sutras, "1.1.1-1.1.2");
        assert_eq!(outline["Adhikarana_2"].sutras, "1.1.3");
    }

    #[test]
    fn outline_json_orders_fields_and_blanks_placeholders() {
        let outline = build_outline(&[run("A", &["1.1.1"])]);
        let document = outline_to_json(&outline, &PLACEHOLDER_FIELDS);
        let entry = document["Adhikarana_1"].as_object().unwrap();
        let field_keys: Vec<&str> = entry.keys().map(String::as_str).collect();
        assert_eq!(field_keys[0], "name");
        assert_eq!(field_keys[1], "sutras");
        assert_eq!(field_keys[2..].to_vec(), PLACEHOLDER_FIELDS.to_vec());
        for placeholder in PLACEHOLDER_FIELDS {
            assert_eq!(entry[placeholder], "");
        }
    }

    #[test]
    fn write_then_read_preserves_order_and_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("outline.json");
        let runs = vec![
            run("धर्मजिज्ञासा", &["1.1.1"]),
            run("B", &["1.1.2", "1.1.3"]),
        ];
        let outline = build_outline(&runs);
        write_outline(&path, &outline, &PLACEHOLDER_FIELDS).unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        // Non-ASCII stays literal in the output file.
        assert!(raw.contains("धर्मजिज्ञासा"));

        let read_back = read_outline(&path).unwrap();
        let keys: Vec<&str> = read_back.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["Adhikarana_1", "Adhikarana_2"]);
        assert_eq!(read_back["Adhikarana_2"]["sutras"], "1.1.2-1.1.3");
    }

    #[test]
    fn rebuild_output_is_byte_identical_across_runs() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("a.json");
        let second = dir.path().join("b.json");
        let outline = build_outline(&[run("A", &["1.1.1", "1.1.2"]), run("B", &["1.1.3"])]);
        write_outline(&first, &outline, &PLACEHOLDER_FIELDS).unwrap();
        write_outline(&second, &outline, &PLACEHOLDER_FIELDS).unwrap();
        assert_eq!(
            std::fs::read(&first).unwrap(),
            std::fs::read(&second).unwrap()
        );
    }

    #[test]
    fn read_outline_rejects_non_object_root() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("outline.json");
        std::fs::write(&path, "[1, 2, 3]").unwrap();
        assert!(matches!(
            read_outline(&path),
            Err(OutlineError::NotAnObject)
        ));
    }
}
