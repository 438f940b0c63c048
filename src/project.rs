//! Full-text row projection.
//!
//! The structured payload keeps each record's full shape; the full-text
//! table instead needs one flat string per descriptive field in a fixed
//! column order. Lists flatten to `", "`-joined text and absent fields
//! become empty strings, never missing columns — the FTS rows are
//! positional and fixed-arity.

use serde_json::Value;

use crate::models::Record;

/// Descriptive fields indexed for full-text search, in column order.
pub const FULLTEXT_FIELDS: &[&str] = &[
    "title",
    "description",
    "keywords",
    "variables",
    "provider",
    "place",
];

/// Project a record onto the full-text columns. Returns exactly one value
/// per field in [`FULLTEXT_FIELDS`], empty when the field is absent.
pub fn fulltext_row(record: &Record) -> Vec<String> {
    FULLTEXT_FIELDS
        .iter()
        .map(|field| flatten(record.get(*field)))
        .collect()
}

fn flatten(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Array(items)) => items
            .iter()
            .map(scalar_text)
            .collect::<Vec<_>>()
            .join(", "),
        Some(other) => other.to_string(),
    }
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> Record {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected a JSON object"),
        }
    }

    #[test]
    fn test_row_has_fixed_arity() {
        let row = fulltext_row(&Record::new());
        assert_eq!(row.len(), FULLTEXT_FIELDS.len());
        assert!(row.iter().all(String::is_empty));
    }

    #[test]
    fn test_list_joins_with_comma_space() {
        let rec = record(json!({"keywords": ["A", "B"]}));
        let row = fulltext_row(&rec);
        let pos = FULLTEXT_FIELDS.iter().position(|f| *f == "keywords").unwrap();
        assert_eq!(row[pos], "A, B");
    }

    #[test]
    fn test_scalars_stringified() {
        let rec = record(json!({"title": "Tides", "provider": 42}));
        let row = fulltext_row(&rec);
        assert_eq!(row[0], "Tides");
        let pos = FULLTEXT_FIELDS.iter().position(|f| *f == "provider").unwrap();
        assert_eq!(row[pos], "42");
    }

    #[test]
    fn test_mixed_list_elements() {
        let rec = record(json!({"variables": ["salinity", 7]}));
        let row = fulltext_row(&rec);
        let pos = FULLTEXT_FIELDS.iter().position(|f| *f == "variables").unwrap();
        assert_eq!(row[pos], "salinity, 7");
    }

    #[test]
    fn test_null_becomes_empty() {
        let rec = record(json!({"description": null}));
        let row = fulltext_row(&rec);
        assert_eq!(row[1], "");
    }
}
