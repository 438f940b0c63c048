//! Field renaming and value sanitization.
//!
//! The harvested vocabulary is open-ended. A fixed lookup table renames
//! known external field names to their canonical equivalents; everything
//! else passes through untouched, so unknown fields survive into the
//! stored payload. Values are then sanitized so no string leaf carries a
//! single quote into the store.

use serde_json::Value;

use crate::models::Record;

/// External field name → canonical field name.
///
/// Keys absent from this table keep their external name. When two external
/// keys map to the same canonical name, the one enumerating later in the
/// record wins; records enumerate in sorted key order, so the outcome is
/// deterministic.
pub const FIELD_MAP: &[(&str, &str)] = &[
    ("@id", "id"),
    ("@type", "type"),
    ("name", "title"),
    ("headline", "title"),
    ("description", "description"),
    ("abstract", "description"),
    ("keywords", "keywords"),
    ("license", "license"),
    ("provider", "provider"),
    ("publisher", "provider"),
    ("boundingBox", "bbox"),
    ("temporalCoverage", "temporal"),
    ("variableMeasured", "variables"),
    ("contentLocation", "place"),
    ("inLanguage", "language"),
    ("dateModified", "updated"),
];

/// Rename known external fields to canonical names, keeping every other
/// key as-is. No key is ever dropped.
pub fn map_fields(raw: Record) -> Record {
    let mut mapped = Record::new();
    for (key, value) in raw {
        let canonical = FIELD_MAP
            .iter()
            .find(|(external, _)| *external == key)
            .map_or(key.as_str(), |&(_, canonical)| canonical);
        mapped.insert(canonical.to_string(), value);
    }
    mapped
}

/// Strip single quotes from every string leaf, recursing through lists and
/// nested values. Idempotent; non-string scalars pass through unchanged.
pub fn sanitize(value: Value) -> Value {
    match value {
        Value::String(s) => Value::String(s.replace('\'', "")),
        Value::Array(items) => Value::Array(items.into_iter().map(sanitize).collect()),
        Value::Object(map) => map.into_iter().map(|(k, v)| (k, sanitize(v))).collect(),
        other => other,
    }
}

/// Sanitize every value of a record.
pub fn sanitize_record(record: Record) -> Record {
    record.into_iter().map(|(k, v)| (k, sanitize(v))).collect()
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
    fn test_known_fields_renamed() {
        let raw = record(json!({
            "@id": "ds-1",
            "name": "Baltic Sea Temperatures",
            "keywords": ["ocean", "temperature"]
        }));
        let mapped = map_fields(raw);
        assert_eq!(mapped.get("id"), Some(&json!("ds-1")));
        assert_eq!(mapped.get("title"), Some(&json!("Baltic Sea Temperatures")));
        assert_eq!(mapped.get("keywords"), Some(&json!(["ocean", "temperature"])));
        assert!(!mapped.contains_key("@id"));
        assert!(!mapped.contains_key("name"));
    }

    #[test]
    fn test_unknown_fields_pass_through() {
        let raw = record(json!({"@id": "ds-1", "samplingRate": "hourly"}));
        let mapped = map_fields(raw);
        assert_eq!(mapped.get("samplingRate"), Some(&json!("hourly")));
        assert_eq!(mapped.len(), 2);
    }

    #[test]
    fn test_no_keys_dropped() {
        let raw = record(json!({
            "@id": "ds-1",
            "@type": "Dataset",
            "description": "d",
            "custom": 7
        }));
        let mapped = map_fields(raw.clone());
        assert_eq!(mapped.len(), raw.len());
    }

    #[test]
    fn test_collision_last_write_wins() {
        // "headline" enumerates before "name", so "name" wins the title slot.
        let raw = record(json!({"headline": "Short", "name": "Full"}));
        let mapped = map_fields(raw);
        assert_eq!(mapped.len(), 1);
        assert_eq!(mapped.get("title"), Some(&json!("Full")));
    }

    #[test]
    fn test_sanitize_strips_single_quotes() {
        let out = sanitize(json!("it's the '90s"));
        assert_eq!(out, json!("its the 90s"));
    }

    #[test]
    fn test_sanitize_lists_element_wise() {
        let out = sanitize(json!(["o'clock", "plain", 3]));
        assert_eq!(out, json!(["oclock", "plain", 3]));
    }

    #[test]
    fn test_sanitize_recurses_into_nested_values() {
        let out = sanitize(json!({"inner": {"deep": "a'b"}, "list": [["x'y"]]}));
        assert_eq!(out, json!({"inner": {"deep": "ab"}, "list": [["xy"]]}));
    }

    #[test]
    fn test_sanitize_leaves_other_scalars() {
        assert_eq!(sanitize(json!(42)), json!(42));
        assert_eq!(sanitize(json!(2.5)), json!(2.5));
        assert_eq!(sanitize(json!(null)), json!(null));
        assert_eq!(sanitize(json!(true)), json!(true));
    }

    #[test]
    fn test_sanitize_idempotent() {
        let input = json!({
            "title": "A 'quoted' title",
            "keywords": ["d'eau", "sea"],
            "depth": 30
        });
        let once = sanitize(input);
        let twice = sanitize(once.clone());
        assert_eq!(once, twice);
    }
}
