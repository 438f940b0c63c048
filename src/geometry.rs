//! Bounding-box geometry extraction.
//!
//! A bounding box arrives as `[west, south, east, north]` — a JSON list of
//! four numbers, or the same four numbers in one comma/whitespace-delimited
//! string. The spatial table wants a closed polygon ring, so the rectangle
//! is expanded to its four corners and serialized in the geopoly literal
//! syntax.

use serde_json::Value;

use crate::error::GeometryError;

/// Build the closed geopoly ring for a record's bounding box.
///
/// Corner order is `(w,s), (e,s), (e,n), (w,n)`, with the first vertex
/// repeated to close the ring.
pub fn bbox_ring(bbox: Option<&Value>) -> Result<String, GeometryError> {
    let value = bbox.ok_or(GeometryError::Missing)?;
    let [w, s, e, n] = bbox_components(value)?;
    Ok(format!(
        "[[{w},{s}],[{e},{s}],[{e},{n}],[{w},{n}],[{w},{s}]]"
    ))
}

fn bbox_components(value: &Value) -> Result<[f64; 4], GeometryError> {
    match value {
        Value::Array(items) => {
            if items.len() != 4 {
                return Err(GeometryError::WrongArity(items.len()));
            }
            let mut components = [0.0; 4];
            for (slot, item) in components.iter_mut().zip(items) {
                *slot = item
                    .as_f64()
                    .ok_or_else(|| GeometryError::NonNumeric(item.to_string()))?;
            }
            Ok(components)
        }
        Value::String(text) => {
            let parts: Vec<&str> = text
                .split(|c: char| c == ',' || c.is_whitespace())
                .filter(|part| !part.is_empty())
                .collect();
            if parts.len() != 4 {
                return Err(GeometryError::WrongArity(parts.len()));
            }
            let mut components = [0.0; 4];
            for (slot, part) in components.iter_mut().zip(&parts) {
                *slot = part
                    .parse()
                    .map_err(|_| GeometryError::NonNumeric((*part).to_string()))?;
            }
            Ok(components)
        }
        other => Err(GeometryError::NonNumeric(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_ring_corners_and_closure() {
        let ring = bbox_ring(Some(&json!([10.0, 53.5, 30.0, 66.0]))).unwrap();
        assert_eq!(ring, "[[10,53.5],[30,53.5],[30,66],[10,66],[10,53.5]]");
    }

    #[test]
    fn test_negative_coordinates() {
        let ring = bbox_ring(Some(&json!([-25.0, -10.5, 5.0, 12.0]))).unwrap();
        assert_eq!(ring, "[[-25,-10.5],[5,-10.5],[5,12],[-25,12],[-25,-10.5]]");
    }

    #[test]
    fn test_string_encoded_bbox() {
        let ring = bbox_ring(Some(&json!("10 53.5 30 66"))).unwrap();
        assert_eq!(ring, "[[10,53.5],[30,53.5],[30,66],[10,66],[10,53.5]]");

        let comma = bbox_ring(Some(&json!("10, 53.5, 30, 66"))).unwrap();
        assert_eq!(comma, ring);
    }

    #[test]
    fn test_integer_components() {
        let ring = bbox_ring(Some(&json!([0, 0, 1, 1]))).unwrap();
        assert_eq!(ring, "[[0,0],[1,0],[1,1],[0,1],[0,0]]");
    }

    #[test]
    fn test_missing_bbox() {
        assert!(matches!(bbox_ring(None), Err(GeometryError::Missing)));
    }

    #[test]
    fn test_wrong_arity() {
        assert!(matches!(
            bbox_ring(Some(&json!([1, 2, 3]))),
            Err(GeometryError::WrongArity(3))
        ));
        assert!(matches!(
            bbox_ring(Some(&json!("1 2 3 4 5"))),
            Err(GeometryError::WrongArity(5))
        ));
    }

    #[test]
    fn test_non_numeric_component() {
        assert!(matches!(
            bbox_ring(Some(&json!([1, 2, "east", 4]))),
            Err(GeometryError::NonNumeric(_))
        ));
        assert!(matches!(
            bbox_ring(Some(&json!({"west": 1}))),
            Err(GeometryError::NonNumeric(_))
        ));
    }
}
