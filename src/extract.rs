use serde_json::Value;

use crate::error::{Error, Result};

/// Collects `field` from the first `limit` elements of `items`, rendered as text.
///
/// Strings are copied as-is, scalars use their JSON text and nested values are
/// rendered as compact JSON. A `null` value counts as missing. `limit` must
/// not exceed `items.len()`.
pub fn extract_field(items: &[Value], field: &str, limit: usize) -> Result<Vec<String>> {
    if limit > items.len() {
        return Err(Error::OutOfBounds {
            limit,
            len: items.len(),
        });
    }

    items[..limit]
        .iter()
        .enumerate()
        .map(|(index, item)| {
            item.get(field)
                .filter(|value| !value.is_null())
                .map(render_value)
                .ok_or_else(|| Error::MissingField {
                    field: field.to_string(),
                    index,
                })
        })
        .collect()
}

fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn items() -> Vec<Value> {
        vec![
            json!({ "title": "first", "score": 10, "is_answered": true }),
            json!({ "title": "second", "score": -2, "is_answered": false }),
            json!({ "title": "third", "score": 0, "is_answered": true }),
        ]
    }

    #[test]
    fn test_zero_limit_is_empty() {
        assert!(extract_field(&items(), "title", 0).unwrap().is_empty());
    }

    #[test]
    fn test_keeps_order_and_limit() {
        let titles = extract_field(&items(), "title", 2).unwrap();
        assert_eq!(titles, vec!["first", "second"]);
    }

    #[test]
    fn test_scalars_are_rendered_as_text() {
        let scores = extract_field(&items(), "score", 3).unwrap();
        assert_eq!(scores, vec!["10", "-2", "0"]);

        let answered = extract_field(&items(), "is_answered", 3).unwrap();
        assert_eq!(answered, vec!["true", "false", "true"]);
    }

    #[test]
    fn test_null_field_is_rejected() {
        let items = vec![json!({ "title": "ok" }), json!({ "title": null })];

        match extract_field(&items, "title", 2).unwrap_err() {
            Error::MissingField { field, index } => {
                assert_eq!(field, "title");
                assert_eq!(index, 1);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_limit_past_end_is_rejected() {
        let err = extract_field(&items(), "title", 4).unwrap_err();
        assert!(matches!(err, Error::OutOfBounds { limit: 4, len: 3 }));
    }

    #[test]
    fn test_missing_field_is_rejected() {
        let mut items = items();
        items[1] = json!({ "score": 1 });

        let err = extract_field(&items, "title", 3).unwrap_err();
        match err {
            Error::MissingField { field, index } => {
                assert_eq!(field, "title");
                assert_eq!(index, 1);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_non_object_element_counts_as_missing() {
        let items = vec![json!("not an object")];
        assert!(matches!(
            extract_field(&items, "title", 1),
            Err(Error::MissingField { index: 0, .. })
        ));
    }
}
