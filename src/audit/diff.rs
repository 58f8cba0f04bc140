//! Field-level diffs for audit entries

use serde_json::Value;

const MAX_SHOWN_CHARS: usize = 47;

/// Describe top-level field changes between two JSON values
///
/// Returns `None` when nothing changed.
pub fn generate_diff(before: &Value, after: &Value) -> Option<String> {
    let changes = match (before, after) {
        (Value::Object(before_obj), Value::Object(after_obj)) => {
            let mut changes = Vec::new();

            for (key, before_val) in before_obj {
                match after_obj.get(key) {
                    Some(after_val) if after_val != before_val => changes.push(format!(
                        "{}: {} -> {}",
                        key,
                        format_value(before_val),
                        format_value(after_val)
                    )),
                    Some(_) => {}
                    None => changes.push(format!("{}: {} -> (removed)", key, format_value(before_val))),
                }
            }

            for (key, after_val) in after_obj {
                if !before_obj.contains_key(key) {
                    changes.push(format!("{}: (added) -> {}", key, format_value(after_val)));
                }
            }

            changes
        }
        _ if before != after => vec![format!("{} -> {}", format_value(before), format_value(after))],
        _ => Vec::new(),
    };

    if changes.is_empty() {
        None
    } else {
        Some(changes.join(", "))
    }
}

fn format_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) if s.chars().count() > MAX_SHOWN_CHARS + 3 => {
            let head: String = s.chars().take(MAX_SHOWN_CHARS).collect();
            format!("\"{}...\"", head)
        }
        Value::String(s) => format!("\"{}\"", s),
        Value::Array(arr) => format!("[{} items]", arr.len()),
        Value::Object(obj) => format!("{{{} fields}}", obj.len()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_price_change() {
        let before = json!({"name": "Flour", "price": 50000.0});
        let after = json!({"name": "Flour", "price": 55000.0});

        let diff = generate_diff(&before, &after).unwrap();
        assert_eq!(diff, "price: 50000.0 -> 55000.0");
    }

    #[test]
    fn test_added_and_removed_fields() {
        let before = json!({"name": "Flour", "date": "2025-05-01"});
        let after = json!({"name": "Flour", "quantity": 2});

        let diff = generate_diff(&before, &after).unwrap();
        assert!(diff.contains("date: \"2025-05-01\" -> (removed)"));
        assert!(diff.contains("quantity: (added) -> 2"));
    }

    #[test]
    fn test_no_changes() {
        let value = json!({"name": "Cake", "price": 200000});
        assert!(generate_diff(&value, &value).is_none());
    }

    #[test]
    fn test_null_to_value() {
        let diff = generate_diff(&json!({"price": null}), &json!({"price": 100})).unwrap();
        assert_eq!(diff, "price: null -> 100");
    }

    #[test]
    fn test_long_multibyte_string_is_truncated_on_char_boundary() {
        let long_name = "Bột mì đa dụng ".repeat(10);
        let diff = generate_diff(&json!({"name": long_name}), &json!({"name": "Bột"})).unwrap();
        assert!(diff.contains("...\""));
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(&json!(null)), "null");
        assert_eq!(format_value(&json!("Đường")), "\"Đường\"");
        assert_eq!(format_value(&json!([1, 2, 3])), "[3 items]");
        assert_eq!(format_value(&json!({"a": 1})), "{1 fields}");
    }
}
