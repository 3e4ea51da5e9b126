//! Diff summaries for audit logging

use serde_json::Value;

const MAX_STRING_CHARS: usize = 50;

/// Summarize top-level field changes between two JSON values
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
                    None => changes.push(format!(
                        "{}: {} -> (removed)",
                        key,
                        format_value(before_val)
                    )),
                }
            }

            for (key, after_val) in after_obj {
                if !before_obj.contains_key(key) {
                    changes.push(format!("{}: (added) -> {}", key, format_value(after_val)));
                }
            }

            changes
        }
        _ if before != after => vec![format!(
            "{} -> {}",
            format_value(before),
            format_value(after)
        )],
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
        Value::String(s) if s.chars().count() > MAX_STRING_CHARS => {
            let head: String = s.chars().take(MAX_STRING_CHARS - 3).collect();
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
    fn test_no_changes() {
        let value = json!({"amount": 100, "category": "Food"});
        assert_eq!(generate_diff(&value, &value), None);
    }

    #[test]
    fn test_changed_added_removed() {
        let before = json!({"amount": 100, "note": "lunch"});
        let after = json!({"amount": 250, "category": "Food"});

        let diff = generate_diff(&before, &after).unwrap();
        assert!(diff.contains("amount: 100 -> 250"));
        assert!(diff.contains("note: \"lunch\" -> (removed)"));
        assert!(diff.contains("category: (added) -> \"Food\""));
    }

    #[test]
    fn test_long_strings_truncated_on_char_boundary() {
        let before = json!({"note": "₹".repeat(60)});
        let after = json!({"note": "short"});

        let diff = generate_diff(&before, &after).unwrap();
        assert!(diff.contains(&format!("\"{}...\"", "₹".repeat(47))));
    }

    #[test]
    fn test_non_object_values() {
        assert_eq!(
            generate_diff(&json!(1), &json!(2)),
            Some("1 -> 2".to_string())
        );
    }
}
