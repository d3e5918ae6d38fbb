//! Shared test utilities for the spfsandbox workspace.
//!
//! Lives outside `#[cfg(test)]` so CLI integration tests and golden-file
//! comparisons can share one normalization routine.

use serde_json::Value;

const TIMESTAMP_KEYS: [&str; 2] = ["started_at", "finished_at"];

/// Normalize non-deterministic JSON fields for golden-file comparison.
///
/// `tool.version` is replaced with `"__VERSION__"` only when the root object
/// is an eval report (has `schema`, `tool`, and `results`). Timestamp keys
/// are replaced with `"__TIMESTAMP__"` at any depth.
pub fn normalize_nondeterministic(mut value: Value) -> Value {
    if let Some(obj) = value.as_object_mut() {
        let is_report = obj.contains_key("schema")
            && obj.contains_key("tool")
            && obj.contains_key("results");
        if is_report
            && let Some(tool) = obj.get_mut("tool").and_then(Value::as_object_mut)
            && tool.contains_key("version")
        {
            tool.insert(
                "version".to_string(),
                Value::String("__VERSION__".to_string()),
            );
        }
    }
    normalize_timestamps_recursive(&mut value);
    value
}

fn normalize_timestamps_recursive(value: &mut Value) {
    match value {
        Value::Object(map) => {
            for key in TIMESTAMP_KEYS {
                if let Some(slot) = map.get_mut(key) {
                    *slot = Value::String("__TIMESTAMP__".to_string());
                }
            }
            for val in map.values_mut() {
                normalize_timestamps_recursive(val);
            }
        }
        Value::Array(arr) => {
            for val in arr.iter_mut() {
                normalize_timestamps_recursive(val);
            }
        }
        _ => {}
    }
}
