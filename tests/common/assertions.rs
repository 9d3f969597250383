//! Custom assertions for integration tests
//!
//! Helpers for validating CLI output and the JSON section export.

use serde_json::Value;

/// Assert that output is valid JSON and return parsed value
pub fn assert_valid_json(output: &str, context: &str) -> Value {
    serde_json::from_str(output).unwrap_or_else(|e| {
        panic!(
            "Expected valid JSON ({}): {}\nOutput:\n{}",
            context, e, output
        )
    })
}

/// Assert the JSON export has the `{ projectType, routes, sections }` shape
pub fn assert_context_shape(json: &Value) {
    assert!(
        json["projectType"].is_string(),
        "missing projectType:\n{}",
        json
    );
    assert!(json["routes"].is_array(), "missing routes:\n{}", json);
    assert!(json["sections"].is_object(), "missing sections:\n{}", json);
}

/// Section names in output order
pub fn section_names(json: &Value) -> Vec<String> {
    json["sections"]
        .as_object()
        .map(|obj| obj.keys().cloned().collect())
        .unwrap_or_default()
}

/// Find the file record named `file_name` in any section
pub fn find_file<'a>(json: &'a Value, file_name: &str) -> Option<&'a Value> {
    json["sections"]
        .as_object()?
        .values()
        .filter_map(Value::as_array)
        .flatten()
        .find(|f| f["name"].as_str() == Some(file_name))
}

/// Names listed under `bucket` (`functions`, `constants`, ...) for a file
pub fn bucket(file: &Value, bucket: &str) -> Vec<String> {
    file[bucket]
        .as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(|v| v.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}

/// Assert that `file_name` exports exactly `expected` in `bucket`
pub fn assert_bucket(json: &Value, file_name: &str, bucket_name: &str, expected: &[&str]) {
    let file = find_file(json, file_name)
        .unwrap_or_else(|| panic!("File '{}' not found in output:\n{}", file_name, json));
    assert_eq!(
        bucket(file, bucket_name),
        expected,
        "Unexpected {} for {}",
        bucket_name,
        file_name
    );
}

/// Assert that stdout contains each of `needles`
pub fn assert_contains_all(output: &str, needles: &[&str]) {
    for needle in needles {
        assert!(
            output.contains(needle),
            "Expected output to contain '{}'\nOutput:\n{}",
            needle,
            output
        );
    }
}
