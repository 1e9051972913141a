use anyhow::Context as _;
use axum::http::{HeaderMap, StatusCode};
use serde_json::Value;

/// Assert a response status with a readable label
pub fn assert_status(actual: StatusCode, expected: StatusCode, what: &str) {
    assert_eq!(actual, expected, "unexpected status for {what}");
}

/// Assert that a response is a FHIR Bundle of the given type
pub fn assert_bundle<'a>(value: &'a Value, bundle_type: &str) -> anyhow::Result<&'a Value> {
    assert_eq!(
        value.get("resourceType").and_then(|v| v.as_str()),
        Some("Bundle"),
        "expected Bundle resource type"
    );
    assert_eq!(
        value.get("type").and_then(|v| v.as_str()),
        Some(bundle_type),
        "expected Bundle.type = {bundle_type}"
    );
    Ok(value)
}

/// Get Bundle entries; an empty Bundle has none.
pub fn get_bundle_entries(bundle: &Value) -> Vec<&Value> {
    bundle
        .get("entry")
        .and_then(|v| v.as_array())
        .map(|entries| entries.iter().collect())
        .unwrap_or_default()
}

/// Assert Bundle.total and the number of entries
pub fn assert_bundle_total(bundle: &Value, expected: usize) -> anyhow::Result<()> {
    let total = bundle
        .get("total")
        .and_then(|v| v.as_u64())
        .context("Bundle.total is a number")?;
    assert_eq!(total as usize, expected, "Bundle.total");
    assert_eq!(get_bundle_entries(bundle).len(), expected, "entry count");
    Ok(())
}

/// `meta.versionId` of every entry resource, in order
pub fn entry_version_ids(bundle: &Value) -> Vec<String> {
    get_bundle_entries(bundle)
        .into_iter()
        .filter_map(|e| e["resource"]["meta"]["versionId"].as_str())
        .map(str::to_string)
        .collect()
}

/// Assert an OperationOutcome with one issue of the given code, returning
/// its diagnostics
pub fn assert_operation_outcome<'a>(value: &'a Value, code: &str) -> &'a str {
    assert_eq!(value["resourceType"], "OperationOutcome");
    assert_eq!(value["issue"][0]["severity"], "error");
    assert_eq!(value["issue"][0]["code"], code, "issue code");
    value["issue"][0]["diagnostics"].as_str().unwrap_or_default()
}

pub fn header<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}

/// Top-level keys of a JSON object, in order
pub fn keys(value: &Value) -> Vec<&str> {
    value
        .as_object()
        .map(|object| object.keys().map(String::as_str).collect())
        .unwrap_or_default()
}
