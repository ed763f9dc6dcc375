//! Shared extraction logic over raw property bags
//!
//! Apps and flows embed a `connectionReferences` map and several creator
//! fields in their `properties`. None of it is schema-guaranteed, so
//! everything here reads optional paths and treats any missing or
//! malformed shape as "no data" rather than an error.

use serde_json::Value;

/// Walk a path of object keys and return the string at the end, if any
pub fn str_at<'a>(value: &'a Value, path: &[&str]) -> Option<&'a str> {
    let mut current = value;
    for key in path {
        current = current.get(key)?;
    }
    current.as_str()
}

/// Extract connector names from a property bag
///
/// Reads `connectionReferences` as a map of reference-name to descriptor
/// and takes each descriptor's `displayName`, falling back to its raw
/// `id`. Descriptors with neither are skipped. Any shape failure yields
/// an empty list; order is bag order, duplicates are kept.
pub fn connector_names(properties: &Value) -> Vec<String> {
    let Some(references) = properties
        .get("connectionReferences")
        .and_then(Value::as_object)
    else {
        return Vec::new();
    };

    references
        .values()
        .filter_map(|descriptor| {
            descriptor
                .get("displayName")
                .and_then(Value::as_str)
                .or_else(|| descriptor.get("id").and_then(Value::as_str))
                .map(str::to_string)
        })
        .collect()
}

/// Owner fields checked in order; first non-empty wins
const OWNER_PATHS: &[&[&str]] = &[
    &["owner", "displayName"],
    &["createdBy", "userPrincipalName"],
    &["creator", "userPrincipalName"],
];

/// Resolve an app's owner from its property bag
///
/// Fallback chain: explicit owner, then the creator's principal name,
/// then the internal creator record. Empty string when none resolve.
pub fn resolve_owner(properties: &Value) -> String {
    for path in OWNER_PATHS {
        if let Some(value) = str_at(properties, path) {
            if !value.is_empty() {
                return value.to_string();
            }
        }
    }
    String::new()
}
