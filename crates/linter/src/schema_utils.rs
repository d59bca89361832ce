//! Shared helpers for walking JSON-Schema-like trees.

use serde_json::Value;

/// Schema composition keywords, in the order members are aggregated.
pub const COMPOSITION_KEYWORDS: [&str; 3] = ["anyOf", "oneOf", "allOf"];

/// Collect the members of every composition keyword on `schema`, in keyword
/// order. Empty when the schema is a leaf.
#[must_use]
pub fn combined_members(schema: &Value) -> Vec<&Value> {
    let mut members = Vec::new();
    for keyword in COMPOSITION_KEYWORDS {
        if let Some(entries) = schema.get(keyword).and_then(Value::as_array) {
            members.extend(entries.iter());
        }
    }
    members
}

/// Resolve a local JSON Pointer reference (`#/...`) against `document`.
///
/// Path segments are `/`-delimited with `~1` unescaping to `/` and `~0` to
/// `~`. Returns `None` when the reference is not local or any segment fails
/// to resolve.
#[must_use]
pub fn resolve_local_pointer<'a>(document: &'a Value, reference: &str) -> Option<&'a Value> {
    let pointer = reference.strip_prefix("#/")?;

    let mut node = document;
    for raw_segment in pointer.split('/') {
        let segment = raw_segment.replace("~1", "/").replace("~0", "~");
        node = match node {
            Value::Object(map) => map.get(&segment)?,
            Value::Array(entries) => entries.get(segment.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }
    Some(node)
}

/// Dereference `node` once: if it is a `{"$ref": "#/..."}` object and the
/// pointer resolves against `document`, return the referenced value;
/// otherwise return `node` unchanged (an unresolved reference then fails the
/// structural checks generically instead of raising).
#[must_use]
pub fn deref<'a>(document: Option<&'a Value>, node: &'a Value) -> &'a Value {
    let Some(reference) = node.get("$ref").and_then(Value::as_str) else {
        return node;
    };
    document
        .and_then(|doc| resolve_local_pointer(doc, reference))
        .unwrap_or(node)
}

/// Look up a property schema under `properties`, if present.
#[must_use]
pub fn property<'a>(schema: &'a Value, name: &str) -> Option<&'a Value> {
    schema.get("properties").and_then(|props| props.get(name))
}

/// String-typed field of an optional schema node (e.g. `type`, `format`,
/// `pattern`). `None` when the node or field is absent or not a string.
#[must_use]
pub fn string_field<'a>(node: Option<&'a Value>, field: &str) -> Option<&'a str> {
    node.and_then(|n| n.get(field)).and_then(Value::as_str)
}
