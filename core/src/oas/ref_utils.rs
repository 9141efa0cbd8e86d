#![deny(missing_docs)]

//! # Reference Utilities
//!
//! Resolves local `$ref` pointers (`#/a/b/c`) against the root document.
//!
//! Resolution is a pure lookup: it never fetches external documents and performs
//! no cycle detection. Callers that recurse through references own that concern.

use serde_json::Value as JsonValue;
use tracing::debug;

/// Resolves a local JSON pointer reference against `root`.
///
/// Returns `None` for non-local references (external files, ids, URLs) and as soon
/// as a segment cannot be found.
pub fn resolve_ref<'a>(reference: &str, root: &'a JsonValue) -> Option<&'a JsonValue> {
    let pointer = reference.strip_prefix("#/")?;
    pointer.split('/').try_fold(root, |current, segment| {
        let segment = decode_pointer_segment(segment);
        match current {
            JsonValue::Object(map) => map.get(&segment),
            JsonValue::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
            _ => None,
        }
    })
}

/// Returns the `$ref` string of a node, if it is a reference object.
pub fn ref_of(node: &JsonValue) -> Option<&str> {
    node.get("$ref").and_then(JsonValue::as_str)
}

/// Follows a single level of `$ref` indirection.
///
/// Unresolvable references fall back to the reference object itself, so callers
/// read defaults from a mostly-empty node instead of dropping it.
pub fn deref_or_self<'a>(node: &'a JsonValue, root: &'a JsonValue) -> &'a JsonValue {
    match ref_of(node) {
        Some(reference) => resolve_ref(reference, root).unwrap_or_else(|| {
            debug!(reference, "Unresolved $ref, using the reference object");
            node
        }),
        None => node,
    }
}

/// Decodes a JSON Pointer segment (handles `~1` and `~0`).
pub(crate) fn decode_pointer_segment(segment: &str) -> String {
    segment.replace("~1", "/").replace("~0", "~")
}
