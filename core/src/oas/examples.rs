#![deny(missing_docs)]

//! # Example Synthesis
//!
//! Generates representative JSON values from JSON-Schema-like fragments.
//!
//! Generation is a pure function of `(schema, root)`. The chain of `$ref` pointers
//! currently being expanded is threaded through the recursion: re-entering a
//! pointer already on the chain, or nesting deeper than `MAX_DEPTH`, yields an
//! empty object placeholder instead of recursing further.

use crate::oas::document::{array_at, object_at, str_at};
use crate::oas::models::{Endpoint, ParamLocation};
use crate::oas::ref_utils::{ref_of, resolve_ref};
use serde_json::{json, Map, Value as JsonValue};
use tracing::debug;

/// Maximum nesting depth before a placeholder is emitted.
pub const MAX_DEPTH: usize = 32;

/// Key used for the single synthetic entry of an `additionalProperties` map.
const ADDITIONAL_PROPERTY_KEY: &str = "additionalProp1";

/// Synthesizes an example for `schema` using `root` for `$ref` resolution.
pub fn synthesize(schema: Option<&JsonValue>, root: &JsonValue) -> JsonValue {
    ExampleSynthesizer::new(root).synthesize(schema)
}

/// Renders a value the way the explorer shows examples (2-space indentation).
pub fn to_pretty_json(value: &JsonValue) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
}

/// Recursive example generator bound to one root document.
#[derive(Debug, Clone, Copy)]
pub struct ExampleSynthesizer<'a> {
    root: &'a JsonValue,
    max_depth: usize,
}

impl<'a> ExampleSynthesizer<'a> {
    /// Creates a synthesizer with the default depth cap.
    pub fn new(root: &'a JsonValue) -> Self {
        Self {
            root,
            max_depth: MAX_DEPTH,
        }
    }

    /// Overrides the depth cap.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Produces an example value. Absent schemas yield `{}`.
    pub fn synthesize(&self, schema: Option<&JsonValue>) -> JsonValue {
        let mut chain = Vec::new();
        self.generate(schema, &mut chain, 0)
    }

    fn generate(&self, schema: Option<&JsonValue>, chain: &mut Vec<String>, depth: usize) -> JsonValue {
        // 1. Absent schema
        let Some(schema) = schema else {
            return empty_object();
        };
        if depth > self.max_depth {
            debug!(depth, "Example depth cap reached, using placeholder");
            return empty_object();
        }

        // 2. Reference
        if let Some(reference) = ref_of(schema) {
            if chain.iter().any(|seen| seen == reference) {
                debug!(reference, "Circular $ref in schema, using placeholder");
                return empty_object();
            }
            let Some(resolved) = resolve_ref(reference, self.root) else {
                debug!(reference, "Unresolved $ref in schema, using placeholder");
                return empty_object();
            };
            chain.push(reference.to_string());
            let value = self.generate(Some(resolved), chain, depth + 1);
            chain.pop();
            return value;
        }

        // 3. Explicit example, including null
        if let Some(example) = schema.get("example") {
            return example.clone();
        }

        // 4. Type dispatch
        match schema_type(schema) {
            Some("object") => self.object(schema, chain, depth),
            Some("array") => match schema.get("items") {
                Some(items) => JsonValue::Array(vec![self.generate(Some(items), chain, depth + 1)]),
                None => JsonValue::Array(Vec::new()),
            },
            Some("string") => string_example(schema),
            Some(ty @ ("number" | "integer")) => number_example(schema, ty),
            Some("boolean") => JsonValue::Bool(true),
            Some("null") => JsonValue::Null,
            _ if schema.get("properties").is_some() => self.object(schema, chain, depth),
            _ => self.composed(schema, chain, depth),
        }
    }

    fn object(&self, schema: &JsonValue, chain: &mut Vec<String>, depth: usize) -> JsonValue {
        let mut map = Map::new();

        if let Some(properties) = object_at(schema, "properties") {
            for (name, property) in properties {
                map.insert(name.clone(), self.generate(Some(property), chain, depth + 1));
            }
        }

        if let Some(additional) = schema.get("additionalProperties").filter(|v| v.is_object()) {
            map.insert(
                ADDITIONAL_PROPERTY_KEY.to_string(),
                self.generate(Some(additional), chain, depth + 1),
            );
        }

        JsonValue::Object(map)
    }

    /// Best-effort composition: `allOf` merges object branches, `oneOf`/`anyOf`
    /// take the first branch. Anything else is an empty object.
    fn composed(&self, schema: &JsonValue, chain: &mut Vec<String>, depth: usize) -> JsonValue {
        if let Some(branches) = array_at(schema, "allOf") {
            if branches.len() == 1 {
                return self.generate(branches.first(), chain, depth + 1);
            }
            let mut merged = Map::new();
            for branch in branches {
                if let JsonValue::Object(part) = self.generate(Some(branch), chain, depth + 1) {
                    merged.extend(part);
                }
            }
            return JsonValue::Object(merged);
        }

        for key in ["oneOf", "anyOf"] {
            if let Some(first) = array_at(schema, key).and_then(|b| b.first()) {
                return self.generate(Some(first), chain, depth + 1);
            }
        }

        empty_object()
    }
}

/// Reads `type`, taking the first non-null entry of an OpenAPI 3.1 type array.
pub(crate) fn schema_type(schema: &JsonValue) -> Option<&str> {
    match schema.get("type")? {
        JsonValue::String(s) => Some(s.as_str()),
        JsonValue::Array(types) => types
            .iter()
            .filter_map(JsonValue::as_str)
            .find(|t| *t != "null")
            .or_else(|| types.iter().filter_map(JsonValue::as_str).next()),
        _ => None,
    }
}

fn string_example(schema: &JsonValue) -> JsonValue {
    let literal = match str_at(schema, "format") {
        Some("date") => Some("2099-01-01"),
        Some("date-time") => Some("2099-01-01T12:00:00Z"),
        Some("email") => Some("user@example.com"),
        Some("uuid") => Some("123e4567-e89b-12d3-a456-426614174000"),
        Some("uri") => Some("https://example.com"),
        _ => None,
    };
    if let Some(literal) = literal {
        return json!(literal);
    }
    first_enum(schema).unwrap_or_else(|| json!("string"))
}

fn number_example(schema: &JsonValue, ty: &str) -> JsonValue {
    if let Some(value) = first_enum(schema) {
        return value;
    }
    if let Some(minimum) = schema.get("minimum") {
        return minimum.clone();
    }
    if ty == "integer" {
        json!(1)
    } else {
        json!(1.0)
    }
}

fn first_enum(schema: &JsonValue) -> Option<JsonValue> {
    array_at(schema, "enum").and_then(|values| values.first()).cloned()
}

fn empty_object() -> JsonValue {
    JsonValue::Object(Map::new())
}

/// Builds the initial JSON body offered for editing before a request is executed.
///
/// Uses the endpoint's body schema, then the first body parameter's schema, and
/// finally per-parameter placeholders keyed by body-parameter name.
pub fn example_request_body(endpoint: &Endpoint, root: &JsonValue) -> JsonValue {
    let synthesizer = ExampleSynthesizer::new(root);
    if let Some(schema) = &endpoint.body_schema {
        return synthesizer.synthesize(Some(schema));
    }

    let body_params: Vec<_> = endpoint.parameters_in(ParamLocation::Body).collect();
    if let Some(schema) = body_params.first().and_then(|p| p.schema.as_ref()) {
        return synthesizer.synthesize(Some(schema));
    }

    let mut body = Map::new();
    for param in body_params {
        let declared = param
            .example
            .clone()
            .or_else(|| param.enum_values.as_ref().and_then(|e| e.first().cloned()));
        let value = match param.ty.as_str() {
            "string" => declared.unwrap_or_else(|| json!(format!("Example {}", param.name))),
            "number" | "integer" => declared.unwrap_or_else(|| json!(1)),
            "boolean" => param.example.clone().unwrap_or(JsonValue::Bool(true)),
            "array" => param
                .example
                .clone()
                .unwrap_or_else(|| json!(["example1", "example2"])),
            "object" => param.example.clone().unwrap_or_else(empty_object),
            _ => JsonValue::Null,
        };
        body.insert(param.name.clone(), value);
    }
    JsonValue::Object(body)
}
