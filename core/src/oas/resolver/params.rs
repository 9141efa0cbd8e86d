#![deny(missing_docs)]

//! # Parameter Resolution
//!
//! Logic for resolving OpenAPI / Swagger parameters into internal `Parameter` structs.
//! Handles `$ref` parameters, OAS 3.x `schema`-wrapped typing, and the Swagger 2.0
//! inline `type`/`enum` fields.

use crate::oas::document::{array_at, bool_at, str_at};
use crate::oas::examples::schema_type;
use crate::oas::models::{ParamLocation, Parameter};
use crate::oas::ref_utils::deref_or_self;
use serde_json::Value as JsonValue;

/// Resolves parameters in declaration order.
///
/// No de-duplication happens here: a path-level and an operation-level parameter
/// with the same name both appear.
pub fn resolve_parameters<'a>(
    params: impl IntoIterator<Item = &'a JsonValue>,
    root: &JsonValue,
) -> Vec<Parameter> {
    params
        .into_iter()
        .map(|param| resolve_parameter(param, root))
        .collect()
}

/// Resolves a single parameter, following one level of `$ref` if present.
pub fn resolve_parameter(raw: &JsonValue, root: &JsonValue) -> Parameter {
    let param = deref_or_self(raw, root);
    let schema = param.get("schema");
    // Typing is read through a referenced schema; the raw node is kept as declared.
    let schema_view = schema.map(|s| deref_or_self(s, root));

    let ty = schema_view
        .and_then(schema_type)
        .or_else(|| str_at(param, "type"))
        .unwrap_or("string")
        .to_string();

    let enum_values = schema_view
        .and_then(|s| array_at(s, "enum"))
        .or_else(|| array_at(param, "enum"))
        .cloned();

    let example = param
        .get("example")
        .or_else(|| schema_view.and_then(|s| s.get("example")))
        .cloned();

    Parameter {
        name: str_at(param, "name").unwrap_or_default().to_string(),
        location: ParamLocation::parse(str_at(param, "in")),
        ty,
        required: bool_at(param, "required").unwrap_or(false),
        description: str_at(param, "description").unwrap_or_default().to_string(),
        enum_values,
        example,
        schema: schema.cloned(),
    }
}
