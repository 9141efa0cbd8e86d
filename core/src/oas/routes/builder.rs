#![deny(missing_docs)]

//! # Endpoint Builder
//!
//! Logic that turns one path item of the raw document into `Endpoint` models
//! and files them into their categories.

use crate::oas::document::{array_at, str_at};
use crate::oas::models::{Endpoint, HttpMethod, ParamLocation, SourceVersion};
use crate::oas::resolver::{extract_request_body, extract_responses, resolve_parameters};
use crate::oas::routes::categories::{CategoryRegistry, DEFAULT_CATEGORY};
use serde_json::Value as JsonValue;
use tracing::debug;

/// Extracts every HTTP operation of a path item.
///
/// Keys that are not HTTP methods (`parameters`, `summary`, `x-*`, ...) are skipped.
/// A shared `parameters` array is merged in front of each operation's own list.
pub(crate) fn parse_path_item(
    registry: &mut CategoryRegistry,
    path: &str,
    path_item: &JsonValue,
    root: &JsonValue,
    version: SourceVersion,
) {
    let Some(entries) = path_item.as_object() else {
        debug!(path, "Path item is not a mapping, skipping");
        return;
    };
    let shared_params = array_at(path_item, "parameters")
        .map(Vec::as_slice)
        .unwrap_or(&[]);

    for (key, operation) in entries {
        let Some(method) = HttpMethod::parse(key) else {
            continue;
        };
        if !operation.is_object() {
            debug!(path, method = %method, "Operation is not a mapping, skipping");
            continue;
        }

        let endpoint = build_endpoint(path, method, operation, shared_params, root, version);
        let category = array_at(operation, "tags")
            .and_then(|tags| tags.first())
            .and_then(JsonValue::as_str)
            .unwrap_or(DEFAULT_CATEGORY);

        debug!(path, method = %method, category, "Registered endpoint");
        registry.push(category, endpoint);
    }
}

fn build_endpoint(
    path: &str,
    method: HttpMethod,
    operation: &JsonValue,
    shared_params: &[JsonValue],
    root: &JsonValue,
    version: SourceVersion,
) -> Endpoint {
    let mut parameters = Vec::new();
    let mut body_schema = None;

    // 1. OpenAPI 3 request body
    if let Some((schema, body_param)) = extract_request_body(operation, root) {
        body_schema = Some(schema);
        parameters.push(body_param);
    }

    // 2. Path-level parameters, then the operation's own
    let own_params = array_at(operation, "parameters")
        .map(Vec::as_slice)
        .unwrap_or(&[]);
    for param in resolve_parameters(shared_params.iter().chain(own_params), root) {
        // Legacy `in: body` only applies when no requestBody was found
        if param.location == ParamLocation::Body && body_schema.is_none() {
            body_schema = param.schema.clone();
        }
        parameters.push(param);
    }

    // 3. Responses
    let responses = extract_responses(operation, root);

    Endpoint {
        path: path.to_string(),
        method,
        summary: str_at(operation, "summary").unwrap_or_default().to_string(),
        description: str_at(operation, "description")
            .unwrap_or_default()
            .to_string(),
        parameters,
        responses,
        body_schema,
        source_version: version,
    }
}
