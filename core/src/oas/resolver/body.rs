#![deny(missing_docs)]

//! # Body Resolution
//!
//! Logic for extracting the JSON request body from an OpenAPI 3 `requestBody`.
//! Swagger 2.0 `in: body` parameters are handled with the other parameters.

use crate::oas::document::{bool_at, object_at, str_at};
use crate::oas::models::{ParamLocation, Parameter};
use crate::oas::ref_utils::deref_or_self;
use serde_json::Value as JsonValue;

/// Media type the explorer sends and reads bodies as.
pub const JSON_MEDIA_TYPE: &str = "application/json";

/// Extracts `requestBody.content["application/json"].schema`.
///
/// Returns the schema together with the synthetic `body` parameter that represents
/// it in parameter listings.
pub fn extract_request_body(
    operation: &JsonValue,
    root: &JsonValue,
) -> Option<(JsonValue, Parameter)> {
    let body = deref_or_self(operation.get("requestBody")?, root);
    let schema = object_at(body, "content")?
        .get(JSON_MEDIA_TYPE)?
        .get("schema")?
        .clone();

    let param = Parameter {
        name: "body".to_string(),
        location: ParamLocation::Body,
        ty: "object".to_string(),
        required: bool_at(body, "required").unwrap_or(false),
        description: str_at(body, "description")
            .unwrap_or("Request body")
            .to_string(),
        enum_values: None,
        example: None,
        schema: Some(schema.clone()),
    };

    Some((schema, param))
}
