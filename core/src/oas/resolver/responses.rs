#![deny(missing_docs)]

//! # Response Resolution
//!
//! Turns every declared response into a `ResponseExample` with a synthesized,
//! pretty-printed payload.

use crate::oas::document::{object_at, str_at};
use crate::oas::examples::{to_pretty_json, ExampleSynthesizer};
use crate::oas::models::ResponseExample;
use crate::oas::ref_utils::deref_or_self;
use crate::oas::resolver::body::JSON_MEDIA_TYPE;
use serde_json::Value as JsonValue;

/// Status used for `default` and other non-numeric response keys.
pub const FALLBACK_STATUS: u16 = 200;

/// Extracts one example per declared status, in declaration order.
pub fn extract_responses(operation: &JsonValue, root: &JsonValue) -> Vec<ResponseExample> {
    let Some(responses) = object_at(operation, "responses") else {
        return Vec::new();
    };
    let synthesizer = ExampleSynthesizer::new(root);

    responses
        .iter()
        .map(|(code, raw)| {
            let response = deref_or_self(raw, root);
            let example_json = response_schema(response)
                .map(|schema| to_pretty_json(&synthesizer.synthesize(Some(schema))))
                .unwrap_or_else(|| "{}".to_string());

            ResponseExample {
                status_code: parse_status(code),
                description: str_at(response, "description")
                    .unwrap_or_default()
                    .to_string(),
                example_json,
            }
        })
        .collect()
}

/// `content["application/json"].schema` first, then the Swagger 2.0 `schema`.
fn response_schema(response: &JsonValue) -> Option<&JsonValue> {
    object_at(response, "content")
        .and_then(|content| content.get(JSON_MEDIA_TYPE))
        .and_then(|media| media.get("schema"))
        .or_else(|| response.get("schema"))
}

fn parse_status(code: &str) -> u16 {
    code.trim()
        .parse::<u16>()
        .ok()
        .filter(|status| *status != 0)
        .unwrap_or(FALLBACK_STATUS)
}
