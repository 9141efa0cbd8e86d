//! Building concrete requests from an endpoint and user-entered values.
//!
//! Everything here is synchronous and side-effect free: validation failures are
//! reported before any network I/O can happen.

use crate::client::config::ExecutorConfig;
use crate::error::{AppError, AppResult};
use crate::oas::models::{Endpoint, HttpMethod, ParamLocation, Parameter};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde_json::Value as JsonValue;
use std::collections::HashMap;

/// Characters left unescaped, matching `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Headers that parameters cannot override.
const RESERVED_HEADERS: &[&str] = &["content-type", "authorization"];

/// A snapshot of what the user entered for one endpoint.
#[derive(Debug, Clone, Default)]
pub struct RequestInput {
    /// Raw values keyed by parameter name.
    pub values: HashMap<String, String>,
    /// Editable JSON body text, if the endpoint has one.
    pub body_text: Option<String>,
}

impl RequestInput {
    /// Creates an empty input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of a parameter.
    pub fn value(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }

    /// Sets the body text.
    pub fn body(mut self, text: impl Into<String>) -> Self {
        self.body_text = Some(text.into());
        self
    }

    fn filled(&self, name: &str) -> Option<&str> {
        self.values
            .get(name)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }

    fn body_supplied(&self) -> Option<&str> {
        self.body_text.as_deref().filter(|t| !t.trim().is_empty())
    }
}

/// A fully assembled request, ready for a transport.
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedRequest {
    /// HTTP method.
    pub method: HttpMethod,
    /// Absolute (or base-relative) URL with path and query filled in.
    pub url: String,
    /// Headers in send order.
    pub headers: Vec<(String, String)>,
    /// JSON body, already boolean-coerced.
    pub body: Option<JsonValue>,
}

impl PreparedRequest {
    /// Looks up a header value, case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Renders the request as a copy-pasteable curl command.
    pub fn to_curl(&self) -> String {
        let mut command = format!("curl -X {} \"{}\"", self.method, self.url);
        for (name, value) in &self.headers {
            command.push_str(&format!("\n  -H \"{}: {}\"", name, value));
        }
        if let Some(body) = self.body.as_ref().filter(|b| !is_empty_container(b)) {
            if self.method != HttpMethod::Get {
                let pretty = serde_json::to_string_pretty(body).unwrap_or_default();
                command.push_str(&format!("\n  -d '{}'", pretty));
            }
        }
        command
    }
}

/// Builds the request for `endpoint` from the user's input.
///
/// Fails with `AppError::Validation` when a required value is missing or the body
/// text is not JSON.
pub fn prepare_request(
    endpoint: &Endpoint,
    base_url: &str,
    input: &RequestInput,
    config: &ExecutorConfig,
) -> AppResult<PreparedRequest> {
    // 1. Required values
    let missing: Vec<&str> = endpoint
        .parameters
        .iter()
        .filter(|p| p.required && !is_satisfied(p, input))
        .map(|p| p.name.as_str())
        .collect();
    if !missing.is_empty() {
        return Err(AppError::Validation(format!(
            "Please fill in all required fields: {}",
            missing.join(", ")
        )));
    }

    // 2. Body
    let body = match input.body_supplied() {
        Some(text) => {
            let mut value: JsonValue = serde_json::from_str(text).map_err(|e| {
                AppError::Validation(format!("Invalid JSON body ({}): {}", e, text))
            })?;
            coerce_booleans(&mut value);
            Some(value)
        }
        None => None,
    };

    // 3. Path and query
    let path = substitute_path(endpoint, input);
    let query = build_query(endpoint, input);
    let mut url = format!("{}{}", base_url.trim_end_matches('/'), path);
    if !query.is_empty() {
        url.push('?');
        url.push_str(&query);
    }

    // 4. Headers
    let mut headers = vec![
        ("Content-Type".to_string(), "application/json".to_string()),
        (
            "Authorization".to_string(),
            format!("Bearer {}", config.bearer_placeholder),
        ),
    ];
    for param in endpoint.parameters_in(ParamLocation::Header) {
        if RESERVED_HEADERS.contains(&param.name.to_ascii_lowercase().as_str()) {
            continue;
        }
        if let Some(value) = input.filled(&param.name) {
            headers.push((param.name.clone(), value.to_string()));
        }
    }
    let cookies: Vec<String> = endpoint
        .parameters_in(ParamLocation::Cookie)
        .filter_map(|p| input.filled(&p.name).map(|v| format!("{}={}", p.name, v)))
        .collect();
    if !cookies.is_empty() {
        headers.push(("Cookie".to_string(), cookies.join("; ")));
    }

    Ok(PreparedRequest {
        method: endpoint.method,
        url,
        headers,
        body: body.filter(|_| endpoint.method.allows_body()),
    })
}

fn is_satisfied(param: &Parameter, input: &RequestInput) -> bool {
    if param.location == ParamLocation::Body {
        return input.body_supplied().is_some();
    }
    input
        .values
        .get(&param.name)
        .is_some_and(|v| !v.trim().is_empty())
}

/// Replaces `{name}` tokens with encoded path values. Unmatched tokens stay.
fn substitute_path(endpoint: &Endpoint, input: &RequestInput) -> String {
    endpoint
        .parameters_in(ParamLocation::Path)
        .fold(endpoint.path.clone(), |path, param| {
            match input.filled(&param.name) {
                Some(value) => path.replace(&format!("{{{}}}", param.name), &encode(value)),
                None => path,
            }
        })
}

fn build_query(endpoint: &Endpoint, input: &RequestInput) -> String {
    endpoint
        .parameters_in(ParamLocation::Query)
        .filter_map(|param| {
            let raw = input.filled(&param.name)?;
            let value = if param.ty == "boolean" {
                (raw == "true").to_string()
            } else {
                raw.to_string()
            };
            Some(format!("{}={}", encode(&param.name), encode(&value)))
        })
        .collect::<Vec<_>>()
        .join("&")
}

fn encode(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

/// Turns every nested `"true"` / `"false"` string into a boolean.
///
/// Only values inside objects and arrays are rewritten; a bare top-level string
/// is left alone.
pub fn coerce_booleans(value: &mut JsonValue) {
    match value {
        JsonValue::Object(map) => map.values_mut().for_each(coerce_member),
        JsonValue::Array(items) => items.iter_mut().for_each(coerce_member),
        _ => {}
    }
}

fn coerce_member(value: &mut JsonValue) {
    match value {
        JsonValue::String(s) if s == "true" => *value = JsonValue::Bool(true),
        JsonValue::String(s) if s == "false" => *value = JsonValue::Bool(false),
        other => coerce_booleans(other),
    }
}

fn is_empty_container(value: &JsonValue) -> bool {
    match value {
        JsonValue::Object(map) => map.is_empty(),
        JsonValue::Array(items) => items.is_empty(),
        _ => false,
    }
}
