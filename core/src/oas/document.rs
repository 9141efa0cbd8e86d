#![deny(missing_docs)]

//! # OpenAPI Document Loading
//!
//! Holds the raw Swagger / OpenAPI document as an untyped JSON tree and provides
//! total accessors over it. Every accessor returns an `Option` instead of failing,
//! so callers can apply their own defaults for absent or malformed fields.
//!
//! The tree is shared read-only (`Arc`) between the transformer, the resulting
//! `ApiModel`, and request-time example generation.

use crate::error::{AppError, AppResult};
use crate::oas::models::SourceVersion;
use serde_json::{Map, Value as JsonValue};
use std::sync::Arc;
use tracing::{debug, info};
use url::Url;

/// Default location of the document, relative to the serving origin.
pub const DEFAULT_DOCUMENT_PATH: &str = "/api/openapi.json";

/// A loaded API description document.
#[derive(Debug, Clone)]
pub struct Document {
    raw: Arc<JsonValue>,
    source: Option<String>,
}

impl Document {
    /// Wraps an already decoded document.
    ///
    /// The only shape requirement is a top-level mapping holding a `paths` mapping.
    /// Everything else is read leniently later on.
    pub fn from_value(raw: JsonValue, source: Option<&str>) -> AppResult<Self> {
        if object_at(&raw, "paths").is_none() {
            return Err(AppError::DocumentLoad(
                "Invalid API document: missing 'paths' mapping".into(),
            ));
        }

        Ok(Self {
            raw: Arc::new(raw),
            source: source.map(str::to_string),
        })
    }

    /// Parses a document from JSON text, falling back to YAML.
    pub fn parse(text: &str, source: Option<&str>) -> AppResult<Self> {
        let raw: JsonValue = match serde_json::from_str(text) {
            Ok(v) => v,
            Err(json_err) => {
                debug!(error = %json_err, "Document is not JSON, trying YAML");
                serde_yaml::from_str(text).map_err(|yaml_err| {
                    AppError::DocumentLoad(format!(
                        "Document is neither valid JSON ({}) nor YAML ({})",
                        json_err, yaml_err
                    ))
                })?
            }
        };
        Self::from_value(raw, source)
    }

    /// The raw document tree.
    pub fn raw(&self) -> &JsonValue {
        &self.raw
    }

    /// A shared handle to the raw tree, for `$ref` resolution after transformation.
    pub fn shared(&self) -> Arc<JsonValue> {
        Arc::clone(&self.raw)
    }

    /// The URL or path the document was loaded from, if known.
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    /// The OpenAPI / Swagger family the document declares.
    pub fn version(&self) -> SourceVersion {
        SourceVersion::detect(&self.raw)
    }

    /// Derives the base URL requests are sent to.
    ///
    /// Prefers `servers[0].url` (with server variables expanded to their defaults).
    /// Swagger 2.0 documents use `schemes`, `host` and `basePath` instead.
    /// Relative results are resolved against the document source when it is a URL.
    pub fn base_url(&self) -> Option<String> {
        let raw = self.raw.as_ref();

        if let Some(server) = array_at(raw, "servers").and_then(|s| s.first()) {
            if let Some(url) = str_at(server, "url") {
                let expanded = expand_server_variables(url, server);
                return Some(self.resolve_against_source(&expanded));
            }
        }

        let base_path = str_at(raw, "basePath").unwrap_or("");
        match str_at(raw, "host") {
            Some(host) => {
                let scheme = array_at(raw, "schemes")
                    .and_then(|s| s.first())
                    .and_then(JsonValue::as_str)
                    .unwrap_or("https");
                Some(format!("{}://{}{}", scheme, host, base_path))
            }
            None if !base_path.is_empty() => Some(self.resolve_against_source(base_path)),
            None => None,
        }
    }

    fn resolve_against_source(&self, url: &str) -> String {
        if Url::parse(url).is_ok() {
            return url.to_string();
        }
        self.source
            .as_deref()
            .and_then(|src| Url::parse(src).ok())
            .and_then(|src| src.join(url).ok())
            .map(|joined| joined.to_string())
            .unwrap_or_else(|| url.to_string())
    }
}

/// Replaces `{name}` tokens in a server URL with the declared variable defaults.
fn expand_server_variables(url: &str, server: &JsonValue) -> String {
    let Some(vars) = object_at(server, "variables") else {
        return url.to_string();
    };
    vars.iter().fold(url.to_string(), |acc, (name, var)| {
        match str_at(var, "default") {
            Some(default) => acc.replace(&format!("{{{}}}", name), default),
            None => acc,
        }
    })
}

/// Fetches (`http://`, `https://`) or reads (anything else) a document.
///
/// Local files are read through `tokio::fs`, off the async worker threads.
/// Non-2xx responses surface as `AppError::DocumentLoad`.
pub async fn load_document(source: &str, client: &reqwest::Client) -> AppResult<Document> {
    let text = if source.starts_with("http://") || source.starts_with("https://") {
        let response = client.get(source).send().await.map_err(|e| {
            AppError::DocumentLoad(format!("Failed to fetch Swagger doc: {}", e))
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::DocumentLoad(format!(
                "Failed to fetch Swagger doc: {} {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("")
            )));
        }

        response.text().await.map_err(|e| {
            AppError::DocumentLoad(format!("Failed to read Swagger doc body: {}", e))
        })?
    } else {
        tokio::fs::read_to_string(source).await?
    };

    let document = Document::parse(&text, Some(source))?;
    info!(source, version = %document.version(), "Loaded API document");
    Ok(document)
}

/// Reads a string field.
pub fn str_at<'a>(value: &'a JsonValue, key: &str) -> Option<&'a str> {
    value.get(key).and_then(JsonValue::as_str)
}

/// Reads a boolean field.
pub fn bool_at(value: &JsonValue, key: &str) -> Option<bool> {
    value.get(key).and_then(JsonValue::as_bool)
}

/// Reads a sequence field.
pub fn array_at<'a>(value: &'a JsonValue, key: &str) -> Option<&'a Vec<JsonValue>> {
    value.get(key).and_then(JsonValue::as_array)
}

/// Reads a mapping field.
pub fn object_at<'a>(value: &'a JsonValue, key: &str) -> Option<&'a Map<String, JsonValue>> {
    value.get(key).and_then(JsonValue::as_object)
}
