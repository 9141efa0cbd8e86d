#![deny(missing_docs)]

//! # Explorer Models
//!
//! The flat, version-agnostic representation the view layer renders:
//! an ordered list of categories, each owning its endpoints by value.

use serde::Serialize;
use serde_json::Value as JsonValue;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Which OpenAPI / Swagger family a document belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SourceVersion {
    /// Swagger 2.0 (also the fallback when no version is declared).
    #[serde(rename = "2.0")]
    Swagger2,
    /// OpenAPI 3.x.
    #[serde(rename = "3.x")]
    OpenApi3,
}

impl SourceVersion {
    /// Detects the family from the `openapi` / `swagger` root fields.
    pub fn detect(root: &JsonValue) -> Self {
        match root.get("openapi").and_then(JsonValue::as_str) {
            Some(v) if v.starts_with('3') => SourceVersion::OpenApi3,
            _ => SourceVersion::Swagger2,
        }
    }
}

impl fmt::Display for SourceVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceVersion::Swagger2 => write!(f, "2.0"),
            SourceVersion::OpenApi3 => write!(f, "3.x"),
        }
    }
}

/// HTTP methods that produce endpoints. Any other path-item key is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    /// GET
    Get,
    /// POST
    Post,
    /// PUT
    Put,
    /// DELETE
    Delete,
    /// PATCH
    Patch,
    /// OPTIONS
    Options,
    /// HEAD
    Head,
}

impl HttpMethod {
    /// Parses a path-item key, case-insensitively.
    pub fn parse(key: &str) -> Option<Self> {
        match key.to_ascii_lowercase().as_str() {
            "get" => Some(HttpMethod::Get),
            "post" => Some(HttpMethod::Post),
            "put" => Some(HttpMethod::Put),
            "delete" => Some(HttpMethod::Delete),
            "patch" => Some(HttpMethod::Patch),
            "options" => Some(HttpMethod::Options),
            "head" => Some(HttpMethod::Head),
            _ => None,
        }
    }

    /// The canonical upper-case token.
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Options => "OPTIONS",
            HttpMethod::Head => "HEAD",
        }
    }

    /// Whether a request with this method may carry a body.
    pub fn allows_body(&self) -> bool {
        !matches!(self, HttpMethod::Get | HttpMethod::Head)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The location of a parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamLocation {
    /// `{name}` segment of the path template.
    Path,
    /// Query string.
    Query,
    /// Request header.
    Header,
    /// Cookie.
    Cookie,
    /// JSON request body.
    Body,
}

impl ParamLocation {
    /// Parses the `in` field. Unknown or missing locations read as `Query`.
    pub fn parse(value: Option<&str>) -> Self {
        match value.map(str::to_ascii_lowercase).as_deref() {
            Some("path") => ParamLocation::Path,
            Some("header") => ParamLocation::Header,
            Some("cookie") => ParamLocation::Cookie,
            Some("body") => ParamLocation::Body,
            Some("query") | None => ParamLocation::Query,
            Some(other) => {
                debug!(location = other, "Unknown parameter location, sending as query");
                ParamLocation::Query
            }
        }
    }

    /// The lower-case token used in documents.
    pub fn as_str(&self) -> &'static str {
        match self {
            ParamLocation::Path => "path",
            ParamLocation::Query => "query",
            ParamLocation::Header => "header",
            ParamLocation::Cookie => "cookie",
            ParamLocation::Body => "body",
        }
    }
}

impl fmt::Display for ParamLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A normalized operation parameter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Parameter {
    /// Parameter name.
    pub name: String,
    /// Where the value is sent.
    pub location: ParamLocation,
    /// JSON-Schema primitive name; `"string"` when undeclared.
    #[serde(rename = "type")]
    pub ty: String,
    /// Whether a value must be supplied before executing.
    pub required: bool,
    /// Free-form (markdown) description.
    pub description: String,
    /// Allowed values, in declaration order.
    #[serde(rename = "enum")]
    pub enum_values: Option<Vec<JsonValue>>,
    /// Declared example value.
    pub example: Option<JsonValue>,
    /// The raw schema node, unresolved.
    pub schema: Option<JsonValue>,
}

/// One declared response, with a synthesized example payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseExample {
    /// Numeric status; non-numeric keys such as `default` read as 200.
    pub status_code: u16,
    /// Response description.
    pub description: String,
    /// Pretty-printed (2-space) example JSON, or `{}` when no schema is declared.
    pub example_json: String,
}

/// A single (path, method) operation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Endpoint {
    /// Path template, e.g. `/users/{id}`.
    pub path: String,
    /// HTTP method.
    pub method: HttpMethod,
    /// Short summary.
    pub summary: String,
    /// Long description.
    pub description: String,
    /// Path-level parameters followed by operation-level ones, in declaration order.
    pub parameters: Vec<Parameter>,
    /// One entry per declared status.
    pub responses: Vec<ResponseExample>,
    /// Schema of the JSON request body, if any.
    pub body_schema: Option<JsonValue>,
    /// Version family of the source document.
    pub source_version: SourceVersion,
}

impl Endpoint {
    /// Parameters sent at the given location, in declaration order.
    pub fn parameters_in(&self, location: ParamLocation) -> impl Iterator<Item = &Parameter> {
        self.parameters.iter().filter(move |p| p.location == location)
    }

    /// Whether the endpoint accepts a JSON body.
    pub fn has_body(&self) -> bool {
        self.body_schema.is_some() || self.parameters_in(ParamLocation::Body).next().is_some()
    }
}

/// A named group of endpoints, usually one per tag.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Category {
    /// Unique name.
    pub name: String,
    /// Description (markdown).
    pub description: String,
    /// Icon identifier for the view layer.
    pub icon: String,
    /// Endpoints in document order.
    pub endpoints: Vec<Endpoint>,
}

/// The transformed document.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiModel {
    /// `info.title`.
    pub title: String,
    /// `info.version`.
    pub version: String,
    /// `info.description`.
    pub description: String,
    /// Base URL for requests, when the document declares one.
    pub base_url: Option<String>,
    /// Never empty.
    pub categories: Vec<Category>,
    /// The source document, kept for on-demand `$ref` resolution.
    #[serde(skip)]
    pub document: Arc<JsonValue>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_method_parsing_is_case_insensitive() {
        assert_eq!(HttpMethod::parse("GET"), Some(HttpMethod::Get));
        assert_eq!(HttpMethod::parse("Patch"), Some(HttpMethod::Patch));
        assert_eq!(HttpMethod::parse("parameters"), None);
        assert_eq!(HttpMethod::parse("trace"), None);
        assert!(!HttpMethod::Head.allows_body());
        assert!(HttpMethod::Delete.allows_body());
    }

    #[test]
    fn test_location_defaults_to_query() {
        assert_eq!(ParamLocation::parse(Some("path")), ParamLocation::Path);
        assert_eq!(ParamLocation::parse(Some("Header")), ParamLocation::Header);
        assert_eq!(ParamLocation::parse(Some("formData")), ParamLocation::Query);
        assert_eq!(ParamLocation::parse(None), ParamLocation::Query);
        assert_eq!(ParamLocation::parse(Some("QUERY")), ParamLocation::Query);
    }

    #[test]
    fn test_version_detection() {
        assert_eq!(SourceVersion::detect(&json!({"openapi": "3.1.0"})), SourceVersion::OpenApi3);
        assert_eq!(SourceVersion::detect(&json!({"swagger": "2.0"})), SourceVersion::Swagger2);
        assert_eq!(SourceVersion::detect(&json!({})), SourceVersion::Swagger2);
        assert_eq!(SourceVersion::OpenApi3.to_string(), "3.x");
    }

    #[test]
    fn test_endpoint_wire_shape() {
        let endpoint = Endpoint {
            path: "/pets/{id}".into(),
            method: HttpMethod::Delete,
            summary: "Remove a pet".into(),
            description: String::new(),
            parameters: vec![Parameter {
                name: "id".into(),
                location: ParamLocation::Path,
                ty: "integer".into(),
                required: true,
                description: String::new(),
                enum_values: Some(vec![json!(1), json!(2)]),
                example: None,
                schema: Some(json!({"type": "integer"})),
            }],
            responses: vec![ResponseExample {
                status_code: 204,
                description: "Gone".into(),
                example_json: "{}".into(),
            }],
            body_schema: None,
            source_version: SourceVersion::Swagger2,
        };

        assert_eq!(
            serde_json::to_value(&endpoint).unwrap(),
            json!({
                "path": "/pets/{id}",
                "method": "DELETE",
                "summary": "Remove a pet",
                "description": "",
                "parameters": [{
                    "name": "id",
                    "location": "path",
                    "type": "integer",
                    "required": true,
                    "description": "",
                    "enum": [1, 2],
                    "example": null,
                    "schema": {"type": "integer"}
                }],
                "responses": [{"statusCode": 204, "description": "Gone", "exampleJson": "{}"}],
                "bodySchema": null,
                "sourceVersion": "2.0"
            })
        );
    }

    #[test]
    fn test_model_wire_shape_skips_document() {
        let model = ApiModel {
            title: "Pets".into(),
            version: "1.0.0".into(),
            description: String::new(),
            base_url: Some("https://api.example.com".into()),
            categories: vec![Category {
                name: "Default".into(),
                description: "API Endpoints".into(),
                icon: "fa-globe".into(),
                endpoints: Vec::new(),
            }],
            document: Arc::new(json!({"paths": {}})),
        };

        let value = serde_json::to_value(&model).unwrap();
        assert_eq!(value["baseUrl"], "https://api.example.com");
        assert_eq!(value["categories"][0]["icon"], "fa-globe");
        assert!(value.get("document").is_none());
        assert_eq!(serde_json::to_value(SourceVersion::OpenApi3).unwrap(), "3.x");
    }
}
