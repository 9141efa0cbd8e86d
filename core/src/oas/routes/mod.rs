#![deny(missing_docs)]

//! # Routes Module
//!
//! Entry point for transforming a document's `tags` and `paths` into the
//! categorized `ApiModel`.
//! Orchestrates Tag pre-pass -> Path pass (Builder) -> Category post-pass.

pub mod builder;
pub mod categories;

use crate::oas::document::{array_at, str_at, Document};
use crate::oas::models::ApiModel;
use crate::oas::routes::builder::parse_path_item;
use crate::oas::routes::categories::CategoryRegistry;
use serde_json::Value as JsonValue;
use tracing::info;

/// Transforms a loaded document into the explorer model.
///
/// Never fails: every missing or malformed field resolves to a default, and the
/// resulting category list is never empty.
pub fn transform(document: &Document) -> ApiModel {
    let root = document.raw();
    let version = document.version();
    let mut registry = CategoryRegistry::default();

    // 1. Tag pre-pass: declared tags become categories in declaration order
    for tag in array_at(root, "tags").into_iter().flatten() {
        if let Some(name) = str_at(tag, "name") {
            registry.declare(name, str_at(tag, "description").unwrap_or_default());
        }
    }

    // 2. Path pass
    if let Some(paths) = root.get("paths").and_then(JsonValue::as_object) {
        for (path, path_item) in paths {
            parse_path_item(&mut registry, path, path_item, root, version);
        }
    }

    // 3. Post-pass
    let categories = registry.into_categories();

    let info = root.get("info").unwrap_or(&JsonValue::Null);
    let model = ApiModel {
        title: non_empty(str_at(info, "title"), "API Documentation"),
        version: non_empty(str_at(info, "version"), "1.0.0"),
        description: str_at(info, "description").unwrap_or_default().to_string(),
        base_url: document.base_url(),
        categories,
        document: document.shared(),
    };

    info!(
        title = %model.title,
        categories = model.categories.len(),
        endpoints = model.endpoint_count(),
        "Transformed API document"
    );
    model
}

fn non_empty(value: Option<&str>, default: &str) -> String {
    value
        .filter(|v| !v.is_empty())
        .unwrap_or(default)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oas::models::{HttpMethod, ParamLocation, SourceVersion};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn transform_json(raw: JsonValue) -> ApiModel {
        transform(&Document::from_value(raw, None).unwrap())
    }

    #[test]
    fn test_empty_document_fallback() {
        let model = transform_json(json!({"paths": {}}));
        assert_eq!(model.categories.len(), 1);
        assert_eq!(model.categories[0].name, "Default");
        assert!(model.categories[0].endpoints.is_empty());
        assert_eq!(model.title, "API Documentation");
        assert_eq!(model.version, "1.0.0");
        assert_eq!(model.description, "");
    }

    #[test]
    fn test_declared_tags_are_kept_even_when_unused() {
        let model = transform_json(json!({
            "tags": [
                {"name": "Users", "description": "People"},
                {"name": "Admin"},
                {"name": "Users", "description": "dup"},
                {"description": "nameless"}
            ],
            "paths": {}
        }));
        let names: Vec<_> = model.categories.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Users", "Admin"]);
        assert_eq!(model.categories[0].description, "People");
        assert_eq!(model.categories[1].description, "");
        assert_eq!(model.categories[1].icon, "fa-tag");
    }

    #[test]
    fn test_users_scenario() {
        let yaml = r#"
openapi: 3.0.0
info: {title: Users API, version: 2.1.0, description: "Manage **users**"}
tags:
  - name: Users
paths:
  /users/{id}:
    get:
      tags: [Users]
      summary: Fetch a user
      parameters:
        - name: id
          in: path
          required: true
          schema: {type: string}
      responses:
        '200':
          description: OK
          content:
            application/json:
              schema:
                type: object
                properties:
                  id: {type: string}
                  active: {type: boolean}
"#;
        let model = transform(&Document::parse(yaml, None).unwrap());
        assert_eq!(model.title, "Users API");
        assert_eq!(model.version, "2.1.0");
        assert_eq!(model.description, "Manage **users**");
        assert_eq!(model.categories.len(), 1);

        let users = &model.categories[0];
        assert_eq!(users.name, "Users");
        assert_eq!(users.endpoints.len(), 1);

        let ep = &users.endpoints[0];
        assert_eq!(ep.method, HttpMethod::Get);
        assert_eq!(ep.path, "/users/{id}");
        assert_eq!(ep.source_version, SourceVersion::OpenApi3);
        assert_eq!(ep.parameters.len(), 1);
        assert_eq!(ep.parameters[0].location, ParamLocation::Path);
        assert!(ep.parameters[0].required);

        let example: JsonValue = serde_json::from_str(&ep.responses[0].example_json).unwrap();
        assert_eq!(example, json!({"id": "string", "active": true}));
    }

    #[test]
    fn test_swagger2_document() {
        let model = transform_json(json!({
            "swagger": "2.0",
            "info": {"title": "", "version": "0.9"},
            "host": "api.example.com",
            "definitions": {"Pet": {"type": "object", "properties": {"name": {"type": "string"}}}},
            "paths": {
                "/pets": {
                    "post": {
                        "tags": ["Pets"],
                        "parameters": [{"name": "pet", "in": "body", "required": true, "schema": {"$ref": "#/definitions/Pet"}}],
                        "responses": {"201": {"description": "Created", "schema": {"$ref": "#/definitions/Pet"}}}
                    }
                }
            }
        }));
        assert_eq!(model.title, "API Documentation");
        assert_eq!(model.base_url.as_deref(), Some("https://api.example.com"));

        let ep = &model.categories[0].endpoints[0];
        assert_eq!(ep.source_version, SourceVersion::Swagger2);
        assert_eq!(ep.body_schema, Some(json!({"$ref": "#/definitions/Pet"})));
        assert_eq!(ep.responses[0].status_code, 201);
        assert_eq!(ep.responses[0].example_json, "{\n  \"name\": \"string\"\n}");
    }

    #[test]
    fn test_paths_keep_document_order() {
        let model = transform_json(json!({
            "paths": {
                "/zeta": {"get": {}},
                "/alpha": {"get": {}},
                "/mid": {"delete": {}, "get": {}}
            }
        }));
        let seen: Vec<_> = model.categories[0]
            .endpoints
            .iter()
            .map(|e| format!("{} {}", e.method, e.path))
            .collect();
        assert_eq!(seen, ["GET /zeta", "GET /alpha", "DELETE /mid", "GET /mid"]);
    }
}
