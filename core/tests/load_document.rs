use explorer_core::{load_document, transform, AppError, HttpMethod};
use pretty_assertions::assert_eq;
use std::fs;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PETSTORE: &str = r##"
swagger: "2.0"
info:
  title: Petstore
  version: 1.0.0
basePath: /v2
tags:
  - name: pet
    description: Everything about your Pets
paths:
  /pet/{petId}:
    get:
      tags: [pet]
      summary: Find pet by ID
      parameters:
        - name: petId
          in: path
          required: true
          type: integer
      responses:
        "200":
          description: successful operation
          schema:
            $ref: "#/definitions/Pet"
definitions:
  Pet:
    type: object
    properties:
      id: {type: integer, format: int64}
      name: {type: string, example: doggie}
      status: {type: string, enum: [available, pending, sold]}
"##;

#[tokio::test]
async fn test_load_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("petstore.yaml");
    fs::write(&file, PETSTORE).unwrap();

    let document = load_document(file.to_str().unwrap(), &reqwest::Client::new())
        .await
        .unwrap();
    let model = transform(&document);

    assert_eq!(model.title, "Petstore");
    assert_eq!(model.base_url.as_deref(), Some("/v2"));
    assert_eq!(model.categories[0].name, "pet");
    assert_eq!(model.categories[0].icon, "fa-tag");

    let ep = model.find_endpoint(HttpMethod::Get, "/pet/{petId}").unwrap();
    assert_eq!(ep.parameters[0].ty, "integer");
    assert_eq!(
        ep.responses[0].example_json,
        "{\n  \"id\": 1,\n  \"name\": \"doggie\",\n  \"status\": \"available\"\n}"
    );
}

#[tokio::test]
async fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.json");
    let err = load_document(missing.to_str().unwrap(), &reqwest::Client::new())
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Io(_)));
}

#[tokio::test]
async fn test_load_over_http() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/openapi.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "openapi": "3.0.0",
            "servers": [{"url": "/v1"}],
            "paths": {"/ping": {"get": {"summary": "Ping"}}}
        })))
        .mount(&server)
        .await;

    let url = format!("{}/api/openapi.json", server.uri());
    let document = load_document(&url, &reqwest::Client::new()).await.unwrap();
    let model = transform(&document);

    assert_eq!(model.base_url, Some(format!("{}/v1", server.uri())));
    assert_eq!(model.categories[0].name, "Default");
    assert_eq!(model.endpoint_count(), 1);
}

#[tokio::test]
async fn test_http_failure_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let url = format!("{}/api/openapi.json", server.uri());
    let err = load_document(&url, &reqwest::Client::new())
        .await
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Document Load Error: Failed to fetch Swagger doc: 500 Internal Server Error"
    );
}

#[tokio::test]
async fn test_document_without_paths_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("empty.json");
    fs::write(&file, r#"{"openapi": "3.0.0"}"#).unwrap();

    let err = load_document(file.to_str().unwrap(), &reqwest::Client::new())
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::DocumentLoad(_)));
}

#[tokio::test(flavor = "current_thread")]
async fn test_concurrent_file_loads() {
    let dir = tempfile::tempdir().unwrap();
    let first = dir.path().join("a.yaml");
    let second = dir.path().join("b.json");
    fs::write(&first, PETSTORE).unwrap();
    fs::write(&second, r#"{"openapi": "3.0.0", "paths": {}}"#).unwrap();

    let client = reqwest::Client::new();
    let (a, b) = tokio::join!(
        load_document(first.to_str().unwrap(), &client),
        load_document(second.to_str().unwrap(), &client)
    );
    assert_eq!(transform(&a.unwrap()).title, "Petstore");
    assert_eq!(transform(&b.unwrap()).categories[0].name, "Default");
}
