#![deny(missing_docs)]

//! # OpenAPI Module
//!
//! - **document**: Loading and total accessors over the raw document.
//! - **ref_utils**: Local `$ref` resolution.
//! - **examples**: Example value synthesis from schemas.
//! - **resolver**: Parameter, request body and response extraction.
//! - **routes**: The document -> categories transformation.
//! - **models**: The explorer model.
//! - **search**: Lookup and search over the model.

pub mod document;
pub mod examples;
pub mod models;
pub mod ref_utils;
pub mod resolver;
pub mod routes;
pub mod search;

pub use document::{load_document, Document, DEFAULT_DOCUMENT_PATH};
pub use examples::{example_request_body, synthesize, to_pretty_json, ExampleSynthesizer};
pub use models::{
    ApiModel, Category, Endpoint, HttpMethod, ParamLocation, Parameter, ResponseExample,
    SourceVersion,
};
pub use ref_utils::resolve_ref;
pub use routes::transform;
