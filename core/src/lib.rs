#![deny(missing_docs)]

//! # Explorer Core
//!
//! Core library for browsing and exercising OpenAPI / Swagger documents:
//! document loading, `$ref` resolution, example synthesis, categorization and
//! live request execution.

/// Shared error types.
pub mod error;

/// OpenAPI (OAS) document handling.
pub mod oas;

/// Request building and execution.
pub mod client;

pub use client::{
    Executor, ExecutionResult, ExecutionSlot, ExecutorConfig, PreparedRequest, RequestInput,
    ResponseBody, StatusClass,
};
pub use error::{AppError, AppResult};
pub use oas::{
    example_request_body, load_document, synthesize, transform, ApiModel, Category, Document,
    Endpoint, HttpMethod, ParamLocation, Parameter, ResponseExample, SourceVersion,
};
