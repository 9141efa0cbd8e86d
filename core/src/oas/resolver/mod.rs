#![deny(missing_docs)]

//! # Resolver Module
//!
//! Logic for reading operation fragments out of the untyped document.
//!
//! Handles:
//! - Parameter resolution (Inline and Reference), OAS 3.x and Swagger 2.0 typing.
//! - OpenAPI 3 `requestBody` extraction.
//! - Response example synthesis per declared status.

pub mod body;
pub mod params;
pub mod responses;

pub use body::{extract_request_body, JSON_MEDIA_TYPE};
pub use params::{resolve_parameter, resolve_parameters};
pub use responses::extract_responses;
