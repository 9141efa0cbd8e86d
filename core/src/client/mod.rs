#![deny(missing_docs)]

//! # Client Module
//!
//! - **config**: Executor settings.
//! - **request**: Validation and request assembly, curl rendering.
//! - **transport**: The network seam and its `reqwest` implementation.
//! - **response**: Content-type classification and results.
//! - **executor**: Prepare, send and classify.
//! - **slot**: Supersession of in-flight runs.

pub mod config;
pub mod executor;
pub mod request;
pub mod response;
pub mod slot;
pub mod transport;

pub use config::{ExecutorConfig, ExecutorConfigBuilder, DEFAULT_BEARER_PLACEHOLDER};
pub use executor::Executor;
pub use request::{coerce_booleans, prepare_request, PreparedRequest, RequestInput};
pub use response::{BodyClass, ExecutionResult, MediaKind, ResponseBody, StatusClass};
pub use slot::ExecutionSlot;
pub use transport::{RawResponse, ReqwestTransport, Transport};
