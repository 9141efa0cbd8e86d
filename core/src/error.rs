//! # Error Handling
//!
//! Provides the unified `AppError` enum used across the workspace.
//!
//! Only user-facing actions produce these values. Schema synthesis and document
//! transformation never fail; they fall back to documented defaults instead.

use derive_more::{Display, From};
use serde_json::json;

/// The Global Error Enum.
///
/// We use `derive_more` for boilerplate.
/// Note: String errors default to `General`.
#[derive(Debug, Display, From)]
pub enum AppError {
    /// Wrapper for standard IO errors (reading a local document).
    #[display("IO Error: {_0}")]
    Io(std::io::Error),

    /// The API document could not be fetched or is not a usable document.
    #[from(ignore)]
    #[display("Document Load Error: {_0}")]
    DocumentLoad(String),

    /// User input for a request is incomplete or malformed. Nothing was sent.
    #[from(ignore)]
    #[display("Validation Error: {_0}")]
    Validation(String),

    /// The dispatched request never produced an HTTP response.
    #[from(ignore)]
    #[display("Network Error: {_0}")]
    Network(String),

    /// The request was superseded by a newer one on the same slot.
    #[from(ignore)]
    #[display("Request cancelled")]
    Cancelled,

    /// Generic errors.
    #[display("General Error: {_0}")]
    General(String),
}

/// Manual implementation of the standard Error trait.
impl std::error::Error for AppError {}

impl AppError {
    /// Status reported to the response panel for failures that have no HTTP status.
    ///
    /// Network failures and cancellations report `0`, keeping them distinct from
    /// legitimate 4xx/5xx responses, which are never errors.
    pub fn status(&self) -> u16 {
        0
    }

    /// Duration attributed to a failed execution. Always zero.
    pub fn duration_ms(&self) -> u64 {
        0
    }

    /// Returns true when this failure came from the transport.
    pub fn is_network(&self) -> bool {
        matches!(self, AppError::Network(_))
    }

    /// Returns true when the user input was rejected before any I/O.
    pub fn is_validation(&self) -> bool {
        matches!(self, AppError::Validation(_))
    }

    /// Structured body shown in place of a response when execution fails.
    pub fn error_body(&self) -> serde_json::Value {
        let (message, details) = match self {
            AppError::Network(details) => ("Network Error", Some(details.clone())),
            AppError::Validation(details) => ("Validation Error", Some(details.clone())),
            AppError::Cancelled => ("Request cancelled", None),
            other => ("Request Failed", Some(other.to_string())),
        };
        json!({
            "error": "Request Failed",
            "message": message,
            "details": details,
        })
    }
}

/// Helper type alias for Result using AppError.
pub type AppResult<T> = Result<T, AppError>;
