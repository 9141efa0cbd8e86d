//! Response classification and the execution result.

use bytes::Bytes;
use indexmap::IndexMap;
use serde_json::Value as JsonValue;
use tracing::warn;

/// Media families rendered inline instead of as text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    /// `image/*`
    Image,
    /// `audio/*`
    Audio,
    /// `video/*`
    Video,
}

/// How a response body is consumed, decided from the content type alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyClass {
    /// Parsed as JSON.
    Json,
    /// Kept as raw bytes.
    Media(MediaKind),
    /// Decoded as (lossy) UTF-8 text.
    Text,
}

impl BodyClass {
    /// Classifies a `Content-Type` header value. A missing header is text.
    pub fn of(content_type: Option<&str>) -> Self {
        let Some(content_type) = content_type else {
            return BodyClass::Text;
        };
        let essence = content_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();

        if essence == "application/json" || essence.ends_with("+json") {
            BodyClass::Json
        } else if essence.starts_with("image/") {
            BodyClass::Media(MediaKind::Image)
        } else if essence.starts_with("audio/") {
            BodyClass::Media(MediaKind::Audio)
        } else if essence.starts_with("video/") {
            BodyClass::Media(MediaKind::Video)
        } else {
            BodyClass::Text
        }
    }

    /// Consumes raw bytes the way this class dictates.
    pub fn decode(self, raw: Bytes) -> ResponseBody {
        match self {
            BodyClass::Json => match serde_json::from_slice(&raw) {
                Ok(value) => ResponseBody::Json(value),
                Err(e) => {
                    warn!(error = %e, "JSON response did not parse, keeping it as text");
                    ResponseBody::Text(String::from_utf8_lossy(&raw).into_owned())
                }
            },
            BodyClass::Media(kind) => ResponseBody::Media { kind, data: raw },
            BodyClass::Text => ResponseBody::Text(String::from_utf8_lossy(&raw).into_owned()),
        }
    }
}

/// A decoded response body.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    /// Structured JSON.
    Json(JsonValue),
    /// Plain text.
    Text(String),
    /// Binary media, displayed rather than printed.
    Media {
        /// Media family.
        kind: MediaKind,
        /// Raw payload.
        data: Bytes,
    },
}

impl ResponseBody {
    /// Text rendering: pretty JSON or the text itself. `None` for media.
    pub fn as_display_text(&self) -> Option<String> {
        match self {
            ResponseBody::Json(value) => serde_json::to_string_pretty(value).ok(),
            ResponseBody::Text(text) => Some(text.clone()),
            ResponseBody::Media { .. } => None,
        }
    }
}

/// Visual grouping of a status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusClass {
    /// Below 300.
    Success,
    /// 300 to 399.
    Warning,
    /// 400 and above.
    Error,
}

impl StatusClass {
    /// Groups a status code.
    pub fn of(status: u16) -> Self {
        match status {
            0..=299 => StatusClass::Success,
            300..=399 => StatusClass::Warning,
            _ => StatusClass::Error,
        }
    }
}

/// The outcome of one request that reached the server.
///
/// HTTP error statuses are results too; only transport failures become errors.
#[derive(Debug, Clone, PartialEq)]
pub struct ExecutionResult {
    /// Status code.
    pub status: u16,
    /// Reason phrase, possibly empty.
    pub status_text: String,
    /// Response headers with lowercase names, in received order.
    pub headers: IndexMap<String, String>,
    /// Decoded body.
    pub body: ResponseBody,
    /// Time until the response head arrived, in milliseconds.
    pub duration_ms: u64,
    /// Raw `Content-Type` header, if any.
    pub content_type: Option<String>,
}

impl ExecutionResult {
    /// Status grouping for display.
    pub fn status_class(&self) -> StatusClass {
        StatusClass::of(self.status)
    }
}
