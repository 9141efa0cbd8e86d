#![deny(missing_docs)]

//! # Request Executor
//!
//! Prepares a request from an endpoint and user input, sends it through a
//! `Transport`, and classifies the response.

use crate::client::config::ExecutorConfig;
use crate::client::request::{prepare_request, PreparedRequest, RequestInput};
use crate::client::response::{BodyClass, ExecutionResult};
use crate::client::transport::{ReqwestTransport, Transport};
use crate::error::{AppError, AppResult};
use crate::oas::models::Endpoint;
use tracing::{debug, info, warn};

/// Executes requests against a live server.
#[derive(Debug)]
pub struct Executor<T: Transport = ReqwestTransport> {
    transport: T,
    config: ExecutorConfig,
}

impl Executor<ReqwestTransport> {
    /// Creates an executor backed by `reqwest`.
    pub fn new(config: ExecutorConfig) -> AppResult<Self> {
        let transport = ReqwestTransport::new(&config)?;
        Ok(Self { transport, config })
    }
}

impl<T: Transport> Executor<T> {
    /// Creates an executor over a custom transport.
    pub fn with_transport(transport: T, config: ExecutorConfig) -> Self {
        Self { transport, config }
    }

    /// Active configuration.
    pub fn config(&self) -> &ExecutorConfig {
        &self.config
    }

    /// The transport in use.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Builds the request without sending it.
    pub fn prepare(
        &self,
        endpoint: &Endpoint,
        base_url: &str,
        input: &RequestInput,
    ) -> AppResult<PreparedRequest> {
        prepare_request(endpoint, base_url, input, &self.config)
    }

    /// Sends a prepared request.
    ///
    /// Any HTTP status is a successful result. Transport failures surface as
    /// `AppError::Network`.
    pub async fn execute(&self, request: &PreparedRequest) -> AppResult<ExecutionResult> {
        info!(method = %request.method, url = %request.url, "Sending request");

        let raw = self.transport.send(request).await.map_err(|e| {
            warn!(error = %e, url = %request.url, "Request failed");
            match e {
                AppError::Network(_) => e,
                other => AppError::Network(other.to_string()),
            }
        })?;
        let duration_ms = u64::try_from(raw.elapsed.as_millis()).unwrap_or(u64::MAX);

        let content_type = raw.headers.get("content-type").cloned();
        let class = BodyClass::of(content_type.as_deref());
        debug!(status = raw.status, ?class, bytes = raw.body.len(), "Classified response");

        let result = ExecutionResult {
            status: raw.status,
            status_text: raw.status_text,
            headers: raw.headers,
            body: class.decode(raw.body),
            duration_ms,
            content_type,
        };
        info!(status = result.status, duration_ms, "Received response");
        Ok(result)
    }

    /// Validates, builds and sends in one step.
    ///
    /// Validation failures return before the transport is touched.
    pub async fn build_and_execute(
        &self,
        endpoint: &Endpoint,
        base_url: &str,
        input: &RequestInput,
    ) -> AppResult<ExecutionResult> {
        let request = self.prepare(endpoint, base_url, input)?;
        self.execute(&request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::response::{MediaKind, ResponseBody, StatusClass};
    use crate::client::transport::RawResponse;
    use crate::oas::models::{HttpMethod, ParamLocation, Parameter, SourceVersion};
    use async_trait::async_trait;
    use bytes::Bytes;
    use indexmap::IndexMap;
    use parking_lot::Mutex;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::time::Duration;

    #[derive(Default)]
    struct FakeTransport {
        sent: Mutex<Vec<PreparedRequest>>,
        content_type: Option<&'static str>,
        status: u16,
        body: &'static [u8],
        elapsed: Duration,
        fail: bool,
    }

    #[async_trait]
    impl Transport for FakeTransport {
        async fn send(&self, request: &PreparedRequest) -> AppResult<RawResponse> {
            self.sent.lock().push(request.clone());
            if self.fail {
                return Err(AppError::General("connection refused".into()));
            }
            let mut headers = IndexMap::new();
            if let Some(ct) = self.content_type {
                headers.insert("content-type".to_string(), ct.to_string());
            }
            Ok(RawResponse {
                status: self.status,
                status_text: String::new(),
                headers,
                body: Bytes::from_static(self.body),
                elapsed: self.elapsed,
            })
        }
    }

    fn endpoint(method: HttpMethod, required_query: bool) -> Endpoint {
        Endpoint {
            path: "/items".into(),
            method,
            summary: String::new(),
            description: String::new(),
            parameters: vec![Parameter {
                name: "q".into(),
                location: ParamLocation::Query,
                ty: "string".into(),
                required: required_query,
                description: String::new(),
                enum_values: None,
                example: None,
                schema: None,
            }],
            responses: Vec::new(),
            body_schema: None,
            source_version: SourceVersion::OpenApi3,
        }
    }

    fn executor(fake: FakeTransport) -> Executor<FakeTransport> {
        Executor::with_transport(fake, ExecutorConfig::default())
    }

    #[tokio::test]
    async fn test_validation_skips_transport() {
        let exec = executor(FakeTransport::default());
        let err = exec
            .build_and_execute(&endpoint(HttpMethod::Get, true), "http://x", &RequestInput::new())
            .await
            .unwrap_err();
        assert!(err.is_validation());
        assert!(exec.transport().sent.lock().is_empty());
    }

    #[tokio::test]
    async fn test_json_result() {
        let exec = executor(FakeTransport {
            content_type: Some("application/json"),
            status: 200,
            body: br#"{"id": 7}"#,
            ..Default::default()
        });
        let input = RequestInput::new().value("q", "x");
        let result = exec
            .build_and_execute(&endpoint(HttpMethod::Get, true), "http://x", &input)
            .await
            .unwrap();
        assert_eq!(result.body, ResponseBody::Json(json!({"id": 7})));
        assert_eq!(result.status_class(), StatusClass::Success);
        assert_eq!(exec.transport().sent.lock()[0].url, "http://x/items?q=x");
    }

    #[tokio::test]
    async fn test_error_status_is_a_result() {
        let exec = executor(FakeTransport {
            content_type: Some("text/plain"),
            status: 404,
            body: b"missing",
            ..Default::default()
        });
        let result = exec
            .build_and_execute(&endpoint(HttpMethod::Get, false), "http://x", &RequestInput::new())
            .await
            .unwrap();
        assert_eq!(result.status, 404);
        assert_eq!(result.status_class(), StatusClass::Error);
        assert_eq!(result.body, ResponseBody::Text("missing".into()));
    }

    #[tokio::test]
    async fn test_media_result() {
        let exec = executor(FakeTransport {
            content_type: Some("image/png"),
            status: 200,
            body: &[1, 2, 3],
            ..Default::default()
        });
        let result = exec
            .build_and_execute(&endpoint(HttpMethod::Post, false), "http://x", &RequestInput::new())
            .await
            .unwrap();
        assert!(matches!(
            result.body,
            ResponseBody::Media {
                kind: MediaKind::Image,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_transport_failure_is_network_error() {
        let exec = executor(FakeTransport {
            fail: true,
            ..Default::default()
        });
        let err = exec
            .build_and_execute(&endpoint(HttpMethod::Get, false), "http://x", &RequestInput::new())
            .await
            .unwrap_err();
        assert!(err.is_network());
        assert_eq!(err.status(), 0);
        assert_eq!(err.duration_ms(), 0);
    }

    #[tokio::test]
    async fn test_duration_comes_from_transport() {
        let exec = executor(FakeTransport {
            status: 200,
            elapsed: Duration::from_millis(42),
            ..Default::default()
        });
        let result = exec
            .build_and_execute(&endpoint(HttpMethod::Get, false), "http://x", &RequestInput::new())
            .await
            .unwrap();
        assert_eq!(result.duration_ms, 42);
    }

    #[tokio::test]
    async fn test_each_call_sends_once() {
        let exec = executor(FakeTransport {
            status: 200,
            ..Default::default()
        });
        let ep = endpoint(HttpMethod::Get, false);
        for _ in 0..2 {
            exec.build_and_execute(&ep, "http://x", &RequestInput::new())
                .await
                .unwrap();
        }
        assert_eq!(exec.transport().sent.lock().len(), 2);
    }
}
