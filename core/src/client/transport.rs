//! The network seam.

use crate::client::config::ExecutorConfig;
use crate::client::request::PreparedRequest;
use crate::error::{AppError, AppResult};
use crate::oas::models::HttpMethod;
use async_trait::async_trait;
use bytes::Bytes;
use indexmap::IndexMap;
use std::time::{Duration, Instant};

/// An undecoded HTTP response.
#[derive(Debug, Clone)]
pub struct RawResponse {
    /// Status code.
    pub status: u16,
    /// Reason phrase.
    pub status_text: String,
    /// Headers with lowercase names. Repeated headers are joined with `, `.
    pub headers: IndexMap<String, String>,
    /// Body bytes.
    pub body: Bytes,
    /// Time from dispatch until the response head arrived. Excludes the body download.
    pub elapsed: Duration,
}

/// Sends prepared requests.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends one request. Transport-level failures are `AppError::Network`.
    async fn send(&self, request: &PreparedRequest) -> AppResult<RawResponse>;
}

/// `reqwest`-backed transport.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Builds a client from configuration.
    pub fn new(config: &ExecutorConfig) -> AppResult<Self> {
        let mut builder = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .user_agent(config.user_agent.as_str());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| AppError::General(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self { client })
    }

    /// Wraps an existing client.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// The underlying client, also used for document loading.
    pub fn client(&self) -> &reqwest::Client {
        &self.client
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: &PreparedRequest) -> AppResult<RawResponse> {
        let mut builder = self.client.request(to_reqwest(request.method), &request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = &request.body {
            let text = serde_json::to_string(body)
                .map_err(|e| AppError::General(format!("Failed to encode body: {}", e)))?;
            builder = builder.body(text);
        }

        let started = Instant::now();
        let response = builder
            .send()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;
        let elapsed = started.elapsed();

        let status = response.status();
        let mut headers: IndexMap<String, String> = IndexMap::new();
        for (name, value) in response.headers() {
            let value = String::from_utf8_lossy(value.as_bytes()).into_owned();
            headers
                .entry(name.as_str().to_string())
                .and_modify(|existing| {
                    existing.push_str(", ");
                    existing.push_str(&value);
                })
                .or_insert(value);
        }
        let body = response
            .bytes()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;

        Ok(RawResponse {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or_default().to_string(),
            headers,
            body,
            elapsed,
        })
    }
}

fn to_reqwest(method: HttpMethod) -> reqwest::Method {
    match method {
        HttpMethod::Get => reqwest::Method::GET,
        HttpMethod::Post => reqwest::Method::POST,
        HttpMethod::Put => reqwest::Method::PUT,
        HttpMethod::Delete => reqwest::Method::DELETE,
        HttpMethod::Patch => reqwest::Method::PATCH,
        HttpMethod::Options => reqwest::Method::OPTIONS,
        HttpMethod::Head => reqwest::Method::HEAD,
    }
}
