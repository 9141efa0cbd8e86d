//! Request executor configuration.

use std::time::Duration;

/// Placeholder credential sent as `Authorization: Bearer <placeholder>`.
pub const DEFAULT_BEARER_PLACEHOLDER: &str = "YOUR_API_KEY";

/// Request executor configuration.
#[derive(Debug, Clone)]
pub struct ExecutorConfig {
    /// Whole-request timeout. `None` leaves it to the transport.
    pub timeout: Option<Duration>,
    /// Connection timeout.
    pub connect_timeout: Duration,
    /// User agent string.
    pub user_agent: String,
    /// Token placed in the `Authorization` header.
    pub bearer_placeholder: String,
}

impl Default for ExecutorConfig {
    fn default() -> Self {
        Self {
            timeout: None,
            connect_timeout: Duration::from_secs(10),
            user_agent: format!("api-explorer/{}", env!("CARGO_PKG_VERSION")),
            bearer_placeholder: DEFAULT_BEARER_PLACEHOLDER.to_string(),
        }
    }
}

impl ExecutorConfig {
    /// Create a new configuration builder.
    pub fn builder() -> ExecutorConfigBuilder {
        ExecutorConfigBuilder::default()
    }
}

/// Builder for executor configuration.
#[derive(Debug, Default)]
pub struct ExecutorConfigBuilder {
    config: ExecutorConfig,
}

impl ExecutorConfigBuilder {
    /// Set the whole-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = Some(timeout);
        self
    }

    /// Set the connection timeout.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.config.connect_timeout = timeout;
        self
    }

    /// Set the user agent string.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    /// Set the bearer token placeholder.
    pub fn bearer_placeholder(mut self, token: impl Into<String>) -> Self {
        self.config.bearer_placeholder = token.into();
        self
    }

    /// Build the configuration.
    pub fn build(self) -> ExecutorConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ExecutorConfig::default();
        assert!(config.timeout.is_none());
        assert_eq!(config.bearer_placeholder, "YOUR_API_KEY");
        assert!(config.user_agent.starts_with("api-explorer/"));
    }

    #[test]
    fn test_builder() {
        let config = ExecutorConfig::builder()
            .timeout(Duration::from_secs(5))
            .bearer_placeholder("token")
            .build();
        assert_eq!(config.timeout, Some(Duration::from_secs(5)));
        assert_eq!(config.bearer_placeholder, "token");
    }
}
