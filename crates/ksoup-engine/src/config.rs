//! Engine configuration
//!
//! Plain values with defaults and builders. Nothing is read from files or the
//! environment; the embedding application decides.

use std::time::Duration;

use ksoup_io::DEFAULT_BUFFER_CAPACITY;

/// HTTP transport configuration
#[derive(Debug, Clone)]
pub struct TransportConfig {
    /// User agent string
    pub user_agent: String,
    /// Connection timeout
    pub connect_timeout: Duration,
    /// Whole-request timeout
    pub request_timeout: Duration,
    /// Max redirects to follow (0 = disable)
    pub max_redirects: u32,
    /// Headers sent with every request
    pub default_headers: Vec<(String, String)>,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            user_agent: format!("ksoup/{}", crate::VERSION),
            connect_timeout: Duration::from_secs(30),
            request_timeout: Duration::from_secs(60),
            max_redirects: 10,
            default_headers: Vec::new(),
        }
    }
}

impl TransportConfig {
    pub fn builder() -> TransportConfigBuilder {
        TransportConfigBuilder::new()
    }
}

/// Builder for [`TransportConfig`]
#[derive(Debug, Default)]
pub struct TransportConfigBuilder {
    config: TransportConfig,
}

impl TransportConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user_agent(mut self, ua: &str) -> Self {
        self.config.user_agent = ua.to_string();
        self
    }

    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.config.connect_timeout = timeout;
        self
    }

    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.config.request_timeout = timeout;
        self
    }

    pub fn max_redirects(mut self, max: u32) -> Self {
        self.config.max_redirects = max;
        self
    }

    pub fn default_header(mut self, name: &str, value: &str) -> Self {
        self.config.default_headers.push((name.to_string(), value.to_string()));
        self
    }

    pub fn build(self) -> TransportConfig {
        self.config
    }
}

/// Engine configuration shared by every platform variant
#[derive(Debug, Clone)]
pub struct Config {
    /// Initial capacity of buffers from `new_buffer`
    pub buffer_capacity: usize,
    /// Settings for the process-wide HTTP transport
    pub transport: TransportConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            buffer_capacity: DEFAULT_BUFFER_CAPACITY,
            transport: TransportConfig::default(),
        }
    }
}

impl Config {
    pub fn with_buffer_capacity(mut self, capacity: usize) -> Self {
        self.buffer_capacity = capacity;
        self
    }

    pub fn with_transport(mut self, transport: TransportConfig) -> Self {
        self.transport = transport;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_builder() {
        let config = TransportConfig::builder()
            .user_agent("TestAgent/1.0")
            .max_redirects(5)
            .request_timeout(Duration::from_secs(5))
            .default_header("Accept-Language", "en")
            .build();

        assert_eq!(config.user_agent, "TestAgent/1.0");
        assert_eq!(config.max_redirects, 5);
        assert_eq!(config.request_timeout, Duration::from_secs(5));
        assert_eq!(config.connect_timeout, Duration::from_secs(30));
        assert_eq!(config.default_headers.len(), 1);
    }

    #[test]
    fn test_config_defaults() {
        let config = Config::default();
        assert_eq!(config.buffer_capacity, DEFAULT_BUFFER_CAPACITY);
        assert!(config.transport.user_agent.starts_with("ksoup/"));

        let tuned = Config::default().with_buffer_capacity(64);
        assert_eq!(tuned.buffer_capacity, 64);
    }
}
