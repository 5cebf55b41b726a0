//! Client configuration

use std::time::Duration;

/// Default base URL of the backend
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Default timeout for requests (in seconds)
const DEFAULT_REQUEST_TIMEOUT: u64 = 30;

/// Configuration for the backend client
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the backend, without a trailing slash
    pub base_url: String,
    /// Timeout applied to every request
    pub request_timeout: Duration,
}

impl Config {
    /// Creates a new Config with default settings
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT),
        }
    }

    /// Sets the backend base URL, stripping any trailing slash
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Sets the request timeout
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_stripped() {
        let config = Config::new().with_base_url("https://api.example.com/");
        assert_eq!(config.base_url, "https://api.example.com");
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.request_timeout, Duration::from_secs(30));
    }
}
