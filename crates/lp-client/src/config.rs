//! Client configuration

use std::time::Duration;

use crate::paging::FETCH_ALL_PAGE_SIZE;

/// Configuration for the LearnPortal client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL for the LearnPortal API
    pub base_url: String,

    /// Request timeout
    pub timeout: Duration,

    /// User agent string
    pub user_agent: String,

    /// Page size used when exhausting server-side pagination
    pub fetch_page_size: u32,
}

impl ClientConfig {
    /// Create a new configuration with the given base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        // Path joins assume no trailing slash
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            timeout: Duration::from_secs(30),
            user_agent: format!("LearnPortal-Client/{}", env!("CARGO_PKG_VERSION")),
            fetch_page_size: FETCH_ALL_PAGE_SIZE,
        }
    }

    /// Set request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set custom user agent
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the page size used by the fetch-all loop
    pub fn with_fetch_page_size(mut self, size: u32) -> Self {
        self.fetch_page_size = size;
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("https://localhost:5001")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_stripped() {
        let config = ClientConfig::new("https://api.example.edu/");
        assert_eq!(config.base_url, "https://api.example.edu");
    }

    #[test]
    fn builder_overrides() {
        let config = ClientConfig::new("https://api.example.edu")
            .with_timeout(Duration::from_secs(5))
            .with_fetch_page_size(50);
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.fetch_page_size, 50);
    }
}
