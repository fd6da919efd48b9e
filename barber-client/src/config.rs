//! Client configuration

use std::time::Duration;

/// Client configuration for talking to the booking API
///
/// # Environment variables
///
/// Every setting can be overridden through the environment:
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | BARBER_API_URL | http://localhost:5000 | API base address |
/// | REQUEST_TIMEOUT_SECS | 30 | Per-request timeout |
/// | POLL_INTERVAL_SECS | 30 | Background refresh interval |
/// | SEARCH_DEBOUNCE_MS | 300 | Debounce window for search input |
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API base URL (e.g. "http://localhost:5000")
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,

    /// Interval between background refresh runs, in seconds
    pub poll_interval_secs: u64,

    /// Debounce window applied to search-input triggers, in milliseconds
    pub search_debounce_ms: u64,

    /// Session cookie forwarded with every request (admin context)
    pub session_cookie: Option<String>,
}

impl ClientConfig {
    /// Create a configuration with the default timings
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_secs: 30,
            poll_interval_secs: 30,
            search_debounce_ms: 300,
            session_cookie: None,
        }
    }

    /// Load the configuration from environment variables, falling back to
    /// defaults for anything unset
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("BARBER_API_URL").unwrap_or_else(|_| "http://localhost:5000".into());
        let mut config = Self::new(base_url);
        if let Some(timeout) = env_u64("REQUEST_TIMEOUT_SECS") {
            config.timeout_secs = timeout;
        }
        if let Some(interval) = env_u64("POLL_INTERVAL_SECS") {
            config.poll_interval_secs = interval;
        }
        if let Some(debounce) = env_u64("SEARCH_DEBOUNCE_MS") {
            config.search_debounce_ms = debounce;
        }
        config
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout_secs = seconds;
        self
    }

    /// Set the background refresh interval
    pub fn with_poll_interval(mut self, seconds: u64) -> Self {
        self.poll_interval_secs = seconds;
        self
    }

    /// Set the search debounce window
    pub fn with_search_debounce(mut self, millis: u64) -> Self {
        self.search_debounce_ms = millis;
        self
    }

    /// Set the session cookie forwarded with every request
    pub fn with_session_cookie(mut self, cookie: impl Into<String>) -> Self {
        self.session_cookie = Some(cookie.into());
        self
    }

    /// Background refresh interval as a `Duration`
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }

    /// Search debounce window as a `Duration`
    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }

    /// Create a REST client from this configuration
    pub fn build_rest_client(&self) -> crate::ClientResult<crate::RestClient> {
        crate::RestClient::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:5000")
    }
}

fn env_u64(name: &str) -> Option<u64> {
    std::env::var(name).ok().and_then(|v| v.parse().ok())
}
