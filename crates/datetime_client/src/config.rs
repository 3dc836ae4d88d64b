use std::time::Duration;

use derive_getters::Getters;

pub const DEFAULT_API_URL: &str = "http://host.docker.internal:8005";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Where the component finds the API and how long it waits per request
#[derive(Debug, Clone, Getters)]
pub struct ClientConfig {
    /// Base URL of the DateTime Tools API, without the `/api/v1` prefix
    base_url: String,
    /// Bound applied to each outbound request
    timeout: Duration,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}
