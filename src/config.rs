//! Fetcher settings

use std::time::Duration;

/// Where project pages live. The module name is appended as the last path
/// segment.
pub const DEFAULT_BASE_URL: &str = "https://www.drupal.org/project";

/// Upper bound for one page fetch, including reading the body
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetcherConfig {
    pub base_url: String,
    /// `None` leaves the timeout to the transport's default
    pub timeout: Option<Duration>,
    /// No User-Agent header is sent unless set
    pub user_agent: Option<String>,
}

impl FetcherConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Some(DEFAULT_TIMEOUT),
            user_agent: None,
        }
    }
}
