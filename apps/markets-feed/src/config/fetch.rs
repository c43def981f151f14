//! Fetch section of the configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Fetch configuration: worker pool bound and provider connection
/// settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchConfig {
    /// Maximum number of concurrent requests.
    #[serde(rename = "max-workers", default = "default_max_workers")]
    pub max_workers: usize,

    /// Per-request timeout in seconds.
    #[serde(rename = "request-timeout-secs", default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Provider base URL.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

impl FetchConfig {
    /// Per-request timeout.
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            max_workers: default_max_workers(),
            request_timeout_secs: default_request_timeout_secs(),
            endpoint: default_endpoint(),
        }
    }
}

const fn default_max_workers() -> usize {
    10
}

const fn default_request_timeout_secs() -> u64 {
    10
}

fn default_endpoint() -> String {
    crate::infrastructure::yahoo::DEFAULT_ENDPOINT.to_string()
}
