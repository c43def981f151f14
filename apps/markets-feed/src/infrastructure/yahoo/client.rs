//! HTTP client for the Yahoo v8 chart endpoint.

use std::time::Duration;

use reqwest::Client;

use super::api_types::ChartResponse;
use super::error::YahooError;
use crate::domain::market::LookbackDuration;

/// Default provider endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://query1.finance.yahoo.com";

/// Browser-like identifier; the provider rejects default library agents.
const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";

/// Nominal range requested regardless of the lookback duration; the
/// duration only varies the sample interval.
const NOMINAL_RANGE: &str = "1mo";

/// Chart client configuration.
#[derive(Debug, Clone)]
pub struct ChartClientConfig {
    /// Provider base URL (overridable for tests).
    pub endpoint: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl Default for ChartClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

/// HTTP client for the chart API.
///
/// Holds one shared connection pool; cloning is cheap and clones are
/// safe to use from any number of concurrent workers.
#[derive(Debug, Clone)]
pub struct ChartClient {
    client: Client,
    endpoint: String,
}

impl ChartClient {
    /// Create a new chart client.
    ///
    /// # Errors
    ///
    /// Returns [`YahooError::Network`] if the underlying HTTP client
    /// cannot be constructed.
    pub fn new(config: &ChartClientConfig) -> Result<Self, YahooError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(BROWSER_USER_AGENT)
            .build()
            .map_err(|e| YahooError::Network(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
        })
    }

    /// The URL queried for one symbol and duration.
    #[must_use]
    pub fn chart_url(&self, symbol: &str, duration: LookbackDuration) -> String {
        format!(
            "{}/v8/finance/chart/{}?range={}&interval={}",
            self.endpoint,
            symbol,
            NOMINAL_RANGE,
            duration.as_str()
        )
    }

    /// Fetch and decode the chart payload for one symbol.
    ///
    /// # Errors
    ///
    /// Returns [`YahooError::Network`] on transport failures,
    /// [`YahooError::Status`] on non-success responses and
    /// [`YahooError::Decode`] when the body does not match the schema.
    pub async fn fetch_chart(
        &self,
        symbol: &str,
        duration: LookbackDuration,
    ) -> Result<ChartResponse, YahooError> {
        let url = self.chart_url(symbol, duration);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| YahooError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(YahooError::Status(status.as_u16()));
        }

        response
            .json::<ChartResponse>()
            .await
            .map_err(|e| YahooError::Decode(e.to_string()))
    }
}
