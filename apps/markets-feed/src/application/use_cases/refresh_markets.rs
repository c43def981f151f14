//! Refresh Markets Use Case
//!
//! Runs one update cycle: fetch all configured symbols through the
//! market data port, classify the aggregate result, and apply the
//! configured sort policy to the surviving records.

use std::sync::Arc;

use thiserror::Error;
use tokio_util::sync::CancellationToken;

use crate::application::ports::{
    FetchClassification, FetchOutcome, MarketDataError, MarketDataPort,
};
use crate::domain::market::{LookbackDuration, MarketRequest, SortPolicy};

/// Errors terminating an update cycle.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RefreshError {
    /// Every request failed; the caller should keep any previously
    /// cached records instead of clearing them.
    #[error("no market data available")]
    NoContent,

    /// The fetch batch could not be started.
    #[error(transparent)]
    MarketData(#[from] MarketDataError),
}

/// One-shot market refresh over a configured request list.
pub struct RefreshMarkets {
    provider: Arc<dyn MarketDataPort>,
    sort: SortPolicy,
}

impl RefreshMarkets {
    /// Create a refresh cycle backed by `provider`.
    #[must_use]
    pub fn new(provider: Arc<dyn MarketDataPort>, sort: SortPolicy) -> Self {
        Self { provider, sort }
    }

    /// Execute one update cycle.
    ///
    /// Partial failure is non-fatal: the failed count is logged and the
    /// successful subset is returned. The produced outcome is a fresh,
    /// independent record list each cycle.
    ///
    /// # Errors
    ///
    /// Returns [`RefreshError::NoContent`] when every request failed and
    /// [`RefreshError::MarketData`] when the batch could not start.
    pub async fn execute(
        &self,
        requests: &[MarketRequest],
        duration: LookbackDuration,
        cancel: CancellationToken,
    ) -> Result<FetchOutcome, RefreshError> {
        let mut outcome = self
            .provider
            .fetch_markets(requests, duration, cancel)
            .await?;

        match outcome.classify() {
            FetchClassification::NoContent => return Err(RefreshError::NoContent),
            FetchClassification::PartialContent { failed } => {
                tracing::warn!(failed, "Market data is partial this cycle");
            }
            FetchClassification::Complete => {}
        }

        outcome.markets.apply_sort(self.sort);

        tracing::info!(
            records = outcome.markets.len(),
            failed = outcome.failed,
            sort = self.sort.as_str(),
            "Market refresh complete"
        );

        Ok(outcome)
    }
}
