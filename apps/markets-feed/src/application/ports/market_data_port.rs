//! Market Data Port
//!
//! Defines the interface the update cycle requires from a quote
//! provider. Implemented by the Yahoo chart adapter; test doubles stand
//! in for it in use-case tests.

use async_trait::async_trait;
use thiserror::Error;
use tokio_util::sync::CancellationToken;

use crate::domain::market::{LookbackDuration, MarketList, MarketRequest};

/// Result of one fetch cycle: the surviving records plus the number of
/// requests that failed.
///
/// Invariant: `markets.len() + failed` equals the number of input
/// requests.
#[derive(Debug, Default)]
pub struct FetchOutcome {
    /// Records for the requests that succeeded, in input order.
    pub markets: MarketList,
    /// Number of requests that failed and were excluded.
    pub failed: usize,
}

impl FetchOutcome {
    /// Classify the aggregate result.
    #[must_use]
    pub fn classify(&self) -> FetchClassification {
        if self.markets.is_empty() {
            FetchClassification::NoContent
        } else if self.failed > 0 {
            FetchClassification::PartialContent {
                failed: self.failed,
            }
        } else {
            FetchClassification::Complete
        }
    }
}

/// Aggregate classification of a fetch cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchClassification {
    /// Every request produced a record.
    Complete,
    /// Some requests failed but at least one record survived.
    PartialContent {
        /// Number of failed requests.
        failed: usize,
    },
    /// Every request failed; nothing to display.
    NoContent,
}

/// Errors a market data provider can raise for the batch as a whole.
///
/// Per-request failures never surface here; they are absorbed into
/// [`FetchOutcome::failed`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MarketDataError {
    /// The batch could not be dispatched at all.
    #[error("market fetch could not be dispatched: {message}")]
    DispatchFailed {
        /// Underlying dispatch failure.
        message: String,
    },
}

/// Port for fetching display-ready market records.
#[async_trait]
pub trait MarketDataPort: Send + Sync {
    /// Fetch records for `requests` over the given lookback duration.
    ///
    /// Individual request failures are logged and tallied, never
    /// escalated; cancelling `cancel` aborts unfinished requests.
    ///
    /// # Errors
    ///
    /// Returns [`MarketDataError::DispatchFailed`] when the batch cannot
    /// start (no requests, or `cancel` already fired).
    async fn fetch_markets(
        &self,
        requests: &[MarketRequest],
        duration: LookbackDuration,
        cancel: CancellationToken,
    ) -> Result<FetchOutcome, MarketDataError>;
}
