//! Error types for the Yahoo chart integration.

use thiserror::Error;

/// Per-symbol failures from the chart API.
///
/// Every variant is absorbed at the aggregation boundary; none of them
/// escalates beyond the symbol it belongs to.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum YahooError {
    /// Transport-level failure.
    #[error("network error: {0}")]
    Network(String),

    /// Provider answered with a non-success status.
    #[error("provider returned HTTP {0}")]
    Status(u16),

    /// Response body could not be decoded against the chart schema.
    #[error("failed to decode provider response: {0}")]
    Decode(String),

    /// The result array was absent or empty.
    #[error("response contains no chart data")]
    NoData,

    /// The price quote array was absent.
    #[error("response contains no price quote array")]
    MissingQuotes,
}
