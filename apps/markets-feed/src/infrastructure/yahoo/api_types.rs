//! Yahoo v8 chart API response schema.
//!
//! Only the fields the pipeline consumes are modeled; everything else in
//! the provider payload is ignored by serde.

use serde::Deserialize;

/// Top-level chart API response.
#[derive(Debug, Clone, Deserialize)]
pub struct ChartResponse {
    /// Chart envelope.
    pub chart: Chart,
}

/// Envelope holding the result array.
///
/// The provider sends `result: null` alongside an error object when a
/// symbol is unknown; both that and an empty array are per-item
/// failures.
#[derive(Debug, Clone, Deserialize)]
pub struct Chart {
    /// Per-symbol results; at most one entry is consumed.
    #[serde(default)]
    pub result: Option<Vec<ChartResult>>,
}

/// One symbol's chart data.
#[derive(Debug, Clone, Deserialize)]
pub struct ChartResult {
    /// Quote metadata.
    pub meta: ChartMeta,
    /// Indicator arrays.
    #[serde(default)]
    pub indicators: Indicators,
}

/// Quote metadata for one symbol.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChartMeta {
    /// ISO-style currency code.
    #[serde(default)]
    pub currency: String,
    /// Provider ticker symbol.
    #[serde(default)]
    pub symbol: String,
    /// Latest regular market price.
    #[serde(default, rename = "regularMarketPrice")]
    pub regular_market_price: f64,
    /// Previous close for the charted range.
    #[serde(default, rename = "chartPreviousClose")]
    pub chart_previous_close: f64,
    /// Human-readable instrument name.
    #[serde(default, rename = "shortName")]
    pub short_name: String,
}

/// Indicator arrays for one symbol.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Indicators {
    /// Quote indicator array; the first entry carries the close series.
    #[serde(default)]
    pub quote: Vec<QuoteIndicator>,
}

/// Close series for one symbol.
///
/// Entries are nullable; a null marks a non-trading sample.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuoteIndicator {
    /// Chronological close prices.
    #[serde(default)]
    pub close: Vec<Option<f64>>,
}
