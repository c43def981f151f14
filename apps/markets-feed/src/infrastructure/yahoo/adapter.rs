//! Market data adapter backed by the Yahoo chart API.
//!
//! Fans one request per symbol out through the batch executor, absorbs
//! per-symbol failures, and normalizes surviving responses into
//! display-ready records.

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use super::api_types::ChartResponse;
use super::client::ChartClient;
use super::error::YahooError;
use crate::application::ports::{FetchOutcome, MarketDataError, MarketDataPort};
use crate::domain::market::{
    LookbackDuration, Market, MarketList, MarketRequest, display_symbol, series,
};
use crate::infrastructure::batch::BatchExecutor;

/// [`MarketDataPort`] implementation over the Yahoo chart API.
pub struct YahooMarketDataAdapter {
    client: ChartClient,
    executor: BatchExecutor,
}

impl YahooMarketDataAdapter {
    /// Create an adapter from a chart client and a batch executor.
    #[must_use]
    pub const fn new(client: ChartClient, executor: BatchExecutor) -> Self {
        Self { client, executor }
    }

    /// Normalize one decoded response into a display record.
    fn build_market(
        request: &MarketRequest,
        response: ChartResponse,
    ) -> Result<Market, YahooError> {
        let result = response
            .chart
            .result
            .unwrap_or_default()
            .into_iter()
            .next()
            .ok_or(YahooError::NoData)?;

        let quote = result
            .indicators
            .quote
            .into_iter()
            .next()
            .ok_or(YahooError::MissingQuotes)?;

        // Null entries mark non-trading samples, same as explicit zeros.
        let closes: Vec<f64> = quote.close.iter().map(|v| v.unwrap_or(0.0)).collect();
        let window = series::recent_window(&closes);

        let price = result.meta.regular_market_price;
        let previous = series::baseline(window, result.meta.chart_previous_close);
        let filtered = series::without_zero_samples(window);

        Ok(Market {
            request: request.clone(),
            name: request.resolved_name(&result.meta.short_name),
            currency: display_symbol(&result.meta.currency),
            price,
            percent_change: series::percent_change(price, previous),
            chart_points: series::polyline_points(
                series::CHART_WIDTH,
                series::CHART_HEIGHT,
                &filtered,
            ),
        })
    }
}

#[async_trait]
impl MarketDataPort for YahooMarketDataAdapter {
    async fn fetch_markets(
        &self,
        requests: &[MarketRequest],
        duration: LookbackDuration,
        cancel: CancellationToken,
    ) -> Result<FetchOutcome, MarketDataError> {
        let symbols: Vec<String> = requests.iter().map(|r| r.symbol.clone()).collect();

        let client = self.client.clone();
        let outcomes = self
            .executor
            .run(symbols, cancel, move |symbol| {
                let client = client.clone();
                async move { client.fetch_chart(&symbol, duration).await }
            })
            .await
            .map_err(|e| MarketDataError::DispatchFailed {
                message: e.to_string(),
            })?;

        let mut markets = MarketList::with_capacity(requests.len());
        let mut failed = 0usize;

        for (request, outcome) in requests.iter().zip(outcomes) {
            let response = match outcome {
                Ok(response) => response,
                Err(e) => {
                    failed += 1;
                    tracing::error!(symbol = %request.symbol, error = %e, "Failed to fetch market data");
                    continue;
                }
            };

            match Self::build_market(request, response) {
                Ok(market) => markets.push(market),
                Err(e) => {
                    failed += 1;
                    tracing::error!(symbol = %request.symbol, error = %e, "Market response contains no data");
                }
            }
        }

        Ok(FetchOutcome { markets, failed })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(json: &str) -> ChartResponse {
        serde_json::from_str(json).unwrap()
    }

    fn full_response() -> ChartResponse {
        response(
            r#"{
                "chart": {
                    "result": [{
                        "meta": {
                            "currency": "USD",
                            "symbol": "AAPL",
                            "regularMarketPrice": 110.0,
                            "chartPreviousClose": 95.0,
                            "shortName": "Apple Inc."
                        },
                        "indicators": {
                            "quote": [{"close": [98.0, 0.0, 100.0, 110.0]}]
                        }
                    }]
                }
            }"#,
        )
    }

    #[test]
    fn builds_a_record_with_window_baseline() {
        let market =
            YahooMarketDataAdapter::build_market(&MarketRequest::new("AAPL"), full_response())
                .unwrap();

        assert_eq!(market.name, "Apple Inc.");
        assert_eq!(market.currency, "$");
        assert_eq!(market.price, 110.0);
        // Baseline is the second-to-last sample (100.0), not the
        // provider previous close.
        assert!((market.percent_change - 10.0).abs() < 1e-9);
        // The zero marker is dropped from the chart geometry.
        assert_eq!(market.chart_points.split(' ').count(), 3);
    }

    #[test]
    fn falls_back_to_previous_close_when_baseline_sample_is_zero() {
        let market = YahooMarketDataAdapter::build_market(
            &MarketRequest::new("AAPL"),
            response(
                r#"{
                    "chart": {
                        "result": [{
                            "meta": {
                                "currency": "USD",
                                "regularMarketPrice": 110.0,
                                "chartPreviousClose": 100.0,
                                "shortName": "Apple Inc."
                            },
                            "indicators": {"quote": [{"close": [98.0, 0.0, 110.0]}]}
                        }]
                    }
                }"#,
            ),
        )
        .unwrap();

        assert!((market.percent_change - 10.0).abs() < 1e-9);
    }

    #[test]
    fn zero_previous_close_yields_zero_change() {
        let market = YahooMarketDataAdapter::build_market(
            &MarketRequest::new("NEW"),
            response(
                r#"{
                    "chart": {
                        "result": [{
                            "meta": {"currency": "USD", "regularMarketPrice": 5.0},
                            "indicators": {"quote": [{"close": []}]}
                        }]
                    }
                }"#,
            ),
        )
        .unwrap();

        assert_eq!(market.percent_change, 0.0);
        assert_eq!(market.chart_points, "");
    }

    #[test]
    fn custom_name_overrides_provider_name() {
        let mut request = MarketRequest::new("AAPL");
        request.custom_name = Some("Apple".to_string());

        let market = YahooMarketDataAdapter::build_market(&request, full_response()).unwrap();
        assert_eq!(market.name, "Apple");
    }

    #[test]
    fn empty_result_array_is_no_data() {
        let err = YahooMarketDataAdapter::build_market(
            &MarketRequest::new("X"),
            response(r#"{"chart": {"result": []}}"#),
        )
        .unwrap_err();
        assert_eq!(err, YahooError::NoData);
    }

    #[test]
    fn null_result_is_no_data() {
        let err = YahooMarketDataAdapter::build_market(
            &MarketRequest::new("X"),
            response(r#"{"chart": {"result": null}}"#),
        )
        .unwrap_err();
        assert_eq!(err, YahooError::NoData);
    }

    #[test]
    fn missing_quote_array_is_a_failure() {
        let err = YahooMarketDataAdapter::build_market(
            &MarketRequest::new("X"),
            response(r#"{"chart": {"result": [{"meta": {"symbol": "X"}}]}}"#),
        )
        .unwrap_err();
        assert_eq!(err, YahooError::MissingQuotes);
    }

    #[test]
    fn unmapped_currency_passes_through() {
        let market = YahooMarketDataAdapter::build_market(
            &MarketRequest::new("X"),
            response(
                r#"{
                    "chart": {
                        "result": [{
                            "meta": {"currency": "XYZ", "regularMarketPrice": 1.0},
                            "indicators": {"quote": [{"close": [1.0, 1.0]}]}
                        }]
                    }
                }"#,
            ),
        )
        .unwrap();
        assert_eq!(market.currency, "XYZ");
    }
}
