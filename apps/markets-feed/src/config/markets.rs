//! Markets section of the configuration.

use serde::{Deserialize, Serialize};

use crate::domain::market::{LookbackDuration, MarketRequest, SortPolicy};

/// Placeholder substituted into link templates.
const SYMBOL_PLACEHOLDER: &str = "{SYMBOL}";

/// Markets configuration: the request list and display policies.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MarketsConfig {
    /// Instruments to fetch each cycle.
    #[serde(default)]
    pub markets: Vec<MarketRequest>,

    /// Legacy name for `markets`; adopted at load time when `markets`
    /// is empty and never consulted afterwards.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub stocks: Vec<MarketRequest>,

    /// Lookback duration label sent to the provider.
    #[serde(default)]
    pub duration: LookbackDuration,

    /// Ordering applied to the produced record list.
    #[serde(rename = "sort-by", default)]
    pub sort_by: SortPolicy,

    /// Chart link template with a `{SYMBOL}` placeholder, applied to
    /// requests without an explicit chart link.
    #[serde(rename = "chart-link-template", default)]
    pub chart_link_template: Option<String>,

    /// Symbol link template with a `{SYMBOL}` placeholder, applied to
    /// requests without an explicit symbol link.
    #[serde(rename = "symbol-link-template", default)]
    pub symbol_link_template: Option<String>,
}

impl MarketsConfig {
    /// One-time migration run at load: adopt the legacy `stocks` list
    /// and expand link templates into requests lacking explicit links.
    pub fn migrate(&mut self) {
        if self.markets.is_empty() && !self.stocks.is_empty() {
            self.markets = std::mem::take(&mut self.stocks);
        }
        self.stocks.clear();

        for request in &mut self.markets {
            if request.chart_link.is_none()
                && let Some(template) = &self.chart_link_template
            {
                request.chart_link = Some(template.replace(SYMBOL_PLACEHOLDER, &request.symbol));
            }
            if request.symbol_link.is_none()
                && let Some(template) = &self.symbol_link_template
            {
                request.symbol_link = Some(template.replace(SYMBOL_PLACEHOLDER, &request.symbol));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with(markets: Vec<&str>, stocks: Vec<&str>) -> MarketsConfig {
        MarketsConfig {
            markets: markets.into_iter().map(MarketRequest::new).collect(),
            stocks: stocks.into_iter().map(MarketRequest::new).collect(),
            ..MarketsConfig::default()
        }
    }

    #[test]
    fn legacy_stocks_list_is_adopted_when_markets_is_empty() {
        let mut config = config_with(vec![], vec!["AAPL", "MSFT"]);
        config.migrate();

        let symbols: Vec<&str> = config.markets.iter().map(|m| m.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["AAPL", "MSFT"]);
        assert!(config.stocks.is_empty());
    }

    #[test]
    fn markets_list_wins_over_legacy_stocks() {
        let mut config = config_with(vec!["BTC-USD"], vec!["AAPL"]);
        config.migrate();

        let symbols: Vec<&str> = config.markets.iter().map(|m| m.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["BTC-USD"]);
    }

    #[test]
    fn link_templates_fill_missing_links_only() {
        let mut config = config_with(vec!["AAPL", "MSFT"], vec![]);
        config.markets[1].chart_link = Some("/custom".to_string());
        config.chart_link_template = Some("https://example.com/c/{SYMBOL}".to_string());
        config.symbol_link_template = Some("https://example.com/s/{SYMBOL}".to_string());
        config.migrate();

        assert_eq!(
            config.markets[0].chart_link.as_deref(),
            Some("https://example.com/c/AAPL")
        );
        assert_eq!(config.markets[1].chart_link.as_deref(), Some("/custom"));
        assert_eq!(
            config.markets[1].symbol_link.as_deref(),
            Some("https://example.com/s/MSFT")
        );
    }

    #[test]
    fn migrate_without_templates_leaves_links_absent() {
        let mut config = config_with(vec!["AAPL"], vec![]);
        config.migrate();
        assert!(config.markets[0].chart_link.is_none());
        assert!(config.markets[0].symbol_link.is_none());
    }
}
