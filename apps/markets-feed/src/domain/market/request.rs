//! Market request value object.

use serde::{Deserialize, Serialize};

/// One instrument the caller wants quoted.
///
/// Immutable input owned by the caller; the optional fields override
/// provider-supplied values in the produced record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketRequest {
    /// Provider ticker symbol.
    pub symbol: String,

    /// Display name overriding the provider short name.
    #[serde(rename = "name", default, skip_serializing_if = "Option::is_none")]
    pub custom_name: Option<String>,

    /// Outbound link attached to the chart area.
    #[serde(rename = "chart-link", default, skip_serializing_if = "Option::is_none")]
    pub chart_link: Option<String>,

    /// Outbound link attached to the symbol label.
    #[serde(rename = "symbol-link", default, skip_serializing_if = "Option::is_none")]
    pub symbol_link: Option<String>,
}

impl MarketRequest {
    /// Create a request for a bare symbol with no overrides.
    #[must_use]
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            custom_name: None,
            chart_link: None,
            symbol_link: None,
        }
    }

    /// The display name to use when the provider name is available as a
    /// fallback: the custom name wins when present and non-empty.
    #[must_use]
    pub fn resolved_name(&self, provider_name: &str) -> String {
        match &self.custom_name {
            Some(name) if !name.is_empty() => name.clone(),
            _ => provider_name.to_string(),
        }
    }
}
