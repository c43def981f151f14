//! Display-ready market record and ordered record list.

use serde::Serialize;

use super::request::MarketRequest;
use super::sort::SortPolicy;

/// Display-ready record for one successfully fetched instrument.
///
/// Constructed once per update cycle and discarded on the next; never
/// mutated after construction (sorting reorders the list, not the
/// records).
#[derive(Debug, Clone, Serialize)]
pub struct Market {
    /// The originating request (symbol and optional links).
    #[serde(flatten)]
    pub request: MarketRequest,
    /// Resolved display name.
    pub name: String,
    /// Display currency glyph (or the raw code when unmapped).
    pub currency: String,
    /// Latest regular market price.
    pub price: f64,
    /// Percent change against the selected baseline.
    pub percent_change: f64,
    /// SVG polyline coordinates for the sparkline.
    pub chart_points: String,
}

/// Ordered list of market records for one update cycle.
///
/// Order is input order unless a sort policy reorders it in place.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct MarketList(Vec<Market>);

impl MarketList {
    /// Create an empty list with room for `capacity` records.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }

    /// Append a record.
    pub fn push(&mut self, market: Market) {
        self.0.push(market);
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the list holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the records in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Market> {
        self.0.iter()
    }

    /// Sort descending by signed percent change.
    pub fn sort_by_change(&mut self) {
        self.0
            .sort_by(|a, b| b.percent_change.total_cmp(&a.percent_change));
    }

    /// Sort descending by magnitude of percent change.
    pub fn sort_by_abs_change(&mut self) {
        self.0
            .sort_by(|a, b| b.percent_change.abs().total_cmp(&a.percent_change.abs()));
    }

    /// Apply a sort policy; [`SortPolicy::InputOrder`] leaves the list
    /// untouched.
    pub fn apply_sort(&mut self, policy: SortPolicy) {
        match policy {
            SortPolicy::Change => self.sort_by_change(),
            SortPolicy::AbsoluteChange => self.sort_by_abs_change(),
            SortPolicy::InputOrder => {}
        }
    }

    /// Consume the list, yielding the inner records.
    #[must_use]
    pub fn into_inner(self) -> Vec<Market> {
        self.0
    }
}

impl From<Vec<Market>> for MarketList {
    fn from(markets: Vec<Market>) -> Self {
        Self(markets)
    }
}

impl IntoIterator for MarketList {
    type Item = Market;
    type IntoIter = std::vec::IntoIter<Market>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a MarketList {
    type Item = &'a Market;
    type IntoIter = std::slice::Iter<'a, Market>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
