//! Use cases orchestrating the domain through ports.

mod refresh_markets;

pub use refresh_markets::{RefreshError, RefreshMarkets};
