//! Port definitions for the application layer.

mod market_data_port;

pub use market_data_port::{
    FetchClassification, FetchOutcome, MarketDataError, MarketDataPort,
};
