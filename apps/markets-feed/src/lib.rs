#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::float_cmp,
        clippy::needless_pass_by_value,
        clippy::default_trait_access,
        clippy::items_after_statements
    )
)]

//! Markets Feed - Quote Acquisition Pipeline
//!
//! Fetches quote time-series for a configured list of symbols from the
//! Yahoo chart API in parallel, tolerates partial provider failures,
//! and reduces the raw responses into a small display-ready record set
//! (price, percent change, currency glyph, sparkline geometry),
//! optionally sorted by change magnitude.
//!
//! # Layers (inside -> outside)
//!
//! - **Domain**: Market records and pure computation
//!   - `market`: requests, records, duration/sort enumerations, series
//!     normalization, currency resolution
//!
//! - **Application**: Use cases and port definitions
//!   - `ports`: the market data interface and aggregate classification
//!   - `use_cases`: one-shot market refresh
//!
//! - **Infrastructure**: Adapters and external integrations
//!   - `batch`: bounded worker-pool executor over independent tasks
//!   - `yahoo`: chart API client and port adapter
//!   - `telemetry`: tracing subscriber setup
//!
//! # Data Flow
//!
//! ```text
//! config (YAML) ──► requests ──► batch executor ──► chart client (xN)
//!                                     │
//!                 records ◄── normalizer ◄── decoded responses
//!                    │
//!                 classify + sort ──► ordered record list (JSON)
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

// =============================================================================
// Module Declarations
// =============================================================================

/// Domain layer - Market types with no external dependencies.
pub mod domain;

/// Application layer - Use cases and port definitions.
pub mod application;

/// Infrastructure layer - Adapters and external integrations.
pub mod infrastructure;

/// Configuration loading and validation.
pub mod config;

// =============================================================================
// Re-exports
// =============================================================================

// Domain types
pub use domain::market::{
    LookbackDuration, Market, MarketList, MarketRequest, SortPolicy, display_symbol,
};

// Ports and use cases
pub use application::ports::{
    FetchClassification, FetchOutcome, MarketDataError, MarketDataPort,
};
pub use application::use_cases::{RefreshError, RefreshMarkets};

// Infrastructure
pub use infrastructure::batch::{BatchConfig, BatchError, BatchExecutor, TaskError};
pub use infrastructure::yahoo::{
    ChartClient, ChartClientConfig, YahooError, YahooMarketDataAdapter,
};

// Config
pub use config::{Config, ConfigError, load_config, load_config_from_string};
