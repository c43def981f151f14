//! Bounded-parallelism batch execution.
//!
//! Generic runner for a pre-enumerated list of independent async tasks:
//! a fixed pool of workers consumes a shared queue and the output stays
//! index-aligned with the input regardless of completion order.

mod config;
mod error;
mod executor;

pub use config::BatchConfig;
pub use error::{BatchError, TaskError};
pub use executor::BatchExecutor;
