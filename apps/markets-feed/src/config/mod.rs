//! Configuration module for the markets feed.
//!
//! Provides YAML configuration loading with environment variable
//! interpolation, a load-time migration step for legacy fields, and
//! validation.
//!
//! # Usage
//!
//! ```rust,ignore
//! use markets_feed::config::load_config;
//!
//! // Load from default path (config.yaml)
//! let config = load_config(None)?;
//!
//! // Load from custom path
//! let config = load_config(Some("custom/config.yaml"))?;
//! ```

mod fetch;
mod markets;
mod observability;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use fetch::FetchConfig;
pub use markets::MarketsConfig;
pub use observability::{LoggingConfig, ObservabilityConfig};

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        /// Path to the config file.
        path: String,
        /// The underlying IO error.
        source: std::io::Error,
    },

    /// Failed to parse YAML configuration.
    #[error("Failed to parse config YAML: {0}")]
    ParseError(#[from] serde_yaml_bw::Error),

    /// Configuration validation failed.
    #[error("Config validation failed: {0}")]
    ValidationError(String),
}

/// Root configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Markets configuration.
    #[serde(default)]
    pub markets: MarketsConfig,
    /// Fetch configuration.
    #[serde(default)]
    pub fetch: FetchConfig,
    /// Observability configuration.
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

/// Load configuration from a YAML file with environment variable
/// interpolation.
///
/// The legacy-field migration runs once here, before validation;
/// nothing downstream sees pre-migration values.
///
/// # Arguments
///
/// * `path` - Optional path to the config file. Defaults to "config.yaml".
///
/// # Errors
///
/// Returns a `ConfigError` if the file cannot be read, parsed, or
/// validated.
pub fn load_config(path: Option<&str>) -> Result<Config, ConfigError> {
    let path = path.unwrap_or("config.yaml");

    let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_string(),
        source: e,
    })?;

    load_config_from_string(&contents)
}

/// Load configuration from a YAML string (useful for testing).
///
/// # Errors
///
/// Returns a `ConfigError` if the YAML cannot be parsed or validated.
pub fn load_config_from_string(yaml: &str) -> Result<Config, ConfigError> {
    let interpolated = interpolate_env_vars(yaml);
    let mut config: Config = serde_yaml_bw::from_str(&interpolated)?;
    config.markets.migrate();
    validate_config(&config)?;
    Ok(config)
}

/// Interpolate environment variables in a string.
///
/// Supports both `${VAR}` and `${VAR:-default}` syntax.
#[allow(clippy::expect_used)] // Regex is compile-time constant; expect() is safe here
fn interpolate_env_vars(input: &str) -> String {
    use std::sync::OnceLock;

    static ENV_VAR_REGEX: OnceLock<regex::Regex> = OnceLock::new();

    let mut result = input.to_string();

    // Match ${VAR} or ${VAR:-default} patterns
    let re = ENV_VAR_REGEX.get_or_init(|| {
        regex::Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)(?::-([^}]*))?\}")
            .expect("env var regex is valid")
    });

    for cap in re.captures_iter(input) {
        let Some(full_match) = cap.get(0) else {
            continue;
        };
        let Some(var_match) = cap.get(1) else {
            continue;
        };
        let full_match = full_match.as_str();
        let var_name = var_match.as_str();
        let default_value = cap.get(2).map(|m| m.as_str());

        let value = match std::env::var(var_name) {
            Ok(v) if !v.is_empty() => v,
            _ => default_value.map_or_else(String::new, str::to_string),
        };

        result = result.replace(full_match, &value);
    }

    result
}

/// Validate configuration values.
fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.markets.markets.is_empty() {
        return Err(ConfigError::ValidationError(
            "markets list must not be empty".to_string(),
        ));
    }

    for request in &config.markets.markets {
        if request.symbol.is_empty() {
            return Err(ConfigError::ValidationError(
                "market symbol must not be empty".to_string(),
            ));
        }
    }

    if config.fetch.max_workers == 0 {
        return Err(ConfigError::ValidationError(
            "fetch.max-workers must be at least 1".to_string(),
        ));
    }

    if config.fetch.request_timeout_secs == 0 {
        return Err(ConfigError::ValidationError(
            "fetch.request-timeout-secs must be at least 1".to_string(),
        ));
    }

    if config.fetch.endpoint.is_empty() {
        return Err(ConfigError::ValidationError(
            "fetch.endpoint must not be empty".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::domain::market::{LookbackDuration, SortPolicy};

    use super::*;

    #[test]
    fn loads_a_full_config() {
        let yaml = r#"
markets:
  duration: 3m
  sort-by: change
  chart-link-template: "https://example.com/c/{SYMBOL}"
  markets:
    - symbol: AAPL
      name: Apple
    - symbol: BTC-USD
fetch:
  max-workers: 4
  request-timeout-secs: 5
observability:
  logging:
    level: debug
"#;
        let config = load_config_from_string(yaml).unwrap();

        assert_eq!(config.markets.markets.len(), 2);
        assert_eq!(config.markets.duration, LookbackDuration::ThreeMonths);
        assert_eq!(config.markets.sort_by, SortPolicy::Change);
        assert_eq!(
            config.markets.markets[0].chart_link.as_deref(),
            Some("https://example.com/c/AAPL")
        );
        assert_eq!(config.fetch.max_workers, 4);
        assert_eq!(config.observability.logging.level, "debug");
    }

    #[test]
    fn defaults_fill_missing_sections() {
        let yaml = "markets:\n  markets:\n    - symbol: AAPL\n";
        let config = load_config_from_string(yaml).unwrap();

        assert_eq!(config.markets.duration, LookbackDuration::OneDay);
        assert_eq!(config.markets.sort_by, SortPolicy::InputOrder);
        assert_eq!(config.fetch.max_workers, 10);
        assert_eq!(config.observability.logging.level, "info");
    }

    #[test]
    fn invalid_duration_normalizes_to_one_day() {
        let yaml = "markets:\n  duration: fortnight\n  markets:\n    - symbol: AAPL\n";
        let config = load_config_from_string(yaml).unwrap();
        assert_eq!(config.markets.duration, LookbackDuration::OneDay);
    }

    #[test]
    fn legacy_stocks_field_is_migrated() {
        let yaml = "markets:\n  stocks:\n    - symbol: AAPL\n";
        let config = load_config_from_string(yaml).unwrap();
        assert_eq!(config.markets.markets.len(), 1);
        assert_eq!(config.markets.markets[0].symbol, "AAPL");
    }

    #[test]
    fn empty_markets_list_fails_validation() {
        let err = load_config_from_string("markets:\n  markets: []\n").unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn empty_symbol_fails_validation() {
        let yaml = "markets:\n  markets:\n    - symbol: \"\"\n";
        let err = load_config_from_string(yaml).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn zero_workers_fails_validation() {
        let yaml = "markets:\n  markets:\n    - symbol: AAPL\nfetch:\n  max-workers: 0\n";
        let err = load_config_from_string(yaml).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn env_var_default_is_interpolated_when_unset() {
        let yaml =
            "markets:\n  duration: ${MARKETS_FEED_TEST_UNSET_DURATION:-1y}\n  markets:\n    - symbol: AAPL\n";
        let config = load_config_from_string(yaml).unwrap();
        assert_eq!(config.markets.duration, LookbackDuration::OneYear);
    }

    #[test]
    fn missing_env_var_without_default_becomes_empty() {
        let yaml =
            "markets:\n  duration: \"${MARKETS_FEED_TEST_UNSET_DURATION}\"\n  markets:\n    - symbol: AAPL\n";
        let config = load_config_from_string(yaml).unwrap();
        // Empty label normalizes to the default duration.
        assert_eq!(config.markets.duration, LookbackDuration::OneDay);
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let err = load_config(Some("/nonexistent/config.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::ReadError { .. }));
    }
}
