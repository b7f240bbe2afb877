//! Configuration module
//!
//! Loads configuration from environment variables.

use rust_decimal::Decimal;
use std::env;
use std::str::FromStr;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Symbol printed before every amount
    pub currency_symbol: String,

    /// Overdraft limit for the demo current account
    pub demo_overdraft_limit: Decimal,

    /// Environment (development, production)
    pub environment: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency_symbol: "₹".to_string(),
            demo_overdraft_limit: Decimal::new(25000, 0),
            environment: "development".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let currency_symbol = lookup("CURRENCY_SYMBOL").unwrap_or(defaults.currency_symbol);

        let demo_overdraft_limit = match lookup("DEMO_OVERDRAFT_LIMIT") {
            Some(raw) => Decimal::from_str(raw.trim())
                .ok()
                .filter(|limit| *limit >= Decimal::ZERO)
                .ok_or(ConfigError::InvalidValue("DEMO_OVERDRAFT_LIMIT"))?,
            None => defaults.demo_overdraft_limit,
        };

        let environment = lookup("ENVIRONMENT").unwrap_or(defaults.environment);

        Ok(Self {
            currency_symbol,
            demo_overdraft_limit,
            environment,
        })
    }
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(&'static str),
}
