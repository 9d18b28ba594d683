use std::{env, time::Duration};

use super::error::ConfigError;

const DEFAULT_PROCESSING_DELAY_MS: u64 = 2000;

/// Checkout settings
#[derive(Debug, Clone)]
pub struct CheckoutConfig {
    pub processing_delay: Duration,
}

impl CheckoutConfig {
    /// Load checkout configuration from environment variables
    ///
    /// Environment variables:
    /// - ORDER_PROCESSING_DELAY_MS: simulated order processing time (default: 2000)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_value(env::var("ORDER_PROCESSING_DELAY_MS").ok())
    }

    fn from_value(raw: Option<String>) -> Result<Self, ConfigError> {
        let millis = match raw {
            None => DEFAULT_PROCESSING_DELAY_MS,
            Some(value) => value
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidValue {
                    var: "ORDER_PROCESSING_DELAY_MS",
                    value,
                })?,
        };

        Ok(Self {
            processing_delay: Duration::from_millis(millis),
        })
    }
}
