#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::TourSettings;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_path, validate_range, validate_url, Validate,
};
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_OUTPUT_PATH: &str = "example.txt";
pub const DEFAULT_MESSAGE: &str = "Hello, World!";
pub const DEFAULT_FETCH_DELAY_MS: u64 = 1000;
pub const DEFAULT_PRIMARY_URL: &str = "https://api1.example.com";
pub const DEFAULT_SECONDARY_URL: &str = "https://api2.example.com";
pub const MAX_FETCH_DELAY_MS: u64 = 60_000;

/// Resolved settings for one tour run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TourConfig {
    pub output_path: String,
    pub message: String,
    pub fetch_delay_ms: u64,
    pub primary_url: String,
    pub secondary_url: String,
}

impl Default for TourConfig {
    fn default() -> Self {
        Self {
            output_path: DEFAULT_OUTPUT_PATH.to_string(),
            message: DEFAULT_MESSAGE.to_string(),
            fetch_delay_ms: DEFAULT_FETCH_DELAY_MS,
            primary_url: DEFAULT_PRIMARY_URL.to_string(),
            secondary_url: DEFAULT_SECONDARY_URL.to_string(),
        }
    }
}

impl Validate for TourConfig {
    fn validate(&self) -> Result<()> {
        validate_path("output_path", &self.output_path)?;
        validate_non_empty_string("message", &self.message)?;
        validate_range("fetch_delay_ms", self.fetch_delay_ms, 0, MAX_FETCH_DELAY_MS)?;
        validate_url("primary_url", &self.primary_url)?;
        validate_url("secondary_url", &self.secondary_url)?;
        Ok(())
    }
}

impl TourSettings for TourConfig {
    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn message(&self) -> &str {
        &self.message
    }

    fn fetch_delay(&self) -> Duration {
        Duration::from_millis(self.fetch_delay_ms)
    }

    fn primary_url(&self) -> &str {
        &self.primary_url
    }

    fn secondary_url(&self) -> &str {
        &self.secondary_url
    }
}
