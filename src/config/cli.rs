use crate::config::toml_config::TomlConfig;
use crate::config::{
    TourConfig, DEFAULT_FETCH_DELAY_MS, DEFAULT_MESSAGE, DEFAULT_OUTPUT_PATH, DEFAULT_PRIMARY_URL,
    DEFAULT_SECONDARY_URL,
};
use crate::utils::error::Result;
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "lang-tour")]
#[command(about = "A guided tour of everyday Rust: records, async, closures, RAII and errors")]
pub struct CliConfig {
    #[arg(long, default_value = DEFAULT_OUTPUT_PATH)]
    pub output_path: String,

    #[arg(long, default_value = DEFAULT_MESSAGE)]
    pub message: String,

    #[arg(long, default_value_t = DEFAULT_FETCH_DELAY_MS)]
    pub fetch_delay_ms: u64,

    #[arg(long, default_value = DEFAULT_PRIMARY_URL)]
    pub primary_url: String,

    #[arg(long, default_value = DEFAULT_SECONDARY_URL)]
    pub secondary_url: String,

    #[arg(long, help = "TOML file whose values override the options above")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Do not print the tour transcript")]
    pub quiet: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit diagnostics as JSON lines")]
    pub log_json: bool,
}

impl CliConfig {
    /// Folds in the optional TOML file and returns the settings to run with.
    pub fn resolve(&self) -> Result<TourConfig> {
        let mut config = TourConfig {
            output_path: self.output_path.clone(),
            message: self.message.clone(),
            fetch_delay_ms: self.fetch_delay_ms,
            primary_url: self.primary_url.clone(),
            secondary_url: self.secondary_url.clone(),
        };

        if let Some(path) = &self.config {
            tracing::debug!("Loading overrides from {}", path.display());
            TomlConfig::from_file(path)?.apply_to(&mut config);
        }

        Ok(config)
    }
}
