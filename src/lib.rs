pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::CliConfig;

pub use crate::config::{toml_config::TomlConfig, TourConfig};
pub use crate::core::tour::{TourEngine, TourReport};
pub use crate::utils::error::{Result, TourError};
pub use crate::utils::transcript::Transcript;
