//! Shared types and configuration for trendpost.

pub mod app_config;
pub mod config;
pub mod targets;
pub mod topic;

use thiserror::Error;

pub use app_config::{AppConfig, Credentials};
pub use config::{load_app_config, load_app_config_from_env};
pub use targets::{default_scrape_targets, load_scrape_targets, ScrapeTarget};
pub use topic::Topic;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read scrape target file {path}: {source}")]
    TargetsFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse scrape target file: {0}")]
    TargetsFileParse(#[from] serde_yaml::Error),

    #[error("validation error: {0}")]
    Validation(String),
}
