//! Shared configuration for the creator-score workspace.
//!
//! Holds the env-driven [`AppConfig`] and the YAML scoring policy
//! ([`policy::ScoringPolicy`]) that parameterises the scoring engine
//! (target market, niche allow-list, benchmarks, windows).

use thiserror::Error;

pub mod app_config;
pub mod config;
pub mod policy;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use policy::{load_policy, ScoringPolicy};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required env var: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for env var {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read policy file {path}: {source}")]
    PolicyFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse policy file: {0}")]
    PolicyFileParse(#[from] serde_yaml::Error),

    #[error("policy validation failed: {0}")]
    Validation(String),
}
