//! Shared domain types and configuration for the address lookup workspace.

mod app_config;
mod classification;
mod config;
mod scope;

use thiserror::Error;

pub use app_config::AppConfig;
pub use classification::ClassificationFilter;
pub use config::{
    build_app_config, load_app_config, DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_REQUEST_TIMEOUT_SECS,
    DEFAULT_USER_AGENT, SERVICE_URL_VAR,
};
pub use scope::SearchScope;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid search scope: {0}")]
    InvalidScope(String),

    #[error("unknown classification filter: {0}")]
    InvalidClassificationFilter(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
