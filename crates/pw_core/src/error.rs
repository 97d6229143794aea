use thiserror::Error;

use crate::session::SessionState;

/// Errors raised by the game session and configuration layers.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("A rule has already been removed this session")]
    RuleAlreadyRemoved,

    #[error("Action not allowed while the session is {state:?}")]
    InvalidState { state: SessionState },

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors raised while loading a [`GameConfig`](crate::config::GameConfig).
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

pub type Result<T> = std::result::Result<T, CoreError>;
