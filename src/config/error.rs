// ==========================================
// GradPath Planner - Config Errors
// ==========================================

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config value for {key}: {message}")]
    InvalidValue { key: String, message: String },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type ConfigResult<T> = Result<T, ConfigError>;
