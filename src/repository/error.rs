// ==========================================
// GradPath Planner - Data Source Errors
// ==========================================
// Tooling: thiserror derive
// ==========================================

use thiserror::Error;

/// Data source error type
#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("record not found: {entity} with id={id}")]
    NotFound { entity: String, id: String },

    #[error("failed to read planning data: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse planning data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RepositoryError {
    pub fn not_found(entity: &str, id: &str) -> Self {
        RepositoryError::NotFound {
            entity: entity.to_string(),
            id: id.to_string(),
        }
    }
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;
