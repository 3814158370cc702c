// ==========================================
// GradPath Planner - Engine Error Types
// ==========================================
// Structural errors abort a run; data-quality issues never reach this type,
// they are reported as bottleneck strings instead.
// ==========================================

use crate::config::ConfigError;
use crate::repository::RepositoryError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlannerError {
    // ===== Structural errors =====
    #[error("cannot plan: prerequisite cycle among {}", .unresolved.join(", "))]
    CycleDetected { unresolved: Vec<String> },

    #[error("invalid plan request: {message}")]
    InvalidRequest { message: String },

    // ===== Collaborator errors =====
    #[error("data source failure: {0}")]
    Repository(#[from] RepositoryError),

    #[error("configuration failure: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type PlannerResult<T> = Result<T, PlannerError>;
