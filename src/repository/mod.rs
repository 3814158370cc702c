// ==========================================
// GradPath Planner - Data Source Layer
// ==========================================
// Red line: no planning logic here, rows in and rows out
// ==========================================

pub mod error;
pub mod planning_source;

pub use error::{RepositoryError, RepositoryResult};
pub use planning_source::{InMemoryPlanningSource, PlanningDataSource, PlanningSnapshot};
