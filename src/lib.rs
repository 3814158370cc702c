// ==========================================
// GradPath Planner - Core Library
// ==========================================
// Prerequisite-aware term scheduler for a student's remaining coursework
// Layers: domain -> engine -> (config, repository) at the seams
// ==========================================

// ==========================================
// Module declarations
// ==========================================

// Domain layer - entities and value types
pub mod domain;

// Data source layer - planning rows
pub mod repository;

// Engine layer - scheduling rules and services
pub mod engine;

// Config layer - planner defaults
pub mod config;

// Logging
pub mod logging;

// ==========================================
// Re-exports
// ==========================================

// Domain types
pub use domain::types::{PlanStatus, RelationKind, TermName};

// Domain entities
pub use domain::{
    CompletedCourses, CourseOffering, CourseRecord, PlanRequest, PrereqRelation,
    PrereqRelations, ScheduleResult, SchedulingConstraints, StudentProfile, Term,
    TranscriptEntry,
};

// Engines and services
pub use engine::{
    compare_plans, DependencyOrderer, GraphBuilder, PlanComparison, PlanOrchestrator,
    PlanOutcome, PlanSimulator, PlannerError, PlannerResult, PrereqGraph, SimulationOutcome,
    SimulationOverrides, TermPacker,
};

// Config and data source
pub use config::{ConfigManager, PlannerConfigReader, PlannerSettings};
pub use repository::{InMemoryPlanningSource, PlanningDataSource, PlanningSnapshot};

// ==========================================
// Constants
// ==========================================

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const APP_NAME: &str = "GradPath Planner";
