// ==========================================
// GradPath Planner - Engine Layer
// ==========================================
// Responsibility: graph building, dependency ordering, term packing and the
// services composed from them
// Red line: engines never touch storage; every placement decision carries a
// reason
// ==========================================

pub mod eligibility;
pub mod error;
pub mod graph;
pub mod orchestrator;
pub mod ordering;
pub mod plan_compare;
pub mod simulation;
pub mod term_calendar;
pub mod term_packer;

// Re-export core engines
pub use eligibility::{DeferReason, EligibilityCore, GateContext, GateDecision, GateOutcome};
pub use error::{PlannerError, PlannerResult};
pub use graph::{GraphBuilder, PrereqGraph};
pub use orchestrator::{risk_score, PlanOrchestrator, PlanOutcome};
pub use ordering::DependencyOrderer;
pub use plan_compare::{compare_plans, PlanComparison};
pub use simulation::{PlanSimulator, SimulationOutcome, SimulationOverrides};
pub use term_calendar::{infer_start_term, parse_term_label, TermRotation, TermStamp};
pub use term_packer::{TermPacker, TermPassResult, DEFAULT_HORIZON_YEARS};
