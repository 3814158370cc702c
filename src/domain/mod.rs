// ==========================================
// GradPath Planner - Domain Layer
// ==========================================
// Responsibility: entities, value types, constraint interfaces
// Red line: no data access, no scheduling logic
// ==========================================

pub mod completion;
pub mod constraints;
pub mod course;
pub mod relation;
pub mod schedule;
pub mod student;
pub mod types;

// Re-export core types
pub use completion::CompletedCourses;
pub use constraints::{CreditConstraint, SchedulingConstraints, TermLoad};
pub use course::{offerings_from_records, CourseOffering, CourseRecord, DEFAULT_COURSE_CREDITS};
pub use relation::{PrereqRelation, PrereqRelations, RelationMap};
pub use schedule::{ScheduleResult, Term};
pub use student::{completed_from_transcript, PlanRequest, StudentProfile, TranscriptEntry};
pub use types::{PlanStatus, RelationKind, TermName};
