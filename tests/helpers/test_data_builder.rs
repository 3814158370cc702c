// ==========================================
// Test data builders - for integration tests
// ==========================================

use chrono::NaiveDate;
use gradpath_planner::domain::{CourseRecord, PrereqRelation, StudentProfile, TranscriptEntry};
use gradpath_planner::{InMemoryPlanningSource, PlanningSnapshot, RelationKind};

/// Fixed "today" so start-term inference is reproducible
pub fn test_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 15).unwrap()
}

// ==========================================
// CourseRecord builder
// ==========================================

pub struct CourseBuilder {
    record: CourseRecord,
}

impl CourseBuilder {
    pub fn new(code: &str) -> Self {
        Self {
            record: CourseRecord::new(code),
        }
    }

    pub fn title(mut self, title: &str) -> Self {
        self.record.title = Some(title.to_string());
        self
    }

    pub fn credits(mut self, credits: u32) -> Self {
        self.record.credits = Some(credits);
        self
    }

    pub fn availability(mut self, seasons: &str) -> Self {
        self.record.availability = Some(seasons.to_string());
        self
    }

    pub fn honors_only(mut self) -> Self {
        self.record.honors_only = true;
        self
    }

    pub fn build(self) -> CourseRecord {
        self.record
    }
}

// ==========================================
// PlanningSnapshot builder
// ==========================================

#[derive(Default)]
pub struct SnapshotBuilder {
    snapshot: PlanningSnapshot,
}

impl SnapshotBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn student(mut self, profile: StudentProfile) -> Self {
        self.snapshot.student = Some(profile);
        self
    }

    pub fn course(mut self, course: CourseBuilder) -> Self {
        self.snapshot.catalog.push(course.build());
        self
    }

    /// Catalog entries with default credits and every season
    pub fn courses(mut self, codes: &[&str]) -> Self {
        for code in codes {
            self.snapshot.catalog.push(CourseRecord::new(code));
        }
        self
    }

    pub fn requires(self, course: &str, prereq: &str) -> Self {
        self.relation(course, prereq, RelationKind::Required)
    }

    pub fn coreq(self, course: &str, other: &str) -> Self {
        self.relation(course, other, RelationKind::Coreq)
    }

    pub fn optional(self, course: &str, other: &str) -> Self {
        self.relation(course, other, RelationKind::Optional)
    }

    pub fn relation(mut self, course: &str, other: &str, kind: RelationKind) -> Self {
        self.snapshot
            .relations
            .push(PrereqRelation::new(course, other, kind));
        self
    }

    pub fn raw_relation(mut self, course: &str, other: &str, kind: &str) -> Self {
        self.snapshot.relations.push(PrereqRelation {
            course_code: course.to_string(),
            prereq_code: other.to_string(),
            relation: kind.to_string(),
        });
        self
    }

    pub fn completed(mut self, code: &str, term: &str) -> Self {
        self.snapshot.transcript.push(TranscriptEntry::new(code, term));
        self
    }

    pub fn build(self) -> PlanningSnapshot {
        self.snapshot
    }

    pub fn source(self) -> InMemoryPlanningSource {
        InMemoryPlanningSource::from_snapshot(self.snapshot)
    }
}

/// Student profile with nothing but an id
pub fn student(id: &str) -> StudentProfile {
    StudentProfile::new(id)
}
