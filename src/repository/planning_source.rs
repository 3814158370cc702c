// ==========================================
// GradPath Planner - Planning Data Source
// ==========================================
// Responsibility: hand the orchestrator the raw rows of one planning run
// (student profile, catalog, relation rows, transcript)
// Implementors: InMemoryPlanningSource (JSON snapshot)
// ==========================================

use crate::domain::course::CourseRecord;
use crate::domain::relation::PrereqRelation;
use crate::domain::student::{StudentProfile, TranscriptEntry};
use crate::repository::error::RepositoryResult;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

// ==========================================
// PlanningDataSource Trait
// ==========================================
#[async_trait]
pub trait PlanningDataSource: Send + Sync {
    /// Stored profile of the student, `None` when unknown.
    async fn load_student(&self, student_id: &str) -> RepositoryResult<Option<StudentProfile>>;

    /// Every catalog record.
    async fn load_catalog(&self) -> RepositoryResult<Vec<CourseRecord>>;

    /// Every relation row (required / coreq / optional).
    async fn load_relations(&self) -> RepositoryResult<Vec<PrereqRelation>>;

    /// Transcript rows of the student.
    async fn load_transcript(&self, student_id: &str) -> RepositoryResult<Vec<TranscriptEntry>>;
}

// ==========================================
// PlanningSnapshot
// ==========================================

/// Everything one run reads, as a single JSON document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanningSnapshot {
    pub student: Option<StudentProfile>,
    pub catalog: Vec<CourseRecord>,
    pub relations: Vec<PrereqRelation>,
    /// Transcript of `student` (of any requested student when `student` is absent)
    pub transcript: Vec<TranscriptEntry>,
}

impl PlanningSnapshot {
    pub fn from_json(raw: &str) -> RepositoryResult<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Student id of the snapshot, if it carries a profile.
    pub fn student_id(&self) -> Option<&str> {
        self.student.as_ref().map(|s| s.student_id.as_str())
    }

    fn owns(&self, student_id: &str) -> bool {
        match self.student_id() {
            Some(id) => id == student_id,
            None => true,
        }
    }
}

// ==========================================
// InMemoryPlanningSource
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct InMemoryPlanningSource {
    snapshot: PlanningSnapshot,
}

impl InMemoryPlanningSource {
    pub fn from_snapshot(snapshot: PlanningSnapshot) -> Self {
        Self { snapshot }
    }

    /// Read a snapshot from a JSON file.
    pub fn from_json_file(path: &Path) -> RepositoryResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        let snapshot = PlanningSnapshot::from_json(&raw)?;
        info!(
            path = %path.display(),
            courses = snapshot.catalog.len(),
            relations = snapshot.relations.len(),
            transcript = snapshot.transcript.len(),
            "planning snapshot loaded"
        );
        Ok(Self::from_snapshot(snapshot))
    }

    pub fn snapshot(&self) -> &PlanningSnapshot {
        &self.snapshot
    }
}

#[async_trait]
impl PlanningDataSource for InMemoryPlanningSource {
    async fn load_student(&self, student_id: &str) -> RepositoryResult<Option<StudentProfile>> {
        let found = self
            .snapshot
            .student
            .as_ref()
            .filter(|s| s.student_id == student_id)
            .cloned();
        debug!(student_id, found = found.is_some(), "student lookup");
        Ok(found)
    }

    async fn load_catalog(&self) -> RepositoryResult<Vec<CourseRecord>> {
        Ok(self.snapshot.catalog.clone())
    }

    async fn load_relations(&self) -> RepositoryResult<Vec<PrereqRelation>> {
        Ok(self.snapshot.relations.clone())
    }

    async fn load_transcript(&self, student_id: &str) -> RepositoryResult<Vec<TranscriptEntry>> {
        if !self.snapshot.owns(student_id) {
            return Ok(Vec::new());
        }
        Ok(self.snapshot.transcript.clone())
    }
}
