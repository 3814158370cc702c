// ==========================================
// GradPath Planner - Student Domain Model
// ==========================================
// Stored preferences and transcript rows as handed over by the data source,
// plus per-request overrides.
// ==========================================

use crate::domain::completion::CompletedCourses;
use serde::{Deserialize, Serialize};

// ==========================================
// StudentProfile
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentProfile {
    pub student_id: String,

    #[serde(default)]
    pub honors: bool,

    /// Stored credit cap; config default applies when absent
    #[serde(default)]
    pub max_credits: Option<u32>,

    /// Stored summer preference; config default applies when absent
    #[serde(default)]
    pub summer_ok: Option<bool>,

    /// e.g. "Spring 2027"
    #[serde(default)]
    pub target_grad_term: Option<String>,

    #[serde(default)]
    pub major: Option<String>,
}

impl StudentProfile {
    pub fn new(student_id: &str) -> Self {
        Self {
            student_id: student_id.to_string(),
            honors: false,
            max_credits: None,
            summer_ok: None,
            target_grad_term: None,
            major: None,
        }
    }
}

// ==========================================
// TranscriptEntry - one completed (or in-progress) course
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptEntry {
    #[serde(default)]
    pub course_code: Option<String>,

    /// Term label as written on the transcript, e.g. "Fall 2024"
    #[serde(default)]
    pub term: Option<String>,
}

impl TranscriptEntry {
    pub fn new(course_code: &str, term: &str) -> Self {
        Self {
            course_code: Some(course_code.to_string()),
            term: Some(term.to_string()),
        }
    }
}

/// Completed set from transcript rows; rows without a code are ignored.
pub fn completed_from_transcript(entries: &[TranscriptEntry]) -> CompletedCourses {
    entries
        .iter()
        .filter_map(|e| e.course_code.as_deref())
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .collect()
}

// ==========================================
// PlanRequest - per-request overrides
// ==========================================
// Overrides take precedence over stored student preferences.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanRequest {
    pub student_id: String,

    #[serde(default)]
    pub max_credits: Option<u32>,

    #[serde(default)]
    pub summer_ok: Option<bool>,
}

impl PlanRequest {
    pub fn new(student_id: &str) -> Self {
        Self {
            student_id: student_id.to_string(),
            max_credits: None,
            summer_ok: None,
        }
    }
}
