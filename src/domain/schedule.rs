// ==========================================
// GradPath Planner - Schedule Result
// ==========================================
// Output of one scheduling run: chronological terms plus bottleneck
// diagnostics. Bottlenecks are informational strings, never errors.
// ==========================================

use crate::domain::types::TermName;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

// ==========================================
// Term - one academic term
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Term {
    /// "{season} {year}", e.g. "Fall 2025"
    pub term: String,
    pub name: TermName,
    pub year: i32,
    pub courses: Vec<String>,
    pub credits: u32,
}

impl Term {
    pub fn new(name: TermName, year: i32, courses: Vec<String>, credits: u32) -> Self {
        Self {
            term: format!("{} {}", name, year),
            name,
            year,
            courses,
            credits,
        }
    }
}

// ==========================================
// ScheduleResult
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleResult {
    pub terms: Vec<Term>,
    pub bottlenecks: Vec<String>,
    /// Courses still queued when the run stopped (empty on success)
    #[serde(default)]
    pub unscheduled: Vec<String>,
}

impl ScheduleResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total_credits(&self) -> u32 {
        self.terms.iter().map(|t| t.credits).sum()
    }

    /// Label of the last scheduled term.
    pub fn projected_graduation(&self) -> Option<&str> {
        self.terms.last().map(|t| t.term.as_str())
    }

    pub fn scheduled_courses(&self) -> BTreeSet<String> {
        self.terms
            .iter()
            .flat_map(|t| t.courses.iter().cloned())
            .collect()
    }

    /// Term label a course was placed in, if any.
    pub fn term_of(&self, code: &str) -> Option<&str> {
        self.terms
            .iter()
            .find(|t| t.courses.iter().any(|c| c == code))
            .map(|t| t.term.as_str())
    }

    /// Index of the term a course was placed in, if any.
    pub fn term_index_of(&self, code: &str) -> Option<usize> {
        self.terms
            .iter()
            .position(|t| t.courses.iter().any(|c| c == code))
    }

    pub fn is_complete(&self) -> bool {
        self.unscheduled.is_empty()
    }
}
