// ==========================================
// GradPath Planner - Scheduling Constraints
// ==========================================
// SchedulingConstraints: per-run constraint bundle (immutable during a run)
// TermLoad: the in-progress selection of one term pass
// ==========================================

use crate::domain::types::TermName;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

// ==========================================
// SchedulingConstraints - constraint bundle
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchedulingConstraints {
    /// Credit cap per term (validated positive by the caller)
    pub max_credits_per_term: u32,
    pub summer_allowed: bool,
    pub honors_eligible: bool,
    /// First season of the rotation; ignored when not part of the rotation
    #[serde(default)]
    pub start_term: Option<TermName>,
    /// Year of the first term; 1 when absent
    #[serde(default)]
    pub start_year: Option<i32>,
}

impl SchedulingConstraints {
    pub fn new(max_credits_per_term: u32) -> Self {
        Self {
            max_credits_per_term,
            summer_allowed: false,
            honors_eligible: false,
            start_term: None,
            start_year: None,
        }
    }

    pub fn with_summer(mut self, allowed: bool) -> Self {
        self.summer_allowed = allowed;
        self
    }

    pub fn with_honors(mut self, eligible: bool) -> Self {
        self.honors_eligible = eligible;
        self
    }

    pub fn starting(mut self, term: TermName, year: i32) -> Self {
        self.start_term = Some(term);
        self.start_year = Some(year);
        self
    }

    pub fn first_year(&self) -> i32 {
        self.start_year.unwrap_or(1)
    }
}

// ==========================================
// Trait: CreditConstraint
// ==========================================
// Credit-cap checks used while packing a term
pub trait CreditConstraint {
    /// Whether a course of `credits` still fits under the cap.
    fn can_add_course(&self, credits: u32) -> bool;

    fn remaining_credits(&self) -> u32;

    /// Share of the cap already used (0.0 - 1.0).
    fn utilization(&self) -> f64;
}

// ==========================================
// TermLoad - one term's in-progress selection
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermLoad {
    pub courses: Vec<String>,
    pub credits: u32,
    pub max_credits: u32,
}

impl TermLoad {
    pub fn new(max_credits: u32) -> Self {
        Self {
            courses: Vec::new(),
            credits: 0,
            max_credits,
        }
    }

    pub fn accept(&mut self, code: &str, credits: u32) {
        self.courses.push(code.to_string());
        self.credits += credits;
    }

    /// Whether any of `codes` was already accepted into this term.
    pub fn contains_any(&self, codes: &BTreeSet<String>) -> bool {
        self.courses.iter().any(|c| codes.contains(c))
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}

impl CreditConstraint for TermLoad {
    fn can_add_course(&self, credits: u32) -> bool {
        self.credits.saturating_add(credits) <= self.max_credits
    }

    fn remaining_credits(&self) -> u32 {
        self.max_credits.saturating_sub(self.credits)
    }

    fn utilization(&self) -> f64 {
        if self.max_credits == 0 {
            return 0.0;
        }
        self.credits as f64 / self.max_credits as f64
    }
}
