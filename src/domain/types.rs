// ==========================================
// GradPath Planner - Domain Types
// ==========================================
// Term seasons and prerequisite relation kinds
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// Term name (season)
// ==========================================
// Ordering follows the calendar year: Spring < Summer < Fall
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TermName {
    Spring,
    Summer,
    Fall,
}

impl TermName {
    /// All seasons in calendar order.
    pub const ALL: [TermName; 3] = [TermName::Spring, TermName::Summer, TermName::Fall];

    /// Parse a season name, ignoring case and surrounding whitespace.
    ///
    /// # Returns
    /// - `Some(TermName)` for "spring" / "summer" / "fall" in any casing
    /// - `None` for anything else (e.g. "Winter")
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "spring" => Some(TermName::Spring),
            "summer" => Some(TermName::Summer),
            "fall" => Some(TermName::Fall),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TermName::Spring => "Spring",
            TermName::Summer => "Summer",
            TermName::Fall => "Fall",
        }
    }
}

impl fmt::Display for TermName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ==========================================
// Relation kind
// ==========================================
// Serialized the way catalog rows store it: required / coreq / optional
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationKind {
    /// Must be completed in a strictly earlier term
    Required,
    /// Must be placed in the same term
    Coreq,
    /// Soft recommendation, only warns
    Optional,
}

impl RelationKind {
    /// Parse a relation kind string.
    ///
    /// Unknown strings yield `None`; callers skip such rows.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "required" => Some(RelationKind::Required),
            "coreq" | "corequisite" => Some(RelationKind::Coreq),
            "optional" => Some(RelationKind::Optional),
            _ => None,
        }
    }
}

impl Default for RelationKind {
    fn default() -> Self {
        RelationKind::Required
    }
}

impl fmt::Display for RelationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RelationKind::Required => write!(f, "required"),
            RelationKind::Coreq => write!(f, "coreq"),
            RelationKind::Optional => write!(f, "optional"),
        }
    }
}

// ==========================================
// Plan status
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanStatus {
    Complete,
    Simulated,
}

impl fmt::Display for PlanStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlanStatus::Complete => write!(f, "complete"),
            PlanStatus::Simulated => write!(f, "simulated"),
        }
    }
}
