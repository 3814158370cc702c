// ==========================================
// GradPath Planner - Eligibility Core
// ==========================================
// Responsibility: decide, for one course in one term pass, whether it is
// accepted, deferred, or dropped, and why
// Red line: stateless, no side effects; every decision carries a reason
// ==========================================

use crate::domain::completion::CompletedCourses;
use crate::domain::constraints::{CreditConstraint, SchedulingConstraints, TermLoad};
use crate::domain::course::CourseOffering;
use crate::domain::relation::PrereqRelations;
use crate::domain::types::TermName;
use std::fmt;

/// Why a course stays in the queue for a later term.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeferReason {
    /// No catalog offering known for the code
    NoOffering,
    /// Not offered in this season
    NotOffered,
    /// Some required prerequisite is not yet completed
    MissingPrerequisites,
    /// No corequisite accepted earlier in this same pass
    CorequisiteUnpaired,
    /// Would exceed the term credit cap
    CreditCap,
}

impl fmt::Display for DeferReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeferReason::NoOffering => write!(f, "NO_OFFERING"),
            DeferReason::NotOffered => write!(f, "NOT_OFFERED"),
            DeferReason::MissingPrerequisites => write!(f, "MISSING_PREREQUISITES"),
            DeferReason::CorequisiteUnpaired => write!(f, "COREQUISITE_UNPAIRED"),
            DeferReason::CreditCap => write!(f, "CREDIT_CAP"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateDecision {
    /// Place the course in this term with the given credits
    Accept { credits: u32 },
    /// Keep the course queued
    Defer(DeferReason),
    /// Remove the course from the run for good; the string is the bottleneck
    Drop(String),
}

/// Decision plus soft warnings raised along the way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GateOutcome {
    pub decision: GateDecision,
    pub warnings: Vec<String>,
}

impl GateOutcome {
    fn decided(decision: GateDecision) -> Self {
        Self {
            decision,
            warnings: Vec::new(),
        }
    }
}

/// Read-only view of everything a gate check needs.
pub struct GateContext<'a> {
    pub term: TermName,
    pub relations: &'a PrereqRelations,
    pub completed: &'a CompletedCourses,
    pub load: &'a TermLoad,
    pub constraints: &'a SchedulingConstraints,
}

pub struct EligibilityCore;

impl EligibilityCore {
    /// Evaluate one course against the current pass.
    ///
    /// # Rules (checked in this order)
    /// 1. no offering -> defer
    /// 2. honors-only while not honors-eligible -> drop
    /// 3. not offered this season -> defer
    /// 4. required prerequisites not all completed -> defer
    /// 5. optional prerequisites present but none completed -> warning only
    /// 6. corequisites present but none accepted into this term yet -> defer
    /// 7. credit cap would be exceeded -> defer
    /// 8. otherwise accept
    pub fn evaluate(
        code: &str,
        offering: Option<&CourseOffering>,
        ctx: &GateContext<'_>,
    ) -> GateOutcome {
        let Some(offering) = offering else {
            return GateOutcome::decided(GateDecision::Defer(DeferReason::NoOffering));
        };

        if offering.honors_only && !ctx.constraints.honors_eligible {
            return GateOutcome::decided(GateDecision::Drop(format!(
                "Honors-only course blocked: {}",
                code
            )));
        }

        if !offering.is_offered_in(ctx.term) {
            return GateOutcome::decided(GateDecision::Defer(DeferReason::NotOffered));
        }

        if !ctx.completed.satisfies_all(ctx.relations.required_for(code)) {
            return GateOutcome::decided(GateDecision::Defer(DeferReason::MissingPrerequisites));
        }

        let mut warnings = Vec::new();
        let optional = ctx.relations.optional_for(code);
        if !optional.is_empty() && !ctx.completed.satisfies_any(optional) {
            let listed: Vec<&str> = optional.iter().map(String::as_str).collect();
            warnings.push(format!(
                "Optional prereq missing for {}: {}",
                code,
                listed.join(", ")
            ));
        }

        let coreqs = ctx.relations.corequisites_for(code);
        let decision = if !coreqs.is_empty() && !ctx.load.contains_any(coreqs) {
            GateDecision::Defer(DeferReason::CorequisiteUnpaired)
        } else if !ctx.load.can_add_course(offering.credits) {
            GateDecision::Defer(DeferReason::CreditCap)
        } else {
            GateDecision::Accept {
                credits: offering.credits,
            }
        };

        GateOutcome { decision, warnings }
    }
}
