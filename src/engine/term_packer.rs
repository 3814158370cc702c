// ==========================================
// GradPath Planner - Term Packer
// ==========================================
// Responsibility: greedy multi-pass packing of the dependency order into
// terms under the credit cap
// Input: dependency order + offerings + relations + completed set + constraints
// Output: ScheduleResult (terms + bottlenecks + unscheduled remainder)
// ==========================================
// Note: prerequisite gates read the completed set as of the start of the
// pass; accepted courses are written to the live set at once, so they count
// as completed from the next pass on. Corequisites pair against the pass's
// own selection instead.
// ==========================================

use crate::domain::completion::CompletedCourses;
use crate::domain::constraints::{CreditConstraint, SchedulingConstraints, TermLoad};
use crate::domain::course::CourseOffering;
use crate::domain::relation::PrereqRelations;
use crate::domain::schedule::{ScheduleResult, Term};
use crate::domain::types::TermName;
use crate::engine::eligibility::{EligibilityCore, GateContext, GateDecision};
use crate::engine::term_calendar::TermRotation;
use std::collections::{BTreeMap, BTreeSet};
use tracing::{debug, info, instrument, warn};

/// Years the packer keeps trying before giving up on the remaining queue.
pub const DEFAULT_HORIZON_YEARS: u32 = 12;

// ==========================================
// Single-pass result
// ==========================================
#[derive(Debug, Clone)]
pub struct TermPassResult {
    /// Courses accepted into this term
    pub load: TermLoad,
    /// Courses kept for later terms, in queue order
    pub deferred: Vec<String>,
    /// Bottlenecks for courses removed from the run for good
    pub dropped: Vec<String>,
    /// Soft warnings raised during the pass
    pub warnings: Vec<String>,
}

// ==========================================
// TermPacker
// ==========================================
pub struct TermPacker {
    horizon_years: u32,
}

impl Default for TermPacker {
    fn default() -> Self {
        Self::new()
    }
}

impl TermPacker {
    pub fn new() -> Self {
        Self::with_horizon(DEFAULT_HORIZON_YEARS)
    }

    pub fn with_horizon(horizon_years: u32) -> Self {
        Self { horizon_years }
    }

    pub fn horizon_years(&self) -> u32 {
        self.horizon_years
    }

    // ==========================================
    // Core methods
    // ==========================================

    /// Pack the dependency order into terms.
    ///
    /// # Parameters
    /// - `order`: dependency order (prerequisites first)
    /// - `offerings`: catalog offerings by code
    /// - `relations`: required / coreq / optional maps
    /// - `completed`: completed set of this run (grown in place)
    /// - `constraints`: constraint bundle of this run
    ///
    /// # Returns
    /// The schedule. Never fails; unplaceable courses surface as bottlenecks
    /// and in `unscheduled`.
    #[instrument(skip_all, fields(
        queued = order.len(),
        max_credits = constraints.max_credits_per_term,
        summer = constraints.summer_allowed,
        horizon = self.horizon_years
    ))]
    pub fn pack(
        &self,
        order: &[String],
        offerings: &BTreeMap<String, CourseOffering>,
        relations: &PrereqRelations,
        completed: &mut CompletedCourses,
        constraints: &SchedulingConstraints,
    ) -> ScheduleResult {
        let mut result = ScheduleResult::new();
        let mut seen_warnings: BTreeSet<String> = BTreeSet::new();

        let mut queue: Vec<String> = order
            .iter()
            .filter(|code| !completed.contains(code))
            .cloned()
            .collect();

        let rotation = TermRotation::new(constraints.summer_allowed, constraints.start_term);
        let mut year = constraints.first_year();
        let max_year = i32::try_from(self.horizon_years)
            .ok()
            .and_then(|h| year.checked_add(h))
            .unwrap_or(i32::MAX);

        while !queue.is_empty() {
            for &term in rotation.names() {
                let pass = self.fill_single_term(
                    term, &queue, offerings, relations, completed, constraints,
                );

                result.bottlenecks.extend(pass.dropped);
                for warning in pass.warnings {
                    if seen_warnings.insert(warning.clone()) {
                        result.bottlenecks.push(warning);
                    }
                }

                queue = pass.deferred;
                if !pass.load.is_empty() {
                    debug!(
                        term = %term,
                        year,
                        courses = pass.load.courses.len(),
                        credits = pass.load.credits,
                        utilization = pass.load.utilization(),
                        "term packed"
                    );
                    result
                        .terms
                        .push(Term::new(term, year, pass.load.courses, pass.load.credits));
                }

                if term == TermName::Fall {
                    year += 1;
                }
            }

            if !queue.is_empty() && year > max_year {
                warn!(remaining = queue.len(), "scheduling horizon exhausted");
                result.bottlenecks.push(format!(
                    "Scheduling exceeded horizon of {} years; unplaced: {}",
                    self.horizon_years,
                    queue.join(", ")
                ));
                break;
            }
        }

        result.unscheduled = queue;

        info!(
            terms = result.terms.len(),
            credits = result.total_credits(),
            bottlenecks = result.bottlenecks.len(),
            unscheduled = result.unscheduled.len(),
            "term packing finished"
        );
        result
    }

    /// One pass of the queue against a single season.
    ///
    /// Gates see `completed` as it was when the pass started; accepted
    /// courses are inserted into it immediately.
    pub fn fill_single_term(
        &self,
        term: TermName,
        queue: &[String],
        offerings: &BTreeMap<String, CourseOffering>,
        relations: &PrereqRelations,
        completed: &mut CompletedCourses,
        constraints: &SchedulingConstraints,
    ) -> TermPassResult {
        let mut load = TermLoad::new(constraints.max_credits_per_term);
        let mut deferred = Vec::new();
        let mut dropped = Vec::new();
        let mut warnings = Vec::new();
        let completed_at_start = completed.clone();

        for code in queue {
            let outcome = {
                let ctx = GateContext {
                    term,
                    relations,
                    completed: &completed_at_start,
                    load: &load,
                    constraints,
                };
                EligibilityCore::evaluate(code, offerings.get(code), &ctx)
            };
            warnings.extend(outcome.warnings);

            match outcome.decision {
                GateDecision::Accept { credits } => {
                    load.accept(code, credits);
                    completed.insert(code);
                }
                GateDecision::Defer(reason) => {
                    debug!(course = %code, term = %term, reason = %reason, "course deferred");
                    deferred.push(code.clone());
                }
                GateDecision::Drop(message) => {
                    debug!(course = %code, term = %term, "course dropped");
                    dropped.push(message);
                }
            }
        }

        TermPassResult {
            load,
            deferred,
            dropped,
            warnings,
        }
    }
}

#[cfg(test)]
mod tests;
