// ==========================================
// GradPath Planner - Plan Orchestrator
// ==========================================
// Purpose: run one planning request end to end
// Flow: load rows -> resolve constraints -> graph + order -> start term
//       -> graduation check -> term packing -> message + risk score
// ==========================================

use crate::config::PlannerConfigReader;
use crate::domain::completion::CompletedCourses;
use crate::domain::constraints::SchedulingConstraints;
use crate::domain::course::offerings_from_records;
use crate::domain::relation::PrereqRelations;
use crate::domain::schedule::ScheduleResult;
use crate::domain::student::{completed_from_transcript, PlanRequest, StudentProfile};
use crate::domain::types::{PlanStatus, RelationKind, TermName};
use crate::engine::error::{PlannerError, PlannerResult};
use crate::engine::graph::GraphBuilder;
use crate::engine::ordering::DependencyOrderer;
use crate::engine::term_calendar::{infer_start_term, starts_after};
use crate::engine::term_packer::TermPacker;
use crate::repository::PlanningDataSource;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info, instrument};
use uuid::Uuid;

pub const MESSAGE_GRADUATING: &str = "Student completes degree in current semester.";
pub const MESSAGE_SUCCESS: &str = "Plan generated successfully.";

// ==========================================
// PlanOutcome - one generated plan
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanOutcome {
    pub plan_id: Uuid,
    pub student_id: String,
    pub status: PlanStatus,
    pub message: String,
    pub schedule: ScheduleResult,
    /// 0 ..= cap, grows with the bottleneck count
    pub risk_score: u32,
    pub start_term: TermName,
    pub start_year: i32,
    /// Constraint bundle the schedule was packed under
    pub constraints: SchedulingConstraints,
    /// Request the plan was generated for
    pub request: PlanRequest,
    pub generated_at: DateTime<Utc>,
}

impl PlanOutcome {
    /// Label of the last scheduled term.
    pub fn projected_graduation(&self) -> Option<&str> {
        self.schedule.projected_graduation()
    }
}

/// Risk score: `points` per bottleneck, capped at `cap`.
pub fn risk_score(bottlenecks: usize, points: u32, cap: u32) -> u32 {
    let raw = (bottlenecks as u64).saturating_mul(points as u64);
    raw.min(cap as u64) as u32
}

/// One bottleneck per (course, other) pair listed under several relation kinds.
pub fn conflict_bottlenecks(relations: &PrereqRelations) -> Vec<String> {
    relations
        .overlapping_pairs()
        .into_iter()
        .map(|(course, other, kinds)| {
            let kinds: Vec<String> = kinds.iter().map(RelationKind::to_string).collect();
            format!(
                "Conflicting relation kinds for {} -> {}: {}",
                course,
                other,
                kinds.join(", ")
            )
        })
        .collect()
}

// ==========================================
// PlanOrchestrator
// ==========================================
pub struct PlanOrchestrator<C>
where
    C: PlannerConfigReader,
{
    config: Arc<C>,
}

impl<C> PlanOrchestrator<C>
where
    C: PlannerConfigReader,
{
    pub fn new(config: Arc<C>) -> Self {
        Self { config }
    }

    /// Generate a plan for one request.
    ///
    /// # Parameters
    /// - `source`: data source for student, catalog, relations, transcript
    /// - `request`: student id plus optional overrides
    /// - `today`: reference date for start-term inference without transcript
    ///
    /// # Errors
    /// - `CycleDetected` when required prerequisites are cyclic
    /// - `InvalidRequest` when the effective credit cap is zero
    /// - data source / config failures
    #[instrument(skip(self, source, request), fields(student_id = %request.student_id))]
    pub async fn generate_plan<S>(
        &self,
        source: &S,
        request: &PlanRequest,
        today: NaiveDate,
    ) -> PlannerResult<PlanOutcome>
    where
        S: PlanningDataSource + ?Sized,
    {
        info!("plan generation started");

        // ==========================================
        // Step 1: student + effective constraints
        // ==========================================
        let student = source.load_student(&request.student_id).await?;
        let (max_credits, summer_allowed, honors_eligible) =
            self.resolve_preferences(request, student.as_ref()).await?;
        if max_credits == 0 {
            return Err(PlannerError::InvalidRequest {
                message: "max credits per term must be positive".to_string(),
            });
        }

        // ==========================================
        // Step 2: completed set, offerings, relations
        // ==========================================
        let transcript = source.load_transcript(&request.student_id).await?;
        let mut completed: CompletedCourses = completed_from_transcript(&transcript);

        let default_credits = self.config.get_default_course_credits().await?;
        let catalog = source.load_catalog().await?;
        let offerings = offerings_from_records(&catalog, default_credits);

        let rows = source.load_relations().await?;
        let relations = PrereqRelations::from_rows(&rows, offerings.keys());
        let conflicts = conflict_bottlenecks(&relations);

        debug!(
            completed = completed.len(),
            offerings = offerings.len(),
            relation_rows = rows.len(),
            conflicts = conflicts.len(),
            "planning inputs loaded"
        );

        // ==========================================
        // Step 3: dependency order
        // ==========================================
        let graph = GraphBuilder::build(&relations.required);
        let order = DependencyOrderer::order(&graph)?;

        // ==========================================
        // Step 4: start term + graduation check
        // ==========================================
        let labels: Vec<&str> = transcript
            .iter()
            .filter_map(|e| e.term.as_deref())
            .collect();
        let (start_term, start_year) = infer_start_term(&labels, today);

        let constraints = SchedulingConstraints::new(max_credits)
            .with_summer(summer_allowed)
            .with_honors(honors_eligible)
            .starting(start_term, start_year);

        let target = student.as_ref().and_then(|s| s.target_grad_term.as_deref());
        if let Some(target) = target {
            if starts_after(start_term, start_year, target) {
                info!(target, "student graduates before the next planning term");
                return Ok(self.outcome(
                    request,
                    MESSAGE_GRADUATING.to_string(),
                    ScheduleResult::new(),
                    0,
                    constraints,
                ));
            }
        }

        // ==========================================
        // Step 5: term packing
        // ==========================================
        let horizon = self.config.get_horizon_years().await?;
        let mut schedule = TermPacker::with_horizon(horizon).pack(
            &order,
            &offerings,
            &relations,
            &mut completed,
            &constraints,
        );
        schedule.bottlenecks.splice(0..0, conflicts);

        // ==========================================
        // Step 6: message + risk
        // ==========================================
        let warnings = schedule.bottlenecks.len();
        let message = if warnings == 0 {
            MESSAGE_SUCCESS.to_string()
        } else {
            format!("Plan generated with {} warning(s).", warnings)
        };
        let points = self.config.get_risk_points_per_bottleneck().await?;
        let cap = self.config.get_risk_score_cap().await?;
        let risk = risk_score(warnings, points, cap);

        let outcome = self.outcome(request, message, schedule, risk, constraints);
        info!(
            plan_id = %outcome.plan_id,
            terms = outcome.schedule.terms.len(),
            warnings,
            risk_score = risk,
            "plan generation finished"
        );
        Ok(outcome)
    }

    /// Request override, then stored student value, then config default.
    async fn resolve_preferences(
        &self,
        request: &PlanRequest,
        student: Option<&StudentProfile>,
    ) -> PlannerResult<(u32, bool, bool)> {
        let max_credits = match request.max_credits.or(student.and_then(|s| s.max_credits)) {
            Some(value) => value,
            None => self.config.get_default_max_credits().await?,
        };
        let summer_allowed = match request.summer_ok.or(student.and_then(|s| s.summer_ok)) {
            Some(value) => value,
            None => self.config.get_default_summer_allowed().await?,
        };
        let honors_eligible = student.map(|s| s.honors).unwrap_or(false);
        Ok((max_credits, summer_allowed, honors_eligible))
    }

    fn outcome(
        &self,
        request: &PlanRequest,
        message: String,
        schedule: ScheduleResult,
        risk_score: u32,
        constraints: SchedulingConstraints,
    ) -> PlanOutcome {
        PlanOutcome {
            plan_id: Uuid::new_v4(),
            student_id: request.student_id.clone(),
            status: PlanStatus::Complete,
            message,
            schedule,
            risk_score,
            start_term: constraints.start_term.unwrap_or(TermName::Fall),
            start_year: constraints.first_year(),
            constraints,
            request: request.clone(),
            generated_at: Utc::now(),
        }
    }
}
