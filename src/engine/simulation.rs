// ==========================================
// GradPath Planner - Plan Simulator
// ==========================================
// Responsibility: what-if runs with changed credit cap / summer preference,
// compared against a baseline plan
// Red line: stored student data is never modified; every run builds its own
// completed set
// ==========================================

use crate::config::PlannerConfigReader;
use crate::domain::student::PlanRequest;
use crate::domain::types::PlanStatus;
use crate::engine::error::PlannerResult;
use crate::engine::orchestrator::{PlanOrchestrator, PlanOutcome};
use crate::engine::plan_compare::{compare_plans, PlanComparison};
use crate::repository::{PlanningDataSource, RepositoryError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, instrument};
use uuid::Uuid;

/// Preference changes to try; `None` keeps the baseline's value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationOverrides {
    #[serde(default)]
    pub max_credits: Option<u32>,
    #[serde(default)]
    pub summer_ok: Option<bool>,
}

impl SimulationOverrides {
    pub fn is_empty(&self) -> bool {
        self.max_credits.is_none() && self.summer_ok.is_none()
    }

    /// Layer the overrides on top of a request.
    pub fn apply(&self, base: &PlanRequest) -> PlanRequest {
        PlanRequest {
            student_id: base.student_id.clone(),
            max_credits: self.max_credits.or(base.max_credits),
            summer_ok: self.summer_ok.or(base.summer_ok),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationOutcome {
    pub baseline_plan_id: Uuid,
    pub status: PlanStatus,
    pub message: String,
    pub simulated_plan: PlanOutcome,
    /// Label of the simulated plan's last term
    pub projected_graduation: Option<String>,
    pub risk_score: u32,
    pub comparison: PlanComparison,
}

pub struct PlanSimulator<C>
where
    C: PlannerConfigReader,
{
    orchestrator: PlanOrchestrator<C>,
}

impl<C> PlanSimulator<C>
where
    C: PlannerConfigReader,
{
    pub fn new(config: Arc<C>) -> Self {
        Self {
            orchestrator: PlanOrchestrator::new(config),
        }
    }

    /// Re-plan the baseline's student with `overrides` applied.
    ///
    /// # Errors
    /// - `Repository(NotFound)` when the student has no stored profile
    /// - everything `generate_plan` can return
    #[instrument(skip(self, source, baseline), fields(baseline_plan_id = %baseline.plan_id))]
    pub async fn simulate<S>(
        &self,
        source: &S,
        baseline: &PlanOutcome,
        overrides: &SimulationOverrides,
        today: NaiveDate,
    ) -> PlannerResult<SimulationOutcome>
    where
        S: PlanningDataSource + ?Sized,
    {
        if source.load_student(&baseline.student_id).await?.is_none() {
            return Err(RepositoryError::not_found("student", &baseline.student_id).into());
        }

        let request = overrides.apply(&baseline.request);
        let mut simulated = self
            .orchestrator
            .generate_plan(source, &request, today)
            .await?;
        simulated.status = PlanStatus::Simulated;

        let comparison = compare_plans(&baseline.schedule, &simulated.schedule)
            .with_plan_ids(baseline.plan_id, simulated.plan_id);

        info!(
            simulated_plan_id = %simulated.plan_id,
            term_count_diff = comparison.term_count_diff,
            added = comparison.added_courses.len(),
            removed = comparison.removed_courses.len(),
            "simulation finished"
        );

        Ok(SimulationOutcome {
            baseline_plan_id: baseline.plan_id,
            status: PlanStatus::Simulated,
            message: format!("Simulation complete: {}", simulated.message),
            projected_graduation: simulated.projected_graduation().map(str::to_string),
            risk_score: simulated.risk_score,
            comparison,
            simulated_plan: simulated,
        })
    }
}
