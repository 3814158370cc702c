// ==========================================
// GradPath Planner - Plan Comparison
// ==========================================
// Responsibility: diff two schedules (baseline vs. simulated)
// Output: term count delta + sorted added / removed course codes
// ==========================================

use crate::domain::schedule::ScheduleResult;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanComparison {
    pub baseline_plan_id: Option<Uuid>,
    pub simulated_plan_id: Option<Uuid>,
    /// simulated term count minus baseline term count
    pub term_count_diff: i64,
    /// In the simulated plan only, sorted
    pub added_courses: Vec<String>,
    /// In the baseline plan only, sorted
    pub removed_courses: Vec<String>,
}

impl PlanComparison {
    pub fn with_plan_ids(mut self, baseline: Uuid, simulated: Uuid) -> Self {
        self.baseline_plan_id = Some(baseline);
        self.simulated_plan_id = Some(simulated);
        self
    }

    /// Both plans place the same courses in the same number of terms.
    pub fn is_unchanged(&self) -> bool {
        self.term_count_diff == 0 && self.added_courses.is_empty() && self.removed_courses.is_empty()
    }
}

/// Compare two schedules.
pub fn compare_plans(baseline: &ScheduleResult, simulated: &ScheduleResult) -> PlanComparison {
    let before = baseline.scheduled_courses();
    let after = simulated.scheduled_courses();

    PlanComparison {
        baseline_plan_id: None,
        simulated_plan_id: None,
        term_count_diff: simulated.terms.len() as i64 - baseline.terms.len() as i64,
        // BTreeSet differences iterate in sorted order
        added_courses: after.difference(&before).cloned().collect(),
        removed_courses: before.difference(&after).cloned().collect(),
    }
}
