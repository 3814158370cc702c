// ==========================================
// GradPath Planner - Planner Config Reader Trait
// ==========================================
// Responsibility: read-only access to planner defaults
// Red line: no writes, no business logic
// ==========================================

use crate::config::error::ConfigResult;
use async_trait::async_trait;

// ==========================================
// PlannerConfigReader Trait
// ==========================================
// Implementors: ConfigManager (JSON file), MockConfig (tests)
#[async_trait]
pub trait PlannerConfigReader: Send + Sync {
    // ===== Student defaults =====

    /// Credit cap per term when neither the request nor the student sets one.
    ///
    /// # Default
    /// - 15
    async fn get_default_max_credits(&self) -> ConfigResult<u32>;

    /// Whether summer terms are usable when nobody says otherwise.
    ///
    /// # Default
    /// - true
    async fn get_default_summer_allowed(&self) -> ConfigResult<bool>;

    // ===== Catalog defaults =====

    /// Credits assumed for catalog records without a credit count.
    ///
    /// # Default
    /// - 3
    async fn get_default_course_credits(&self) -> ConfigResult<u32>;

    // ===== Packing =====

    /// Years the term packer runs before reporting the remaining queue.
    ///
    /// # Default
    /// - 12
    async fn get_horizon_years(&self) -> ConfigResult<u32>;

    // ===== Risk =====

    /// Risk points added per bottleneck.
    ///
    /// # Default
    /// - 15
    async fn get_risk_points_per_bottleneck(&self) -> ConfigResult<u32>;

    /// Upper bound of the risk score.
    ///
    /// # Default
    /// - 100
    async fn get_risk_score_cap(&self) -> ConfigResult<u32>;
}
