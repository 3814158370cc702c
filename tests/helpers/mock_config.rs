// ==========================================
// Mock config - for integration tests
// ==========================================

use async_trait::async_trait;
use gradpath_planner::config::{ConfigResult, PlannerConfigReader};

/// Mock config values
#[derive(Debug, Clone)]
pub struct MockConfig {
    pub default_max_credits: u32,
    pub default_summer_allowed: bool,
    pub default_course_credits: u32,
    pub horizon_years: u32,
    pub risk_points_per_bottleneck: u32,
    pub risk_score_cap: u32,
}

impl MockConfig {
    /// Same values as the built-in defaults
    pub fn default() -> Self {
        Self {
            default_max_credits: 15,
            default_summer_allowed: true,
            default_course_credits: 3,
            horizon_years: 12,
            risk_points_per_bottleneck: 15,
            risk_score_cap: 100,
        }
    }

    /// No summer terms unless the student or request says otherwise
    pub fn without_summer() -> Self {
        let mut config = Self::default();
        config.default_summer_allowed = false;
        config
    }

    pub fn with_horizon(years: u32) -> Self {
        let mut config = Self::default();
        config.horizon_years = years;
        config
    }
}

#[async_trait]
impl PlannerConfigReader for MockConfig {
    async fn get_default_max_credits(&self) -> ConfigResult<u32> {
        Ok(self.default_max_credits)
    }

    async fn get_default_summer_allowed(&self) -> ConfigResult<bool> {
        Ok(self.default_summer_allowed)
    }

    async fn get_default_course_credits(&self) -> ConfigResult<u32> {
        Ok(self.default_course_credits)
    }

    async fn get_horizon_years(&self) -> ConfigResult<u32> {
        Ok(self.horizon_years)
    }

    async fn get_risk_points_per_bottleneck(&self) -> ConfigResult<u32> {
        Ok(self.risk_points_per_bottleneck)
    }

    async fn get_risk_score_cap(&self) -> ConfigResult<u32> {
        Ok(self.risk_score_cap)
    }
}
