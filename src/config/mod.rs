// ==========================================
// GradPath Planner - Config Layer
// ==========================================
// Responsibility: planner defaults, loaded from a JSON file with
// built-in fallbacks
// ==========================================

pub mod config_manager;
pub mod error;
pub mod planner_config_trait;

pub use config_manager::{
    config_keys, ConfigManager, PlannerSettings, CONFIG_PATH_ENV, MAX_HORIZON_YEARS,
};
pub use error::{ConfigError, ConfigResult};
pub use planner_config_trait::PlannerConfigReader;
