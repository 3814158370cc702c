// ==========================================
// GradPath Planner - Config Manager
// ==========================================
// Responsibility: load, validate and snapshot planner settings
// Storage: one JSON object, keys as in `config_keys`
// ==========================================

use crate::config::error::{ConfigError, ConfigResult};
use crate::config::planner_config_trait::PlannerConfigReader;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Environment variable overriding the config file location.
pub const CONFIG_PATH_ENV: &str = "GRADPATH_PLANNER_CONFIG";

/// Upper bound for `horizon_years`.
pub const MAX_HORIZON_YEARS: u32 = 100;

// ==========================================
// PlannerSettings
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerSettings {
    pub default_max_credits: u32,
    pub default_summer_allowed: bool,
    pub default_course_credits: u32,
    pub horizon_years: u32,
    pub risk_points_per_bottleneck: u32,
    pub risk_score_cap: u32,
}

impl Default for PlannerSettings {
    fn default() -> Self {
        Self {
            default_max_credits: 15,
            default_summer_allowed: true,
            default_course_credits: 3,
            horizon_years: 12,
            risk_points_per_bottleneck: 15,
            risk_score_cap: 100,
        }
    }
}

impl PlannerSettings {
    /// Reject values the planner cannot work with.
    pub fn validate(&self) -> ConfigResult<()> {
        let positive = [
            (config_keys::DEFAULT_MAX_CREDITS, self.default_max_credits),
            (config_keys::DEFAULT_COURSE_CREDITS, self.default_course_credits),
            (config_keys::HORIZON_YEARS, self.horizon_years),
            (config_keys::RISK_SCORE_CAP, self.risk_score_cap),
        ];
        for (key, value) in positive {
            if value == 0 {
                return Err(ConfigError::InvalidValue {
                    key: key.to_string(),
                    message: "must be greater than zero".to_string(),
                });
            }
        }
        if self.horizon_years > MAX_HORIZON_YEARS {
            return Err(ConfigError::InvalidValue {
                key: config_keys::HORIZON_YEARS.to_string(),
                message: format!("must be at most {} years", MAX_HORIZON_YEARS),
            });
        }
        Ok(())
    }
}

// ==========================================
// ConfigManager
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct ConfigManager {
    settings: PlannerSettings,
    source: Option<PathBuf>,
}

impl ConfigManager {
    /// Manager holding the built-in defaults.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_settings(settings: PlannerSettings) -> ConfigResult<Self> {
        settings.validate()?;
        Ok(Self {
            settings,
            source: None,
        })
    }

    /// Load settings from a JSON file.
    ///
    /// A missing file yields the defaults; keys absent from the file keep
    /// their default values.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "config file not found, using defaults");
            return Ok(Self::new());
        }

        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let settings: PlannerSettings = serde_json::from_str(&raw)?;
        settings.validate()?;

        info!(path = %path.display(), "planner config loaded");
        Ok(Self {
            settings,
            source: Some(path.to_path_buf()),
        })
    }

    /// `$GRADPATH_PLANNER_CONFIG`, else `<config dir>/gradpath/planner.json`.
    pub fn default_config_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
            if !path.trim().is_empty() {
                return Some(PathBuf::from(path));
            }
        }
        dirs::config_dir().map(|dir| dir.join("gradpath").join("planner.json"))
    }

    pub fn from_default_location() -> ConfigResult<Self> {
        match Self::default_config_path() {
            Some(path) => Self::load(&path),
            None => Ok(Self::new()),
        }
    }

    pub fn settings(&self) -> &PlannerSettings {
        &self.settings
    }

    /// File the settings came from, if any.
    pub fn source_path(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// All settings as a JSON string, recorded alongside generated plans.
    pub fn get_config_snapshot(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string(&self.settings)?)
    }

    /// Rebuild a manager from a snapshot taken with `get_config_snapshot`.
    pub fn restore_from_snapshot(snapshot_json: &str) -> ConfigResult<Self> {
        let settings: PlannerSettings = serde_json::from_str(snapshot_json)?;
        Self::from_settings(settings)
    }
}

// ==========================================
// PlannerConfigReader impl
// ==========================================
#[async_trait]
impl PlannerConfigReader for ConfigManager {
    async fn get_default_max_credits(&self) -> ConfigResult<u32> {
        Ok(self.settings.default_max_credits)
    }

    async fn get_default_summer_allowed(&self) -> ConfigResult<bool> {
        Ok(self.settings.default_summer_allowed)
    }

    async fn get_default_course_credits(&self) -> ConfigResult<u32> {
        Ok(self.settings.default_course_credits)
    }

    async fn get_horizon_years(&self) -> ConfigResult<u32> {
        Ok(self.settings.horizon_years)
    }

    async fn get_risk_points_per_bottleneck(&self) -> ConfigResult<u32> {
        Ok(self.settings.risk_points_per_bottleneck)
    }

    async fn get_risk_score_cap(&self) -> ConfigResult<u32> {
        Ok(self.settings.risk_score_cap)
    }
}

// ==========================================
// Config keys
// ==========================================
pub mod config_keys {
    // Student defaults
    pub const DEFAULT_MAX_CREDITS: &str = "default_max_credits";
    pub const DEFAULT_SUMMER_ALLOWED: &str = "default_summer_allowed";

    // Catalog
    pub const DEFAULT_COURSE_CREDITS: &str = "default_course_credits";

    // Packing
    pub const HORIZON_YEARS: &str = "horizon_years";

    // Risk
    pub const RISK_POINTS_PER_BOTTLENECK: &str = "risk_points_per_bottleneck";
    pub const RISK_SCORE_CAP: &str = "risk_score_cap";
}
