//! Engine configuration file.
//!
//! Every section is optional; missing values keep their defaults. The file is
//! YAML, which also accepts JSON documents.

use crate::error::{AppError, AppResult};
use hp_audit::AuditSettings;
use hp_expert::SiteConditions;
use hp_hydraulics::{DesignLimits, MIN_CURVE_POINTS, VELOCITY_CEILING};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub limits: DesignLimits,
    pub audit: AuditSettings,
    /// Site defaults for expert analyses that omit them
    pub site: SiteConditions,
    pub history_dir: PathBuf,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            limits: DesignLimits::default(),
            audit: AuditSettings::default(),
            site: SiteConditions::default(),
            history_dir: PathBuf::from(".hydropump").join("history"),
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> AppResult<()> {
        self.audit.weights.validate()?;
        if self.limits.curve_points < MIN_CURVE_POINTS {
            return Err(AppError::Config(format!(
                "limits.curve_points must be at least {MIN_CURVE_POINTS} (got {})",
                self.limits.curve_points
            )));
        }
        let hard = self.limits.hard_velocity_max;
        if !(hard > 0.0 && hard <= VELOCITY_CEILING) {
            return Err(AppError::Config(format!(
                "limits.hard_velocity_max must be in (0, {VELOCITY_CEILING}] m/s (got {hard})"
            )));
        }
        if !(self.limits.curve_flow_span > 0.0) {
            return Err(AppError::Config(
                "limits.curve_flow_span must be positive".to_string(),
            ));
        }
        if !(self.limits.max_voltage_drop_percent > 0.0) {
            return Err(AppError::Config(
                "limits.max_voltage_drop_percent must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// Read a YAML or JSON document.
pub fn load_document<T: DeserializeOwned>(path: &Path) -> AppResult<T> {
    let content = std::fs::read_to_string(path).map_err(|e| AppError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    serde_yaml::from_str(&content).map_err(|e| AppError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load and validate an engine configuration file.
pub fn load_config(path: &Path) -> AppResult<EngineConfig> {
    let config: EngineConfig = load_document(path)?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_is_default() {
        let config: EngineConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn partial_overrides() {
        let yaml = "
limits:
  curve_points: 32
  single_phase_max_voltage: 250
audit:
  weights:
    hydraulic: 0.4
history_dir: /tmp/pumps
";
        let config: EngineConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.limits.curve_points, 32);
        assert_eq!(config.limits.single_phase_max_voltage, 250.0);
        assert_eq!(config.limits.hard_velocity_max, 4.0);
        assert_eq!(config.audit.weights.hydraulic, 0.4);
        assert_eq!(config.audit.weights.mechanical, 0.25);
        assert_eq!(config.history_dir, PathBuf::from("/tmp/pumps"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn json_is_accepted() {
        let config: EngineConfig =
            serde_yaml::from_str(r#"{"limits": {"curve_points": 24}}"#).unwrap();
        assert_eq!(config.limits.curve_points, 24);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn sparse_curve_is_rejected() {
        let mut config = EngineConfig::default();
        config.limits.curve_points = 1;
        assert!(matches!(config.validate(), Err(AppError::Config(_))));
        config.limits.curve_points = 14;
        assert!(matches!(config.validate(), Err(AppError::Config(_))));
        config.limits.curve_points = 15;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn hard_velocity_ceiling_cannot_be_raised() {
        let config: EngineConfig =
            serde_yaml::from_str(r#"{"limits": {"curve_points": 3, "hard_velocity_max": 9.0}}"#)
                .unwrap();
        assert!(matches!(config.validate(), Err(AppError::Config(_))));

        let mut config = EngineConfig::default();
        config.limits.hard_velocity_max = 9.0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("hard_velocity_max"));

        config.limits.hard_velocity_max = 0.0;
        assert!(matches!(config.validate(), Err(AppError::Config(_))));

        config.limits.hard_velocity_max = 3.5;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn missing_file_is_reported() {
        let err = load_config(Path::new("/nonexistent/hydropump.yaml")).unwrap_err();
        assert!(matches!(err, AppError::FileRead { .. }));
    }
}
