//! Audit configuration: domain weights and the limits used when a request
//! leaves them empty.

use crate::error::{AuditError, AuditResult};
use serde::{Deserialize, Serialize};

/// Relative weight of each domain in the overall score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreWeights {
    pub hydraulic: f64,
    pub electrical: f64,
    pub mechanical: f64,
    pub operational: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            hydraulic: 0.25,
            electrical: 0.25,
            mechanical: 0.25,
            operational: 0.25,
        }
    }
}

impl ScoreWeights {
    pub fn total(&self) -> f64 {
        self.hydraulic + self.electrical + self.mechanical + self.operational
    }

    pub fn validate(&self) -> AuditResult<()> {
        let all = [
            self.hydraulic,
            self.electrical,
            self.mechanical,
            self.operational,
        ];
        if all.iter().any(|w| !w.is_finite()) {
            return Err(AuditError::NonFinite {
                what: "score weight",
            });
        }
        if all.iter().any(|&w| w < 0.0) {
            return Err(AuditError::InvalidWeights {
                what: "weights must be non-negative",
            });
        }
        if !(self.total() > 0.0) {
            return Err(AuditError::InvalidWeights {
                what: "at least one weight must be positive",
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultLimits {
    /// mm/s RMS
    pub vibration: f64,
    /// °C
    pub bearing_temperature: f64,
    /// dB(A)
    pub noise: f64,
    /// °C
    pub motor_temperature: f64,
    pub starts_per_hour: f64,
    /// h
    pub maintenance_interval: f64,
    /// h/year
    pub operating_hours: f64,
    /// Currency per kWh
    pub electricity_cost: f64,
}

impl Default for DefaultLimits {
    fn default() -> Self {
        Self {
            vibration: 4.5,
            bearing_temperature: 80.0,
            noise: 85.0,
            motor_temperature: 100.0,
            starts_per_hour: 6.0,
            maintenance_interval: 4000.0,
            operating_hours: 4000.0,
            electricity_cost: 0.15,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AuditSettings {
    pub weights: ScoreWeights,
    pub limits: DefaultLimits,
}
