//! Design limits and alert thresholds.
//!
//! Every heuristic threshold used by the calculators lives here so it can be
//! overridden from the engine configuration file. Missing fields keep their
//! default.

use serde::{Deserialize, Serialize};

/// Fewest points a sampled curve may have.
pub const MIN_CURVE_POINTS: usize = 15;
/// Absolute velocity ceiling; `hard_velocity_max` may tighten it, never raise it (m/s).
pub const VELOCITY_CEILING: f64 = 4.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesignLimits {
    /// Recommended ceiling for suction velocity (m/s)
    pub suction_velocity_max: f64,
    /// Recommended ceiling for discharge velocity (m/s)
    pub discharge_velocity_max: f64,
    /// No leg should ever run faster than this (m/s)
    pub hard_velocity_max: f64,
    /// Below this, settling fluids deposit solids (m/s)
    pub settling_velocity_min: f64,

    /// Practical suction lift limit (m)
    pub max_suction_lift: f64,
    /// Longest sensible suction line on a suction lift (m)
    pub max_suction_length_lift: f64,
    /// Longest sensible suction line on a flooded suction (m)
    pub max_suction_length_flooded: f64,
    /// Fitting count per run above which losses are flagged
    pub max_fittings_per_run: u32,

    /// NPSH margin at or below which the margin is "low" (m)
    pub npsh_low_margin: f64,
    /// Recommended NPSH safety margin (m)
    pub npsh_safety_margin: f64,

    /// Pump efficiency below which an alert is raised (%)
    pub pump_efficiency_alert: f64,
    /// Motor efficiency below which an alert is raised (%)
    pub motor_efficiency_alert: f64,
    /// Power factor below which an alert is raised
    pub power_factor_alert: f64,

    /// Supply voltages up to this value are single-phase (V)
    pub single_phase_max_voltage: f64,
    /// Allowed cable voltage drop (%)
    pub max_voltage_drop_percent: f64,

    /// Number of points on every curve
    pub curve_points: usize,
    /// Curves sweep flow over [0, span × Q]
    pub curve_flow_span: f64,
}

impl Default for DesignLimits {
    fn default() -> Self {
        Self {
            suction_velocity_max: 1.5,
            discharge_velocity_max: 3.0,
            hard_velocity_max: VELOCITY_CEILING,
            settling_velocity_min: 0.5,
            max_suction_lift: 7.0,
            max_suction_length_lift: 20.0,
            max_suction_length_flooded: 50.0,
            max_fittings_per_run: 8,
            npsh_low_margin: 0.5,
            npsh_safety_margin: 1.0,
            pump_efficiency_alert: 60.0,
            motor_efficiency_alert: 80.0,
            power_factor_alert: 0.8,
            single_phase_max_voltage: 240.0,
            max_voltage_drop_percent: 3.0,
            curve_points: 16,
            curve_flow_span: 1.5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let limits = DesignLimits::default();
        assert_eq!(limits.curve_points, 16);
        assert_eq!(limits.hard_velocity_max, 4.0);
        assert_eq!(limits.single_phase_max_voltage, 240.0);
    }

    #[test]
    fn partial_override_keeps_defaults() {
        let limits: DesignLimits =
            serde_json::from_str(r#"{"discharge_velocity_max": 2.5}"#).unwrap();
        assert_eq!(limits.discharge_velocity_max, 2.5);
        assert_eq!(limits.suction_velocity_max, 1.5);
    }
}
