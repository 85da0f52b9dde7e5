//! Measured and reference values of an audited installation.
//!
//! Every field is optional: a metric is evaluated only when both its measured
//! and reference values are known. Limits left empty fall back to the
//! configured defaults.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuditInput {
    // Hydraulic
    #[serde(alias = "current_flow_rate")]
    pub measured_flow: Option<f64>,
    #[serde(alias = "required_flow_rate")]
    pub required_flow: Option<f64>,
    #[serde(alias = "current_hmt")]
    pub measured_hmt: Option<f64>,
    pub required_hmt: Option<f64>,
    #[serde(alias = "current_efficiency")]
    pub measured_efficiency: Option<f64>,
    pub design_efficiency: Option<f64>,

    // Electrical
    pub measured_current: Option<f64>,
    pub rated_current: Option<f64>,
    #[serde(alias = "current_voltage")]
    pub measured_voltage: Option<f64>,
    pub rated_voltage: Option<f64>,
    #[serde(alias = "current_power_factor")]
    pub measured_power_factor: Option<f64>,
    pub rated_power_factor: Option<f64>,

    // Mechanical
    /// mm/s RMS
    pub vibration_level: Option<f64>,
    pub vibration_limit: Option<f64>,
    /// °C
    pub bearing_temperature: Option<f64>,
    pub bearing_temperature_limit: Option<f64>,
    /// dB(A)
    pub noise_level: Option<f64>,
    pub noise_limit: Option<f64>,

    // Operational
    /// °C
    pub motor_temperature: Option<f64>,
    pub motor_temperature_limit: Option<f64>,
    pub starts_per_hour: Option<f64>,
    pub max_starts_per_hour: Option<f64>,
    pub hours_since_maintenance: Option<f64>,
    pub maintenance_interval: Option<f64>,

    // Economics
    /// Absorbed power (kW); estimated from current and voltage when absent
    pub absorbed_power: Option<f64>,
    /// h/year
    pub operating_hours: Option<f64>,
    /// Currency per kWh
    pub electricity_cost: Option<f64>,
}

impl AuditInput {
    /// Absorbed power (kW), measured or estimated from a three-phase supply.
    pub fn absorbed_power_kw(&self) -> Option<f64> {
        self.absorbed_power.or_else(|| {
            let i = self.measured_current?;
            let u = self.measured_voltage?;
            let pf = self.measured_power_factor.or(self.rated_power_factor)?;
            Some(3f64.sqrt() * u * i * pf / 1000.0)
        })
    }
}
