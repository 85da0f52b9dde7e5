//! Request documents.
//!
//! Identifiers (fluids, materials, fittings, modes) arrive as strings and are
//! resolved against the reference tables during validation, so an unknown
//! name is reported with the field it came from.

use hp_expert::SiteConditions;
use serde::{Deserialize, Serialize};

fn default_pipe_length() -> f64 {
    50.0
}

fn default_temperature() -> f64 {
    20.0
}

fn default_flooded() -> String {
    "flooded".to_string()
}

fn default_voltage() -> f64 {
    400.0
}

fn default_power_factor() -> f64 {
    0.85
}

fn default_starting_method() -> String {
    "star_delta".to_string()
}

fn default_cable_length() -> f64 {
    50.0
}

fn default_cable_material() -> String {
    "copper".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FittingEntry {
    pub fitting_type: String,
    pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NpshdRequest {
    pub suction_type: String,
    /// Suction height magnitude (m)
    pub hasp: f64,
    /// m³/h
    pub flow_rate: f64,
    pub fluid_type: String,
    /// °C
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    /// mm
    pub pipe_diameter: f64,
    pub pipe_material: String,
    /// m
    pub pipe_length: f64,
    #[serde(default)]
    pub suction_fittings: Vec<FittingEntry>,
    /// m
    #[serde(default)]
    pub npsh_required: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HmtRequest {
    pub installation_type: String,
    #[serde(default = "default_flooded")]
    pub suction_type: String,
    #[serde(default)]
    pub hasp: f64,
    pub discharge_height: f64,
    /// bar
    #[serde(default)]
    pub useful_pressure: f64,
    #[serde(default)]
    pub suction_pipe_diameter: Option<f64>,
    #[serde(default)]
    pub suction_pipe_length: Option<f64>,
    #[serde(default)]
    pub suction_pipe_material: Option<String>,
    #[serde(default)]
    pub suction_fittings: Vec<FittingEntry>,
    pub discharge_pipe_diameter: f64,
    pub discharge_pipe_length: f64,
    pub discharge_pipe_material: String,
    #[serde(default)]
    pub discharge_fittings: Vec<FittingEntry>,
    pub fluid_type: String,
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    pub flow_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceRequest {
    pub flow_rate: f64,
    pub hmt: f64,
    pub pipe_diameter: f64,
    #[serde(default = "default_pipe_length")]
    pub pipe_length: f64,
    pub fluid_type: String,
    pub pipe_material: String,
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    pub pump_efficiency: f64,
    pub motor_efficiency: f64,
    #[serde(flatten)]
    pub electrical: ElectricalFields,
}

/// Motor supply fields shared by the performance and expert requests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElectricalFields {
    #[serde(default = "default_voltage")]
    pub voltage: f64,
    #[serde(default = "default_power_factor")]
    pub power_factor: f64,
    #[serde(default = "default_starting_method")]
    pub starting_method: String,
    #[serde(default = "default_cable_length")]
    pub cable_length: f64,
    #[serde(default = "default_cable_material")]
    pub cable_material: String,
}

impl Default for ElectricalFields {
    fn default() -> Self {
        Self {
            voltage: default_voltage(),
            power_factor: default_power_factor(),
            starting_method: default_starting_method(),
            cable_length: default_cable_length(),
            cable_material: default_cable_material(),
        }
    }
}

/// Everything needed to evaluate a complete installation.
///
/// For submersible pumps the suction fields describe the intake leg and may be
/// omitted; a short intake of the discharge diameter is assumed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpertRequest {
    #[serde(flatten)]
    pub hmt: HmtRequest,
    #[serde(default)]
    pub npsh_required: Option<f64>,
    pub pump_efficiency: f64,
    pub motor_efficiency: f64,
    #[serde(flatten)]
    pub electrical: ElectricalFields,
    /// Site values left out fall back to the configured defaults.
    #[serde(flatten)]
    pub site: SiteFields,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SiteFields {
    #[serde(default)]
    pub operating_hours: Option<f64>,
    #[serde(default)]
    pub electricity_cost: Option<f64>,
    #[serde(default)]
    pub altitude: Option<f64>,
    #[serde(default)]
    pub ambient_temperature: Option<f64>,
    #[serde(default)]
    pub humidity: Option<f64>,
}

impl SiteFields {
    pub fn resolve(&self, defaults: SiteConditions) -> SiteConditions {
        SiteConditions {
            operating_hours: self.operating_hours.unwrap_or(defaults.operating_hours),
            electricity_cost: self.electricity_cost.unwrap_or(defaults.electricity_cost),
            altitude: self.altitude.unwrap_or(defaults.altitude),
            ambient_temperature: self
                .ambient_temperature
                .unwrap_or(defaults.ambient_temperature),
            humidity: self.humidity.unwrap_or(defaults.humidity),
        }
    }
}

/// Audit requests are the measured-versus-reference field set itself.
pub type AuditRequest = hp_audit::AuditInput;
