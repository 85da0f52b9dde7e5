//! Total dynamic head (HMT).

use crate::common::{
    FluidSnapshot, check_finite, clamped_temperature_warning, material_temperature_warning,
    velocity_warning,
};
use crate::error::{HydraulicError, HydraulicResult};
use crate::limits::DesignLimits;
use crate::npshd::SuctionType;
use crate::primitives::{LegLosses, PipeRun};
use hp_core::units::{VolumeRate, bar, pressure_head};
use hp_fluids::{FluidId, FluidProperties, properties_at};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InstallationType {
    Surface,
    /// Pump sits in the liquid: there is no suction leg.
    Submersible,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HmtInput {
    pub installation_type: InstallationType,
    pub suction_type: SuctionType,
    /// Suction height magnitude (m); ignored for submersible pumps
    pub hasp: f64,
    /// Discharge height above the pump (m)
    pub discharge_height: f64,
    /// Residual pressure required at the outlet (bar)
    pub useful_pressure_bar: f64,
    /// Required for surface installations
    pub suction: Option<PipeRun>,
    pub discharge: PipeRun,
    pub fluid: FluidId,
    pub temperature_c: f64,
    pub flow: VolumeRate,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HmtResult {
    /// m
    pub hmt: f64,
    /// m
    pub static_head: f64,
    pub suction_velocity: Option<f64>,
    pub suction_head_loss: Option<f64>,
    pub discharge_velocity: f64,
    pub discharge_head_loss: f64,
    pub total_head_loss: f64,
    pub useful_pressure_head: f64,
    pub fluid_properties: FluidSnapshot,
    pub warnings: Vec<String>,
}

/// Static head seen by the pump for an installation.
pub fn static_head(
    installation: InstallationType,
    suction_type: SuctionType,
    hasp: f64,
    discharge_height: f64,
) -> f64 {
    match installation {
        InstallationType::Surface => discharge_height - suction_type.signed_height(hasp),
        InstallationType::Submersible => discharge_height,
    }
}

/// Head equivalent of the outlet pressure requirement (m).
pub fn useful_pressure_head(useful_pressure_bar: f64, props: &FluidProperties) -> f64 {
    pressure_head(bar(useful_pressure_bar), props.density).value
}

/// Suction and discharge losses at `flow`. The suction leg is `None` for
/// submersible installations.
pub fn leg_losses(
    input: &HmtInput,
    flow: VolumeRate,
    props: &FluidProperties,
) -> HydraulicResult<(Option<LegLosses>, LegLosses)> {
    let suction = match (input.installation_type, &input.suction) {
        (InstallationType::Submersible, _) => None,
        (InstallationType::Surface, Some(run)) => Some(run.losses(flow, props)?),
        (InstallationType::Surface, None) => {
            return Err(HydraulicError::InvalidArg {
                what: "surface installation requires a suction pipe",
            });
        }
    };
    let discharge = input.discharge.losses(flow, props)?;
    Ok((suction, discharge))
}

pub fn calculate_hmt(input: &HmtInput, limits: &DesignLimits) -> HydraulicResult<HmtResult> {
    let props = properties_at(input.fluid, input.temperature_c);
    let (suction, discharge) = leg_losses(input, input.flow, &props)?;

    let static_head = static_head(
        input.installation_type,
        input.suction_type,
        input.hasp,
        input.discharge_height,
    );
    let useful_head = useful_pressure_head(input.useful_pressure_bar, &props);
    let suction_loss = suction.map_or(0.0, |s| s.total.value);
    let total_head_loss = suction_loss + discharge.total.value;
    let hmt = check_finite(static_head + total_head_loss + useful_head, "HMT")?;

    let mut warnings = Vec::new();
    warnings.extend(clamped_temperature_warning(&props));

    if hmt <= 0.0 {
        warnings.push(format!(
            "Computed HMT is {hmt:.2} m: the source already supplies the required head"
        ));
    }

    if let (Some(s), Some(run)) = (&suction, &input.suction) {
        warnings.extend(velocity_warning(
            "Suction",
            s.velocity.value,
            limits.suction_velocity_max,
            limits.hard_velocity_max,
        ));
        warnings.extend(material_temperature_warning(
            "Suction",
            run.material,
            input.temperature_c,
        ));
    }
    warnings.extend(velocity_warning(
        "Discharge",
        discharge.velocity.value,
        limits.discharge_velocity_max,
        limits.hard_velocity_max,
    ));
    warnings.extend(material_temperature_warning(
        "Discharge",
        input.discharge.material,
        input.temperature_c,
    ));

    Ok(HmtResult {
        hmt,
        static_head,
        suction_velocity: suction.map(|s| s.velocity.value),
        suction_head_loss: suction.map(|s| s.total.value),
        discharge_velocity: discharge.velocity.value,
        discharge_head_loss: discharge.total.value,
        total_head_loss,
        useful_pressure_head: useful_head,
        fluid_properties: FluidSnapshot::from(&props),
        warnings,
    })
}
