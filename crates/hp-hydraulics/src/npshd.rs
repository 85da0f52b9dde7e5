//! Net positive suction head available (NPSHd).
//!
//! NPSHd = P_atm/(ρg) + static term − suction losses − P_v/(ρg), with the static
//! term positive for a flooded suction and negative for a suction lift.

use crate::common::{
    EPSILON_FLOW, FluidSnapshot, check_finite, clamped_temperature_warning,
    material_temperature_warning, velocity_warning,
};
use crate::error::HydraulicResult;
use crate::limits::DesignLimits;
use crate::primitives::PipeRun;
use hp_core::units::{
    VolumeRate, constants::ATMOSPHERIC_PRESSURE_PA, constants::atmospheric_pressure,
    pressure_head, to_m3ph,
};
use hp_fluids::{FluidId, properties_at};
use serde::{Deserialize, Serialize};

/// Corrective actions offered whenever cavitation is likely.
pub const CAVITATION_REMEDIES: [&str; 6] = [
    "Reduce the suction height",
    "Increase the suction pipe diameter",
    "Shorten the suction line",
    "Reduce the number of suction fittings",
    "Lower the fluid temperature",
    "Reposition the pump closer to or below the source level",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuctionType {
    /// Source level above the pump centerline.
    Flooded,
    /// Source level below the pump centerline.
    SuctionLift,
}

impl SuctionType {
    /// Height relative to the pump: positive when flooded, negative on a lift.
    pub fn signed_height(self, hasp: f64) -> f64 {
        match self {
            SuctionType::Flooded => hasp.abs(),
            SuctionType::SuctionLift => -hasp.abs(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NpshdInput {
    pub suction_type: SuctionType,
    /// Suction height magnitude (m)
    pub hasp: f64,
    pub flow: VolumeRate,
    pub fluid: FluidId,
    pub temperature_c: f64,
    pub suction: PipeRun,
    /// Manufacturer's NPSH required (m)
    pub npsh_required: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NpshdResult {
    /// m
    pub npshd: f64,
    /// m/s
    pub velocity: f64,
    pub reynolds_number: f64,
    pub friction_factor: f64,
    /// m
    pub linear_head_loss: f64,
    /// m
    pub singular_head_loss: f64,
    /// m
    pub total_head_loss: f64,
    pub npsh_required: Option<f64>,
    pub npsh_margin: Option<f64>,
    pub cavitation_risk: bool,
    pub fluid_properties: FluidSnapshot,
    pub warnings: Vec<String>,
    pub recommendations: Vec<String>,
    /// Pa
    pub atmospheric_pressure: f64,
}

pub fn calculate_npshd(input: &NpshdInput, limits: &DesignLimits) -> HydraulicResult<NpshdResult> {
    let props = properties_at(input.fluid, input.temperature_c);
    let losses = input.suction.losses(input.flow, &props)?;

    let atm_head = pressure_head(atmospheric_pressure(), props.density).value;
    let vapor_head = pressure_head(props.vapor_pressure, props.density).value;
    let static_head = input.suction_type.signed_height(input.hasp);

    let npshd = check_finite(
        atm_head + static_head - losses.total.value - vapor_head,
        "NPSHd",
    )?;

    let mut warnings = Vec::new();
    let mut recommendations = Vec::new();

    let npsh_margin = input.npsh_required.map(|req| npshd - req);
    let cavitation_risk = match npsh_margin {
        Some(margin) => margin <= 0.0,
        None => npshd <= 0.0,
    };

    match (npsh_margin, input.npsh_required) {
        (Some(margin), Some(req)) if margin <= 0.0 => {
            warnings.push(format!(
                "Cavitation risk: NPSHd {npshd:.2} m does not exceed NPSH required {req:.2} m"
            ));
        }
        (Some(margin), _) if margin <= limits.npsh_low_margin => {
            warnings.push(format!(
                "Low NPSH margin: {margin:.2} m (minimum {:.1} m)",
                limits.npsh_low_margin
            ));
        }
        (Some(margin), _) if margin <= limits.npsh_safety_margin => {
            warnings.push(format!(
                "NPSH margin {margin:.2} m is below the recommended safety margin of {:.1} m",
                limits.npsh_safety_margin
            ));
        }
        (None, _) if cavitation_risk => {
            warnings.push(format!(
                "Cavitation risk: NPSHd {npshd:.2} m is not positive"
            ));
        }
        _ => {}
    }

    let borderline = npsh_margin.is_some_and(|m| m <= limits.npsh_safety_margin);
    if cavitation_risk || borderline {
        recommendations.extend(CAVITATION_REMEDIES.iter().map(|s| s.to_string()));
    }

    warnings.extend(clamped_temperature_warning(&props));
    warnings.extend(material_temperature_warning(
        "Suction",
        input.suction.material,
        input.temperature_c,
    ));
    warnings.extend(velocity_warning(
        "Suction",
        losses.velocity.value,
        limits.suction_velocity_max,
        limits.hard_velocity_max,
    ));

    let length = input.suction.length.value;
    match input.suction_type {
        SuctionType::SuctionLift => {
            if length > limits.max_suction_length_lift {
                warnings.push(format!(
                    "Suction line of {length:.1} m is too long for a suction lift (max {:.0} m)",
                    limits.max_suction_length_lift
                ));
            }
            if !input.suction.has_non_return_fitting() {
                warnings.push(
                    "Suction lift without a foot valve or check valve: the pump may lose its prime"
                        .to_string(),
                );
            }
            if input.hasp.abs() > limits.max_suction_lift {
                warnings.push(format!(
                    "Suction lift of {:.1} m exceeds the practical limit of {:.1} m",
                    input.hasp.abs(),
                    limits.max_suction_lift
                ));
            }
        }
        SuctionType::Flooded => {
            if length > limits.max_suction_length_flooded {
                warnings.push(format!(
                    "Suction line of {length:.1} m is long for a flooded suction (max {:.0} m)",
                    limits.max_suction_length_flooded
                ));
            }
        }
    }

    let fittings = input.suction.fitting_count();
    if fittings > limits.max_fittings_per_run {
        warnings.push(format!(
            "{fittings} fittings on the suction line: singular losses reduce NPSHd"
        ));
    }

    if to_m3ph(input.flow) < EPSILON_FLOW {
        warnings.push("Flow rate is zero: NPSHd reflects static conditions only".to_string());
    }

    Ok(NpshdResult {
        npshd,
        velocity: losses.velocity.value,
        reynolds_number: losses.reynolds,
        friction_factor: losses.friction_factor,
        linear_head_loss: losses.linear.value,
        singular_head_loss: losses.singular.value,
        total_head_loss: losses.total.value,
        npsh_required: input.npsh_required,
        npsh_margin,
        cavitation_risk,
        fluid_properties: FluidSnapshot::from(&props),
        warnings,
        recommendations,
        atmospheric_pressure: ATMOSPHERIC_PRESSURE_PA,
    })
}
