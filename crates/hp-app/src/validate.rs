//! Request validation and conversion into calculator inputs.
//!
//! Every check runs before any calculator; the first failing field aborts the
//! request with [`AppError::Validation`].

use crate::error::{AppError, AppResult};
use crate::schema::{
    ElectricalFields, ExpertRequest, FittingEntry, HmtRequest, NpshdRequest, PerformanceRequest,
};
use hp_core::units::{m, m3ph, mm};
use hp_expert::Installation;
use hp_fluids::{FittingCount, FittingType, FluidId, PipeMaterial};
use hp_hydraulics::{
    CableMaterial, HmtInput, InstallationType, NpshdInput, PerformanceInput, PipeRun,
    StartingMethod, SuctionType,
};
use serde::de::DeserializeOwned;

/// Intake leg assumed for submersible pumps that do not describe one (m).
pub const DEFAULT_INTAKE_LENGTH: f64 = 1.0;

fn finite(field: &str, v: f64) -> AppResult<f64> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(AppError::validation(field, "must be a finite number"))
    }
}

pub fn positive(field: &str, v: f64) -> AppResult<f64> {
    if finite(field, v)? > 0.0 {
        Ok(v)
    } else {
        Err(AppError::validation(field, format!("must be > 0 (got {v})")))
    }
}

pub fn non_negative(field: &str, v: f64) -> AppResult<f64> {
    if finite(field, v)? >= 0.0 {
        Ok(v)
    } else {
        Err(AppError::validation(field, format!("must be >= 0 (got {v})")))
    }
}

/// Efficiency in (0, 100] %.
pub fn efficiency(field: &str, v: f64) -> AppResult<f64> {
    if finite(field, v)? > 0.0 && v <= 100.0 {
        Ok(v)
    } else {
        Err(AppError::validation(field, format!("must be in (0, 100] % (got {v})")))
    }
}

pub fn power_factor(field: &str, v: f64) -> AppResult<f64> {
    if finite(field, v)? > 0.0 && v <= 1.0 {
        Ok(v)
    } else {
        Err(AppError::validation(field, format!("must be in (0, 1] (got {v})")))
    }
}

pub fn fluid(field: &str, id: &str) -> AppResult<FluidId> {
    id.parse()
        .map_err(|e: hp_fluids::FluidError| AppError::validation(field, e.to_string()))
}

pub fn material(field: &str, id: &str) -> AppResult<PipeMaterial> {
    id.parse()
        .map_err(|e: hp_fluids::FluidError| AppError::validation(field, e.to_string()))
}

pub fn fittings(field: &str, entries: &[FittingEntry]) -> AppResult<Vec<FittingCount>> {
    entries
        .iter()
        .map(|entry| {
            let fitting_type: FittingType = entry
                .fitting_type
                .parse()
                .map_err(|e: hp_fluids::FluidError| AppError::validation(field, e.to_string()))?;
            Ok(FittingCount::new(fitting_type, entry.quantity))
        })
        .collect()
}

/// Resolve a mode keyword through the enum's serde names and aliases.
fn keyword<T: DeserializeOwned>(field: &str, value: &str, expected: &str) -> AppResult<T> {
    let tag = value.trim().to_ascii_lowercase().replace('-', "_");
    serde_json::from_value(serde_json::Value::String(tag)).map_err(|_| {
        AppError::validation(field, format!("unknown value '{value}' (expected {expected})"))
    })
}

pub fn suction_type(value: &str) -> AppResult<SuctionType> {
    keyword("suction_type", value, "flooded | suction_lift")
}

pub fn installation_type(value: &str) -> AppResult<InstallationType> {
    keyword("installation_type", value, "surface | submersible")
}

pub fn starting_method(value: &str) -> AppResult<StartingMethod> {
    keyword(
        "starting_method",
        value,
        "direct_on_line | star_delta | soft_starter | vfd",
    )
}

pub fn cable_material(value: &str) -> AppResult<CableMaterial> {
    keyword("cable_material", value, "copper | aluminum")
}

fn pipe_run(
    prefix: &str,
    diameter_mm: f64,
    length: f64,
    material_id: &str,
    fitting_entries: &[FittingEntry],
    fittings_field: &str,
) -> AppResult<PipeRun> {
    let diameter = positive(&format!("{prefix}diameter"), diameter_mm)?;
    let length = non_negative(&format!("{prefix}length"), length)?;
    let material = material(&format!("{prefix}material"), material_id)?;
    Ok(PipeRun::new(mm(diameter), m(length), material)
        .with_fittings(fittings(fittings_field, fitting_entries)?))
}

pub fn npshd_input(req: &NpshdRequest) -> AppResult<NpshdInput> {
    Ok(NpshdInput {
        suction_type: suction_type(&req.suction_type)?,
        hasp: non_negative("hasp", req.hasp)?,
        flow: m3ph(non_negative("flow_rate", req.flow_rate)?),
        fluid: fluid("fluid_type", &req.fluid_type)?,
        temperature_c: finite("temperature", req.temperature)?,
        suction: pipe_run(
            "pipe_",
            req.pipe_diameter,
            req.pipe_length,
            &req.pipe_material,
            &req.suction_fittings,
            "suction_fittings",
        )?,
        npsh_required: req
            .npsh_required
            .map(|v| non_negative("npsh_required", v))
            .transpose()?,
    })
}

/// Suction leg of an HMT request: mandatory for surface installations. A
/// submersible request may omit it entirely, but a partial or invalid intake
/// description is rejected like any other leg.
fn suction_leg(req: &HmtRequest, installation: InstallationType) -> AppResult<Option<PipeRun>> {
    let material_id = req.suction_pipe_material.as_deref();
    let described = req.suction_pipe_diameter.is_some()
        || req.suction_pipe_length.is_some()
        || material_id.is_some();
    if installation == InstallationType::Submersible && !described {
        return Ok(None);
    }

    let missing = match installation {
        InstallationType::Surface => "required for surface installations",
        InstallationType::Submersible => "required when an intake leg is described",
    };
    let diameter = req
        .suction_pipe_diameter
        .ok_or_else(|| AppError::validation("suction_pipe_diameter", missing))?;
    let length = req
        .suction_pipe_length
        .ok_or_else(|| AppError::validation("suction_pipe_length", missing))?;
    let material_id =
        material_id.ok_or_else(|| AppError::validation("suction_pipe_material", missing))?;

    pipe_run(
        "suction_pipe_",
        diameter,
        length,
        material_id,
        &req.suction_fittings,
        "suction_fittings",
    )
    .map(Some)
}

fn discharge_leg(req: &HmtRequest) -> AppResult<PipeRun> {
    pipe_run(
        "discharge_pipe_",
        req.discharge_pipe_diameter,
        req.discharge_pipe_length,
        &req.discharge_pipe_material,
        &req.discharge_fittings,
        "discharge_fittings",
    )
}

pub fn hmt_input(req: &HmtRequest) -> AppResult<HmtInput> {
    let installation = installation_type(&req.installation_type)?;
    let suction = suction_leg(req, installation)?;
    Ok(HmtInput {
        installation_type: installation,
        suction_type: suction_type(&req.suction_type)?,
        hasp: non_negative("hasp", req.hasp)?,
        discharge_height: finite("discharge_height", req.discharge_height)?,
        useful_pressure_bar: non_negative("useful_pressure", req.useful_pressure)?,
        suction: (installation == InstallationType::Surface)
            .then_some(suction)
            .flatten(),
        discharge: discharge_leg(req)?,
        fluid: fluid("fluid_type", &req.fluid_type)?,
        temperature_c: finite("temperature", req.temperature)?,
        flow: m3ph(non_negative("flow_rate", req.flow_rate)?),
    })
}

struct Supply {
    voltage: f64,
    power_factor: f64,
    starting_method: StartingMethod,
    cable_length: f64,
    cable_material: CableMaterial,
}

fn supply(fields: &ElectricalFields) -> AppResult<Supply> {
    Ok(Supply {
        voltage: positive("voltage", fields.voltage)?,
        power_factor: power_factor("power_factor", fields.power_factor)?,
        starting_method: starting_method(&fields.starting_method)?,
        cable_length: non_negative("cable_length", fields.cable_length)?,
        cable_material: cable_material(&fields.cable_material)?,
    })
}

pub fn performance_input(req: &PerformanceRequest) -> AppResult<PerformanceInput> {
    let supply = supply(&req.electrical)?;
    Ok(PerformanceInput {
        flow: m3ph(non_negative("flow_rate", req.flow_rate)?),
        hmt: non_negative("hmt", req.hmt)?,
        pipe: pipe_run(
            "pipe_",
            req.pipe_diameter,
            req.pipe_length,
            &req.pipe_material,
            &[],
            "fittings",
        )?,
        fluid: fluid("fluid_type", &req.fluid_type)?,
        temperature_c: finite("temperature", req.temperature)?,
        pump_efficiency: efficiency("pump_efficiency", req.pump_efficiency)?,
        motor_efficiency: efficiency("motor_efficiency", req.motor_efficiency)?,
        voltage: supply.voltage,
        power_factor: supply.power_factor,
        starting_method: supply.starting_method,
        cable_length: supply.cable_length,
        cable_material: supply.cable_material,
    })
}

pub fn installation(req: &ExpertRequest) -> AppResult<Installation> {
    let hmt = hmt_input(&req.hmt)?;
    let supply = supply(&req.electrical)?;
    let suction = match hmt.suction {
        Some(run) => run,
        None => suction_leg(&req.hmt, hmt.installation_type)?.unwrap_or_else(|| {
            PipeRun::new(
                hmt.discharge.diameter,
                m(DEFAULT_INTAKE_LENGTH),
                hmt.discharge.material,
            )
        }),
    };

    Ok(Installation {
        fluid: hmt.fluid,
        temperature_c: hmt.temperature_c,
        flow_m3h: req.hmt.flow_rate,
        installation_type: hmt.installation_type,
        suction_type: hmt.suction_type,
        hasp: hmt.hasp,
        discharge_height: hmt.discharge_height,
        useful_pressure_bar: hmt.useful_pressure_bar,
        suction,
        discharge: hmt.discharge,
        npsh_required: req
            .npsh_required
            .map(|v| non_negative("npsh_required", v))
            .transpose()?,
        pump_efficiency: efficiency("pump_efficiency", req.pump_efficiency)?,
        motor_efficiency: efficiency("motor_efficiency", req.motor_efficiency)?,
        voltage: supply.voltage,
        power_factor: supply.power_factor,
        starting_method: supply.starting_method,
        cable_length: supply.cable_length,
        cable_material: supply.cable_material,
    })
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn efficiency_accepts_exactly_the_open_closed_range(v in -50.0_f64..150.0) {
            prop_assert_eq!(efficiency("pump_efficiency", v).is_ok(), v > 0.0 && v <= 100.0);
        }

        #[test]
        fn fluid_ids_parse_in_any_case(index in 0_usize..20, upper in any::<bool>()) {
            let entry = &hp_fluids::fluid_catalog()[index];
            let id = if upper {
                entry.canonical_id.to_uppercase()
            } else {
                entry.canonical_id.to_string()
            };
            prop_assert_eq!(fluid("fluid_type", &id).unwrap(), entry.fluid);
        }
    }
}
