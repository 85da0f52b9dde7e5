//! Reference data listings.

use crate::error::AppResult;
use crate::validate;
use hp_fluids::properties::temperature_range;
use hp_fluids::{
    CompatibilityLevel, FluidClass, FluidId, PipeMaterial, compatibility, fitting_catalog,
    fluid_catalog, material_catalog, properties_at, solar_regions,
};
use serde::Serialize;

/// Temperature at which the fluid listing reports properties (°C).
pub const LISTING_TEMPERATURE: f64 = 20.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FluidInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub classes: &'static [FluidClass],
    /// °C
    pub min_temperature: f64,
    /// °C
    pub max_temperature: f64,
    /// kg/m³ at the listing temperature
    pub density: f64,
    /// Pa·s at the listing temperature
    pub viscosity: f64,
    /// Pa at the listing temperature
    pub vapor_pressure: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MaterialInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub roughness_mm: f64,
    pub max_temperature: f64,
    pub food_grade: bool,
    pub relative_cost: f64,
    /// Present when the listing was filtered by fluid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compatibility: Option<CompatibilityInfo>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompatibilityInfo {
    pub fluid: FluidId,
    pub level: CompatibilityLevel,
    pub reason: &'static str,
    pub substitutes: Vec<PipeMaterial>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FittingInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub k: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SolarRegionInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub peak_sun_hours: f64,
    pub irradiation_kwh_m2_day: f64,
}

pub fn fluids() -> Vec<FluidInfo> {
    fluid_catalog()
        .iter()
        .map(|entry| {
            let (min_temperature, max_temperature) = temperature_range(entry.fluid);
            let props = properties_at(entry.fluid, LISTING_TEMPERATURE);
            FluidInfo {
                id: entry.canonical_id,
                name: entry.display_name,
                aliases: entry.aliases,
                classes: entry.classes,
                min_temperature,
                max_temperature,
                density: props.density.value,
                viscosity: props.viscosity.value,
                vapor_pressure: props.vapor_pressure.value,
            }
        })
        .collect()
}

/// Pipe materials, annotated with their compatibility when `fluid` is given.
pub fn pipe_materials(fluid: Option<&str>) -> AppResult<Vec<MaterialInfo>> {
    let fluid = fluid.map(|id| validate::fluid("fluid", id)).transpose()?;
    Ok(material_catalog()
        .iter()
        .map(|entry| MaterialInfo {
            id: entry.canonical_id,
            name: entry.display_name,
            roughness_mm: entry.roughness_mm,
            max_temperature: entry.max_temperature_c,
            food_grade: entry.food_grade,
            relative_cost: entry.relative_cost,
            compatibility: fluid.map(|f| {
                let c = compatibility(f, entry.material);
                CompatibilityInfo {
                    fluid: f,
                    level: c.level,
                    reason: c.reason,
                    substitutes: c.substitutes,
                }
            }),
        })
        .collect())
}

pub fn fittings() -> Vec<FittingInfo> {
    fitting_catalog()
        .iter()
        .map(|spec| FittingInfo {
            id: spec.canonical_id,
            name: spec.display_name,
            k: spec.k,
        })
        .collect()
}

pub fn solar_region_list() -> Vec<SolarRegionInfo> {
    solar_regions()
        .iter()
        .map(|r| SolarRegionInfo {
            id: r.id,
            name: r.name,
            peak_sun_hours: r.peak_sun_hours,
            irradiation_kwh_m2_day: r.irradiation_kwh_m2_day,
        })
        .collect()
}
