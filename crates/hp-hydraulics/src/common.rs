//! Common helpers shared by the calculators.

use crate::error::{HydraulicError, HydraulicResult};
use hp_core::numeric::ensure_finite;
use hp_fluids::{FluidId, FluidProperties, PipeMaterial, properties::temperature_range};
use serde::Serialize;

/// Flows below this are treated as zero (m³/h).
pub const EPSILON_FLOW: f64 = 1e-9;

/// Ensure a value is finite, returning HydraulicError if not.
pub fn check_finite(value: f64, what: &'static str) -> HydraulicResult<f64> {
    ensure_finite(value, what).map_err(|_| HydraulicError::NonFinite { what })
}

/// Fluid state echoed in every calculator response.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FluidSnapshot {
    pub fluid_type: FluidId,
    pub name: &'static str,
    /// °C
    pub temperature: f64,
    /// kg/m³
    pub density: f64,
    /// Pa·s
    pub viscosity: f64,
    /// Pa
    pub vapor_pressure: f64,
}

impl From<&FluidProperties> for FluidSnapshot {
    fn from(p: &FluidProperties) -> Self {
        Self {
            fluid_type: p.fluid,
            name: p.fluid.display_name(),
            temperature: p.temperature_c,
            density: p.density.value,
            viscosity: p.viscosity.value,
            vapor_pressure: p.vapor_pressure.value,
        }
    }
}

pub(crate) fn clamped_temperature_warning(props: &FluidProperties) -> Option<String> {
    if !props.clamped {
        return None;
    }
    let (lo, hi) = temperature_range(props.fluid);
    Some(format!(
        "Temperature {:.1} °C is outside the property table of {} ({lo}..{hi} °C); \
         properties evaluated at the nearest bound",
        props.temperature_c,
        props.fluid.display_name()
    ))
}

pub(crate) fn material_temperature_warning(
    leg: &str,
    material: PipeMaterial,
    temperature_c: f64,
) -> Option<String> {
    let max = material.max_temperature_c();
    (temperature_c > max).then(|| {
        format!(
            "{leg} pipe: {material} is rated up to {max:.0} °C but the fluid is at {temperature_c:.1} °C"
        )
    })
}

pub(crate) fn velocity_warning(leg: &str, velocity: f64, ceiling: f64, hard: f64) -> Option<String> {
    if velocity > hard {
        Some(format!(
            "{leg} velocity {velocity:.2} m/s exceeds the maximum of {hard:.1} m/s: erosion and noise expected"
        ))
    } else if velocity > ceiling {
        Some(format!(
            "{leg} velocity {velocity:.2} m/s is above the recommended {ceiling:.1} m/s"
        ))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hp_fluids::properties_at;

    #[test]
    fn check_finite_rejects_nan() {
        assert!(check_finite(1.0, "x").is_ok());
        assert!(matches!(
            check_finite(f64::INFINITY, "x"),
            Err(HydraulicError::NonFinite { what: "x" })
        ));
    }

    #[test]
    fn pvc_above_sixty_degrees_warns() {
        assert!(material_temperature_warning("Suction", PipeMaterial::Pvc, 70.0).is_some());
        assert!(material_temperature_warning("Suction", PipeMaterial::Steel, 70.0).is_none());
    }

    #[test]
    fn velocity_warning_levels() {
        assert!(velocity_warning("Suction", 1.0, 1.5, 4.0).is_none());
        let soft = velocity_warning("Suction", 2.0, 1.5, 4.0).unwrap();
        assert!(soft.contains("recommended"));
        let hard = velocity_warning("Suction", 5.0, 1.5, 4.0).unwrap();
        assert!(hard.contains("maximum"));
    }

    #[test]
    fn snapshot_echoes_properties() {
        let props = properties_at(FluidId::Water, 20.0);
        let snap = FluidSnapshot::from(&props);
        assert_eq!(snap.fluid_type, FluidId::Water);
        assert!((snap.density - 998.2).abs() < 1e-9);
        assert!(clamped_temperature_warning(&props).is_none());
        assert!(clamped_temperature_warning(&properties_at(FluidId::Water, 130.0)).is_some());
    }
}
