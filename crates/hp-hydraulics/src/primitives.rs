//! Hydraulic primitives: velocity, Reynolds number, Darcy friction factor and
//! head losses.
//!
//! All functions are pure. Geometry that would divide by zero is rejected with
//! [`HydraulicError::Domain`] instead of producing an infinite velocity.

use crate::common::check_finite;
use crate::error::{HydraulicError, HydraulicResult};
use hp_core::units::{Density, DynVisc, Length, Velocity, VolumeRate, constants::G0_MPS2, m, mps};
use hp_fluids::{FittingCount, FluidProperties, PipeMaterial, total_k, total_quantity};
use std::f64::consts::PI;

/// Upper Reynolds number of the laminar regime.
pub const LAMINAR_REYNOLDS: f64 = 2300.0;

/// Mean velocity of a flow in a circular pipe.
pub fn velocity(flow: VolumeRate, diameter: Length) -> HydraulicResult<Velocity> {
    if !(diameter.value > 0.0) {
        return Err(HydraulicError::Domain {
            what: "pipe diameter must be positive",
        });
    }
    if flow.value < 0.0 {
        return Err(HydraulicError::Domain {
            what: "flow rate must not be negative",
        });
    }
    let area = PI * diameter.value.powi(2) / 4.0;
    let v = check_finite(flow.value / area, "velocity")?;
    Ok(mps(v))
}

/// Reynolds number ρvD/μ.
pub fn reynolds(
    density: Density,
    velocity: Velocity,
    diameter: Length,
    viscosity: DynVisc,
) -> HydraulicResult<f64> {
    if !(viscosity.value > 0.0) {
        return Err(HydraulicError::Domain {
            what: "viscosity must be positive",
        });
    }
    let re = density.value * velocity.value.abs() * diameter.value / viscosity.value;
    check_finite(re, "Reynolds number")
}

/// Darcy friction factor.
///
/// Laminar below Re = 2300 (64/Re), Swamee-Jain explicit approximation of
/// Colebrook-White above. Zero flow has zero friction.
pub fn friction_factor(re: f64, relative_roughness: f64) -> f64 {
    if re <= 0.0 {
        0.0
    } else if re < LAMINAR_REYNOLDS {
        64.0 / re
    } else {
        let a = relative_roughness.max(0.0) / 3.7;
        let b = 5.74 / re.powf(0.9);
        0.25 / (a + b).log10().powi(2)
    }
}

/// Velocity head v²/2g (m).
fn velocity_head(v: Velocity) -> f64 {
    v.value.powi(2) / (2.0 * G0_MPS2)
}

/// Darcy-Weisbach linear loss f·(L/D)·v²/2g.
pub fn head_loss_linear(
    friction: f64,
    length: Length,
    diameter: Length,
    v: Velocity,
) -> HydraulicResult<Length> {
    if !(diameter.value > 0.0) {
        return Err(HydraulicError::Domain {
            what: "pipe diameter must be positive",
        });
    }
    let h = friction * (length.value.max(0.0) / diameter.value) * velocity_head(v);
    Ok(m(check_finite(h, "linear head loss")?))
}

/// Singular loss K·v²/2g for the summed coefficient of a run.
pub fn head_loss_singular(k_total: f64, v: Velocity) -> HydraulicResult<Length> {
    let h = k_total.max(0.0) * velocity_head(v);
    Ok(m(check_finite(h, "singular head loss")?))
}

/// One pipe leg: geometry, wall material and fittings.
#[derive(Debug, Clone, PartialEq)]
pub struct PipeRun {
    pub diameter: Length,
    pub length: Length,
    pub material: PipeMaterial,
    pub fittings: Vec<FittingCount>,
}

/// Head-loss breakdown of one leg at one flow.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LegLosses {
    pub velocity: Velocity,
    pub reynolds: f64,
    pub friction_factor: f64,
    pub linear: Length,
    pub singular: Length,
    pub total: Length,
}

impl PipeRun {
    pub fn new(diameter: Length, length: Length, material: PipeMaterial) -> Self {
        Self {
            diameter,
            length,
            material,
            fittings: Vec::new(),
        }
    }

    pub fn with_fittings(mut self, fittings: Vec<FittingCount>) -> Self {
        self.fittings = fittings;
        self
    }

    pub fn relative_roughness(&self) -> f64 {
        self.material.roughness_m() / self.diameter.value
    }

    pub fn fitting_count(&self) -> u32 {
        total_quantity(&self.fittings)
    }

    pub fn has_non_return_fitting(&self) -> bool {
        self.fittings
            .iter()
            .any(|f| f.quantity > 0 && f.fitting_type.is_non_return())
    }

    /// Evaluate the full loss chain for `flow` through this run.
    pub fn losses(&self, flow: VolumeRate, fluid: &FluidProperties) -> HydraulicResult<LegLosses> {
        let v = velocity(flow, self.diameter)?;
        let re = reynolds(fluid.density, v, self.diameter, fluid.viscosity)?;
        let f = friction_factor(re, self.relative_roughness());
        let linear = head_loss_linear(f, self.length, self.diameter, v)?;
        let singular = head_loss_singular(total_k(&self.fittings), v)?;

        Ok(LegLosses {
            velocity: v,
            reynolds: re,
            friction_factor: check_finite(f, "friction factor")?,
            linear,
            singular,
            total: linear + singular,
        })
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use hp_core::units::{m3ph, mm};
    use hp_fluids::{FluidId, properties_at};
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn losses_are_non_negative(
            q in 0.0_f64..500.0,
            d in 10.0_f64..600.0,
            l in 0.0_f64..2000.0,
            t in 0.0_f64..100.0,
        ) {
            let run = PipeRun::new(mm(d), m(l), PipeMaterial::CastIron);
            let losses = run.losses(m3ph(q), &properties_at(FluidId::Water, t)).unwrap();
            prop_assert!(losses.velocity.value >= 0.0);
            prop_assert!(losses.reynolds >= 0.0);
            prop_assert!(losses.linear.value >= 0.0);
            prop_assert!(losses.singular.value >= 0.0);
            prop_assert!(losses.total.value.is_finite());
        }

        #[test]
        fn loss_grows_with_flow(q in 1.0_f64..200.0) {
            let fluid = properties_at(FluidId::Water, 20.0);
            let run = PipeRun::new(mm(100.0), m(50.0), PipeMaterial::Steel);
            let low = run.losses(m3ph(q), &fluid).unwrap();
            let high = run.losses(m3ph(q * 1.5), &fluid).unwrap();
            prop_assert!(high.total.value > low.total.value);
        }
    }
}
