//! Sampled curve families: pump head, efficiency and power against flow, and
//! the system curve of an installation.

use crate::common::{EPSILON_FLOW, check_finite};
use crate::error::HydraulicResult;
use crate::primitives::PipeRun;
use hp_core::numeric::linspace;
use hp_core::units::m3ph;
use hp_fluids::FluidProperties;
use serde::Serialize;

/// Shut-off head as a multiple of the duty head.
pub const SHUTOFF_HEAD_RATIO: f64 = 1.25;
/// Share of the duty power drawn at zero flow.
pub const SHUTOFF_POWER_SHARE: f64 = 0.45;

/// The duty point, echoed from the input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BestOperatingPoint {
    /// m³/h
    pub flow: f64,
    /// m
    pub hmt: f64,
    /// %
    pub efficiency: f64,
    /// kW
    pub power: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PerformanceCurves {
    pub flow: Vec<f64>,
    pub hmt: Vec<f64>,
    pub efficiency: Vec<f64>,
    pub power: Vec<f64>,
    pub head_loss: Vec<f64>,
    pub best_operating_point: BestOperatingPoint,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SystemCurve {
    pub flow: Vec<f64>,
    pub head: Vec<f64>,
    pub static_head: f64,
}

/// Flow sweep over `[0, span × duty_flow]`.
pub fn flow_sweep(duty_flow_m3h: f64, span: f64, points: usize) -> Vec<f64> {
    linspace(0.0, duty_flow_m3h.max(0.0) * span, points.max(2))
}

/// Generate the curve family around a duty point.
///
/// Head follows H(q) = H0 − k·q² with H0 = 1.25·H, efficiency the parabola
/// η·(2x − x²) with x = q/Q, and power a linear rise from 45 % of the duty
/// power at shut-off. `head_loss` re-runs the pipe run at every flow.
pub fn performance_curves(
    duty: BestOperatingPoint,
    pipe: &PipeRun,
    fluid: &FluidProperties,
    span: f64,
    points: usize,
) -> HydraulicResult<PerformanceCurves> {
    let flow = flow_sweep(duty.flow, span, points);
    let has_flow = duty.flow > EPSILON_FLOW;

    let h0 = SHUTOFF_HEAD_RATIO * duty.hmt;
    let k = if has_flow {
        ((h0 - duty.hmt) / duty.flow.powi(2)).max(0.0)
    } else {
        0.0
    };

    let mut hmt = Vec::with_capacity(flow.len());
    let mut efficiency = Vec::with_capacity(flow.len());
    let mut power = Vec::with_capacity(flow.len());
    let mut head_loss = Vec::with_capacity(flow.len());

    for &q in &flow {
        let x = if has_flow { q / duty.flow } else { 0.0 };
        hmt.push(check_finite(h0 - k * q * q, "curve head")?);
        efficiency.push(check_finite(
            (duty.efficiency * (2.0 * x - x * x)).max(0.0),
            "curve efficiency",
        )?);
        power.push(check_finite(
            duty.power * (SHUTOFF_POWER_SHARE + (1.0 - SHUTOFF_POWER_SHARE) * x),
            "curve power",
        )?);
        head_loss.push(pipe.losses(m3ph(q), fluid)?.total.value);
    }

    Ok(PerformanceCurves {
        flow,
        hmt,
        efficiency,
        power,
        head_loss,
        best_operating_point: duty,
    })
}

/// System curve: static head plus the losses of every leg at each flow.
pub fn system_curve(
    static_head: f64,
    legs: &[&PipeRun],
    fluid: &FluidProperties,
    flow: &[f64],
) -> HydraulicResult<SystemCurve> {
    let head = flow
        .iter()
        .map(|&q| {
            let losses = legs
                .iter()
                .map(|leg| leg.losses(m3ph(q), fluid).map(|l| l.total.value))
                .sum::<HydraulicResult<f64>>()?;
            check_finite(static_head + losses, "system head")
        })
        .collect::<HydraulicResult<Vec<_>>>()?;

    Ok(SystemCurve {
        flow: flow.to_vec(),
        head,
        static_head,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use hp_core::units::{m, mm};
    use hp_fluids::{FluidId, PipeMaterial, properties_at};

    fn duty() -> BestOperatingPoint {
        BestOperatingPoint {
            flow: 50.0,
            hmt: 30.0,
            efficiency: 80.0,
            power: 5.11,
        }
    }

    fn pipe() -> PipeRun {
        PipeRun::new(mm(100.0), m(50.0), PipeMaterial::Steel)
    }

    #[test]
    fn sixteen_points_with_exact_endpoints() {
        let fluid = properties_at(FluidId::Water, 20.0);
        let c = performance_curves(duty(), &pipe(), &fluid, 1.5, 16).unwrap();
        assert_eq!(c.flow.len(), 16);
        assert_eq!(c.flow[0], 0.0);
        assert_eq!(c.flow[15], 75.0);
        assert_eq!(c.hmt.len(), 16);
        assert_eq!(c.head_loss.len(), 16);
    }

    #[test]
    fn curve_passes_through_duty_point() {
        let fluid = properties_at(FluidId::Water, 20.0);
        let c = performance_curves(duty(), &pipe(), &fluid, 1.5, 11).unwrap();
        assert_eq!(c.hmt[0], 37.5);
        let k = (37.5 - 30.0) / 2500.0;
        assert!((c.hmt[10] - (37.5 - k * 75.0 * 75.0)).abs() < 1e-9);
        assert_eq!(c.best_operating_point, duty());
    }

    #[test]
    fn efficiency_peaks_at_duty_flow() {
        let fluid = properties_at(FluidId::Water, 20.0);
        // 7 points over [0, 75]: 50 m³/h is index 4 (step 12.5).
        let c = performance_curves(duty(), &pipe(), &fluid, 1.5, 7).unwrap();
        assert!((c.efficiency[4] - 80.0).abs() < 1e-9);
        assert_eq!(c.efficiency[0], 0.0);
        assert!(c.efficiency.iter().all(|&e| e <= 80.0 + 1e-9));
    }

    #[test]
    fn zero_flow_gives_flat_family() {
        let fluid = properties_at(FluidId::Water, 20.0);
        let d = BestOperatingPoint {
            flow: 0.0,
            power: 0.0,
            ..duty()
        };
        let c = performance_curves(d, &pipe(), &fluid, 1.5, 16).unwrap();
        assert!(c.flow.iter().all(|&q| q == 0.0));
        assert!(c.hmt.iter().all(|&h| h == 37.5));
        assert!(c.power.iter().all(|&p| p == 0.0));
    }

    #[test]
    fn system_curve_starts_at_static_head() {
        let fluid = properties_at(FluidId::Water, 20.0);
        let suction = pipe();
        let discharge = PipeRun::new(mm(80.0), m(100.0), PipeMaterial::Pvc);
        let flow = flow_sweep(50.0, 1.5, 16);
        let c = system_curve(20.0, &[&suction, &discharge], &fluid, &flow).unwrap();
        assert_eq!(c.head[0], 20.0);
        assert!(c.head.windows(2).all(|w| w[1] > w[0]));
    }
}
