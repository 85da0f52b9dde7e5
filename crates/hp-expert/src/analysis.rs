//! Expert analysis: the three calculator results plus system-level indicators,
//! recommendations and curves in one record.

use crate::context::{Evaluation, ExpertContext};
use crate::engine::recommend;
use crate::model::Recommendation;
use crate::rules::efficiency::{REFERENCE_MOTOR_EFFICIENCY, REFERENCE_PUMP_EFFICIENCY};
use hp_hydraulics::{
    ElectricalSizing, HmtResult, HydraulicResult, NpshdResult, PerformanceCurves,
    PerformanceResult, SystemCurve, flow_sweep, system_curve,
};
use serde::Serialize;
use tracing::debug;

/// Target share of HMT lost in the pipework (%).
pub const TARGET_LOSS_SHARE_PERCENT: f64 = 15.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ElectricalAnalysis {
    /// A
    pub nominal_current: f64,
    #[serde(flatten)]
    pub sizing: ElectricalSizing,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EnergyConsumption {
    pub annual_energy_kwh: f64,
    pub annual_cost: f64,
    pub specific_energy_kwh_per_m3: f64,
    pub daily_energy_kwh: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OptimizationPotential {
    pub energy_savings_percent: f64,
    pub annual_savings: f64,
    pub head_loss_reduction_percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpertAnalysis {
    pub npshd_analysis: NpshdResult,
    pub hmt_analysis: HmtResult,
    pub performance_analysis: PerformanceResult,
    pub electrical_analysis: ElectricalAnalysis,
    /// %
    pub overall_efficiency: f64,
    /// m
    pub total_head_loss: f64,
    pub system_stability: bool,
    pub energy_consumption: EnergyConsumption,
    pub expert_recommendations: Vec<Recommendation>,
    pub optimization_potential: OptimizationPotential,
    pub performance_curves: PerformanceCurves,
    pub system_curves: SystemCurve,
}

/// No cavitation, positive head, every leg under the hard velocity ceiling and,
/// when NPSH required is known, a margin of at least the low-margin threshold.
pub fn system_stability(ctx: &ExpertContext<'_>) -> bool {
    let hard = ctx.limits.hard_velocity_max;
    let velocities_ok = ctx.hmt.discharge_velocity <= hard
        && ctx.hmt.suction_velocity.is_none_or(|v| v <= hard);
    let margin_ok = ctx
        .npshd
        .npsh_margin
        .is_none_or(|m| m >= ctx.limits.npsh_low_margin);

    !ctx.npshd.cavitation_risk && ctx.hmt.hmt > 0.0 && velocities_ok && margin_ok
}

pub fn energy_consumption(ctx: &ExpertContext<'_>) -> EnergyConsumption {
    let p1 = ctx.absorbed_power_kw();
    let annual = ctx.annual_energy_kwh();
    EnergyConsumption {
        annual_energy_kwh: annual,
        annual_cost: ctx.annual_cost(),
        specific_energy_kwh_per_m3: if ctx.flow_m3h > 0.0 {
            p1 / ctx.flow_m3h
        } else {
            0.0
        },
        daily_energy_kwh: annual / 365.0,
    }
}

pub fn optimization_potential(ctx: &ExpertContext<'_>) -> OptimizationPotential {
    let reference = REFERENCE_PUMP_EFFICIENCY * REFERENCE_MOTOR_EFFICIENCY / 100.0;
    let overall = ctx.performance.overall_efficiency;
    let energy_savings_percent = if overall > 0.0 && overall < reference {
        (1.0 - overall / reference) * 100.0
    } else {
        0.0
    };

    let hmt = ctx.hmt.hmt;
    let losses = ctx.hmt.total_head_loss;
    let target = TARGET_LOSS_SHARE_PERCENT / 100.0 * hmt;
    let head_loss_reduction_percent = if hmt > 0.0 && losses > target {
        (1.0 - target / losses) * 100.0
    } else {
        0.0
    };

    OptimizationPotential {
        energy_savings_percent,
        annual_savings: ctx.annual_cost() * energy_savings_percent / 100.0,
        head_loss_reduction_percent,
    }
}

/// Assemble the full analysis of an evaluated installation.
pub fn build_analysis(eval: &Evaluation) -> HydraulicResult<ExpertAnalysis> {
    let ctx = eval.context();
    let recommendations = recommend(&ctx);

    let flow = flow_sweep(
        ctx.flow_m3h,
        ctx.limits.curve_flow_span,
        ctx.limits.curve_points,
    );
    let legs: Vec<_> = ctx.legs().into_iter().map(|(_, run)| run).collect();
    let system_curves = system_curve(
        ctx.hmt.static_head + ctx.hmt.useful_pressure_head,
        &legs,
        &ctx.fluid_properties(),
        &flow,
    )?;

    let stable = system_stability(&ctx);
    debug!(
        recommendations = recommendations.len(),
        stable,
        hmt = ctx.hmt.hmt,
        "expert analysis assembled"
    );

    Ok(ExpertAnalysis {
        npshd_analysis: eval.npshd.clone(),
        hmt_analysis: eval.hmt.clone(),
        performance_analysis: eval.performance.clone(),
        electrical_analysis: ElectricalAnalysis {
            nominal_current: eval.performance.nominal_current,
            sizing: eval.performance.electrical_sizing,
        },
        overall_efficiency: eval.performance.overall_efficiency,
        total_head_loss: eval.hmt.total_head_loss,
        system_stability: stable,
        energy_consumption: energy_consumption(&ctx),
        expert_recommendations: recommendations,
        optimization_potential: optimization_potential(&ctx),
        performance_curves: eval.performance.performance_curves.clone(),
        system_curves,
    })
}
