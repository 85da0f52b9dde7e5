//! Pump performance: powers, efficiency, current, electrical sizing, curves and
//! alerts for a duty point.

use crate::common::{
    FluidSnapshot, check_finite, clamped_temperature_warning, material_temperature_warning,
};
use crate::curves::{BestOperatingPoint, PerformanceCurves, performance_curves};
use crate::electrical::{
    CableMaterial, ElectricalInput, ElectricalSizing, StartingMethod, size_electrical,
};
use crate::error::{HydraulicError, HydraulicResult};
use crate::limits::DesignLimits;
use crate::primitives::PipeRun;
use hp_core::numeric::round_to;
use hp_core::units::{VolumeRate, constants::HYDRAULIC_POWER_DIVISOR, to_m3ph};
use hp_fluids::{FluidId, properties_at};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq)]
pub struct PerformanceInput {
    pub flow: VolumeRate,
    /// Duty head (m)
    pub hmt: f64,
    pub pipe: PipeRun,
    pub fluid: FluidId,
    pub temperature_c: f64,
    /// %
    pub pump_efficiency: f64,
    /// %
    pub motor_efficiency: f64,
    /// V
    pub voltage: f64,
    pub power_factor: f64,
    pub starting_method: StartingMethod,
    /// m
    pub cable_length: f64,
    pub cable_material: CableMaterial,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PowerCalculations {
    /// Power delivered to the pump shaft (kW)
    pub hydraulic_power: f64,
    /// Power drawn from the supply (kW)
    pub absorbed_power: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PerformanceResult {
    pub power_calculations: PowerCalculations,
    /// %
    pub overall_efficiency: f64,
    /// m/s
    pub velocity: f64,
    pub reynolds_number: f64,
    /// A
    pub nominal_current: f64,
    pub electrical_sizing: ElectricalSizing,
    pub performance_curves: PerformanceCurves,
    pub fluid_properties: FluidSnapshot,
    pub alerts: Vec<String>,
    pub warnings: Vec<String>,
    pub recommendations: Vec<String>,
}

/// Shaft power P2 (kW) for a flow (m³/h), head (m) and pump efficiency (%).
pub fn hydraulic_power_kw(flow_m3h: f64, hmt: f64, pump_efficiency: f64) -> HydraulicResult<f64> {
    if !(pump_efficiency > 0.0) {
        return Err(HydraulicError::Domain {
            what: "pump efficiency must be positive",
        });
    }
    check_finite(
        flow_m3h * hmt / (pump_efficiency * HYDRAULIC_POWER_DIVISOR) * 100.0,
        "hydraulic power",
    )
}

/// Absorbed power P1 (kW) for a shaft power and motor efficiency (%).
pub fn absorbed_power_kw(hydraulic_power: f64, motor_efficiency: f64) -> HydraulicResult<f64> {
    if !(motor_efficiency > 0.0) {
        return Err(HydraulicError::Domain {
            what: "motor efficiency must be positive",
        });
    }
    check_finite(hydraulic_power / (motor_efficiency / 100.0), "absorbed power")
}

/// Combined pump and motor efficiency (%).
pub fn overall_efficiency(pump_efficiency: f64, motor_efficiency: f64) -> f64 {
    pump_efficiency * motor_efficiency / 100.0
}

pub fn calculate_performance(
    input: &PerformanceInput,
    limits: &DesignLimits,
) -> HydraulicResult<PerformanceResult> {
    let props = properties_at(input.fluid, input.temperature_c);
    let losses = input.pipe.losses(input.flow, &props)?;
    // Snap the m³/s round trip so the duty point echoes the entered flow.
    let flow_m3h = round_to(to_m3ph(input.flow), 9);

    let p2 = hydraulic_power_kw(flow_m3h, input.hmt, input.pump_efficiency)?;
    let p1 = absorbed_power_kw(p2, input.motor_efficiency)?;
    let overall = overall_efficiency(input.pump_efficiency, input.motor_efficiency);

    let (current, sizing) = size_electrical(
        &ElectricalInput {
            absorbed_power_kw: p1,
            voltage: input.voltage,
            power_factor: input.power_factor,
            starting_method: input.starting_method,
            cable_length_m: input.cable_length,
            cable_material: input.cable_material,
        },
        limits.single_phase_max_voltage,
        limits.max_voltage_drop_percent,
    )?;

    let curves = performance_curves(
        BestOperatingPoint {
            flow: flow_m3h,
            hmt: input.hmt,
            efficiency: input.pump_efficiency,
            power: p2,
        },
        &input.pipe,
        &props,
        limits.curve_flow_span,
        limits.curve_points,
    )?;

    let mut alerts = Vec::new();
    let mut warnings = Vec::new();
    let mut recommendations = Vec::new();

    let v = losses.velocity.value;
    if v > limits.discharge_velocity_max {
        alerts.push(format!(
            "Velocity {v:.2} m/s exceeds {:.1} m/s: select a larger pipe diameter",
            limits.discharge_velocity_max
        ));
    }
    if input.pump_efficiency < limits.pump_efficiency_alert {
        alerts.push(format!(
            "Low pump efficiency: {:.1} % (threshold {:.0} %)",
            input.pump_efficiency, limits.pump_efficiency_alert
        ));
    }
    if input.motor_efficiency < limits.motor_efficiency_alert {
        alerts.push(format!(
            "Low motor efficiency: {:.1} % (threshold {:.0} %)",
            input.motor_efficiency, limits.motor_efficiency_alert
        ));
    }
    if input.power_factor < limits.power_factor_alert {
        alerts.push(format!(
            "Low power factor: {:.2} (threshold {:.2})",
            input.power_factor, limits.power_factor_alert
        ));
        recommendations.push("Install power factor correction capacitors".to_string());
    }

    warnings.extend(clamped_temperature_warning(&props));
    warnings.extend(material_temperature_warning(
        "Discharge",
        input.pipe.material,
        input.temperature_c,
    ));
    if sizing.cable_exceeds_table {
        warnings.push(format!(
            "No standard cable section keeps the voltage drop under {:.1} %: split the supply or raise the voltage",
            limits.max_voltage_drop_percent
        ));
    }
    if sizing.starting_method != sizing.recommended_starting_method {
        recommendations.push(format!(
            "A {} starter is recommended for {p1:.1} kW (selected: {})",
            sizing.recommended_starting_method.label(),
            sizing.starting_method.label()
        ));
    }

    Ok(PerformanceResult {
        power_calculations: PowerCalculations {
            hydraulic_power: p2,
            absorbed_power: p1,
        },
        overall_efficiency: overall,
        velocity: v,
        reynolds_number: losses.reynolds,
        nominal_current: current,
        electrical_sizing: sizing,
        performance_curves: curves,
        fluid_properties: FluidSnapshot::from(&props),
        alerts,
        warnings,
        recommendations,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use hp_core::units::{m, m3ph, mm};
    use hp_fluids::PipeMaterial;

    fn duty() -> PerformanceInput {
        PerformanceInput {
            flow: m3ph(50.0),
            hmt: 30.0,
            pipe: PipeRun::new(mm(100.0), m(50.0), PipeMaterial::Steel),
            fluid: FluidId::Water,
            temperature_c: 20.0,
            pump_efficiency: 80.0,
            motor_efficiency: 90.0,
            voltage: 400.0,
            power_factor: 0.85,
            starting_method: StartingMethod::StarDelta,
            cable_length: 50.0,
            cable_material: CableMaterial::Copper,
        }
    }

    #[test]
    fn reference_duty_point() {
        let r = calculate_performance(&duty(), &DesignLimits::default()).unwrap();
        assert!((r.power_calculations.hydraulic_power - 5.11).abs() < 0.01);
        assert!((r.power_calculations.absorbed_power - 5.68).abs() < 0.01);
        assert!((r.overall_efficiency - 72.0).abs() < 1e-9);
        assert!(r.alerts.is_empty());
        assert_eq!(r.electrical_sizing.recommended_starting_method, StartingMethod::StarDelta);
        assert!((r.electrical_sizing.starting_current - 2.0 * r.nominal_current).abs() < 1e-9);
    }

    #[test]
    fn poor_equipment_raises_alerts() {
        let input = PerformanceInput {
            pump_efficiency: 55.0,
            motor_efficiency: 75.0,
            power_factor: 0.7,
            pipe: PipeRun::new(mm(65.0), m(50.0), PipeMaterial::Steel),
            ..duty()
        };
        let r = calculate_performance(&input, &DesignLimits::default()).unwrap();
        assert_eq!(r.alerts.len(), 4);
        assert!(r.alerts[0].contains("larger pipe diameter"));
    }

    #[test]
    fn single_phase_supply() {
        let input = PerformanceInput {
            voltage: 230.0,
            ..duty()
        };
        let r = calculate_performance(&input, &DesignLimits::default()).unwrap();
        assert_eq!(r.electrical_sizing.phase, crate::electrical::Phase::SinglePhase);
    }

    #[test]
    fn no_npsh_key_in_response() {
        let r = calculate_performance(&duty(), &DesignLimits::default()).unwrap();
        let json = serde_json::to_string(&r).unwrap().to_lowercase();
        assert!(!json.contains("npsh"));
    }

    #[test]
    fn best_operating_point_echoes_input() {
        let r = calculate_performance(&duty(), &DesignLimits::default()).unwrap();
        let bop = r.performance_curves.best_operating_point;
        assert_eq!(bop.flow, 50.0);
        assert_eq!(bop.hmt, 30.0);
        assert_eq!(bop.efficiency, 80.0);
        assert_eq!(bop.power, r.power_calculations.hydraulic_power);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn absorbed_exceeds_hydraulic(
            q in 0.1_f64..500.0,
            h in 0.1_f64..200.0,
            eta_p in 10.0_f64..100.0,
            eta_m in 10.0_f64..99.9,
        ) {
            let p2 = hydraulic_power_kw(q, h, eta_p).unwrap();
            let p1 = absorbed_power_kw(p2, eta_m).unwrap();
            prop_assert!(p1 > p2);
        }
    }
}
