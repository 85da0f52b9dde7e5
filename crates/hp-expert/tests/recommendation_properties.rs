//! Engine-level properties over generated installations.

use hp_core::units::{m, mm};
use hp_expert::{Evaluation, Installation, SiteConditions, build_analysis, recommend};
use hp_fluids::{FittingCount, FittingType, FluidId, PipeMaterial, fluid_catalog, material_catalog};
use hp_hydraulics::{
    CableMaterial, DesignLimits, InstallationType, PipeRun, StartingMethod, SuctionType,
};
use proptest::prelude::*;

fn installation(
    fluid: FluidId,
    material: PipeMaterial,
    q: f64,
    d_suction: f64,
    d_discharge: f64,
    lift: bool,
    t: f64,
) -> Installation {
    Installation {
        fluid,
        temperature_c: t,
        flow_m3h: q,
        installation_type: InstallationType::Surface,
        suction_type: if lift {
            SuctionType::SuctionLift
        } else {
            SuctionType::Flooded
        },
        hasp: 3.0,
        discharge_height: 20.0,
        useful_pressure_bar: 0.5,
        suction: PipeRun::new(mm(d_suction), m(8.0), material)
            .with_fittings(vec![FittingCount::new(FittingType::Strainer, 1)]),
        discharge: PipeRun::new(mm(d_discharge), m(120.0), material)
            .with_fittings(vec![FittingCount::new(FittingType::Elbow90, 3)]),
        npsh_required: Some(4.0),
        pump_efficiency: 72.0,
        motor_efficiency: 90.0,
        voltage: 400.0,
        power_factor: 0.84,
        starting_method: StartingMethod::SoftStarter,
        cable_length: 60.0,
        cable_material: CableMaterial::Copper,
    }
}

#[test]
fn submersible_installation_has_no_suction_leg() {
    let inst = Installation {
        installation_type: InstallationType::Submersible,
        ..installation(FluidId::Water, PipeMaterial::Pehd, 40.0, 100.0, 100.0, false, 15.0)
    };
    let eval = Evaluation::compute(inst, SiteConditions::default(), DesignLimits::default()).unwrap();
    assert!(eval.hmt.suction_head_loss.is_none());
    let analysis = build_analysis(&eval).unwrap();
    assert!(!analysis.expert_recommendations.is_empty());
}

fn any_fluid() -> impl Strategy<Value = FluidId> {
    (0..fluid_catalog().len()).prop_map(|i| fluid_catalog()[i].fluid)
}

fn any_material() -> impl Strategy<Value = PipeMaterial> {
    (0..material_catalog().len()).prop_map(|i| material_catalog()[i].material)
}

proptest! {
    #[test]
    fn recommendations_never_empty_and_sorted(
        fluid in any_fluid(),
        material in any_material(),
        q in 0.0_f64..300.0,
        ds in 25.0_f64..300.0,
        dd in 25.0_f64..300.0,
        lift in any::<bool>(),
        t in 0.0_f64..90.0,
    ) {
        let eval = Evaluation::compute(
            installation(fluid, material, q, ds, dd, lift, t),
            SiteConditions::default(),
            DesignLimits::default(),
        ).unwrap();
        let recs = recommend(&eval.context());
        prop_assert!(!recs.is_empty());
        prop_assert!(recs.windows(2).all(|w| w[0].priority <= w[1].priority));
    }

    #[test]
    fn diameter_options_respect_hard_ceiling(
        q in 10.0_f64..600.0,
        dd in 25.0_f64..150.0,
    ) {
        let limits = DesignLimits::default();
        let eval = Evaluation::compute(
            installation(FluidId::Water, PipeMaterial::Steel, q, 300.0, dd, false, 20.0),
            SiteConditions::default(),
            limits.clone(),
        ).unwrap();
        for rec in recommend(&eval.context()) {
            for option in rec.diameter_options.iter().flatten() {
                prop_assert!(option.velocity <= limits.hard_velocity_max);
            }
            prop_assert!(rec.diameter_options.as_ref().is_none_or(|o| o.len() <= 3));
        }
    }
}
