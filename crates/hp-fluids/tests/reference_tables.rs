use hp_fluids::{
    CompatibilityLevel, FluidClass, FluidId, PipeMaterial, compatibility, fluid_catalog,
    material_catalog, properties::temperature_range, properties_at,
};
use proptest::prelude::*;

#[test]
fn catalog_has_twenty_fluids() {
    assert_eq!(fluid_catalog().len(), 20);
}

#[test]
fn every_fluid_parses_from_its_id() {
    for entry in fluid_catalog() {
        let parsed: FluidId = entry.canonical_id.parse().unwrap();
        assert_eq!(parsed, entry.fluid);
    }
}

#[test]
fn hot_water_vapor_pressure_matches_table() {
    let props = properties_at(FluidId::Water, 70.0);
    assert!((props.vapor_pressure.value - 31_190.0).abs() < 1.0);
    assert!(!props.clamped);
}

#[test]
fn out_of_range_temperature_is_clamped() {
    let (_, max) = temperature_range(FluidId::Gasoline);
    let props = properties_at(FluidId::Gasoline, max + 50.0);
    assert!(props.clamped);
    let further = properties_at(FluidId::Gasoline, max + 80.0);
    assert_eq!(props.density, further.density);
    assert_eq!(props.vapor_pressure, further.vapor_pressure);
}

#[test]
fn corrosive_fluids_reject_carbon_steel() {
    for entry in fluid_catalog()
        .iter()
        .filter(|e| e.fluid.has_class(FluidClass::Corrosive))
    {
        let c = compatibility(entry.fluid, PipeMaterial::Steel);
        assert_eq!(c.level, CompatibilityLevel::Incompatible, "{}", entry.canonical_id);
    }
}

#[test]
fn material_listing_exposes_roughness() {
    assert!(material_catalog().iter().all(|m| m.roughness_mm > 0.0));
}

fn any_fluid() -> impl Strategy<Value = FluidId> {
    (0..fluid_catalog().len()).prop_map(|i| fluid_catalog()[i].fluid)
}

proptest! {
    #[test]
    fn properties_are_positive_and_finite(fluid in any_fluid(), t in -50.0_f64..200.0) {
        let p = properties_at(fluid, t);
        prop_assert!(p.density.value.is_finite() && p.density.value > 0.0);
        prop_assert!(p.viscosity.value.is_finite() && p.viscosity.value > 0.0);
        prop_assert!(p.vapor_pressure.value.is_finite() && p.vapor_pressure.value >= 0.0);
    }

    #[test]
    fn vapor_pressure_grows_with_temperature(fluid in any_fluid(), a in 0.0_f64..100.0, b in 0.0_f64..100.0) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let p_lo = properties_at(fluid, lo).vapor_pressure.value;
        let p_hi = properties_at(fluid, hi).vapor_pressure.value;
        prop_assert!(p_hi >= p_lo - 1e-9);
    }
}
