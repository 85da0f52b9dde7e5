//! SI quantity aliases and the constructors for the units pump data is entered in.

use uom::si::f64::{
    DynamicViscosity as UomDynamicViscosity, Length as UomLength, MassDensity as UomMassDensity,
    Pressure as UomPressure, Velocity as UomVelocity, VolumeRate as UomVolumeRate,
};

// Public canonical unit types (SI, f64)
pub type DynVisc = UomDynamicViscosity;
pub type Length = UomLength;
pub type Density = UomMassDensity;
pub type Pressure = UomPressure;
pub type Velocity = UomVelocity;
pub type VolumeRate = UomVolumeRate;

#[inline]
pub fn m(v: f64) -> Length {
    use uom::si::length::meter;
    Length::new::<meter>(v)
}

/// Pipe diameters are entered in millimetres.
#[inline]
pub fn mm(v: f64) -> Length {
    use uom::si::length::millimeter;
    Length::new::<millimeter>(v)
}

/// Pump flow rates are entered in m³/h.
#[inline]
pub fn m3ph(v: f64) -> VolumeRate {
    use uom::si::volume_rate::cubic_meter_per_second;
    VolumeRate::new::<cubic_meter_per_second>(v / constants::SECONDS_PER_HOUR)
}

#[inline]
pub fn to_m3ph(q: VolumeRate) -> f64 {
    q.value * constants::SECONDS_PER_HOUR
}

#[inline]
pub fn mps(v: f64) -> Velocity {
    use uom::si::velocity::meter_per_second;
    Velocity::new::<meter_per_second>(v)
}

#[inline]
pub fn kg_per_m3(v: f64) -> Density {
    use uom::si::mass_density::kilogram_per_cubic_meter;
    Density::new::<kilogram_per_cubic_meter>(v)
}

#[inline]
pub fn pa_s(v: f64) -> DynVisc {
    use uom::si::dynamic_viscosity::pascal_second;
    DynVisc::new::<pascal_second>(v)
}

#[inline]
pub fn pa(v: f64) -> Pressure {
    use uom::si::pressure::pascal;
    Pressure::new::<pascal>(v)
}

#[inline]
pub fn bar(v: f64) -> Pressure {
    use uom::si::pressure::bar;
    Pressure::new::<bar>(v)
}

/// Convert a pressure into the equivalent liquid column (m) for a density.
#[inline]
pub fn pressure_head(p: Pressure, rho: Density) -> Length {
    m(p.value / (rho.value * constants::G0_MPS2))
}

pub mod constants {
    use super::*;

    pub const G0_MPS2: f64 = 9.806_65;

    /// Standard sea-level atmosphere. Not user-configurable.
    pub const ATMOSPHERIC_PRESSURE_PA: f64 = 101_325.0;

    /// m³/h·m to kW at 100 % efficiency for water-equivalent density.
    pub const HYDRAULIC_POWER_DIVISOR: f64 = 367.0;

    pub const SECONDS_PER_HOUR: f64 = 3600.0;

    #[inline]
    pub fn atmospheric_pressure() -> Pressure {
        pa(ATMOSPHERIC_PRESSURE_PA)
    }
}
