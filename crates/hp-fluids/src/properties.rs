//! Temperature-dependent fluid properties.
//!
//! Each fluid carries a short table of (temperature, density, dynamic viscosity,
//! vapor pressure) rows; values in between are linearly interpolated. Outside the
//! table the nearest row is used and the result is flagged as clamped, so callers
//! can surface a warning instead of extrapolating.

use crate::catalog::FluidId;
use hp_core::units::{Density, DynVisc, Pressure, kg_per_m3, pa, pa_s};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PropertyPoint {
    pub temp_c: f64,
    /// kg/m³
    pub density: f64,
    /// Pa·s
    pub viscosity: f64,
    /// Pa (absolute)
    pub vapor_pressure: f64,
}

impl PropertyPoint {
    pub const fn new(temp_c: f64, density: f64, viscosity: f64, vapor_pressure: f64) -> Self {
        Self {
            temp_c,
            density,
            viscosity,
            vapor_pressure,
        }
    }
}

/// Fluid state evaluated at one temperature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FluidProperties {
    pub fluid: FluidId,
    /// Temperature the caller asked for (°C).
    pub temperature_c: f64,
    pub density: Density,
    pub viscosity: DynVisc,
    pub vapor_pressure: Pressure,
    /// True when `temperature_c` fell outside the table and the edge row was used.
    pub clamped: bool,
}

impl FluidProperties {
    /// Kinematic viscosity (m²/s).
    pub fn kinematic_viscosity(&self) -> f64 {
        self.viscosity.value / self.density.value
    }
}

/// Temperature range covered by a fluid's table.
pub fn temperature_range(fluid: FluidId) -> (f64, f64) {
    let table = property_table(fluid);
    (table[0].temp_c, table[table.len() - 1].temp_c)
}

/// Evaluate a fluid's properties at `temp_c`.
pub fn properties_at(fluid: FluidId, temp_c: f64) -> FluidProperties {
    let (row, clamped) = interpolate(property_table(fluid), temp_c);
    FluidProperties {
        fluid,
        temperature_c: temp_c,
        density: kg_per_m3(row.density),
        viscosity: pa_s(row.viscosity),
        vapor_pressure: pa(row.vapor_pressure),
        clamped,
    }
}

fn interpolate(points: &[PropertyPoint], temp_c: f64) -> (PropertyPoint, bool) {
    let first = points[0];
    let last = points[points.len() - 1];
    if !temp_c.is_finite() || temp_c < first.temp_c {
        return (first, true);
    }
    if temp_c > last.temp_c {
        return (last, true);
    }
    for win in points.windows(2) {
        let a = win[0];
        let b = win[1];
        if temp_c >= a.temp_c && temp_c <= b.temp_c {
            let frac = (temp_c - a.temp_c) / (b.temp_c - a.temp_c);
            let lerp = |x: f64, y: f64| x + frac * (y - x);
            return (
                PropertyPoint::new(
                    temp_c,
                    lerp(a.density, b.density),
                    lerp(a.viscosity, b.viscosity),
                    lerp(a.vapor_pressure, b.vapor_pressure),
                ),
                false,
            );
        }
    }
    (last, false)
}

const fn pp(temp_c: f64, density: f64, viscosity: f64, vapor_pressure: f64) -> PropertyPoint {
    PropertyPoint::new(temp_c, density, viscosity, vapor_pressure)
}

pub fn property_table(fluid: FluidId) -> &'static [PropertyPoint] {
    match fluid {
        FluidId::Water => WATER,
        FluidId::Seawater => SEAWATER,
        FluidId::Wastewater => WASTEWATER,
        FluidId::Ethanol => ETHANOL,
        FluidId::Methanol => METHANOL,
        FluidId::Glycerol => GLYCEROL,
        FluidId::EthyleneGlycol => ETHYLENE_GLYCOL,
        FluidId::PropyleneGlycol => PROPYLENE_GLYCOL,
        FluidId::Diesel => DIESEL,
        FluidId::Gasoline => GASOLINE,
        FluidId::Kerosene => KEROSENE,
        FluidId::HydraulicOil => HYDRAULIC_OIL,
        FluidId::PalmOil => PALM_OIL,
        FluidId::OliveOil => OLIVE_OIL,
        FluidId::Milk => MILK,
        FluidId::Wine => WINE,
        FluidId::Honey => HONEY,
        FluidId::Acid => ACID,
        FluidId::SodiumHydroxide => SODIUM_HYDROXIDE,
        FluidId::Bleach => BLEACH,
    }
}

static WATER: &[PropertyPoint] = &[
    pp(0.0, 999.8, 1.792e-3, 611.0),
    pp(10.0, 999.7, 1.307e-3, 1_228.0),
    pp(20.0, 998.2, 1.002e-3, 2_339.0),
    pp(30.0, 995.7, 0.798e-3, 4_246.0),
    pp(40.0, 992.2, 0.653e-3, 7_384.0),
    pp(50.0, 988.0, 0.547e-3, 12_350.0),
    pp(60.0, 983.2, 0.467e-3, 19_940.0),
    pp(70.0, 977.8, 0.404e-3, 31_190.0),
    pp(80.0, 971.8, 0.355e-3, 47_390.0),
    pp(90.0, 965.3, 0.315e-3, 70_140.0),
    pp(100.0, 958.4, 0.282e-3, 101_325.0),
];

static SEAWATER: &[PropertyPoint] = &[
    pp(0.0, 1_028.0, 1.88e-3, 590.0),
    pp(20.0, 1_025.0, 1.08e-3, 2_290.0),
    pp(40.0, 1_019.0, 0.69e-3, 7_240.0),
    pp(60.0, 1_010.0, 0.48e-3, 19_550.0),
    pp(80.0, 1_000.0, 0.36e-3, 46_450.0),
    pp(100.0, 990.0, 0.28e-3, 99_300.0),
];

static WASTEWATER: &[PropertyPoint] = &[
    pp(0.0, 1_005.0, 1.97e-3, 611.0),
    pp(20.0, 1_003.0, 1.10e-3, 2_339.0),
    pp(40.0, 997.0, 0.72e-3, 7_384.0),
    pp(60.0, 988.0, 0.51e-3, 19_940.0),
    pp(80.0, 977.0, 0.39e-3, 47_390.0),
];

static ETHANOL: &[PropertyPoint] = &[
    pp(0.0, 806.0, 1.77e-3, 1_630.0),
    pp(20.0, 789.0, 1.20e-3, 5_870.0),
    pp(40.0, 772.0, 0.83e-3, 17_900.0),
    pp(60.0, 754.0, 0.59e-3, 46_900.0),
    pp(78.0, 737.0, 0.45e-3, 101_325.0),
];

static METHANOL: &[PropertyPoint] = &[
    pp(0.0, 810.0, 0.82e-3, 4_000.0),
    pp(20.0, 792.0, 0.59e-3, 12_900.0),
    pp(40.0, 774.0, 0.45e-3, 35_400.0),
    pp(60.0, 756.0, 0.35e-3, 84_600.0),
    pp(64.7, 751.0, 0.33e-3, 101_325.0),
];

static GLYCEROL: &[PropertyPoint] = &[
    pp(0.0, 1_273.0, 12.1, 0.001),
    pp(20.0, 1_261.0, 1.41, 0.01),
    pp(40.0, 1_249.0, 0.284, 0.1),
    pp(60.0, 1_237.0, 0.0813, 1.0),
    pp(80.0, 1_225.0, 0.0319, 5.0),
    pp(100.0, 1_213.0, 0.0148, 25.0),
];

static ETHYLENE_GLYCOL: &[PropertyPoint] = &[
    pp(-20.0, 1_092.0, 17.0e-3, 60.0),
    pp(0.0, 1_083.0, 7.0e-3, 300.0),
    pp(20.0, 1_073.0, 3.8e-3, 1_200.0),
    pp(40.0, 1_061.0, 2.3e-3, 3_900.0),
    pp(60.0, 1_048.0, 1.5e-3, 10_500.0),
    pp(80.0, 1_034.0, 1.1e-3, 24_000.0),
    pp(100.0, 1_019.0, 0.8e-3, 52_000.0),
];

static PROPYLENE_GLYCOL: &[PropertyPoint] = &[
    pp(-20.0, 1_058.0, 40.0e-3, 60.0),
    pp(0.0, 1_050.0, 12.0e-3, 300.0),
    pp(20.0, 1_040.0, 6.0e-3, 1_150.0),
    pp(40.0, 1_028.0, 3.0e-3, 3_700.0),
    pp(60.0, 1_015.0, 1.8e-3, 10_000.0),
    pp(80.0, 1_000.0, 1.2e-3, 23_000.0),
    pp(100.0, 985.0, 0.85e-3, 50_000.0),
];

static DIESEL: &[PropertyPoint] = &[
    pp(0.0, 850.0, 6.0e-3, 100.0),
    pp(20.0, 835.0, 3.5e-3, 300.0),
    pp(40.0, 820.0, 2.3e-3, 800.0),
    pp(60.0, 805.0, 1.6e-3, 2_000.0),
    pp(80.0, 790.0, 1.2e-3, 4_500.0),
    pp(100.0, 775.0, 0.9e-3, 9_000.0),
];

static GASOLINE: &[PropertyPoint] = &[
    pp(0.0, 760.0, 0.75e-3, 25_000.0),
    pp(10.0, 750.0, 0.67e-3, 38_000.0),
    pp(20.0, 740.0, 0.60e-3, 55_000.0),
    pp(30.0, 731.0, 0.54e-3, 75_000.0),
    pp(40.0, 722.0, 0.48e-3, 100_000.0),
];

static KEROSENE: &[PropertyPoint] = &[
    pp(0.0, 830.0, 3.0e-3, 300.0),
    pp(20.0, 815.0, 2.0e-3, 700.0),
    pp(40.0, 800.0, 1.4e-3, 1_800.0),
    pp(60.0, 785.0, 1.05e-3, 4_000.0),
    pp(80.0, 770.0, 0.8e-3, 8_000.0),
];

static HYDRAULIC_OIL: &[PropertyPoint] = &[
    pp(0.0, 880.0, 0.40, 1.0),
    pp(20.0, 870.0, 0.12, 1.0),
    pp(40.0, 858.0, 0.040, 1.0),
    pp(60.0, 846.0, 0.017, 2.0),
    pp(80.0, 834.0, 0.009, 5.0),
    pp(100.0, 822.0, 0.0055, 10.0),
];

static PALM_OIL: &[PropertyPoint] = &[
    pp(30.0, 910.0, 0.060, 1.0),
    pp(40.0, 905.0, 0.040, 1.0),
    pp(60.0, 892.0, 0.020, 2.0),
    pp(80.0, 880.0, 0.011, 4.0),
    pp(100.0, 868.0, 0.0075, 8.0),
];

static OLIVE_OIL: &[PropertyPoint] = &[
    pp(0.0, 925.0, 0.200, 1.0),
    pp(20.0, 912.0, 0.084, 1.0),
    pp(40.0, 899.0, 0.036, 1.0),
    pp(60.0, 886.0, 0.018, 2.0),
    pp(80.0, 873.0, 0.011, 4.0),
    pp(100.0, 860.0, 0.0072, 8.0),
];

static MILK: &[PropertyPoint] = &[
    pp(4.0, 1_033.0, 2.8e-3, 800.0),
    pp(20.0, 1_030.0, 2.0e-3, 2_300.0),
    pp(40.0, 1_024.0, 1.3e-3, 7_300.0),
    pp(60.0, 1_015.0, 0.9e-3, 19_500.0),
    pp(80.0, 1_005.0, 0.7e-3, 46_000.0),
];

static WINE: &[PropertyPoint] = &[
    pp(0.0, 1_000.0, 2.5e-3, 1_000.0),
    pp(20.0, 990.0, 1.5e-3, 3_200.0),
    pp(40.0, 982.0, 0.95e-3, 9_500.0),
    pp(60.0, 972.0, 0.65e-3, 25_000.0),
];

static HONEY: &[PropertyPoint] = &[
    pp(20.0, 1_420.0, 10.0, 1_200.0),
    pp(30.0, 1_415.0, 3.0, 2_200.0),
    pp(40.0, 1_410.0, 1.0, 4_000.0),
    pp(50.0, 1_405.0, 0.45, 6_900.0),
    pp(60.0, 1_400.0, 0.20, 11_000.0),
];

static ACID: &[PropertyPoint] = &[
    pp(0.0, 1_075.0, 1.9e-3, 550.0),
    pp(20.0, 1_066.0, 1.2e-3, 2_100.0),
    pp(40.0, 1_058.0, 0.8e-3, 6_700.0),
    pp(60.0, 1_048.0, 0.58e-3, 18_000.0),
    pp(80.0, 1_036.0, 0.44e-3, 43_000.0),
];

static SODIUM_HYDROXIDE: &[PropertyPoint] = &[
    pp(0.0, 1_230.0, 8.5e-3, 450.0),
    pp(20.0, 1_219.0, 4.5e-3, 1_700.0),
    pp(40.0, 1_208.0, 2.6e-3, 5_600.0),
    pp(60.0, 1_196.0, 1.7e-3, 15_000.0),
    pp(80.0, 1_183.0, 1.2e-3, 36_000.0),
];

static BLEACH: &[PropertyPoint] = &[
    pp(0.0, 1_215.0, 1.9e-3, 500.0),
    pp(20.0, 1_200.0, 1.2e-3, 2_000.0),
    pp(40.0, 1_190.0, 0.8e-3, 6_500.0),
];
