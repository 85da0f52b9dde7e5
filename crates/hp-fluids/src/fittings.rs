//! Singular (minor) loss coefficients.

use crate::error::{FluidError, FluidResult};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FittingType {
    #[serde(rename = "elbow_90")]
    Elbow90,
    #[serde(rename = "elbow_45")]
    Elbow45,
    Tee,
    GateValve,
    GlobeValve,
    BallValve,
    ButterflyValve,
    CheckValve,
    FootValve,
    Strainer,
    Reducer,
    Enlargement,
    Entrance,
    Exit,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FittingSpec {
    pub fitting_type: FittingType,
    pub canonical_id: &'static str,
    pub display_name: &'static str,
    /// Loss coefficient K (dimensionless)
    pub k: f64,
}

/// A fitting reference on one pipe run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FittingCount {
    pub fitting_type: FittingType,
    pub quantity: u32,
}

impl FittingCount {
    pub fn new(fitting_type: FittingType, quantity: u32) -> Self {
        Self {
            fitting_type,
            quantity,
        }
    }
}

// Row order follows the `FittingType` declaration order.
static FITTINGS: [FittingSpec; 14] = [
    fs(FittingType::Elbow90, "elbow_90", "90° elbow", 0.9),
    fs(FittingType::Elbow45, "elbow_45", "45° elbow", 0.4),
    fs(FittingType::Tee, "tee", "Tee (branch flow)", 1.8),
    fs(FittingType::GateValve, "gate_valve", "Gate valve (open)", 0.15),
    fs(FittingType::GlobeValve, "globe_valve", "Globe valve (open)", 10.0),
    fs(FittingType::BallValve, "ball_valve", "Ball valve (open)", 0.05),
    fs(FittingType::ButterflyValve, "butterfly_valve", "Butterfly valve (open)", 0.3),
    fs(FittingType::CheckValve, "check_valve", "Swing check valve", 2.5),
    fs(FittingType::FootValve, "foot_valve", "Foot valve with strainer", 1.75),
    fs(FittingType::Strainer, "strainer", "Y strainer", 2.0),
    fs(FittingType::Reducer, "reducer", "Concentric reducer", 0.5),
    fs(FittingType::Enlargement, "enlargement", "Sudden enlargement", 1.0),
    fs(FittingType::Entrance, "entrance", "Pipe entrance", 0.5),
    fs(FittingType::Exit, "exit", "Pipe exit", 1.0),
];

const fn fs(
    fitting_type: FittingType,
    canonical_id: &'static str,
    display_name: &'static str,
    k: f64,
) -> FittingSpec {
    FittingSpec {
        fitting_type,
        canonical_id,
        display_name,
        k,
    }
}

pub fn fitting_catalog() -> &'static [FittingSpec] {
    &FITTINGS
}

impl FittingType {
    pub fn spec(self) -> &'static FittingSpec {
        &FITTINGS[self as usize]
    }

    pub fn k(self) -> f64 {
        self.spec().k
    }

    /// Non-return devices that keep a suction line primed.
    pub fn is_non_return(self) -> bool {
        matches!(self, FittingType::CheckValve | FittingType::FootValve)
    }
}

impl FromStr for FittingType {
    type Err = FluidError;

    fn from_str(s: &str) -> FluidResult<Self> {
        let query = s.trim();
        FITTINGS
            .iter()
            .find(|f| f.canonical_id.eq_ignore_ascii_case(query))
            .map(|f| f.fitting_type)
            .ok_or_else(|| FluidError::UnknownFitting {
                id: query.to_string(),
            })
    }
}

/// Sum of K × quantity over a pipe run.
pub fn total_k(fittings: &[FittingCount]) -> f64 {
    fittings
        .iter()
        .map(|f| f.fitting_type.k() * f64::from(f.quantity))
        .sum()
}

pub fn total_quantity(fittings: &[FittingCount]) -> u32 {
    fittings.iter().map(|f| f.quantity).sum()
}
