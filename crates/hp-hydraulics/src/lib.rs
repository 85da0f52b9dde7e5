//! hp-hydraulics: calculation engine for pump installations.
//!
//! Provides:
//! - Hydraulic primitives (velocity, Reynolds, Darcy friction, head losses)
//! - NPSHd with cavitation margin and suction heuristics
//! - HMT (total dynamic head) for surface and submersible installations
//! - Performance: powers, efficiencies, current and alerts
//! - Electrical sizing: phase, starting method, cable section
//! - Sampled performance and system curves
//!
//! Every calculator is a pure function of its input and a [`DesignLimits`]
//! table. Degenerate but valid inputs produce finite results plus warnings;
//! only impossible geometry or non-finite intermediates are errors.
//!
//! # Example
//!
//! ```
//! use hp_core::units::{m, m3ph, mm};
//! use hp_fluids::{FluidId, PipeMaterial};
//! use hp_hydraulics::{DesignLimits, NpshdInput, PipeRun, SuctionType, calculate_npshd};
//!
//! let input = NpshdInput {
//!     suction_type: SuctionType::Flooded,
//!     hasp: 2.0,
//!     flow: m3ph(50.0),
//!     fluid: FluidId::Water,
//!     temperature_c: 20.0,
//!     suction: PipeRun::new(mm(100.0), m(30.0), PipeMaterial::Pvc),
//!     npsh_required: Some(3.0),
//! };
//! let result = calculate_npshd(&input, &DesignLimits::default()).unwrap();
//! assert!(!result.cavitation_risk);
//! ```

pub mod common;
pub mod curves;
pub mod electrical;
pub mod error;
pub mod hmt;
pub mod limits;
pub mod npshd;
pub mod performance;
pub mod primitives;

// Re-exports
pub use common::{FluidSnapshot, check_finite};
pub use curves::{
    BestOperatingPoint, PerformanceCurves, SystemCurve, flow_sweep, performance_curves,
    system_curve,
};
pub use electrical::{
    CableMaterial, ElectricalInput, ElectricalSizing, Phase, StartingMethod, cable_section,
    nominal_current, size_electrical,
};
pub use error::{HydraulicError, HydraulicResult};
pub use hmt::{HmtInput, HmtResult, InstallationType, calculate_hmt};
pub use limits::{DesignLimits, MIN_CURVE_POINTS, VELOCITY_CEILING};
pub use npshd::{CAVITATION_REMEDIES, NpshdInput, NpshdResult, SuctionType, calculate_npshd};
pub use performance::{
    PerformanceInput, PerformanceResult, PowerCalculations, absorbed_power_kw,
    calculate_performance, hydraulic_power_kw, overall_efficiency,
};
pub use primitives::{
    LegLosses, PipeRun, friction_factor, head_loss_linear, head_loss_singular, reynolds, velocity,
};
