//! hp-expert: rule-based recommendations for pump installations.
//!
//! The engine walks the computed NPSHd, HMT and performance results through a
//! set of independent rule groups (cavitation, materials, velocity, head loss,
//! efficiency, electrical, installation, hydraulic, maintenance) and returns a
//! typed, prioritized list of recommendations. [`build_analysis`] wraps the
//! results and recommendations into a single expert analysis record.

pub mod analysis;
pub mod context;
pub mod engine;
pub mod model;
pub mod rules;

pub use analysis::{
    ElectricalAnalysis, EnergyConsumption, ExpertAnalysis, OptimizationPotential, build_analysis,
};
pub use context::{Evaluation, ExpertContext, Installation, SiteConditions};
pub use engine::recommend;
pub use model::{Category, DiameterOption, Priority, Recommendation};
