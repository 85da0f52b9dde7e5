//! Shared application service layer for hydropump.
//!
//! This crate gives every frontend the same entry points: request documents
//! are validated against the reference tables, converted into calculator
//! inputs, computed, and optionally recorded in the calculation history.

pub mod config;
pub mod error;
pub mod reference;
pub mod schema;
pub mod service;
pub mod validate;

// Re-export key types for convenience
pub use config::{EngineConfig, load_config, load_document};
pub use error::{AppError, AppResult};
pub use reference::{
    CompatibilityInfo, FittingInfo, FluidInfo, MaterialInfo, SolarRegionInfo, fittings, fluids,
    pipe_materials, solar_region_list,
};
pub use schema::{
    AuditRequest, ElectricalFields, ExpertRequest, FittingEntry, HmtRequest, NpshdRequest,
    PerformanceRequest, SiteFields,
};
pub use service::{ENGINE_VERSION, Engine};
