//! hp-fluids: static reference data for hydropump.
//!
//! Provides:
//! - The catalog of the 20 pumped fluids the engine recognizes
//! - Temperature-dependent property tables (density, viscosity, vapor pressure)
//! - Pipe materials with absolute roughness and service limits
//! - Fitting loss coefficients
//! - The fluid/material compatibility matrix
//! - Solar irradiation regions (reference listing only)
//!
//! # Architecture
//!
//! Every table is a `static` array built at compile time. Identifiers are closed
//! enumerations, so unknown names are rejected when parsing (`FromStr`) and never
//! reach a calculator.
//!
//! # Example
//!
//! ```
//! use hp_fluids::{FluidId, properties_at};
//!
//! let water: FluidId = "water".parse().unwrap();
//! let props = properties_at(water, 20.0);
//! assert!((props.density.value - 998.2).abs() < 0.1);
//! ```

pub mod catalog;
pub mod compatibility;
pub mod error;
pub mod fittings;
pub mod materials;
pub mod properties;
pub mod solar;

// Re-exports for ergonomics
pub use catalog::{FluidCatalogEntry, FluidClass, FluidId, fluid_catalog, find_fluid};
pub use compatibility::{Compatibility, CompatibilityLevel, compatibility};
pub use error::{FluidError, FluidResult};
pub use fittings::{FittingCount, FittingSpec, FittingType, fitting_catalog, total_k, total_quantity};
pub use materials::{MaterialEntry, PipeMaterial, find_material, material_catalog};
pub use properties::{FluidProperties, PropertyPoint, properties_at, property_table};
pub use solar::{SolarRegion, find_region, solar_regions};
