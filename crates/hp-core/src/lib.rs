//! hp-core: shared foundation for hydropump.
//!
//! Contains:
//! - units (uom SI types, constructors, hydraulic constants)
//! - numeric (finite checks, rounding, sweeps)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{HpError, HpResult};
pub use numeric::*;
pub use units::*;
