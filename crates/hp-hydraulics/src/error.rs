//! Error types for hydraulic and electrical calculations.

use hp_core::HpError;
use hp_fluids::FluidError;
use thiserror::Error;

/// Errors that can occur during a calculation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HydraulicError {
    /// Input outside the physical domain of a formula (e.g. a zero diameter).
    #[error("Domain error: {what}")]
    Domain { what: &'static str },

    /// An intermediate or reported value is NaN or infinite.
    #[error("Non-finite value: {what}")]
    NonFinite { what: &'static str },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Reference data error: {message}")]
    Reference { message: String },
}

pub type HydraulicResult<T> = Result<T, HydraulicError>;

impl From<FluidError> for HydraulicError {
    fn from(e: FluidError) -> Self {
        HydraulicError::Reference {
            message: e.to_string(),
        }
    }
}

impl From<HydraulicError> for HpError {
    fn from(e: HydraulicError) -> Self {
        match e {
            HydraulicError::Domain { what } => HpError::InvalidArg { what },
            HydraulicError::NonFinite { what } => HpError::NonFinite {
                what,
                value: f64::NAN,
            },
            HydraulicError::InvalidArg { what } => HpError::InvalidArg { what },
            HydraulicError::Reference { .. } => HpError::InvalidArg {
                what: "reference data error",
            },
        }
    }
}
