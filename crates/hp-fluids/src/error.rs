//! Reference-data errors.

use hp_core::HpError;
use thiserror::Error;

/// Result type for reference-data lookups.
pub type FluidResult<T> = Result<T, FluidError>;

/// Errors raised when an identifier does not match a reference table.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FluidError {
    /// Fluid identifier not present in the catalog.
    #[error("Unknown fluid: {id}")]
    UnknownFluid { id: String },

    /// Pipe material identifier not present in the catalog.
    #[error("Unknown pipe material: {id}")]
    UnknownMaterial { id: String },

    /// Fitting identifier not present in the catalog.
    #[error("Unknown fitting type: {id}")]
    UnknownFitting { id: String },

    /// Solar region identifier not present in the catalog.
    #[error("Unknown solar region: {id}")]
    UnknownRegion { id: String },

    /// Invalid argument.
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },
}

impl From<FluidError> for HpError {
    fn from(err: FluidError) -> Self {
        match err {
            FluidError::UnknownFluid { .. } => HpError::InvalidArg {
                what: "unknown fluid",
            },
            FluidError::UnknownMaterial { .. } => HpError::InvalidArg {
                what: "unknown pipe material",
            },
            FluidError::UnknownFitting { .. } => HpError::InvalidArg {
                what: "unknown fitting type",
            },
            FluidError::UnknownRegion { .. } => HpError::InvalidArg {
                what: "unknown solar region",
            },
            FluidError::InvalidArg { what } => HpError::InvalidArg { what },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = FluidError::UnknownFluid {
            id: "mercury".into(),
        };
        assert!(err.to_string().contains("mercury"));
    }

    #[test]
    fn error_to_hp_error() {
        let err = FluidError::UnknownMaterial { id: "wood".into() };
        let hp_err: HpError = err.into();
        assert!(matches!(hp_err, HpError::InvalidArg { .. }));
    }
}
