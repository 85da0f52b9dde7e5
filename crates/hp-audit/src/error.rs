//! Audit errors.

use hp_core::HpError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AuditError {
    /// A reference value must be strictly positive to compute a deviation.
    #[error("Invalid reference for {parameter}: {value} (must be > 0)")]
    InvalidReference { parameter: &'static str, value: f64 },

    #[error("Non-finite value for {what}")]
    NonFinite { what: &'static str },

    #[error("Invalid score weights: {what}")]
    InvalidWeights { what: &'static str },
}

pub type AuditResult<T> = Result<T, AuditError>;

impl From<AuditError> for HpError {
    fn from(e: AuditError) -> Self {
        match e {
            AuditError::InvalidReference { parameter, value } => HpError::OutOfRange {
                what: parameter,
                value,
                min: f64::MIN_POSITIVE,
                max: f64::MAX,
            },
            AuditError::NonFinite { what } => HpError::NonFinite {
                what,
                value: f64::NAN,
            },
            AuditError::InvalidWeights { what } => HpError::InvalidArg { what },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = AuditError::InvalidReference {
            parameter: "required_flow",
            value: 0.0,
        };
        assert!(err.to_string().contains("required_flow"));
    }

    #[test]
    fn error_conversion() {
        let hp: HpError = AuditError::InvalidWeights { what: "sum" }.into();
        assert!(matches!(hp, HpError::InvalidArg { .. }));
    }
}
