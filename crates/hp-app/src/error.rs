//! Error types for the hp-app service layer.

use std::path::PathBuf;

/// Application error type wrapping the backend crates' errors behind one
/// interface for every frontend.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A request field failed validation; nothing was computed.
    #[error("Invalid {field}: {message}")]
    Validation { field: String, message: String },

    #[error("Failed to read {path}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Calculation error: {0}")]
    Calculation(String),

    #[error("History error: {0}")]
    Results(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for hp-app operations.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        AppError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }
}

// Conversions from backend error types
impl From<hp_hydraulics::HydraulicError> for AppError {
    fn from(err: hp_hydraulics::HydraulicError) -> Self {
        AppError::Calculation(err.to_string())
    }
}

impl From<hp_audit::AuditError> for AppError {
    fn from(err: hp_audit::AuditError) -> Self {
        use hp_audit::AuditError;
        match err {
            AuditError::InvalidReference { parameter, .. } => {
                AppError::validation(parameter, err.to_string())
            }
            AuditError::InvalidWeights { .. } => AppError::Config(err.to_string()),
            AuditError::NonFinite { .. } => AppError::Calculation(err.to_string()),
        }
    }
}

impl From<hp_results::ResultsError> for AppError {
    fn from(err: hp_results::ResultsError) -> Self {
        AppError::Results(err.to_string())
    }
}
