//! History record types.

use crate::hash::compute_record_id;
use serde::{Deserialize, Serialize};

pub type RecordId = String;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalculationKind {
    Npshd,
    Hmt,
    Performance,
    Expert,
    Audit,
}

impl CalculationKind {
    pub fn label(self) -> &'static str {
        match self {
            CalculationKind::Npshd => "npshd",
            CalculationKind::Hmt => "hmt",
            CalculationKind::Performance => "performance",
            CalculationKind::Expert => "expert",
            CalculationKind::Audit => "audit",
        }
    }
}

/// One computed request with its response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationRecord {
    pub id: RecordId,
    pub kind: CalculationKind,
    /// RFC 3339, UTC
    pub timestamp: String,
    pub engine_version: String,
    pub request: serde_json::Value,
    pub response: serde_json::Value,
}

impl CalculationRecord {
    /// Stamp a new record; the id depends only on kind, request and version.
    pub fn new(
        kind: CalculationKind,
        request: serde_json::Value,
        response: serde_json::Value,
        engine_version: &str,
    ) -> Self {
        Self {
            id: compute_record_id(kind, &request, engine_version),
            kind,
            timestamp: chrono::Utc::now().to_rfc3339(),
            engine_version: engine_version.to_string(),
            request,
            response,
        }
    }
}
