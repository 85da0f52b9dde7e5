//! Content-based hashing for record ids.

use crate::types::CalculationKind;
use sha2::{Digest, Sha256};

pub fn compute_record_id(
    kind: CalculationKind,
    request: &serde_json::Value,
    engine_version: &str,
) -> String {
    let mut hasher = Sha256::new();

    hasher.update(kind.label().as_bytes());

    let request_json = serde_json::to_string(request).unwrap_or_default();
    hasher.update(request_json.as_bytes());

    hasher.update(engine_version.as_bytes());

    let result = hasher.finalize();
    format!("{:x}", result)
}
