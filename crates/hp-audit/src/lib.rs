//! hp-audit: health scoring of an installed pump from field measurements.
//!
//! Each measurement is compared with its reference value; deviations beyond
//! the tolerance band cost score points in one of four domains. The domain
//! scores combine into a weighted overall score and drive diagnostics,
//! corrective actions and a payback estimate.
//!
//! ```
//! use hp_audit::{AuditInput, AuditSettings, run_audit};
//!
//! let input = AuditInput {
//!     measured_flow: Some(45.0),
//!     required_flow: Some(60.0),
//!     ..AuditInput::default()
//! };
//! let report = run_audit(&input, &AuditSettings::default()).unwrap();
//! assert_eq!(report.hydraulic_score, 70.0);
//! ```

pub mod actions;
pub mod error;
pub mod input;
pub mod metrics;
pub mod report;
pub mod scoring;
pub mod settings;

pub use actions::{AuditRecommendation, priority_for, recommend};
pub use error::{AuditError, AuditResult};
pub use input::AuditInput;
pub use metrics::{
    AuditMetric, Direction, Domain, MetricKind, collect_metrics, deviation_percent, penalty,
};
pub use report::{
    ActionPhase, ActionPlan, AuditReport, Diagnostic, EconomicAnalysis, ExecutiveSummary,
    run_audit,
};
pub use scoring::{DomainScores, Severity, domain_score, domain_scores, overall_score};
pub use settings::{AuditSettings, DefaultLimits, ScoreWeights};
