//! Calculation endpoints.
//!
//! Each endpoint validates its request, runs the calculators and, when a
//! history store is attached, records the request and response. A failed save
//! is logged and never affects the returned result.

use crate::config::EngineConfig;
use crate::error::{AppError, AppResult};
use crate::schema::{AuditRequest, ExpertRequest, HmtRequest, NpshdRequest, PerformanceRequest};
use crate::validate;
use hp_audit::{AuditReport, run_audit};
use hp_expert::{Evaluation, ExpertAnalysis, build_analysis};
use hp_hydraulics::{
    HmtResult, NpshdResult, PerformanceResult, calculate_hmt, calculate_npshd,
    calculate_performance,
};
use hp_results::{CalculationKind, CalculationRecord, HistoryStore};
use serde::Serialize;
use tracing::{debug, info, warn};

/// Version stamped on history records; part of the record id.
pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Clone)]
pub struct Engine {
    config: EngineConfig,
    history: Option<HistoryStore>,
}

impl Engine {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            history: None,
        }
    }

    /// Engine that records every calculation in the configured history
    /// directory.
    pub fn with_history(config: EngineConfig) -> AppResult<Self> {
        let store = HistoryStore::new(config.history_dir.clone())?;
        Ok(Self {
            config,
            history: Some(store),
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn history(&self) -> Option<&HistoryStore> {
        self.history.as_ref()
    }

    /// Store a computed request; returns the record id on success.
    fn record<Req: Serialize, Resp: Serialize>(
        &self,
        kind: CalculationKind,
        request: &Req,
        response: &Resp,
    ) -> Option<String> {
        let store = self.history.as_ref()?;
        match save_record(store, kind, request, response) {
            Ok(id) => {
                info!(kind = kind.label(), id = %id, "calculation saved to history");
                Some(id)
            }
            Err(e) => {
                warn!(kind = kind.label(), error = %e, "failed to save calculation to history");
                None
            }
        }
    }

    pub fn npshd(&self, req: &NpshdRequest) -> AppResult<NpshdResult> {
        let input = validate::npshd_input(req)?;
        let result = calculate_npshd(&input, &self.config.limits)?;
        debug!(
            npshd = result.npshd,
            cavitation = result.cavitation_risk,
            warnings = result.warnings.len(),
            "npshd computed"
        );
        self.record(CalculationKind::Npshd, req, &result);
        Ok(result)
    }

    pub fn hmt(&self, req: &HmtRequest) -> AppResult<HmtResult> {
        let input = validate::hmt_input(req)?;
        let result = calculate_hmt(&input, &self.config.limits)?;
        debug!(
            hmt = result.hmt,
            static_head = result.static_head,
            losses = result.total_head_loss,
            "hmt computed"
        );
        self.record(CalculationKind::Hmt, req, &result);
        Ok(result)
    }

    pub fn performance(&self, req: &PerformanceRequest) -> AppResult<PerformanceResult> {
        let input = validate::performance_input(req)?;
        let result = calculate_performance(&input, &self.config.limits)?;
        debug!(
            p2 = result.power_calculations.hydraulic_power,
            p1 = result.power_calculations.absorbed_power,
            current = result.nominal_current,
            alerts = result.alerts.len(),
            "performance computed"
        );
        self.record(CalculationKind::Performance, req, &result);
        Ok(result)
    }

    pub fn expert(&self, req: &ExpertRequest) -> AppResult<ExpertAnalysis> {
        let installation = validate::installation(req)?;
        let site = req.site.resolve(self.config.site);
        let evaluation = Evaluation::compute(installation, site, self.config.limits.clone())?;
        let analysis = build_analysis(&evaluation)?;
        debug!(
            recommendations = analysis.expert_recommendations.len(),
            stable = analysis.system_stability,
            "expert analysis computed"
        );
        self.record(CalculationKind::Expert, req, &analysis);
        Ok(analysis)
    }

    pub fn audit(&self, req: &AuditRequest) -> AppResult<AuditReport> {
        let report = run_audit(req, &self.config.audit)?;
        debug!(
            overall = report.overall_score,
            recommendations = report.recommendations.len(),
            "audit computed"
        );
        self.record(CalculationKind::Audit, req, &report);
        Ok(report)
    }

    /// History records, oldest first; empty when no store is attached.
    pub fn list_history(&self, kind: Option<CalculationKind>) -> AppResult<Vec<CalculationRecord>> {
        match &self.history {
            Some(store) => Ok(store.list(kind)?),
            None => Ok(Vec::new()),
        }
    }

    /// A record by full id or unique prefix.
    pub fn show_history(&self, id: &str) -> AppResult<CalculationRecord> {
        let store = self
            .history
            .as_ref()
            .ok_or_else(|| AppError::Results("history is not enabled".to_string()))?;
        Ok(store.find(id)?)
    }
}

fn save_record<Req: Serialize, Resp: Serialize>(
    store: &HistoryStore,
    kind: CalculationKind,
    request: &Req,
    response: &Resp,
) -> AppResult<String> {
    let record = CalculationRecord::new(
        kind,
        serde_json::to_value(request)?,
        serde_json::to_value(response)?,
        ENGINE_VERSION,
    );
    store.save(&record)?;
    Ok(record.id)
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}
