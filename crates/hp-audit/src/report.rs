//! The audit report: scores, diagnostics, actions, economics and summary.

use crate::actions::{AuditRecommendation, recommend};
use crate::error::{AuditError, AuditResult};
use crate::input::AuditInput;
use crate::metrics::{AuditMetric, Domain, collect_metrics};
use crate::scoring::{DomainScores, Severity, domain_scores, overall_score};
use crate::settings::AuditSettings;
use serde::Serialize;
use tracing::debug;

/// Share of absorbed energy recoverable when hydraulic and electrical scores are zero.
pub const MAX_RECOVERABLE_ENERGY_SHARE: f64 = 0.30;
/// Yearly maintenance cost avoided by restoring a mechanical score of zero.
pub const AVOIDED_MAINTENANCE_COST: f64 = 2500.0;
/// Cap on the number of actions listed in the executive summary.
const SUMMARY_ACTIONS: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnostic {
    pub category: Domain,
    pub score: f64,
    pub severity: Severity,
    pub narrative: String,
    pub findings: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActionPhase {
    pub phase: &'static str,
    pub timeframe: &'static str,
    pub actions: Vec<String>,
    pub estimated_cost: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActionPlan {
    pub phases: Vec<ActionPhase>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EconomicAnalysis {
    pub total_investment_cost: f64,
    pub annual_savings: f64,
    /// `None` when nothing is saved.
    pub payback_months: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExecutiveSummary {
    pub key_findings: Vec<String>,
    pub critical_issues: Vec<String>,
    pub priority_actions: Vec<String>,
    pub overall_status: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuditReport {
    pub overall_score: f64,
    pub hydraulic_score: f64,
    pub electrical_score: f64,
    pub mechanical_score: f64,
    pub operational_score: f64,
    pub performance_comparisons: Vec<AuditMetric>,
    pub diagnostics: Vec<Diagnostic>,
    pub recommendations: Vec<AuditRecommendation>,
    pub executive_summary: ExecutiveSummary,
    pub economic_analysis: EconomicAnalysis,
    pub action_plan: ActionPlan,
}

fn finding(m: &AuditMetric) -> String {
    format!(
        "{} {:.2} against {:.2} ({:+.1} %, tolerance {:.0} %)",
        m.parameter, m.measured, m.required, m.deviation_percent, m.tolerance_percent
    )
}

pub fn diagnostics(metrics: &[AuditMetric], scores: &DomainScores) -> Vec<Diagnostic> {
    Domain::ALL
        .iter()
        .map(|&domain| {
            let score = scores.get(domain);
            let severity = Severity::from_score(score);
            let measured = metrics.iter().filter(|m| m.domain == domain).count();
            let findings: Vec<String> = metrics
                .iter()
                .filter(|m| m.domain == domain && !m.within_tolerance)
                .map(finding)
                .collect();

            let narrative = if measured == 0 {
                format!(
                    "No {} measurements provided; the domain is scored 100 by default",
                    domain.label()
                )
            } else if findings.is_empty() {
                format!(
                    "All {measured} {} parameters are within tolerance",
                    domain.label()
                )
            } else {
                format!(
                    "{} of {measured} {} parameters are out of tolerance; condition is {}",
                    findings.len(),
                    domain.label(),
                    severity.label()
                )
            };

            Diagnostic {
                category: domain,
                score,
                severity,
                narrative,
                findings,
            }
        })
        .collect()
}

/// Phased plan: `immediate` and `scheduled` are always present.
pub fn action_plan(recommendations: &[AuditRecommendation]) -> ActionPlan {
    let phase = |phase, timeframe, range: std::ops::RangeInclusive<u8>| {
        let selected: Vec<_> = recommendations
            .iter()
            .filter(|r| range.contains(&r.priority))
            .collect();
        ActionPhase {
            phase,
            timeframe,
            actions: selected.iter().map(|r| r.action.to_string()).collect(),
            estimated_cost: selected.iter().map(|r| r.estimated_cost).sum(),
        }
    };

    let immediate = phase("immediate", "0-1 month", 1..=2);
    let short_term = phase("short_term", "1-3 months", 3..=3);
    let mut scheduled = phase("scheduled", "3-12 months", 4..=4);
    scheduled
        .actions
        .push("Follow the preventive maintenance schedule".to_string());

    let mut phases = vec![immediate];
    if !short_term.actions.is_empty() {
        phases.push(short_term);
    }
    phases.push(scheduled);
    ActionPlan { phases }
}

pub fn economic_analysis(
    input: &AuditInput,
    settings: &AuditSettings,
    scores: &DomainScores,
    recommendations: &[AuditRecommendation],
) -> AuditResult<EconomicAnalysis> {
    let investment: f64 = recommendations.iter().map(|r| r.estimated_cost).sum();

    let hours = input
        .operating_hours
        .unwrap_or(settings.limits.operating_hours);
    let price = input
        .electricity_cost
        .unwrap_or(settings.limits.electricity_cost);
    let recoverable = ((100.0 - scores.hydraulic) + (100.0 - scores.electrical)) / 200.0
        * MAX_RECOVERABLE_ENERGY_SHARE;
    let energy = input
        .absorbed_power_kw()
        .map_or(0.0, |p| p.max(0.0) * hours.max(0.0) * price.max(0.0) * recoverable);
    let maintenance = (100.0 - scores.mechanical) / 100.0 * AVOIDED_MAINTENANCE_COST;

    let annual_savings = energy + maintenance;
    if !annual_savings.is_finite() || !investment.is_finite() {
        return Err(AuditError::NonFinite {
            what: "annual savings",
        });
    }

    Ok(EconomicAnalysis {
        total_investment_cost: investment,
        annual_savings,
        payback_months: (annual_savings > 0.0).then(|| investment / (annual_savings / 12.0)),
    })
}

pub fn executive_summary(
    overall: f64,
    diagnostics: &[Diagnostic],
    recommendations: &[AuditRecommendation],
) -> ExecutiveSummary {
    let status = Severity::from_score(overall);

    let mut key_findings = vec![format!(
        "Overall condition is {} ({overall:.0}/100)",
        status.label()
    )];
    key_findings.extend(
        diagnostics
            .iter()
            .filter(|d| d.severity != Severity::Good)
            .map(|d| {
                format!(
                    "{} score {:.0}/100 ({})",
                    d.category.label(),
                    d.score,
                    d.severity.label()
                )
            }),
    );
    if recommendations.is_empty() {
        key_findings.push("All measured parameters are within tolerance".to_string());
    }

    let mut critical_issues: Vec<String> = diagnostics
        .iter()
        .filter(|d| d.severity == Severity::Critical)
        .map(|d| format!("{} condition is critical", d.category.label()))
        .collect();
    critical_issues.extend(
        recommendations
            .iter()
            .filter(|r| r.priority == 1)
            .map(|r| r.description.clone()),
    );

    let priority_actions = recommendations
        .iter()
        .filter(|r| r.priority <= 2)
        .take(SUMMARY_ACTIONS)
        .map(|r| r.action.to_string())
        .collect();

    ExecutiveSummary {
        key_findings,
        critical_issues,
        priority_actions,
        overall_status: status.label(),
    }
}

/// Score an installation from its measurements.
pub fn run_audit(input: &AuditInput, settings: &AuditSettings) -> AuditResult<AuditReport> {
    let metrics = collect_metrics(input, &settings.limits)?;
    let scores = domain_scores(&metrics);
    let overall = overall_score(&scores, &settings.weights)?;

    let mut recommendations: Vec<_> = metrics.iter().filter_map(recommend).collect();
    recommendations.sort_by_key(|r| r.priority);

    let diagnostics = diagnostics(&metrics, &scores);
    let economics = economic_analysis(input, settings, &scores, &recommendations)?;
    let plan = action_plan(&recommendations);
    let summary = executive_summary(overall, &diagnostics, &recommendations);

    debug!(
        metrics = metrics.len(),
        overall,
        hydraulic = scores.hydraulic,
        electrical = scores.electrical,
        mechanical = scores.mechanical,
        operational = scores.operational,
        actions = recommendations.len(),
        "audit scored"
    );

    Ok(AuditReport {
        overall_score: overall,
        hydraulic_score: scores.hydraulic,
        electrical_score: scores.electrical,
        mechanical_score: scores.mechanical,
        operational_score: scores.operational,
        performance_comparisons: metrics,
        diagnostics,
        recommendations,
        executive_summary: summary,
        economic_analysis: economics,
        action_plan: plan,
    })
}
