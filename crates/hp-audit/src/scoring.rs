//! Domain and overall health scores.

use crate::error::AuditResult;
use crate::metrics::{AuditMetric, Domain};
use crate::settings::ScoreWeights;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Critical,
    Poor,
    Fair,
    Good,
}

impl Severity {
    pub fn from_score(score: f64) -> Self {
        if score >= 85.0 {
            Severity::Good
        } else if score >= 70.0 {
            Severity::Fair
        } else if score >= 50.0 {
            Severity::Poor
        } else {
            Severity::Critical
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Severity::Good => "good",
            Severity::Fair => "fair",
            Severity::Poor => "poor",
            Severity::Critical => "critical",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DomainScores {
    pub hydraulic: f64,
    pub electrical: f64,
    pub mechanical: f64,
    pub operational: f64,
}

impl DomainScores {
    pub fn get(&self, domain: Domain) -> f64 {
        match domain {
            Domain::Hydraulic => self.hydraulic,
            Domain::Electrical => self.electrical,
            Domain::Mechanical => self.mechanical,
            Domain::Operational => self.operational,
        }
    }
}

/// 100 minus the penalties of the domain's metrics, clamped to [0, 100].
pub fn domain_score(metrics: &[AuditMetric], domain: Domain) -> f64 {
    let penalties: f64 = metrics
        .iter()
        .filter(|m| m.domain == domain)
        .map(|m| m.penalty)
        .sum();
    (100.0 - penalties).clamp(0.0, 100.0)
}

pub fn domain_scores(metrics: &[AuditMetric]) -> DomainScores {
    DomainScores {
        hydraulic: domain_score(metrics, Domain::Hydraulic),
        electrical: domain_score(metrics, Domain::Electrical),
        mechanical: domain_score(metrics, Domain::Mechanical),
        operational: domain_score(metrics, Domain::Operational),
    }
}

/// Weighted average of the domain scores.
pub fn overall_score(scores: &DomainScores, weights: &ScoreWeights) -> AuditResult<f64> {
    weights.validate()?;
    let weighted = scores.hydraulic * weights.hydraulic
        + scores.electrical * weights.electrical
        + scores.mechanical * weights.mechanical
        + scores.operational * weights.operational;
    Ok((weighted / weights.total()).clamp(0.0, 100.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::MetricKind;

    fn metric(domain: Domain, measured: f64, required: f64) -> AuditMetric {
        AuditMetric::new("x", domain, measured, required, 10.0, MetricKind::Target).unwrap()
    }

    #[test]
    fn severity_bands() {
        assert_eq!(Severity::from_score(100.0), Severity::Good);
        assert_eq!(Severity::from_score(85.0), Severity::Good);
        assert_eq!(Severity::from_score(84.9), Severity::Fair);
        assert_eq!(Severity::from_score(70.0), Severity::Fair);
        assert_eq!(Severity::from_score(50.0), Severity::Poor);
        assert_eq!(Severity::from_score(49.9), Severity::Critical);
    }

    #[test]
    fn empty_domain_scores_full_marks() {
        let metrics = [metric(Domain::Hydraulic, 45.0, 60.0)];
        let scores = domain_scores(&metrics);
        assert_eq!(scores.hydraulic, 70.0);
        assert_eq!(scores.electrical, 100.0);
    }

    #[test]
    fn score_is_clamped_at_zero() {
        let metrics = [
            metric(Domain::Hydraulic, 10.0, 60.0),
            metric(Domain::Hydraulic, 200.0, 60.0),
        ];
        assert_eq!(domain_score(&metrics, Domain::Hydraulic), 0.0);
    }

    #[test]
    fn equal_weights_average() {
        let scores = DomainScores {
            hydraulic: 70.0,
            electrical: 100.0,
            mechanical: 90.0,
            operational: 60.0,
        };
        let overall = overall_score(&scores, &ScoreWeights::default()).unwrap();
        assert!((overall - 80.0).abs() < 1e-12);
    }

    #[test]
    fn weights_need_not_sum_to_one() {
        let scores = DomainScores {
            hydraulic: 50.0,
            electrical: 100.0,
            mechanical: 100.0,
            operational: 100.0,
        };
        let weights = ScoreWeights {
            hydraulic: 2.0,
            electrical: 1.0,
            mechanical: 1.0,
            operational: 0.0,
        };
        let overall = overall_score(&scores, &weights).unwrap();
        assert!((overall - 75.0).abs() < 1e-12);
    }
}
