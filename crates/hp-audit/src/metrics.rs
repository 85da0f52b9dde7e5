//! Measured-versus-reference comparisons.

use crate::error::{AuditError, AuditResult};
use crate::input::AuditInput;
use crate::settings::DefaultLimits;
use serde::Serialize;

/// Score points lost per percent beyond the tolerance band.
pub const PENALTY_PER_PERCENT: f64 = 2.0;
/// Largest penalty a single metric can carry.
pub const MAX_PENALTY: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Domain {
    Hydraulic,
    Electrical,
    Mechanical,
    Operational,
}

impl Domain {
    pub const ALL: [Domain; 4] = [
        Domain::Hydraulic,
        Domain::Electrical,
        Domain::Mechanical,
        Domain::Operational,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Domain::Hydraulic => "hydraulic",
            Domain::Electrical => "electrical",
            Domain::Mechanical => "mechanical",
            Domain::Operational => "operational",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKind {
    /// Penalized on either side of the reference.
    Target,
    /// Penalized only above the reference.
    UpperLimit,
    /// Penalized only below the reference.
    LowerLimit,
}

/// Which side of the reference a measurement sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Below,
    Above,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuditMetric {
    pub parameter: &'static str,
    pub domain: Domain,
    pub measured: f64,
    pub required: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub design: Option<f64>,
    pub deviation_percent: f64,
    /// ± band (%) for targets, allowance past the limit for one-sided kinds
    pub tolerance_percent: f64,
    pub kind: MetricKind,
    pub within_tolerance: bool,
    pub penalty: f64,
}

/// Signed deviation of `measured` from `required` (%).
pub fn deviation_percent(
    parameter: &'static str,
    measured: f64,
    required: f64,
) -> AuditResult<f64> {
    if !measured.is_finite() || !required.is_finite() {
        return Err(AuditError::NonFinite { what: parameter });
    }
    if required <= 0.0 {
        return Err(AuditError::InvalidReference {
            parameter,
            value: required,
        });
    }
    Ok((measured - required) / required * 100.0)
}

/// Percent beyond the tolerance band; zero inside it.
pub fn excess_percent(deviation: f64, tolerance: f64, kind: MetricKind) -> f64 {
    match kind {
        MetricKind::Target => (deviation.abs() - tolerance).max(0.0),
        MetricKind::UpperLimit => (deviation - tolerance).max(0.0),
        MetricKind::LowerLimit => (-deviation - tolerance).max(0.0),
    }
}

pub fn penalty(deviation: f64, tolerance: f64, kind: MetricKind) -> f64 {
    (excess_percent(deviation, tolerance, kind) * PENALTY_PER_PERCENT).min(MAX_PENALTY)
}

impl AuditMetric {
    pub fn new(
        parameter: &'static str,
        domain: Domain,
        measured: f64,
        required: f64,
        tolerance_percent: f64,
        kind: MetricKind,
    ) -> AuditResult<Self> {
        let deviation = deviation_percent(parameter, measured, required)?;
        let penalty = penalty(deviation, tolerance_percent, kind);
        Ok(Self {
            parameter,
            domain,
            measured,
            required,
            design: None,
            deviation_percent: deviation,
            tolerance_percent,
            kind,
            within_tolerance: penalty == 0.0,
            penalty,
        })
    }

    pub fn with_design(mut self, design: f64) -> Self {
        self.design = Some(design);
        self
    }

    pub fn direction(&self) -> Direction {
        if self.deviation_percent < 0.0 {
            Direction::Below
        } else {
            Direction::Above
        }
    }
}

struct MetricRule {
    parameter: &'static str,
    domain: Domain,
    tolerance: f64,
    kind: MetricKind,
}

const fn rule(
    parameter: &'static str,
    domain: Domain,
    tolerance: f64,
    kind: MetricKind,
) -> MetricRule {
    MetricRule {
        parameter,
        domain,
        tolerance,
        kind,
    }
}

const FLOW: MetricRule = rule("flow", Domain::Hydraulic, 10.0, MetricKind::Target);
const HMT: MetricRule = rule("hmt", Domain::Hydraulic, 10.0, MetricKind::Target);
const EFFICIENCY: MetricRule = rule("efficiency", Domain::Hydraulic, 10.0, MetricKind::LowerLimit);
const CURRENT: MetricRule = rule("current", Domain::Electrical, 10.0, MetricKind::UpperLimit);
const VOLTAGE: MetricRule = rule("voltage", Domain::Electrical, 5.0, MetricKind::Target);
const POWER_FACTOR: MetricRule =
    rule("power_factor", Domain::Electrical, 10.0, MetricKind::LowerLimit);
const VIBRATION: MetricRule = rule("vibration", Domain::Mechanical, 0.0, MetricKind::UpperLimit);
const BEARING: MetricRule = rule(
    "bearing_temperature",
    Domain::Mechanical,
    0.0,
    MetricKind::UpperLimit,
);
const NOISE: MetricRule = rule("noise", Domain::Mechanical, 0.0, MetricKind::UpperLimit);
const MOTOR_TEMPERATURE: MetricRule = rule(
    "motor_temperature",
    Domain::Operational,
    0.0,
    MetricKind::UpperLimit,
);
const STARTS: MetricRule = rule(
    "starts_per_hour",
    Domain::Operational,
    0.0,
    MetricKind::UpperLimit,
);
const MAINTENANCE: MetricRule = rule(
    "hours_since_maintenance",
    Domain::Operational,
    0.0,
    MetricKind::UpperLimit,
);

fn push(
    out: &mut Vec<AuditMetric>,
    s: &MetricRule,
    measured: Option<f64>,
    required: Option<f64>,
) -> AuditResult<()> {
    if let (Some(m), Some(r)) = (measured, required) {
        out.push(AuditMetric::new(s.parameter, s.domain, m, r, s.tolerance, s.kind)?);
    }
    Ok(())
}

/// Every comparison the input supports, in domain order.
pub fn collect_metrics(input: &AuditInput, limits: &DefaultLimits) -> AuditResult<Vec<AuditMetric>> {
    let mut out = Vec::new();

    push(&mut out, &FLOW, input.measured_flow, input.required_flow)?;
    push(&mut out, &HMT, input.measured_hmt, input.required_hmt)?;
    if let (Some(m), Some(design)) = (input.measured_efficiency, input.design_efficiency) {
        let s = &EFFICIENCY;
        out.push(
            AuditMetric::new(s.parameter, s.domain, m, design, s.tolerance, s.kind)?
                .with_design(design),
        );
    }

    push(&mut out, &CURRENT, input.measured_current, input.rated_current)?;
    push(&mut out, &VOLTAGE, input.measured_voltage, input.rated_voltage)?;
    push(
        &mut out,
        &POWER_FACTOR,
        input.measured_power_factor,
        input.rated_power_factor,
    )?;

    push(
        &mut out,
        &VIBRATION,
        input.vibration_level,
        Some(input.vibration_limit.unwrap_or(limits.vibration)),
    )?;
    push(
        &mut out,
        &BEARING,
        input.bearing_temperature,
        Some(
            input
                .bearing_temperature_limit
                .unwrap_or(limits.bearing_temperature),
        ),
    )?;
    push(
        &mut out,
        &NOISE,
        input.noise_level,
        Some(input.noise_limit.unwrap_or(limits.noise)),
    )?;

    push(
        &mut out,
        &MOTOR_TEMPERATURE,
        input.motor_temperature,
        Some(
            input
                .motor_temperature_limit
                .unwrap_or(limits.motor_temperature),
        ),
    )?;
    push(
        &mut out,
        &STARTS,
        input.starts_per_hour,
        Some(input.max_starts_per_hour.unwrap_or(limits.starts_per_hour)),
    )?;
    push(
        &mut out,
        &MAINTENANCE,
        input.hours_since_maintenance,
        Some(
            input
                .maintenance_interval
                .unwrap_or(limits.maintenance_interval),
        ),
    )?;

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flow_shortfall_deviation() {
        let d = deviation_percent("flow", 45.0, 60.0).unwrap();
        assert!((d + 25.0).abs() < 1e-12);
    }

    #[test]
    fn non_positive_reference_is_rejected() {
        assert!(matches!(
            deviation_percent("flow", 45.0, 0.0),
            Err(AuditError::InvalidReference { parameter: "flow", .. })
        ));
        assert!(deviation_percent("flow", 45.0, -1.0).is_err());
    }

    #[test]
    fn target_penalizes_both_sides() {
        assert_eq!(penalty(-25.0, 10.0, MetricKind::Target), 30.0);
        assert_eq!(penalty(25.0, 10.0, MetricKind::Target), 30.0);
        assert_eq!(penalty(8.0, 10.0, MetricKind::Target), 0.0);
    }

    #[test]
    fn limit_penalizes_only_above() {
        assert_eq!(penalty(-60.0, 0.0, MetricKind::UpperLimit), 0.0);
        assert_eq!(penalty(20.0, 0.0, MetricKind::UpperLimit), 40.0);
        assert_eq!(penalty(500.0, 0.0, MetricKind::UpperLimit), MAX_PENALTY);
    }

    #[test]
    fn lower_limit_penalizes_only_shortfall() {
        assert_eq!(penalty(20.0, 10.0, MetricKind::LowerLimit), 0.0);
        assert_eq!(penalty(-5.0, 10.0, MetricKind::LowerLimit), 0.0);
        assert_eq!(penalty(-25.0, 10.0, MetricKind::LowerLimit), 30.0);
    }

    #[test]
    fn efficiency_above_design_is_not_penalized() {
        let input = AuditInput {
            measured_efficiency: Some(85.0),
            design_efficiency: Some(70.0),
            measured_power_factor: Some(0.95),
            rated_power_factor: Some(0.8),
            ..AuditInput::default()
        };
        let metrics = collect_metrics(&input, &DefaultLimits::default()).unwrap();
        assert_eq!(metrics.len(), 2);
        assert!(metrics.iter().all(|m| m.within_tolerance && m.penalty == 0.0));
    }

    #[test]
    fn metrics_need_both_values() {
        let input = AuditInput {
            measured_flow: Some(45.0),
            measured_hmt: Some(30.0),
            required_hmt: Some(30.0),
            vibration_level: Some(2.0),
            ..AuditInput::default()
        };
        let metrics = collect_metrics(&input, &DefaultLimits::default()).unwrap();
        let names: Vec<_> = metrics.iter().map(|m| m.parameter).collect();
        assert_eq!(names, ["hmt", "vibration"]);
        assert_eq!(metrics[1].required, 4.5);
    }

    #[test]
    fn efficiency_carries_design_value() {
        let input = AuditInput {
            measured_efficiency: Some(62.0),
            design_efficiency: Some(75.0),
            ..AuditInput::default()
        };
        let metrics = collect_metrics(&input, &DefaultLimits::default()).unwrap();
        assert_eq!(metrics[0].design, Some(75.0));
        assert_eq!(metrics[0].direction(), Direction::Below);
        assert!(!metrics[0].within_tolerance);
    }
}
