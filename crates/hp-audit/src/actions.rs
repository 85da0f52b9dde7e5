//! Corrective actions for out-of-band metrics, keyed by parameter and by the
//! side of the reference the measurement falls on.

use crate::metrics::{AuditMetric, Direction, Domain};
use serde::Serialize;
use Direction::{Above, Below};

struct Action {
    parameter: &'static str,
    /// `None` applies to both sides.
    direction: Option<Direction>,
    action: &'static str,
    cause: &'static str,
    /// Currency units
    cost: f64,
}

const fn action(
    parameter: &'static str,
    direction: Option<Direction>,
    action: &'static str,
    cause: &'static str,
    cost: f64,
) -> Action {
    Action {
        parameter,
        direction,
        action,
        cause,
        cost,
    }
}

static CATALOG: &[Action] = &[
    action(
        "flow",
        Some(Below),
        "Inspect the impeller for wear and clear suction obstructions",
        "Flow below requirement points to a worn impeller, a clogged strainer or air ingress",
        1500.0,
    ),
    action(
        "flow",
        Some(Above),
        "Throttle the discharge or trim the impeller to the duty point",
        "The pump runs right of its duty point, raising power draw and cavitation risk",
        800.0,
    ),
    action(
        "hmt",
        Some(Below),
        "Check wear rings and internal recirculation",
        "Head below requirement indicates internal leakage or a worn impeller",
        1500.0,
    ),
    action(
        "hmt",
        Some(Above),
        "Check discharge valves and pipework for partial closure or fouling",
        "Head above requirement indicates a restricted discharge line",
        600.0,
    ),
    action(
        "efficiency",
        Some(Below),
        "Overhaul the pump hydraulics or replace with a high-efficiency unit",
        "Efficiency below design wastes energy on every operating hour",
        3000.0,
    ),
    action(
        "current",
        None,
        "Check motor load, winding insulation and supply balance",
        "Current above rating overheats the windings and shortens motor life",
        500.0,
    ),
    action(
        "voltage",
        Some(Below),
        "Check transformer tap setting and cable voltage drop",
        "Undervoltage raises current and motor temperature",
        400.0,
    ),
    action(
        "voltage",
        Some(Above),
        "Adjust the transformer tap to bring the supply back to rating",
        "Overvoltage stresses insulation and saturates the motor core",
        300.0,
    ),
    action(
        "power_factor",
        Some(Below),
        "Install or repair power factor correction capacitors",
        "A low power factor increases line current and reactive energy charges",
        1200.0,
    ),
    action(
        "vibration",
        None,
        "Check alignment, balance the rotor and inspect bearings",
        "Vibration above the limit accelerates bearing and seal wear",
        1200.0,
    ),
    action(
        "bearing_temperature",
        None,
        "Regrease or replace bearings and check lubrication",
        "Hot bearings are close to failure",
        800.0,
    ),
    action(
        "noise",
        None,
        "Investigate cavitation and bearing noise sources",
        "Noise above the limit often accompanies cavitation or mechanical damage",
        400.0,
    ),
    action(
        "motor_temperature",
        None,
        "Improve motor ventilation and check for overload",
        "Every 10 °C above rating roughly halves insulation life",
        700.0,
    ),
    action(
        "starts_per_hour",
        None,
        "Enlarge the buffer tank or fit a variable frequency drive",
        "Frequent starts overheat the motor and stress the starter",
        2500.0,
    ),
    action(
        "hours_since_maintenance",
        None,
        "Carry out the overdue maintenance",
        "The maintenance interval has been exceeded",
        600.0,
    ),
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuditRecommendation {
    pub parameter: &'static str,
    pub domain: Domain,
    /// 1 (most urgent) to 4
    pub priority: u8,
    pub action: &'static str,
    pub description: String,
    pub deviation_percent: f64,
    pub estimated_cost: f64,
}

/// Priority from the metric penalty.
pub fn priority_for(penalty: f64) -> u8 {
    if penalty >= 40.0 {
        1
    } else if penalty >= 20.0 {
        2
    } else if penalty >= 10.0 {
        3
    } else {
        4
    }
}

/// Recommendation for an out-of-band metric; `None` when it is within
/// tolerance or the catalog has no entry for it.
pub fn recommend(metric: &AuditMetric) -> Option<AuditRecommendation> {
    if metric.within_tolerance {
        return None;
    }
    let direction = metric.direction();
    let entry = CATALOG.iter().find(|a| {
        a.parameter == metric.parameter && a.direction.is_none_or(|d| d == direction)
    })?;

    Some(AuditRecommendation {
        parameter: metric.parameter,
        domain: metric.domain,
        priority: priority_for(metric.penalty),
        action: entry.action,
        description: format!(
            "{}: measured {:.2} against {:.2} ({:+.1} %)",
            entry.cause, metric.measured, metric.required, metric.deviation_percent
        ),
        deviation_percent: metric.deviation_percent,
        estimated_cost: entry.cost,
    })
}
