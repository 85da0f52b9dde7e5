use crate::context::ExpertContext;
use crate::model::{Category, Priority, Recommendation};
use hp_hydraulics::{absorbed_power_kw, hydraulic_power_kw};

pub const PUMP_EFFICIENCY_MIN: f64 = 70.0;
pub const MOTOR_EFFICIENCY_MIN: f64 = 85.0;
pub const OVERALL_EFFICIENCY_MIN: f64 = 60.0;

/// Efficiencies assumed after an upgrade (%).
pub const REFERENCE_PUMP_EFFICIENCY: f64 = 80.0;
pub const REFERENCE_MOTOR_EFFICIENCY: f64 = 93.0;

/// Installed cost of a replacement pump set per absorbed kW.
pub const UPGRADE_COST_PER_KW: f64 = 400.0;

/// Energy, cost and savings of an efficiency upgrade.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UpgradeEstimate {
    pub annual_energy_kwh: f64,
    pub annual_cost: f64,
    pub upgraded_power_kw: f64,
    pub annual_savings: f64,
    pub investment: f64,
    /// None when the upgrade saves nothing
    pub payback_years: Option<f64>,
}

pub fn upgrade_estimate(ctx: &ExpertContext<'_>) -> UpgradeEstimate {
    let target_pump = ctx.pump_efficiency.max(REFERENCE_PUMP_EFFICIENCY);
    let target_motor = ctx.motor_efficiency.max(REFERENCE_MOTOR_EFFICIENCY);
    let current = ctx.absorbed_power_kw();
    let upgraded = hydraulic_power_kw(ctx.flow_m3h, ctx.hmt.hmt.max(0.0), target_pump)
        .and_then(|p2| absorbed_power_kw(p2, target_motor))
        .unwrap_or(current)
        .min(current);

    let hours = ctx.site.operating_hours;
    let price = ctx.site.electricity_cost;
    let annual_savings = (current - upgraded) * hours * price;
    let investment = current * UPGRADE_COST_PER_KW;

    UpgradeEstimate {
        annual_energy_kwh: current * hours,
        annual_cost: current * hours * price,
        upgraded_power_kw: upgraded,
        annual_savings,
        investment,
        payback_years: (annual_savings > 0.0).then(|| investment / annual_savings),
    }
}

pub fn evaluate(ctx: &ExpertContext<'_>) -> Vec<Recommendation> {
    let overall = ctx.performance.overall_efficiency;
    let low_pump = ctx.pump_efficiency < PUMP_EFFICIENCY_MIN;
    let low_motor = ctx.motor_efficiency < MOTOR_EFFICIENCY_MIN;
    let low_overall = overall < OVERALL_EFFICIENCY_MIN;
    if !(low_pump || low_motor || low_overall) {
        return Vec::new();
    }

    let est = upgrade_estimate(ctx);
    let priority = if overall < 50.0 {
        Priority::High
    } else {
        Priority::Medium
    };

    let mut solutions = Vec::new();
    if low_pump {
        solutions.push(format!(
            "Select a pump with at least {REFERENCE_PUMP_EFFICIENCY:.0} % efficiency at the duty point"
        ));
    }
    if low_motor {
        solutions.push(format!(
            "Fit a premium efficiency (IE3/IE4) motor, about {REFERENCE_MOTOR_EFFICIENCY:.0} %"
        ));
    }
    solutions.push("Check impeller wear and internal clearances".to_string());

    let payback = match est.payback_years {
        Some(years) => format!("payback about {years:.1} years"),
        None => "no measurable payback".to_string(),
    };

    vec![
        Recommendation::new(Category::Efficiency, priority, "Low energy efficiency")
            .description(format!(
                "Pump {:.1} %, motor {:.1} %, overall {overall:.1} %. The set uses {:.0} kWh/year costing {:.0} per year.",
                ctx.pump_efficiency, ctx.motor_efficiency, est.annual_energy_kwh, est.annual_cost
            ))
            .impact(format!(
                "Upgrading saves about {:.0} per year for an investment of {:.0} ({payback})",
                est.annual_savings, est.investment
            ))
            .solutions(solutions),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::fixtures::{evaluate as run, water_installation};
    use crate::context::Installation;

    #[test]
    fn efficient_set_is_silent() {
        assert!(evaluate(&run(water_installation()).context()).is_empty());
    }

    #[test]
    fn worn_pump_gets_savings_estimate() {
        let eval = run(Installation {
            pump_efficiency: 55.0,
            motor_efficiency: 82.0,
            ..water_installation()
        });
        let ctx = eval.context();
        let est = upgrade_estimate(&ctx);
        assert!(est.upgraded_power_kw < ctx.absorbed_power_kw());
        assert!(est.annual_savings > 0.0);
        assert!(est.payback_years.is_some());

        let recs = evaluate(&ctx);
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].priority, Priority::High);
        assert_eq!(recs[0].solutions.len(), 3);
    }
}
