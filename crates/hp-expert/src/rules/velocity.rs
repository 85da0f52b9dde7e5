use crate::context::ExpertContext;
use crate::model::{Category, DiameterOption, Priority, Recommendation};
use hp_core::units::{m3ph, mm};
use hp_fluids::{FluidClass, FluidProperties};
use hp_hydraulics::{PipeRun, velocity};

/// Nominal diameters (mm) offered as alternatives.
pub const STANDARD_DN: [u32; 19] = [
    15, 20, 25, 32, 40, 50, 65, 80, 100, 125, 150, 200, 250, 300, 350, 400, 450, 500, 600,
];

const LARGEST_DN: u32 = STANDARD_DN[STANDARD_DN.len() - 1];

/// Alternatives proposed per leg.
pub const MAX_DIAMETER_OPTIONS: usize = 3;

pub fn evaluate(ctx: &ExpertContext<'_>) -> Vec<Recommendation> {
    let fluid = ctx.fluid_properties();
    let mut recs = Vec::new();

    for (leg, run) in ctx.legs() {
        let ceiling = if leg == "Suction" {
            ctx.limits.suction_velocity_max
        } else {
            ctx.limits.discharge_velocity_max
        };
        let Ok(v) = velocity(m3ph(ctx.flow_m3h), run.diameter) else {
            continue;
        };
        let v = v.value;

        if v > ceiling {
            let options = diameter_options(ctx, run, &fluid);
            let priority = if v > ctx.limits.hard_velocity_max {
                Priority::High
            } else {
                Priority::Medium
            };
            let rec = Recommendation::new(
                Category::Velocity,
                priority,
                format!("{leg} velocity too high"),
            )
            .description(format!(
                "{leg} velocity is {v:.2} m/s for a recommended maximum of {ceiling:.1} m/s."
            ))
            .impact("Higher head loss, erosion, noise and water hammer risk");
            let rec = if options.is_empty() {
                rec.solutions([
                    format!(
                        "No standard size up to DN{LARGEST_DN} stays under {:.1} m/s: split the flow over parallel lines",
                        ctx.limits.hard_velocity_max
                    ),
                    "Reduce the flow per line or use a custom large-bore pipe".to_string(),
                ])
            } else {
                rec.solutions(
                    options
                        .iter()
                        .map(|o| format!("Use DN{} ({:.2} m/s)", o.dn, o.velocity)),
                )
                .diameter_options(options)
            };
            recs.push(rec);
        } else if v > 0.0
            && v < ctx.limits.settling_velocity_min
            && ctx.fluid.has_class(FluidClass::Settling)
        {
            recs.push(
                Recommendation::new(
                    Category::Velocity,
                    Priority::Medium,
                    format!("{leg} velocity too low for suspended solids"),
                )
                .description(format!(
                    "{leg} velocity is {v:.2} m/s; solids settle below {:.1} m/s.",
                    ctx.limits.settling_velocity_min
                ))
                .impact("Deposits, blockages and septic conditions")
                .solutions(["Reduce the pipe diameter", "Schedule periodic flushing"]),
            );
        }
    }

    recs
}

/// Next standard sizes above the current bore, never faster than the hard ceiling.
pub fn diameter_options(
    ctx: &ExpertContext<'_>,
    run: &PipeRun,
    fluid: &FluidProperties,
) -> Vec<DiameterOption> {
    let current_mm = run.diameter.value * 1000.0;
    let flow = m3ph(ctx.flow_m3h);
    let current_loss = run.losses(flow, fluid).map(|l| l.total.value).ok();

    STANDARD_DN
        .iter()
        .filter(|&&dn| f64::from(dn) > current_mm + 1e-9)
        .filter_map(|&dn| {
            let mut candidate = run.clone();
            candidate.diameter = mm(f64::from(dn));
            let losses = candidate.losses(flow, fluid).ok()?;
            let v = losses.velocity.value;
            if v > ctx.limits.hard_velocity_max {
                return None;
            }
            let change = match current_loss {
                Some(old) if old > 0.0 => (losses.total.value - old) / old * 100.0,
                _ => 0.0,
            };
            let cost_ratio = (f64::from(dn) / current_mm).powf(1.5);
            Some(DiameterOption {
                dn,
                velocity: v,
                head_loss_change_percent: change,
                cost_note: format!("about +{:.0} % pipe cost", (cost_ratio - 1.0) * 100.0),
            })
        })
        .take(MAX_DIAMETER_OPTIONS)
        .collect()
}
