use crate::context::ExpertContext;
use crate::model::{Category, Priority, Recommendation};
use hp_hydraulics::CAVITATION_REMEDIES;

pub fn evaluate(ctx: &ExpertContext<'_>) -> Vec<Recommendation> {
    let npshd = ctx.npshd;

    if npshd.cavitation_risk {
        let detail = match (npshd.npsh_required, npshd.npsh_margin) {
            (Some(req), Some(margin)) => format!(
                "NPSHd is {:.2} m against {req:.2} m required (margin {margin:.2} m).",
                npshd.npshd
            ),
            _ => format!("NPSHd is {:.2} m.", npshd.npshd),
        };
        return vec![
            Recommendation::new(Category::Critical, Priority::Critical, "Cavitation risk")
                .description(format!(
                    "The pump will cavitate at the duty point. {detail}"
                ))
                .impact("Impeller erosion, noise, vibration and a collapse of head and flow")
                .solutions(CAVITATION_REMEDIES),
        ];
    }

    match npshd.npsh_margin {
        Some(margin) if margin < ctx.limits.npsh_safety_margin => vec![
            Recommendation::new(Category::Hydraulic, Priority::High, "Insufficient NPSH margin")
                .description(format!(
                    "The NPSH margin is {margin:.2} m, below the recommended {:.1} m.",
                    ctx.limits.npsh_safety_margin
                ))
                .impact("Cavitation may start with fouled strainers, hotter fluid or higher flow")
                .solutions(CAVITATION_REMEDIES.iter().take(3).copied()),
        ],
        _ => Vec::new(),
    }
}
