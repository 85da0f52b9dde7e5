use crate::context::ExpertContext;
use crate::model::{Category, Priority, Recommendation};

/// Losses above this share of HMT are excessive (%).
pub const MAX_LOSS_SHARE_PERCENT: f64 = 30.0;

pub fn evaluate(ctx: &ExpertContext<'_>) -> Vec<Recommendation> {
    let mut recs = Vec::new();
    let hmt = ctx.hmt.hmt;
    let losses = ctx.hmt.total_head_loss;

    if hmt > 0.0 {
        let share = losses / hmt * 100.0;
        if share > MAX_LOSS_SHARE_PERCENT {
            recs.push(
                Recommendation::new(Category::HeadLoss, Priority::Medium, "Excessive head losses")
                    .description(format!(
                        "Pipe losses of {losses:.2} m are {share:.0} % of the {hmt:.2} m total head."
                    ))
                    .impact("A large part of the pumping energy is dissipated in the pipework")
                    .solutions([
                        "Increase the pipe diameters",
                        "Remove unnecessary fittings and valves",
                        "Use smoother pipe material",
                        "Shorten the pipe route",
                    ]),
            );
        }
    }

    for (leg, run) in ctx.legs() {
        let count = run.fitting_count();
        if count > ctx.limits.max_fittings_per_run {
            recs.push(
                Recommendation::new(
                    Category::HeadLoss,
                    Priority::Low,
                    format!("Many fittings on the {} line", leg.to_lowercase()),
                )
                .description(format!(
                    "{count} fittings on the {} line (guideline: at most {}).",
                    leg.to_lowercase(),
                    ctx.limits.max_fittings_per_run
                ))
                .impact("Singular losses add up and raise the required head")
                .solutions([
                    "Replace elbows with long-radius bends",
                    "Group valves and remove redundant ones",
                ]),
            );
        }
    }

    recs
}
