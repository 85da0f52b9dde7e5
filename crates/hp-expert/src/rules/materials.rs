use crate::context::ExpertContext;
use crate::model::{Category, Priority, Recommendation};
use hp_fluids::{CompatibilityLevel, PipeMaterial, compatibility};

pub fn evaluate(ctx: &ExpertContext<'_>) -> Vec<Recommendation> {
    let mut materials: Vec<PipeMaterial> = Vec::with_capacity(2);
    for (_, leg) in ctx.legs() {
        if !materials.contains(&leg.material) {
            materials.push(leg.material);
        }
    }

    let fluid = ctx.fluid.display_name();
    let mut recs = Vec::new();

    for &material in &materials {
        let c = compatibility(ctx.fluid, material);
        let substitutes: Vec<String> = c
            .substitutes
            .iter()
            .map(|s| format!("Replace with {s}"))
            .collect();

        match c.level {
            CompatibilityLevel::Incompatible => recs.push(
                Recommendation::new(
                    Category::Materials,
                    Priority::High,
                    format!("{material} is not suitable for {fluid}"),
                )
                .description(format!("Incompatible pairing: {}.", c.reason))
                .impact("Premature pipe failure, leaks and contamination of the fluid")
                .solutions(substitutes),
            ),
            CompatibilityLevel::Caution => recs.push(
                Recommendation::new(
                    Category::Materials,
                    Priority::Medium,
                    format!("{material} with {fluid} needs attention"),
                )
                .description(format!("Use with caution: {}.", c.reason))
                .impact("Reduced service life if operating conditions drift")
                .solutions(substitutes),
            ),
            CompatibilityLevel::Compatible | CompatibilityLevel::Unrated => {}
        }

        let max = material.max_temperature_c();
        if ctx.temperature_c > max {
            recs.push(
                Recommendation::new(
                    Category::Materials,
                    Priority::High,
                    format!("{material} above its temperature rating"),
                )
                .description(format!(
                    "{material} is rated up to {max:.0} °C; the fluid is at {:.1} °C.",
                    ctx.temperature_c
                ))
                .impact("Softening, creep and loss of pressure rating")
                .solutions([
                    "Use steel or stainless steel pipe".to_string(),
                    "Cool the fluid before the pump".to_string(),
                ]),
            );
        }
    }

    if recs.is_empty() {
        let names: Vec<String> = materials.iter().map(|m| m.to_string()).collect();
        recs.push(
            Recommendation::new(Category::Materials, Priority::Low, "General compatibility check")
                .description(format!(
                    "No known issue between {fluid} and {}. Confirm gaskets and pump wetted parts with the supplier.",
                    names.join(" / ")
                ))
                .impact("Avoids surprises from elastomers and seals")
                .solutions(["Check the elastomer compatibility chart for seals and gaskets"]),
        );
    }

    recs
}
