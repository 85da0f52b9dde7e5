use crate::context::ExpertContext;
use crate::model::{Category, Priority, Recommendation};

/// Suction lifts above this are hard to prime and keep primed (m).
pub const MAX_RECOMMENDED_LIFT_M: f64 = 6.0;
/// Fluids hotter than this should not be lifted (°C).
pub const HOT_FLUID_C: f64 = 60.0;

pub fn evaluate(ctx: &ExpertContext<'_>) -> Vec<Recommendation> {
    let mut recs = Vec::new();
    if !ctx.is_suction_lift() {
        return recs;
    }

    let lift = ctx.hasp.abs();
    if lift > MAX_RECOMMENDED_LIFT_M {
        recs.push(
            Recommendation::new(Category::Installation, Priority::High, "Suction lift too high")
                .description(format!(
                    "The pump lifts {lift:.1} m; above {MAX_RECOMMENDED_LIFT_M:.0} m priming and NPSH become critical."
                ))
                .impact("Loss of prime, cavitation and dry running")
                .solutions([
                    "Lower the pump or raise the source level",
                    "Use a submersible or vertical turbine pump",
                ]),
        );
    }

    if ctx.suction.is_some_and(|s| !s.has_non_return_fitting()) {
        recs.push(
            Recommendation::new(Category::Installation, Priority::High, "No foot valve on suction lift")
                .description("The suction line has neither a foot valve nor a check valve.")
                .impact("The line drains at every stop and the pump runs dry on restart")
                .solutions(["Install a foot valve with strainer", "Add a priming tank"]),
        );
    }

    if ctx.temperature_c > HOT_FLUID_C {
        recs.push(
            Recommendation::new(Category::Installation, Priority::Medium, "Hot fluid on suction lift")
                .description(format!(
                    "Lifting a fluid at {:.0} °C strongly reduces NPSHd through its vapor pressure.",
                    ctx.temperature_c
                ))
                .impact("Flashing in the suction line")
                .solutions([
                    "Install the pump below the tank (flooded suction)",
                    "Cool the fluid before the pump",
                ]),
        );
    }

    recs
}
