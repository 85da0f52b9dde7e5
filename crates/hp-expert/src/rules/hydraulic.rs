use crate::context::ExpertContext;
use crate::model::{Category, Priority, Recommendation};
use hp_fluids::FluidClass;
use hp_hydraulics::primitives::LAMINAR_REYNOLDS;

pub fn evaluate(ctx: &ExpertContext<'_>) -> Vec<Recommendation> {
    let mut recs = Vec::new();

    if ctx.hmt.hmt <= 0.0 {
        recs.push(
            Recommendation::new(Category::Hydraulic, Priority::High, "No pumping head required")
                .description(format!(
                    "HMT is {:.2} m: the source pressure already covers the duty.",
                    ctx.hmt.hmt
                ))
                .impact("A pump would run at shut-off or be driven backwards")
                .solutions([
                    "Check the heights and the required outlet pressure",
                    "Consider gravity flow with a control valve",
                ]),
        );
    }

    let re = ctx.performance.reynolds_number;
    if re > 0.0 && re < LAMINAR_REYNOLDS && ctx.fluid.has_class(FluidClass::Viscous) {
        recs.push(
            Recommendation::new(Category::Hydraulic, Priority::Medium, "Laminar flow of a viscous fluid")
                .description(format!(
                    "Reynolds number {re:.0}: water-based pump curves overstate head and efficiency."
                ))
                .impact("The pump may fall short of the duty point and the motor may overload")
                .solutions([
                    "Apply a viscosity correction (ISO/TR 17766) to the pump curve",
                    "Consider a positive displacement pump",
                    "Heat the fluid to lower its viscosity",
                ]),
        );
    }

    recs
}
