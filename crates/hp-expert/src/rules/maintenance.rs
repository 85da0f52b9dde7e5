use crate::context::ExpertContext;
use crate::model::{Category, Priority, Recommendation};

/// Inspection interval for a yearly running time.
pub fn inspection_interval(operating_hours: f64) -> &'static str {
    if operating_hours >= 6000.0 {
        "monthly"
    } else if operating_hours >= 3000.0 {
        "quarterly"
    } else {
        "half-yearly"
    }
}

pub fn evaluate(ctx: &ExpertContext<'_>) -> Vec<Recommendation> {
    let hours = ctx.site.operating_hours;
    let interval = inspection_interval(hours);
    vec![
        Recommendation::new(Category::Maintenance, Priority::Low, "Preventive maintenance")
            .description(format!(
                "For {hours:.0} h of operation per year, inspect the pump set {interval}."
            ))
            .impact("Early detection of wear keeps efficiency and availability high")
            .solutions([
                "Check vibration and bearing temperature",
                "Inspect the mechanical seal for leaks",
                "Clean suction strainers",
                "Record current, pressure and flow against the commissioning values",
            ]),
    ]
}
