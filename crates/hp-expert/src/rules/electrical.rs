use crate::context::ExpertContext;
use crate::model::{Category, Priority, Recommendation};
use hp_hydraulics::StartingMethod;

/// Direct-on-line starting is discouraged above this power (kW).
pub const DOL_MAX_POWER_KW: f64 = 5.5;
/// Cable runs longer than this get a section check (m).
pub const LONG_CABLE_M: f64 = 100.0;
pub const TARGET_POWER_FACTOR: f64 = 0.95;
pub const DERATING_ALTITUDE_M: f64 = 1000.0;
pub const DERATING_AMBIENT_C: f64 = 40.0;
pub const HUMIDITY_LIMIT_PERCENT: f64 = 80.0;

/// Reactive power (kvar) needed to raise the power factor to the target.
pub fn correction_kvar(power_kw: f64, power_factor: f64, target: f64) -> f64 {
    let tan = |pf: f64| (1.0 - pf * pf).max(0.0).sqrt() / pf;
    (power_kw * (tan(power_factor) - tan(target))).max(0.0)
}

/// Motor output derating (%) for altitude and ambient temperature.
pub fn derating_percent(altitude: f64, ambient: f64) -> f64 {
    let altitude_part = ((altitude - DERATING_ALTITUDE_M) / 100.0).max(0.0);
    let ambient_part = (ambient - DERATING_AMBIENT_C).max(0.0);
    altitude_part + ambient_part
}

pub fn evaluate(ctx: &ExpertContext<'_>) -> Vec<Recommendation> {
    let mut recs = Vec::new();
    let sizing = &ctx.performance.electrical_sizing;
    let p1 = ctx.absorbed_power_kw();

    if sizing.starting_method == StartingMethod::DirectOnLine && p1 > DOL_MAX_POWER_KW {
        recs.push(
            Recommendation::new(Category::Electrical, Priority::High, "Direct-on-line start too large")
                .description(format!(
                    "A {p1:.1} kW motor started direct-on-line draws about {:.0} A at start.",
                    sizing.starting_current
                ))
                .impact("Voltage dips on the supply, mechanical shock and water hammer")
                .solutions([
                    format!("Use a {} starter", sizing.recommended_starting_method.label()),
                    "Consider a variable frequency drive for flow control".to_string(),
                ]),
        );
    } else if sizing.starting_method != sizing.recommended_starting_method {
        recs.push(
            Recommendation::new(Category::Electrical, Priority::Medium, "Starting method")
                .description(format!(
                    "{} is selected; {} is usual for {p1:.1} kW.",
                    sizing.starting_method.label(),
                    sizing.recommended_starting_method.label()
                ))
                .impact("Starting current and mechanical stress differ from common practice")
                .solutions([format!(
                    "Review the starter: {}",
                    sizing.recommended_starting_method.label()
                )]),
        );
    }

    let long_run = ctx.cable_length > LONG_CABLE_M;
    let high_drop = sizing.voltage_drop_percent > ctx.limits.max_voltage_drop_percent;
    if long_run || high_drop {
        recs.push(
            Recommendation::new(Category::Electrical, Priority::Medium, "Cable sizing")
                .description(format!(
                    "{:.0} m of {:.1} mm² cable gives a {:.2} % voltage drop.",
                    ctx.cable_length, sizing.cable_section, sizing.voltage_drop_percent
                ))
                .impact("Motor overheating and reduced starting torque")
                .solutions([
                    format!("Keep at least {:.1} mm² per conductor", sizing.cable_section),
                    "Move the control panel closer to the pump".to_string(),
                ]),
        );
    }

    if ctx.power_factor < ctx.limits.power_factor_alert {
        let kvar = correction_kvar(p1, ctx.power_factor, TARGET_POWER_FACTOR);
        recs.push(
            Recommendation::new(Category::Electrical, Priority::Medium, "Power factor correction")
                .description(format!(
                    "Power factor is {:.2}; about {kvar:.1} kvar raises it to {TARGET_POWER_FACTOR:.2}.",
                    ctx.power_factor
                ))
                .impact("Reactive energy penalties and higher line current")
                .solutions([format!("Install a {kvar:.1} kvar capacitor bank")]),
        );
    }

    let site = ctx.site;
    if site.altitude > DERATING_ALTITUDE_M || site.ambient_temperature > DERATING_AMBIENT_C {
        let derate = derating_percent(site.altitude, site.ambient_temperature);
        recs.push(
            Recommendation::new(Category::Electrical, Priority::Medium, "Motor derating")
                .description(format!(
                    "At {:.0} m and {:.0} °C ambient the motor output must be derated by about {derate:.0} %.",
                    site.altitude, site.ambient_temperature
                ))
                .impact("An undersized motor runs hot and trips")
                .solutions([
                    format!(
                        "Select a motor rated at least {:.1} kW",
                        p1 / (1.0 - derate.min(50.0) / 100.0)
                    ),
                    "Improve ventilation of the pump room".to_string(),
                ]),
        );
    }

    if site.humidity > HUMIDITY_LIMIT_PERCENT {
        recs.push(
            Recommendation::new(Category::Electrical, Priority::Low, "Humid environment")
                .description(format!("Relative humidity of {:.0} %.", site.humidity))
                .impact("Condensation in the terminal box and insulation breakdown")
                .solutions([
                    "Use IP55 or better enclosures",
                    "Fit anti-condensation heaters",
                ]),
        );
    }

    recs
}
