//! Runs every rule group and orders the result.

use crate::context::ExpertContext;
use crate::model::Recommendation;
use crate::rules::RULE_GROUPS;
use tracing::debug;

/// All recommendations for a context, most urgent first.
///
/// Groups run in a fixed order; the stable sort keeps that order within a
/// priority rank. The materials and maintenance groups always contribute, so
/// the list is never empty.
pub fn recommend(ctx: &ExpertContext<'_>) -> Vec<Recommendation> {
    let mut all = Vec::new();
    for (name, group) in RULE_GROUPS {
        let recs = group(ctx);
        debug!(group = name, count = recs.len(), "rule group evaluated");
        all.extend(recs);
    }
    all.sort_by_key(|r| r.priority);
    all
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::fixtures::{evaluate, water_installation};
    use crate::context::Installation;
    use crate::model::{Category, Priority};
    use hp_hydraulics::{StartingMethod, SuctionType};

    #[test]
    fn healthy_installation_still_gets_advice() {
        let eval = evaluate(water_installation());
        let recs = recommend(&eval.context());
        assert!(!recs.is_empty());
        assert!(recs.iter().all(|r| r.priority == Priority::Low));
        // Ties keep group order: materials before maintenance.
        assert_eq!(recs[0].category, Category::Materials);
        assert_eq!(recs.last().map(|r| r.category), Some(Category::Maintenance));
    }

    #[test]
    fn sorted_by_priority() {
        let eval = evaluate(Installation {
            suction_type: SuctionType::SuctionLift,
            hasp: 7.0,
            temperature_c: 70.0,
            flow_m3h: 100.0,
            npsh_required: Some(5.0),
            starting_method: StartingMethod::DirectOnLine,
            pump_efficiency: 55.0,
            ..water_installation()
        });
        let recs = recommend(&eval.context());
        assert_eq!(recs[0].priority, Priority::Critical);
        assert!(recs.windows(2).all(|w| w[0].priority <= w[1].priority));
    }
}
