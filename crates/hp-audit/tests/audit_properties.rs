use hp_audit::{
    AuditInput, AuditSettings, Domain, MetricKind, ScoreWeights, penalty, run_audit,
};
use proptest::prelude::*;

fn input(flow: f64, current: f64, vibration: f64, starts: f64) -> AuditInput {
    AuditInput {
        measured_flow: Some(flow),
        required_flow: Some(60.0),
        measured_current: Some(current),
        rated_current: Some(10.0),
        vibration_level: Some(vibration),
        starts_per_hour: Some(starts),
        absorbed_power: Some(5.0),
        ..AuditInput::default()
    }
}

#[test]
fn reference_flow_shortfall() {
    let report = run_audit(
        &AuditInput {
            measured_flow: Some(45.0),
            required_flow: Some(60.0),
            ..AuditInput::default()
        },
        &AuditSettings::default(),
    )
    .unwrap();
    let flow = &report.performance_comparisons[0];
    assert_eq!(flow.parameter, "flow");
    assert_eq!(flow.domain, Domain::Hydraulic);
    assert!((flow.deviation_percent + 25.0).abs() < 1e-9);
}

#[test]
fn configured_limits_apply_when_request_omits_them() {
    let mut settings = AuditSettings::default();
    settings.limits.vibration = 10.0;
    let input = AuditInput {
        vibration_level: Some(7.0),
        ..AuditInput::default()
    };
    assert_eq!(run_audit(&input, &settings).unwrap().mechanical_score, 100.0);
    assert!(run_audit(&input, &AuditSettings::default()).unwrap().mechanical_score < 100.0);
}

proptest! {
    #[test]
    fn overall_is_the_weighted_combination(
        flow in 1.0_f64..150.0,
        current in 1.0_f64..30.0,
        vibration in 0.0_f64..20.0,
        starts in 0.0_f64..20.0,
        wh in 0.0_f64..5.0,
        we in 0.0_f64..5.0,
        wm in 0.0_f64..5.0,
        wo in 0.1_f64..5.0,
    ) {
        let settings = AuditSettings {
            weights: ScoreWeights { hydraulic: wh, electrical: we, mechanical: wm, operational: wo },
            ..AuditSettings::default()
        };
        let r = run_audit(&input(flow, current, vibration, starts), &settings).unwrap();
        let expected = (r.hydraulic_score * wh
            + r.electrical_score * we
            + r.mechanical_score * wm
            + r.operational_score * wo)
            / (wh + we + wm + wo);
        prop_assert!((0.0..=100.0).contains(&r.overall_score));
        prop_assert!((r.overall_score - expected).abs() < 1e-9);
    }

    #[test]
    fn larger_deviation_never_scores_higher(
        a in 0.0_f64..200.0,
        extra in 0.0_f64..200.0,
    ) {
        let settings = AuditSettings::default();
        let near = run_audit(&input(60.0 + a * 0.3, 10.0, 1.0, 1.0), &settings).unwrap();
        let far = run_audit(&input(60.0 + (a + extra) * 0.3, 10.0, 1.0, 1.0), &settings).unwrap();
        prop_assert!(far.hydraulic_score <= near.hydraulic_score);
    }

    #[test]
    fn penalty_is_monotone_and_bounded(d in -500.0_f64..500.0, e in 0.0_f64..500.0) {
        for kind in [MetricKind::Target, MetricKind::UpperLimit, MetricKind::LowerLimit] {
            let p = penalty(d, 10.0, kind);
            prop_assert!((0.0..=100.0).contains(&p));
            if d >= 0.0 {
                prop_assert!(penalty(d + e, 10.0, kind) >= p);
            } else {
                prop_assert!(penalty(d - e, 10.0, kind) >= p);
            }
        }
    }

    #[test]
    fn scores_stay_in_range(
        flow in 1.0_f64..1000.0,
        current in 0.0_f64..100.0,
        vibration in 0.0_f64..100.0,
        starts in 0.0_f64..100.0,
    ) {
        let r = run_audit(&input(flow, current, vibration, starts), &AuditSettings::default()).unwrap();
        for s in [r.hydraulic_score, r.electrical_score, r.mechanical_score, r.operational_score] {
            prop_assert!((0.0..=100.0).contains(&s));
        }
        prop_assert!(r.economic_analysis.annual_savings >= 0.0);
    }
}
