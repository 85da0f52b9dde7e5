//! The documents shipped under demos/ must load and compute.

use hp_app::*;
use std::path::Path;

fn demo(name: &str) -> std::path::PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../../demos")
        .join(name)
}

#[test]
fn demo_config_loads() {
    let config = load_config(&demo("hydropump.yaml")).expect("demo config should load");
    assert_eq!(config.limits.curve_points, 21);
    assert_eq!(config.limits.hard_velocity_max, 4.0);
}

#[test]
fn demo_requests_compute() {
    let config = load_config(&demo("hydropump.yaml")).unwrap();
    let engine = Engine::new(config);

    let npshd: NpshdRequest = load_document(&demo("npshd_flooded.yaml")).unwrap();
    assert!(!engine.npshd(&npshd).unwrap().cavitation_risk);

    let npshd: NpshdRequest = load_document(&demo("npshd_hot_lift.yaml")).unwrap();
    assert!(engine.npshd(&npshd).unwrap().cavitation_risk);

    let hmt: HmtRequest = load_document(&demo("hmt_surface.yaml")).unwrap();
    assert!(engine.hmt(&hmt).unwrap().hmt > 28.0);

    let perf: PerformanceRequest = load_document(&demo("performance.json")).unwrap();
    let perf = engine.performance(&perf).unwrap();
    assert_eq!(perf.performance_curves.flow.len(), 21);

    let expert: ExpertRequest = load_document(&demo("expert_borehole.yaml")).unwrap();
    let analysis = engine.expert(&expert).unwrap();
    assert!(!analysis.expert_recommendations.is_empty());

    let audit: AuditRequest = load_document(&demo("audit.yaml")).unwrap();
    let report = engine.audit(&audit).unwrap();
    assert!(report.overall_score < 100.0);
    assert!(!report.recommendations.is_empty());
}
