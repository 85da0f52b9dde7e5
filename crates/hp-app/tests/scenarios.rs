//! End-to-end requests through the service layer.

use hp_app::*;

fn npshd_flooded() -> NpshdRequest {
    serde_json::from_str(
        r#"{
            "suction_type": "flooded",
            "hasp": 2.0,
            "flow_rate": 50.0,
            "fluid_type": "water",
            "temperature": 20.0,
            "pipe_diameter": 100.0,
            "pipe_material": "pvc",
            "pipe_length": 30.0,
            "suction_fittings": [],
            "npsh_required": 3.0
        }"#,
    )
    .unwrap()
}

fn npshd_hot_lift() -> NpshdRequest {
    serde_json::from_str(
        r#"{
            "suction_type": "suction_lift",
            "hasp": 7.0,
            "flow_rate": 100.0,
            "fluid_type": "water",
            "temperature": 70.0,
            "pipe_diameter": 80.0,
            "pipe_material": "steel",
            "pipe_length": 150.0,
            "suction_fittings": [
                {"fitting_type": "foot_valve", "quantity": 1},
                {"fitting_type": "elbow_90", "quantity": 4},
                {"fitting_type": "gate_valve", "quantity": 1}
            ],
            "npsh_required": 5.0
        }"#,
    )
    .unwrap()
}

fn expert_surface() -> ExpertRequest {
    serde_json::from_str(
        r#"{
            "installation_type": "surface",
            "suction_type": "suction_lift",
            "hasp": 3.0,
            "discharge_height": 25.0,
            "useful_pressure": 1.0,
            "suction_pipe_diameter": 100.0,
            "suction_pipe_length": 10.0,
            "suction_pipe_material": "pvc",
            "suction_fittings": [{"fitting_type": "foot_valve", "quantity": 1}],
            "discharge_pipe_diameter": 80.0,
            "discharge_pipe_length": 100.0,
            "discharge_pipe_material": "pehd",
            "discharge_fittings": [{"fitting_type": "elbow_90", "quantity": 3}],
            "fluid_type": "water",
            "temperature": 20.0,
            "flow_rate": 30.0,
            "npsh_required": 3.0,
            "pump_efficiency": 75.0,
            "motor_efficiency": 90.0,
            "voltage": 400.0,
            "power_factor": 0.85,
            "starting_method": "star_delta",
            "cable_length": 40.0,
            "cable_material": "copper",
            "operating_hours": 3000.0,
            "electricity_cost": 0.2
        }"#,
    )
    .unwrap()
}

#[test]
fn flooded_suction_has_ample_margin() {
    let r = Engine::default().npshd(&npshd_flooded()).unwrap();
    assert!(r.npshd > 5.0, "npshd = {}", r.npshd);
    assert!(!r.cavitation_risk);
    assert_eq!(r.atmospheric_pressure, 101_325.0);
}

#[test]
fn hot_suction_lift_cavitates() {
    let r = Engine::default().npshd(&npshd_hot_lift()).unwrap();
    assert!(r.cavitation_risk);
    assert!(!r.warnings.is_empty());
    assert!(!r.recommendations.is_empty());
}

#[test]
fn reference_performance_point() {
    let req: PerformanceRequest = serde_json::from_str(
        r#"{"flow_rate": 50, "hmt": 30, "pipe_diameter": 100, "fluid_type": "water",
            "pipe_material": "steel", "pump_efficiency": 80, "motor_efficiency": 90}"#,
    )
    .unwrap();
    let r = Engine::default().performance(&req).unwrap();
    assert!((r.power_calculations.hydraulic_power - 5.11).abs() < 0.01);
    assert!((r.power_calculations.absorbed_power - 5.68).abs() < 0.01);
    assert!((r.overall_efficiency - 72.0).abs() < 1e-9);

    let json = serde_json::to_string(&r).unwrap().to_lowercase();
    assert!(!json.contains("npsh"));
}

#[test]
fn hmt_requires_suction_pipe_on_surface() {
    let req: HmtRequest = serde_json::from_str(
        r#"{"installation_type": "surface", "discharge_height": 20,
            "discharge_pipe_diameter": 80, "discharge_pipe_length": 50,
            "discharge_pipe_material": "pvc", "fluid_type": "water", "flow_rate": 20}"#,
    )
    .unwrap();
    match Engine::default().hmt(&req) {
        Err(AppError::Validation { field, .. }) => assert_eq!(field, "suction_pipe_diameter"),
        other => panic!("expected validation error, got {other:?}"),
    }

    let submersible = HmtRequest {
        installation_type: "submersible".into(),
        ..req
    };
    let r = Engine::default().hmt(&submersible).unwrap();
    assert!(r.suction_head_loss.is_none());
}

#[test]
fn expert_analysis_is_complete() {
    let analysis = Engine::default().expert(&expert_surface()).unwrap();
    assert!(!analysis.expert_recommendations.is_empty());
    assert!(
        analysis
            .expert_recommendations
            .windows(2)
            .all(|w| w[0].priority <= w[1].priority)
    );
    assert_eq!(
        analysis.system_curves.flow.len(),
        EngineConfig::default().limits.curve_points
    );
    assert!(
        (analysis.energy_consumption.annual_energy_kwh
            - analysis.performance_analysis.power_calculations.absorbed_power * 3000.0)
            .abs()
            < 1e-9
    );
}

#[test]
fn submersible_expert_without_intake() {
    let req: ExpertRequest = serde_json::from_str(
        r#"{"installation_type": "submersible", "discharge_height": 40,
            "discharge_pipe_diameter": 80, "discharge_pipe_length": 60,
            "discharge_pipe_material": "pehd", "fluid_type": "water",
            "flow_rate": 20, "pump_efficiency": 70, "motor_efficiency": 88,
            "voltage": 230}"#,
    )
    .unwrap();
    let analysis = Engine::default().expert(&req).unwrap();
    assert!(analysis.hmt_analysis.suction_velocity.is_none());
    assert!(!analysis.npshd_analysis.cavitation_risk);
}

fn submersible_with_intake(intake: &str) -> ExpertRequest {
    serde_json::from_str(&format!(
        r#"{{"installation_type": "submersible", "discharge_height": 40,
            "discharge_pipe_diameter": 80, "discharge_pipe_length": 60,
            "discharge_pipe_material": "pehd", "fluid_type": "water",
            "flow_rate": 20, "pump_efficiency": 70, "motor_efficiency": 88,
            "voltage": 230{intake}}}"#
    ))
    .unwrap()
}

fn rejected_field(req: &ExpertRequest) -> String {
    match Engine::default().expert(req) {
        Err(AppError::Validation { field, .. }) => field,
        other => panic!("expected a validation error, got {other:?}"),
    }
}

#[test]
fn submersible_intake_is_validated_when_described() {
    let bad_diameter = submersible_with_intake(
        r#", "suction_pipe_diameter": -1, "suction_pipe_length": 2, "suction_pipe_material": "pvc""#,
    );
    assert_eq!(rejected_field(&bad_diameter), "suction_pipe_diameter");

    let partial = submersible_with_intake(r#", "suction_pipe_diameter": 100"#);
    assert_eq!(rejected_field(&partial), "suction_pipe_length");

    let unknown_material = submersible_with_intake(
        r#", "suction_pipe_diameter": 100, "suction_pipe_length": 2, "suction_pipe_material": "wood""#,
    );
    assert_eq!(rejected_field(&unknown_material), "suction_pipe_material");

    let described = submersible_with_intake(
        r#", "suction_pipe_diameter": 100, "suction_pipe_length": 2, "suction_pipe_material": "pvc""#,
    );
    assert!(Engine::default().expert(&described).is_ok());
}

#[test]
fn audit_flow_shortfall() {
    let req: AuditRequest =
        serde_json::from_str(r#"{"current_flow_rate": 45, "required_flow_rate": 60}"#).unwrap();
    let report = Engine::default().audit(&req).unwrap();
    assert!((report.performance_comparisons[0].deviation_percent + 25.0).abs() < 1e-9);
    assert!((0.0..=100.0).contains(&report.overall_score));
}

#[test]
fn audit_zero_reference_is_a_validation_error() {
    let req: AuditRequest =
        serde_json::from_str(r#"{"measured_flow": 45, "required_flow": 0}"#).unwrap();
    assert!(matches!(
        Engine::default().audit(&req),
        Err(AppError::Validation { .. })
    ));
}

#[test]
fn curves_are_deterministic() {
    let engine = Engine::default();
    let a = engine.expert(&expert_surface()).unwrap();
    let b = engine.expert(&expert_surface()).unwrap();
    assert_eq!(a.performance_curves, b.performance_curves);
    assert_eq!(a.system_curves, b.system_curves);
}

#[test]
fn history_records_and_survives_failures() {
    let dir = std::env::temp_dir().join("hp_app_history_test");
    let _ = std::fs::remove_dir_all(&dir);
    let config = EngineConfig {
        history_dir: dir.clone(),
        ..EngineConfig::default()
    };

    let engine = Engine::with_history(config).unwrap();
    engine.npshd(&npshd_flooded()).unwrap();
    let records = engine.list_history(None).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].response["cavitation_risk"], false);
    let shown = engine.show_history(&records[0].id[..10]).unwrap();
    assert_eq!(shown.id, records[0].id);

    // The store disappearing must not fail the calculation.
    std::fs::remove_dir_all(&dir).unwrap();
    assert!(engine.npshd(&npshd_hot_lift()).is_ok());
}

#[test]
fn request_documents_load_from_yaml() {
    let dir = std::env::temp_dir().join("hp_app_request_yaml");
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("npshd.yaml");
    std::fs::write(
        &path,
        "suction_type: flooded
hasp: 2
flow_rate: 50
fluid_type: water
pipe_diameter: 100
pipe_material: pvc
pipe_length: 30
npsh_required: 3
",
    )
    .unwrap();

    let req: NpshdRequest = load_document(&path).unwrap();
    assert_eq!(req, npshd_flooded());
}
