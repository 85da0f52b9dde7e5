use hp_results::*;
use serde_json::json;

fn record(kind: CalculationKind, flow: f64) -> CalculationRecord {
    CalculationRecord::new(
        kind,
        json!({"flow_rate": flow}),
        json!({"npshd": 11.35}),
        "0.1.0",
    )
}

#[test]
fn save_and_load_record() {
    let temp_dir = std::env::temp_dir().join("hp_results_test");
    let _ = std::fs::remove_dir_all(&temp_dir);

    let store = HistoryStore::new(temp_dir.clone()).unwrap();
    let rec = record(CalculationKind::Npshd, 50.0);
    store.save(&rec).unwrap();

    assert!(store.has_record(&rec.id));
    let loaded = store.load(&rec.id).unwrap();
    assert_eq!(loaded, rec);
    assert!(chrono::DateTime::parse_from_rfc3339(&loaded.timestamp).is_ok());

    let by_prefix = store.find(&rec.id[..8]).unwrap();
    assert_eq!(by_prefix.id, rec.id);
}

#[test]
fn identical_requests_share_an_id() {
    let temp_dir = std::env::temp_dir().join("hp_results_test_dedupe");
    let _ = std::fs::remove_dir_all(&temp_dir);

    let store = HistoryStore::new(temp_dir.clone()).unwrap();
    store.save(&record(CalculationKind::Hmt, 30.0)).unwrap();
    store.save(&record(CalculationKind::Hmt, 30.0)).unwrap();
    assert_eq!(store.list(None).unwrap().len(), 1);
}

#[test]
fn list_records_by_kind() {
    let temp_dir = std::env::temp_dir().join("hp_results_test_list");
    let _ = std::fs::remove_dir_all(&temp_dir);

    let store = HistoryStore::new(temp_dir.clone()).unwrap();
    store.save(&record(CalculationKind::Npshd, 10.0)).unwrap();
    store.save(&record(CalculationKind::Npshd, 20.0)).unwrap();
    store.save(&record(CalculationKind::Audit, 10.0)).unwrap();
    std::fs::write(temp_dir.join("garbage.json"), "{not json").unwrap();

    assert_eq!(store.list(Some(CalculationKind::Npshd)).unwrap().len(), 2);
    assert_eq!(store.list(Some(CalculationKind::Audit)).unwrap().len(), 1);
    assert_eq!(store.list(None).unwrap().len(), 3);
}

#[test]
fn missing_record_is_reported() {
    let temp_dir = std::env::temp_dir().join("hp_results_test_missing");
    let _ = std::fs::remove_dir_all(&temp_dir);

    let store = HistoryStore::new(temp_dir).unwrap();
    assert!(matches!(
        store.load("deadbeef"),
        Err(ResultsError::RecordNotFound { .. })
    ));
    assert!(matches!(
        store.find("dead"),
        Err(ResultsError::RecordNotFound { .. })
    ));

    let rec = record(CalculationKind::Expert, 1.0);
    store.save(&rec).unwrap();
    store.delete(&rec.id).unwrap();
    assert!(!store.has_record(&rec.id));
}
