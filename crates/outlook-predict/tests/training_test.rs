//! End-to-end training: reference data → artifact on disk → model-backed adapter.

use outlook_core::config::TrainingConfig;
use outlook_predict::classifier::{ClassifierAdapter, Classify, Label};
use outlook_predict::training::{train, train_and_save, Dataset};
use tempfile::TempDir;

#[test]
fn default_config_holds_out_two_rows() {
    let report = train(&Dataset::reference(), &TrainingConfig::default()).unwrap();
    assert_eq!(report.train_size, 8);
    assert_eq!(report.test_size, 2);
    assert!((0.0..=1.0).contains(&report.test_accuracy));
    assert!(report.train_accuracy >= 0.75);
}

#[test]
fn same_seed_writes_identical_artifact() {
    let dir = TempDir::new().unwrap();
    let first = dir.path().join("a/model.json");
    let second = dir.path().join("b/model.json");
    let config = TrainingConfig::default();

    train_and_save(&Dataset::reference(), &config, &first).unwrap();
    train_and_save(&Dataset::reference(), &config, &second).unwrap();

    let a = std::fs::read(&first).unwrap();
    let b = std::fs::read(&second).unwrap();
    assert_eq!(a, b);
}

#[test]
fn trained_artifact_drives_the_adapter() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("model.json");
    train_and_save(&Dataset::reference(), &TrainingConfig::default(), &path).unwrap();

    let adapter = ClassifierAdapter::load(&path);
    assert!(!adapter.is_fallback());

    let high = adapter.classify(90.0, 85.0, 88.0, 90.0);
    assert_eq!(high.label, Label::High);
    assert!(!high.used_fallback);
    assert_eq!(adapter.classify(30.0, 25.0, 28.0, 29.0).label, Label::Low);
}

#[test]
fn artifact_lists_feature_order() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("model.json");
    train_and_save(&Dataset::reference(), &TrainingConfig::default(), &path).unwrap();

    let json: serde_json::Value = serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();
    assert_eq!(json["format_version"], 1);
    assert_eq!(
        json["features"],
        serde_json::json!(["attendance", "internal", "assignment", "final"])
    );
    assert_eq!(json["weights"].as_array().map(Vec::len), Some(4));
    assert_eq!(json["threshold"], 0.5);
}
