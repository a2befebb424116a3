//! Submit → history → report → edit → delete through the public workflow API.

use std::sync::Arc;

use outlook_core::config::{EditPolicy, ScoringConfig};
use outlook_core::traits::InMemoryStudentStore;
use outlook_core::{Color, OutlookError, RawSubmission, RecordDraft, ScoreInputs, Verdict};
use outlook_predict::{ClassifierAdapter, RecordWorkflow, ScoringService};

fn form(name: &str, values: [&str; 4]) -> RawSubmission {
    RawSubmission {
        name: Some(name.to_string()),
        attendance: Some(values[0].to_string()),
        internal: Some(values[1].to_string()),
        assignment: Some(values[2].to_string()),
        final_score: Some(values[3].to_string()),
    }
}

fn workflow(store: InMemoryStudentStore) -> RecordWorkflow<InMemoryStudentStore> {
    let scoring = ScoringService::new(Arc::new(ClassifierAdapter::rule_based()));
    RecordWorkflow::new(store, scoring, &ScoringConfig::default())
}

#[test]
fn full_lifecycle() {
    let wf = workflow(InMemoryStudentStore::new());

    let high = wf.submit(&form("Asha", ["90", "85", "88", "90"])).unwrap();
    assert_eq!(high.verdict, Verdict::High);
    assert_eq!(high.color, Color::Green);
    let values: Vec<f64> = high.chart_series.iter().map(|p| p.value).collect();
    assert_eq!(values, vec![90.0, 85.0, 88.0, 90.0]);
    assert!(high.used_fallback);

    let low = wf.submit(&form("Ben", ["30", "25", "28", "29"])).unwrap();
    assert_eq!(low.verdict, Verdict::Low);
    assert_eq!(low.record.prediction_result, "Low Chance of Success");

    let stats = wf.history().unwrap();
    assert_eq!(stats.total, 2);
    assert_eq!(stats.high_count, 1);
    assert_eq!(stats.low_count, 1);
    assert_eq!(stats.avg_score, 59.5);
    let colors: Vec<Color> = stats.chart_series.iter().map(|p| p.color).collect();
    assert_eq!(colors, vec![Color::Green, Color::Red]);

    let report = wf.report(low.record.id).unwrap();
    let pairs: Vec<(&str, &str)> = report
        .iter()
        .map(|f| (f.label.as_str(), f.value.as_str()))
        .collect();
    assert_eq!(pairs[0], ("Name", "Ben"));
    assert_eq!(pairs[5], ("Prediction Result", "Low Chance of Success"));

    wf.edit(low.record.id, &form("Ben", ["80", "80", "80", "80"])).unwrap();
    let stats = wf.history().unwrap();
    assert_eq!(stats.high_count, 2);
    assert_eq!(stats.low_count, 0);

    wf.delete(high.record.id).unwrap();
    assert!(matches!(
        wf.report(high.record.id),
        Err(OutlookError::RecordNotFound { .. })
    ));
    assert_eq!(wf.history().unwrap().total, 1);
}

#[test]
fn empty_history() {
    let stats = workflow(InMemoryStudentStore::new()).history().unwrap();
    assert_eq!(stats.total, 0);
    assert_eq!(stats.avg_score, 0.0);
    assert!(stats.chart_series.is_empty());
}

#[test]
fn stored_non_canonical_verdicts_are_not_counted() {
    let store = InMemoryStudentStore::new();
    let scores = ScoreInputs::new(50.0, 50.0, 50.0, 60.0);
    let mut draft = RecordDraft::new("Odd", scores, Verdict::High);
    draft.prediction_result = "high chance of success".to_string();
    store.insert_raw(draft).unwrap();

    let stats = workflow(store).history().unwrap();
    assert_eq!(stats.total, 1);
    assert_eq!(stats.high_count, 0);
    assert_eq!(stats.low_count, 0);
    assert_eq!(stats.chart_series[0].color, Color::Brown);
}

#[test]
fn preserve_policy_leaves_verdict_stale() {
    let scoring = ScoringService::new(Arc::new(ClassifierAdapter::rule_based()));
    let config = ScoringConfig {
        edit_policy: EditPolicy::Preserve,
        ..ScoringConfig::default()
    };
    let wf = RecordWorkflow::new(InMemoryStudentStore::new(), scoring, &config);
    let id = wf.submit(&form("Cara", ["30", "30", "30", "30"])).unwrap().record.id;
    let edited = wf.edit(id, &form("Cara", ["95", "95", "95", "95"])).unwrap();
    assert_eq!(edited.verdict(), Some(Verdict::Low));
}
