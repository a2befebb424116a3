//! Scoring service: validated submission → verdict, color, chart series, draft.

use std::sync::Arc;

use serde::Serialize;

use outlook_core::{ChartPoint, Color, RecordDraft, ScoreInputs, Submission, Verdict};

use crate::classifier::{Classification, ClassifierAdapter, Classify};

/// Category labels of the single-record chart, in submission order.
pub const CHART_LABELS: [&str; 4] = ["Attendance", "Internal", "Assignment", "Final"];

/// Everything the caller needs after scoring one submission.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreOutcome {
    pub verdict: Verdict,
    pub color: Color,
    pub chart_series: Vec<ChartPoint>,
    pub draft: RecordDraft,
    pub used_fallback: bool,
}

/// Pure scoring over an injected, shared classifier.
#[derive(Debug, Clone)]
pub struct ScoringService {
    classifier: Arc<ClassifierAdapter>,
}

impl ScoringService {
    pub fn new(classifier: Arc<ClassifierAdapter>) -> Self {
        Self { classifier }
    }

    pub fn classifier(&self) -> &ClassifierAdapter {
        &self.classifier
    }

    pub fn classify(&self, scores: &ScoreInputs) -> Classification {
        self.classifier.classify_inputs(scores)
    }

    pub fn score(&self, submission: &Submission) -> ScoreOutcome {
        let classification = self.classify(&submission.scores);
        let verdict = Verdict::from(classification.label);
        ScoreOutcome {
            verdict,
            color: Color::for_verdict_text(verdict.as_str()),
            chart_series: chart_series(&submission.scores),
            draft: RecordDraft::new(submission.name.clone(), submission.scores, verdict),
            used_fallback: classification.used_fallback,
        }
    }
}

/// The four labeled bars for one submission.
pub fn chart_series(scores: &ScoreInputs) -> Vec<ChartPoint> {
    CHART_LABELS
        .iter()
        .zip(scores.as_features())
        .map(|(label, value)| ChartPoint::new(*label, value))
        .collect()
}
