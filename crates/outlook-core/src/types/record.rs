//! Student record, record draft, and the four scoring inputs.

use serde::{Deserialize, Serialize};

use super::verdict::Verdict;

/// Identifier assigned by storage at creation. Immutable afterwards.
pub type RecordId = i64;

/// The four metrics in classifier order: attendance, internal, assignment, final.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreInputs {
    pub attendance: f64,
    pub internal_marks: f64,
    pub assignment_score: f64,
    pub final_exam_score: f64,
}

impl ScoreInputs {
    pub fn new(attendance: f64, internal_marks: f64, assignment_score: f64, final_exam_score: f64) -> Self {
        Self {
            attendance,
            internal_marks,
            assignment_score,
            final_exam_score,
        }
    }

    /// Feature vector in the fixed classifier order.
    pub fn as_features(&self) -> [f64; 4] {
        [
            self.attendance,
            self.internal_marks,
            self.assignment_score,
            self.final_exam_score,
        ]
    }

    /// Left-to-right sum divided by four.
    pub fn mean(&self) -> f64 {
        (self.attendance + self.internal_marks + self.assignment_score + self.final_exam_score) / 4.0
    }
}

/// A scored submission that has not been persisted yet (no `id`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordDraft {
    pub name: String,
    pub attendance: f64,
    pub internal_marks: f64,
    pub assignment_score: f64,
    pub final_exam_score: f64,
    pub prediction_result: String,
}

impl RecordDraft {
    pub fn new(name: impl Into<String>, scores: ScoreInputs, verdict: Verdict) -> Self {
        Self {
            name: name.into(),
            attendance: scores.attendance,
            internal_marks: scores.internal_marks,
            assignment_score: scores.assignment_score,
            final_exam_score: scores.final_exam_score,
            prediction_result: verdict.as_str().to_string(),
        }
    }

    /// Attach the identifier handed out by storage.
    pub fn into_record(self, id: RecordId) -> StudentRecord {
        StudentRecord {
            id,
            name: self.name,
            attendance: self.attendance,
            internal_marks: self.internal_marks,
            assignment_score: self.assignment_score,
            final_exam_score: self.final_exam_score,
            prediction_result: self.prediction_result,
        }
    }
}

/// One persisted evaluation.
///
/// `prediction_result` is kept as the stored string rather than a `Verdict`
/// so that aggregation can count exactly what storage holds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentRecord {
    pub id: RecordId,
    pub name: String,
    pub attendance: f64,
    pub internal_marks: f64,
    pub assignment_score: f64,
    pub final_exam_score: f64,
    pub prediction_result: String,
}

impl StudentRecord {
    pub fn scores(&self) -> ScoreInputs {
        ScoreInputs::new(
            self.attendance,
            self.internal_marks,
            self.assignment_score,
            self.final_exam_score,
        )
    }

    /// The canonical verdict, if the stored string is one.
    pub fn verdict(&self) -> Option<Verdict> {
        Verdict::parse(&self.prediction_result)
    }

    /// Replace name and metrics. The verdict is left untouched.
    pub fn apply_edit(&mut self, name: impl Into<String>, scores: ScoreInputs) {
        self.name = name.into();
        self.attendance = scores.attendance;
        self.internal_marks = scores.internal_marks;
        self.assignment_score = scores.assignment_score;
        self.final_exam_score = scores.final_exam_score;
    }
}
