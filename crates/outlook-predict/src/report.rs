//! Report projection: one record → ordered labeled fields for the document renderer.

use serde::{Deserialize, Serialize};

use outlook_core::StudentRecord;

/// Field labels in the order they appear on the report.
pub const REPORT_LABELS: [&str; 6] = [
    "Name",
    "Attendance",
    "Internal Marks",
    "Assignment Score",
    "Final Exam Score",
    "Prediction Result",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportField {
    pub label: String,
    pub value: String,
}

pub fn project(record: &StudentRecord) -> Vec<ReportField> {
    let values = [
        record.name.clone(),
        format_number(record.attendance),
        format_number(record.internal_marks),
        format_number(record.assignment_score),
        format_number(record.final_exam_score),
        record.prediction_result.clone(),
    ];
    REPORT_LABELS
        .iter()
        .zip(values)
        .map(|(label, value)| ReportField {
            label: label.to_string(),
            value,
        })
        .collect()
}

/// Shortest round-trip text, always with a fractional part (`90.0`, `88.25`).
fn format_number(value: f64) -> String {
    format!("{value:?}")
}
