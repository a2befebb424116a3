//! History aggregation over every stored record.
//!
//! Pure and order-preserving. The average is rounded half away from zero
//! to two decimals.

use serde::{Deserialize, Serialize};

use outlook_core::constants::{AVERAGE_DECIMALS, VERDICT_HIGH, VERDICT_LOW};
use outlook_core::{Color, HistoryPoint, StudentRecord};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryStats {
    pub total: usize,
    pub avg_score: f64,
    pub high_count: usize,
    pub low_count: usize,
    pub chart_series: Vec<HistoryPoint>,
}

impl HistoryStats {
    pub fn empty() -> Self {
        Self {
            total: 0,
            avg_score: 0.0,
            high_count: 0,
            low_count: 0,
            chart_series: Vec::new(),
        }
    }
}

pub fn aggregate(records: &[StudentRecord]) -> HistoryStats {
    if records.is_empty() {
        return HistoryStats::empty();
    }

    let total = records.len();
    let sum: f64 = records.iter().map(|r| r.final_exam_score).sum();
    // Strings other than the two canonical verdicts count toward neither bucket.
    let high_count = records.iter().filter(|r| r.prediction_result == VERDICT_HIGH).count();
    let low_count = records.iter().filter(|r| r.prediction_result == VERDICT_LOW).count();

    let chart_series = records
        .iter()
        .map(|r| HistoryPoint {
            name: r.name.clone(),
            score: r.final_exam_score,
            color: Color::band_for_score(r.final_exam_score),
        })
        .collect();

    HistoryStats {
        total,
        avg_score: round_half_away(sum / total as f64, AVERAGE_DECIMALS),
        high_count,
        low_count,
        chart_series,
    }
}

/// Round to `decimals` places, ties away from zero.
pub fn round_half_away(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
