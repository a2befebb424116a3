//! Response bodies.

use serde::Serialize;

use outlook_core::constants::{CHART_AXIS_MAX, CHART_AXIS_MIN};
use outlook_core::{ChartPoint, Color, RecordId, StudentRecord, Verdict};
use outlook_predict::{HistoryStats, ReportField, Submitted};

/// Fixed value axis for every chart the service returns.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ChartAxis {
    pub min: f64,
    pub max: f64,
}

impl Default for ChartAxis {
    fn default() -> Self {
        Self {
            min: CHART_AXIS_MIN,
            max: CHART_AXIS_MAX,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub id: RecordId,
    pub record: StudentRecord,
    pub verdict: Verdict,
    pub color: Color,
    pub chart_series: Vec<ChartPoint>,
    pub chart_axis: ChartAxis,
    pub used_fallback: bool,
}

impl From<Submitted> for SubmitResponse {
    fn from(s: Submitted) -> Self {
        Self {
            id: s.record.id,
            record: s.record,
            verdict: s.verdict,
            color: s.color,
            chart_series: s.chart_series,
            chart_axis: ChartAxis::default(),
            used_fallback: s.used_fallback,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    #[serde(flatten)]
    pub stats: HistoryStats,
    pub chart_axis: ChartAxis,
}

impl From<HistoryStats> for HistoryResponse {
    fn from(stats: HistoryStats) -> Self {
        Self {
            stats,
            chart_axis: ChartAxis::default(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ReportResponse {
    pub id: RecordId,
    pub fields: Vec<ReportField>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub classifier: &'static str,
    pub fallback: bool,
}
