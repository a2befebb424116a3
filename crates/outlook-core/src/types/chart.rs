//! Chart series entries handed to the graph-rendering collaborator.

use serde::{Deserialize, Serialize};

use super::color::Color;

/// One labeled bar of the single-record chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub label: String,
    pub value: f64,
}

impl ChartPoint {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// One student's bar in the history chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryPoint {
    pub name: String,
    pub score: f64,
    pub color: Color,
}
