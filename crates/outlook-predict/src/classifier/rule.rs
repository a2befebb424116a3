//! Deterministic fallback used when no artifact is available.

use outlook_core::constants::FALLBACK_PASS_MEAN;
use outlook_core::ScoreInputs;

use super::{Classification, Classify, Label};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RuleBasedClassifier {
    pass_mean: f64,
}

impl RuleBasedClassifier {
    pub fn pass_mean(&self) -> f64 {
        self.pass_mean
    }
}

impl Default for RuleBasedClassifier {
    fn default() -> Self {
        Self {
            pass_mean: FALLBACK_PASS_MEAN,
        }
    }
}

impl Classify for RuleBasedClassifier {
    fn classify(&self, attendance: f64, internal: f64, assignment: f64, final_score: f64) -> Classification {
        let average = ScoreInputs::new(attendance, internal, assignment, final_score).mean();
        Classification {
            label: Label::from_bool(average >= self.pass_mean),
            used_fallback: true,
        }
    }

    fn name(&self) -> &'static str {
        "rule_based"
    }
}
