//! Classifier adapter: a tagged two-variant strategy chosen once at construction.
//!
//! `ModelBacked` delegates to a trained logistic-regression artifact.
//! `RuleBased` labels a student positive iff the mean of the four metrics is
//! at least 50. A missing or corrupt artifact selects `RuleBased` at load
//! time and is logged exactly once; classification itself never fails.

mod model;
mod rule;

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use outlook_core::config::ClassifierConfig;
use outlook_core::errors::ArtifactError;
use outlook_core::{OutlookErrorCode, ScoreInputs, Verdict};

pub use model::LogisticModel;
pub(crate) use model::sigmoid;
pub use rule::RuleBasedClassifier;

/// Binary classifier output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Label {
    Low = 0,
    High = 1,
}

impl Label {
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    pub fn from_bool(positive: bool) -> Self {
        if positive {
            Self::High
        } else {
            Self::Low
        }
    }
}

impl From<Label> for Verdict {
    fn from(label: Label) -> Self {
        match label {
            Label::High => Verdict::High,
            Label::Low => Verdict::Low,
        }
    }
}

/// Result of one classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub label: Label,
    pub used_fallback: bool,
}

/// The classify capability shared by both strategies.
///
/// Inputs are taken in the fixed order attendance, internal, assignment,
/// final. No range enforcement happens at this layer.
pub trait Classify: Send + Sync {
    fn classify(&self, attendance: f64, internal: f64, assignment: f64, final_score: f64) -> Classification;

    fn name(&self) -> &'static str;

    fn classify_inputs(&self, inputs: &ScoreInputs) -> Classification {
        let [a, i, s, f] = inputs.as_features();
        self.classify(a, i, s, f)
    }
}

/// Strategy selected at boot. Immutable afterwards; share it behind an `Arc`.
#[derive(Debug, Clone)]
pub enum ClassifierAdapter {
    ModelBacked(LogisticModel),
    RuleBased(RuleBasedClassifier),
}

impl ClassifierAdapter {
    pub fn rule_based() -> Self {
        Self::RuleBased(RuleBasedClassifier::default())
    }

    pub fn model_backed(model: LogisticModel) -> Self {
        Self::ModelBacked(model)
    }

    /// Load the artifact, propagating any failure.
    pub fn try_load(path: &Path) -> Result<Self, ArtifactError> {
        LogisticModel::load(path).map(Self::ModelBacked)
    }

    /// Load the artifact, substituting the rule-based strategy on failure.
    pub fn load(path: &Path) -> Self {
        match Self::try_load(path) {
            Ok(adapter) => {
                info!(path = %path.display(), "classifier artifact loaded");
                adapter
            }
            Err(e) => {
                warn!(
                    path = %path.display(),
                    code = e.error_code(),
                    error = %e,
                    "classifier artifact unavailable, using rule-based fallback"
                );
                Self::rule_based()
            }
        }
    }

    pub fn from_config(config: &ClassifierConfig) -> Self {
        Self::load(Path::new(&config.artifact_path))
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::RuleBased(_))
    }
}

impl Classify for ClassifierAdapter {
    fn classify(&self, attendance: f64, internal: f64, assignment: f64, final_score: f64) -> Classification {
        match self {
            Self::ModelBacked(model) => model.classify(attendance, internal, assignment, final_score),
            Self::RuleBased(rule) => rule.classify(attendance, internal, assignment, final_score),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Self::ModelBacked(model) => model.name(),
            Self::RuleBased(rule) => rule.name(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_artifact_falls_back() {
        let dir = TempDir::new().unwrap();
        let adapter = ClassifierAdapter::load(&dir.path().join("absent.json"));
        assert!(adapter.is_fallback());
        assert_eq!(adapter.name(), "rule_based");
    }

    #[test]
    fn try_load_reports_missing() {
        let dir = TempDir::new().unwrap();
        let err = ClassifierAdapter::try_load(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, ArtifactError::Missing { .. }));
    }

    #[test]
    fn corrupt_artifact_falls_back() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("model.json");
        std::fs::write(&path, b"{\"format_version\": 1, \"weights\": [0.1,").unwrap();
        let err = ClassifierAdapter::try_load(&path).unwrap_err();
        assert!(matches!(err, ArtifactError::Corrupt { .. }));
        let adapter = ClassifierAdapter::load(&path);
        assert!(adapter.is_fallback());
        let c = adapter.classify(90.0, 90.0, 90.0, 90.0);
        assert_eq!(c.label, Label::High);
        assert!(c.used_fallback);
    }

    #[test]
    fn saved_artifact_loads_model_backed() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("model.json");
        let model = LogisticModel::new([0.1, 0.1, 0.1, 0.1], -24.0);
        model.save(&path).unwrap();

        let adapter = ClassifierAdapter::load(&path);
        assert!(!adapter.is_fallback());
        assert_eq!(adapter.name(), "logistic_regression");
        // 0.1 * 4 * 70 - 24 = 4 > 0
        let c = adapter.classify(70.0, 70.0, 70.0, 70.0);
        assert_eq!(c, Classification { label: Label::High, used_fallback: false });
        // 0.1 * 4 * 50 - 24 = -4 < 0
        assert_eq!(adapter.classify(50.0, 50.0, 50.0, 50.0).label, Label::Low);
    }

    #[test]
    fn label_maps_to_verdict() {
        assert_eq!(Verdict::from(Label::High), Verdict::High);
        assert_eq!(Verdict::from(Label::Low), Verdict::Low);
        assert_eq!(Label::High.as_u8(), 1);
        assert_eq!(Label::Low.as_u8(), 0);
    }
}
