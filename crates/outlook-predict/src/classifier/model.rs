//! Logistic-regression artifact: `p = sigmoid(w · x + b)`, label 1 iff `p > threshold`.
//!
//! The comparison is strict and done on the decision value against
//! `logit(threshold)`, so at the default threshold a point exactly on the
//! boundary (`w · x + b == 0`) is labeled 0.
//!
//! Serialized as JSON. Weights apply to raw (unscaled) metrics in the order
//! attendance, internal, assignment, final.

use std::path::Path;

use serde::{Deserialize, Serialize};

use outlook_core::constants::{ARTIFACT_FORMAT_VERSION, FEATURE_NAMES};
use outlook_core::errors::ArtifactError;

use super::{Classification, Classify, Label};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogisticModel {
    pub format_version: u32,
    pub features: Vec<String>,
    pub weights: Vec<f64>,
    pub intercept: f64,
    pub threshold: f64,
}

impl LogisticModel {
    pub fn new(weights: [f64; 4], intercept: f64) -> Self {
        Self {
            format_version: ARTIFACT_FORMAT_VERSION,
            features: FEATURE_NAMES.iter().map(|f| f.to_string()).collect(),
            weights: weights.to_vec(),
            intercept,
            threshold: 0.5,
        }
    }

    /// Structural checks applied on load. The message becomes the
    /// `ArtifactError::Corrupt` reason.
    pub fn validate(&self) -> Result<(), String> {
        if self.format_version != ARTIFACT_FORMAT_VERSION {
            return Err(format!(
                "unsupported format_version {} (expected {ARTIFACT_FORMAT_VERSION})",
                self.format_version
            ));
        }
        if self.features.len() != FEATURE_NAMES.len()
            || self.features.iter().zip(FEATURE_NAMES).any(|(a, b)| a != b)
        {
            return Err(format!("feature order mismatch: {:?}", self.features));
        }
        if self.weights.len() != FEATURE_NAMES.len() {
            return Err(format!("expected 4 weights, found {}", self.weights.len()));
        }
        if self.weights.iter().any(|w| !w.is_finite()) || !self.intercept.is_finite() {
            return Err("non-finite coefficient".to_string());
        }
        if !(self.threshold > 0.0 && self.threshold < 1.0) {
            return Err(format!("threshold {} outside (0, 1)", self.threshold));
        }
        Ok(())
    }

    /// Linear score `w · x + b`.
    pub fn decision(&self, x: &[f64; 4]) -> f64 {
        self.weights
            .iter()
            .zip(x)
            .fold(self.intercept, |acc, (w, v)| w.mul_add(*v, acc))
    }

    pub fn probability(&self, x: &[f64; 4]) -> f64 {
        sigmoid(self.decision(x))
    }

    /// Decision value at which the probability equals `threshold`.
    pub fn decision_threshold(&self) -> f64 {
        (self.threshold / (1.0 - self.threshold)).ln()
    }

    pub fn predict(&self, x: &[f64; 4]) -> Label {
        Label::from_bool(self.decision(x) > self.decision_threshold())
    }

    pub fn load(path: &Path) -> Result<Self, ArtifactError> {
        let bytes = match std::fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(ArtifactError::Missing {
                    path: path.to_path_buf(),
                })
            }
            Err(e) => {
                return Err(ArtifactError::Io {
                    path: path.to_path_buf(),
                    source: e,
                })
            }
        };
        let model: Self = serde_json::from_slice(&bytes).map_err(|e| ArtifactError::Corrupt {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        model.validate().map_err(|reason| ArtifactError::Corrupt {
            path: path.to_path_buf(),
            reason,
        })?;
        Ok(model)
    }

    pub fn save(&self, path: &Path) -> Result<(), ArtifactError> {
        let json = serde_json::to_vec_pretty(self).map_err(|e| ArtifactError::Training(e.to_string()))?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| ArtifactError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }
        std::fs::write(path, json).map_err(|e| ArtifactError::Io {
            path: path.to_path_buf(),
            source: e,
        })
    }
}

impl Classify for LogisticModel {
    fn classify(&self, attendance: f64, internal: f64, assignment: f64, final_score: f64) -> Classification {
        Classification {
            label: self.predict(&[attendance, internal, assignment, final_score]),
            used_fallback: false,
        }
    }

    fn name(&self) -> &'static str {
        "logistic_regression"
    }
}

/// Numerically stable `1 / (1 + exp(-x))`.
pub(crate) fn sigmoid(x: f64) -> f64 {
    if x >= 0.0 {
        1.0 / (1.0 + (-x).exp())
    } else {
        let e = x.exp();
        e / (1.0 + e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sigmoid_basics() {
        assert!((sigmoid(0.0) - 0.5).abs() < 1e-12);
        assert!(sigmoid(800.0) <= 1.0);
        assert!(sigmoid(-800.0) >= 0.0);
        assert!((sigmoid(3.0) + sigmoid(-3.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn validate_rejects_bad_shapes() {
        let mut m = LogisticModel::new([1.0; 4], 0.0);
        assert!(m.validate().is_ok());

        m.weights.pop();
        assert!(m.validate().unwrap_err().contains("expected 4 weights"));

        let mut m = LogisticModel::new([1.0; 4], 0.0);
        m.features.swap(0, 1);
        assert!(m.validate().unwrap_err().contains("feature order"));

        let mut m = LogisticModel::new([1.0, f64::NAN, 1.0, 1.0], 0.0);
        assert!(m.validate().is_err());
        m.weights[1] = 1.0;
        m.threshold = 1.0;
        assert!(m.validate().is_err());

        let mut m = LogisticModel::new([1.0; 4], 0.0);
        m.format_version = 9;
        assert!(m.validate().unwrap_err().contains("format_version"));
    }

    #[test]
    fn decision_is_affine() {
        let m = LogisticModel::new([1.0, 2.0, 3.0, 4.0], -5.0);
        assert_eq!(m.decision(&[1.0, 1.0, 1.0, 1.0]), 5.0);
        assert_eq!(m.predict(&[1.0, 1.0, 1.0, 1.0]), Label::High);
        assert_eq!(m.predict(&[0.0, 0.0, 0.0, 0.0]), Label::Low);
    }

    #[test]
    fn boundary_point_is_low() {
        let m = LogisticModel::new([1.0, 0.0, 0.0, -1.0], 0.0);
        assert_eq!(m.decision_threshold(), 0.0);
        assert_eq!(m.decision(&[60.0, 10.0, 10.0, 60.0]), 0.0);
        assert_eq!(m.predict(&[60.0, 10.0, 10.0, 60.0]), Label::Low);
        assert_eq!(m.predict(&[60.5, 10.0, 10.0, 60.0]), Label::High);

        let flat = LogisticModel::new([0.0; 4], 0.0);
        assert_eq!(flat.predict(&[90.0, 90.0, 90.0, 90.0]), Label::Low);
    }

    #[test]
    fn custom_threshold_shifts_boundary() {
        let mut m = LogisticModel::new([1.0, 0.0, 0.0, 0.0], -50.0);
        m.threshold = 0.9;
        // logit(0.9) is about 2.197
        assert_eq!(m.predict(&[52.0, 0.0, 0.0, 0.0]), Label::Low);
        assert_eq!(m.predict(&[52.5, 0.0, 0.0, 0.0]), Label::High);
    }
}
