//! L2-regularized logistic regression fitted by batch gradient descent.
//!
//! Features are standardized before fitting and the coefficients are mapped
//! back to raw-score space, so the resulting artifact consumes unscaled
//! metrics. The objective matches the `C`-parameterised form:
//! `C * sum(logloss) + 0.5 * |w|^2`, divided through by `C * n`.

use outlook_core::config::TrainingConfig;
use outlook_core::errors::ArtifactError;

use crate::classifier::{sigmoid, LogisticModel};

use super::dataset::Dataset;

const NUM_FEATURES: usize = 4;

/// Per-feature mean and population standard deviation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Standardizer {
    pub mean: [f64; NUM_FEATURES],
    pub std: [f64; NUM_FEATURES],
}

impl Standardizer {
    pub fn fit(data: &Dataset) -> Self {
        let n = data.len().max(1) as f64;
        let mut mean = [0.0f64; NUM_FEATURES];
        for s in data.samples() {
            for (m, x) in mean.iter_mut().zip(s.features) {
                *m += x / n;
            }
        }
        let mut var = [0.0f64; NUM_FEATURES];
        for s in data.samples() {
            for j in 0..NUM_FEATURES {
                let d = s.features[j] - mean[j];
                var[j] += d * d / n;
            }
        }
        // A constant column standardizes to zero; keep the divisor at 1.
        let std = var.map(|v| if v > 0.0 { v.sqrt() } else { 1.0 });
        Self { mean, std }
    }

    pub fn transform(&self, x: &[f64; NUM_FEATURES]) -> [f64; NUM_FEATURES] {
        std::array::from_fn(|j| (x[j] - self.mean[j]) / self.std[j])
    }

    /// Convert standardized-space coefficients to raw-space ones.
    pub fn unscale(&self, weights: &[f64; NUM_FEATURES], intercept: f64) -> ([f64; NUM_FEATURES], f64) {
        let raw: [f64; NUM_FEATURES] = std::array::from_fn(|j| weights[j] / self.std[j]);
        let shift: f64 = (0..NUM_FEATURES).map(|j| raw[j] * self.mean[j]).sum();
        (raw, intercept - shift)
    }
}

pub fn fit(data: &Dataset, config: &TrainingConfig) -> Result<LogisticModel, ArtifactError> {
    if data.is_empty() {
        return Err(ArtifactError::Training("no training samples".to_string()));
    }
    if !data.has_both_classes() {
        return Err(ArtifactError::Training(
            "training samples contain a single class".to_string(),
        ));
    }

    let scaler = Standardizer::fit(data);
    let rows: Vec<([f64; NUM_FEATURES], f64)> = data
        .samples()
        .iter()
        .map(|s| (scaler.transform(&s.features), s.target()))
        .collect();

    let n = rows.len() as f64;
    let l2 = 1.0 / (config.inverse_regularization * n);
    let mut w = [0.0f64; NUM_FEATURES];
    let mut b = 0.0;

    for _ in 0..config.epochs {
        let mut grad_w = [0.0f64; NUM_FEATURES];
        let mut grad_b = 0.0;
        for (x, y) in &rows {
            let z = w.iter().zip(x).fold(b, |acc, (wj, xj)| wj.mul_add(*xj, acc));
            let err = sigmoid(z) - y;
            for (g, xj) in grad_w.iter_mut().zip(x) {
                *g += err * xj / n;
            }
            grad_b += err / n;
        }
        for (wj, g) in w.iter_mut().zip(grad_w) {
            *wj -= config.learning_rate * (g + l2 * *wj);
        }
        b -= config.learning_rate * grad_b;
    }

    let (weights, intercept) = scaler.unscale(&w, b);
    let model = LogisticModel::new(weights, intercept);
    model.validate().map_err(ArtifactError::Training)?;
    Ok(model)
}

/// Fraction of samples the model labels correctly. Zero for an empty set.
pub fn accuracy(model: &LogisticModel, data: &Dataset) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let correct = data
        .samples()
        .iter()
        .filter(|s| model.predict(&s.features) == s.label)
        .count();
    correct as f64 / data.len() as f64
}
