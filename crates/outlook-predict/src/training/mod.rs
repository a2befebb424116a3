//! Offline training of the classifier artifact.
//!
//! Deterministic: the same dataset, seed, and config always produce the
//! same coefficients and so the same artifact bytes.

pub mod dataset;
pub mod logistic;

use std::path::Path;

use serde::Serialize;
use tracing::info;

use outlook_core::config::TrainingConfig;
use outlook_core::errors::ArtifactError;

use crate::classifier::LogisticModel;

pub use dataset::{Dataset, Sample};
pub use logistic::{accuracy, fit, Standardizer};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrainingReport {
    pub train_size: usize,
    pub test_size: usize,
    pub train_accuracy: f64,
    pub test_accuracy: f64,
    pub model: LogisticModel,
}

/// Split, fit on the training side, and score both sides.
pub fn train(data: &Dataset, config: &TrainingConfig) -> Result<TrainingReport, ArtifactError> {
    let (train_set, test_set) = data.split(config.test_fraction, config.seed);
    let model = fit(&train_set, config)?;
    let report = TrainingReport {
        train_size: train_set.len(),
        test_size: test_set.len(),
        train_accuracy: accuracy(&model, &train_set),
        test_accuracy: accuracy(&model, &test_set),
        model,
    };
    info!(
        train_size = report.train_size,
        test_size = report.test_size,
        train_accuracy = report.train_accuracy,
        test_accuracy = report.test_accuracy,
        "classifier trained"
    );
    Ok(report)
}

/// Train and write the artifact to `path`.
pub fn train_and_save(
    data: &Dataset,
    config: &TrainingConfig,
    path: &Path,
) -> Result<TrainingReport, ArtifactError> {
    let report = train(data, config)?;
    report.model.save(path)?;
    info!(path = %path.display(), "classifier artifact written");
    Ok(report)
}
