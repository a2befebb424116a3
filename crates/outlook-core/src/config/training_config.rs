//! Offline training configuration.

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainingConfig {
    /// Seed for the train/test shuffle.
    pub seed: u64,
    /// Fraction of rows held out for evaluation.
    pub test_fraction: f64,
    pub learning_rate: f64,
    pub epochs: usize,
    /// Inverse L2 strength, as in the usual `C` parameterisation.
    pub inverse_regularization: f64,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            test_fraction: 0.2,
            learning_rate: 0.1,
            epochs: 5_000,
            inverse_regularization: 1.0,
        }
    }
}

impl TrainingConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.test_fraction > 0.0 && self.test_fraction < 1.0) {
            return Err(invalid("training.test_fraction", "must be in (0, 1)"));
        }
        if !(self.learning_rate.is_finite() && self.learning_rate > 0.0) {
            return Err(invalid("training.learning_rate", "must be a positive number"));
        }
        if self.epochs == 0 {
            return Err(invalid("training.epochs", "must be at least 1"));
        }
        if !(self.inverse_regularization.is_finite() && self.inverse_regularization > 0.0) {
            return Err(invalid("training.inverse_regularization", "must be a positive number"));
        }
        Ok(())
    }
}

fn invalid(key: &str, message: &str) -> ConfigError {
    ConfigError::Invalid {
        key: key.to_string(),
        message: message.to_string(),
    }
}
