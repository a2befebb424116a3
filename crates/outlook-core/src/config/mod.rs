//! Configuration for every subsystem, loaded from `outlook.toml`.

pub mod classifier_config;
pub mod observability_config;
pub mod scoring_config;
pub mod server_config;
pub mod storage_config;
pub mod training_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use classifier_config::ClassifierConfig;
pub use observability_config::ObservabilityConfig;
pub use scoring_config::{EditPolicy, ScoringConfig};
pub use server_config::{AccessToken, ServerConfig};
pub use storage_config::StorageConfig;
pub use training_config::TrainingConfig;

use crate::errors::ConfigError;

/// Top-level configuration aggregating all subsystem configs.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct OutlookConfig {
    pub classifier: ClassifierConfig,
    pub scoring: ScoringConfig,
    pub storage: StorageConfig,
    pub training: TrainingConfig,
    pub server: ServerConfig,
    pub observability: ObservabilityConfig,
}

impl OutlookConfig {
    /// Load config from a TOML string, falling back to defaults for missing fields.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from a file. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "config file absent, using defaults");
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_toml(&text)
    }

    /// Reject values no subsystem can run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.training.validate()?;
        self.server.validate()?;
        Ok(())
    }
}
