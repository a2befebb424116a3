//! Classifier artifact configuration.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_ARTIFACT_PATH;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Path to the trained artifact. Absent or unreadable → rule-based fallback.
    pub artifact_path: String,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            artifact_path: DEFAULT_ARTIFACT_PATH.to_string(),
        }
    }
}
