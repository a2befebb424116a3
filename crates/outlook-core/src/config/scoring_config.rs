//! Scoring and edit-handling configuration.

use serde::{Deserialize, Serialize};

/// What happens to a stored verdict when a record's metrics are edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditPolicy {
    /// Re-classify the edited metrics and store the fresh verdict.
    #[default]
    Recompute,
    /// Keep the verdict computed at creation time.
    Preserve,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub edit_policy: EditPolicy,
    /// Reject metrics outside [0, 100] at the input boundary.
    pub enforce_score_range: bool,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            edit_policy: EditPolicy::Recompute,
            enforce_score_range: true,
        }
    }
}
