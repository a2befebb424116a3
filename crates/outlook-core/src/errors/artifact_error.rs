//! Classifier artifact load/save errors.
//!
//! Load failures never reach request handling: the adapter absorbs them at
//! construction and selects the rule-based strategy instead.

use std::path::PathBuf;

use super::error_code::{self, OutlookErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("classifier artifact not found at {path}")]
    Missing { path: PathBuf },

    #[error("classifier artifact at {path} is corrupt: {reason}")]
    Corrupt { path: PathBuf, reason: String },

    #[error("classifier artifact io error at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("training failed: {0}")]
    Training(String),
}

impl OutlookErrorCode for ArtifactError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Missing { .. } => error_code::ARTIFACT_MISSING,
            Self::Corrupt { .. } | Self::Io { .. } => error_code::ARTIFACT_CORRUPT,
            Self::Training(_) => error_code::TRAINING_ERROR,
        }
    }
}
