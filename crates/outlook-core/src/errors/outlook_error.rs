use super::error_code::{self, OutlookErrorCode};
use super::{ArtifactError, ConfigError, InputError, StorageError};
use crate::types::record::RecordId;

/// Top-level error type for the outlook service.
/// All subsystem errors convert into this via `From` impls.
#[derive(Debug, thiserror::Error)]
pub enum OutlookError {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InputError),

    #[error("student record {id} not found")]
    RecordNotFound { id: RecordId },

    #[error("storage error: {0}")]
    Storage(StorageError),

    #[error("artifact error: {0}")]
    Artifact(#[from] ArtifactError),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}

/// Convenience type alias.
pub type OutlookResult<T> = Result<T, OutlookError>;

// NotFound is lifted to its own variant so callers can match on it without
// digging through the storage error.
impl From<StorageError> for OutlookError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::NotFound { id } => Self::RecordNotFound { id },
            other => Self::Storage(other),
        }
    }
}

impl OutlookErrorCode for OutlookError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidInput(e) => e.error_code(),
            Self::RecordNotFound { .. } => error_code::RECORD_NOT_FOUND,
            Self::Storage(e) => e.error_code(),
            Self::Artifact(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
        }
    }
}
