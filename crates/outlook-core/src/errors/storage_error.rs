//! Storage-layer errors for the student record collaborator.

use super::error_code::{self, OutlookErrorCode};
use crate::types::record::RecordId;

/// Errors that can occur in the storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("student record {id} not found")]
    NotFound { id: RecordId },

    #[error("SQLite error: {message}")]
    SqliteError { message: String },

    #[error("Migration failed at version {version}: {message}")]
    MigrationFailed { version: u32, message: String },

    #[error("record {id} has no value for {field}")]
    DataIntegrity { id: RecordId, field: &'static str },

    #[error("storage lock poisoned")]
    LockPoisoned,
}

pub type StorageResult<T> = Result<T, StorageError>;

impl OutlookErrorCode for StorageError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => error_code::RECORD_NOT_FOUND,
            Self::DataIntegrity { .. } => error_code::DATA_INTEGRITY,
            Self::MigrationFailed { .. } => error_code::MIGRATION_FAILED,
            _ => error_code::STORAGE_ERROR,
        }
    }
}
