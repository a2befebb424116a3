//! Stable error codes carried in HTTP error bodies and log fields.

pub const INVALID_INPUT: &str = "INVALID_INPUT";
pub const RECORD_NOT_FOUND: &str = "RECORD_NOT_FOUND";
pub const STORAGE_ERROR: &str = "STORAGE_ERROR";
pub const DATA_INTEGRITY: &str = "DATA_INTEGRITY";
pub const MIGRATION_FAILED: &str = "MIGRATION_FAILED";
pub const ARTIFACT_MISSING: &str = "ARTIFACT_MISSING";
pub const ARTIFACT_CORRUPT: &str = "ARTIFACT_CORRUPT";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const TRAINING_ERROR: &str = "TRAINING_ERROR";

/// Implemented by every error enum in the workspace.
pub trait OutlookErrorCode {
    fn error_code(&self) -> &'static str;
}
