//! Error types for every layer, converging into `OutlookError`.

pub mod artifact_error;
pub mod config_error;
pub mod error_code;
pub mod input_error;
pub mod outlook_error;
pub mod storage_error;

pub use artifact_error::ArtifactError;
pub use config_error::ConfigError;
pub use input_error::InputError;
pub use outlook_error::{OutlookError, OutlookResult};
pub use storage_error::{StorageError, StorageResult};
