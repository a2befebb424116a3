//! # outlook-core
//!
//! Foundation crate for the student outlook service.
//! Defines the record types, verdict and color tokens, errors, config,
//! tracing setup, and the storage collaborator trait.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod traits;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::OutlookConfig;
pub use errors::error_code::OutlookErrorCode;
pub use errors::{OutlookError, OutlookResult};
pub use types::chart::{ChartPoint, HistoryPoint};
pub use types::color::Color;
pub use types::record::{RecordDraft, RecordId, ScoreInputs, StudentRecord};
pub use types::submission::{RawSubmission, Submission};
pub use types::verdict::Verdict;
