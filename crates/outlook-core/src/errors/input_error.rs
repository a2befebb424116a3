//! Submission validation errors. Raised before a submission reaches scoring.

use super::error_code::{self, OutlookErrorCode};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InputError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("field {field} is not numeric: {value:?}")]
    NotNumeric { field: &'static str, value: String },

    #[error("field {field} must be a finite number")]
    NonFinite { field: &'static str },

    #[error("field {field} out of range [{min}, {max}]: {value}")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("name must not be empty")]
    EmptyName,
}

impl InputError {
    /// The form field the error refers to.
    pub fn field(&self) -> &'static str {
        match self {
            Self::MissingField { field }
            | Self::NotNumeric { field, .. }
            | Self::NonFinite { field }
            | Self::OutOfRange { field, .. } => field,
            Self::EmptyName => "name",
        }
    }
}

impl OutlookErrorCode for InputError {
    fn error_code(&self) -> &'static str {
        error_code::INVALID_INPUT
    }
}
