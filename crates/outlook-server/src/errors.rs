//! HTTP error mapping.
//!
//! Every failure leaves the service as a JSON body `{ "error", "code" }`.
//! Storage and other internal failures get a generic message; the detail
//! goes to the log only.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;
use tracing::error;

use outlook_core::types::access::{GatedAction, Role};
use outlook_core::{OutlookError, OutlookErrorCode};

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Authentication required")]
    Unauthenticated,

    #[error("Role {} may not {}", .role.as_str(), .action.as_str())]
    Forbidden { role: Role, action: GatedAction },

    #[error("Malformed request body: {0}")]
    MalformedBody(String),

    #[error(transparent)]
    Outlook(#[from] OutlookError),

    #[error("Internal server error")]
    Internal,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Unauthenticated => StatusCode::UNAUTHORIZED,
            AppError::Forbidden { .. } => StatusCode::FORBIDDEN,
            AppError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            AppError::Outlook(OutlookError::InvalidInput(_)) => StatusCode::BAD_REQUEST,
            AppError::Outlook(OutlookError::RecordNotFound { .. }) => StatusCode::NOT_FOUND,
            AppError::Outlook(_) | AppError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let body = match self {
            AppError::Unauthenticated => ErrorResponse::new(self, "UNAUTHENTICATED"),
            AppError::Forbidden { .. } => ErrorResponse::new(self, "FORBIDDEN"),
            AppError::MalformedBody(_) => ErrorResponse::new(self, "INVALID_INPUT"),
            AppError::Outlook(e) if status.is_client_error() => ErrorResponse::new(self, e.error_code()),
            AppError::Outlook(e) => {
                error!(code = e.error_code(), error = %e, "request failed");
                ErrorResponse::internal()
            }
            AppError::Internal => ErrorResponse::internal(),
        };
        HttpResponse::build(status).json(body)
    }
}

#[derive(serde::Serialize)]
struct ErrorResponse {
    error: String,
    code: &'static str,
}

impl ErrorResponse {
    fn new(err: &AppError, code: &'static str) -> Self {
        Self {
            error: err.to_string(),
            code,
        }
    }

    fn internal() -> Self {
        Self {
            error: "Internal server error".to_string(),
            code: "INTERNAL_ERROR",
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
