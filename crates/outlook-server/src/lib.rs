//! # outlook-server
//!
//! actix-web front end for the outlook pipeline. Routes are registered by
//! `configure`; the caller supplies `web::Data<AppState>` and wraps the app
//! in `AuthMiddleware` and `LoggingMiddleware`.

pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod state;

use actix_web::web;

pub use errors::{AppError, AppResult};
pub use middleware::{AuthMiddleware, Caller, LoggingMiddleware};
pub use state::{AppState, SharedStore, Workflow};

/// Register every route plus the JSON form-error handler.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::FormConfig::default()
            .error_handler(|err, _req| AppError::MalformedBody(err.to_string()).into()),
    );
    handlers::health_handlers::configure(cfg);
    handlers::student_handlers::configure(cfg);
}
