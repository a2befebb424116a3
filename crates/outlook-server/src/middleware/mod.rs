//! Request middleware: bearer-token authentication and request logging.

pub mod auth;
pub mod logging;

pub use auth::{AuthMiddleware, Caller};
pub use logging::{LoggingMiddleware, RequestSummary};
