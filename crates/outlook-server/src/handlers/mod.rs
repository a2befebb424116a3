//! Route handlers.

pub mod health_handlers;
pub mod student_handlers;
