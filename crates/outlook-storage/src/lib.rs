//! # outlook-storage
//!
//! SQLite persistence for student records.
//! One serialized connection, forward-only migrations tracked with
//! `PRAGMA user_version`, one query module per table.

pub mod engine;
pub mod migrations;
pub mod queries;

pub use engine::StudentStorageEngine;
