//! SQL query modules, one per table.

pub mod students;
