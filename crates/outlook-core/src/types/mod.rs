//! Domain types shared across the workspace.

pub mod access;
pub mod chart;
pub mod color;
pub mod record;
pub mod submission;
pub mod verdict;
