//! Shared traits used across outlook crates.

pub mod storage;
pub mod test_helpers;

pub use storage::IStudentStore;
pub use test_helpers::InMemoryStudentStore;
