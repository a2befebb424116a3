//! `IStudentStore`: the storage collaborator contract.
//!
//! The core never creates or deletes records on its own; it computes the
//! values this trait persists. The SQLite implementation lives in
//! `outlook-storage`. Implementations serialize id assignment themselves.

use std::sync::Arc;

use crate::errors::StorageResult;
use crate::types::record::{RecordDraft, RecordId, StudentRecord};

/// CRUD by identifier over student records.
pub trait IStudentStore: Send + Sync {
    /// Persist a draft and return it with its newly assigned id.
    fn create(&self, draft: &RecordDraft) -> StorageResult<StudentRecord>;

    /// Fetch one record. Missing id → `StorageError::NotFound`.
    fn get(&self, id: RecordId) -> StorageResult<StudentRecord>;

    /// All records in creation order.
    fn list_all(&self) -> StorageResult<Vec<StudentRecord>>;

    /// Overwrite every mutable field of an existing record.
    /// Missing id → `StorageError::NotFound`.
    fn update(&self, record: &StudentRecord) -> StorageResult<()>;

    /// Remove a record. Missing id → `StorageError::NotFound`.
    fn delete(&self, id: RecordId) -> StorageResult<()>;

    /// Number of stored records.
    fn count(&self) -> StorageResult<usize> {
        Ok(self.list_all()?.len())
    }
}

// ─── Arc blanket impl ───────────────────────────────────────────────

impl<T: IStudentStore + ?Sized> IStudentStore for Arc<T> {
    fn create(&self, draft: &RecordDraft) -> StorageResult<StudentRecord> {
        (**self).create(draft)
    }
    fn get(&self, id: RecordId) -> StorageResult<StudentRecord> {
        (**self).get(id)
    }
    fn list_all(&self) -> StorageResult<Vec<StudentRecord>> {
        (**self).list_all()
    }
    fn update(&self, record: &StudentRecord) -> StorageResult<()> {
        (**self).update(record)
    }
    fn delete(&self, id: RecordId) -> StorageResult<()> {
        (**self).delete(id)
    }
    fn count(&self) -> StorageResult<usize> {
        (**self).count()
    }
}
