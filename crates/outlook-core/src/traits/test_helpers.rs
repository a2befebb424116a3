//! `InMemoryStudentStore`: in-memory test double for `IStudentStore`.
//!
//! Used by workflow and HTTP tests to avoid creating a real SQLite file.
//! Ids start at 1 and increase monotonically, never reused after delete.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use crate::errors::{StorageError, StorageResult};
use crate::types::record::{RecordDraft, RecordId, StudentRecord};

use super::storage::IStudentStore;

#[derive(Default)]
struct Inner {
    next_id: RecordId,
    records: BTreeMap<RecordId, StudentRecord>,
}

#[derive(Default)]
pub struct InMemoryStudentStore {
    inner: Mutex<Inner>,
}

impl InMemoryStudentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record verbatim, bypassing scoring. Lets tests plant
    /// non-canonical verdict strings.
    pub fn insert_raw(&self, draft: RecordDraft) -> StorageResult<StudentRecord> {
        self.create(&draft)
    }

    fn lock(&self) -> StorageResult<MutexGuard<'_, Inner>> {
        self.inner.lock().map_err(|_| StorageError::LockPoisoned)
    }
}

impl IStudentStore for InMemoryStudentStore {
    fn create(&self, draft: &RecordDraft) -> StorageResult<StudentRecord> {
        let mut inner = self.lock()?;
        inner.next_id += 1;
        let record = draft.clone().into_record(inner.next_id);
        inner.records.insert(record.id, record.clone());
        Ok(record)
    }

    fn get(&self, id: RecordId) -> StorageResult<StudentRecord> {
        self.lock()?
            .records
            .get(&id)
            .cloned()
            .ok_or(StorageError::NotFound { id })
    }

    fn list_all(&self) -> StorageResult<Vec<StudentRecord>> {
        Ok(self.lock()?.records.values().cloned().collect())
    }

    fn update(&self, record: &StudentRecord) -> StorageResult<()> {
        let mut inner = self.lock()?;
        match inner.records.get_mut(&record.id) {
            Some(slot) => {
                *slot = record.clone();
                Ok(())
            }
            None => Err(StorageError::NotFound { id: record.id }),
        }
    }

    fn delete(&self, id: RecordId) -> StorageResult<()> {
        self.lock()?
            .records
            .remove(&id)
            .map(|_| ())
            .ok_or(StorageError::NotFound { id })
    }

    fn count(&self) -> StorageResult<usize> {
        Ok(self.lock()?.records.len())
    }
}
