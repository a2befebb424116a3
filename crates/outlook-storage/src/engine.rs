//! `StudentStorageEngine`: SQLite-backed `IStudentStore`.
//!
//! Owns one connection behind a mutex. All reads go through `with_reader()`,
//! all writes through `with_writer()`; nothing outside this crate touches the
//! raw `Connection`.

use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use rusqlite::Connection;
use tracing::{debug, info};

use outlook_core::config::StorageConfig;
use outlook_core::errors::{StorageError, StorageResult};
use outlook_core::traits::IStudentStore;
use outlook_core::{RecordDraft, RecordId, StudentRecord};

use crate::migrations;
use crate::queries::students;

pub struct StudentStorageEngine {
    conn: Mutex<Connection>,
    path: Option<PathBuf>,
}

impl StudentStorageEngine {
    /// Open a file-backed engine, creating the file and running migrations.
    pub fn open(path: &Path) -> StorageResult<Self> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| StorageError::SqliteError {
                message: format!("cannot create {}: {e}", parent.display()),
            })?;
        }
        let conn = Connection::open(path).map_err(sqe)?;
        apply_pragmas(&conn, true)?;
        let version = migrations::run_migrations(&conn)?;
        info!(path = %path.display(), schema_version = version, "student store opened");
        Ok(Self {
            conn: Mutex::new(conn),
            path: Some(path.to_path_buf()),
        })
    }

    /// Open an in-memory engine. Contents vanish on drop.
    pub fn open_in_memory() -> StorageResult<Self> {
        let conn = Connection::open_in_memory().map_err(sqe)?;
        apply_pragmas(&conn, false)?;
        migrations::run_migrations(&conn)?;
        debug!("in-memory student store opened");
        Ok(Self {
            conn: Mutex::new(conn),
            path: None,
        })
    }

    pub fn from_config(config: &StorageConfig) -> StorageResult<Self> {
        if config.in_memory {
            Self::open_in_memory()
        } else {
            Self::open(Path::new(&config.db_path))
        }
    }

    /// Database file path (None for in-memory).
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn schema_version(&self) -> StorageResult<u32> {
        self.with_reader(migrations::current_version)
    }

    pub fn with_reader<F, T>(&self, f: F) -> StorageResult<T>
    where
        F: FnOnce(&Connection) -> StorageResult<T>,
    {
        let conn = self.lock()?;
        f(&conn)
    }

    /// Writes are serialized by the same lock as reads; a single connection
    /// keeps id assignment strictly increasing.
    pub fn with_writer<F, T>(&self, f: F) -> StorageResult<T>
    where
        F: FnOnce(&Connection) -> StorageResult<T>,
    {
        let conn = self.lock()?;
        f(&conn)
    }

    fn lock(&self) -> StorageResult<MutexGuard<'_, Connection>> {
        self.conn.lock().map_err(|_| StorageError::LockPoisoned)
    }
}

fn apply_pragmas(conn: &Connection, file_backed: bool) -> StorageResult<()> {
    if file_backed {
        conn.execute_batch(
            "
            PRAGMA journal_mode = WAL;
            PRAGMA synchronous = NORMAL;
            ",
        )
        .map_err(sqe)?;
    }
    conn.execute_batch(
        "
        PRAGMA busy_timeout = 5000;
        PRAGMA temp_store = MEMORY;
        ",
    )
    .map_err(sqe)
}

fn sqe(e: impl std::fmt::Display) -> StorageError {
    StorageError::SqliteError {
        message: e.to_string(),
    }
}

impl IStudentStore for StudentStorageEngine {
    fn create(&self, draft: &RecordDraft) -> StorageResult<StudentRecord> {
        let id = self.with_writer(|conn| students::insert_student(conn, draft))?;
        Ok(draft.clone().into_record(id))
    }

    fn get(&self, id: RecordId) -> StorageResult<StudentRecord> {
        let row = self
            .with_reader(|conn| students::get_student(conn, id))?
            .ok_or(StorageError::NotFound { id })?;
        StudentRecord::try_from(row)
    }

    fn list_all(&self) -> StorageResult<Vec<StudentRecord>> {
        self.with_reader(students::list_students)?
            .into_iter()
            .map(StudentRecord::try_from)
            .collect()
    }

    fn update(&self, record: &StudentRecord) -> StorageResult<()> {
        match self.with_writer(|conn| students::update_student(conn, record))? {
            0 => Err(StorageError::NotFound { id: record.id }),
            _ => Ok(()),
        }
    }

    fn delete(&self, id: RecordId) -> StorageResult<()> {
        match self.with_writer(|conn| students::delete_student(conn, id))? {
            0 => Err(StorageError::NotFound { id }),
            _ => Ok(()),
        }
    }

    fn count(&self) -> StorageResult<usize> {
        self.with_reader(students::count_students)
    }
}
