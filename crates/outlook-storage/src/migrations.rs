//! Schema versioning using PRAGMA user_version.
//!
//! Each version is a const SQL string applied in order inside a
//! transaction. Already-applied versions are skipped, so `run_migrations`
//! is safe to call on every open.

use rusqlite::Connection;
use tracing::info;

use outlook_core::errors::{StorageError, StorageResult};

/// v1: the students table. Columns are nullable so rows written by older
/// tooling still load; readers reject nulls as integrity errors.
const V001_STUDENTS: &str = r#"
CREATE TABLE IF NOT EXISTS students (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT,
    attendance REAL,
    internal_marks REAL,
    assignment_score REAL,
    final_exam_score REAL,
    prediction_result TEXT
);
"#;

const MIGRATIONS: &[(u32, &str)] = &[(1, V001_STUDENTS)];

/// Latest schema version known to this build.
pub const CURRENT_VERSION: u32 = 1;

pub fn current_version(conn: &Connection) -> StorageResult<u32> {
    conn.pragma_query_value(None, "user_version", |row| row.get(0))
        .map_err(|e| StorageError::SqliteError { message: e.to_string() })
}

/// Bring the database up to `CURRENT_VERSION`. Returns the final version.
pub fn run_migrations(conn: &Connection) -> StorageResult<u32> {
    let start = current_version(conn)?;
    if start > CURRENT_VERSION {
        return Err(StorageError::MigrationFailed {
            version: start,
            message: format!("database schema {start} is newer than this build ({CURRENT_VERSION})"),
        });
    }

    for &(version, sql) in MIGRATIONS.iter().filter(|(v, _)| *v > start) {
        apply(conn, version, sql).map_err(|e| StorageError::MigrationFailed {
            version,
            message: e.to_string(),
        })?;
        info!(version, "applied student schema migration");
    }

    let version = current_version(conn)?;
    if version != start {
        info!(from = start, to = version, "student schema migration complete");
    }
    Ok(version)
}

fn apply(conn: &Connection, version: u32, sql: &str) -> rusqlite::Result<()> {
    conn.execute_batch(&format!(
        "BEGIN;\n{sql}\nPRAGMA user_version = {version};\nCOMMIT;"
    ))
}
