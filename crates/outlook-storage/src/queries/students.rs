//! students table queries.

use outlook_core::errors::{StorageError, StorageResult};
use outlook_core::{RecordDraft, RecordId, StudentRecord};
use rusqlite::{params, Connection, OptionalExtension, Row};

/// A raw students row. Every column except `id` may be NULL on disk.
#[derive(Debug, Clone)]
pub struct StudentRow {
    pub id: RecordId,
    pub name: Option<String>,
    pub attendance: Option<f64>,
    pub internal_marks: Option<f64>,
    pub assignment_score: Option<f64>,
    pub final_exam_score: Option<f64>,
    pub prediction_result: Option<String>,
}

impl StudentRow {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            name: row.get(1)?,
            attendance: row.get(2)?,
            internal_marks: row.get(3)?,
            assignment_score: row.get(4)?,
            final_exam_score: row.get(5)?,
            prediction_result: row.get(6)?,
        })
    }
}

impl TryFrom<StudentRow> for StudentRecord {
    type Error = StorageError;

    fn try_from(r: StudentRow) -> Result<Self, Self::Error> {
        let id = r.id;
        let missing = |field: &'static str| StorageError::DataIntegrity { id, field };
        Ok(Self {
            id,
            name: r.name.ok_or_else(|| missing("name"))?,
            attendance: r.attendance.ok_or_else(|| missing("attendance"))?,
            internal_marks: r.internal_marks.ok_or_else(|| missing("internal_marks"))?,
            assignment_score: r.assignment_score.ok_or_else(|| missing("assignment_score"))?,
            final_exam_score: r.final_exam_score.ok_or_else(|| missing("final_exam_score"))?,
            prediction_result: r.prediction_result.ok_or_else(|| missing("prediction_result"))?,
        })
    }
}

const SELECT_COLUMNS: &str = "SELECT id, name, attendance, internal_marks, assignment_score,
        final_exam_score, prediction_result FROM students";

fn sqe(e: rusqlite::Error) -> StorageError {
    StorageError::SqliteError { message: e.to_string() }
}

/// Insert a draft and return the assigned id.
pub fn insert_student(conn: &Connection, draft: &RecordDraft) -> StorageResult<RecordId> {
    let mut stmt = conn
        .prepare_cached(
            "INSERT INTO students
             (name, attendance, internal_marks, assignment_score, final_exam_score, prediction_result)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        )
        .map_err(sqe)?;
    stmt.execute(params![
        draft.name,
        draft.attendance,
        draft.internal_marks,
        draft.assignment_score,
        draft.final_exam_score,
        draft.prediction_result,
    ])
    .map_err(sqe)?;
    Ok(conn.last_insert_rowid())
}

pub fn get_student(conn: &Connection, id: RecordId) -> StorageResult<Option<StudentRow>> {
    let mut stmt = conn
        .prepare_cached(&format!("{SELECT_COLUMNS} WHERE id = ?1"))
        .map_err(sqe)?;
    stmt.query_row(params![id], StudentRow::from_row)
        .optional()
        .map_err(sqe)
}

/// Every row ordered by id, which is creation order.
pub fn list_students(conn: &Connection) -> StorageResult<Vec<StudentRow>> {
    let mut stmt = conn
        .prepare_cached(&format!("{SELECT_COLUMNS} ORDER BY id"))
        .map_err(sqe)?;
    let rows = stmt.query_map([], StudentRow::from_row).map_err(sqe)?;

    let mut result = Vec::new();
    for row in rows {
        result.push(row.map_err(sqe)?);
    }
    Ok(result)
}

/// Overwrite every mutable column. Returns the number of rows changed.
pub fn update_student(conn: &Connection, record: &StudentRecord) -> StorageResult<usize> {
    let mut stmt = conn
        .prepare_cached(
            "UPDATE students SET
                name = ?2, attendance = ?3, internal_marks = ?4,
                assignment_score = ?5, final_exam_score = ?6, prediction_result = ?7
             WHERE id = ?1",
        )
        .map_err(sqe)?;
    stmt.execute(params![
        record.id,
        record.name,
        record.attendance,
        record.internal_marks,
        record.assignment_score,
        record.final_exam_score,
        record.prediction_result,
    ])
    .map_err(sqe)
}

/// Returns the number of rows removed.
pub fn delete_student(conn: &Connection, id: RecordId) -> StorageResult<usize> {
    conn.execute("DELETE FROM students WHERE id = ?1", params![id])
        .map_err(sqe)
}

pub fn count_students(conn: &Connection) -> StorageResult<usize> {
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM students", [], |row| row.get(0))
        .map_err(sqe)?;
    Ok(count.max(0) as usize)
}
