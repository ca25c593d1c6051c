//! Repository for the `marks` table.
//!
//! Marks are append-only: a second mark for the same student and lab is a
//! new row, not a replacement.

use mylearn_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::mark::{CreateMark, Mark};

/// Column list for marks queries.
const COLUMNS: &str = "id, student_id, lab_id, grade";

/// Provides create/read operations for marks.
pub struct MarkRepo;

impl MarkRepo {
    /// Insert a single mark, returning the created row.
    pub async fn create(pool: &SqlitePool, input: &CreateMark) -> Result<Mark, sqlx::Error> {
        let query = format!(
            "INSERT INTO marks (student_id, lab_id, grade)
             VALUES (?, ?, ?)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Mark>(&query)
            .bind(input.student_id)
            .bind(input.lab_id)
            .bind(input.grade)
            .fetch_one(pool)
            .await
    }

    /// Insert one mark per `(lab_id, grade)` pair for a student, in a single
    /// transaction. A dangling student or lab id rolls back the whole batch.
    pub async fn create_many(
        pool: &SqlitePool,
        student_id: DbId,
        lab_grades: &[(DbId, i64)],
    ) -> Result<Vec<Mark>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO marks (student_id, lab_id, grade)
             VALUES (?, ?, ?)
             RETURNING {COLUMNS}"
        );
        let mut created = Vec::with_capacity(lab_grades.len());
        for &(lab_id, grade) in lab_grades {
            let mark = sqlx::query_as::<_, Mark>(&query)
                .bind(student_id)
                .bind(lab_id)
                .bind(grade)
                .fetch_one(&mut *tx)
                .await?;
            created.push(mark);
        }

        tx.commit().await?;
        tracing::debug!(student_id, count = created.len(), "Inserted mark batch");
        Ok(created)
    }

    /// List all marks in insertion order.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Mark>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM marks ORDER BY id ASC");
        sqlx::query_as::<_, Mark>(&query).fetch_all(pool).await
    }

    /// List one student's marks in insertion order.
    pub async fn list_by_student(
        pool: &SqlitePool,
        student_id: DbId,
    ) -> Result<Vec<Mark>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM marks WHERE student_id = ? ORDER BY id ASC");
        sqlx::query_as::<_, Mark>(&query)
            .bind(student_id)
            .fetch_all(pool)
            .await
    }

    /// Count all marks.
    pub async fn count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM marks")
            .fetch_one(pool)
            .await
    }
}
