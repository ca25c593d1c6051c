//! Repository for the `students` table.

use mylearn_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::student::{CreateStudent, Student};

/// Column list for students queries.
const COLUMNS: &str = "id, full_name, group_id";

/// Provides create/read operations for students.
pub struct StudentRepo;

impl StudentRepo {
    /// Insert a single student, returning the created row.
    pub async fn create(pool: &SqlitePool, input: &CreateStudent) -> Result<Student, sqlx::Error> {
        let query = format!(
            "INSERT INTO students (full_name, group_id)
             VALUES (?, ?)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Student>(&query)
            .bind(&input.full_name)
            .bind(input.group_id)
            .fetch_one(pool)
            .await
    }

    /// Insert several students into one group in a single transaction.
    ///
    /// Either every name is stored or none is (e.g. on an unknown group).
    pub async fn create_many(
        pool: &SqlitePool,
        group_id: DbId,
        full_names: &[String],
    ) -> Result<Vec<Student>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO students (full_name, group_id)
             VALUES (?, ?)
             RETURNING {COLUMNS}"
        );
        let mut created = Vec::with_capacity(full_names.len());
        for full_name in full_names {
            let student = sqlx::query_as::<_, Student>(&query)
                .bind(full_name)
                .bind(group_id)
                .fetch_one(&mut *tx)
                .await?;
            created.push(student);
        }

        tx.commit().await?;
        tracing::debug!(group_id, count = created.len(), "Inserted student batch");
        Ok(created)
    }

    /// List all students in insertion order.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Student>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM students ORDER BY id ASC");
        sqlx::query_as::<_, Student>(&query).fetch_all(pool).await
    }

    /// List the students of one group in insertion order.
    pub async fn list_by_group(
        pool: &SqlitePool,
        group_id: DbId,
    ) -> Result<Vec<Student>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM students WHERE group_id = ? ORDER BY id ASC");
        sqlx::query_as::<_, Student>(&query)
            .bind(group_id)
            .fetch_all(pool)
            .await
    }

    /// Count all students.
    pub async fn count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM students")
            .fetch_one(pool)
            .await
    }
}
