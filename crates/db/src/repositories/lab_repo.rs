//! Repository for the `labs` table.

use mylearn_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::lab::{CreateLab, Lab};

/// Column list for labs queries.
const COLUMNS: &str = "id, date, title, text";

/// Provides create/read operations for labs.
pub struct LabRepo;

impl LabRepo {
    /// Insert a new lab, returning the created row.
    pub async fn create(pool: &SqlitePool, input: &CreateLab) -> Result<Lab, sqlx::Error> {
        let query = format!(
            "INSERT INTO labs (date, title, text)
             VALUES (?, ?, ?)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Lab>(&query)
            .bind(input.date)
            .bind(&input.title)
            .bind(&input.text)
            .fetch_one(pool)
            .await
    }

    /// Find a lab by its ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Lab>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM labs WHERE id = ?");
        sqlx::query_as::<_, Lab>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all labs in insertion order.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Lab>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM labs ORDER BY id ASC");
        sqlx::query_as::<_, Lab>(&query).fetch_all(pool).await
    }
}
