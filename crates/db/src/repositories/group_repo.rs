//! Repository for the `groups` table.

use mylearn_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::group::{CreateGroup, Group};

/// Column list for groups queries.
const COLUMNS: &str = "id, title, description";

/// Provides create/read operations for groups.
pub struct GroupRepo;

impl GroupRepo {
    /// Insert a new group, returning the created row.
    ///
    /// Fails with a unique violation (`uq_groups_title`) if the title exists.
    pub async fn create(pool: &SqlitePool, input: &CreateGroup) -> Result<Group, sqlx::Error> {
        let query = format!(
            "INSERT INTO groups (title, description)
             VALUES (?, ?)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Group>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    /// Find a group by its ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Group>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM groups WHERE id = ?");
        sqlx::query_as::<_, Group>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all groups in insertion order.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Group>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM groups ORDER BY id ASC");
        sqlx::query_as::<_, Group>(&query).fetch_all(pool).await
    }

    /// Count all groups.
    pub async fn count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM groups")
            .fetch_one(pool)
            .await
    }
}
