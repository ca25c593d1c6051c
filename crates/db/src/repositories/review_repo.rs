//! Repository for the `reviews` table.

use chrono::Utc;
use sqlx::SqlitePool;

use crate::models::review::{CreateReview, Review};

/// Column list for reviews queries.
const COLUMNS: &str = "id, name, date, content";

pub struct ReviewRepo;

impl ReviewRepo {
    /// Insert a review dated now, returning the created row.
    pub async fn create(pool: &SqlitePool, input: &CreateReview) -> Result<Review, sqlx::Error> {
        let query = format!(
            "INSERT INTO reviews (name, date, content)
             VALUES (?, ?, ?)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Review>(&query)
            .bind(&input.name)
            .bind(Utc::now())
            .bind(&input.content)
            .fetch_one(pool)
            .await
    }

    /// List all reviews, newest first.
    pub async fn list_newest_first(pool: &SqlitePool) -> Result<Vec<Review>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM reviews ORDER BY date DESC, id DESC");
        sqlx::query_as::<_, Review>(&query).fetch_all(pool).await
    }
}
