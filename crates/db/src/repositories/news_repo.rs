//! Repository for the `news` table.

use chrono::Utc;
use sqlx::SqlitePool;

use crate::models::news::{CreateNews, News};

/// Column list for news queries.
const COLUMNS: &str = "id, title, date, content, image_path";

/// Provides create/read operations for news items.
pub struct NewsRepo;

impl NewsRepo {
    /// Insert a news item dated now, returning the created row.
    pub async fn create(pool: &SqlitePool, input: &CreateNews) -> Result<News, sqlx::Error> {
        let query = format!(
            "INSERT INTO news (title, date, content, image_path)
             VALUES (?, ?, ?, ?)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, News>(&query)
            .bind(&input.title)
            .bind(Utc::now())
            .bind(&input.content)
            .bind(&input.image_path)
            .fetch_one(pool)
            .await
    }

    /// List all news items, newest first.
    pub async fn list_newest_first(pool: &SqlitePool) -> Result<Vec<News>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM news ORDER BY date DESC, id DESC");
        sqlx::query_as::<_, News>(&query).fetch_all(pool).await
    }

    /// Count all news items.
    pub async fn count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM news")
            .fetch_one(pool)
            .await
    }
}
