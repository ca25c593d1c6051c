//! Repository for the `notes` table.

use sqlx::SqlitePool;

use crate::models::note::{CreateNote, Note};

/// Column list for notes queries.
const COLUMNS: &str = "id, title, date, content";

pub struct NoteRepo;

impl NoteRepo {
    /// Insert a new note, returning the created row.
    pub async fn create(pool: &SqlitePool, input: &CreateNote) -> Result<Note, sqlx::Error> {
        let query = format!(
            "INSERT INTO notes (title, date, content)
             VALUES (?, ?, ?)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Note>(&query)
            .bind(&input.title)
            .bind(input.date)
            .bind(&input.content)
            .fetch_one(pool)
            .await
    }

    /// List all notes in insertion order.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Note>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM notes ORDER BY id ASC");
        sqlx::query_as::<_, Note>(&query).fetch_all(pool).await
    }
}
