use chrono::NaiveDate;
use mylearn_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `notes` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Note {
    pub id: DbId,
    pub title: String,
    pub date: NaiveDate,
    pub content: String,
}

/// DTO for creating a new note.
#[derive(Debug, Deserialize)]
pub struct CreateNote {
    pub title: String,
    pub date: NaiveDate,
    pub content: String,
}
