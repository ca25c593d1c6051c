use chrono::NaiveDate;
use mylearn_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `labs` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Lab {
    pub id: DbId,
    pub date: NaiveDate,
    pub title: String,
    pub text: String,
}

/// DTO for creating a new lab.
#[derive(Debug, Deserialize)]
pub struct CreateLab {
    pub date: NaiveDate,
    pub title: String,
    pub text: String,
}
