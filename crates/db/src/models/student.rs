use mylearn_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `students` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Student {
    pub id: DbId,
    pub full_name: String,
    pub group_id: DbId,
}

/// DTO for creating a single student.
#[derive(Debug, Deserialize)]
pub struct CreateStudent {
    pub full_name: String,
    pub group_id: DbId,
}
