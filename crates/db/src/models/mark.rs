use mylearn_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `marks` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Mark {
    pub id: DbId,
    pub student_id: DbId,
    pub lab_id: DbId,
    pub grade: i64,
}

/// DTO for creating a single mark.
#[derive(Debug, Deserialize)]
pub struct CreateMark {
    pub student_id: DbId,
    pub lab_id: DbId,
    pub grade: i64,
}
