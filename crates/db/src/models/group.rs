use mylearn_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `groups` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Group {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
}

/// DTO for creating a new group.
#[derive(Debug, Deserialize)]
pub struct CreateGroup {
    pub title: String,
    pub description: Option<String>,
}
