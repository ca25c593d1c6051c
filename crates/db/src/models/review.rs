use mylearn_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `reviews` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Review {
    pub id: DbId,
    pub name: String,
    pub date: Timestamp,
    pub content: String,
}

/// DTO for creating a review. The date is set at insert time.
#[derive(Debug, Deserialize)]
pub struct CreateReview {
    pub name: String,
    pub content: String,
}
