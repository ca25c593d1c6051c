use mylearn_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `news` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct News {
    pub id: DbId,
    pub title: String,
    pub date: Timestamp,
    pub content: String,
    /// Public path of the attached image, e.g. `static/img/photo.png`.
    pub image_path: Option<String>,
}

/// DTO for creating a news item. The date is set at insert time.
#[derive(Debug, Deserialize)]
pub struct CreateNews {
    pub title: String,
    pub content: String,
    pub image_path: Option<String>,
}
