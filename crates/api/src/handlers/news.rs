//! Handlers for news posts, including the image upload.

use axum::extract::{Multipart, State};
use axum::response::Html;
use serde_json::json;

use mylearn_core::forms::FormFields;
use mylearn_core::validation::{validate_max_length, MAX_NEWS_TITLE_LENGTH};
use mylearn_db::models::news::CreateNews;
use mylearn_db::repositories::NewsRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;
use crate::uploads::{discard_image, store_image};

/// Multipart field carrying the image file.
const IMAGE_FIELD: &str = "image";

/// A file part read from a multipart body.
struct UploadedFile {
    filename: String,
    data: Vec<u8>,
}

/// GET /
///
/// Front page: all news, newest first.
pub async fn list_news(State(state): State<AppState>) -> AppResult<Html<String>> {
    let news = NewsRepo::list_newest_first(&state.pool).await?;
    state
        .views
        .render("index", &json!({ "page_title": "News", "news": news }))
}

/// GET /add_news
pub async fn add_news_form(State(state): State<AppState>) -> AppResult<Html<String>> {
    state
        .views
        .render("add_news", &json!({ "page_title": "Add news", "created": null }))
}

/// POST /add_news
///
/// Multipart fields: `title`, `content` and an optional `image` file. An
/// image with a disallowed name is dropped and the news item is stored
/// without one. A stored image is removed again if the insert fails.
pub async fn create_news(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<Html<String>> {
    let mut form = FormFields::default();
    let mut image: Option<UploadedFile> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let name = field.name().unwrap_or("").to_string();
        if name == IMAGE_FIELD {
            let filename = field.file_name().unwrap_or("").to_string();
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::BadRequest(e.to_string()))?;
            if !filename.is_empty() {
                image = Some(UploadedFile {
                    filename,
                    data: data.to_vec(),
                });
            }
        } else {
            let text = field
                .text()
                .await
                .map_err(|e| AppError::BadRequest(e.to_string()))?;
            form.push(name, text);
        }
    }

    let title = form.required("title")?.trim();
    validate_max_length("title", title, MAX_NEWS_TITLE_LENGTH)?;
    let content = form.required("content")?;

    let stored = match image {
        Some(file) => store_image(&state.config, &file.filename, &file.data).await?,
        None => None,
    };

    let input = CreateNews {
        title: title.to_string(),
        content: content.to_string(),
        image_path: stored.as_ref().map(|s| s.public_path.clone()),
    };
    let news = match NewsRepo::create(&state.pool, &input).await {
        Ok(news) => news,
        Err(e) => {
            if let Some(stored) = &stored {
                discard_image(stored).await;
            }
            return Err(e.into());
        }
    };

    tracing::info!(
        news_id = news.id,
        has_image = news.image_path.is_some(),
        "News created"
    );

    state
        .views
        .render("add_news", &json!({ "page_title": "Add news", "created": news }))
}

/// GET /post_console
pub async fn post_console(State(state): State<AppState>) -> AppResult<Html<String>> {
    state
        .views
        .render("post_console", &json!({ "page_title": "Posts console" }))
}
