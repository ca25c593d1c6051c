//! Handlers for visitor reviews.

use axum::extract::State;
use axum::response::Html;
use axum::Form;
use serde_json::json;

use mylearn_core::forms::FormFields;
use mylearn_core::validation::{validate_max_length, MAX_REVIEW_NAME_LENGTH};
use mylearn_db::models::review::{CreateReview, Review};
use mylearn_db::repositories::ReviewRepo;

use crate::error::AppResult;
use crate::handlers::FormPairs;
use crate::state::AppState;

fn render_reviews(
    state: &AppState,
    reviews: &[Review],
    created: Option<&Review>,
) -> AppResult<Html<String>> {
    state.views.render(
        "reviews",
        &json!({ "page_title": "Reviews", "reviews": reviews, "created": created }),
    )
}

/// GET /reviews
///
/// List all reviews, newest first.
pub async fn list_reviews(State(state): State<AppState>) -> AppResult<Html<String>> {
    let reviews = ReviewRepo::list_newest_first(&state.pool).await?;
    render_reviews(&state, &reviews, None)
}

/// POST /reviews
///
/// Store a review from `name` and `content` and show the updated list.
pub async fn create_review(
    State(state): State<AppState>,
    Form(pairs): FormPairs,
) -> AppResult<Html<String>> {
    let form = FormFields::from(pairs);

    let name = form.required("name")?.trim();
    validate_max_length("name", name, MAX_REVIEW_NAME_LENGTH)?;
    let content = form.required("content")?;

    let input = CreateReview {
        name: name.to_string(),
        content: content.to_string(),
    };
    let review = ReviewRepo::create(&state.pool, &input).await?;

    tracing::info!(review_id = review.id, "Review created");

    let reviews = ReviewRepo::list_newest_first(&state.pool).await?;
    render_reviews(&state, &reviews, Some(&review))
}
