//! Public listing pages.

use axum::routing::get;
use axum::Router;

use crate::handlers::{labs, news, notes, reviews};
use crate::state::AppState;

/// ```text
/// GET         /          -> list_news
/// GET         /labs      -> list_labs
/// GET         /notes     -> list_notes
/// GET, POST   /reviews   -> list_reviews, create_review
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(news::list_news))
        .route("/labs", get(labs::list_labs))
        .route("/notes", get(notes::list_notes))
        .route(
            "/reviews",
            get(reviews::list_reviews).post(reviews::create_review),
        )
}
