//! Admin consoles for publishing content.

use axum::routing::get;
use axum::Router;

use crate::handlers::{labs, news, notes, users};
use crate::state::AppState;

/// ```text
/// GET, POST   /admin_console   -> admin_console, create_lab
/// GET         /labs_console    -> labs_console
/// GET, POST   /users_console   -> users_console, create_user
/// GET, POST   /notes_console   -> notes_console, create_note
/// GET         /post_console    -> post_console
/// GET, POST   /add_news        -> add_news_form, create_news
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/admin_console",
            get(labs::admin_console).post(labs::create_lab),
        )
        .route("/labs_console", get(labs::labs_console))
        .route(
            "/users_console",
            get(users::users_console).post(users::create_user),
        )
        .route(
            "/notes_console",
            get(notes::notes_console).post(notes::create_note),
        )
        .route("/post_console", get(news::post_console))
        .route(
            "/add_news",
            get(news::add_news_form).post(news::create_news),
        )
}
