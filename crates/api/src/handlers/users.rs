//! Handlers for portal users.
//!
//! There is no login; this only records accounts.

use axum::extract::State;
use axum::response::Html;
use axum::Form;
use serde_json::json;

use mylearn_core::forms::FormFields;
use mylearn_core::validation::{validate_max_length, MAX_PASSWORD_LENGTH, MAX_USERNAME_LENGTH};
use mylearn_db::models::user::CreateUser;
use mylearn_db::repositories::UserRepo;

use crate::error::AppResult;
use crate::handlers::FormPairs;
use crate::state::AppState;

/// GET /users_console
pub async fn users_console(State(state): State<AppState>) -> AppResult<Html<String>> {
    state.views.render(
        "users_console",
        &json!({ "page_title": "Users console", "created": null }),
    )
}

/// POST /users_console
///
/// A taken username is rejected by the store's unique constraint.
pub async fn create_user(
    State(state): State<AppState>,
    Form(pairs): FormPairs,
) -> AppResult<Html<String>> {
    let form = FormFields::from(pairs);

    let username = form.required("username")?.trim();
    validate_max_length("username", username, MAX_USERNAME_LENGTH)?;
    let password = form.required("password")?;
    validate_max_length("password", password, MAX_PASSWORD_LENGTH)?;

    let input = CreateUser {
        username: username.to_string(),
        password: password.to_string(),
    };
    let user = UserRepo::create(&state.pool, &input).await?;

    tracing::info!(user_id = user.id, username = %user.username, "User created");

    state.views.render(
        "users_console",
        &json!({ "page_title": "Users console", "created": user }),
    )
}
