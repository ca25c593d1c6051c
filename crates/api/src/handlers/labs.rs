//! Handlers for lab assignments.

use axum::extract::State;
use axum::response::{Html, Redirect};
use axum::Form;
use serde_json::json;

use mylearn_core::forms::{parse_date, FormFields};
use mylearn_core::validation::{validate_max_length, MAX_LAB_TITLE_LENGTH};
use mylearn_db::models::lab::CreateLab;
use mylearn_db::repositories::LabRepo;

use crate::error::AppResult;
use crate::handlers::FormPairs;
use crate::state::AppState;

/// GET /labs
///
/// List all labs in publication order.
pub async fn list_labs(State(state): State<AppState>) -> AppResult<Html<String>> {
    let labs = LabRepo::list(&state.pool).await?;
    state
        .views
        .render("labs", &json!({ "page_title": "Labs", "labs": labs }))
}

/// GET /admin_console
pub async fn admin_console(State(state): State<AppState>) -> AppResult<Html<String>> {
    state
        .views
        .render("admin_console", &json!({ "page_title": "Admin console" }))
}

/// POST /admin_console
///
/// Create a lab from `lab-title`, `lab-date` (YYYY-MM-DD) and `lab-content`,
/// then redirect to the front page.
pub async fn create_lab(
    State(state): State<AppState>,
    Form(pairs): FormPairs,
) -> AppResult<Redirect> {
    let form = FormFields::from(pairs);

    let title = form.required("lab-title")?.trim();
    validate_max_length("lab-title", title, MAX_LAB_TITLE_LENGTH)?;
    let date = parse_date("lab-date", form.required("lab-date")?)?;
    let text = form.required("lab-content")?;

    let input = CreateLab {
        date,
        title: title.to_string(),
        text: text.to_string(),
    };
    let lab = LabRepo::create(&state.pool, &input).await?;

    tracing::info!(lab_id = lab.id, title = %lab.title, "Lab created");

    Ok(Redirect::to("/"))
}

/// GET /labs_console
pub async fn labs_console(State(state): State<AppState>) -> AppResult<Html<String>> {
    state
        .views
        .render("labs_console", &json!({ "page_title": "Labs console" }))
}
