//! Handlers for class groups and their students.

use axum::extract::State;
use axum::response::{Html, Redirect};
use axum::Form;
use serde_json::json;

use mylearn_core::error::CoreError;
use mylearn_core::forms::{parse_id, FormFields};
use mylearn_core::validation::{clean_student_names, validate_max_length, MAX_GROUP_TITLE_LENGTH};
use mylearn_db::models::group::CreateGroup;
use mylearn_db::repositories::{GroupRepo, StudentRepo};

use crate::error::AppResult;
use crate::handlers::FormPairs;
use crate::state::AppState;

/// GET /add_group
///
/// Group form plus the list of existing groups.
pub async fn list_groups(State(state): State<AppState>) -> AppResult<Html<String>> {
    let groups = GroupRepo::list(&state.pool).await?;
    state
        .views
        .render("add_group", &json!({ "page_title": "Groups", "groups": groups }))
}

/// POST /add_group
///
/// Create a group from `group-title` and optional `group-description`.
/// A duplicate title is rejected by the store.
pub async fn create_group(
    State(state): State<AppState>,
    Form(pairs): FormPairs,
) -> AppResult<Redirect> {
    let form = FormFields::from(pairs);

    let title = form
        .required("group-title")
        .map_err(|_| CoreError::Validation("Group title is required".to_string()))?
        .trim();
    validate_max_length("group-title", title, MAX_GROUP_TITLE_LENGTH)?;

    let input = CreateGroup {
        title: title.to_string(),
        description: form.optional("group-description").map(str::to_string),
    };
    let group = GroupRepo::create(&state.pool, &input).await?;

    tracing::info!(group_id = group.id, title = %group.title, "Group created");

    Ok(Redirect::to("/add_group"))
}

/// GET /add_student_console
pub async fn student_console(State(state): State<AppState>) -> AppResult<Html<String>> {
    let groups = GroupRepo::list(&state.pool).await?;
    state.views.render(
        "add_student_console",
        &json!({ "page_title": "Students console", "groups": groups }),
    )
}

/// POST /add_student_console
///
/// Add every non-blank `student-names[]` entry to group `group-id`, in one
/// transaction. Blank entries are skipped without error.
pub async fn create_students(
    State(state): State<AppState>,
    Form(pairs): FormPairs,
) -> AppResult<Redirect> {
    let form = FormFields::from(pairs);

    let group_id = parse_id("group-id", form.required("group-id")?)?;
    let names = clean_student_names(&form.get_all("student-names[]"))?;

    let students = StudentRepo::create_many(&state.pool, group_id, &names).await?;

    tracing::info!(group_id, count = students.len(), "Students added");

    Ok(Redirect::to("/add_student_console"))
}
