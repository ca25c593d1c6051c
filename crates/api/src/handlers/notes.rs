//! Handlers for personal notes.

use axum::extract::State;
use axum::response::Html;
use axum::Form;
use serde_json::json;

use mylearn_core::forms::{parse_date, FormFields};
use mylearn_core::validation::{validate_max_length, MAX_NOTE_TITLE_LENGTH};
use mylearn_db::models::note::CreateNote;
use mylearn_db::repositories::NoteRepo;

use crate::error::AppResult;
use crate::handlers::FormPairs;
use crate::state::AppState;

/// GET /notes
pub async fn list_notes(State(state): State<AppState>) -> AppResult<Html<String>> {
    let notes = NoteRepo::list(&state.pool).await?;
    state
        .views
        .render("notes", &json!({ "page_title": "Notes", "notes": notes }))
}

/// GET /notes_console
pub async fn notes_console(State(state): State<AppState>) -> AppResult<Html<String>> {
    state.views.render(
        "notes_console",
        &json!({ "page_title": "Notes console", "created": null }),
    )
}

/// POST /notes_console
///
/// The note form reuses the lab field names: `lab-title`, `lab-date`,
/// `lab-content`.
pub async fn create_note(
    State(state): State<AppState>,
    Form(pairs): FormPairs,
) -> AppResult<Html<String>> {
    let form = FormFields::from(pairs);

    let title = form.required("lab-title")?.trim();
    validate_max_length("lab-title", title, MAX_NOTE_TITLE_LENGTH)?;
    let date = parse_date("lab-date", form.required("lab-date")?)?;
    let content = form.required("lab-content")?;

    let input = CreateNote {
        title: title.to_string(),
        date,
        content: content.to_string(),
    };
    let note = NoteRepo::create(&state.pool, &input).await?;

    tracing::info!(note_id = note.id, "Note created");

    state.views.render(
        "notes_console",
        &json!({ "page_title": "Notes console", "created": note }),
    )
}
