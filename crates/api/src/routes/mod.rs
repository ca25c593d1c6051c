pub mod consoles;
pub mod content;
pub mod grades;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the page route tree.
///
/// ```text
/// /                      news, newest first
/// /labs                  all labs
/// /notes                 all notes
/// /marks                 grade report
/// /reviews               list, create review
///
/// /admin_console         lab form, create lab
/// /labs_console          static
/// /users_console         user form, create user
/// /notes_console         note form, create note
/// /post_console          static
/// /add_news              news form, create news (multipart)
///
/// /marks_console         grading form, bulk-create marks
/// /add_group             list groups, create group
/// /add_student_console   group picker, bulk-create students
/// ```
pub fn page_routes() -> Router<AppState> {
    Router::new()
        .merge(content::router())
        .merge(consoles::router())
        .merge(grades::router())
}
