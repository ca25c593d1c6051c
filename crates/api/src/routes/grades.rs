//! Groups, students and marks.

use axum::routing::get;
use axum::Router;

use crate::handlers::{groups, marks};
use crate::state::AppState;

/// ```text
/// GET         /marks                 -> grade_report
/// GET, POST   /marks_console         -> marks_console, create_marks
/// GET, POST   /add_group             -> list_groups, create_group
/// GET, POST   /add_student_console   -> student_console, create_students
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/marks", get(marks::grade_report))
        .route(
            "/marks_console",
            get(marks::marks_console).post(marks::create_marks),
        )
        .route(
            "/add_group",
            get(groups::list_groups).post(groups::create_group),
        )
        .route(
            "/add_student_console",
            get(groups::student_console).post(groups::create_students),
        )
}
