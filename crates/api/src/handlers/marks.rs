//! Handlers for grades: the grade report and the grading console.

use axum::extract::State;
use axum::response::{Html, Redirect};
use axum::Form;
use serde::Serialize;
use serde_json::json;

use mylearn_core::forms::{parse_id, FormFields};
use mylearn_core::report::{GradeReport, StudentGrades};
use mylearn_core::validation::pair_lab_grades;
use mylearn_db::repositories::{LabRepo, MarkRepo, ReportRepo, StudentRepo};

use crate::error::AppResult;
use crate::handlers::FormPairs;
use crate::state::AppState;

/// One group's section of the report page.
#[derive(Debug, Serialize)]
struct GroupSection<'a> {
    title: &'a str,
    students: &'a [StudentGrades],
}

/// Flatten the report into an ordered list for the template.
///
/// Templates iterate JSON objects in key order, so the ordered map is passed
/// as a list of sections instead.
fn report_sections(report: &GradeReport) -> Vec<GroupSection<'_>> {
    report
        .iter()
        .map(|(title, students)| GroupSection { title, students })
        .collect()
}

/// GET /marks
///
/// Grades of every student, grouped by group title.
pub async fn grade_report(State(state): State<AppState>) -> AppResult<Html<String>> {
    let report = ReportRepo::grade_report(&state.pool).await?;
    state.views.render(
        "marks",
        &json!({ "page_title": "Marks", "groups": report_sections(&report) }),
    )
}

/// GET /marks_console
pub async fn marks_console(State(state): State<AppState>) -> AppResult<Html<String>> {
    let students = StudentRepo::list(&state.pool).await?;
    let labs = LabRepo::list(&state.pool).await?;
    state.views.render(
        "marks_console",
        &json!({ "page_title": "Marks console", "students": students, "labs": labs }),
    )
}

/// POST /marks_console
///
/// Record one mark per `labs[]`/`grades[]` pair for `student_id`. The lists
/// must line up; nothing is written unless the whole batch is valid. The
/// `group-title` field sent by the form is ignored.
pub async fn create_marks(
    State(state): State<AppState>,
    Form(pairs): FormPairs,
) -> AppResult<Redirect> {
    let form = FormFields::from(pairs);

    let student_id = parse_id("student_id", form.required("student_id")?)?;
    let lab_grades = pair_lab_grades(&form.get_all("labs[]"), &form.get_all("grades[]"))?;

    let marks = MarkRepo::create_many(&state.pool, student_id, &lab_grades).await?;

    tracing::info!(student_id, count = marks.len(), "Marks recorded");

    Ok(Redirect::to("/marks_console"))
}
