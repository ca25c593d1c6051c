//! Loads the rows behind the grade report.
//!
//! All four tables are read once; the grouping itself is done by
//! [`mylearn_core::report::build_report`].

use std::collections::HashMap;

use mylearn_core::error::CoreError;
use mylearn_core::report::{build_report, GradeReport, MarkEntry, StudentEntry};
use mylearn_core::types::DbId;
use sqlx::SqlitePool;

use crate::repositories::{MarkRepo, StudentRepo};

/// Everything the report needs, in store order.
#[derive(Debug, Default)]
pub struct ReportInputs {
    pub group_titles: HashMap<DbId, String>,
    pub lab_titles: HashMap<DbId, String>,
    pub students: Vec<StudentEntry>,
    pub marks: Vec<MarkEntry>,
}

impl ReportInputs {
    /// Aggregate the loaded rows into a [`GradeReport`].
    pub fn build(&self) -> Result<GradeReport, CoreError> {
        build_report(&self.group_titles, &self.lab_titles, &self.students, &self.marks)
    }
}

pub struct ReportRepo;

impl ReportRepo {
    /// Load groups, labs, students and marks for the report.
    ///
    /// Students and marks come back in insertion order.
    pub async fn load_inputs(pool: &SqlitePool) -> Result<ReportInputs, sqlx::Error> {
        let group_titles = sqlx::query_as::<_, (DbId, String)>("SELECT id, title FROM groups")
            .fetch_all(pool)
            .await?
            .into_iter()
            .collect();

        let lab_titles = sqlx::query_as::<_, (DbId, String)>("SELECT id, title FROM labs")
            .fetch_all(pool)
            .await?
            .into_iter()
            .collect();

        let students = StudentRepo::list(pool)
            .await?
            .into_iter()
            .map(|s| StudentEntry {
                id: s.id,
                full_name: s.full_name,
                group_id: s.group_id,
            })
            .collect();

        let marks = MarkRepo::list(pool)
            .await?
            .into_iter()
            .map(|m| MarkEntry {
                student_id: m.student_id,
                lab_id: m.lab_id,
                grade: m.grade,
            })
            .collect();

        Ok(ReportInputs {
            group_titles,
            lab_titles,
            students,
            marks,
        })
    }

    /// Load and aggregate in one call.
    pub async fn grade_report(pool: &SqlitePool) -> Result<GradeReport, ReportError> {
        let inputs = Self::load_inputs(pool).await?;
        Ok(inputs.build()?)
    }
}

/// Failure while producing the grade report.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error(transparent)]
    Database(#[from] sqlx::Error),

    #[error(transparent)]
    Core(#[from] CoreError),
}
