//! Input validation for form submissions.
//!
//! Length limits mirror the column sizes of the schema.

use crate::error::CoreError;
use crate::forms::{parse_grade, parse_id};
use crate::types::DbId;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

pub const MAX_GROUP_TITLE_LENGTH: usize = 200;
pub const MAX_STUDENT_NAME_LENGTH: usize = 200;
pub const MAX_LAB_TITLE_LENGTH: usize = 200;
pub const MAX_NEWS_TITLE_LENGTH: usize = 100;
pub const MAX_NOTE_TITLE_LENGTH: usize = 120;
pub const MAX_USERNAME_LENGTH: usize = 120;
pub const MAX_PASSWORD_LENGTH: usize = 120;
pub const MAX_REVIEW_NAME_LENGTH: usize = 120;

// ---------------------------------------------------------------------------
// Validation functions
// ---------------------------------------------------------------------------

/// Reject `value` when it is longer than `max` characters.
pub fn validate_max_length(field: &str, value: &str, max: usize) -> Result<(), CoreError> {
    let len = value.chars().count();
    if len > max {
        return Err(CoreError::Validation(format!(
            "Field '{field}' must be at most {max} characters (got {len})"
        )));
    }
    Ok(())
}

/// Pair submitted lab ids with grades by position.
///
/// Both lists must be non-empty and of equal length; every entry must parse.
/// Nothing is returned unless the whole batch is valid.
pub fn pair_lab_grades(lab_ids: &[&str], grades: &[&str]) -> Result<Vec<(DbId, i64)>, CoreError> {
    if lab_ids.is_empty() || grades.is_empty() {
        return Err(CoreError::Validation(
            "Not all data provided: at least one lab and one grade are required".to_string(),
        ));
    }
    if lab_ids.len() != grades.len() {
        return Err(CoreError::Validation(format!(
            "Number of labs ({}) does not match number of grades ({})",
            lab_ids.len(),
            grades.len()
        )));
    }

    lab_ids
        .iter()
        .zip(grades)
        .map(|(lab_id, grade)| Ok((parse_id("labs[]", lab_id)?, parse_grade(grade)?)))
        .collect()
}

/// Trim submitted student names, dropping blank entries.
pub fn clean_student_names(names: &[&str]) -> Result<Vec<String>, CoreError> {
    names
        .iter()
        .map(|name| name.trim())
        .filter(|name| !name.is_empty())
        .map(|name| {
            validate_max_length("student-names[]", name, MAX_STUDENT_NAME_LENGTH)?;
            Ok(name.to_string())
        })
        .collect()
}
