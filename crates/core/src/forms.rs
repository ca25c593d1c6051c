//! Access to submitted HTML form fields.
//!
//! HTML forms may repeat a key (`labs[]`, `grades[]`, `student-names[]`), so
//! fields are kept as an ordered list of pairs rather than a map. Lookups by
//! name return the first value; [`FormFields::get_all`] returns every value in
//! submission order.

use chrono::NaiveDate;

use crate::error::CoreError;
use crate::types::DbId;

/// Date format used by `<input type="date">`.
pub const FORM_DATE_FORMAT: &str = "%Y-%m-%d";

/// Ordered key/value pairs from a url-encoded or multipart form.
#[derive(Debug, Clone, Default)]
pub struct FormFields {
    pairs: Vec<(String, String)>,
}

impl FormFields {
    pub fn new(pairs: Vec<(String, String)>) -> Self {
        Self { pairs }
    }

    /// Append a field, keeping submission order.
    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.pairs.push((name.into(), value.into()));
    }

    /// First value submitted under `name`, if any.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Every value submitted under `name`, in submission order.
    pub fn get_all(&self, name: &str) -> Vec<&str> {
        self.pairs
            .iter()
            .filter(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
            .collect()
    }

    /// First value under `name`, rejecting a missing or blank field.
    ///
    /// The returned value is not trimmed; only the blank check trims.
    pub fn required(&self, name: &str) -> Result<&str, CoreError> {
        match self.get(name) {
            Some(value) if !value.trim().is_empty() => Ok(value),
            _ => Err(CoreError::Validation(format!(
                "Missing required field '{name}'"
            ))),
        }
    }

    /// First value under `name`, trimmed, or `None` when missing or blank.
    pub fn optional(&self, name: &str) -> Option<&str> {
        self.get(name)
            .map(str::trim)
            .filter(|value| !value.is_empty())
    }
}

impl From<Vec<(String, String)>> for FormFields {
    fn from(pairs: Vec<(String, String)>) -> Self {
        Self::new(pairs)
    }
}

/// Parse a row identifier submitted in field `field`.
pub fn parse_id(field: &str, value: &str) -> Result<DbId, CoreError> {
    value.trim().parse::<DbId>().map_err(|_| {
        CoreError::Validation(format!("Field '{field}' must be an integer id, got '{value}'"))
    })
}

/// Parse an integer grade.
pub fn parse_grade(value: &str) -> Result<i64, CoreError> {
    value
        .trim()
        .parse::<i64>()
        .map_err(|_| CoreError::Validation(format!("Grade must be an integer, got '{value}'")))
}

/// Parse a calendar date in `YYYY-MM-DD` form.
pub fn parse_date(field: &str, value: &str) -> Result<NaiveDate, CoreError> {
    NaiveDate::parse_from_str(value.trim(), FORM_DATE_FORMAT).map_err(|_| {
        CoreError::Validation(format!(
            "Field '{field}' must be a date in YYYY-MM-DD format, got '{value}'"
        ))
    })
}
