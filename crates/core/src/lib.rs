//! Domain logic for the myLearn portal.
//!
//! Pure types and functions with no I/O: identifiers, the error taxonomy,
//! form-field access, input validation, upload filename policy and the
//! grade-report aggregation. The `db` and `api` crates build on these.

pub mod error;
pub mod forms;
pub mod report;
pub mod types;
pub mod uploads;
pub mod validation;
