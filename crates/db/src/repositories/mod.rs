//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&SqlitePool` as the first argument. Bulk inserts run inside a
//! single transaction.

pub mod group_repo;
pub mod lab_repo;
pub mod mark_repo;
pub mod news_repo;
pub mod note_repo;
pub mod report_repo;
pub mod review_repo;
pub mod student_repo;
pub mod user_repo;

pub use group_repo::GroupRepo;
pub use lab_repo::LabRepo;
pub use mark_repo::MarkRepo;
pub use news_repo::NewsRepo;
pub use note_repo::NoteRepo;
pub use report_repo::{ReportError, ReportInputs, ReportRepo};
pub use review_repo::ReviewRepo;
pub use student_repo::StudentRepo;
pub use user_repo::UserRepo;
