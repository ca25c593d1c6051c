//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//!
//! No entity is ever updated or deleted, so there are no update DTOs.

pub mod group;
pub mod lab;
pub mod mark;
pub mod news;
pub mod note;
pub mod review;
pub mod student;
pub mod user;
