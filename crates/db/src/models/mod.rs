//! Row models and insert DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `New*` insert DTO with the caller-supplied columns

pub mod log_entry;
pub mod task;
