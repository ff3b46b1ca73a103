//! Task model.

use mission_log_core::types::{DbId, LogDate, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `tasks` table. `done` is the only mutable column.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Task {
    pub id: DbId,
    pub log_date: LogDate,
    pub description: String,
    pub done: bool,
    pub created_at: Timestamp,
}

/// Insert DTO for a new task. Inserted with `done = false`.
#[derive(Debug, Clone)]
pub struct NewTask {
    pub log_date: LogDate,
    pub description: String,
}
