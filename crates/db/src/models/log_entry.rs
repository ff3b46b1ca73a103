//! Log entry model.

use mission_log_core::types::{DbId, LogDate, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `log_entries` table. Immutable once created.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct LogEntry {
    pub id: DbId,
    pub log_date: LogDate,
    pub category: String,
    pub outcome: String,
    pub created_at: Timestamp,
}

/// Insert DTO for a new log entry. `created_at` is assigned at insert.
#[derive(Debug, Clone)]
pub struct NewLogEntry {
    pub log_date: LogDate,
    pub category: String,
    pub outcome: String,
}
