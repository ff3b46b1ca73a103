//! Repository for the `log_entries` table.

use chrono::Utc;
use mission_log_core::types::LogDate;
use sqlx::SqlitePool;

use crate::models::log_entry::{LogEntry, NewLogEntry};

/// Column list for log_entries queries.
const COLUMNS: &str = "id, log_date, category, outcome, created_at";

/// Provides insert and date-scoped read operations for log entries.
///
/// Entries are immutable: there is no update or delete.
pub struct LogEntryRepo;

impl LogEntryRepo {
    /// Insert a new log entry, returning the created row.
    ///
    /// `created_at` is assigned here, not by the caller.
    pub async fn create(pool: &SqlitePool, input: &NewLogEntry) -> Result<LogEntry, sqlx::Error> {
        let query = format!(
            "INSERT INTO log_entries (log_date, category, outcome, created_at)
             VALUES (?1, ?2, ?3, ?4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, LogEntry>(&query)
            .bind(input.log_date)
            .bind(&input.category)
            .bind(&input.outcome)
            .bind(Utc::now())
            .fetch_one(pool)
            .await
    }

    /// List all log entries for a date, ordered by creation time ascending.
    ///
    /// `id` breaks ties so same-second inserts keep their insert order.
    pub async fn list_by_date(
        pool: &SqlitePool,
        log_date: LogDate,
    ) -> Result<Vec<LogEntry>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM log_entries
             WHERE log_date = ?1
             ORDER BY created_at ASC, id ASC"
        );
        sqlx::query_as::<_, LogEntry>(&query)
            .bind(log_date)
            .fetch_all(pool)
            .await
    }
}
