//! Repository for the `tasks` table.

use chrono::Utc;
use mission_log_core::types::{DbId, LogDate};
use sqlx::SqlitePool;

use crate::models::task::{NewTask, Task};

/// Column list for tasks queries.
const COLUMNS: &str = "id, log_date, description, done, created_at";

/// Provides insert, date-scoped read, and done-flag toggle operations
/// for tasks. Tasks are never deleted.
pub struct TaskRepo;

impl TaskRepo {
    /// Insert a new task with `done = false`, returning the created row.
    pub async fn create(pool: &SqlitePool, input: &NewTask) -> Result<Task, sqlx::Error> {
        let query = format!(
            "INSERT INTO tasks (log_date, description, done, created_at)
             VALUES (?1, ?2, 0, ?3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(input.log_date)
            .bind(&input.description)
            .bind(Utc::now())
            .fetch_one(pool)
            .await
    }

    /// List all tasks for a date, ordered by id ascending (creation order).
    pub async fn list_by_date(
        pool: &SqlitePool,
        log_date: LogDate,
    ) -> Result<Vec<Task>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM tasks
             WHERE log_date = ?1
             ORDER BY id ASC"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(log_date)
            .fetch_all(pool)
            .await
    }

    /// Flip the done flag of a task, returning the updated row.
    ///
    /// A single flip per call: two calls restore the original value.
    /// Returns `None` if no task has the given id.
    pub async fn toggle_done(pool: &SqlitePool, id: DbId) -> Result<Option<Task>, sqlx::Error> {
        let query = format!(
            "UPDATE tasks SET done = NOT done
             WHERE id = ?1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
