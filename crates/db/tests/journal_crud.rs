//! Integration tests for the repository layer against a real SQLite database.
//!
//! - Insert + date-scoped listing for log entries and tasks
//! - Ordering guarantees
//! - Date isolation (no cross-day leakage)
//! - Done-flag toggle semantics

use chrono::NaiveDate;
use mission_log_db::models::log_entry::NewLogEntry;
use mission_log_db::models::task::NewTask;
use mission_log_db::repositories::{LogEntryRepo, TaskRepo};
use sqlx::SqlitePool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn day(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

fn new_log(date: &str, category: &str, outcome: &str) -> NewLogEntry {
    NewLogEntry {
        log_date: day(date),
        category: category.to_string(),
        outcome: outcome.to_string(),
    }
}

fn new_task(date: &str, description: &str) -> NewTask {
    NewTask {
        log_date: day(date),
        description: description.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Log entries
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn create_log_then_list_includes_it(pool: SqlitePool) {
    let created = LogEntryRepo::create(&pool, &new_log("2024-01-01", "Focus", "3 hours deep work"))
        .await
        .unwrap();

    assert_eq!(created.log_date, day("2024-01-01"));
    assert_eq!(created.category, "Focus");
    assert_eq!(created.outcome, "3 hours deep work");

    let logs = LogEntryRepo::list_by_date(&pool, day("2024-01-01"))
        .await
        .unwrap();
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].id, created.id);
}

#[sqlx::test(migrations = "./migrations")]
async fn new_log_is_appended_after_prior_entries(pool: SqlitePool) {
    let first = LogEntryRepo::create(&pool, &new_log("2024-01-01", "Focus", "morning block"))
        .await
        .unwrap();
    let second = LogEntryRepo::create(&pool, &new_log("2024-01-01", "Admin", "inbox zero"))
        .await
        .unwrap();

    let logs = LogEntryRepo::list_by_date(&pool, day("2024-01-01"))
        .await
        .unwrap();
    let ids: Vec<i64> = logs.iter().map(|l| l.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);
}

#[sqlx::test(migrations = "./migrations")]
async fn list_logs_never_returns_other_dates(pool: SqlitePool) {
    LogEntryRepo::create(&pool, &new_log("2024-01-01", "Focus", "day one"))
        .await
        .unwrap();
    LogEntryRepo::create(&pool, &new_log("2024-01-02", "Focus", "day two"))
        .await
        .unwrap();

    let logs = LogEntryRepo::list_by_date(&pool, day("2024-01-01"))
        .await
        .unwrap();
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].outcome, "day one");

    let empty = LogEntryRepo::list_by_date(&pool, day("2023-12-31"))
        .await
        .unwrap();
    assert!(empty.is_empty());
}

// ---------------------------------------------------------------------------
// Tasks
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn create_task_starts_pending(pool: SqlitePool) {
    let task = TaskRepo::create(&pool, &new_task("2024-01-01", "Write report"))
        .await
        .unwrap();

    assert!(!task.done);
    assert_eq!(task.description, "Write report");

    let tasks = TaskRepo::list_by_date(&pool, day("2024-01-01")).await.unwrap();
    assert_eq!(tasks.len(), 1);
    assert!(!tasks[0].done);
}

#[sqlx::test(migrations = "./migrations")]
async fn list_tasks_is_in_creation_order(pool: SqlitePool) {
    let a = TaskRepo::create(&pool, &new_task("2024-01-01", "first"))
        .await
        .unwrap();
    let b = TaskRepo::create(&pool, &new_task("2024-01-01", "second"))
        .await
        .unwrap();
    let c = TaskRepo::create(&pool, &new_task("2024-01-01", "third"))
        .await
        .unwrap();

    let tasks = TaskRepo::list_by_date(&pool, day("2024-01-01")).await.unwrap();
    let ids: Vec<i64> = tasks.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![a.id, b.id, c.id]);
}

#[sqlx::test(migrations = "./migrations")]
async fn list_tasks_never_returns_other_dates(pool: SqlitePool) {
    TaskRepo::create(&pool, &new_task("2024-01-01", "day one"))
        .await
        .unwrap();
    TaskRepo::create(&pool, &new_task("2024-01-02", "day two"))
        .await
        .unwrap();

    let tasks = TaskRepo::list_by_date(&pool, day("2024-01-02")).await.unwrap();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].description, "day two");
}

// ---------------------------------------------------------------------------
// Toggle semantics
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn toggle_flips_once_and_restores_twice(pool: SqlitePool) {
    let task = TaskRepo::create(&pool, &new_task("2024-01-01", "Write report"))
        .await
        .unwrap();

    let flipped = TaskRepo::toggle_done(&pool, task.id).await.unwrap().unwrap();
    assert!(flipped.done);
    assert_eq!(flipped.id, task.id);

    let restored = TaskRepo::toggle_done(&pool, task.id).await.unwrap().unwrap();
    assert!(!restored.done);
}

#[sqlx::test(migrations = "./migrations")]
async fn toggle_unknown_id_returns_none(pool: SqlitePool) {
    let result = TaskRepo::toggle_done(&pool, 9999).await.unwrap();
    assert!(result.is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn toggle_keeps_other_fields_intact(pool: SqlitePool) {
    let task = TaskRepo::create(&pool, &new_task("2024-01-01", "Write report"))
        .await
        .unwrap();

    let toggled = TaskRepo::toggle_done(&pool, task.id).await.unwrap().unwrap();
    assert_eq!(toggled.log_date, task.log_date);
    assert_eq!(toggled.description, task.description);
    assert_eq!(toggled.created_at, task.created_at);
}
