//! Handler for the CSV day export.

use axum::extract::{Query, State};
use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use mission_log_core::export::build_day_csv;
use mission_log_db::repositories::{LogEntryRepo, TaskRepo};

use crate::error::AppResult;
use crate::query::{resolve_day, ExportParams};
use crate::state::AppState;

/// GET /export?date=YYYY-MM-DD
///
/// Serialize one day's logs and tasks as a downloadable CSV. A day with
/// no rows yields the header line only, not an error.
pub async fn export_day(
    State(state): State<AppState>,
    Query(params): Query<ExportParams>,
) -> AppResult<impl IntoResponse> {
    let log_date = resolve_day(params.date.as_deref())?;

    let logs = LogEntryRepo::list_by_date(&state.pool, log_date).await?;
    let tasks = TaskRepo::list_by_date(&state.pool, log_date).await?;

    let log_rows: Vec<_> = logs
        .iter()
        .map(|l| (l.created_at, l.category.clone(), l.outcome.clone()))
        .collect();
    let task_rows: Vec<_> = tasks
        .iter()
        .map(|t| (t.created_at, t.description.clone(), t.done))
        .collect();

    let csv = build_day_csv(&log_rows, &task_rows);

    tracing::info!(
        log_date = %log_date,
        logs = log_rows.len(),
        tasks = task_rows.len(),
        "Day exported as CSV"
    );

    Ok((
        StatusCode::OK,
        [
            (CONTENT_TYPE, "text/csv".to_string()),
            (
                CONTENT_DISPOSITION,
                format!("attachment; filename=\"mission_log_{log_date}.csv\""),
            ),
        ],
        csv,
    ))
}
