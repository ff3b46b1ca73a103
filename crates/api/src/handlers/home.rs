//! Handler for the home page.

use axum::extract::{Query, State};
use axum::response::{Html, IntoResponse};

use mission_log_db::repositories::{LogEntryRepo, TaskRepo};

use crate::error::AppResult;
use crate::query::{resolve_day, DayParams};
use crate::render::{self, PageContext};
use crate::state::AppState;

/// GET /?day=YYYY-MM-DD
///
/// Render the page for the requested day (default: today). Read-only.
pub async fn home_page(
    State(state): State<AppState>,
    Query(params): Query<DayParams>,
) -> AppResult<impl IntoResponse> {
    let log_date = resolve_day(params.day.as_deref())?;

    let logs = LogEntryRepo::list_by_date(&state.pool, log_date).await?;
    let tasks = TaskRepo::list_by_date(&state.pool, log_date).await?;

    let page = render::home_page(&PageContext {
        log_date,
        logs,
        tasks,
    });

    Ok(Html(page))
}
