//! Handlers for task submission and the done-flag toggle.

use axum::extract::State;
use axum::response::{IntoResponse, Redirect};
use axum::Form;

use mission_log_core::error::CoreError;
use mission_log_core::journal::validate_description;
use mission_log_core::types::DbId;
use mission_log_db::models::task::NewTask;
use mission_log_db::repositories::TaskRepo;

use crate::error::{AppError, AppResult};
use crate::query::resolve_day;
use crate::state::AppState;

/// Form fields for POST /task.
#[derive(Debug, serde::Deserialize)]
pub struct AddTaskForm {
    pub date: Option<String>,
    pub description: String,
}

/// Form fields for POST /task/toggle.
#[derive(Debug, serde::Deserialize)]
pub struct ToggleTaskForm {
    pub task_id: DbId,
}

/// POST /task
///
/// Add a pending task for the given day, then redirect back to that day.
pub async fn add_task(
    State(state): State<AppState>,
    Form(input): Form<AddTaskForm>,
) -> AppResult<impl IntoResponse> {
    let log_date = resolve_day(input.date.as_deref())?;

    validate_description(&input.description).map_err(CoreError::Validation)?;

    let task = TaskRepo::create(
        &state.pool,
        &NewTask {
            log_date,
            description: input.description,
        },
    )
    .await?;

    tracing::info!(task_id = task.id, log_date = %task.log_date, "Task created");

    Ok(Redirect::to(&format!("/?day={log_date}")))
}

/// POST /task/toggle
///
/// Flip the done flag of one task, then redirect to that task's day.
/// 404 if the id does not resolve.
pub async fn toggle_task(
    State(state): State<AppState>,
    Form(input): Form<ToggleTaskForm>,
) -> AppResult<impl IntoResponse> {
    let task = TaskRepo::toggle_done(&state.pool, input.task_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Task",
            id: input.task_id,
        }))?;

    tracing::info!(task_id = task.id, done = task.done, "Task toggled");

    Ok(Redirect::to(&format!("/?day={}", task.log_date)))
}
