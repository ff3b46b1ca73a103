//! Handler for log entry submission.

use axum::extract::State;
use axum::response::{IntoResponse, Redirect};
use axum::Form;

use mission_log_core::error::CoreError;
use mission_log_core::journal::{validate_category, validate_outcome};
use mission_log_db::models::log_entry::NewLogEntry;
use mission_log_db::repositories::LogEntryRepo;

use crate::error::AppResult;
use crate::query::resolve_day;
use crate::state::AppState;

/// Form fields for POST /log.
#[derive(Debug, serde::Deserialize)]
pub struct AddLogForm {
    pub date: Option<String>,
    pub category: String,
    pub outcome: String,
}

/// POST /log
///
/// Record a log entry for the given day, then redirect back to that day.
pub async fn add_log(
    State(state): State<AppState>,
    Form(input): Form<AddLogForm>,
) -> AppResult<impl IntoResponse> {
    let log_date = resolve_day(input.date.as_deref())?;

    validate_category(&input.category).map_err(CoreError::Validation)?;
    validate_outcome(&input.outcome).map_err(CoreError::Validation)?;

    let entry = LogEntryRepo::create(
        &state.pool,
        &NewLogEntry {
            log_date,
            category: input.category,
            outcome: input.outcome,
        },
    )
    .await?;

    tracing::info!(
        entry_id = entry.id,
        log_date = %entry.log_date,
        category = %entry.category,
        "Log entry created"
    );

    Ok(Redirect::to(&format!("/?day={log_date}")))
}
