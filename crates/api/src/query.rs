//! Shared request parameter types and date resolution.
//!
//! Every endpoint that is scoped to a day accepts the day as an optional
//! ISO date and falls back to the current calendar date, so the same
//! resolution lives here rather than in each handler.

use mission_log_core::types::LogDate;
use serde::Deserialize;

use crate::error::AppError;

/// Query parameters for the home page (`?day=`).
#[derive(Debug, Deserialize)]
pub struct DayParams {
    pub day: Option<String>,
}

/// Query parameters for the CSV export (`?date=`).
#[derive(Debug, Deserialize)]
pub struct ExportParams {
    pub date: Option<String>,
}

/// Resolve an optional ISO date string to a concrete day.
///
/// Missing or empty input means "today" (local calendar date). A malformed
/// value is a 400, not a 500.
pub fn resolve_day(raw: Option<&str>) -> Result<LogDate, AppError> {
    match raw {
        None => Ok(today()),
        Some(s) if s.trim().is_empty() => Ok(today()),
        Some(s) => s
            .parse()
            .map_err(|_| AppError::BadRequest(format!("Invalid date '{s}', expected YYYY-MM-DD"))),
    }
}

fn today() -> LogDate {
    chrono::Local::now().date_naive()
}
