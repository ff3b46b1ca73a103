//! Route definitions for the day journal: page view, mutations, export.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{export, home, logs, tasks};
use crate::state::AppState;

/// Journal routes mounted at the root.
///
/// ```text
/// GET  /              -> home_page
/// POST /log           -> add_log
/// POST /task          -> add_task
/// POST /task/toggle   -> toggle_task
/// GET  /export        -> export_day
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home_page))
        .route("/log", post(logs::add_log))
        .route("/task", post(tasks::add_task))
        .route("/task/toggle", post(tasks::toggle_task))
        .route("/export", get(export::export_day))
}
