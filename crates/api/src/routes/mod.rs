pub mod health;
pub mod journal;

use axum::Router;

use crate::state::AppState;

/// Build the application route tree (everything except `/health`).
///
/// Route hierarchy:
///
/// ```text
/// GET  /              home page for a day (?day=, default today)
/// POST /log           add a log entry, redirect to its day
/// POST /task          add a task, redirect to its day
/// POST /task/toggle   flip a task's done flag, redirect to its day
/// GET  /export        one day as a CSV attachment (?date=, default today)
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new().merge(journal::router())
}
