use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (the pool is an `Arc` internally). Handlers hold
/// no other cross-request state; every request re-queries the database.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: mission_log_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
