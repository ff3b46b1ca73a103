//! HTTP layer for Mission Log: configuration, routing, handlers, and the
//! page renderer. `main.rs` and the integration tests both build the app
//! through [`router::build_app_router`].

pub mod config;
pub mod error;
pub mod handlers;
pub mod query;
pub mod render;
pub mod router;
pub mod routes;
pub mod state;
