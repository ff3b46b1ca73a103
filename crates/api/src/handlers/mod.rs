//! Request handlers.
//!
//! Each submodule provides async handler functions for one part of the
//! surface. Handlers resolve the target day, validate input via
//! `mission-log-core`, delegate to the repositories in `mission-log-db`,
//! and map errors via [`crate::error::AppError`].

pub mod export;
pub mod home;
pub mod logs;
pub mod tasks;
