//! Domain types, validation, and pure document builders for Mission Log.
//!
//! This crate has no I/O: everything here is a plain function or type that
//! the `db` and `api` crates build on.

pub mod error;
pub mod export;
pub mod journal;
pub mod types;
